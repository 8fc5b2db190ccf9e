//! Ask-path E2E tests against a bare FrequencyCounter.
