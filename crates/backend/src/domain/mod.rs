//! Domain types - word frequencies and configuration
//!
//! These types are independent of the actor runtime that moves them around.

pub mod config;
pub mod frequency;
