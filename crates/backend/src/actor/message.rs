//! Actor message types
//!
//! Every request carries exactly one [`ReplyTo`]. Messages are moved into the
//! receiving mailbox; nothing is shared or mutated after send.

use super::address::ReplyTo;
use crate::domain::frequency::FrequencyMap;

// ============================================================================
// FrequencyCounter Messages
// ============================================================================

/// Request to count the words of `text`
#[derive(Debug)]
pub struct Count {
  pub text: String,
  /// Where the single `Counted` reply goes
  pub reply_to: ReplyTo<Counted>,
}

/// Reply from the FrequencyCounter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counted {
  pub frequencies: FrequencyMap,
}

// ============================================================================
// Coordinator Messages
// ============================================================================

/// Commands understood by the Coordinator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinatorCommand {
  /// Delegate `text` to the owned FrequencyCounter
  GetFrequencies { text: String },
  /// A FrequencyCounter reply, rewrapped by the Coordinator's adapter
  AggregateFrequencies { frequencies: FrequencyMap },
}

impl From<Counted> for CoordinatorCommand {
  fn from(counted: Counted) -> Self {
    Self::AggregateFrequencies {
      frequencies: counted.frequencies,
    }
  }
}
