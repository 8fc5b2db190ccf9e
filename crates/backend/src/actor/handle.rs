//! Actor handles for communicating with actors
//!
//! Handles are cheap to clone and wrap an actor's address with typed
//! convenience methods. Fire-and-forget sends return immediately; the ask
//! helper is the only method that waits.

use std::time::Duration;

use super::{
  address::{ActorRef, ReplyTo},
  ask::{AskError, ask},
  message::{CoordinatorCommand, Count, Counted},
};
use crate::domain::frequency::FrequencyMap;

// ============================================================================
// FrequencyCounter Handle
// ============================================================================

/// Handle to communicate with a FrequencyCounterActor
#[derive(Clone, Debug)]
pub struct FrequencyCounterHandle {
  addr: ActorRef<Count>,
}

impl FrequencyCounterHandle {
  pub fn new(addr: ActorRef<Count>) -> Self {
    Self { addr }
  }

  pub fn addr(&self) -> &ActorRef<Count> {
    &self.addr
  }

  /// Send a count request; the reply goes to `reply_to`
  pub fn count(&self, text: impl Into<String>, reply_to: impl Into<ReplyTo<Counted>>) -> Result<(), SendError> {
    self.addr.tell(Count {
      text: text.into(),
      reply_to: reply_to.into(),
    })
  }

  /// Count `text` and wait for the result, failing with
  /// [`AskError::Timeout`] if no reply arrives within `timeout`
  pub async fn ask_count(&self, text: impl Into<String>, timeout: Duration) -> Result<FrequencyMap, AskError> {
    let text = text.into();
    let counted = ask(&self.addr, |reply_to| Count { text, reply_to }, timeout).await?;
    Ok(counted.frequencies)
  }
}

// ============================================================================
// Coordinator Handle
// ============================================================================

/// Handle to communicate with a CoordinatorActor
#[derive(Clone, Debug)]
pub struct CoordinatorHandle {
  addr: ActorRef<CoordinatorCommand>,
}

impl CoordinatorHandle {
  pub fn new(addr: ActorRef<CoordinatorCommand>) -> Self {
    Self { addr }
  }

  pub fn addr(&self) -> &ActorRef<CoordinatorCommand> {
    &self.addr
  }

  /// Ask the coordinator to delegate `text` to its worker
  ///
  /// Returns as soon as the command is queued. The result is only observable
  /// through the coordinator's aggregation sink.
  pub fn get_frequencies(&self, text: impl Into<String>) -> Result<(), SendError> {
    self.addr.tell(CoordinatorCommand::GetFrequencies { text: text.into() })
  }
}

// ============================================================================
// Errors
// ============================================================================

/// Error when sending to an actor
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
  #[error("Actor has shut down")]
  ActorGone,
}
