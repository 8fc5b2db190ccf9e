//! FrequencyCounterActor - stateless word counting worker
//!
//! Receives [`Count`] requests, counts the words of the text and sends exactly
//! one [`Counted`] reply to the request's reply address. Requests are handled
//! one at a time in mailbox order.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::{
  address::ActorRef,
  handle::FrequencyCounterHandle,
  message::{Count, Counted},
};
use crate::domain::frequency::count_words;

/// The word counting actor
///
/// # Lifecycle
///
/// The actor runs until one of:
/// - The CancellationToken is triggered
/// - Every handle to its mailbox has been dropped
pub struct FrequencyCounterActor {
  name: String,
  rx: mpsc::UnboundedReceiver<Count>,
  cancel: CancellationToken,
}

impl FrequencyCounterActor {
  /// Spawn the actor and return a handle for sending requests
  pub fn spawn(name: impl Into<String>, cancel: CancellationToken) -> FrequencyCounterHandle {
    let name = name.into();
    let (addr, rx) = ActorRef::mailbox(name.as_str());
    let actor = Self { name, rx, cancel };
    tokio::spawn(actor.run());
    FrequencyCounterHandle::new(addr)
  }

  /// Main actor loop
  pub async fn run(mut self) {
    debug!(actor = %self.name, "FrequencyCounterActor started");

    loop {
      tokio::select! {
          biased;

          _ = self.cancel.cancelled() => {
              debug!(actor = %self.name, "FrequencyCounterActor shutting down (cancelled)");
              break;
          }

          request = self.rx.recv() => {
              match request {
                  Some(request) => self.handle_count(request),
                  None => {
                      debug!(actor = %self.name, "FrequencyCounterActor shutting down (channel closed)");
                      break;
                  }
              }
          }
      }
    }
  }

  fn handle_count(&self, request: Count) {
    let Count { text, reply_to } = request;
    let frequencies = count_words(&text);

    info!(actor = %self.name, frequencies = %frequencies, "Frequencies");

    if let Err(e) = reply_to.tell(Counted { frequencies }) {
      debug!(actor = %self.name, error = %e, "Reply destination gone, dropping result");
    }
  }
}
