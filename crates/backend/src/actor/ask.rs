//! Ask pattern: request/response with a deadline on top of fire-and-forget sends
//!
//! The request is built around a fresh one-shot reply address, sent, and the
//! reply is raced against a timer. A timeout is an error, never an empty
//! success, so callers can tell "no answer" apart from "empty answer".

use std::time::Duration;

use tokio::sync::oneshot;
use tracing::{debug, warn};

use super::address::{ActorRef, ReplyTo};

/// Failure outcomes of [`ask`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AskError {
  #[error("No reply within {0:?}")]
  Timeout(Duration),
  #[error("Actor has shut down")]
  ActorGone,
  #[error("Request was dropped without a reply")]
  NoReply,
}

/// Send the request built by `build` to `target` and wait up to `timeout`
/// for its reply
pub async fn ask<Req, Resp, F>(target: &ActorRef<Req>, build: F, timeout: Duration) -> Result<Resp, AskError>
where
  Req: Send + 'static,
  Resp: Send + 'static,
  F: FnOnce(ReplyTo<Resp>) -> Req,
{
  let (reply_tx, reply_rx) = oneshot::channel();
  target
    .tell(build(ReplyTo::once(reply_tx)))
    .map_err(|_| AskError::ActorGone)?;

  debug!(actor = target.name(), timeout = ?timeout, "Awaiting ask reply");

  match tokio::time::timeout(timeout, reply_rx).await {
    Ok(Ok(reply)) => Ok(reply),
    Ok(Err(_)) => Err(AskError::NoReply),
    Err(_) => {
      warn!(actor = target.name(), timeout = ?timeout, "Ask timed out");
      Err(AskError::Timeout(timeout))
    }
  }
}
