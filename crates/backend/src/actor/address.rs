//! Actor addresses and reply routing
//!
//! An [`ActorRef`] is the sending half of an actor's mailbox. Sends never
//! wait for the receiver: the mailbox is unbounded and `tell` is a plain push.
//!
//! A [`ReplyTo`] is the single-use destination carried inside a request. It
//! can point at:
//!
//! - a mailbox of the reply type itself,
//! - a [`MessageAdapter`], which rewrites the reply into the receiving actor's
//!   own message type before delivery,
//! - a one-shot channel, used by [`ask`](super::ask::ask).
//!
//! The worker replying through a `ReplyTo` never learns which of these it is
//! talking to.

use std::{fmt, sync::Arc};

use tokio::sync::{mpsc, oneshot};

use super::handle::SendError;

// ============================================================================
// ActorRef
// ============================================================================

/// Address of an actor accepting messages of type `M`
///
/// Cheap to clone. Messages from one `ActorRef` arrive in the order they were
/// sent.
pub struct ActorRef<M> {
  tx: mpsc::UnboundedSender<M>,
  name: Arc<str>,
}

impl<M: Send + 'static> ActorRef<M> {
  /// Create a mailbox, returning its address and the receiving end
  pub fn mailbox(name: impl Into<Arc<str>>) -> (Self, mpsc::UnboundedReceiver<M>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Self { tx, name: name.into() }, rx)
  }

  /// Enqueue a message without waiting
  pub fn tell(&self, message: M) -> Result<(), SendError> {
    self.tx.send(message).map_err(|_| SendError::ActorGone)
  }

  /// Name given to the mailbox at creation, for logs
  pub fn name(&self) -> &str {
    &self.name
  }

  /// True once the receiving actor has stopped
  pub fn is_closed(&self) -> bool {
    self.tx.is_closed()
  }

  /// Build an address that accepts `R` and delivers `transform(R)` here
  pub fn adapter<R, F>(&self, transform: F) -> MessageAdapter<R, M>
  where
    F: Fn(R) -> M + Send + Sync + 'static,
  {
    MessageAdapter {
      target: self.clone(),
      transform: Arc::new(transform),
    }
  }
}

impl<M> Clone for ActorRef<M> {
  fn clone(&self) -> Self {
    Self {
      tx: self.tx.clone(),
      name: self.name.clone(),
    }
  }
}

impl<M> fmt::Debug for ActorRef<M> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ActorRef").field("name", &self.name).finish()
  }
}

// ============================================================================
// MessageAdapter
// ============================================================================

/// An address for messages of type `R` that forwards them, rewritten as `M`,
/// to an actor
pub struct MessageAdapter<R, M> {
  target: ActorRef<M>,
  transform: Arc<dyn Fn(R) -> M + Send + Sync>,
}

impl<R, M: Send + 'static> MessageAdapter<R, M> {
  /// Apply the transform and enqueue the result on the target mailbox
  pub fn tell(&self, message: R) -> Result<(), SendError> {
    self.target.tell((self.transform)(message))
  }

  pub fn target(&self) -> &ActorRef<M> {
    &self.target
  }
}

impl<R, M> Clone for MessageAdapter<R, M> {
  fn clone(&self) -> Self {
    Self {
      target: self.target.clone(),
      transform: self.transform.clone(),
    }
  }
}

impl<R, M> fmt::Debug for MessageAdapter<R, M> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MessageAdapter").field("target", &self.target.name).finish()
  }
}

/// Type-erased delivery for adapted reply addresses
trait Recipient<M>: Send + Sync {
  fn deliver(&self, message: M) -> Result<(), SendError>;
  fn name(&self) -> &str;
}

impl<R, M> Recipient<R> for MessageAdapter<R, M>
where
  R: Send + 'static,
  M: Send + 'static,
{
  fn deliver(&self, message: R) -> Result<(), SendError> {
    self.tell(message)
  }

  fn name(&self) -> &str {
    self.target.name()
  }
}

// ============================================================================
// ReplyTo
// ============================================================================

/// Destination for exactly one reply of type `M`
///
/// Consumed by [`ReplyTo::tell`], so a request can be answered at most once.
pub struct ReplyTo<M> {
  inner: ReplyInner<M>,
}

enum ReplyInner<M> {
  Mailbox(ActorRef<M>),
  Adapted(Box<dyn Recipient<M>>),
  Once(oneshot::Sender<M>),
}

impl<M: Send + 'static> ReplyTo<M> {
  /// Send the reply
  ///
  /// Fails with [`SendError::ActorGone`] if the destination no longer exists.
  pub fn tell(self, message: M) -> Result<(), SendError> {
    match self.inner {
      ReplyInner::Mailbox(target) => target.tell(message),
      ReplyInner::Adapted(adapter) => adapter.deliver(message),
      ReplyInner::Once(tx) => tx.send(message).map_err(|_| SendError::ActorGone),
    }
  }

  /// Reply destination backed by a one-shot channel
  pub fn once(tx: oneshot::Sender<M>) -> Self {
    Self {
      inner: ReplyInner::Once(tx),
    }
  }
}

impl<M: Send + 'static> From<ActorRef<M>> for ReplyTo<M> {
  fn from(target: ActorRef<M>) -> Self {
    Self {
      inner: ReplyInner::Mailbox(target),
    }
  }
}

impl<R, M> From<MessageAdapter<R, M>> for ReplyTo<R>
where
  R: Send + 'static,
  M: Send + 'static,
{
  fn from(adapter: MessageAdapter<R, M>) -> Self {
    Self {
      inner: ReplyInner::Adapted(Box::new(adapter)),
    }
  }
}

impl<M> fmt::Debug for ReplyTo<M> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.inner {
      ReplyInner::Mailbox(target) => f.debug_tuple("ReplyTo::Mailbox").field(&target.name).finish(),
      ReplyInner::Adapted(adapter) => f.debug_tuple("ReplyTo::Adapted").field(&adapter.name()).finish(),
      ReplyInner::Once(_) => f.write_str("ReplyTo::Once"),
    }
  }
}
