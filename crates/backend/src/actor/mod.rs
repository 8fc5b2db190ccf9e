//! Actor-based concurrency primitives
//!
//! Components communicate by message passing instead of shared state.
//!
//! # Architecture
//!
//! - Each actor runs as a long-lived task with its own event loop
//! - Mailboxes are unbounded `mpsc` channels, so sending never waits
//! - State is owned, not shared; messages are moved, never mutated after send
//! - Replies are routed through a single-use [`ReplyTo`], which may rewrite
//!   the reply into the receiver's own message type
//!
//! # Actors
//!
//! - [`FrequencyCounterActor`]: Stateless worker that counts words
//! - [`CoordinatorActor`]: Owns a FrequencyCounter and delegates to it
//! - [`ActorSystem`]: Builds the actor graph and owns shutdown
//!
//! The [`ask`] function layers request/response with a deadline on top.

pub mod address;
pub mod ask;
pub mod coordinator;
pub mod counter;
pub mod handle;
pub mod message;
mod system;


pub use address::{ActorRef, MessageAdapter, ReplyTo};
pub use ask::{AskError, ask};
pub use coordinator::{CoordinatorActor, CoordinatorConfig};
pub use counter::FrequencyCounterActor;
pub use handle::{CoordinatorHandle, FrequencyCounterHandle, SendError};
pub use system::{ActorSystem, SystemError};
