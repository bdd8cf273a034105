//! Imperative shell around the pure machine definition.
//!
//! An [`Actor`] owns the current snapshot, applies events sequentially and
//! pushes every new snapshot to its subscribers.

#[allow(clippy::module_inception)]
mod actor;
mod config;
mod subscription;

pub use actor::{Actor, SendOutcome};
pub use config::{ActorConfig, DEFAULT_HISTORY_LIMIT};
pub use subscription::Subscription;
