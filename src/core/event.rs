//! Event trait for machine inputs.

use std::fmt::Debug;

/// Trait for events sent to a state machine.
///
/// Transitions are keyed by the event's kind, a stable tag such as
/// `"SUBMIT_ANSWER"`. Payload fields are only visible to actions.
///
/// # Example
///
/// ```rust
/// use quizset::core::Event;
///
/// #[derive(Debug)]
/// enum DoorEvent {
///     Open,
///     Knock { times: u8 },
/// }
///
/// impl Event for DoorEvent {
///     fn kind(&self) -> &'static str {
///         match self {
///             Self::Open => "OPEN",
///             Self::Knock { .. } => "KNOCK",
///         }
///     }
/// }
///
/// assert_eq!(DoorEvent::Knock { times: 2 }.kind(), "KNOCK");
/// ```
pub trait Event: Debug {
    /// Tag used to match transitions.
    fn kind(&self) -> &'static str;
}
