//! Core State trait for state machine states.
//!
//! All state machine states must implement this trait, which provides
//! pure methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure - no side effects. States are the discrete labels
/// of a machine; the data threaded through transitions lives in the
/// machine's context instead.
///
/// # Required Traits
///
/// - `Clone`: States are copied into snapshots and history
/// - `PartialEq`: Transition lookup compares the current state
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: Snapshots are serializable for the rendering layer
///
/// # Example
///
/// ```rust
/// use quizset::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Open,
///     Closed,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "open",
///             Self::Closed => "closed",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Open.name(), "open");
/// assert!(!DoorState::Closed.is_final());
/// ```
pub trait State: Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`; cyclic machines never
    /// report a final state.
    fn is_final(&self) -> bool {
        false
    }
}
