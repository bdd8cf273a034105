//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders for declaring transition tables
//! while keeping them validated and type safe.

pub mod error;
pub mod machine;
pub mod transition;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use transition::TransitionBuilder;
