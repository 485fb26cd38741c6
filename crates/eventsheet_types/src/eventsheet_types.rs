//! Eventsheet Types - Core type definitions for the events-function system
//!
//! This crate contains the pure data structures describing user-authored
//! events functions: named units of visual-scripting logic exposed to the
//! rest of a game project as callable actions, conditions or expressions.
//! The structures here are passive value holders consumed by the editor,
//! the code generator and the project store.

mod container;
mod events;
mod function;
mod object_groups;
mod parameter;
mod project;

pub use container::*;
pub use events::*;
pub use function::*;
pub use object_groups::*;
pub use parameter::*;
pub use project::*;
