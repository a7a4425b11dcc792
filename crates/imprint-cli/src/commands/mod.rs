//! Command implementations.
//!
//! Every command opens a [`Session`](session::Session), which loads the
//! configuration and runs the population pass, then reports on the tracker.
//!
//! - [`tree`] - Print the dependency map
//! - [`dependents`] - Print the dependents of one file
//! - [`changed`] - Replay change events and print rebuild lists

pub mod changed;
pub mod dependents;
pub(crate) mod session;
pub mod tree;

#[cfg(test)]
mod tests;

pub use changed::execute as changed_execute;
pub use dependents::execute as dependents_execute;
pub use tree::execute as tree_execute;
