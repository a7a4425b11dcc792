//! Crate-level tests for the tracker built on the in-memory runtime.
