//! Ports - trait definitions for external dependencies.
//! Infrastructure provides the implementations.

mod backend;

pub use backend::BlogApi;
