//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//!
//! - [`HttpBlogClient`] talks to the real backend over HTTP.
//! - [`InMemoryBlogBackend`] mimics the backend's demo mode without a
//!   network, for offline use and tests.

pub mod http;
pub mod memory;

pub use http::{ClientConfig, ErrorMessages, HttpBlogClient};
pub use memory::InMemoryBlogBackend;
