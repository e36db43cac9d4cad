//! HTTP client for the blog backend.

mod client;
mod convert;
mod errors;

pub use client::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, HttpBlogClient};
pub use errors::{ErrorMessages, Operation, TransportFailure};
