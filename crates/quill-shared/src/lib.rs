//! # Quill Shared
//!
//! Wire types exchanged with the blog backend.
//! The backend owns these shapes; the client only mirrors them.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
