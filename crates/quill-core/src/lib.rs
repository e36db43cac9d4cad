//! # Quill Core
//!
//! The domain layer of the Quill authoring client.
//! This crate holds the SEO heuristic, slug rules, the editor model and the
//! page controllers. It talks to the backend only through [`ports::BlogApi`].

pub mod assistant;
pub mod domain;
pub mod editor;
pub mod error;
pub mod form;
pub mod listing;
pub mod ports;
pub mod seo;
pub mod slug;
pub mod status;

#[cfg(test)]
mod testing;

pub use error::{ApiError, DomainError};
