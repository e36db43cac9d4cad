//! Domain entities - the core business objects.

mod health;
mod post;

pub use health::HealthStatus;
pub use post::{Post, PostDraft};
