//! Values displayed by the views.

pub mod chat;
pub mod post;

pub use chat::{ChatTurn, Transcript};
pub use post::{MediaKind, PostReference};
