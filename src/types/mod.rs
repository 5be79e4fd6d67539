//! Core types shared by the client and the wire layer.

pub mod generation;
pub mod message;

pub use generation::GenerationSettings;
pub use message::{Message, Role};
