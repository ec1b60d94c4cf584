//! Clients for remote chat-completion models.

pub mod error;
pub mod openrouter;
pub mod providers;

pub use error::{ModelError, RequestFailure};
pub use openrouter::OpenRouterModel;
pub use providers::ModelClient;
pub use request::GenerationOptions;
