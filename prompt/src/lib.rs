//! Prompt templates and the structured data rendered into them.

pub mod error;
pub mod renderer;

pub use error::PromptError;
pub use renderer::PromptRenderer;
