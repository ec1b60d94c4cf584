//! Request bodies sent to an OpenAI-compatible `/chat/completions` endpoint.

use serde::Serialize;

pub mod message;

pub use message::{Message, Role};

pub const DEFAULT_MAX_TOKENS: u32 = 200;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatCompletionsRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Per-call sampling options. Unset fields use [`DEFAULT_MAX_TOKENS`] and
/// [`DEFAULT_TEMPERATURE`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GenerationOptions {
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl GenerationOptions {
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

impl ChatCompletionsRequest {
    /// A request holding exactly one user message.
    pub fn single_turn(model: &str, prompt: &str, options: GenerationOptions) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![Message::user(prompt)],
            max_tokens: options.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            temperature: options.temperature.unwrap_or(DEFAULT_TEMPERATURE),
        }
    }
}
