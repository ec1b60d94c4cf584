use async_trait::async_trait;
use request::GenerationOptions;

use crate::error::ModelError;

/// A remote chat-completion backend.
///
/// Each backend owns its credentials and its loaded flag; nothing is shared
/// between implementations.
#[async_trait]
pub trait ModelClient: Send + Sync {
    fn model_name(&self) -> &str;

    /// Whether a connectivity check has succeeded at least once.
    fn is_loaded(&self) -> bool;

    /// Verifies that the backend is reachable. Calling it again re-checks.
    async fn load(&self) -> Result<(), ModelError>;

    /// Precondition step for [`ModelClient::generate`]: runs [`ModelClient::load`]
    /// only when no check has succeeded yet.
    ///
    /// This can hide a network round trip inside the first `generate` call.
    /// Callers that need predictable latency should call `load` up front.
    async fn ensure_loaded(&self) -> Result<(), ModelError> {
        if self.is_loaded() {
            return Ok(());
        }
        self.load().await
    }

    /// Sends `prompt` as a single user message and returns the first
    /// completion's text.
    async fn generate(
        &self,
        prompt: &str,
        options: GenerationOptions,
    ) -> Result<String, ModelError>;
}
