use async_trait::async_trait;
use common::Settings;
use request::{ChatCompletionsRequest, GenerationOptions};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use response::ChatCompletionsResponse;
use secrecy::{ExposeSecret, SecretString};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, error, info};

use crate::error::{ModelError, RequestFailure};
use crate::providers::ModelClient;

pub const OPENROUTER_API_BASE_URL: &str = common::settings::DEFAULT_OPENROUTER_BASE_URL;

// OpenRouter uses these two to attribute traffic to an app.
pub const HTTP_REFERER: &str = "http://127.0.0.1:8000";
pub const X_TITLE: &str = "Advance Prompt";

const PROVIDER: &str = "OpenRouter";
pub const LOAD_TIMEOUT: Duration = Duration::from_secs(10);
pub const GENERATE_TIMEOUT: Duration = Duration::from_secs(30);

pub struct OpenRouterModel {
    model_name: String,
    base_url: String,
    client: reqwest::Client,
    is_loaded: AtomicBool,
    load_timeout: Duration,
    generate_timeout: Duration,
}

impl OpenRouterModel {
    pub fn new(model_name: impl Into<String>, api_key: &SecretString) -> Result<Self, ModelError> {
        Self::with_base_url(model_name, api_key, OPENROUTER_API_BASE_URL)
    }

    /// Targets any OpenRouter-compatible host. `base_url` is the prefix that
    /// `/models` and `/chat/completions` are appended to.
    pub fn with_base_url(
        model_name: impl Into<String>,
        api_key: &SecretString,
        base_url: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let model_name = model_name.into();
        let base_url = base_url.into().trim_end_matches('/').to_string();

        let client = reqwest::Client::builder()
            .default_headers(default_headers(api_key)?)
            .build()
            .map_err(ModelError::Client)?;

        info!("Initialized {PROVIDER} client for model: {model_name}");

        Ok(Self {
            model_name,
            base_url,
            client,
            is_loaded: AtomicBool::new(false),
            load_timeout: LOAD_TIMEOUT,
            generate_timeout: GENERATE_TIMEOUT,
        })
    }

    /// Overrides the per-request deadlines of `load` and `generate`.
    pub fn with_timeouts(mut self, load: Duration, generate: Duration) -> Self {
        self.load_timeout = load;
        self.generate_timeout = generate;
        self
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, ModelError> {
        Self::with_base_url(
            &settings.model_name,
            &settings.api_key,
            &settings.openrouter_base_url,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeouts(&self) -> (Duration, Duration) {
        (self.load_timeout, self.generate_timeout)
    }

    fn connection_error(source: RequestFailure) -> ModelError {
        ModelError::Connection {
            provider: PROVIDER,
            source,
        }
    }
}

fn default_headers(api_key: &SecretString) -> Result<HeaderMap, ModelError> {
    let mut authorization = HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))
        .map_err(|_| ModelError::InvalidApiKey)?;
    authorization.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, authorization);
    headers.insert(
        HeaderName::from_static("http-referer"),
        HeaderValue::from_static(HTTP_REFERER),
    );
    headers.insert(
        HeaderName::from_static("x-title"),
        HeaderValue::from_static(X_TITLE),
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(headers)
}

#[async_trait]
impl ModelClient for OpenRouterModel {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn is_loaded(&self) -> bool {
        self.is_loaded.load(Ordering::Acquire)
    }

    async fn load(&self) -> Result<(), ModelError> {
        let url = format!("{}/models", self.base_url);
        debug!("Checking {PROVIDER} connectivity: GET {url}");

        let response = self
            .client
            .get(&url)
            .timeout(self.load_timeout)
            .send()
            .await
            .map_err(|e| Self::connection_error(e.into()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("{PROVIDER} connectivity check failed: {status}");
            return Err(Self::connection_error(RequestFailure::Status {
                status,
                body,
            }));
        }

        self.is_loaded.store(true, Ordering::Release);
        info!("{PROVIDER} model '{}' ready", self.model_name);

        Ok(())
    }

    async fn generate(
        &self,
        prompt: &str,
        options: GenerationOptions,
    ) -> Result<String, ModelError> {
        self.ensure_loaded().await?;

        let request = ChatCompletionsRequest::single_turn(&self.model_name, prompt, options);
        let url = format!("{}/chat/completions", self.base_url);
        debug!(
            "Sending {PROVIDER} chat completion for model: {} (max_tokens: {}, temperature: {})",
            request.model, request.max_tokens, request.temperature
        );

        let response = self
            .client
            .post(&url)
            .timeout(self.generate_timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| ModelError::Generation(e.into()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ModelError::Generation(e.into()))?;

        if !status.is_success() {
            error!("{PROVIDER} API error: {status} - {body}");
            return Err(ModelError::Generation(RequestFailure::Status { status, body }));
        }

        let completion: ChatCompletionsResponse = serde_json::from_str(&body).map_err(|e| {
            ModelError::Generation(RequestFailure::Malformed(format!("invalid JSON body: {e}")))
        })?;

        if let Some(usage) = &completion.usage {
            debug!(
                "Usage: prompt_tokens: {}, completion_tokens: {}, total_tokens: {}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        completion
            .first_content()
            .map(str::to_owned)
            .ok_or_else(|| {
                ModelError::Generation(RequestFailure::Malformed(
                    "missing choices[0].message.content".to_string(),
                ))
            })
    }
}
