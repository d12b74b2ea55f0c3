use crate::config::ElevenLabsConfig;
use crate::error::TokenError;
use reqwest::header;
use serde_json::Value;
use std::time::Duration;

/// Upstream response bodies are returned to the caller in full, but log
/// lines carry at most this many bytes of them.
const MAX_LOGGED_BODY_BYTES: usize = 500;

/// Client for the ElevenLabs Conversational AI API.
///
/// Holds a single shared `reqwest::Client` with the configured timeout.
/// Constructed once at startup; the health endpoint reports whether
/// construction succeeded.
#[derive(Debug)]
pub struct ConvaiClient {
    config: ElevenLabsConfig,
    http: reqwest::Client,
}

impl ConvaiClient {
    /// Builds a client with the configured request timeout.
    pub fn new(config: ElevenLabsConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, http })
    }

    pub fn agent_id(&self) -> &str {
        &self.config.agent_id
    }

    /// Whether an API key is configured. Token issuance fails fast without one.
    pub fn has_api_key(&self) -> bool {
        !self.config.api_key.is_empty()
    }

    /// Fetches a short-lived conversation token scoped to the configured agent.
    ///
    /// A single GET against the upstream token endpoint; no retries. The
    /// token authorizes one client-side realtime session and is never held
    /// beyond the request that fetched it.
    pub async fn conversation_token(&self) -> Result<String, TokenError> {
        if self.config.api_key.is_empty() {
            tracing::error!("conversation token requested but ELEVENLABS_API_KEY is not configured");
            return Err(TokenError::MissingApiKey);
        }

        let url = format!(
            "{}/v1/convai/conversation/token?agent_id={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.agent_id
        );

        let resp = self
            .http
            .get(&url)
            .header("xi-api-key", &self.config.api_key)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "network error contacting ElevenLabs");
                TokenError::Network(e)
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!(error = %e, "network error reading ElevenLabs response");
            TokenError::Network(e)
        })?;

        if !status.is_success() {
            tracing::error!(
                status = status.as_u16(),
                response = truncate_for_log(&body),
                "ElevenLabs token request failed"
            );
            return Err(TokenError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let data: Value = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                response = truncate_for_log(&body),
                "ElevenLabs returned a non-JSON success body"
            );
            TokenError::Unexpected(e.to_string())
        })?;

        // Two field names are in circulation; first non-empty string wins.
        let token = token_field(&data, "token").or_else(|| token_field(&data, "conversationToken"));

        match token {
            Some(token) => {
                tracing::info!(
                    agent_id = %self.config.agent_id,
                    "conversation token generated"
                );
                Ok(token.to_string())
            }
            None => {
                tracing::error!(
                    response = truncate_for_log(&body),
                    "ElevenLabs response missing token"
                );
                Err(TokenError::MissingToken)
            }
        }
    }
}

fn token_field<'a>(data: &'a Value, field: &str) -> Option<&'a str> {
    data.get(field)
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
}

/// Truncates to `MAX_LOGGED_BODY_BYTES`, backing off to a char boundary.
fn truncate_for_log(body: &str) -> &str {
    if body.len() <= MAX_LOGGED_BODY_BYTES {
        return body;
    }
    let mut end = MAX_LOGGED_BODY_BYTES;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
