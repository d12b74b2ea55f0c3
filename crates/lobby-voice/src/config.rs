use serde::{Deserialize, Serialize};
use std::fmt;

/// Agent used when no `ELEVENLABS_AGENT_ID` is configured.
pub const DEFAULT_AGENT_ID: &str = "agent_4401k9ybxkm3fvbtdhnj8s57fb53";

fn default_agent_id() -> String {
    DEFAULT_AGENT_ID.to_string()
}

fn default_base_url() -> String {
    "https://api.elevenlabs.io".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

/// Connection settings for the ElevenLabs Conversational AI API.
#[derive(Clone, Serialize, Deserialize)]
pub struct ElevenLabsConfig {
    /// API key. Empty means token issuance is unavailable; the server still
    /// starts and reports the missing key per request.
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Agent (voice persona) the issued tokens are scoped to.
    #[serde(default = "default_agent_id")]
    pub agent_id: String,

    /// API base URL. Overridable so tests can target a local stand-in.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout for the token request, in seconds. Default: 15.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ElevenLabsConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            agent_id: default_agent_id(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl fmt::Debug for ElevenLabsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElevenLabsConfig")
            .field("api_key", &"[REDACTED]")
            .field("agent_id", &self.agent_id)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ElevenLabsConfig {
    pub fn new(api_key: impl Into<String>, agent_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            agent_id: agent_id.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let config: ElevenLabsConfig = toml::from_str("api_key = \"sk-test\"").unwrap();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.agent_id, DEFAULT_AGENT_ID);
        assert_eq!(config.base_url, "https://api.elevenlabs.io");
        assert_eq!(config.timeout_secs, 15);
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = ElevenLabsConfig::new("sk-secret", "agent-1");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn api_key_never_serialized() {
        let config = ElevenLabsConfig::new("sk-secret", "agent-1");
        let rendered = serde_json::to_string(&config).unwrap();
        assert!(!rendered.contains("sk-secret"));
    }
}
