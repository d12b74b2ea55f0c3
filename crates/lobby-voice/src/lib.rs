//! Upstream voice-AI client for the Lobby receptionist server.
//!
//! Integrates with the ElevenLabs Conversational AI HTTP API. The server
//! delegates all realtime audio to the provider's browser SDK; this crate's
//! job is to mint the short-lived conversation token that authorizes a
//! client-side session, and to classify every way that can fail.

pub mod client;
pub mod config;
pub mod error;

pub use client::ConvaiClient;
pub use config::{ElevenLabsConfig, DEFAULT_AGENT_ID};
pub use error::TokenError;
