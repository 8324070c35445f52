//! # Generation endpoint plumbing
//!
//! Everything needed to talk to the hosted text-generation API:
//! - `config`: endpoint, model, key and timeout, loaded from file and environment
//! - `send`: request body, the `GenerationBackend` seam and the HTTP client
//! - `receive`: response body and reply extraction
//! - `error`: the single failure type every remote problem collapses into
//!
//! ```text
//! prompt → send.rs (POST generateContent) → receive.rs (candidates[0]) → reply text
//! ```

pub mod config;
pub mod error;
pub mod receive;
pub mod send;
#[cfg(test)]
pub(crate) mod test_server;

pub use config::{GatewayConfig, GatewayConfigBuilder};
pub use error::{GatewayError, GatewayResult};
pub use receive::{Candidate, GenerateContentResponse};
pub use send::{Content, GeminiClient, GenerateContentRequest, GenerationBackend, GenerationConfig, Part};
