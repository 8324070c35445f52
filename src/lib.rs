//! Client core for Crumbly: the Crumble assistant gateway plus the recipe view
//! logic the app screens share.

pub mod commands;
pub mod engine;
pub mod llm;
pub mod personalities;
pub mod postprocessing;
pub mod recipes;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub use engine::{AssistantGateway, ConversationRequest, ConversationResponse, RecipeContext};
pub use llm::{GatewayConfig, GatewayConfigBuilder, GatewayError};

/// Installs the fmt subscriber; `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("crumbly_lib=info,crumbly=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub async fn run() -> anyhow::Result<()> {
    init_tracing();
    commands::execute(commands::Cli::parse()).await
}
