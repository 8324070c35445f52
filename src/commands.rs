use crate::engine::{AssistantGateway, ConversationRequest, RecipeContext};
use crate::llm::GatewayConfig;
use crate::recipes::{feed, stats, time, Ingredient, Step};
use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Parser, Debug)]
#[command(name = "crumbly", about = "Talk to Crumble, the Crumbly baking companion")]
pub struct Cli {
    /// TOML file with endpoint settings; environment variables override it.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print Crumble's greeting for new users.
    Welcome,
    /// Send one message and print the full response as JSON.
    Chat {
        message: String,
        /// JSON file describing the recipe in progress.
        #[arg(long)]
        context: Option<PathBuf>,
    },
    /// Ask for feedback on a draft recipe.
    Advice {
        #[arg(long)]
        title: String,
        /// "quantity:name", repeatable.
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
        /// "instruction:minutes", repeatable.
        #[arg(long = "step")]
        steps: Vec<String>,
    },
    /// List the demo feed.
    Feed,
}

/* ---------- argument parsing ---------- */

pub fn parse_ingredient(raw: &str) -> Result<Ingredient> {
    match raw.split_once(':') {
        Some((quantity, name)) if !name.trim().is_empty() => {
            Ok(Ingredient::new(quantity.trim(), name.trim()))
        }
        _ => bail!("ingredient must look like \"quantity:name\", got {:?}", raw),
    }
}

pub fn parse_step(raw: &str) -> Result<Step> {
    match raw.rsplit_once(':') {
        Some((instruction, minutes)) => {
            let minutes = minutes
                .trim()
                .parse()
                .with_context(|| format!("step duration in {:?} is not a number", raw))?;
            Ok(Step::new(instruction.trim(), minutes))
        }
        None => Ok(Step::new(raw.trim(), 0)),
    }
}

fn load_context(path: &Path) -> Result<RecipeContext> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading recipe context {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing recipe context {}", path.display()))
}

/* ---------- dispatch ---------- */

fn build_gateway(config: Option<&Path>) -> Result<AssistantGateway> {
    let config = GatewayConfig::load(config)?;
    debug!(?config, "Configuration loaded");
    if config.api_key.is_none() {
        warn!(
            "{} is not set; Crumble will answer from scripted replies",
            crate::llm::config::ENV_API_KEY
        );
    }
    AssistantGateway::new(&config).context("building assistant gateway")
}

pub async fn execute(cli: Cli) -> Result<()> {
    let Cli { config, command } = cli;

    match command {
        Command::Feed => print_feed(),
        Command::Welcome => {
            let gateway = build_gateway(config.as_deref())?;
            println!("{}", gateway.welcome_message().await);
        }
        Command::Chat { message, context } => {
            if message.trim().is_empty() {
                bail!("message cannot be empty");
            }
            let mut request = ConversationRequest::new(message);
            if let Some(path) = context {
                request = request.with_context(load_context(&path)?);
            }
            let gateway = build_gateway(config.as_deref())?;
            let response = gateway.converse(&request).await;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::Advice {
            title,
            ingredients,
            steps,
        } => {
            let ingredients = ingredients
                .iter()
                .map(|i| parse_ingredient(i))
                .collect::<Result<Vec<_>>>()?;
            let steps = steps.iter().map(|s| parse_step(s)).collect::<Result<Vec<_>>>()?;
            let gateway = build_gateway(config.as_deref())?;
            println!("{}", gateway.recipe_advice(&title, &ingredients, &steps).await);
        }
    }

    Ok(())
}

fn print_feed() {
    let now = Utc::now();
    for recipe in feed::published_feed(feed::demo_feed(now)) {
        let author = recipe
            .author
            .as_ref()
            .map(|a| a.username.as_str())
            .unwrap_or("unknown");
        println!(
            "{} by {} · {} · {} min · {} ingredients",
            recipe.title,
            author,
            time::format_time_ago(recipe.created_at, now),
            stats::total_time(&recipe.steps),
            stats::ingredient_count(&recipe.ingredients),
        );
    }
}
