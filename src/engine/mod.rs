//! Public façade for the engine layer.

pub mod core;
pub mod types;

pub use self::core::{describe_recipe, AssistantGateway};
pub use types::{ConversationRequest, ConversationResponse, RecipeContext, ReplySource};
