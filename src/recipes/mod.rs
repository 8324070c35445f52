//! Recipe records and the view logic built on them.

pub mod draft;
pub mod feed;
pub mod model;
pub mod stats;
pub mod time;
pub mod votes;

pub use draft::RecipeDraft;
pub use model::{Author, Ingredient, Interaction, Recipe, RecipeStatus, Step, UserProfile, VoteKind};
pub use stats::VoteTally;
pub use votes::{toggle_vote, InteractionStore, MemoryInteractionStore, VoteOutcome};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid recipe: {reason}")]
    Invalid { reason: String },

    #[error("No row at index {index}")]
    IndexOutOfRange { index: usize },
}

pub type StoreResult<T> = Result<T, StoreError>;
