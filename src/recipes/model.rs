//! Records mirrored from the hosted backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Ingredient {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: String,
}

impl Ingredient {
    pub fn new(quantity: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Step {
    #[serde(default)]
    pub instruction: String,
    /// Minutes.
    #[serde(default)]
    pub duration: u32,
    #[serde(default = "default_modality")]
    pub modality: String,
    #[serde(default)]
    pub completed: bool,
}

fn default_modality() -> String {
    "preparation".to_string()
}

impl Default for Step {
    fn default() -> Self {
        Self {
            instruction: String::new(),
            duration: 0,
            modality: default_modality(),
            completed: false,
        }
    }
}

impl Step {
    pub fn new(instruction: impl Into<String>, duration: u32) -> Self {
        Self {
            instruction: instruction.into(),
            duration,
            ..Self::default()
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecipeStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub username: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub status: RecipeStatus,
    pub created_at: DateTime<Utc>,
    /// Joined from the users table when listing.
    #[serde(default, rename = "users", skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
}

impl Recipe {
    pub fn is_published(&self) -> bool {
        self.status == RecipeStatus::Published
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VoteKind {
    Upvote,
    Downvote,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Interaction {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: VoteKind,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
