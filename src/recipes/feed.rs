//! Which recipes a screen lists, and in what order.

use crate::recipes::model::{Author, Ingredient, Recipe, RecipeStatus, Step};
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub const FEED_LIMIT: usize = 20;

fn newest_first(recipes: &mut [Recipe]) {
    recipes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Published recipes, newest first, capped at [`FEED_LIMIT`].
pub fn published_feed(recipes: impl IntoIterator<Item = Recipe>) -> Vec<Recipe> {
    let mut feed: Vec<Recipe> = recipes.into_iter().filter(Recipe::is_published).collect();
    newest_first(&mut feed);
    feed.truncate(FEED_LIMIT);
    feed
}

/// A user's recipes as `viewer` may see them: owners see drafts too.
pub fn profile_recipes(
    recipes: impl IntoIterator<Item = Recipe>,
    owner_id: Uuid,
    viewer_id: Option<Uuid>,
) -> Vec<Recipe> {
    let own_profile = viewer_id == Some(owner_id);
    let mut listed: Vec<Recipe> = recipes
        .into_iter()
        .filter(|r| r.owner_id == owner_id)
        .filter(|r| own_profile || r.is_published())
        .collect();
    newest_first(&mut listed);
    listed
}

/// Shown when no backend is configured.
pub fn demo_feed(now: DateTime<Utc>) -> Vec<Recipe> {
    let owner = Uuid::nil();
    vec![
        Recipe {
            id: Uuid::new_v4(),
            owner_id: owner,
            title: "Chocolate Chip Cookies".to_string(),
            image_url: None,
            ingredients: vec![Ingredient::new("2 cups", "Flour"), Ingredient::new("1 cup", "Sugar")],
            steps: vec![Step::new("Mix ingredients", 10)],
            status: RecipeStatus::Published,
            created_at: now,
            author: Some(Author {
                username: "demo_baker".to_string(),
                avatar_url: None,
            }),
        },
        Recipe {
            id: Uuid::new_v4(),
            owner_id: owner,
            title: "Banana Bread".to_string(),
            image_url: None,
            ingredients: vec![
                Ingredient::new("3 ripe", "Bananas"),
                Ingredient::new("1.5 cups", "Flour"),
            ],
            steps: vec![Step::new("Mash bananas", 5), Step::new("Bake", 60)],
            status: RecipeStatus::Published,
            created_at: now,
            author: Some(Author {
                username: "banana_lover".to_string(),
                avatar_url: None,
            }),
        },
    ]
}
