//! Figures shown on recipe cards.

use crate::recipes::model::{Ingredient, Interaction, Step, VoteKind};
use serde::Serialize;

/// Sum of step durations, in minutes.
pub fn total_time(steps: &[Step]) -> u32 {
    steps.iter().map(|s| s.duration).sum()
}

pub fn ingredient_count(ingredients: &[Ingredient]) -> usize {
    ingredients.len()
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoteTally {
    pub upvotes: u32,
    pub downvotes: u32,
}

impl VoteTally {
    pub fn from_interactions<'a>(interactions: impl IntoIterator<Item = &'a Interaction>) -> Self {
        interactions
            .into_iter()
            .fold(Self::default(), |mut tally, i| {
                match i.kind {
                    VoteKind::Upvote => tally.upvotes += 1,
                    VoteKind::Downvote => tally.downvotes += 1,
                }
                tally
            })
    }

    pub fn score(&self) -> i64 {
        self.upvotes as i64 - self.downvotes as i64
    }
}
