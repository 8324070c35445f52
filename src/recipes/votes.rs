//! Up/down votes on recipes.

use crate::recipes::model::{Interaction, VoteKind};
use crate::recipes::stats::VoteTally;
use crate::recipes::StoreResult;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};
use uuid::Uuid;

/// The slice of the backend's interactions table the client needs.
#[async_trait]
pub trait InteractionStore: Send + Sync {
    async fn find_vote(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
        kind: VoteKind,
    ) -> StoreResult<Option<Interaction>>;

    async fn insert(&self, interaction: Interaction) -> StoreResult<()>;

    async fn delete(&self, id: Uuid) -> StoreResult<()>;

    async fn list_for_recipe(&self, recipe_id: Uuid) -> StoreResult<Vec<Interaction>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    Added,
    Removed,
}

/// Voting twice the same way takes the vote back.
#[instrument(skip(store))]
pub async fn toggle_vote(
    store: &dyn InteractionStore,
    user_id: Uuid,
    recipe_id: Uuid,
    kind: VoteKind,
) -> StoreResult<VoteOutcome> {
    if let Some(existing) = store.find_vote(user_id, recipe_id, kind).await? {
        store.delete(existing.id).await?;
        debug!(interaction_id = %existing.id, "Vote removed");
        return Ok(VoteOutcome::Removed);
    }

    let interaction = Interaction {
        id: Uuid::new_v4(),
        recipe_id,
        user_id,
        kind,
        comment: None,
        created_at: Utc::now(),
    };
    debug!(interaction_id = %interaction.id, "Vote added");
    store.insert(interaction).await?;
    Ok(VoteOutcome::Added)
}

pub async fn tally(store: &dyn InteractionStore, recipe_id: Uuid) -> StoreResult<VoteTally> {
    let interactions = store.list_for_recipe(recipe_id).await?;
    Ok(VoteTally::from_interactions(&interactions))
}

/// Process-local store, used in demo mode and in tests.
#[derive(Default)]
pub struct MemoryInteractionStore {
    rows: RwLock<HashMap<Uuid, Interaction>>,
}

impl MemoryInteractionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn row_count(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait]
impl InteractionStore for MemoryInteractionStore {
    async fn find_vote(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
        kind: VoteKind,
    ) -> StoreResult<Option<Interaction>> {
        let rows = self.rows.read().await;
        Ok(rows
            .values()
            .find(|i| i.user_id == user_id && i.recipe_id == recipe_id && i.kind == kind)
            .cloned())
    }

    async fn insert(&self, interaction: Interaction) -> StoreResult<()> {
        self.rows.write().await.insert(interaction.id, interaction);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        self.rows.write().await.remove(&id);
        Ok(())
    }

    async fn list_for_recipe(&self, recipe_id: Uuid) -> StoreResult<Vec<Interaction>> {
        let rows = self.rows.read().await;
        Ok(rows
            .values()
            .filter(|i| i.recipe_id == recipe_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_toggle_adds_then_removes() {
        let store = MemoryInteractionStore::new();
        let (user, recipe) = (Uuid::new_v4(), Uuid::new_v4());

        let first = toggle_vote(&store, user, recipe, VoteKind::Upvote).await.unwrap();
        assert_eq!(first, VoteOutcome::Added);
        assert_eq!(store.row_count().await, 1);

        let second = toggle_vote(&store, user, recipe, VoteKind::Upvote).await.unwrap();
        assert_eq!(second, VoteOutcome::Removed);
        assert_eq!(store.row_count().await, 0);
    }

    #[tokio::test]
    async fn test_up_and_down_are_separate_rows() {
        let store = MemoryInteractionStore::new();
        let (user, recipe) = (Uuid::new_v4(), Uuid::new_v4());

        toggle_vote(&store, user, recipe, VoteKind::Upvote).await.unwrap();
        toggle_vote(&store, user, recipe, VoteKind::Downvote).await.unwrap();
        toggle_vote(&store, Uuid::new_v4(), recipe, VoteKind::Upvote).await.unwrap();

        let counts = tally(&store, recipe).await.unwrap();
        assert_eq!(counts, VoteTally { upvotes: 2, downvotes: 1 });
        assert_eq!(tally(&store, Uuid::new_v4()).await.unwrap(), VoteTally::default());
    }
}
