//! The recipe being composed before it is saved.

use crate::engine::types::RecipeContext;
use crate::recipes::model::{Ingredient, Recipe, RecipeStatus, Step};
use crate::recipes::{StoreError, StoreResult};
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDraft {
    pub title: String,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<Step>,
    pub is_public: bool,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            ingredients: vec![Ingredient::default()],
            steps: vec![Step::default()],
            is_public: true,
        }
    }
}

impl RecipeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_ingredient(&mut self) {
        self.ingredients.push(Ingredient::default());
    }

    pub fn update_ingredient(&mut self, index: usize, ingredient: Ingredient) -> StoreResult<()> {
        let slot = self
            .ingredients
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index })?;
        *slot = ingredient;
        Ok(())
    }

    pub fn remove_ingredient(&mut self, index: usize) -> StoreResult<Ingredient> {
        if index >= self.ingredients.len() {
            return Err(StoreError::IndexOutOfRange { index });
        }
        Ok(self.ingredients.remove(index))
    }

    pub fn add_step(&mut self) {
        self.steps.push(Step::default());
    }

    pub fn update_step(&mut self, index: usize, step: Step) -> StoreResult<()> {
        let slot = self
            .steps
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index })?;
        *slot = step;
        Ok(())
    }

    pub fn remove_step(&mut self, index: usize) -> StoreResult<Step> {
        if index >= self.steps.len() {
            return Err(StoreError::IndexOutOfRange { index });
        }
        Ok(self.steps.remove(index))
    }

    pub fn toggle_step(&mut self, index: usize) -> StoreResult<bool> {
        let step = self
            .steps
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index })?;
        step.completed = !step.completed;
        Ok(step.completed)
    }

    /// Nothing worth asking Crumble about yet.
    pub fn is_blank(&self) -> bool {
        self.title.is_empty()
            && self.ingredients.len() == 1
            && self.ingredients[0].name.is_empty()
    }

    pub fn to_context(&self) -> RecipeContext {
        RecipeContext::new(self.title.clone(), self.ingredients.clone(), self.steps.clone())
    }

    /// Builds the row to insert, dropping blank ingredients and steps.
    pub fn publish(&self, owner_id: Uuid, now: DateTime<Utc>) -> StoreResult<Recipe> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(StoreError::Invalid {
                reason: "a recipe needs a title".to_string(),
            });
        }

        Ok(Recipe {
            id: Uuid::new_v4(),
            owner_id,
            title: title.to_string(),
            image_url: None,
            ingredients: self
                .ingredients
                .iter()
                .filter(|i| !i.name.trim().is_empty())
                .cloned()
                .collect(),
            steps: self
                .steps
                .iter()
                .filter(|s| !s.instruction.trim().is_empty())
                .cloned()
                .collect(),
            status: if self.is_public {
                RecipeStatus::Published
            } else {
                RecipeStatus::Draft
            },
            created_at: now,
            author: None,
        })
    }
}
