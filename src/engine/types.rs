//! Shared structs.

use crate::recipes::model::{Ingredient, Step};
use serde::{Deserialize, Serialize};

/// Recipe-in-progress data attached to a conversation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RecipeContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<Ingredient>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
}

impl RecipeContext {
    pub fn new(title: impl Into<String>, ingredients: Vec<Ingredient>, steps: Vec<Step>) -> Self {
        Self {
            title: Some(title.into()),
            ingredients: Some(ingredients),
            steps: Some(steps),
        }
    }

    /// `round(100 * completed / total)`, or `None` without any steps.
    pub fn completion_percentage(&self) -> Option<u8> {
        let steps = self.steps.as_ref().filter(|s| !s.is_empty())?;
        let done = steps.iter().filter(|s| s.completed).count();
        let pct = (100.0 * done as f64 / steps.len() as f64).round();
        Some(pct as u8)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversationRequest {
    pub user_message: String,
    pub context: Option<RecipeContext>,
}

impl ConversationRequest {
    pub fn new(user_message: impl Into<String>) -> Self {
        Self {
            user_message: user_message.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: RecipeContext) -> Self {
        self.context = Some(context);
        self
    }
}

/// Where a reply came from.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    Remote,
    Fallback,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversationResponse {
    pub message: String,
    pub suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_percentage: Option<u8>,
    #[serde(skip, default = "remote")]
    pub source: ReplySource,
}

fn remote() -> ReplySource {
    ReplySource::Remote
}

impl ConversationResponse {
    pub fn is_fallback(&self) -> bool {
        self.source == ReplySource::Fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(completed: bool) -> Step {
        Step {
            completed,
            ..Step::default()
        }
    }

    #[test]
    fn test_half_completed() {
        let ctx = RecipeContext {
            steps: Some(vec![step(true), step(true), step(false), step(false)]),
            ..Default::default()
        };
        assert_eq!(ctx.completion_percentage(), Some(50));
    }

    #[test]
    fn test_rounding() {
        let ctx = RecipeContext {
            steps: Some(vec![step(true), step(true), step(false)]),
            ..Default::default()
        };
        assert_eq!(ctx.completion_percentage(), Some(67));

        let ctx = RecipeContext {
            steps: Some(vec![step(true), step(false), step(false)]),
            ..Default::default()
        };
        assert_eq!(ctx.completion_percentage(), Some(33));
    }

    #[test]
    fn test_no_steps_is_omitted() {
        assert_eq!(RecipeContext::default().completion_percentage(), None);
        let ctx = RecipeContext {
            steps: Some(Vec::new()),
            ..Default::default()
        };
        assert_eq!(ctx.completion_percentage(), None);
    }

    #[test]
    fn test_response_wire_shape() {
        let response = ConversationResponse {
            message: "Perfect!".to_string(),
            suggestions: vec!["Keep going!".to_string()],
            completion_percentage: None,
            source: ReplySource::Fallback,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["message"], "Perfect!");
        assert!(value.get("completionPercentage").is_none());
        assert!(value.get("source").is_none());
    }

    #[test]
    fn test_context_serializes_only_present_fields() {
        let ctx = RecipeContext {
            title: Some("Scones".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&ctx).unwrap(), r#"{"title":"Scones"}"#);
    }
}
