//! The assistant gateway: one reliable "ask Crumble" operation.

use crate::engine::types::{ConversationRequest, ConversationResponse, RecipeContext, ReplySource};
use crate::llm::{GatewayConfig, GatewayResult, GeminiClient, GenerateContentRequest, GenerationBackend};
use crate::personalities::Persona;
use crate::postprocessing::{self, templates};
use crate::recipes::model::{Ingredient, Step};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

const WELCOME_PROMPT: &str = "Give a brief welcome message for new users to the Crumbly baking app";
const ADVICE_PROMPT: &str = "Analyze this recipe and give me encouraging feedback";

/// Holds the persona and the backend; cheap to clone and share.
#[derive(Clone)]
pub struct AssistantGateway {
    persona: Arc<Persona>,
    backend: Arc<dyn GenerationBackend>,
}

impl AssistantGateway {
    /// Gateway backed by the hosted endpoint described in `config`.
    pub fn new(config: &GatewayConfig) -> GatewayResult<Self> {
        config.validate()?;
        let backend = GeminiClient::new(config)?;
        Self::with_backend(Arc::new(backend))
    }

    pub fn with_backend(backend: Arc<dyn GenerationBackend>) -> GatewayResult<Self> {
        Ok(Self {
            persona: Arc::new(Persona::crumble()?),
            backend,
        })
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    /// Directive, user message and the serialized context, if any.
    pub fn build_prompt(&self, request: &ConversationRequest) -> String {
        let context = request
            .context
            .as_ref()
            .and_then(|c| serde_json::to_string(c).ok())
            .map(|json| format!("Recipe context: {}", json))
            .unwrap_or_default();

        format!(
            "{}\n\nUser message: {}\n\n{}",
            self.persona.directive(),
            request.user_message,
            context
        )
    }

    /// Asks the endpoint and shapes its reply; any failure is returned as-is.
    pub async fn try_converse(
        &self,
        request: &ConversationRequest,
    ) -> GatewayResult<ConversationResponse> {
        let outbound = GenerateContentRequest::from_prompt(self.build_prompt(request));
        let reply = self.backend.generate(&outbound).await?;

        let raw = reply.first_text();
        if raw.is_none() {
            debug!("Endpoint returned no candidate text, using stock greeting");
        }
        let message = postprocessing::reply_or_greeting(raw);

        Ok(ConversationResponse {
            suggestions: postprocessing::extract_suggestions(&message),
            completion_percentage: request
                .context
                .as_ref()
                .and_then(RecipeContext::completion_percentage),
            message,
            source: ReplySource::Remote,
        })
    }

    /// Always answers: falls back to a scripted reply when the endpoint fails.
    #[instrument(skip_all, fields(message_len = request.user_message.len()))]
    pub async fn converse(&self, request: &ConversationRequest) -> ConversationResponse {
        let start = Instant::now();

        match self.try_converse(request).await {
            Ok(response) => {
                info!(
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    suggestions = response.suggestions.len(),
                    "Crumble replied"
                );
                response
            }
            Err(e) => {
                warn!(
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    error = %e,
                    "Generation failed, using scripted reply"
                );
                postprocessing::fallback_response(request)
            }
        }
    }

    pub async fn welcome_message(&self) -> String {
        let response = self.converse(&ConversationRequest::new(WELCOME_PROMPT)).await;
        if response.message.trim().is_empty() {
            return templates::WELCOME.to_string();
        }
        response.message
    }

    /// Encouraging feedback on a draft; title-specific tip when the endpoint fails.
    #[instrument(skip(self, ingredients, steps))]
    pub async fn recipe_advice(&self, title: &str, ingredients: &[Ingredient], steps: &[Step]) -> String {
        let request = ConversationRequest::new(format!(
            "{}: {}",
            ADVICE_PROMPT,
            describe_recipe(title, ingredients, steps)
        ))
        .with_context(RecipeContext::new(title, ingredients.to_vec(), steps.to_vec()));

        match self.try_converse(&request).await {
            Ok(response) => response.message,
            Err(e) => {
                warn!(error = %e, "Advice request failed, using title tip");
                postprocessing::advice_for_title(title).to_string()
            }
        }
    }
}

/// `Title: …\nIngredients: …\nSteps: …`
pub fn describe_recipe(title: &str, ingredients: &[Ingredient], steps: &[Step]) -> String {
    let ingredients = ingredients
        .iter()
        .map(|i| format!("{} {}", i.quantity, i.name))
        .collect::<Vec<_>>()
        .join(", ");
    let steps = steps
        .iter()
        .map(|s| s.instruction.as_str())
        .collect::<Vec<_>>()
        .join(". ");

    format!("Title: {}\nIngredients: {}\nSteps: {}", title, ingredients, steps)
}
