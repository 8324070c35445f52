//! Rule-based replies used when the remote call fails.
//!
//! Every function here is total: the fallback path is the last error handler
//! and must always produce text.

use crate::engine::types::{ConversationRequest, ConversationResponse, RecipeContext, ReplySource};
use crate::postprocessing::suggestions::fallback_suggestions;
use crate::postprocessing::templates;

const GREETING_KEYWORDS: [&str; 3] = ["welcome", "hello", "hi"];
const RECIPE_KEYWORDS: [&str; 3] = ["recipe", "bake", "cook"];
const INGREDIENT_KEYWORD: &str = "ingredient";

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Picks a scripted reply from the user's message, then the context title.
pub fn fallback_message(message: &str, context: Option<&RecipeContext>) -> String {
    let lower = message.to_lowercase();

    if contains_any(&lower, &GREETING_KEYWORDS) {
        return templates::GREETING.to_string();
    }
    if contains_any(&lower, &RECIPE_KEYWORDS) {
        return templates::RECIPE_ENCOURAGEMENT.to_string();
    }
    if lower.contains(INGREDIENT_KEYWORD) {
        return templates::INGREDIENT_ENCOURAGEMENT.to_string();
    }

    match context
        .and_then(|c| c.title.as_deref())
        .filter(|t| !t.is_empty())
    {
        Some(title) => templates::titled_encouragement(title),
        None => templates::ASK_ABOUT_BAKING.to_string(),
    }
}

pub fn fallback_response(request: &ConversationRequest) -> ConversationResponse {
    ConversationResponse {
        message: fallback_message(&request.user_message, request.context.as_ref()),
        suggestions: fallback_suggestions(),
        completion_percentage: None,
        source: ReplySource::Fallback,
    }
}

/// Title-specific tip for the recipe advice flow.
pub fn advice_for_title(title: &str) -> &'static str {
    let lower = title.to_lowercase();
    if lower.contains("cookie") {
        templates::COOKIE_TIP
    } else if lower.contains("cake") {
        templates::CAKE_TIP
    } else if lower.contains("bread") {
        templates::BREAD_TIP
    } else {
        templates::GENERIC_ADVICE
    }
}
