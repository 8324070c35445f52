//! Follow-up actions derived from keywords in the reply.
//!
//! Matching is plain lower-case substring search. Families are scanned in
//! declaration order and each contributes at most one phrase.

pub const MAX_SUGGESTIONS: usize = 3;

pub const DEFAULT_SUGGESTIONS: [&str; 3] = ["Continue recipe", "Ask for tips", "Check steps"];

/// Shown with every scripted reply.
pub const FALLBACK_SUGGESTIONS: [&str; 3] = ["Try again", "Check recipe", "Keep baking!"];

struct KeywordFamily {
    keywords: &'static [&'static str],
    suggestion: &'static str,
}

const FAMILIES: [KeywordFamily; 5] = [
    KeywordFamily {
        keywords: &["try", "attempt"],
        suggestion: "Give it a try!",
    },
    KeywordFamily {
        keywords: &["add", "mix"],
        suggestion: "Add ingredient",
    },
    KeywordFamily {
        keywords: &["bake", "oven"],
        suggestion: "Start baking",
    },
    KeywordFamily {
        keywords: &["temperature", "time"],
        suggestion: "Check timing",
    },
    KeywordFamily {
        keywords: &["perfect", "great"],
        suggestion: "Keep going!",
    },
];

pub fn extract_suggestions(reply: &str) -> Vec<String> {
    let lower = reply.to_lowercase();

    let matched: Vec<String> = FAMILIES
        .iter()
        .filter(|family| family.keywords.iter().any(|k| lower.contains(k)))
        .map(|family| family.suggestion.to_string())
        .take(MAX_SUGGESTIONS)
        .collect();

    if matched.is_empty() {
        DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
    } else {
        matched
    }
}

pub fn fallback_suggestions() -> Vec<String> {
    FALLBACK_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
}
