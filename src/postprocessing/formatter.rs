//! Cleans the raw reply text.

use crate::postprocessing::templates::EMPTY_REPLY_GREETING;

pub fn clean(raw: &str) -> String {
    raw.trim().to_string()
}

/// Cleaned reply, or the stock greeting when the endpoint sent no text.
pub fn reply_or_greeting(raw: Option<&str>) -> String {
    clean(raw.unwrap_or(EMPTY_REPLY_GREETING))
}
