//! Final polish of the assistant reply before it reaches the user, and the
//! scripted replies that stand in for it when the endpoint is unavailable.

pub mod fallback;
pub mod formatter;
pub mod suggestions;
pub mod templates;

pub use fallback::{advice_for_title, fallback_message, fallback_response};
pub use formatter::{clean, reply_or_greeting};
pub use suggestions::{extract_suggestions, fallback_suggestions};
