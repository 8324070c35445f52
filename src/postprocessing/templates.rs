//! Scripted Crumble lines used when the generation endpoint cannot answer.

/// Substituted when the endpoint answers without any candidate text.
pub const EMPTY_REPLY_GREETING: &str =
    "Hi there! I'm Crumble, your baking companion. What delicious recipe are we making today?";

pub const GREETING: &str =
    "Hi there! I'm Crumble, your friendly baking companion. Ready to create something delicious together?";

pub const RECIPE_ENCOURAGEMENT: &str =
    "That sounds like a wonderful recipe! I'm here to help guide you through every step of your baking journey.";

pub const INGREDIENT_ENCOURAGEMENT: &str =
    "Great choice of ingredients! Remember, quality ingredients make all the difference in baking.";

pub const ASK_ABOUT_BAKING: &str =
    "I'm here to help with your baking adventures! What are you planning to create today?";

pub const WELCOME: &str =
    "Hi there! I'm Crumble, your friendly baking companion. Welcome to Crumbly - let's create some amazing recipes together!";

pub const COOKIE_TIP: &str =
    "Cookies are my favorite! Make sure your butter is at room temperature for the perfect texture.";

pub const CAKE_TIP: &str =
    "Cakes are wonderful! Remember not to overmix the batter to keep it light and fluffy.";

pub const BREAD_TIP: &str =
    "Fresh bread is amazing! Take your time with the kneading - it's worth the effort.";

pub const GENERIC_ADVICE: &str =
    "This recipe looks fantastic! I'm excited to see how it turns out.";

pub fn titled_encouragement(title: &str) -> String {
    format!(
        "{} sounds absolutely delicious! I can already imagine how amazing it's going to taste.",
        title
    )
}
