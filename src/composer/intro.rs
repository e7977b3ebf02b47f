use tracing::debug;

use super::types::AttrView;

/// Mood keyword table, scanned top to bottom with first match winning.
/// Order is load-bearing: a longer mood string can contain several keywords,
/// so this stays an ordered slice, never a map.
const MOOD_TEMPLATES: [(&str, &str); 6] = [
    ("comfort food", "Sounds like you need something warm and comforting today. Since South Indian foods are light weight I am recommending South Indian Restaurants for you. Here are some cozy picks:"),
    ("sad", "Rough day? may be South Indian foods suits you well as this makes you fresh as they are light weight foods. Here are some comforting food options to lift your mood: "),
    ("tired", "You must be exhausted may be South Indian foods suits you well as this makes you fresh as they are light weight foods.here are some easy, soothing meals nearby: "),
    ("celebration", "Nice! Here are some places perfect for a celebration:"),
    ("hangout", "Looking for a chill hangout spot? Try these:"),
    ("spicy craving", "Craving something spicy? These places should hit the spot! chineese, north indian foods are more spicier and suits your mood well"),
];

pub const DEFAULT_INTRO: &str = "Here are some great options I found for you!";

/// Pick exactly one introductory sentence for the message.
///
/// A matched mood wins outright; style adjectives are only consulted when no
/// mood keyword is found.
pub fn select_intro(attrs: &AttrView) -> String {
    let mood = attrs.text("mood").unwrap_or("").to_lowercase();

    if !mood.is_empty() {
        for (keyword, template) in MOOD_TEMPLATES {
            if mood.contains(keyword) {
                debug!("Intro: mood keyword '{}' matched", keyword);
                return template.to_string();
            }
        }
    }

    let styles = attrs.text_list("food_style");
    if !styles.is_empty() {
        debug!("Intro: style fallback with {} adjectives", styles.len());
        return format!(
            "Here are some places that match your craving for something {}:",
            styles.join(", ")
        );
    }

    DEFAULT_INTRO.to_string()
}
