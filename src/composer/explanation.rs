use serde_json::Value;
use tracing::debug;

use super::types::AttrView;

const CUISINE_FAMILY_FALLBACK: &str = "cuisine_family_fallback";

const VEG_DISCLOSURE: &str =
    "You asked for pure vegetarian options, so I'm only showing places that look vegetarian / pure-veg.";

const DISH_FALLBACK_GENERIC: &str =
    "so these are the best matches based on cuisine, style and reviews.";

/// Assemble the explanation sentences that apply to the result list as a
/// whole: vegetarian disclosure, cuisine-family fallback, dish-to-cuisine
/// prioritization, dish fallback. Fired sentences are joined by a single
/// space; empty string when nothing applies.
pub fn build_global_explanation(attrs: &AttrView, recommendations: &[Value]) -> String {
    if recommendations.is_empty() {
        return String::new();
    }

    let mut parts: Vec<String> = Vec::new();

    let veg_only = attrs.flag("veg_only");
    let requested_cuisine = attrs
        .text("cuisine")
        .or_else(|| attrs.text("inferred_cuisine_from_dish"));
    let dish_text = attrs.text_or_list("dish");
    let inferred_cuisine = attrs.text("inferred_cuisine_from_dish");
    let family_fallback = attrs.text("_fallback_type") == Some(CUISINE_FAMILY_FALLBACK);
    let dish_fallback = attrs.flag("_dish_fallback");

    if veg_only {
        parts.push(VEG_DISCLOSURE.to_string());
    }

    let family_cuisine = if family_fallback { requested_cuisine } else { None };
    if let Some(cuisine) = family_cuisine {
        let top = top_category(recommendations);
        debug!("Explanation: cuisine family fallback for '{}'", cuisine);
        let sentence = match (dish_text.as_deref(), top.is_empty()) {
            (Some(dish), false) => format!(
                "I couldn't find restaurants clearly labelled as {} for {}, so I'm recommending the closest matches like **{}** that should feel similar.",
                cuisine, dish, top
            ),
            (Some(dish), true) => format!(
                "I couldn't find restaurants clearly labelled as {} for {}, so I'm recommending the closest cuisine matches instead.",
                cuisine, dish
            ),
            (None, false) => format!(
                "I couldn't find restaurants clearly labelled as {} nearby, so I'm recommending the closest matches like {} that should feel similar.",
                cuisine, top
            ),
            (None, true) => format!(
                "I couldn't find restaurants clearly labelled as {} nearby, so I'm recommending the closest cuisine matches instead.",
                cuisine
            ),
        };
        parts.push(sentence);
    } else if let (Some(dish), Some(cuisine)) = (dish_text.as_deref(), inferred_cuisine) {
        debug!("Explanation: dish '{}' prioritizes cuisine '{}'", dish, cuisine);
        // The stray "**" is what downstream renderers already expect; kept as-is.
        parts.push(format!(
            "Since {} is usually a {} dish, I'm prioritising strong **{} restaurants that are likely to serve it.",
            dish, cuisine, cuisine
        ));
    }

    // Skip when the family-fallback branch already explained the dish substitution.
    let dish_already_explained =
        family_fallback && dish_text.is_some() && inferred_cuisine.is_some();
    if dish_fallback && !dish_already_explained {
        match (dish_text.as_deref(), inferred_cuisine) {
            (Some(_), Some(cuisine)) => parts.push(format!(
                "so I'm showing well-rated {} options where you're likely to get it.",
                cuisine
            )),
            _ => parts.push(DISH_FALLBACK_GENERIC.to_string()),
        }
    }

    parts.join(" ")
}

/// Category of the top-ranked result, the only per-item detail the message
/// may surface.
fn top_category(recommendations: &[Value]) -> &str {
    recommendations
        .first()
        .and_then(|r| r.get("category"))
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or("")
}
