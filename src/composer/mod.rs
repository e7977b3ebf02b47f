pub mod explanation;
pub mod intro;
pub mod types;

use serde_json::Value;
use tracing::debug;

use explanation::build_global_explanation;
use intro::select_intro;
use types::{AttrView, ComposeError};

/// Build the user-facing message for one recommendation result.
///
/// `attributes` must be a JSON object (null reads as no attributes) and
/// `recommendations` a JSON array (null reads as no results); any other shape
/// is rejected at the boundary. Everything inside those shapes is optional
/// and read permissively, so past the boundary this never fails.
pub fn compose(
    query: &str,
    attributes: &Value,
    recommendations: &Value,
) -> Result<String, ComposeError> {
    let attrs = match attributes {
        Value::Object(map) => AttrView::new(Some(map)),
        Value::Null => AttrView::new(None),
        _ => return Err(ComposeError::InvalidInput("attributes must be a JSON object")),
    };
    let recommendations: &[Value] = match recommendations {
        Value::Array(items) => items,
        Value::Null => &[],
        _ => {
            return Err(ComposeError::InvalidInput(
                "recommendations must be a JSON array",
            ))
        }
    };

    if recommendations.is_empty() {
        debug!("Compose: no results for '{}'", query);
        return Ok(format!(
            "Sorry, I couldn't find anything matching **\"{}\"**.\nWant to try changing cuisine, dish, style (soft / spicy / cheesy), or budget?",
            query
        ));
    }

    let intro = select_intro(&attrs);
    let mut message = format!("🍽️ {}\n\n", intro);

    let global_explanation = build_global_explanation(&attrs, recommendations);
    if !global_explanation.is_empty() {
        message.push_str(&global_explanation);
        message.push_str("\n\n");
    }

    // Message ends here: no place names, distances, ratings or per-item reasoning.
    Ok(message)
}

/// Older name for [`compose`], kept for call-site compatibility.
pub fn format_recommendation_list(
    query: &str,
    attributes: &Value,
    recommendations: &Value,
) -> Result<String, ComposeError> {
    compose(query, attributes, recommendations)
}
