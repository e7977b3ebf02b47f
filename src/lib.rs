pub mod composer;

// Re-export the entry points most callers need
pub use composer::types::{AttrView, ComposeError, ComposeRequest};
pub use composer::{compose, format_recommendation_list};
