use crate::action::ResponseItem;
use serde_json::Value;

/// Suggestion chips shown under the response.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Suggestions {
    suggestions: Vec<String>,
}

impl Suggestions {
    pub fn new<I, S>(suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Suggestions {
            suggestions: suggestions.into_iter().map(Into::into).collect(),
        }
    }
}

impl ResponseItem for Suggestions {
    fn render_rich_response_item(&self) -> Option<Value> {
        None
    }

    fn render_suggestions(&self) -> Option<Vec<String>> {
        Some(self.suggestions.clone())
    }
}
