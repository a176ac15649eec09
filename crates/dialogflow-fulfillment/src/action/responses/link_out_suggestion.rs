use serde_json::{json, Value};

use crate::action::ResponseItem;

/// A chip linking out to an app or site.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkOutSuggestion {
    name: String,
    url: String,
}

impl LinkOutSuggestion {
    /// `name` is the app or site the chip links to
    pub fn new<N: Into<String>, U: Into<String>>(name: N, url: U) -> Self {
        LinkOutSuggestion {
            name: name.into(),
            url: url.into(),
        }
    }
}

impl ResponseItem for LinkOutSuggestion {
    fn render_rich_response_item(&self) -> Option<Value> {
        None
    }

    fn render_link_out_suggestion(&self) -> Option<Value> {
        Some(json!({
            "destinationName": self.name,
            "openUrlAction": {"url": self.url}
        }))
    }
}
