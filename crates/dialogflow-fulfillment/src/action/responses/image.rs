use serde_json::{json, Value};

use super::image_object;
use crate::action::ResponseItem;

/// A standalone image, rendered as an image-only basic card.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    url: String,
    accessibility_text: Option<String>,
}

impl Image {
    pub fn new<S: Into<String>>(url: S, accessibility_text: Option<&str>) -> Self {
        Image {
            url: url.into(),
            accessibility_text: accessibility_text.map(str::to_string),
        }
    }
}

impl ResponseItem for Image {
    fn render_rich_response_item(&self) -> Option<Value> {
        if self.url.is_empty() {
            return Some(json!({"basicCard": {}}));
        }
        Some(json!({
            "basicCard": {
                "image": image_object(&self.url, self.accessibility_text.as_deref())
            }
        }))
    }
}
