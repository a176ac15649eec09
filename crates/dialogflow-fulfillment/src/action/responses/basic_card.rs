use serde_json::{json, Map, Value};

use super::image_object;
use crate::action::ResponseItem;

#[derive(Debug, Clone, PartialEq)]
struct Button {
    title: String,
    url: String,
}

/// A card with optional title, formatted text, image and link buttons.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BasicCard {
    title: Option<String>,
    formatted_text: Option<String>,
    image_url: Option<String>,
    accessibility_text: Option<String>,
    buttons: Vec<Button>,
}

impl BasicCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn formatted_text<S: Into<String>>(mut self, text: S) -> Self {
        self.formatted_text = Some(text.into());
        self
    }

    pub fn image<S: Into<String>>(mut self, url: S, accessibility_text: Option<&str>) -> Self {
        self.image_url = Some(url.into());
        self.accessibility_text = accessibility_text.map(str::to_string);
        self
    }

    pub fn button<T: Into<String>, U: Into<String>>(mut self, title: T, url: U) -> Self {
        self.buttons.push(Button {
            title: title.into(),
            url: url.into(),
        });
        self
    }
}

impl ResponseItem for BasicCard {
    fn render_rich_response_item(&self) -> Option<Value> {
        let mut basic_card = Map::new();

        if let Some(title) = &self.title {
            basic_card.insert("title".to_string(), json!(title));
        }
        if let Some(formatted_text) = &self.formatted_text {
            basic_card.insert("formattedText".to_string(), json!(formatted_text));
        }
        if let Some(url) = &self.image_url {
            basic_card.insert(
                "image".to_string(),
                image_object(url, self.accessibility_text.as_deref()),
            );
        }
        if !self.buttons.is_empty() {
            let buttons: Vec<Value> = self
                .buttons
                .iter()
                .map(|button| json!({"title": button.title, "openUrlAction": {"url": button.url}}))
                .collect();
            basic_card.insert("buttons".to_string(), json!(buttons));
        }

        Some(json!({"basicCard": basic_card}))
    }
}
