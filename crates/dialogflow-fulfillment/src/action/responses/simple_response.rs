use serde_json::{json, Map, Value};

use crate::action::ResponseItem;

/// Speech and display text for a single turn.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimpleResponse {
    text_to_speech: Option<String>,
    ssml: Option<String>,
    display_text: Option<String>,
}

impl SimpleResponse {
    pub fn new<S: Into<String>>(text_to_speech: S) -> Self {
        SimpleResponse {
            text_to_speech: Some(text_to_speech.into()),
            ..Default::default()
        }
    }

    pub fn text_to_speech<S: Into<String>>(mut self, text: S) -> Self {
        self.text_to_speech = Some(text.into());
        self
    }

    pub fn ssml<S: Into<String>>(mut self, ssml: S) -> Self {
        self.ssml = Some(ssml.into());
        self
    }

    pub fn display_text<S: Into<String>>(mut self, text: S) -> Self {
        self.display_text = Some(text.into());
        self
    }
}

impl ResponseItem for SimpleResponse {
    fn render_rich_response_item(&self) -> Option<Value> {
        let mut simple_response = Map::new();
        if let Some(ssml) = &self.ssml {
            simple_response.insert("ssml".to_string(), json!(ssml));
        }
        if let Some(display_text) = &self.display_text {
            simple_response.insert("displayText".to_string(), json!(display_text));
        }
        if let Some(text_to_speech) = &self.text_to_speech {
            simple_response.insert("textToSpeech".to_string(), json!(text_to_speech));
        }
        Some(json!({"simpleResponse": simple_response}))
    }
}
