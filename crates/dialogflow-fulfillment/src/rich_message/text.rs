use serde_json::{json, Map, Value};

use super::{Platform, RichMessage};

/// Dialogflow v1 message object type for text
const V1_MESSAGE_OBJECT_TEXT: u8 = 0;

/// A plain text message, or a spoken simple response on Actions on Google.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    text: String,
    ssml: Option<String>,
    fallback_text: Option<String>,
}

impl Text {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Text {
            text: text.into(),
            ssml: None,
            fallback_text: None,
        }
    }

    /// Replace the text of the message
    pub fn text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }

    /// SSML spoken instead of the text on Actions on Google
    pub fn ssml<S: Into<String>>(mut self, ssml: S) -> Self {
        self.ssml = Some(ssml.into());
        self
    }

    pub fn with_fallback_text<S: Into<String>>(mut self, text: S) -> Self {
        self.fallback_text = Some(text.into());
        self
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    fn simple_response(&self) -> Map<String, Value> {
        let mut out = Map::new();
        match &self.ssml {
            Some(ssml) => out.insert("ssml".to_string(), json!(ssml)),
            None => out.insert("textToSpeech".to_string(), json!(self.text)),
        };
        out.insert("displayText".to_string(), json!(self.text));
        out
    }
}

impl RichMessage for Text {
    fn render_v1(&self, platform: &Platform) -> Value {
        if platform.is_google() {
            let mut out = self.simple_response();
            out.insert("type".to_string(), json!("simple_response"));
            out.insert("platform".to_string(), json!(platform.as_str()));
            Value::Object(out)
        } else {
            let mut out = json!({
                "type": V1_MESSAGE_OBJECT_TEXT,
                "speech": self.text,
            });
            if !platform.is_unspecified() {
                out["platform"] = json!(platform.as_str());
            }
            out
        }
    }

    fn render_v2(&self, platform: &Platform) -> Value {
        if platform.is_google() {
            json!({
                "platform": platform.v2_name(),
                "simpleResponses": {
                    "simpleResponses": [self.simple_response()]
                }
            })
        } else {
            let mut out = json!({
                "text": {
                    "text": [self.text]
                }
            });
            if !platform.is_unspecified() {
                out["platform"] = json!(platform.v2_name());
            }
            out
        }
    }

    /// Falls back to the message text itself unless a fallback was set
    fn fallback_text(&self) -> Option<&str> {
        self.fallback_text.as_deref().or(Some(self.text.as_str()))
    }
}
