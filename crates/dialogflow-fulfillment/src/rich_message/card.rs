use serde_json::{json, Map, Value};

use super::{Platform, RichMessage, DEFAULT_ACCESSIBILITY_TEXT};

/// Dialogflow v1 message object type for cards
const V1_MESSAGE_OBJECT_CARD: u8 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct CardButton {
    pub text: String,
    /// Link opened, or text sent back, when the button is pressed
    pub postback: String,
}

/// A card with title, subtitle, image and buttons.
///
/// On Actions on Google the subtitle is shown as the card's formatted text
/// and buttons must be links.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Card {
    title: Option<String>,
    subtitle: Option<String>,
    image_url: Option<String>,
    accessibility_text: Option<String>,
    buttons: Vec<CardButton>,
    fallback_text: Option<String>,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle<S: Into<String>>(mut self, subtitle: S) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn image<S: Into<String>>(mut self, image_url: S) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn accessibility_text<S: Into<String>>(mut self, text: S) -> Self {
        self.accessibility_text = Some(text.into());
        self
    }

    pub fn button<T: Into<String>, P: Into<String>>(mut self, text: T, postback: P) -> Self {
        self.buttons.push(CardButton {
            text: text.into(),
            postback: postback.into(),
        });
        self
    }

    pub fn with_fallback_text<S: Into<String>>(mut self, text: S) -> Self {
        self.fallback_text = Some(text.into());
        self
    }

    fn accessibility(&self) -> &str {
        self.accessibility_text
            .as_deref()
            .unwrap_or(DEFAULT_ACCESSIBILITY_TEXT)
    }

    /// Fields shared by every shape: title plus the subtitle under `subtitle_key`
    fn text_fields(&self, subtitle_key: &str) -> Map<String, Value> {
        let mut out = Map::new();
        if let Some(title) = &self.title {
            out.insert("title".to_string(), json!(title));
        }
        if let Some(subtitle) = &self.subtitle {
            out.insert(subtitle_key.to_string(), json!(subtitle));
        }
        out
    }

    fn plain_buttons(&self) -> Vec<Value> {
        self.buttons
            .iter()
            .map(|button| json!({"text": button.text, "postback": button.postback}))
            .collect()
    }
}

impl RichMessage for Card {
    fn render_v1(&self, platform: &Platform) -> Value {
        if platform.is_google() {
            let mut out = self.text_fields("formattedText");
            out.insert("type".to_string(), json!("basic_card"));
            out.insert("platform".to_string(), json!(platform.as_str()));
            if let Some(url) = &self.image_url {
                out.insert(
                    "image".to_string(),
                    json!({"url": url, "accessibilityText": self.accessibility()}),
                );
            }
            if !self.buttons.is_empty() {
                let buttons: Vec<Value> = self
                    .buttons
                    .iter()
                    .map(|button| {
                        json!({"title": button.text, "openUrlAction": {"url": button.postback}})
                    })
                    .collect();
                out.insert("buttons".to_string(), json!(buttons));
            }
            Value::Object(out)
        } else {
            let mut out = self.text_fields("subtitle");
            out.insert("type".to_string(), json!(V1_MESSAGE_OBJECT_CARD));
            out.insert("platform".to_string(), json!(platform.as_str()));
            if let Some(url) = &self.image_url {
                out.insert("imageUrl".to_string(), json!(url));
            }
            if !self.buttons.is_empty() {
                out.insert("buttons".to_string(), json!(self.plain_buttons()));
            }
            Value::Object(out)
        }
    }

    fn render_v2(&self, platform: &Platform) -> Value {
        if platform.is_google() {
            let mut card = self.text_fields("formattedText");
            if let Some(url) = &self.image_url {
                card.insert(
                    "image".to_string(),
                    json!({"imageUri": url, "accessibilityText": self.accessibility()}),
                );
            }
            if !self.buttons.is_empty() {
                let buttons: Vec<Value> = self
                    .buttons
                    .iter()
                    .map(|button| {
                        json!({"title": button.text, "openUriAction": {"uri": button.postback}})
                    })
                    .collect();
                card.insert("buttons".to_string(), json!(buttons));
            }
            json!({"basicCard": card, "platform": platform.v2_name()})
        } else {
            let mut card = self.text_fields("subtitle");
            if let Some(url) = &self.image_url {
                card.insert("imageUri".to_string(), json!(url));
            }
            if !self.buttons.is_empty() {
                card.insert("buttons".to_string(), json!(self.plain_buttons()));
            }
            json!({"card": card, "platform": platform.v2_name()})
        }
    }

    fn fallback_text(&self) -> Option<&str> {
        self.fallback_text.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Card {
        Card::new()
            .title("Weather")
            .subtitle("Sunny all day")
            .image("https://example.com/sun.png")
            .button("Details", "https://example.com/weather")
    }

    #[test]
    fn test_render_v1_card() {
        assert_eq!(
            card().render_v1(&Platform::new("facebook")),
            json!({
                "type": 1,
                "platform": "facebook",
                "title": "Weather",
                "subtitle": "Sunny all day",
                "imageUrl": "https://example.com/sun.png",
                "buttons": [{"text": "Details", "postback": "https://example.com/weather"}]
            })
        );
    }

    #[test]
    fn test_render_v1_google_basic_card() {
        assert_eq!(
            card().render_v1(&Platform::new("google")),
            json!({
                "type": "basic_card",
                "platform": "google",
                "title": "Weather",
                "formattedText": "Sunny all day",
                "image": {"url": "https://example.com/sun.png", "accessibilityText": "accessibility text"},
                "buttons": [{"title": "Details", "openUrlAction": {"url": "https://example.com/weather"}}]
            })
        );
    }

    #[test]
    fn test_render_v2_card() {
        assert_eq!(
            card().render_v2(&Platform::new("slack")),
            json!({
                "card": {
                    "title": "Weather",
                    "subtitle": "Sunny all day",
                    "imageUri": "https://example.com/sun.png",
                    "buttons": [{"text": "Details", "postback": "https://example.com/weather"}]
                },
                "platform": "SLACK"
            })
        );
    }

    #[test]
    fn test_render_v2_google_basic_card() {
        let rendered = card().render_v2(&Platform::new("google"));
        assert_eq!(rendered["platform"], "ACTIONS_ON_GOOGLE");
        assert_eq!(rendered["basicCard"]["formattedText"], "Sunny all day");
        assert_eq!(
            rendered["basicCard"]["buttons"][0]["openUriAction"]["uri"],
            "https://example.com/weather"
        );
    }

    #[test]
    fn test_empty_card_omits_fields() {
        assert_eq!(
            Card::new().render_v2(&Platform::new("line")),
            json!({"card": {}, "platform": "LINE"})
        );
    }
}
