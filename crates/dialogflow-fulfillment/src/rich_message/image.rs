use serde_json::{json, Value};

use super::{Platform, RichMessage, DEFAULT_ACCESSIBILITY_TEXT};

/// Dialogflow v1 message object type for images
const V1_MESSAGE_OBJECT_IMAGE: u8 = 3;

/// An image message. Actions on Google shows it as a basic card.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Image {
    image_url: Option<String>,
    accessibility_text: Option<String>,
    fallback_text: Option<String>,
}

impl Image {
    pub fn new<S: Into<String>>(image_url: S) -> Self {
        Image {
            image_url: Some(image_url.into()),
            ..Default::default()
        }
    }

    pub fn image<S: Into<String>>(mut self, image_url: S) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn accessibility_text<S: Into<String>>(mut self, text: S) -> Self {
        self.accessibility_text = Some(text.into());
        self
    }

    pub fn with_fallback_text<S: Into<String>>(mut self, text: S) -> Self {
        self.fallback_text = Some(text.into());
        self
    }

    fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }

    fn accessibility(&self) -> &str {
        self.accessibility_text
            .as_deref()
            .unwrap_or(DEFAULT_ACCESSIBILITY_TEXT)
    }
}

impl RichMessage for Image {
    fn render_v1(&self, platform: &Platform) -> Value {
        if platform.is_google() {
            let mut out = json!({
                "type": "basic_card",
                "platform": platform.as_str(),
            });
            if let Some(url) = self.image_url() {
                out["image"] = json!({
                    "url": url,
                    "accessibilityText": self.accessibility(),
                });
            }
            out
        } else {
            let mut out = json!({
                "type": V1_MESSAGE_OBJECT_IMAGE,
                "platform": platform.as_str(),
            });
            if let Some(url) = self.image_url() {
                out["imageUrl"] = json!(url);
            }
            out
        }
    }

    fn render_v2(&self, platform: &Platform) -> Value {
        if platform.is_google() {
            let mut out = json!({
                "basicCard": {},
                "platform": platform.v2_name(),
            });
            if let Some(url) = self.image_url() {
                out["basicCard"]["image"] = json!({
                    "imageUri": url,
                    "accessibilityText": self.accessibility(),
                });
            }
            out
        } else {
            let mut out = json!({
                "image": {},
                "platform": platform.v2_name(),
            });
            if let Some(url) = self.image_url() {
                out["image"]["imageUri"] = json!(url);
            }
            out
        }
    }

    fn fallback_text(&self) -> Option<&str> {
        self.fallback_text.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.com/cat.png";

    #[test]
    fn test_render_v1() {
        let image = Image::new(URL);
        assert_eq!(
            image.render_v1(&Platform::new("slack")),
            json!({"type": 3, "platform": "slack", "imageUrl": URL})
        );
        assert_eq!(
            image.render_v1(&Platform::new("google")),
            json!({
                "type": "basic_card",
                "platform": "google",
                "image": {"url": URL, "accessibilityText": "accessibility text"}
            })
        );
    }

    #[test]
    fn test_render_v2() {
        let image = Image::new(URL).accessibility_text("A cat");
        assert_eq!(
            image.render_v2(&Platform::new("telegram")),
            json!({"image": {"imageUri": URL}, "platform": "TELEGRAM"})
        );
        assert_eq!(
            image.render_v2(&Platform::new("google")),
            json!({
                "basicCard": {"image": {"imageUri": URL, "accessibilityText": "A cat"}},
                "platform": "ACTIONS_ON_GOOGLE"
            })
        );
    }

    #[test]
    fn test_render_without_url() {
        let image = Image::default();
        assert_eq!(
            image.render_v2(&Platform::unspecified()),
            json!({"image": {}, "platform": "PLATFORM_UNSPECIFIED"})
        );
    }
}
