use serde_json::{json, Value};

use super::{Platform, RichMessage};

/// Dialogflow v1 message object type for quick replies
const V1_MESSAGE_OBJECT_QUICK_REPLIES: u8 = 2;

/// Quick replies, shown as suggestion chips on Actions on Google.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Suggestion {
    replies: Vec<String>,
    fallback_text: Option<String>,
}

impl Suggestion {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Suggestion {
            replies: replies.into_iter().map(Into::into).collect(),
            fallback_text: None,
        }
    }

    /// Add a single reply
    pub fn reply<S: Into<String>>(mut self, reply: S) -> Self {
        self.replies.push(reply.into());
        self
    }

    pub fn with_fallback_text<S: Into<String>>(mut self, text: S) -> Self {
        self.fallback_text = Some(text.into());
        self
    }

    fn chips(&self) -> Vec<Value> {
        self.replies
            .iter()
            .map(|reply| json!({"title": reply}))
            .collect()
    }
}

impl RichMessage for Suggestion {
    fn render_v1(&self, platform: &Platform) -> Value {
        if platform.is_google() {
            json!({
                "type": "suggestion_chips",
                "platform": platform.as_str(),
                "suggestions": self.chips(),
            })
        } else {
            json!({
                "type": V1_MESSAGE_OBJECT_QUICK_REPLIES,
                "platform": platform.as_str(),
                "replies": self.replies,
            })
        }
    }

    fn render_v2(&self, platform: &Platform) -> Value {
        if platform.is_google() {
            json!({
                "suggestions": {"suggestions": self.chips()},
                "platform": platform.v2_name(),
            })
        } else {
            json!({
                "quickReplies": {"quickReplies": self.replies},
                "platform": platform.v2_name(),
            })
        }
    }

    fn fallback_text(&self) -> Option<&str> {
        self.fallback_text.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_replies() {
        let suggestion = Suggestion::new(["Yes", "No"]);
        assert_eq!(
            suggestion.render_v1(&Platform::new("kik")),
            json!({"type": 2, "platform": "kik", "replies": ["Yes", "No"]})
        );
        assert_eq!(
            suggestion.render_v2(&Platform::new("kik")),
            json!({"quickReplies": {"quickReplies": ["Yes", "No"]}, "platform": "KIK"})
        );
    }

    #[test]
    fn test_google_suggestion_chips() {
        let suggestion = Suggestion::new(["Yes"]).reply("No");
        assert_eq!(
            suggestion.render_v1(&Platform::new("google")),
            json!({
                "type": "suggestion_chips",
                "platform": "google",
                "suggestions": [{"title": "Yes"}, {"title": "No"}]
            })
        );
        assert_eq!(
            suggestion.render_v2(&Platform::new("google")),
            json!({
                "suggestions": {"suggestions": [{"title": "Yes"}, {"title": "No"}]},
                "platform": "ACTIONS_ON_GOOGLE"
            })
        );
    }
}
