use serde_json::{json, Value};

use super::{placeholder, system_intent};
use crate::action::ResponseItem;

/// Ask the user for a date and time.
#[derive(Debug, Clone, PartialEq)]
pub struct DateTime {
    request_date_time_text: String,
    request_date_text: String,
    request_time_text: String,
}

impl DateTime {
    /// The first prompt asks for both; the other two follow up when only one
    /// part was given.
    pub fn new<A, B, C>(request_date_time_text: A, request_date_text: B, request_time_text: C) -> Self
    where
        A: Into<String>,
        B: Into<String>,
        C: Into<String>,
    {
        DateTime {
            request_date_time_text: request_date_time_text.into(),
            request_date_text: request_date_text.into(),
            request_time_text: request_time_text.into(),
        }
    }
}

impl ResponseItem for DateTime {
    fn render_rich_response_item(&self) -> Option<Value> {
        Some(placeholder("PLACEHOLDER"))
    }

    fn render_system_intent(&self) -> Option<Value> {
        Some(system_intent(
            "actions.intent.DATETIME",
            "DateTimeValueSpec",
            json!({
                "dialogSpec": {
                    "requestDatetimeText": self.request_date_time_text,
                    "requestDateText": self.request_date_text,
                    "requestTimeText": self.request_time_text,
                }
            }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_time_dialog_spec() {
        let question = DateTime::new("When?", "Which day?", "What time?");
        let intent = question.render_system_intent().unwrap();

        assert_eq!(intent["intent"], "actions.intent.DATETIME");
        assert_eq!(
            intent["data"]["@type"],
            "type.googleapis.com/google.actions.v2.DateTimeValueSpec"
        );
        assert_eq!(
            intent["data"]["dialogSpec"],
            json!({
                "requestDatetimeText": "When?",
                "requestDateText": "Which day?",
                "requestTimeText": "What time?"
            })
        );
    }
}
