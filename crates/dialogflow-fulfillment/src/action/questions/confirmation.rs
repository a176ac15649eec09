use serde_json::{json, Value};

use super::{placeholder, system_intent};
use crate::action::ResponseItem;

/// Ask the user a yes/no question.
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    request_confirmation_text: String,
}

impl Confirmation {
    pub fn new<S: Into<String>>(request_confirmation_text: S) -> Self {
        Confirmation {
            request_confirmation_text: request_confirmation_text.into(),
        }
    }
}

impl ResponseItem for Confirmation {
    fn render_rich_response_item(&self) -> Option<Value> {
        Some(placeholder("PLACEHOLDER_FOR_CONFIRMATION"))
    }

    fn render_system_intent(&self) -> Option<Value> {
        Some(system_intent(
            "actions.intent.CONFIRMATION",
            "ConfirmationValueSpec",
            json!({
                "dialogSpec": {
                    "requestConfirmationText": self.request_confirmation_text
                }
            }),
        ))
    }
}
