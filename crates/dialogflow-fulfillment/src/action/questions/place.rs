use serde_json::{json, Value};

use super::{placeholder, system_intent, TYPE_URL_PREFIX};
use crate::action::ResponseItem;

/// Ask the user for a place, with permission to their location if needed.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    /// e.g. "Where do you want to get picked up?"
    request_prompt: String,
    /// e.g. "To find a place to pick you up", spoken before the permission request
    permission_context: String,
}

impl Place {
    pub fn new<P: Into<String>, C: Into<String>>(request_prompt: P, permission_context: C) -> Self {
        Place {
            request_prompt: request_prompt.into(),
            permission_context: permission_context.into(),
        }
    }
}

impl ResponseItem for Place {
    fn render_rich_response_item(&self) -> Option<Value> {
        Some(placeholder("PLACEHOLDER"))
    }

    fn render_system_intent(&self) -> Option<Value> {
        Some(system_intent(
            "actions.intent.PLACE",
            "PlaceValueSpec",
            json!({
                "dialogSpec": {
                    "extension": {
                        "@type": format!("{}PlaceValueSpec.PlaceDialogSpec", TYPE_URL_PREFIX),
                        "requestPrompt": self.request_prompt,
                        "permissionContext": self.permission_context,
                    }
                }
            }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_extension() {
        let place = Place::new("Where to?", "To find you a ride");
        let intent = place.render_system_intent().unwrap();

        assert_eq!(intent["intent"], "actions.intent.PLACE");
        assert_eq!(
            intent["data"]["dialogSpec"]["extension"],
            json!({
                "@type": "type.googleapis.com/google.actions.v2.PlaceValueSpec.PlaceDialogSpec",
                "requestPrompt": "Where to?",
                "permissionContext": "To find you a ride"
            })
        );
    }
}
