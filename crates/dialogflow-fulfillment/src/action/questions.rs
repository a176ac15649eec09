pub mod carousel;
pub mod confirmation;
pub mod date_time;
pub mod list_card;
pub mod option;
pub mod permission;
pub mod place;

pub use carousel::Carousel;
pub use confirmation::Confirmation;
pub use date_time::DateTime;
pub use list_card::ListCard;
pub use option::SelectOption;
pub use permission::{Permission, PermissionKind};
pub use place::Place;

use serde_json::{json, Value};

const TYPE_URL_PREFIX: &str = "type.googleapis.com/google.actions.v2.";

/// `{intent, data: {"@type", ...fields}}`, the system intent that collects the
/// answer to a question before the conversation continues
pub(crate) fn system_intent(intent: &str, value_spec: &str, fields: Value) -> Value {
    let mut data = json!({"@type": format!("{}{}", TYPE_URL_PREFIX, value_spec)});
    if let (Some(data), Value::Object(fields)) = (data.as_object_mut(), fields) {
        data.extend(fields);
    }
    json!({"intent": intent, "data": data})
}

/// Spoken placeholder shown before a question's own prompt
pub(crate) fn placeholder(text: &str) -> Value {
    json!({"simpleResponse": {"textToSpeech": text}})
}
