use serde_json::{json, Value};

use super::{Platform, RichMessage};

/// A platform specific custom payload, sent as-is under the platform's key.
///
/// A response carries a single payload. Rendering a response with several
/// keeps only the last one.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    payload: Value,
}

impl Payload {
    pub fn new(payload: Value) -> Self {
        Payload { payload }
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    fn render(&self, platform: &Platform) -> Value {
        let mut out = json!({});
        out[platform.as_str()] = self.payload.clone();
        out
    }
}

impl RichMessage for Payload {
    fn render_v1(&self, platform: &Platform) -> Value {
        self.render(platform)
    }

    fn render_v2(&self, platform: &Platform) -> Value {
        self.render(platform)
    }

    fn is_payload(&self) -> bool {
        true
    }
}
