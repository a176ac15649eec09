use serde::Deserialize;
use serde_json::Value;

pub const SCREEN_OUTPUT: &str = "actions.capability.SCREEN_OUTPUT";
pub const AUDIO_OUTPUT: &str = "actions.capability.AUDIO_OUTPUT";
pub const MEDIA_RESPONSE_AUDIO: &str = "actions.capability.MEDIA_RESPONSE_AUDIO";
pub const WEB_BROWSER: &str = "actions.capability.WEB_BROWSER";

#[derive(Debug, Clone, Deserialize)]
struct Capability {
    #[serde(default)]
    name: String,
}

/// The capabilities of the device the user is talking to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Surface {
    capabilities: Vec<String>,
}

impl Surface {
    /// Read `{capabilities: [{name}]}`; anything malformed counts as no capabilities
    pub fn new(data: &Value) -> Self {
        let capabilities = data
            .get("capabilities")
            .cloned()
            .and_then(|capabilities| serde_json::from_value::<Vec<Capability>>(capabilities).ok())
            .unwrap_or_default()
            .into_iter()
            .map(|capability| capability.name)
            .collect();
        Surface { capabilities }
    }

    pub fn has_capability(&self, capability: &str) -> bool {
        self.capabilities.iter().any(|name| name == capability)
    }

    pub fn has_screen(&self) -> bool {
        self.has_capability(SCREEN_OUTPUT)
    }

    pub fn has_audio(&self) -> bool {
        self.has_capability(AUDIO_OUTPUT)
    }

    pub fn has_media_playback(&self) -> bool {
        self.has_capability(MEDIA_RESPONSE_AUDIO)
    }

    pub fn has_web_browser(&self) -> bool {
        self.has_capability(WEB_BROWSER)
    }
}
