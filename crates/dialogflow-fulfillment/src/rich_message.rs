pub mod card;
pub mod image;
pub mod payload;
pub mod suggestion;
pub mod text;

pub use card::{Card, CardButton};
pub use image::Image;
pub use payload::Payload;
pub use suggestion::Suggestion;
pub use text::Text;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Debug};

use crate::errors::{WebhookError, WebhookResult};

pub(crate) const DEFAULT_ACCESSIBILITY_TEXT: &str = "accessibility text";

lazy_static! {
    // Platform names as they appear in v2 `platform` fields
    static ref V2_PLATFORM_MAP: HashMap<&'static str, &'static str> = HashMap::from([
        ("unspecified", "PLATFORM_UNSPECIFIED"),
        ("facebook", "FACEBOOK"),
        ("slack", "SLACK"),
        ("slack_testbot", "SLACK"),
        ("telegram", "TELEGRAM"),
        ("kik", "KIK"),
        ("skype", "SKYPE"),
        ("line", "LINE"),
        ("viber", "VIBER"),
        ("google", "ACTIONS_ON_GOOGLE"),
        ("DIALOGFLOW_CONSOLE", "DIALOGFLOW_CONSOLE"),
    ]);

    static ref RICH_MESSAGE_PLATFORMS: HashSet<&'static str> = HashSet::from([
        "facebook",
        "slack",
        "telegram",
        "kik",
        "skype",
        "line",
        "viber",
        "google",
        "DIALOGFLOW_CONSOLE",
    ]);
}

/// The Dialogflow agent API a request was made with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AgentVersion {
    V1,
    V2,
}

impl AgentVersion {
    pub fn as_u8(self) -> u8 {
        match self {
            AgentVersion::V1 => 1,
            AgentVersion::V2 => 2,
        }
    }

    /// Render a message in this version's wire format
    pub fn render(self, message: &dyn RichMessage, platform: &Platform) -> Value {
        match self {
            AgentVersion::V1 => message.render_v1(platform),
            AgentVersion::V2 => message.render_v2(platform),
        }
    }
}

impl TryFrom<u8> for AgentVersion {
    type Error = WebhookError;

    fn try_from(value: u8) -> WebhookResult<Self> {
        match value {
            1 => Ok(AgentVersion::V1),
            2 => Ok(AgentVersion::V2),
            other => Err(WebhookError::InvalidAgentVersion(other)),
        }
    }
}

impl From<AgentVersion> for u8 {
    fn from(version: AgentVersion) -> Self {
        version.as_u8()
    }
}

impl fmt::Display for AgentVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.as_u8())
    }
}

/// The surface a response is rendered for, as named by the request source
/// (`google`, `slack`, `facebook`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Platform(String);

impl Platform {
    pub const GOOGLE: &'static str = "google";
    pub const UNSPECIFIED: &'static str = "unspecified";

    pub fn new<S: Into<String>>(source: S) -> Self {
        Platform(source.into())
    }

    /// Platform for an optional request source, unknown sources become `unspecified`
    pub fn from_source(source: Option<&str>) -> Self {
        match source {
            Some(source) if !source.is_empty() => Platform::new(source),
            _ => Platform::unspecified(),
        }
    }

    pub fn unspecified() -> Self {
        Platform::new(Self::UNSPECIFIED)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_google(&self) -> bool {
        self.0 == Self::GOOGLE
    }

    pub fn is_unspecified(&self) -> bool {
        self.0 == Self::UNSPECIFIED
    }

    /// Whether this platform can show anything richer than plain text
    pub fn supports_rich_message(&self) -> bool {
        RICH_MESSAGE_PLATFORMS.contains(self.0.as_str())
    }

    /// Name used in v2 `platform` fields
    pub fn v2_name(&self) -> &'static str {
        V2_PLATFORM_MAP
            .get(self.0.as_str())
            .copied()
            .unwrap_or("PLATFORM_UNSPECIFIED")
    }
}

impl Default for Platform {
    fn default() -> Self {
        Platform::unspecified()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A response message that can render itself for either agent API version.
pub trait RichMessage: Debug + Send + Sync {
    /// Render in the v1 `messages` format
    fn render_v1(&self, platform: &Platform) -> Value;

    /// Render in the v2 `fulfillmentMessages` format
    fn render_v2(&self, platform: &Platform) -> Value;

    /// Text to send instead when the platform can't show rich messages
    fn fallback_text(&self) -> Option<&str> {
        None
    }

    /// Raw payloads are sent in their own response field instead of the message list
    fn is_payload(&self) -> bool {
        false
    }
}

/// Render a message for a raw agent version number.
pub fn render_message(
    message: &dyn RichMessage,
    agent_version: u8,
    platform: &Platform,
) -> WebhookResult<Value> {
    let version = AgentVersion::try_from(agent_version)?;
    Ok(version.render(message, platform))
}

/// A message queued for a response, stamped with the version and platform it
/// renders for.
#[derive(Debug)]
pub struct OutgoingMessage {
    message: Box<dyn RichMessage>,
    agent_version: AgentVersion,
    platform: Platform,
}

impl OutgoingMessage {
    pub fn new(message: Box<dyn RichMessage>, agent_version: AgentVersion, platform: Platform) -> Self {
        Self {
            message,
            agent_version,
            platform,
        }
    }

    pub fn message(&self) -> &dyn RichMessage {
        self.message.as_ref()
    }

    pub fn agent_version(&self) -> AgentVersion {
        self.agent_version
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    pub fn is_payload(&self) -> bool {
        self.message.is_payload()
    }

    pub fn render(&self) -> Value {
        self.agent_version.render(self.message.as_ref(), &self.platform)
    }
}
