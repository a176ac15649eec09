pub mod action;
pub mod context;
pub mod errors;
pub mod rich_message;
pub mod webhook_client;

pub use context::Context;
pub use errors::{WebhookError, WebhookResult};
pub use rich_message::{AgentVersion, Platform, RichMessage};
pub use webhook_client::{ContextSpec, Reply, WebhookClient};
