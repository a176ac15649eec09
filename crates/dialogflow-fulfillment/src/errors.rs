use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WebhookError {
    #[error("Invalid Dialogflow request: {0}")]
    InvalidRequest(String),

    #[error("Invalid context: {0}")]
    InvalidContext(String),

    #[error("Invalid agent version: {0}")]
    InvalidAgentVersion(u8),

    #[error("Invalid permission: {0}")]
    InvalidPermission(String),
}

pub type WebhookResult<T> = Result<T, WebhookError>;
