use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use super::{placeholder, system_intent};
use crate::action::ResponseItem;
use crate::errors::{WebhookError, WebhookResult};

/// Information a user can be asked to share.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PermissionKind {
    Name,
    DevicePreciseLocation,
    DeviceCoarseLocation,
    Update,
}

/// Ask the user for permission to read their name, location or to send updates.
#[derive(Debug, Clone, PartialEq)]
pub struct Permission {
    context: String,
    permissions: Vec<PermissionKind>,
}

impl Permission {
    /// Fails on the first scope that is not a known permission.
    ///
    /// `context` is the reason spoken before the request, e.g. "To address you by name".
    pub fn create<C, I, S>(context: C, permissions: I) -> WebhookResult<Self>
    where
        C: Into<String>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let permissions = permissions
            .into_iter()
            .map(|permission| {
                let permission = permission.as_ref();
                PermissionKind::from_str(permission).map_err(|_| {
                    let valid: Vec<String> =
                        PermissionKind::iter().map(|kind| kind.to_string()).collect();
                    WebhookError::InvalidPermission(format!(
                        "{} (expected one of {})",
                        permission,
                        valid.join(", ")
                    ))
                })
            })
            .collect::<WebhookResult<Vec<_>>>()?;

        Ok(Permission {
            context: context.into(),
            permissions,
        })
    }

    pub fn permissions(&self) -> &[PermissionKind] {
        &self.permissions
    }
}

impl ResponseItem for Permission {
    fn render_rich_response_item(&self) -> Option<Value> {
        Some(placeholder("PLACEHOLDER_FOR_PERMISSION"))
    }

    fn render_system_intent(&self) -> Option<Value> {
        Some(system_intent(
            "actions.intent.PERMISSION",
            "PermissionValueSpec",
            json!({
                "optContext": self.context,
                "permissions": self.permissions,
            }),
        ))
    }
}
