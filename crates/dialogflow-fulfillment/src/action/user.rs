use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// The user's name, present once the `NAME` permission was granted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserName {
    pub display_name: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
}

/// Data the action keeps for a user across conversations.
///
/// Sent by Actions on Google as the JSON string `{"data": {...}}` and handed
/// back the same way. Nothing is persisted here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserStorage {
    data: Map<String, Value>,
    changed: bool,
}

impl UserStorage {
    /// Decode the `userStorage` string; anything unreadable is empty storage
    pub fn from_wire(raw: &str) -> Self {
        let data = serde_json::from_str::<Value>(raw)
            .ok()
            .and_then(|value| value.get("data").and_then(Value::as_object).cloned())
            .unwrap_or_default();
        UserStorage {
            data,
            changed: false,
        }
    }

    pub fn to_wire(&self) -> String {
        json!({"data": self.data}).to_string()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn set<K: Into<String>>(&mut self, key: K, value: Value) {
        self.data.insert(key.into(), value);
        self.changed = true;
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let removed = self.data.remove(key);
        if removed.is_some() {
            self.changed = true;
        }
        removed
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.changed = true;
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct User {
    id: Option<String>,
    locale: Option<String>,
    name: Option<UserName>,
    storage: UserStorage,
    last_seen: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(data: &Value) -> Self {
        let name = data
            .get("profile")
            .and_then(|profile| serde_json::from_value::<UserName>(profile.clone()).ok());

        let storage = data
            .get("userStorage")
            .and_then(Value::as_str)
            .map(UserStorage::from_wire)
            .unwrap_or_default();

        let last_seen = data
            .get("lastSeen")
            .and_then(Value::as_str)
            .and_then(|raw| match DateTime::parse_from_rfc3339(raw) {
                Ok(last_seen) => Some(last_seen.with_timezone(&Utc)),
                Err(e) => {
                    tracing::debug!("Ignoring unparseable lastSeen {:?}: {}", raw, e);
                    None
                }
            });

        User {
            id: data.get("userId").and_then(Value::as_str).map(String::from),
            locale: data.get("locale").and_then(Value::as_str).map(String::from),
            name,
            storage,
            last_seen,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn name(&self) -> Option<&UserName> {
        self.name.as_ref()
    }

    pub fn storage(&self) -> &UserStorage {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut UserStorage {
        &mut self.storage
    }

    /// When the user last talked to the action
    pub fn last_seen(&self) -> Option<DateTime<Utc>> {
        self.last_seen
    }
}
