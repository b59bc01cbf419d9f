//! Coercion of untyped upstream payloads into typed records.
//!
//! The upstream API controls the payload shape, so every field is read with
//! a named default instead of failing on a missing or mistyped value.

use serde_json::Value;

pub const UNKNOWN: &str = "unknown";
pub const DEFAULT_FAILURE_MESSAGE: &str = "query failed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerStatusPayload {
    pub online: bool,
    pub ip: String,
    pub port: Option<u64>,
    pub players: u64,
    pub max_players: u64,
    pub version: String,
    pub motd_html: Option<String>,
    pub motd_clean: Option<String>,
}

impl ServerStatusPayload {
    pub fn from_value(value: &Value) -> Self {
        Self {
            online: bool_field(value, "online"),
            ip: text_field(value, "ip").unwrap_or_else(|| UNKNOWN.to_string()),
            port: int_field(value, "port"),
            players: int_field(value, "players").unwrap_or(0),
            max_players: int_field(value, "max_players").unwrap_or(0),
            version: text_field(value, "version").unwrap_or_else(|| UNKNOWN.to_string()),
            motd_html: text_field(value, "motd_html"),
            motd_clean: text_field(value, "motd_clean"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerInfoPayload {
    pub code: String,
    pub username: String,
    pub uuid: String,
    pub skin_url: Option<String>,
}

impl PlayerInfoPayload {
    pub fn from_value(value: &Value) -> Self {
        Self {
            code: text_field(value, "code").unwrap_or_else(|| UNKNOWN.to_string()),
            username: text_field(value, "username").unwrap_or_else(|| UNKNOWN.to_string()),
            uuid: text_field(value, "uuid").unwrap_or_else(|| UNKNOWN.to_string()),
            skin_url: text_field(value, "skin_url").filter(|url| !url.trim().is_empty()),
        }
    }
}

/// An explicit `"success": false` in the payload, carrying its message.
pub fn api_failure(value: &Value) -> Option<String> {
    match value.get("success") {
        Some(Value::Bool(false)) => Some(
            text_field(value, "message").unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
        ),
        _ => None,
    }
}

fn bool_field(value: &Value, key: &str) -> bool {
    value.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn text_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn int_field(value: &Value, key: &str) -> Option<u64> {
    match value.get(key)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
