use crate::ipc::error::err;
use crate::query::{SortDir, SortKey};

pub struct HandlerErr {
    pub code: &'static str,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl HandlerErr {
    pub fn bad_params(message: impl Into<String>) -> Self {
        HandlerErr {
            code: "bad_params",
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        HandlerErr {
            code: "not_found",
            message: message.into(),
            details: None,
        }
    }

    pub fn response(self, id: &str) -> serde_json::Value {
        err(id, self.code, self.message, self.details)
    }
}

pub fn get_required_str(params: &serde_json::Value, key: &str) -> Result<String, HandlerErr> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| HandlerErr::bad_params(format!("missing {}", key)))
}

pub fn get_opt_str(params: &serde_json::Value, key: &str) -> Option<String> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

/// Sort params with the page defaults: name ascending.
pub fn parse_sort(params: &serde_json::Value) -> Result<(SortKey, SortDir), HandlerErr> {
    let key = match params.get("sortKey").and_then(|v| v.as_str()) {
        None => SortKey::Name,
        Some(raw) => SortKey::parse(raw)
            .ok_or_else(|| HandlerErr::bad_params("sortKey must be name, grade, or score"))?,
    };
    let dir = match params.get("sortDir").and_then(|v| v.as_str()) {
        None => SortDir::Asc,
        Some(raw) => SortDir::parse(raw)
            .ok_or_else(|| HandlerErr::bad_params("sortDir must be asc or desc"))?,
    };
    Ok((key, dir))
}
