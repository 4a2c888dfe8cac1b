use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::PageError;

/// Route parameters handed to the loader by the caller. The loader accepts
/// them but never reads them.
pub type RouteParams = HashMap<String, String>;

/// Outcome of one load, in the shape the rendering layer branches on.
///
/// Serialized untagged:
/// - `{"apod": {...}}`
/// - `{"status": 404, "error": {"message": "Could not load data"}}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PageData {
    Loaded {
        /// Opaque APOD payload as returned by the upstream service.
        apod: Value,
    },
    Failed {
        status: u16,
        error: PageError,
    },
}

impl PageData {
    pub fn failed(status: u16) -> Self {
        PageData::Failed { status, error: PageError::default() }
    }

    pub fn apod(&self) -> Option<&Value> {
        match self {
            PageData::Loaded { apod } => Some(apod),
            PageData::Failed { .. } => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            PageData::Loaded { .. } => None,
            PageData::Failed { status, .. } => Some(*status),
        }
    }

    pub fn error(&self) -> Option<&PageError> {
        match self {
            PageData::Loaded { .. } => None,
            PageData::Failed { error, .. } => Some(error),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, PageData::Loaded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn loaded_serializes_as_apod_object() {
        let data = PageData::Loaded { apod: json!({ "title": "X" }) };

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value, json!({ "apod": { "title": "X" } }));
    }

    #[test]
    fn failed_serializes_status_and_error_message() {
        let value = serde_json::to_value(PageData::failed(404)).unwrap();
        assert_eq!(
            value,
            json!({ "status": 404, "error": { "message": "Could not load data" } })
        );
    }

    #[test]
    fn failed_message_is_the_same_for_every_status() {
        for status in [301, 400, 404, 500, 503] {
            let value = serde_json::to_value(PageData::failed(status)).unwrap();
            assert_eq!(value["status"], json!(status));
            assert_eq!(value["error"]["message"], json!("Could not load data"));
        }
    }

    #[test]
    fn accessors_match_variant() {
        let failed = PageData::failed(500);
        assert!(failed.apod().is_none());
        assert_eq!(failed.error().map(|e| e.message()), Some("Could not load data"));

        let loaded = PageData::Loaded { apod: Value::Null };
        assert!(loaded.is_loaded());
        assert!(loaded.status().is_none());
        assert!(loaded.error().is_none());
    }
}
