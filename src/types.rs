//! Common types and data structures

use serde::{Deserialize, Serialize};

/// Note record as returned by the notes service.
///
/// Timestamps are kept as the service sends them; they are only parsed for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for create and full-replacement update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePayload {
    pub title: String,
    pub content: String,
}

/// Failure body (`{"detail": ...}`). Only a JSON object can carry a detail.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct ErrorBody(serde_json::Value);

impl ErrorBody {
    /// Detail as display text. Strings are shown verbatim, other JSON compactly.
    pub fn detail_text(&self) -> Option<String> {
        match self.0.as_object()?.get("detail")? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Hello endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct Greeting {
    pub message: String,
}

/// Which form action a submit performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(i64),
}

/// Top-level view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Notes,
    Hello,
}
