//! Single-line JSON reports for automation callers.
//!
//! A report is either a success carrying the selected match or a failure
//! carrying one error string. Absent fields are omitted rather than
//! serialized as null, so a success line holds exactly six fields and a
//! failure line exactly two. Field order follows declaration order.

use serde::{Deserialize, Serialize};

use crate::detect::MatchSelection;

/// Machine-readable outcome of one lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Whether a match was selected.
    pub success: bool,
    /// Center x of the selected match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<u32>,
    /// Center y of the selected match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<u32>,
    /// Width of the selected match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Height of the selected match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Total matches that survived suppression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches_count: Option<usize>,
    /// Human-readable failure description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Report {
    /// Build a success report from a selected match.
    pub fn success(selection: &MatchSelection) -> Self {
        Report {
            success: true,
            x: Some(selection.center[0]),
            y: Some(selection.center[1]),
            width: Some(selection.size[0]),
            height: Some(selection.size[1]),
            matches_count: Some(selection.matches_count),
            error: None,
        }
    }

    /// Build a failure report from an error description.
    pub fn failure(error: impl Into<String>) -> Self {
        Report {
            success: false,
            x: None,
            y: None,
            width: None,
            height: None,
            matches_count: None,
            error: Some(error.into()),
        }
    }

    /// Serialize to one JSON line without a trailing newline.
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"success":false,"error":"report serialization failed"}"#.to_string()
        })
    }
}
