//! Game Models
//!
//! Data structures for pairs, their per-round projections, and the JSON
//! documents used for persistence and import/export.

use serde::{Deserialize, Serialize};

/// One admin-entered word pair. Identity is its positional index in the
/// pair list; both sides are non-empty and different, enforced at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub item1: String,
    pub item2: String,
}

impl Pair {
    pub fn new(item1: impl Into<String>, item2: impl Into<String>) -> Self {
        Self {
            item1: item1.into(),
            item2: item2.into(),
        }
    }
}

/// Which column a game item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Per-round projection of one side of a pair. Rebuilt every time a round
/// starts and discarded on reset, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct GameItem {
    pub text: String,
    pub pair_index: usize,
    pub side: Side,
}

/// Import/export document. Only `pairs` is required on import; the other
/// fields are written on export and ignored when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairsDocument {
    pub pairs: Vec<Pair>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pairs: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
}

pub const EXPORT_VERSION: &str = "1.0";
pub const PROJECT_NAME: &str = "Matching Pairs Game";

/// Transient banner shown after saves and imports. When the notice follows a
/// save it carries a pretty-printed document offered for manual download.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub download: Option<String>,
}

impl Notice {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            download: None,
        }
    }
}

/// Fallback pair set used when both local storage and the bundled document
/// are unavailable.
pub fn default_pairs() -> Vec<Pair> {
    vec![
        Pair::new("Cat", "Meow"),
        Pair::new("Dog", "Bark"),
        Pair::new("Sun", "Hot"),
        Pair::new("Rain", "Wet"),
        Pair::new("Fire", "Burn"),
    ]
}
