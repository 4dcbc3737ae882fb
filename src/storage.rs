//! Local Persistence
//!
//! Pair list storage under a fixed local-storage key, plus parsing and
//! construction of the import/export JSON documents. Write failures are
//! logged and never interrupt the caller.

use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use log::warn;

use crate::models::{Pair, PairsDocument, EXPORT_VERSION, PROJECT_NAME};

const STORAGE_KEY: &str = "matching_game_pairs";

/// Read the stored pair list. `None` when nothing was stored yet or the
/// stored value is unreadable.
pub fn load_pairs() -> Option<Vec<Pair>> {
    match LocalStorage::get::<Vec<Pair>>(STORAGE_KEY) {
        Ok(pairs) => Some(pairs),
        Err(StorageError::KeyNotFound(_)) => None,
        Err(err) => {
            warn!("Discarding unreadable stored pairs: {err}");
            None
        }
    }
}

/// Persist the pair list under the fixed key.
pub fn save_pairs(pairs: &[Pair]) {
    if let Err(err) = LocalStorage::set(STORAGE_KEY, pairs) {
        warn!("Failed to persist pairs: {err}");
    }
}

/// Import failure surfaced to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportError(pub String);

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid pairs file: {}", self.0)
    }
}

/// Parse a user-supplied import document. The document must carry a `pairs`
/// array; everything else is optional and ignored.
pub fn parse_import(text: &str) -> Result<Vec<Pair>, ImportError> {
    let doc: PairsDocument =
        serde_json::from_str(text).map_err(|err| ImportError(err.to_string()))?;
    Ok(doc.pairs)
}

/// Document produced by the explicit export action.
pub fn export_document(pairs: &[Pair], timestamp: String) -> PairsDocument {
    PairsDocument {
        pairs: pairs.to_vec(),
        last_updated: Some(timestamp),
        version: Some(EXPORT_VERSION.to_string()),
        total_pairs: None,
        project_name: None,
    }
}

/// Richer document prepared on every save and offered for manual download
/// from the save notification.
pub fn snapshot_document(pairs: &[Pair], timestamp: String) -> PairsDocument {
    PairsDocument {
        total_pairs: Some(pairs.len()),
        project_name: Some(PROJECT_NAME.to_string()),
        ..export_document(pairs, timestamp)
    }
}

pub fn document_json(doc: &PairsDocument) -> String {
    serde_json::to_string_pretty(doc).unwrap_or_else(|err| {
        warn!("Failed to serialize pairs document: {err}");
        String::new()
    })
}

/// Current wall-clock time as an ISO-8601 string.
pub fn timestamp_now() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pair;

    fn sample_pairs() -> Vec<Pair> {
        vec![Pair::new("Cat", "Meow"), Pair::new("Dog", "Bark")]
    }

    #[test]
    fn export_then_import_round_trips() {
        let pairs = sample_pairs();
        let doc = export_document(&pairs, "2026-01-01T00:00:00.000Z".to_string());
        let imported = parse_import(&document_json(&doc)).unwrap();
        assert_eq!(imported, pairs);
    }

    #[test]
    fn import_accepts_bare_pairs_object() {
        let imported =
            parse_import(r#"{ "pairs": [{ "item1": "Sun", "item2": "Hot" }] }"#).unwrap();
        assert_eq!(imported, vec![Pair::new("Sun", "Hot")]);
    }

    #[test]
    fn import_without_pairs_array_fails() {
        assert!(parse_import(r#"{ "version": "1.0" }"#).is_err());
        assert!(parse_import(r#"{ "pairs": "not-a-list" }"#).is_err());
        assert!(parse_import("not json").is_err());
    }

    #[test]
    fn snapshot_document_carries_metadata() {
        let doc = snapshot_document(&sample_pairs(), "now".to_string());
        assert_eq!(doc.total_pairs, Some(2));
        assert_eq!(doc.project_name.as_deref(), Some(PROJECT_NAME));
        assert_eq!(doc.version.as_deref(), Some(EXPORT_VERSION));
    }
}
