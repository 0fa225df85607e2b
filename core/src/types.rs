//! Wire types for the vocabulary API.
//!
//! # Design
//! A single `WordEntry` type serves both as the draft the user fills in and
//! as the persisted record returned by the server; the only difference is
//! whether `id` is set. The mock-server defines its own copy of the schema,
//! and the integration tests catch any drift between the two.

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a persisted entry.
pub type WordId = u64;

/// A vocabulary entry. `id` is `None` until the server has acknowledged it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<WordId>,
    pub word: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub description: String,
}

impl WordEntry {
    /// Build a draft entry (no id).
    pub fn draft(
        word: impl Into<String>,
        translation: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            word: word.into(),
            translation: translation.into(),
            description: description.into(),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Same fields, id cleared.
    pub fn to_draft(&self) -> Self {
        Self {
            id: None,
            ..self.clone()
        }
    }
}

/// Request body for `POST /create-entry`. Never carries an id.
#[derive(Debug, Serialize)]
pub(crate) struct CreateEntry<'a> {
    pub word: &'a str,
    pub translation: &'a str,
    pub description: &'a str,
}

impl<'a> From<&'a WordEntry> for CreateEntry<'a> {
    fn from(entry: &'a WordEntry) -> Self {
        Self {
            word: &entry.word,
            translation: &entry.translation,
            description: &entry.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_serializes_without_id() {
        let entry = WordEntry::draft("dom", "house", "noun");
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["word"], "dom");
    }

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let entry: WordEntry = serde_json::from_str(r#"{"id":3,"word":"mesto"}"#).unwrap();
        assert_eq!(entry.id, Some(3));
        assert!(entry.translation.is_empty());
        assert!(entry.description.is_empty());
    }

    #[test]
    fn create_entry_drops_id() {
        let entry = WordEntry {
            id: Some(9),
            ..WordEntry::draft("pes", "dog", "")
        };
        let json = serde_json::to_value(CreateEntry::from(&entry)).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["translation"], "dog");
    }
}
