//! Word list state and its transitions.
//!
//! # Design
//! `WordList` is a value: every transition borrows the current list and
//! returns a new one, so the optimistic-update rules can be exercised
//! without a component or a network. A row's life cycle is
//!
//! ```text
//! begin_create -> PendingCreate --confirm_create--> Persisted
//!                               --reject_create---> (removed)
//! Persisted --begin_remove--> (removed, token held) --rollback_remove--> Persisted
//! ```
//!
//! `begin_*` hands back a token (`PendingCreate` / `PendingRemove`) that is
//! later fed to the matching completion. Tokens are independent, so
//! operations on different rows can complete in any order.

use uuid::Uuid;

use crate::error::{ReconcileError, ValidationError};
use crate::types::{WordEntry, WordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    /// Appended locally; the create call has not been acknowledged yet.
    PendingCreate,
    /// The server has assigned the entry an id.
    Persisted,
}

/// One row of the list. `key` identifies the row locally for its whole life,
/// including the time before the server has assigned an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRow {
    pub key: Uuid,
    pub entry: WordEntry,
    pub state: RowState,
}

impl WordRow {
    fn persisted(entry: WordEntry) -> Self {
        Self {
            key: Uuid::new_v4(),
            entry,
            state: RowState::Persisted,
        }
    }

    pub fn id(&self) -> Option<WordId> {
        match self.state {
            RowState::Persisted => self.entry.id,
            RowState::PendingCreate => None,
        }
    }
}

/// Handle for an in-flight create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCreate {
    key: Uuid,
}

impl PendingCreate {
    pub fn key(&self) -> Uuid {
        self.key
    }
}

/// Handle for an in-flight delete; owns the removed row so it can be restored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRemove {
    index: usize,
    row: WordRow,
}

impl PendingRemove {
    pub fn id(&self) -> Option<WordId> {
        self.row.entry.id
    }

    pub fn entry(&self) -> &WordEntry {
        &self.row.entry
    }
}

/// Reject drafts the server should never see.
pub fn validate_draft(draft: &WordEntry) -> Result<(), ValidationError> {
    if draft.word.trim().is_empty() {
        return Err(ValidationError::EmptyWord);
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    rows: Vec<WordRow>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from a server response, preserving its order.
    ///
    /// Entries without an id and repeated ids are dropped.
    pub fn from_server(entries: Vec<WordEntry>) -> Self {
        WordList::new().append_page(entries)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[WordRow] {
        &self.rows
    }

    pub fn entries(&self) -> impl Iterator<Item = &WordEntry> {
        self.rows.iter().map(|row| &row.entry)
    }

    pub fn get(&self, id: WordId) -> Option<&WordEntry> {
        self.rows
            .iter()
            .find(|row| row.id() == Some(id))
            .map(|row| &row.entry)
    }

    pub fn contains(&self, id: WordId) -> bool {
        self.get(id).is_some()
    }

    /// Highest server id in the list.
    pub fn max_persisted_id(&self) -> Option<WordId> {
        self.rows.iter().filter_map(WordRow::id).max()
    }

    pub fn begin_create(&self, draft: &WordEntry) -> Result<(WordList, PendingCreate), ValidationError> {
        validate_draft(draft)?;
        let key = Uuid::new_v4();
        let mut rows = self.rows.clone();
        rows.push(WordRow {
            key,
            entry: draft.to_draft(),
            state: RowState::PendingCreate,
        });
        Ok((WordList { rows }, PendingCreate { key }))
    }

    /// Adopt the server's copy of the entry, id included.
    ///
    /// The server owns identifiers: a row that already holds the returned id
    /// is stale and is dropped in favour of the confirmed one.
    pub fn confirm_create(&self, pending: &PendingCreate, persisted: WordEntry) -> Result<WordList, ReconcileError> {
        let id = persisted.id.ok_or(ReconcileError::MissingId)?;
        if !self
            .rows
            .iter()
            .any(|row| row.key == pending.key && row.state == RowState::PendingCreate)
        {
            return Err(ReconcileError::UnknownRow);
        }
        let rows = self
            .rows
            .iter()
            .filter_map(|row| {
                if row.key == pending.key {
                    Some(WordRow {
                        key: row.key,
                        entry: persisted.clone(),
                        state: RowState::Persisted,
                    })
                } else if row.id() == Some(id) {
                    tracing::warn!(id, word = %row.entry.word, "stale row replaced by confirmed entry");
                    None
                } else {
                    Some(row.clone())
                }
            })
            .collect();
        Ok(WordList { rows })
    }

    pub fn reject_create(&self, pending: &PendingCreate) -> WordList {
        let rows = self
            .rows
            .iter()
            .filter(|row| !(row.key == pending.key && row.state == RowState::PendingCreate))
            .cloned()
            .collect();
        WordList { rows }
    }

    /// Optimistically drop the persisted row with `id`.
    ///
    /// Returns `None` (and an unchanged list) when no persisted row has that id.
    pub fn begin_remove(&self, id: WordId) -> (WordList, Option<PendingRemove>) {
        let Some(index) = self.rows.iter().position(|row| row.id() == Some(id)) else {
            return (self.clone(), None);
        };
        let mut rows = self.rows.clone();
        let row = rows.remove(index);
        (WordList { rows }, Some(PendingRemove { index, row }))
    }

    /// Put a row back after its delete failed, as close to its old position as
    /// the current list allows.
    pub fn rollback_remove(&self, pending: &PendingRemove) -> WordList {
        if let Some(id) = pending.id() {
            if self.contains(id) {
                return self.clone();
            }
        }
        let mut rows = self.rows.clone();
        let index = pending.index.min(rows.len());
        rows.insert(index, pending.row.clone());
        WordList { rows }
    }

    /// Append server entries whose ids are not in the list yet.
    pub fn append_page(&self, entries: Vec<WordEntry>) -> WordList {
        let mut list = self.clone();
        for entry in entries {
            match entry.id {
                None => tracing::warn!(word = %entry.word, "server entry without id ignored"),
                Some(id) if list.contains(id) => {
                    tracing::debug!(id, "duplicate entry ignored");
                }
                Some(_) => list.rows.push(WordRow::persisted(entry)),
            }
        }
        list
    }
}
