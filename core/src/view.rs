//! Render model for the word list.
//!
//! The component renders into plain data; any front end (the `vocab` CLI, a
//! web view, a test) decides how to draw it. `Display` gives a text table.

use std::fmt;

use crate::types::{WordEntry, WordId};
use crate::words::{RowState, WordList};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: Option<WordId>,
    pub word: String,
    pub translation: String,
    pub description: String,
    /// Only persisted rows expose a delete control.
    pub deletable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormView {
    pub word: String,
    pub translation: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub rows: Vec<RowView>,
    pub form: FormView,
    pub feedback: Option<String>,
}

impl View {
    pub fn new(words: &WordList, new_word: &WordEntry, feedback: Option<&str>) -> Self {
        let rows = words
            .rows()
            .iter()
            .map(|row| RowView {
                id: row.id(),
                word: row.entry.word.clone(),
                translation: row.entry.translation.clone(),
                description: row.entry.description.clone(),
                deletable: row.state == RowState::Persisted,
            })
            .collect();
        Self {
            rows,
            form: FormView {
                word: new_word.word.clone(),
                translation: new_word.translation.clone(),
                description: new_word.description.clone(),
            },
            feedback: feedback.map(str::to_string),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(feedback) = &self.feedback {
            writeln!(f, "! {feedback}")?;
        }
        if self.rows.is_empty() {
            writeln!(f, "(no words)")?;
        }
        for row in &self.rows {
            let id = match row.id {
                Some(id) => id.to_string(),
                None => "…".to_string(),
            };
            let control = if row.deletable { "[x]" } else { "   " };
            write!(f, "{control} {id:>5}  {}", row.word)?;
            if !row.translation.is_empty() {
                write!(f, " = {}", row.translation)?;
            }
            if !row.description.is_empty() {
                write!(f, " ({})", row.description)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
