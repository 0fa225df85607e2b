//! The word list component: local state plus the calls that keep it in sync
//! with the server.
//!
//! # Design
//! Every mutation goes through a [`WordList`] transition. A create or delete
//! is applied optimistically, the request is sent, and on failure the
//! matching rollback runs, so a rejected change never stays in the list.
//! Failures are also recorded as `feedback` for the front end to show.

use tracing::{debug, warn};

use crate::client::VocabClient;
use crate::config::ClientConfig;
use crate::error::{ApiError, ComponentError};
use crate::transport::Transport;
use crate::types::{WordEntry, WordId};
use crate::view::View;
use crate::words::WordList;

pub struct WordListComponent<T> {
    client: VocabClient,
    transport: T,
    page_size: u32,
    /// Highest id the server has handed out through a list or page fetch.
    /// Local creates never move it.
    page_cursor: Option<WordId>,
    words: WordList,
    new_word: WordEntry,
    feedback: Option<String>,
}

impl<T: Transport> WordListComponent<T> {
    pub fn new(config: &ClientConfig, transport: T) -> Self {
        Self::with_words(config, transport, WordList::new())
    }

    /// Start from an existing list instead of an empty one.
    pub fn with_words(config: &ClientConfig, transport: T, words: WordList) -> Self {
        Self {
            client: VocabClient::from_config(config),
            transport,
            page_size: config.page_size(),
            page_cursor: words.max_persisted_id(),
            words,
            new_word: WordEntry::default(),
            feedback: None,
        }
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn new_word(&self) -> &WordEntry {
        &self.new_word
    }

    pub fn set_new_word(&mut self, entry: WordEntry) {
        self.new_word = entry;
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Initial load: replace the list with the server's, in server order.
    pub fn mount(&mut self) -> Result<(), ComponentError> {
        match self.client.fetch_words(&self.transport) {
            Ok(entries) => {
                self.page_cursor = max_id(&entries);
                self.words = WordList::from_server(entries);
                debug!(count = self.words.len(), "word list loaded");
                self.feedback = None;
                Ok(())
            }
            Err(err) => Err(self.fail("loading words failed", err)),
        }
    }

    /// Submit `new_word`. On success the form is cleared; on failure the list
    /// is rolled back and the form keeps its contents.
    pub fn submit(&mut self) -> Result<WordEntry, ComponentError> {
        let (words, pending) = match self.words.begin_create(&self.new_word) {
            Ok(started) => started,
            Err(err) => {
                self.feedback = Some(err.to_string());
                return Err(err.into());
            }
        };
        self.words = words;
        debug!(word = %self.new_word.word, key = %pending.key(), "create pending");

        match self.client.add_word(&self.transport, &self.new_word) {
            Ok(persisted) => match self.words.confirm_create(&pending, persisted.clone()) {
                Ok(words) => {
                    self.words = words;
                    debug!(id = ?persisted.id, "create confirmed");
                    self.new_word = WordEntry::default();
                    self.feedback = None;
                    Ok(persisted)
                }
                Err(err) => {
                    self.words = self.words.reject_create(&pending);
                    warn!(error = %err, "create could not be reconciled, rolled back");
                    self.feedback = Some(format!("adding word failed: {err}"));
                    Err(err.into())
                }
            },
            Err(err) => {
                self.words = self.words.reject_create(&pending);
                warn!(word = %self.new_word.word, "create rolled back");
                Err(self.fail("adding word failed", err))
            }
        }
    }

    /// Delete the persisted entry `id`. Unknown ids are a no-op and send no
    /// request.
    pub fn remove(&mut self, id: WordId) -> Result<(), ComponentError> {
        let (words, pending) = self.words.begin_remove(id);
        let Some(pending) = pending else {
            debug!(id, "remove ignored, id not in list");
            return Ok(());
        };
        self.words = words;
        debug!(id, word = %pending.entry().word, "remove pending");

        match self.client.remove_word(&self.transport, id) {
            Ok(()) => {
                debug!(id, "remove confirmed");
                self.feedback = None;
                Ok(())
            }
            Err(err) => {
                self.words = self.words.rollback_remove(&pending);
                warn!(id, "remove rolled back");
                Err(self.fail("removing word failed", err))
            }
        }
    }

    /// Fetch the next page after the page cursor and append it.
    /// Returns how many rows were added.
    pub fn load_more(&mut self) -> Result<usize, ComponentError> {
        let cursor = self.page_cursor.unwrap_or(0);
        match self
            .client
            .fetch_words_by_id(&self.transport, cursor, self.page_size)
        {
            Ok(page) => {
                self.page_cursor = self.page_cursor.max(max_id(&page));
                let before = self.words.len();
                self.words = self.words.append_page(page);
                let added = self.words.len() - before;
                debug!(cursor, added, "page loaded");
                self.feedback = None;
                Ok(added)
            }
            Err(err) => Err(self.fail("loading more words failed", err)),
        }
    }

    pub fn render(&self) -> View {
        View::new(&self.words, &self.new_word, self.feedback.as_deref())
    }

    fn fail(&mut self, context: &str, err: ApiError) -> ComponentError {
        warn!(error = %err, "{context}");
        self.feedback = Some(format!("{context}: {err}"));
        err.into()
    }
}

fn max_id(entries: &[WordEntry]) -> Option<WordId> {
    entries.iter().filter_map(|entry| entry.id).max()
}
