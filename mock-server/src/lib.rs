use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub id: u64,
    pub word: String,
    pub translation: String,
    pub description: String,
}

#[derive(Deserialize)]
pub struct CreateEntry {
    pub word: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub description: String,
}

/// Entries in insertion order; ids are handed out from `next_id` and never reused.
#[derive(Debug)]
pub struct Store {
    entries: Vec<WordEntry>,
    next_id: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/get-words", get(get_words))
        .route("/get-words-after/{id}/{count}", get(get_words_after))
        .route("/create-entry", post(create_entry))
        .route("/delete-word/{id}", delete(delete_word))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_words(State(db): State<Db>) -> Json<Vec<WordEntry>> {
    let store = db.read().await;
    Json(store.entries.clone())
}

async fn get_words_after(
    State(db): State<Db>,
    Path((id, count)): Path<(u64, usize)>,
) -> Json<Vec<WordEntry>> {
    let store = db.read().await;
    let page: Vec<WordEntry> = store
        .entries
        .iter()
        .filter(|entry| entry.id > id)
        .take(count)
        .cloned()
        .collect();
    tracing::debug!(after = id, count, returned = page.len(), "page served");
    Json(page)
}

async fn create_entry(
    State(db): State<Db>,
    Json(input): Json<CreateEntry>,
) -> Result<(StatusCode, Json<WordEntry>), (StatusCode, &'static str)> {
    if input.word.trim().is_empty() {
        return Err((StatusCode::UNPROCESSABLE_ENTITY, "word must not be empty"));
    }
    let mut store = db.write().await;
    let entry = WordEntry {
        id: store.next_id,
        word: input.word,
        translation: input.translation,
        description: input.description,
    };
    store.next_id += 1;
    store.entries.push(entry.clone());
    tracing::info!(id = entry.id, word = %entry.word, "entry created");
    Ok((StatusCode::CREATED, Json(entry)))
}

async fn delete_word(State(db): State<Db>, Path(id): Path<u64>) -> StatusCode {
    let mut store = db.write().await;
    match store.entries.iter().position(|entry| entry.id == id) {
        Some(index) => {
            store.entries.remove(index);
            tracing::info!(id, "entry deleted");
            StatusCode::NO_CONTENT
        }
        None => {
            tracing::debug!(id, "delete of unknown entry");
            StatusCode::NOT_FOUND
        }
    }
}
