//! CLI argument parsing for `vocab`

use clap::{Parser, Subcommand};
use vocab_core::{ClientConfig, ConfigError, WordId, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};

/// Manage a vocabulary list stored behind the vocabulary API
#[derive(Parser, Debug)]
#[command(name = "vocab")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the vocabulary API
    #[arg(long, global = true, env = "VOCAB_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Entries fetched per `more` page
    #[arg(long, global = true, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show every word
    List,

    /// Page through words after the last one loaded
    More {
        /// How many pages to fetch
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },

    /// Add a word
    Add {
        word: String,

        #[arg(long, short, default_value = "")]
        translation: String,

        #[arg(long, short, default_value = "")]
        description: String,
    },

    /// Delete a word by id
    Remove { id: WordId },
}

impl Args {
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        ClientConfig::new(&self.base_url)?.with_page_size(self.page_size)
    }
}
