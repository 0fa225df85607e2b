//! Client configuration injected at construction time.

use crate::error::ConfigError;

/// Base URL the vocabulary frontend talks to when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";

/// Page size used by `WordListComponent::load_more` unless overridden.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    page_size: u32,
}

impl ClientConfig {
    /// Validate and normalize `base_url` (trimmed, trailing slashes removed).
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(trimmed.to_string()));
        }
        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    pub fn with_page_size(mut self, page_size: u32) -> Result<Self, ConfigError> {
        if page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        self.page_size = page_size;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_api() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), "http://localhost:3333");
        assert_eq!(config.page_size(), 20);
    }

    #[test]
    fn trailing_slashes_and_whitespace_are_stripped() {
        let config = ClientConfig::new("  https://vocab.example.com//  ").unwrap();
        assert_eq!(config.base_url(), "https://vocab.example.com");
    }

    #[test]
    fn rejects_empty_url() {
        assert_eq!(ClientConfig::new("   "), Err(ConfigError::EmptyBaseUrl));
    }

    #[test]
    fn rejects_non_http_scheme() {
        assert!(matches!(
            ClientConfig::new("ftp://example.com"),
            Err(ConfigError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn page_size_must_be_positive() {
        let config = ClientConfig::default();
        assert_eq!(config.clone().with_page_size(0), Err(ConfigError::ZeroPageSize));
        assert_eq!(config.with_page_size(5).unwrap().page_size(), 5);
    }
}
