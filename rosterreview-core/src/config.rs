use crate::domain::DEFAULT_SEARCH_LIMIT;

/// Client settings, baked in at compile time and overridable at runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for API URLs; empty means same origin
    pub api_base_url: String,
    /// Maximum number of players requested per name search
    pub search_limit: i64,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            api_base_url: option_env!("ROSTERREVIEW_API_BASE")
                .unwrap_or_default()
                .to_string(),
            search_limit: option_env!("ROSTERREVIEW_SEARCH_LIMIT")
                .and_then(|limit| limit.parse().ok())
                .unwrap_or(DEFAULT_SEARCH_LIMIT),
        }
    }

    /// Compile-time values overridden by the process environment
    pub fn from_env() -> Self {
        let defaults = Self::new();
        Self {
            api_base_url: std::env::var("ROSTERREVIEW_API_BASE")
                .unwrap_or(defaults.api_base_url),
            search_limit: std::env::var("ROSTERREVIEW_SEARCH_LIMIT")
                .ok()
                .and_then(|limit| limit.parse().ok())
                .unwrap_or(defaults.search_limit),
        }
    }

    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    pub fn with_search_limit(mut self, search_limit: i64) -> Self {
        self.search_limit = search_limit;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
