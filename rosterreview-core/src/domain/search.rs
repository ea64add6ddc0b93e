use serde::{Deserialize, Serialize};

/// Maximum number of players requested by a name search
pub const DEFAULT_SEARCH_LIMIT: i64 = 25;

/// Parameters of the player search page, carried in the query string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl SearchParams {
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Parse `?name=...` (leading `?` optional, unknown keys ignored)
    ///
    /// A repeated `name` keeps its first value. A query string that cannot
    /// be decoded carries no usable name.
    pub fn from_query_str(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        match serde_urlencoded::from_str::<Vec<(String, String)>>(query) {
            Ok(pairs) => Self {
                name: pairs
                    .into_iter()
                    .find(|(key, _)| key == "name")
                    .map(|(_, value)| value),
            },
            Err(e) => {
                tracing::warn!("Ignoring malformed search query '{}': {}", query, e);
                Self::default()
            }
        }
    }

    /// The name to search for, if it is non-blank
    pub fn search_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Encode as `?name=...`, empty when there is nothing to encode
    pub fn to_query_string(&self) -> String {
        match serde_urlencoded::to_string(self) {
            Ok(encoded) if !encoded.is_empty() => format!("?{}", encoded),
            _ => String::new(),
        }
    }
}
