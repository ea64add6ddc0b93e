use crate::api::error::{ApiError, Result};

pub const FIND_PLAYERS_WITH_NAME_LIKE_PATH: &str = "/rosterreview/api/player/withNameLike";
pub const PLAYER_DATA_PATH: &str = "/rosterreview/api/player/data";

/// A GET request against the player data API
///
/// Parameters keep their insertion order and are only encoded when the
/// request is rendered into a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    path: &'static str,
    params: Vec<(&'static str, String)>,
}

impl ApiRequest {
    /// Players whose names resemble `name`, at most `limit` of them
    ///
    /// A non-positive limit omits the parameter and leaves the cap to the
    /// backend.
    pub fn find_players_with_name_like(name: &str, limit: i64) -> Self {
        let mut params = vec![("name", name.to_string())];
        if limit > 0 {
            params.push(("limit", limit.to_string()));
        }

        Self {
            path: FIND_PLAYERS_WITH_NAME_LIKE_PATH,
            params,
        }
    }

    /// The player uniquely identified by `id`
    pub fn player_by_id(id: &str) -> Self {
        Self {
            path: PLAYER_DATA_PATH,
            params: vec![("id", id.to_string())],
        }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// URL-encoded query string, without the leading `?`
    pub fn query_string(&self) -> Result<String> {
        serde_urlencoded::to_string(&self.params)
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))
    }

    /// Full URL below `base`; an empty base gives a same-origin relative URL
    pub fn url(&self, base: &str) -> Result<String> {
        let base = base.trim_end_matches('/');
        let query = self.query_string()?;
        if query.is_empty() {
            Ok(format!("{}{}", base, self.path))
        } else {
            Ok(format!("{}{}?{}", base, self.path, query))
        }
    }
}
