use crate::domain::{PlayerId, SearchParams};
use std::fmt;

/// Client-side paths served by the application
pub mod paths {
    pub const HOME: &str = "/rosterreview/";
    pub const VALUE_CHART: &str = "/rosterreview/value-chart/";
    pub const PLAYER_SEARCH: &str = "/rosterreview/player-search";
    pub const PLAYER_PROFILE_PREFIX: &str = "/rosterreview/player/";

    pub fn player_profile(id: &str) -> String {
        format!("{}{}", PLAYER_PROFILE_PREFIX, id)
    }
}

/// A navigation the UI layer should perform
///
/// Controllers return intents as values; applying them is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Show the profile page of a single player
    PlayerProfile { id: PlayerId },
    /// Show the search page for a name
    PlayerSearch { params: SearchParams },
}

impl NavigationIntent {
    pub fn profile(id: PlayerId) -> Self {
        NavigationIntent::PlayerProfile { id }
    }

    /// Intent for a search form submission; `None` when the input is blank
    pub fn search(input: &str) -> Option<Self> {
        let name = input.trim();
        if name.is_empty() {
            return None;
        }

        Some(NavigationIntent::PlayerSearch {
            params: SearchParams::with_name(name),
        })
    }

    /// Full client-side location (path plus query string)
    pub fn to_path(&self) -> String {
        match self {
            NavigationIntent::PlayerProfile { id } => paths::player_profile(id.as_str()),
            NavigationIntent::PlayerSearch { params } => {
                format!("{}{}", paths::PLAYER_SEARCH, params.to_query_string())
            }
        }
    }
}

impl fmt::Display for NavigationIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}
