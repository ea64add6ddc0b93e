use crate::api::{ApiError, PlayerApi, Result};
use crate::application::request_token::{RequestSequence, RequestToken};
use crate::domain::{NavigationIntent, Player, SearchParams};
use chrono::NaiveDate;

/// View-state of the player search page
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    /// No location observed yet
    Idle,
    /// The query string carries no usable `name`; nothing was fetched
    MissingName,
    /// A search for `name` is in flight
    Searching { name: String },
    /// Exactly one player matched and a redirect to its profile was emitted
    Redirected { to: NavigationIntent, player: Player },
    /// Zero or several players matched, in backend order
    Settled { players: Vec<Player> },
    /// The search could not be completed
    Failed { error: ApiError },
}

impl SearchState {
    /// Whether the busy indicator should be visible
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            SearchState::Idle | SearchState::Searching { .. } | SearchState::Redirected { .. }
        )
    }

    pub fn shows_table(&self) -> bool {
        matches!(self, SearchState::Settled { .. })
    }

    pub fn players(&self) -> &[Player] {
        match self {
            SearchState::Settled { players } => players,
            _ => &[],
        }
    }

    /// Table rows for the settled results, ages as of `today`
    pub fn rows_on(&self, today: NaiveDate) -> Vec<PlayerRow> {
        self.players()
            .iter()
            .map(|player| PlayerRow::from_player(player, today))
            .collect()
    }

    pub fn rows(&self) -> Vec<PlayerRow> {
        self.rows_on(chrono::Utc::now().date_naive())
    }
}

/// The visible cells of one search result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRow {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub age: String,
}

impl PlayerRow {
    pub fn from_player(player: &Player, today: NaiveDate) -> Self {
        Self {
            id: player.id().to_string(),
            first_name: player.first_name().unwrap_or_default().to_string(),
            last_name: player.last_name().unwrap_or_default().to_string(),
            age: player
                .age_on(today)
                .map(|age| age.to_string())
                .unwrap_or_default(),
        }
    }

    /// (first name, last name, age)
    pub fn cells(&self) -> [&str; 3] {
        [
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.age.as_str(),
        ]
    }
}

/// A name search the caller should dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    token: RequestToken,
    name: String,
    limit: i64,
}

impl SearchRequest {
    pub fn token(&self) -> RequestToken {
        self.token
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }
}

/// What the caller should do after a search result was applied
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Navigate away; the page will unmount
    Redirect(NavigationIntent),
    /// Re-render with the controller's new state
    Render,
    /// The result belonged to a superseded request and was dropped
    Discarded,
}

/// Decides, per query string, whether to redirect or to render a result table
#[derive(Debug, Clone)]
pub struct SearchController {
    limit: i64,
    last_query: Option<String>,
    sequence: RequestSequence,
    state: SearchState,
}

impl SearchController {
    pub fn new(limit: i64) -> Self {
        Self {
            limit,
            last_query: None,
            sequence: RequestSequence::new(),
            state: SearchState::Idle,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Observe the current query string (on mount and on every location change)
    ///
    /// Returns the request to dispatch, if any. An unchanged query string is
    /// a no-op; a changed one supersedes any request still in flight.
    pub fn on_query(&mut self, query: &str) -> Option<SearchRequest> {
        if self.last_query.as_deref() == Some(query) {
            tracing::trace!("Query '{}' unchanged, not searching again", query);
            return None;
        }
        self.last_query = Some(query.to_string());

        let token = self.sequence.next_token();
        let params = SearchParams::from_query_str(query);

        match params.search_name() {
            Some(name) => {
                tracing::debug!("Search {} for '{}' (limit {})", token, name, self.limit);
                self.state = SearchState::Searching {
                    name: name.to_string(),
                };
                Some(SearchRequest {
                    token,
                    name: name.to_string(),
                    limit: self.limit,
                })
            }
            None => {
                tracing::debug!("No search name in query '{}'", query);
                self.state = SearchState::MissingName;
                None
            }
        }
    }

    /// Apply the response of a dispatched request
    pub fn apply(&mut self, token: RequestToken, result: Result<Vec<Player>>) -> SearchOutcome {
        if !self.sequence.is_current(token) || !matches!(self.state, SearchState::Searching { .. })
        {
            tracing::warn!("Discarding stale search response {}", token);
            return SearchOutcome::Discarded;
        }

        match result {
            Ok(mut players) if players.len() == 1 => {
                let player = players.remove(0);
                let intent = NavigationIntent::profile(player.id().clone());
                tracing::info!("Single match, redirecting to {}", intent);
                self.state = SearchState::Redirected {
                    to: intent.clone(),
                    player,
                };
                SearchOutcome::Redirect(intent)
            }
            Ok(players) => {
                tracing::debug!("Search {} settled with {} players", token, players.len());
                self.state = SearchState::Settled { players };
                SearchOutcome::Render
            }
            Err(error) => {
                tracing::warn!("Search {} failed: {}", token, error);
                self.state = SearchState::Failed { error };
                SearchOutcome::Render
            }
        }
    }

    /// Forget the request in flight; its response will be discarded
    ///
    /// Called when the page stops observing the location.
    pub fn cancel(&mut self) {
        if matches!(self.state, SearchState::Searching { .. }) {
            tracing::debug!("Cancelling pending search");
        }
        self.sequence.next_token();
    }

    /// Show the single match as a one-row table when its redirect could not
    /// be carried out; `false` if no redirect was pending
    pub fn settle_redirect(&mut self) -> bool {
        let state = std::mem::replace(&mut self.state, SearchState::Idle);
        match state {
            SearchState::Redirected { player, .. } => {
                self.state = SearchState::Settled {
                    players: vec![player],
                };
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    /// Observe `query`, run the resulting request against `api` and apply it
    ///
    /// Returns `None` when nothing had to be fetched.
    pub async fn run<A>(&mut self, api: &A, query: &str) -> Option<SearchOutcome>
    where
        A: PlayerApi + ?Sized,
    {
        let request = self.on_query(query)?;
        let result = api
            .find_players_with_name_like(request.name(), request.limit())
            .await;
        Some(self.apply(request.token(), result))
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(crate::domain::DEFAULT_SEARCH_LIMIT)
    }
}
