use async_trait::async_trait;
use cucumber::World;
use rosterreview_core::{
    api::{self, ApiRequest},
    ApiError, NavigationIntent, Player, PlayerApi, ProfileController, SearchController,
    SearchOutcome,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// Scripted backend that records every request it receives
#[derive(Debug, Default)]
pub struct FakePlayerApi {
    players: HashMap<String, Player>,
    searches: HashMap<String, Vec<String>>,
    unreachable: bool,
    calls: Mutex<Vec<ApiRequest>>,
}

impl FakePlayerApi {
    pub fn add_player(&mut self, player: Player) {
        self.players.insert(player.id().to_string(), player);
    }

    /// Answer a search for `name` with the given player ids, in order
    pub fn add_search(&mut self, name: &str, ids: Vec<String>) {
        self.searches.insert(name.to_string(), ids);
    }

    pub fn set_unreachable(&mut self) {
        self.unreachable = true;
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, path: &str) -> Vec<ApiRequest> {
        self.calls()
            .into_iter()
            .filter(|call| call.path() == path)
            .collect()
    }

    fn record(&self, request: ApiRequest) -> api::Result<()> {
        self.calls.lock().unwrap().push(request);
        if self.unreachable {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl PlayerApi for FakePlayerApi {
    async fn find_players_with_name_like(
        &self,
        name: &str,
        limit: i64,
    ) -> api::Result<Vec<Player>> {
        self.record(ApiRequest::find_players_with_name_like(name, limit))?;

        let ids = self.searches.get(name).cloned().unwrap_or_default();
        Ok(ids
            .iter()
            .filter_map(|id| self.players.get(id).cloned())
            .collect())
    }

    async fn get_player_by_id(&self, id: &str) -> api::Result<Option<Player>> {
        self.record(ApiRequest::player_by_id(id))?;
        Ok(self.players.get(id).cloned())
    }
}

#[derive(Debug, World, Default)]
pub struct RosterWorld {
    /// Backend the controllers talk to
    pub api: FakePlayerApi,

    /// Search page controller (the system under test)
    pub search: SearchController,

    /// Profile page controller (the system under test)
    pub profile: ProfileController,

    /// Last search outcome, if the last search produced one
    pub last_outcome: Option<SearchOutcome>,

    /// Where the browser was sent, if anywhere
    pub location: Option<String>,
}

impl RosterWorld {
    /// Open the search page with `query` as the location's query string
    pub async fn open_search(&mut self, query: &str) {
        let outcome = self.search.run(&self.api, query).await;
        if let Some(SearchOutcome::Redirect(intent)) = &outcome {
            self.navigate(intent);
        }
        self.last_outcome = outcome;
    }

    /// Open the profile page for `id`
    pub async fn open_profile(&mut self, id: &str) {
        self.profile.run(&self.api, id).await;
    }

    pub fn navigate(&mut self, intent: &NavigationIntent) {
        self.location = Some(intent.to_path());
    }
}
