use crate::api::{ApiError, ApiRequest, PlayerApi, Result};
use crate::domain::Player;
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory backend that records every request it receives
#[derive(Default)]
pub struct StubPlayerApi {
    searches: HashMap<String, Result<Vec<Player>>>,
    players: HashMap<String, Result<Option<Player>>>,
    calls: RefCell<Vec<ApiRequest>>,
}

impl StubPlayerApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, name: &str, players: Vec<Player>) -> Self {
        self.searches.insert(name.to_string(), Ok(players));
        self
    }

    pub fn with_search_error(mut self, name: &str, error: ApiError) -> Self {
        self.searches.insert(name.to_string(), Err(error));
        self
    }

    pub fn with_player(mut self, player: Player) -> Self {
        self.players
            .insert(player.id().to_string(), Ok(Some(player)));
        self
    }

    pub fn with_player_error(mut self, id: &str, error: ApiError) -> Self {
        self.players.insert(id.to_string(), Err(error));
        self
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl PlayerApi for StubPlayerApi {
    async fn find_players_with_name_like(&self, name: &str, limit: i64) -> Result<Vec<Player>> {
        self.calls
            .borrow_mut()
            .push(ApiRequest::find_players_with_name_like(name, limit));
        self.searches
            .get(name)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn get_player_by_id(&self, id: &str) -> Result<Option<Player>> {
        self.calls.borrow_mut().push(ApiRequest::player_by_id(id));
        self.players.get(id).cloned().unwrap_or(Ok(None))
    }
}
