use async_trait::async_trait;
use futures::channel::oneshot;
use rosterreview_core::api::Result;
use rosterreview_core::{Player, PlayerApi};
use std::cell::RefCell;
use std::collections::HashMap;

/// Install a fmt subscriber once so controller logs show up in test output
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("rosterreview_core=debug")
        .with_test_writer()
        .try_init();
}

/// Backend whose responses are released by the test, in any order
#[derive(Default)]
pub struct DeferredPlayerApi {
    pending_searches: RefCell<HashMap<String, oneshot::Sender<Result<Vec<Player>>>>>,
    pending_lookups: RefCell<HashMap<String, oneshot::Sender<Result<Option<Player>>>>>,
}

impl DeferredPlayerApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the in-flight search for `name`
    pub fn respond_search(&self, name: &str, result: Result<Vec<Player>>) {
        let sender = self
            .pending_searches
            .borrow_mut()
            .remove(name)
            .unwrap_or_else(|| panic!("no pending search for '{}'", name));
        let _ = sender.send(result);
    }

    /// Resolve the in-flight lookup for `id`
    pub fn respond_lookup(&self, id: &str, result: Result<Option<Player>>) {
        let sender = self
            .pending_lookups
            .borrow_mut()
            .remove(id)
            .unwrap_or_else(|| panic!("no pending lookup for '{}'", id));
        let _ = sender.send(result);
    }

    pub fn pending_search_count(&self) -> usize {
        self.pending_searches.borrow().len()
    }
}

#[async_trait(?Send)]
impl PlayerApi for DeferredPlayerApi {
    async fn find_players_with_name_like(&self, name: &str, _limit: i64) -> Result<Vec<Player>> {
        let (sender, receiver) = oneshot::channel();
        self.pending_searches
            .borrow_mut()
            .insert(name.to_string(), sender);
        receiver.await.expect("search dropped without a response")
    }

    async fn get_player_by_id(&self, id: &str) -> Result<Option<Player>> {
        let (sender, receiver) = oneshot::channel();
        self.pending_lookups
            .borrow_mut()
            .insert(id.to_string(), sender);
        receiver.await.expect("lookup dropped without a response")
    }
}
