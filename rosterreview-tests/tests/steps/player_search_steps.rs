use cucumber::{given, then, when};
use rosterreview_core::{
    api::FIND_PLAYERS_WITH_NAME_LIKE_PATH, Player, SearchController, SearchState,
};
use rosterreview_tests::RosterWorld;

// ===== Given Steps =====

#[given(expr = "a player {string} named {string} {string} aged {int}")]
async fn player_exists(world: &mut RosterWorld, id: String, first: String, last: String, age: u32) {
    world
        .api
        .add_player(Player::new(id).with_names(&first, &last).with_age(age));
}

#[given(expr = "a search for {string} returns the players {string}")]
async fn search_returns(world: &mut RosterWorld, name: String, ids: String) {
    let ids = ids
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();
    world.api.add_search(&name, ids);
}

#[given(expr = "the search limit is {int}")]
async fn search_limit(world: &mut RosterWorld, limit: i64) {
    world.search = SearchController::new(limit);
}

#[given("the backend is unreachable")]
async fn backend_unreachable(world: &mut RosterWorld) {
    world.api.set_unreachable();
}

// ===== When Steps =====

#[when(expr = "the player search page opens with query {string}")]
async fn open_search_page(world: &mut RosterWorld, query: String) {
    world.open_search(&query).await;
}

// ===== Then Steps =====

#[then(expr = "the results table has {int} rows")]
async fn table_has_rows(world: &mut RosterWorld, count: usize) {
    assert!(world.search.state().shows_table(), "No results table shown");
    assert_eq!(world.search.state().rows().len(), count);
}

#[then(expr = "row {int} shows {string}, {string} and {string}")]
async fn row_shows(world: &mut RosterWorld, row: usize, first: String, last: String, age: String) {
    let rows = world.search.state().rows();
    let row = rows
        .get(row - 1)
        .unwrap_or_else(|| panic!("Only {} rows rendered", rows.len()));
    assert_eq!(row.cells(), [first.as_str(), last.as_str(), age.as_str()]);
}

#[then("no results table is shown")]
async fn no_table(world: &mut RosterWorld) {
    assert!(!world.search.state().shows_table());
}

#[then(expr = "the browser location becomes {string}")]
async fn location_becomes(world: &mut RosterWorld, location: String) {
    assert_eq!(world.location.as_deref(), Some(location.as_str()));
}

#[then("the browser location is unchanged")]
async fn location_unchanged(world: &mut RosterWorld) {
    assert_eq!(world.location, None);
}

#[then(expr = "the last search request URL is {string}")]
async fn last_search_url(world: &mut RosterWorld, url: String) {
    let calls = world.api.calls_to(FIND_PLAYERS_WITH_NAME_LIKE_PATH);
    let last = calls.last().expect("No search request sent");
    assert_eq!(last.url("").unwrap(), url);
}

#[then(expr = "{int} search request(s) was/were sent")]
async fn search_requests_sent(world: &mut RosterWorld, count: usize) {
    assert_eq!(world.api.calls_to(FIND_PLAYERS_WITH_NAME_LIKE_PATH).len(), count);
}

#[then("the search page asks for a name")]
async fn asks_for_name(world: &mut RosterWorld) {
    assert_eq!(world.search.state(), &SearchState::MissingName);
    assert!(!world.search.state().is_busy());
}

#[then("the search page shows an error")]
async fn shows_search_error(world: &mut RosterWorld) {
    assert!(
        matches!(world.search.state(), SearchState::Failed { .. }),
        "Expected a failed search, got {:?}",
        world.search.state()
    );
    assert!(!world.search.state().is_busy());
}
