use cucumber::{then, when};
use rosterreview_core::NavigationIntent;
use rosterreview_tests::RosterWorld;

#[when(expr = "the search form is submitted with {string}")]
async fn submit_search_form(world: &mut RosterWorld, input: String) {
    if let Some(intent) = NavigationIntent::search(&input) {
        world.navigate(&intent);
    }
}

#[when("the search page follows the browser location")]
async fn follow_location(world: &mut RosterWorld) {
    let location = world.location.clone().expect("No navigation happened");
    let query = location
        .find('?')
        .map(|start| &location[start..])
        .unwrap_or_default();
    world.open_search(query).await;
}

#[then("no request was sent")]
async fn no_request(world: &mut RosterWorld) {
    assert!(world.api.calls().is_empty(), "Requests: {:?}", world.api.calls());
}
