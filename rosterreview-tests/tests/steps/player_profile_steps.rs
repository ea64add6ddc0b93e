use cucumber::{given, then, when};
use rosterreview_core::{api::PLAYER_DATA_PATH, Player, ProfileState};
use rosterreview_tests::RosterWorld;

#[given(expr = "a player {string} nicknamed {string} named {string} {string}")]
async fn nicknamed_player_exists(
    world: &mut RosterWorld,
    id: String,
    nickname: String,
    first: String,
    last: String,
) {
    world.api.add_player(
        Player::new(id)
            .with_names(&first, &last)
            .with_nickname(&nickname),
    );
}

#[when(expr = "the profile page opens for player {string}")]
async fn open_profile_page(world: &mut RosterWorld, id: String) {
    world.open_profile(&id).await;
}

#[then(expr = "the profile caption reads {string}")]
async fn caption_reads(world: &mut RosterWorld, caption: String) {
    assert_eq!(world.profile.state().caption(), caption);
}

#[then(expr = "the profile caption ends with {string}")]
async fn caption_ends_with(world: &mut RosterWorld, suffix: String) {
    let caption = world.profile.state().caption();
    assert!(caption.ends_with(&suffix), "Caption was '{}'", caption);
}

#[then(expr = "{int} player lookup(s) was/were sent")]
async fn lookups_sent(world: &mut RosterWorld, count: usize) {
    assert_eq!(world.api.calls_to(PLAYER_DATA_PATH).len(), count);
}

#[then(expr = "the lookups asked for {string}")]
async fn lookups_asked_for(world: &mut RosterWorld, ids: String) {
    let expected: Vec<_> = ids.split(',').map(str::trim).collect();
    let calls = world.api.calls_to(PLAYER_DATA_PATH);
    let asked: Vec<_> = calls
        .iter()
        .map(|call| call.param("id").unwrap_or_default())
        .collect();
    assert_eq!(asked, expected);
}

#[then("the profile page reports the player as not found")]
async fn reports_not_found(world: &mut RosterWorld) {
    assert!(matches!(world.profile.state(), ProfileState::NotFound { .. }));
    assert!(!world.profile.state().is_busy());
}

#[then("the profile page shows an error")]
async fn shows_profile_error(world: &mut RosterWorld) {
    assert!(matches!(world.profile.state(), ProfileState::Failed { .. }));
    assert!(!world.profile.state().is_busy());
}
