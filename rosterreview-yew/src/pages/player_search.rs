use crate::components::{Loader, PlayerTable};
use crate::hooks::use_player_search;
use rosterreview_core::SearchState;
use yew::prelude::*;

/// Results of the name search carried in the `name` query parameter
///
/// A single match never renders here: the hook redirects to its profile.
#[function_component(PlayerSearchPage)]
pub fn player_search_page() -> Html {
    let state = use_player_search();

    let body = match &state {
        SearchState::MissingName => html! {
            <p class="search-hint">{"Enter a player name in the search box."}</p>
        },
        SearchState::Failed { error } => html! {
            <p class="search-error">{format!("The player search failed: {}", error)}</p>
        },
        SearchState::Settled { .. } => html! {
            <PlayerTable rows={state.rows()} />
        },
        _ => html! {},
    };

    html! {
        <div class="player-search-page">
            <Loader visible={state.is_busy()} />
            {body}
        </div>
    }
}
