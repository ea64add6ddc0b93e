use crate::hooks::use_player_api;
use crate::route::navigate;
use rosterreview_core::{SearchController, SearchOutcome, SearchState};
use yew::prelude::*;
use yew_router::prelude::*;

/// Drive a `SearchController` from the current location's query string
///
/// Searches on mount and whenever the query string changes. A single match
/// navigates to that player's profile; anything else re-renders the caller
/// with the new state.
#[hook]
pub fn use_player_search() -> SearchState {
    let context = use_player_api();
    let navigator = use_navigator();
    let query = use_location()
        .map(|location| location.query_str().to_string())
        .unwrap_or_default();

    let search_limit = context.config.search_limit;
    let controller = use_mut_ref(move || SearchController::new(search_limit));
    let state = use_state(|| controller.borrow().state().clone());

    {
        let state = state.clone();
        let api = context.api.clone();

        use_effect_with(query, move |query| {
            let request = controller.borrow_mut().on_query(query);
            state.set(controller.borrow().state().clone());

            let teardown_controller = controller.clone();
            if let Some(request) = request {
                tracing::info!("Searching players named '{}'", request.name());
                wasm_bindgen_futures::spawn_local(async move {
                    let result = api
                        .find_players_with_name_like(request.name(), request.limit())
                        .await;
                    let outcome = controller.borrow_mut().apply(request.token(), result);

                    match outcome {
                        SearchOutcome::Redirect(intent) => match navigator {
                            Some(navigator) => navigate(&navigator, &intent),
                            None => {
                                tracing::error!("No router available to open {}", intent);
                                controller.borrow_mut().settle_redirect();
                                state.set(controller.borrow().state().clone());
                            }
                        },
                        SearchOutcome::Render => state.set(controller.borrow().state().clone()),
                        SearchOutcome::Discarded => {}
                    }
                });
            }
            move || teardown_controller.borrow_mut().cancel()
        });
    }

    (*state).clone()
}
