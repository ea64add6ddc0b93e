use crate::hooks::use_player_api;
use rosterreview_core::{ProfileController, ProfileState};
use yew::prelude::*;

/// Drive a `ProfileController` from the route's id segment
///
/// Loads on mount and again only when `id` changes.
#[hook]
pub fn use_player_profile(id: &str) -> ProfileState {
    let context = use_player_api();
    let controller = use_mut_ref(ProfileController::new);
    let state = use_state(|| controller.borrow().state().clone());

    {
        let state = state.clone();
        let api = context.api.clone();

        use_effect_with(id.to_string(), move |id| {
            let request = controller.borrow_mut().on_route(id);
            state.set(controller.borrow().state().clone());

            let teardown_controller = controller.clone();
            if let Some(request) = request {
                tracing::info!("Loading player '{}'", request.id());
                wasm_bindgen_futures::spawn_local(async move {
                    let result = api.get_player_by_id(request.id()).await;
                    if controller.borrow_mut().apply(request.token(), result) {
                        state.set(controller.borrow().state().clone());
                    }
                });
            }
            move || teardown_controller.borrow_mut().cancel()
        });
    }

    (*state).clone()
}
