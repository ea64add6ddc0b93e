use crate::providers::ApiContext;
use yew::prelude::*;

/// Hook to access the player API
#[hook]
pub fn use_player_api() -> ApiContext {
    use_context::<ApiContext>().expect("use_player_api must be used within a PlayerApiProvider")
}
