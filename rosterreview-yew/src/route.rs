use rosterreview_core::NavigationIntent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{HomePage, NotFoundPage, PlayerProfilePage, PlayerSearchPage, ValueChartPage};

/// Client-side routes
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum AppRoute {
    #[at("/rosterreview/")]
    Home,
    #[at("/rosterreview/value-chart/")]
    ValueChart,
    #[at("/rosterreview/player/:id")]
    PlayerProfile { id: String },
    /// Reads the searched name from `?name=`
    #[at("/rosterreview/player-search")]
    PlayerSearch,
    #[not_found]
    #[at("/rosterreview/404")]
    NotFound,
}

pub fn switch(route: AppRoute) -> Html {
    match route {
        AppRoute::Home => html! { <HomePage /> },
        AppRoute::ValueChart => html! { <ValueChartPage /> },
        AppRoute::PlayerProfile { id } => html! { <PlayerProfilePage {id} /> },
        AppRoute::PlayerSearch => html! { <PlayerSearchPage /> },
        AppRoute::NotFound => html! { <NotFoundPage /> },
    }
}

/// Apply a navigation intent through the router
pub fn navigate(navigator: &Navigator, intent: &NavigationIntent) {
    tracing::info!("Navigating to {}", intent);
    match intent {
        NavigationIntent::PlayerProfile { id } => {
            navigator.push(&AppRoute::PlayerProfile { id: id.to_string() });
        }
        NavigationIntent::PlayerSearch { params } => {
            if let Err(e) = navigator.push_with_query(&AppRoute::PlayerSearch, params) {
                tracing::error!("Failed to navigate to {}: {:?}", intent, e);
            }
        }
    }
}
