use crate::route::navigate;
use rosterreview_core::{paths, NavigationIntent};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// Static navigation links (label, href)
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Value Chart", paths::VALUE_CHART),
    ("Draft Grades", "/rosterreview/gm-peformance/"),
    ("Redrafts", "/rosterreview/redrafts/"),
    ("Historical Trends", "/rosterreview/redrafts/"),
];

/// Site navigation bar with a player search box
///
/// The link menu collapses on narrow screens; the toggler expands it.
/// Submitting a non-blank name opens the player search page for it.
#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let is_open = use_state(|| false);
    let navigator = use_navigator();
    let search_input = use_node_ref();

    let on_toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    let on_submit = {
        let search_input = search_input.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let value = search_input
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();

            let Some(intent) = NavigationIntent::search(&value) else {
                tracing::debug!("Ignoring blank player search");
                return;
            };

            match &navigator {
                Some(navigator) => navigate(navigator, &intent),
                None => tracing::error!("No router available to open {}", intent),
            }
        })
    };

    html! {
        <nav class="navbar navbar-dark navbar-expand-lg bg-dark" aria-label="Main navigation">
            <a id="navbar-logo" href={paths::HOME}>{"overdrafted"}</a>
            <div class={classes!("collapse", "navbar-collapse", (*is_open).then_some("show"))}>
                <ul class="navbar-nav">
                    {for NAV_LINKS.iter().map(|(label, href)| html! {
                        <li class="nav-item">
                            <a class="nav-link p-2" href={*href}>{*label}</a>
                        </li>
                    })}
                </ul>
            </div>
            <div id="right-navbar-items">
                <button
                    class={classes!("navbar-toggler", (!*is_open).then_some("collapsed"))}
                    aria-expanded={is_open.to_string()}
                    aria-label="Toggle navigation"
                    onclick={on_toggle}
                >
                    <span class="navbar-toggler-icon"></span>
                </button>
                <form class="player-search-form" onsubmit={on_submit}>
                    <input
                        ref={search_input}
                        type="search"
                        placeholder="player search"
                        class="left-pill"
                    />
                    <button type="submit" class="right-pill" aria-label="Search">{"🔍"}</button>
                </form>
            </div>
        </nav>
    }
}
