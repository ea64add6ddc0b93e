use crate::route::AppRoute;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"Page not found"}</h1>
            <Link<AppRoute> to={AppRoute::Home}>{"Back to the start page"}</Link<AppRoute>>
        </div>
    }
}
