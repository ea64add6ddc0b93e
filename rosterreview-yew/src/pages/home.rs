use yew::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="home-page">
            <h1>{"Roster Review"}</h1>
            <p>{"Search for a player by name to open their profile."}</p>
        </div>
    }
}
