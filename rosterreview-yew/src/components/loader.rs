use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoaderProps {
    pub visible: bool,
}

/// Busy indicator
#[function_component(Loader)]
pub fn loader(props: &LoaderProps) -> Html {
    let display = if props.visible { "flex" } else { "none" };

    html! {
        <div class="loader-container" style={format!("display: {}", display)}>
            <div class="loader"></div>
        </div>
    }
}
