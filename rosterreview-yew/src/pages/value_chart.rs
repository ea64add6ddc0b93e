use yew::prelude::*;

#[function_component(ValueChartPage)]
pub fn value_chart_page() -> Html {
    html! {
        <div class="value-chart-page">
            <h1>{"Value Chart"}</h1>
        </div>
    }
}
