use crate::route::AppRoute;
use rosterreview_core::PlayerRow;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlayerTableProps {
    pub rows: Vec<PlayerRow>,
}

/// Search results, one row per player in the order given
#[function_component(PlayerTable)]
pub fn player_table(props: &PlayerTableProps) -> Html {
    if props.rows.is_empty() {
        return html! {
            <p class="player-table-empty">{"No players match this name."}</p>
        };
    }

    html! {
        <table class="player-table">
            <thead>
                <tr>
                    <th>{"First Name"}</th>
                    <th>{"Last Name"}</th>
                    <th>{"Age"}</th>
                </tr>
            </thead>
            <tbody>
                {for props.rows.iter().map(|row| {
                    let route = AppRoute::PlayerProfile { id: row.id.clone() };
                    html! {
                        <tr key={row.id.clone()}>
                            <td>
                                <Link<AppRoute> to={route}>{&row.first_name}</Link<AppRoute>>
                            </td>
                            <td>{&row.last_name}</td>
                            <td>{&row.age}</td>
                        </tr>
                    }
                })}
            </tbody>
        </table>
    }
}
