use crate::components::Loader;
use crate::hooks::use_player_profile;
use rosterreview_core::{Player, ProfileState};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlayerProfilePageProps {
    /// Id segment of the profile route
    pub id: String,
}

#[function_component(PlayerProfilePage)]
pub fn player_profile_page(props: &PlayerProfilePageProps) -> Html {
    let state = use_player_profile(&props.id);

    let body = match &state {
        ProfileState::MissingId => html! {
            <p class="profile-error">{"No player selected."}</p>
        },
        ProfileState::NotFound { id } => html! {
            <p class="profile-error">{format!("There is no player with id {}.", id)}</p>
        },
        ProfileState::Failed { id, error } => html! {
            <p class="profile-error">{format!("Loading player {} failed: {}", id, error)}</p>
        },
        ProfileState::Loaded { player } => player_details(player),
        ProfileState::Idle | ProfileState::Loading { .. } => html! {},
    };

    html! {
        <div class="player-profile-page">
            <Loader visible={state.is_busy()} />
            <p class="profile-caption">{state.caption()}</p>
            {body}
        </div>
    }
}

fn player_details(player: &Player) -> Html {
    let rows = detail_rows(player);

    html! {
        <dl class="player-details">
            {for rows.into_iter().map(|(label, value)| html! {
                <>
                    <dt>{label}</dt>
                    <dd>{value}</dd>
                </>
            })}
        </dl>
    }
}

/// Labelled facts about a player, skipping the ones the backend left out
fn detail_rows(player: &Player) -> Vec<(&'static str, String)> {
    let mut rows = vec![("Name", player.full_name())];
    if let Some(age) = player.age() {
        rows.push(("Age", age.to_string()));
    }
    if let Some(birth_date) = player.birth_date() {
        rows.push(("Born", birth_date.format("%B %-d, %Y").to_string()));
    }
    if let Some(height) = player.height_display() {
        rows.push(("Height", height));
    }
    if let Some(weight) = player.weight() {
        rows.push(("Weight", format!("{} lb", weight)));
    }
    if let Some(college) = player.college() {
        rows.push(("College", college.to_string()));
    }
    if let Some(year) = player.hof_year() {
        rows.push(("Hall of Fame", year.to_string()));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_props() {
        let props = yew::props!(PlayerProfilePageProps {
            id: "7".to_string(),
        });
        assert_eq!(props.id, "7");
    }

    #[test]
    fn test_detail_rows_skip_missing_fields() {
        let player = Player::new("7")
            .with_names("Robert", "Smith")
            .with_birth_date(NaiveDate::from_ymd_opt(1990, 3, 4).unwrap());

        let rows = detail_rows(&player);
        let labels: Vec<_> = rows.iter().map(|(label, _)| *label).collect();

        assert_eq!(labels, vec!["Name", "Age", "Born"]);
        assert_eq!(rows[2].1, "March 4, 1990");
    }
}
