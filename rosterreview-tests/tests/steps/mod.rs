mod player_profile_steps;
mod player_search_steps;
mod search_form_steps;
