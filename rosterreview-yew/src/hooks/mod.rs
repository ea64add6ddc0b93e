mod use_player_api;
mod use_player_profile;
mod use_player_search;

pub use use_player_api::use_player_api;
pub use use_player_profile::use_player_profile;
pub use use_player_search::use_player_search;
