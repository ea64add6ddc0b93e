mod home;
mod not_found;
mod player_profile;
mod player_search;
mod value_chart;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use player_profile::{PlayerProfilePage, PlayerProfilePageProps};
pub use player_search::PlayerSearchPage;
pub use value_chart::ValueChartPage;
