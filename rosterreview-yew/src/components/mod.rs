//! UI components shared by the pages

mod loader;
mod nav_bar;
mod player_table;

pub use loader::Loader;
pub use nav_bar::{NavBar, NAV_LINKS};
pub use player_table::PlayerTable;
