pub mod navigation;
pub mod player;
pub mod search;

pub use navigation::{paths, NavigationIntent};
pub use player::{Player, PlayerId};
pub use search::{SearchParams, DEFAULT_SEARCH_LIMIT};
