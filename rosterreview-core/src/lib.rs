//! # Roster Review Core
//!
//! Player model, API access and the view-state controllers behind the
//! roster review pages. Independent of any browser API.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;

pub use api::{ApiError, ApiRequest, PlayerApi};
pub use application::{
    PlayerRow, ProfileController, ProfileState, RequestToken, SearchController, SearchOutcome,
    SearchState,
};
pub use config::ClientConfig;
pub use domain::{paths, NavigationIntent, Player, PlayerId, SearchParams, DEFAULT_SEARCH_LIMIT};
