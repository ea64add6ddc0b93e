//! # Roster Review Yew Frontend
//!
//! Browser views for searching players and reading their profiles.

pub mod api;
pub mod app;
pub mod components;
pub mod hooks;
pub mod logging;
pub mod pages;
pub mod providers;
pub mod route;

// Re-exports for convenience
pub use api::GlooPlayerApi;
pub use app::{App, AppProps};
pub use components::{Loader, NavBar, PlayerTable};
pub use hooks::{use_player_api, use_player_profile, use_player_search};
pub use logging::LogConfig;
pub use pages::{HomePage, NotFoundPage, PlayerProfilePage, PlayerSearchPage, ValueChartPage};
pub use providers::{ApiContext, ApiHandle, PlayerApiProvider, PlayerApiProviderProps};
pub use route::AppRoute;
