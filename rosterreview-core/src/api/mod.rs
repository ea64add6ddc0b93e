//! Read-only access to the player data API

pub mod error;
pub mod request;

pub use error::{ApiError, Result};
pub use request::{ApiRequest, FIND_PLAYERS_WITH_NAME_LIKE_PATH, PLAYER_DATA_PATH};

use crate::domain::Player;
use async_trait::async_trait;

/// Backend operations used by the views (allows mocking in tests)
///
/// Futures are not `Send`: implementations run on the browser's single
/// event loop.
#[async_trait(?Send)]
pub trait PlayerApi {
    /// Players with names similar to `name`, best match first
    ///
    /// `limit <= 0` leaves the result size to the backend.
    async fn find_players_with_name_like(&self, name: &str, limit: i64) -> Result<Vec<Player>>;

    /// The player with the given id, `None` when unknown
    async fn get_player_by_id(&self, id: &str) -> Result<Option<Player>>;
}

/// Decode the body of a name search
pub fn decode_player_list(body: &str) -> Result<Vec<Player>> {
    Ok(serde_json::from_str(body)?)
}

/// Decode the body of a player lookup
///
/// The backend answers an unknown id with an empty body (or `null`).
pub fn decode_player(body: &str) -> Result<Option<Player>> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_str(body)?)
}
