use crate::api::{ApiError, PlayerApi, Result};
use crate::application::request_token::{RequestSequence, RequestToken};
use crate::domain::Player;

/// View-state of the player profile page
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileState {
    Idle,
    /// The route carried a blank id; nothing was fetched
    MissingId,
    Loading { id: String },
    Loaded { player: Player },
    /// The backend knows no player with this id
    NotFound { id: String },
    Failed { id: String, error: ApiError },
}

impl ProfileState {
    pub fn is_busy(&self) -> bool {
        matches!(self, ProfileState::Idle | ProfileState::Loading { .. })
    }

    pub fn player(&self) -> Option<&Player> {
        match self {
            ProfileState::Loaded { player } => Some(player),
            _ => None,
        }
    }

    /// Profile headline; name parts stay empty until a player is loaded
    pub fn caption(&self) -> String {
        let (first, last) = match self.player() {
            Some(player) => (
                player.display_first_name(),
                player.last_name().unwrap_or_default(),
            ),
            None => ("", ""),
        };
        format!("This is the player profile for {} {}.", first, last)
    }
}

/// A player lookup the caller should dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRequest {
    token: RequestToken,
    id: String,
}

impl ProfileRequest {
    pub fn token(&self) -> RequestToken {
        self.token
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Holds at most one player, keyed by the id segment of the current route
#[derive(Debug, Clone, Default)]
pub struct ProfileController {
    last_id: Option<String>,
    sequence: RequestSequence,
    state: ProfileState,
}

impl Default for ProfileState {
    fn default() -> Self {
        ProfileState::Idle
    }
}

impl ProfileController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    /// Observe the route id (on mount and on every route change)
    ///
    /// Exactly one request is issued per distinct id; the same id observed
    /// again is a no-op.
    pub fn on_route(&mut self, id: &str) -> Option<ProfileRequest> {
        if self.last_id.as_deref() == Some(id) {
            return None;
        }
        self.last_id = Some(id.to_string());

        let token = self.sequence.next_token();
        let id = id.trim();
        if id.is_empty() {
            tracing::debug!("Profile route without an id");
            self.state = ProfileState::MissingId;
            return None;
        }

        tracing::debug!("Loading profile {} for id '{}'", token, id);
        self.state = ProfileState::Loading { id: id.to_string() };
        Some(ProfileRequest {
            token,
            id: id.to_string(),
        })
    }

    /// Apply the response of a dispatched lookup; `false` if it was stale
    pub fn apply(&mut self, token: RequestToken, result: Result<Option<Player>>) -> bool {
        let id = match &self.state {
            ProfileState::Loading { id } if self.sequence.is_current(token) => id.clone(),
            _ => {
                tracing::warn!("Discarding stale profile response {}", token);
                return false;
            }
        };

        self.state = match result {
            Ok(Some(player)) => ProfileState::Loaded { player },
            Ok(None) => {
                tracing::info!("No player with id '{}'", id);
                ProfileState::NotFound { id }
            }
            Err(error) => {
                tracing::warn!("Loading player '{}' failed: {}", id, error);
                ProfileState::Failed { id, error }
            }
        };
        true
    }

    /// Forget the lookup in flight; its response will be discarded
    pub fn cancel(&mut self) {
        self.sequence.next_token();
    }

    /// Observe `id`, look it up through `api` and apply the result
    ///
    /// Returns `None` when nothing had to be fetched.
    pub async fn run<A>(&mut self, api: &A, id: &str) -> Option<bool>
    where
        A: PlayerApi + ?Sized,
    {
        let request = self.on_route(id)?;
        let result = api.get_player_by_id(request.id()).await;
        Some(self.apply(request.token(), result))
    }
}
