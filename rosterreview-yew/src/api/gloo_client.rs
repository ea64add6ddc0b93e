use async_trait::async_trait;
use gloo_net::http::Request;
use rosterreview_core::api::{decode_player, decode_player_list, ApiError, ApiRequest, Result};
use rosterreview_core::{ClientConfig, Player, PlayerApi};

/// `PlayerApi` backed by `gloo-net`
///
/// Plain GETs without body or credentials. No retries and no timeout: a
/// request that never answers keeps its page busy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlooPlayerApi {
    base_url: String,
}

impl GlooPlayerApi {
    /// Use the configured base URL, or the page's own origin when it is empty
    pub fn new(config: &ClientConfig) -> Self {
        let base_url = if config.api_base_url.is_empty() {
            window_origin().unwrap_or_default()
        } else {
            config.api_base_url.clone()
        };
        Self { base_url }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, request: ApiRequest) -> Result<String> {
        let url = request.url(&self.base_url)?;
        tracing::debug!("GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::status(response.status(), response.status_text()));
        }

        response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
}

#[async_trait(?Send)]
impl PlayerApi for GlooPlayerApi {
    async fn find_players_with_name_like(&self, name: &str, limit: i64) -> Result<Vec<Player>> {
        let body = self
            .get(ApiRequest::find_players_with_name_like(name, limit))
            .await?;
        decode_player_list(&body)
    }

    async fn get_player_by_id(&self, id: &str) -> Result<Option<Player>> {
        let body = self.get(ApiRequest::player_by_id(id)).await?;
        decode_player(&body)
    }
}

fn window_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
