use crate::api::GlooPlayerApi;
use rosterreview_core::{ClientConfig, PlayerApi};
use std::ops::Deref;
use std::rc::Rc;
use yew::prelude::*;

/// Shared handle to a `PlayerApi`, compared by identity
#[derive(Clone)]
pub struct ApiHandle(Rc<dyn PlayerApi>);

impl ApiHandle {
    pub fn new(api: impl PlayerApi + 'static) -> Self {
        ApiHandle(Rc::new(api))
    }
}

impl Deref for ApiHandle {
    type Target = dyn PlayerApi;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// API access available to every page
#[derive(Clone, PartialEq)]
pub struct ApiContext {
    pub api: ApiHandle,
    pub config: ClientConfig,
}

#[derive(Properties, PartialEq)]
pub struct PlayerApiProviderProps {
    #[prop_or_default]
    pub config: ClientConfig,
    /// Replaces the fetch-backed client (previews, tests)
    #[prop_or_default]
    pub api: Option<ApiHandle>,
    pub children: Children,
}

#[function_component(PlayerApiProvider)]
pub fn player_api_provider(props: &PlayerApiProviderProps) -> Html {
    let context = use_memo(
        (props.config.clone(), props.api.clone()),
        |(config, api)| {
            let api = api.clone().unwrap_or_else(|| {
                tracing::info!("Using player API at '{}'", config.api_base_url);
                ApiHandle::new(GlooPlayerApi::new(config))
            });
            ApiContext {
                api,
                config: config.clone(),
            }
        },
    );

    html! {
        <ContextProvider<ApiContext> context={(*context).clone()}>
            {props.children.clone()}
        </ContextProvider<ApiContext>>
    }
}
