use crate::components::NavBar;
use crate::providers::{ApiHandle, PlayerApiProvider};
use crate::route::{switch, AppRoute};
use rosterreview_core::ClientConfig;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: ClientConfig,
    /// Replaces the HTTP client, e.g. with a fake in tests
    #[prop_or_default]
    pub api: Option<ApiHandle>,
}

/// Root view: API context, router, navigation bar and the routed page
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <PlayerApiProvider config={props.config.clone()} api={props.api.clone()}>
            <BrowserRouter>
                <NavBar />
                <main class="page-content">
                    <Switch<AppRoute> render={switch} />
                </main>
            </BrowserRouter>
        </PlayerApiProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_props_use_http_client() {
        let props = yew::props!(AppProps {});
        assert!(props.api.is_none());
        assert_eq!(props.config, ClientConfig::default());
    }

    #[test]
    fn test_props_with_config() {
        let props = yew::props!(AppProps {
            config: ClientConfig::default().with_search_limit(10),
        });
        assert_eq!(props.config.search_limit, 10);
    }
}
