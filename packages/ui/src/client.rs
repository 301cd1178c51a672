use api::{ApiClient, ApiConfig};
use dioxus::prelude::*;

/// Build the backend client once and share it with every screen.
#[component]
pub fn ApiProvider(children: Element) -> Element {
    use_context_provider(|| {
        let config = ApiConfig::from_env();
        tracing::debug!(
            "api: base_url={} source={:?}",
            config.base_url,
            config.source()
        );
        ApiClient::new(&config)
    });

    rsx! { {children} }
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}
