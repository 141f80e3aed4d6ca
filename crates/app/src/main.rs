use dioxus::prelude::*;

mod api;
mod config;
mod consultations;
mod format_helpers;
mod routes;
mod session;
#[cfg(test)]
mod test_support;

use api::ConsultationClient;
use routes::Route;
use session::SessionState;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    use_hook(|| {
        tracing::info!(platform = client_platform(), "starting consultations client");
    });

    use_context_provider(|| ConsultationClient::new(config::api_config().clone()));
    use_context_provider(SessionState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
