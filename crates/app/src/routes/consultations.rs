use dioxus::prelude::*;
use shared_ui::components::{Card, CardContent};

use crate::consultations::ConsultationsPage;
use crate::routes::Route;
use crate::session::use_session;

/// `/consultations`: the list page bound to the signed-in viewer.
#[component]
pub fn Consultations() -> Element {
    let session = use_session();
    let viewer = session.viewer.read().clone();

    let Some(viewer) = viewer else {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./routes.css") }
            div { class: "route-page",
                Card {
                    CardContent { class: "signed-out",
                        p { "Sign in to see your consultations." }
                        Link { to: Route::SignIn {}, class: "route-link", "Go to sign in" }
                    }
                }
            }
        };
    };

    rsx! {
        ConsultationsPage {
            viewer,
            on_back: move |_| {
                navigator().push(Route::SignIn {});
            },
            on_select_consultation: move |id: String| {
                navigator().push(Route::ConsultationDetail { id });
            },
        }
    }
}
