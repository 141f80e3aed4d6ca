use dioxus::prelude::*;
use shared_types::{Viewer, ViewerRole, VIEWER_ROLES};
use shared_ui::components::{
    Button, ButtonVariant, Card, CardContent, PageDescription, PageHeader, PageTitle,
};

use crate::routes::Route;
use crate::session::use_session;

/// `/`: choose who is viewing. Identity is issued elsewhere; this screen
/// only records the id and role the list should be fetched for.
#[component]
pub fn SignIn() -> Element {
    let mut session = use_session();
    let existing = session.viewer.peek().clone();

    let mut user_id = use_signal(|| existing.as_ref().map(|v| v.id.clone()).unwrap_or_default());
    let mut role = use_signal(|| existing.map(|v| v.role).unwrap_or_default());
    let mut error_msg = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match Viewer::new(user_id.read().clone(), *role.read()) {
            Some(viewer) => {
                error_msg.set(None);
                session.sign_in(viewer);
                navigator().push(Route::Consultations {});
            }
            None => error_msg.set(Some("Enter your user ID.".to_string())),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./routes.css") }
        div { class: "route-page",
            PageHeader {
                div {
                    PageTitle { "Consultations" }
                    PageDescription { "Choose the account to view consultations for." }
                }
            }
            Card {
                CardContent {
                    form { class: "sign-in-form", onsubmit: handle_submit,
                        label { class: "input-label", r#for: "viewer-id", "User ID" }
                        input {
                            id: "viewer-id",
                            class: "input",
                            value: "{user_id}",
                            placeholder: "e.g. 3f1c9a2e-…",
                            oninput: move |e: FormEvent| user_id.set(e.value()),
                        }

                        label { class: "input-label", r#for: "viewer-role", "Role" }
                        select {
                            id: "viewer-role",
                            class: "input",
                            value: role.read().as_str(),
                            onchange: move |e: FormEvent| {
                                if let Some(r) = ViewerRole::from_key(&e.value()) {
                                    role.set(r);
                                }
                            },
                            for r in VIEWER_ROLES.iter() {
                                option { value: r.as_str(), selected: *role.read() == *r, "{r.display_name()}" }
                            }
                        }

                        if let Some(msg) = error_msg() {
                            p { class: "form-error", "{msg}" }
                        }

                        Button { variant: ButtonVariant::Primary, "View consultations" }
                    }
                }
            }
        }
    }
}
