use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdMessageCircle};
use dioxus_free_icons::Icon;
use shared_ui::components::{
    Button, ButtonVariant, Card, CardContent, PageDescription, PageHeader, PageTitle,
};

use crate::routes::Route;

/// `/consultations/:id`: landing page for a selected consultation.
///
/// The conversation itself is served by the chat service; this page only
/// confirms the selection and links back to the list.
#[component]
pub fn ConsultationDetail(id: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./routes.css") }
        div { class: "route-page",
            PageHeader {
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| {
                        navigator().push(Route::Consultations {});
                    },
                    Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
                    "Back"
                }
                div {
                    PageTitle { "Consultation" }
                    PageDescription { "{id}" }
                }
            }
            Card {
                CardContent { class: "detail-placeholder",
                    Icon::<LdMessageCircle> { icon: LdMessageCircle, width: 32, height: 32 }
                    p { "The chat for this consultation opens here." }
                }
            }
        }
    }
}
