use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdClock, LdMessageCircle};
use dioxus_free_icons::Icon;
use shared_types::{status_color, Consultation, StatusColor, Viewer, ViewerRole};
use shared_ui::components::{
    Avatar, AvatarFallback, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card,
    CardContent, PageDescription, PageHeader, PageTitle, Spinner,
};

use super::state::{count_caption, settle_listing, ListState, RequestSequence};
use crate::api::ConsultationClient;
use crate::format_helpers::{format_started, participant_initial};

/// Consultation list for the given viewer.
///
/// Fetches once per viewer id. A role change alone re-renders the copy but
/// does not refetch. When the id changes mid-flight only the newest request
/// can populate the list.
#[component]
pub fn ConsultationsPage(
    viewer: ReadSignal<Viewer>,
    on_back: EventHandler<()>,
    on_select_consultation: EventHandler<String>,
) -> Element {
    let client = use_context::<ConsultationClient>();
    let sequence = use_hook(RequestSequence::default);

    let viewer_id = use_memo(move || viewer.read().id.clone());

    let listing = use_resource(move || {
        let client = client.clone();
        let sequence = sequence.clone();
        let ticket = sequence.issue();
        let id = viewer_id();
        let role = viewer.peek().role;
        async move {
            let requester = Viewer { id, role };
            settle_listing(&sequence, ticket, &requester, client.list_consultations(&requester))
                .await
        }
    });

    let state = match (&*listing.read(), listing.finished()) {
        (Some(Some(list)), true) => ListState::Loaded(list.clone()),
        _ => ListState::Loading,
    };

    rsx! {
        ConsultationList {
            viewer: viewer.cloned(),
            state,
            on_back,
            on_select_consultation,
        }
    }
}

/// Pure render of the list page for a given state.
#[component]
pub fn ConsultationList(
    viewer: Viewer,
    state: ListState,
    on_back: EventHandler<()>,
    on_select_consultation: EventHandler<String>,
) -> Element {
    if state.is_loading() {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./consultations.css") }
            div { class: "consultations-page",
                Spinner { caption: "Loading consultations...".to_string() }
            }
        };
    }

    let role = viewer.role;
    let consultations = state.consultations();
    let title = match role {
        ViewerRole::Patient => "Your Consultations",
        ViewerRole::Doctor => "Patient Consultations",
    };
    let caption = count_caption(consultations.len());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./consultations.css") }
        div { class: "consultations-page",
            div { class: "consultations-container",
                PageHeader {
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "back-button",
                        onclick: move |_| on_back.call(()),
                        Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
                        "Back"
                    }
                    div {
                        PageTitle { "{title}" }
                        PageDescription { "{caption}" }
                    }
                }

                if consultations.is_empty() {
                    EmptyConsultations { role }
                } else {
                    div { class: "consultation-list",
                        for consultation in consultations.iter().cloned() {
                            ConsultationCard {
                                key: "{consultation.id}",
                                consultation,
                                role,
                                on_select: on_select_consultation,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EmptyConsultations(role: ViewerRole) -> Element {
    let message = empty_message(role);

    rsx! {
        Card {
            CardContent { class: "empty-state",
                div { class: "empty-state-icon",
                    Icon::<LdMessageCircle> { icon: LdMessageCircle, width: 64, height: 64 }
                }
                h3 { class: "empty-state-title", "No consultations yet" }
                p { class: "empty-state-message", "{message}" }
            }
        }
    }
}

#[component]
fn ConsultationCard(
    consultation: Consultation,
    role: ViewerRole,
    on_select: EventHandler<String>,
) -> Element {
    let id = consultation.id.clone();
    let other = consultation.other_participant(role).cloned().unwrap_or_default();
    let initial = participant_initial(other.name.as_deref());
    let name = display_name(other.name.as_deref(), role);
    let specialization = if role.is_patient() {
        other.specialization.filter(|s| !s.trim().is_empty())
    } else {
        None
    };
    let badge_variant = status_badge_variant(status_color(&consultation.status));
    let started = format_started(&consultation.created_at, chrono::Utc::now().date_naive());

    rsx! {
        Card {
            class: "consultation-card",
            onclick: move |_| select_consultation(&id, |id| on_select.call(id)),
            CardContent {
                div {
                    class: "consultation-row",
                    "data-consultation-id": "{consultation.id}",
                    div { class: "consultation-main",
                        Avatar {
                            AvatarFallback { "{initial}" }
                        }
                        div { class: "consultation-body",
                            div { class: "consultation-heading",
                                h3 { class: "consultation-title", "{consultation.title}" }
                                Badge { variant: badge_variant, "{consultation.status}" }
                            }
                            div { class: "consultation-participant",
                                span { class: "participant-name", "{name}" }
                                if let Some(spec) = specialization {
                                    span { class: "participant-separator", "•" }
                                    span { class: "participant-specialization", "{spec}" }
                                }
                            }
                            div { class: "consultation-started",
                                Icon::<LdClock> { icon: LdClock, width: 16, height: 16 }
                                span { "Started {started}" }
                            }
                        }
                    }
                    // Activation bubbles to the card handler.
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Small,
                        Icon::<LdMessageCircle> { icon: LdMessageCircle, width: 16, height: 16 }
                        "Open Chat"
                    }
                }
            }
        }
    }
}

/// Report one card activation. The card is the only element with a click
/// handler, so each activation notifies exactly once.
fn select_consultation(consultation_id: &str, mut notify: impl FnMut(String)) {
    tracing::debug!(consultation_id, "consultation selected");
    notify(consultation_id.to_string());
}

/// Role-specific copy for the empty state.
fn empty_message(role: ViewerRole) -> &'static str {
    match role {
        ViewerRole::Patient => "Start your first consultation to connect with a doctor",
        ViewerRole::Doctor => "No patient consultations assigned yet",
    }
}

/// Other participant's name as shown on a card. Doctors get a "Dr." prefix
/// when a patient is looking.
fn display_name(name: Option<&str>, role: ViewerRole) -> String {
    let name = name.unwrap_or_default();
    match role {
        ViewerRole::Patient => format!("Dr. {name}"),
        ViewerRole::Doctor => name.to_string(),
    }
}

/// Map a status color to the badge variant that renders it.
fn status_badge_variant(color: StatusColor) -> BadgeVariant {
    match color {
        StatusColor::Green => BadgeVariant::Success,
        StatusColor::Blue => BadgeVariant::Info,
        StatusColor::Red => BadgeVariant::Destructive,
        StatusColor::Gray => BadgeVariant::Secondary,
    }
}
