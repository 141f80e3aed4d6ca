use serde::{Deserialize, Serialize};

use crate::viewer::ViewerRole;

// ── Consultation status ─────────────────────────────────────────────

/// Lifecycle status of a consultation as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsultationStatus {
    Active,
    Completed,
    Cancelled,
    /// Any status string outside the known set.
    Unknown,
}

impl ConsultationStatus {
    /// Parse a backend status string. Unrecognised values map to `Unknown`.
    pub fn from_str_or_unknown(s: &str) -> Self {
        match s {
            "active" => ConsultationStatus::Active,
            "completed" => ConsultationStatus::Completed,
            "cancelled" => ConsultationStatus::Cancelled,
            _ => ConsultationStatus::Unknown,
        }
    }

    /// Color family used for the status badge.
    pub fn color(&self) -> StatusColor {
        match self {
            ConsultationStatus::Active => StatusColor::Green,
            ConsultationStatus::Completed => StatusColor::Blue,
            ConsultationStatus::Cancelled => StatusColor::Red,
            ConsultationStatus::Unknown => StatusColor::Gray,
        }
    }
}

/// Badge color families for consultation statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusColor {
    Green,
    Blue,
    Red,
    #[default]
    Gray,
}

/// Map a raw status string to its badge color. Total: unknown statuses are gray.
pub fn status_color(status: &str) -> StatusColor {
    ConsultationStatus::from_str_or_unknown(status).color()
}

// ── Consultation API response ───────────────────────────────────────

/// Summary of one side of a consultation.
///
/// Every field is optional so partially joined backend rows still render.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Participant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Only populated for doctors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
}

/// API response shape for a consultation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consultation {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: String,
    /// ISO-8601 creation timestamp.
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor: Option<Participant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient: Option<Participant>,
}

impl Consultation {
    /// The participant who is not the viewer: the doctor for patients,
    /// the patient for everyone else.
    pub fn other_participant(&self, role: ViewerRole) -> Option<&Participant> {
        match role {
            ViewerRole::Patient => self.doctor.as_ref(),
            ViewerRole::Doctor => self.patient.as_ref(),
        }
    }
}

/// Body of `GET /api/consultations`. A missing list is treated as empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConsultationListResponse {
    #[serde(default)]
    pub consultations: Vec<Consultation>,
}

/// Query parameters for `GET /api/consultations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationListQuery {
    pub user_id: String,
    pub user_role: ViewerRole,
}

impl From<&crate::viewer::Viewer> for ConsultationListQuery {
    fn from(viewer: &crate::viewer::Viewer) -> Self {
        Self {
            user_id: viewer.id.clone(),
            user_role: viewer.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::Viewer;

    fn sample() -> Consultation {
        Consultation {
            id: "c-1".into(),
            title: "Persistent cough".into(),
            status: "active".into(),
            created_at: "2026-01-20T21:35:00Z".into(),
            doctor: Some(Participant {
                id: Some("d-1".into()),
                name: Some("House".into()),
                specialization: Some("Diagnostics".into()),
            }),
            patient: Some(Participant {
                id: Some("p-1".into()),
                name: Some("alice".into()),
                specialization: None,
            }),
        }
    }

    #[test]
    fn known_statuses_map_to_colors() {
        assert_eq!(status_color("active"), StatusColor::Green);
        assert_eq!(status_color("completed"), StatusColor::Blue);
        assert_eq!(status_color("cancelled"), StatusColor::Red);
    }

    #[test]
    fn unknown_statuses_are_gray() {
        for status in ["", "pending", "ACTIVE", "canceled", "archived", " active"] {
            assert_eq!(status_color(status), StatusColor::Gray, "status {status:?}");
        }
    }

    #[test]
    fn parse_is_exact_match() {
        assert_eq!(ConsultationStatus::from_str_or_unknown("active"), ConsultationStatus::Active);
        assert_eq!(ConsultationStatus::from_str_or_unknown("Active"), ConsultationStatus::Unknown);
        assert_eq!(ConsultationStatus::Unknown.color(), StatusColor::Gray);
    }

    #[test]
    fn patient_viewer_sees_doctor() {
        let c = sample();
        let other = c.other_participant(ViewerRole::Patient).unwrap();
        assert_eq!(other.name.as_deref(), Some("House"));
    }

    #[test]
    fn doctor_viewer_sees_patient() {
        let c = sample();
        let other = c.other_participant(ViewerRole::Doctor).unwrap();
        assert_eq!(other.name.as_deref(), Some("alice"));
    }

    #[test]
    fn missing_other_participant_is_none() {
        let mut c = sample();
        c.doctor = None;
        assert!(c.other_participant(ViewerRole::Patient).is_none());
        assert!(c.other_participant(ViewerRole::Doctor).is_some());
    }

    #[test]
    fn list_response_tolerates_missing_field() {
        let resp: ConsultationListResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.consultations.is_empty());
    }

    #[test]
    fn list_response_parses_backend_shape() {
        let json = r#"{
            "consultations": [{
                "id": "c-9",
                "title": "Follow-up",
                "status": "completed",
                "created_at": "2026-02-01T08:00:00.000Z",
                "doctor": {"name": "Grey", "specialization": null},
                "patient": {"id": "p-2", "name": "Bob"},
                "extra_column": 42
            }]
        }"#;
        let resp: ConsultationListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.consultations.len(), 1);
        let c = &resp.consultations[0];
        assert_eq!(status_color(&c.status), StatusColor::Blue);
        assert_eq!(c.doctor.as_ref().unwrap().specialization, None);
        assert_eq!(c.patient.as_ref().unwrap().id.as_deref(), Some("p-2"));
    }

    #[test]
    fn query_uses_camel_case_keys() {
        let viewer = Viewer::new("u-7", ViewerRole::Doctor).unwrap();
        let query = ConsultationListQuery::from(&viewer);
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["userId"], "u-7");
        assert_eq!(json["userRole"], "doctor");
    }
}
