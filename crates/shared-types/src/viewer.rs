use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of the signed-in user looking at the consultation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewerRole {
    #[default]
    Patient,
    Doctor,
}

/// All viewer roles in display order.
pub const VIEWER_ROLES: &[ViewerRole] = &[ViewerRole::Patient, ViewerRole::Doctor];

impl ViewerRole {
    /// Wire value used in query strings and storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewerRole::Patient => "patient",
            ViewerRole::Doctor => "doctor",
        }
    }

    /// Human-readable label for selects.
    pub fn display_name(&self) -> &'static str {
        match self {
            ViewerRole::Patient => "Patient",
            ViewerRole::Doctor => "Doctor",
        }
    }

    /// Parse a role key, returning `None` for anything unrecognised.
    pub fn from_key(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "patient" => Some(ViewerRole::Patient),
            "doctor" => Some(ViewerRole::Doctor),
            _ => None,
        }
    }

    pub fn is_patient(&self) -> bool {
        matches!(self, ViewerRole::Patient)
    }
}

impl fmt::Display for ViewerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated user viewing the consultation list.
///
/// Supplied by the session layer; the list page never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub id: String,
    pub role: ViewerRole,
}

impl Viewer {
    /// Build a viewer, rejecting a blank identifier.
    pub fn new(id: impl Into<String>, role: ViewerRole) -> Option<Self> {
        let id = id.into().trim().to_string();
        if id.is_empty() {
            None
        } else {
            Some(Self { id, role })
        }
    }
}
