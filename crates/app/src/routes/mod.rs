pub mod consultation_detail;
pub mod consultations;
pub mod not_found;
pub mod sign_in;

use dioxus::prelude::*;

use consultation_detail::ConsultationDetail;
use consultations::Consultations;
use not_found::NotFound;
use sign_in::SignIn;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    SignIn {},
    #[route("/consultations")]
    Consultations {},
    #[route("/consultations/:id")]
    ConsultationDetail { id: String },
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_route_roundtrips_id() {
        let route = Route::ConsultationDetail { id: "c-42".to_string() };
        assert_eq!(route.to_string(), "/consultations/c-42");
        let parsed: Route = "/consultations/c-42".parse().unwrap();
        assert_eq!(parsed, route);
    }

    #[test]
    fn list_and_sign_in_paths() {
        assert_eq!(Route::SignIn {}.to_string(), "/");
        assert_eq!(Route::Consultations {}.to_string(), "/consultations");
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let parsed: Route = "/chat/123".parse().unwrap();
        assert!(matches!(parsed, Route::NotFound { .. }));
    }
}
