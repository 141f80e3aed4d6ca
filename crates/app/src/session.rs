use dioxus::prelude::*;
use shared_types::Viewer;

/// Global session state: who is viewing the app.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub viewer: Signal<Option<Viewer>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            viewer: Signal::new(None),
        }
    }

    pub fn sign_in(&mut self, viewer: Viewer) {
        tracing::info!(viewer_id = %viewer.id, role = %viewer.role, "viewer signed in");
        self.viewer.set(Some(viewer));
    }
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}
