use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use shared_types::{AppError, Consultation, Viewer};

/// What the list page is showing.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Loaded(Vec<Consultation>),
}

impl ListState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }

    /// Loaded rows, or an empty slice while loading.
    pub fn consultations(&self) -> &[Consultation] {
        match self {
            ListState::Loading => &[],
            ListState::Loaded(list) => list,
        }
    }
}

/// Issues tickets for listing requests. Only the most recently issued
/// ticket may populate the list.
///
/// Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Rc<Cell<u64>>,
}

impl RequestSequence {
    /// Start a new request, superseding every earlier ticket.
    pub fn issue(&self) -> u64 {
        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);
        ticket
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }
}

/// Await one listing request and settle it into rows.
///
/// Failures are logged and yield an empty list: the page never shows a
/// fetch error, and loading always ends. Returns `None` when a newer
/// request was issued while this one was in flight.
pub async fn settle_listing<F>(
    sequence: &RequestSequence,
    ticket: u64,
    viewer: &Viewer,
    request: F,
) -> Option<Vec<Consultation>>
where
    F: Future<Output = Result<Vec<Consultation>, AppError>>,
{
    tracing::debug!(viewer_id = %viewer.id, role = %viewer.role, ticket, "fetching consultations");
    let list = match request.await {
        Ok(list) => {
            tracing::debug!(viewer_id = %viewer.id, count = list.len(), "consultations loaded");
            list
        }
        Err(e) => {
            tracing::error!(viewer_id = %viewer.id, error = %e, "Failed to fetch consultations");
            Vec::new()
        }
    };

    if !sequence.is_current(ticket) {
        tracing::warn!(viewer_id = %viewer.id, ticket, "dropping stale consultations response");
        return None;
    }
    Some(list)
}

/// Count caption shown under the page title.
pub fn count_caption(count: usize) -> String {
    if count == 1 {
        "1 consultation found".to_string()
    } else {
        format!("{count} consultations found")
    }
}
