use ratatui::style::Color;
use tokio_util::sync::CancellationToken;

use crate::backend::{BackendResponse, QueryAnswer};

/// The only failure text the user ever sees
pub const BACKEND_UNREACHABLE: &str =
    "Failed to communicate with the backend. Is the Python server running?";

/// Where the form is in the submission lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting {
        request_id: u64,
    },
    Answered(QueryAnswer),
    Failed(String),
}

/// Styling of the mode badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Affirmative,
    Cautionary,
}

impl BadgeTone {
    /// Affirmative when the mode mentions `ONLINE` (case-sensitive)
    pub fn for_mode(mode: &str) -> Self {
        if mode.contains("ONLINE") {
            BadgeTone::Affirmative
        } else {
            BadgeTone::Cautionary
        }
    }

    pub fn color(self) -> Color {
        match self {
            BadgeTone::Affirmative => Color::Green,
            BadgeTone::Cautionary => Color::Yellow,
        }
    }
}

/// Submission state owned by the form
#[derive(Debug, Default)]
pub struct FormState {
    phase: FormPhase,
    request_id: u64,
    cancel_token: Option<CancellationToken>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)] // Used in tests
    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting { .. })
    }

    pub fn result(&self) -> Option<&QueryAnswer> {
        match &self.phase {
            FormPhase::Answered(answer) => Some(answer),
            _ => None,
        }
    }

    /// Error text to show, empty when there is none
    pub fn error_message(&self) -> &str {
        match &self.phase {
            FormPhase::Failed(message) => message,
            _ => "",
        }
    }

    pub fn in_flight_request_id(&self) -> Option<u64> {
        match self.phase {
            FormPhase::Submitting { request_id } => Some(request_id),
            _ => None,
        }
    }

    /// Whether a submit with `query` would go out
    pub fn can_submit(&self, query: &str) -> bool {
        !self.is_loading() && !query.trim().is_empty()
    }

    /// Enter the in-flight state, discarding the previous answer or error
    ///
    /// Returns the id and cancellation token for the new request. Callers
    /// check `can_submit` first.
    pub fn begin_submission(&mut self) -> (u64, CancellationToken) {
        self.request_id = self.request_id.wrapping_add(1);
        let token = CancellationToken::new();
        self.cancel_token = Some(token.clone());
        self.phase = FormPhase::Submitting {
            request_id: self.request_id,
        };
        (self.request_id, token)
    }

    /// Apply a worker response
    ///
    /// Responses for any request other than the in-flight one are dropped.
    /// Returns true if the state changed.
    pub fn apply_response(&mut self, response: BackendResponse) -> bool {
        let Some(in_flight) = self.in_flight_request_id() else {
            log::debug!(
                "Ignoring response for request {} (nothing in flight)",
                response.request_id()
            );
            return false;
        };

        if response.request_id() != in_flight {
            log::debug!(
                "Ignoring stale response for request {} (current: {})",
                response.request_id(),
                in_flight
            );
            return false;
        }

        self.cancel_token = None;
        self.phase = match response {
            BackendResponse::Answer { request_id, answer } => {
                log::info!("Request {} answered in mode {:?}", request_id, answer.mode);
                FormPhase::Answered(answer)
            }
            BackendResponse::Failed { request_id, error } => {
                log::error!("Inventory query {} failed: {}", request_id, error);
                FormPhase::Failed(BACKEND_UNREACHABLE.to_string())
            }
            BackendResponse::Cancelled { request_id } => {
                log::debug!("Request {} cancelled", request_id);
                FormPhase::Idle
            }
        };
        true
    }

    /// Fail the in-flight request without a worker response
    pub fn fail_submission(&mut self, detail: &str) {
        if let Some(request_id) = self.in_flight_request_id() {
            log::error!("Inventory query {} failed: {}", request_id, detail);
            self.cancel_token = None;
            self.phase = FormPhase::Failed(BACKEND_UNREACHABLE.to_string());
        }
    }

    /// Cancel the in-flight request and return to idle
    ///
    /// A response that still arrives for it is ignored. Returns true if
    /// something was in flight.
    pub fn abandon(&mut self) -> bool {
        let Some(request_id) = self.in_flight_request_id() else {
            return false;
        };

        if let Some(token) = self.cancel_token.take() {
            token.cancel();
        }
        log::debug!("Abandoned request {}", request_id);
        self.phase = FormPhase::Idle;
        true
    }
}

#[cfg(test)]
#[path = "form_state_tests.rs"]
mod form_state_tests;
