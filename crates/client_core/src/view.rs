//! Read-only projection of the request state for form-driven front ends.

use shared::domain::Idea;

use crate::RequestState;

pub const SUBMIT_LABEL: &str = "Generar Ideas";
pub const SUBMIT_PENDING_LABEL: &str = "Generando...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Idle,
    Pending,
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestView {
    pub status: RequestStatus,
    pub ideas: Vec<Idea>,
    pub error_message: Option<String>,
}

impl RequestView {
    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Pending
    }
}

impl From<&RequestState> for RequestView {
    fn from(state: &RequestState) -> Self {
        let (ideas, error_message) = match state {
            RequestState::Success(ideas) => (ideas.clone(), None),
            RequestState::Failed(message) => (Vec::new(), Some(message.clone())),
            RequestState::Idle | RequestState::Pending => (Vec::new(), None),
        };
        Self {
            status: state.status(),
            ideas,
            error_message,
        }
    }
}

/// Submit button state derived from the current input and request view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub label: &'static str,
}

impl SubmitControl {
    pub fn for_input(input: &str, view: &RequestView) -> Self {
        if view.is_loading() {
            return Self {
                enabled: false,
                label: SUBMIT_PENDING_LABEL,
            };
        }
        Self {
            enabled: !input.trim().is_empty(),
            label: SUBMIT_LABEL,
        }
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
