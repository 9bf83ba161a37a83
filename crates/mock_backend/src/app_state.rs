use axum::http::StatusCode;
use shared::protocol::RawIdeaRecord;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) ideas: Vec<RawIdeaRecord>,
    pub(crate) force_status: Option<StatusCode>,
}
