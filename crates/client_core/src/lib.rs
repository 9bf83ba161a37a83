use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use shared::{domain::Idea, error::GenerateError};
use tokio::{
    sync::watch,
    task::{AbortHandle, JoinHandle},
};
use tracing::{debug, info, warn};

pub mod config;
pub mod transport;
pub mod view;

pub use config::{join_endpoint, load_api_config, ApiConfig};
pub use transport::HttpIdeasBackend;
pub use view::{RequestStatus, RequestView, SubmitControl};

/// Anything able to turn a business type into ideas.
///
/// Implementations report every failure as a [`GenerateError`]; the
/// orchestrator never sees transport-specific errors.
#[async_trait]
pub trait IdeasBackend: Send + Sync {
    async fn generate_ideas(&self, business_type: &str) -> Result<Vec<Idea>, GenerateError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Success(Vec<Idea>),
    Failed(String),
}

impl RequestState {
    pub fn status(&self) -> RequestStatus {
        match self {
            Self::Idle => RequestStatus::Idle,
            Self::Pending => RequestStatus::Pending,
            Self::Success(_) => RequestStatus::Success,
            Self::Failed(_) => RequestStatus::Failed,
        }
    }
}

struct GeneratorInner {
    latest_attempt: u64,
    torn_down: bool,
    tasks: Vec<AbortHandle>,
}

/// Owns the request lifecycle for "generate ideas from a business type".
///
/// Every call to [`IdeasGenerator::generate`] takes a fresh attempt token.
/// A result is only published if its token is still the latest one when the
/// backend answers, so an older call resolving late can never overwrite the
/// outcome of a newer one.
pub struct IdeasGenerator {
    backend: Arc<dyn IdeasBackend>,
    state: watch::Sender<RequestState>,
    inner: Mutex<GeneratorInner>,
}

impl IdeasGenerator {
    pub fn new(backend: Arc<dyn IdeasBackend>) -> Arc<Self> {
        let (state, _) = watch::channel(RequestState::Idle);
        Arc::new(Self {
            backend,
            state,
            inner: Mutex::new(GeneratorInner {
                latest_attempt: 0,
                torn_down: false,
                tasks: Vec::new(),
            }),
        })
    }

    pub fn from_config(config: &ApiConfig) -> anyhow::Result<Arc<Self>> {
        let backend = HttpIdeasBackend::from_config(config)?;
        Ok(Self::new(Arc::new(backend)))
    }

    pub fn state(&self) -> RequestState {
        self.state.borrow().clone()
    }

    pub fn view(&self) -> RequestView {
        RequestView::from(&*self.state.borrow())
    }

    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state.subscribe()
    }

    /// Runs one generation attempt to completion.
    ///
    /// Blank input fails immediately with [`GenerateError::EmptyInput`] and no
    /// backend call is made.
    pub async fn generate(&self, business_type: &str) {
        let business_type = business_type.trim();

        let attempt = {
            let mut inner = self.lock_inner();
            if inner.torn_down {
                warn!("idea generation requested after teardown; ignoring");
                return;
            }
            inner.latest_attempt += 1;
            let attempt = inner.latest_attempt;

            if business_type.is_empty() {
                let err = GenerateError::EmptyInput;
                warn!(attempt, kind = err.kind(), "idea generation rejected");
                self.state.send_replace(RequestState::Failed(err.to_string()));
                return;
            }

            self.state.send_replace(RequestState::Pending);
            attempt
        };

        info!(
            attempt,
            input_len = business_type.chars().count(),
            "idea generation started"
        );
        let outcome = self.backend.generate_ideas(business_type).await;
        self.settle(attempt, outcome);
    }

    /// Starts [`IdeasGenerator::generate`] on the runtime without waiting for
    /// it. The task is tracked so [`IdeasGenerator::teardown`] can abort it.
    pub fn spawn_generate(self: &Arc<Self>, business_type: impl Into<String>) -> JoinHandle<()> {
        let business_type = business_type.into();
        let generator = Arc::clone(self);
        let handle = tokio::spawn(async move {
            generator.generate(&business_type).await;
        });

        let mut inner = self.lock_inner();
        inner.tasks.retain(|task| !task.is_finished());
        inner.tasks.push(handle.abort_handle());
        handle
    }

    /// Returns to `Idle` and invalidates whatever attempt is in flight.
    pub fn reset(&self) {
        let mut inner = self.lock_inner();
        inner.latest_attempt += 1;
        self.state.send_replace(RequestState::Idle);
    }

    /// Aborts tracked in-flight work and stops all further state updates.
    ///
    /// The state is left as it was at the moment of teardown.
    pub fn teardown(&self) {
        let mut inner = self.lock_inner();
        inner.torn_down = true;
        inner.latest_attempt += 1;
        let aborted = inner.tasks.len();
        for task in inner.tasks.drain(..) {
            task.abort();
        }
        info!(aborted, "idea generator torn down");
    }

    fn settle(&self, attempt: u64, outcome: Result<Vec<Idea>, GenerateError>) {
        let inner = self.lock_inner();
        if inner.torn_down || inner.latest_attempt != attempt {
            debug!(
                attempt,
                latest_attempt = inner.latest_attempt,
                torn_down = inner.torn_down,
                "discarding superseded idea generation result"
            );
            return;
        }

        let next = match outcome {
            Ok(ideas) => {
                info!(attempt, count = ideas.len(), "idea generation succeeded");
                RequestState::Success(ideas)
            }
            Err(err) => {
                warn!(attempt, kind = err.kind(), error = %err, "idea generation failed");
                RequestState::Failed(err.to_string())
            }
        };
        self.state.send_replace(next);
    }

    fn lock_inner(&self) -> MutexGuard<'_, GeneratorInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
