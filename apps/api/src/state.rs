use crate::companies::Registry;
use crate::config::Config;
use crate::jobs::runner::JobRunner;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Worker pool wrapping the dispatcher; the only path to the provider.
    pub runner: JobRunner,
    pub config: Config,
}

impl AppState {
    /// Read-only after startup.
    pub fn registry(&self) -> &Registry {
        self.runner.dispatcher().registry()
    }
}
