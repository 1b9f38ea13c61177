// Job pipeline: validate → render → generate → envelope.
// Every fault is folded into a failed JobResult before it leaves the dispatcher.
// All provider calls go through llm_client, never directly from here.

pub mod dispatcher;
pub mod envelope;
pub mod handlers;
pub mod models;
pub mod render;
pub mod runner;

use thiserror::Error;

use crate::companies::RegistryError;
use crate::jobs::models::ErrorKind;
use crate::jobs::render::RenderError;
use crate::llm_client::LlmError;

/// Everything that can fail a job, whichever stage it came from.
#[derive(Debug, Error)]
pub enum JobError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Generation failed: {0}")]
    Generation(#[from] LlmError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl JobError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            JobError::Registry(RegistryError::UnknownCompany(_)) => ErrorKind::NotFound,
            JobError::Registry(RegistryError::UnknownJobType { .. }) => ErrorKind::InvalidJobType,
            JobError::Registry(_) => ErrorKind::Internal,
            JobError::Render(_) => ErrorKind::MissingField,
            JobError::Generation(_) => ErrorKind::Generation,
            JobError::Internal(_) => ErrorKind::Internal,
        }
    }
}
