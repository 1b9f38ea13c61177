//! Result Envelope Builder.
//!
//! An `Envelope` is opened when a job is accepted and consumed by exactly one of
//! `done` / `failed`, so every job yields one `JobResult` and never mutates it.

use std::collections::BTreeMap;

use tokio::time::Instant;
use uuid::Uuid;

use crate::jobs::models::{JobResult, JobStatus};
use crate::jobs::JobError;
use crate::llm_client::Generation;

const JOB_ID_LEN: usize = 12;

/// Fresh opaque job identifier. Not derived from request content.
pub fn new_job_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(JOB_ID_LEN);
    id
}

#[derive(Debug)]
pub struct Envelope {
    job_id: String,
    company_id: String,
    job_type: String,
    started: Instant,
}

impl Envelope {
    pub fn open(company_id: &str, job_type: &str) -> Self {
        Self {
            job_id: new_job_id(),
            company_id: company_id.to_string(),
            job_type: job_type.to_string(),
            started: Instant::now(),
        }
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    pub fn done(self, generation: Generation, metadata: BTreeMap<String, String>) -> JobResult {
        let duration_ms = self.elapsed_ms();
        let tokens_used = generation.total_tokens();
        JobResult {
            job_id: self.job_id,
            company_id: self.company_id,
            job_type: self.job_type,
            status: JobStatus::Done,
            output: Some(generation.text),
            metadata,
            error: None,
            error_kind: None,
            duration_ms,
            tokens_used: Some(tokens_used),
        }
    }

    pub fn failed(self, error: &JobError) -> JobResult {
        let duration_ms = self.elapsed_ms();
        JobResult {
            job_id: self.job_id,
            company_id: self.company_id,
            job_type: self.job_type,
            status: JobStatus::Failed,
            output: None,
            metadata: BTreeMap::new(),
            error: Some(error.to_string()),
            error_kind: Some(error.kind()),
            duration_ms,
            tokens_used: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::jobs::models::ErrorKind;
    use crate::llm_client::{LlmError, MODEL};

    fn generation() -> Generation {
        Generation {
            text: "Done.".to_string(),
            input_tokens: 40,
            output_tokens: 60,
            model: MODEL.to_string(),
        }
    }

    #[test]
    fn test_job_id_is_twelve_hex_chars() {
        let id = new_job_id();
        assert_eq!(id.len(), 12);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_job_ids_are_fresh_per_call() {
        assert_ne!(new_job_id(), new_job_id());
    }

    #[tokio::test]
    async fn test_done_sets_output_and_tokens() {
        let envelope = Envelope::open("dev_shop", "fix_bug");
        let job_id = envelope.job_id().to_string();
        let mut metadata = BTreeMap::new();
        metadata.insert("tone".to_string(), "casual".to_string());

        let result = envelope.done(generation(), metadata);
        assert_eq!(result.job_id, job_id);
        assert_eq!(result.status, JobStatus::Done);
        assert_eq!(result.output.as_deref(), Some("Done."));
        assert_eq!(result.tokens_used, Some(100));
        assert!(result.error.is_none());
        assert!(result.error_kind.is_none());
        assert_eq!(result.metadata["tone"], "casual");
    }

    #[tokio::test]
    async fn test_failed_sets_error_and_no_output() {
        let envelope = Envelope::open("dev_shop", "fix_bug");
        let result = envelope.failed(&JobError::Generation(LlmError::EmptyContent));

        assert_eq!(result.status, JobStatus::Failed);
        assert!(result.output.is_none());
        assert!(result.tokens_used.is_none());
        assert_eq!(
            result.error.as_deref(),
            Some("Generation failed: LLM returned empty content")
        );
        assert_eq!(result.error_kind, Some(ErrorKind::Generation));
        assert!(result.metadata.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_duration_tracks_elapsed_time() {
        let envelope = Envelope::open("finance_office", "generate_invoice");
        tokio::time::sleep(Duration::from_millis(1500)).await;

        let result = envelope.done(generation(), BTreeMap::new());
        assert!(result.duration_ms >= 1500, "got {}", result.duration_ms);
    }
}
