//! Company Dispatcher: one generic pipeline, parameterised by the company descriptor.
//!
//! Flow: resolve (company, job type) → render prompt → one provider call → envelope.
//!
//! `dispatch` never returns an error: every fault becomes a failed `JobResult`.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{info, warn};

use crate::companies::Registry;
use crate::jobs::envelope::Envelope;
use crate::jobs::models::{JobPreview, JobRequest, JobResult};
use crate::jobs::render::{effective_tone, render_prompt};
use crate::jobs::JobError;
use crate::llm_client::{Generation, TextGenerator};

#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<Registry>,
    generator: Arc<dyn TextGenerator>,
}

impl Dispatcher {
    pub fn new(registry: Arc<Registry>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            registry,
            generator,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Runs one job to completion or failure.
    pub async fn dispatch(&self, request: &JobRequest) -> JobResult {
        let envelope = Envelope::open(&request.company_id, &request.job_type);
        info!(
            "Job {} accepted: {}/{}",
            envelope.job_id(),
            request.company_id,
            request.job_type
        );

        match self.execute(request).await {
            Ok((generation, metadata)) => {
                let result = envelope.done(generation, metadata);
                info!(
                    "Job {} done in {}ms ({} tokens)",
                    result.job_id,
                    result.duration_ms,
                    result.tokens_used.unwrap_or_default()
                );
                result
            }
            Err(e) => {
                warn!("Job {} failed after {}ms: {e}", envelope.job_id(), envelope.elapsed_ms());
                envelope.failed(&e)
            }
        }
    }

    async fn execute(
        &self,
        request: &JobRequest,
    ) -> Result<(Generation, BTreeMap<String, String>), JobError> {
        // Both checks happen before any provider call.
        let (company, job) = self.registry.job(&request.company_id, &request.job_type)?;

        let prompt = render_prompt(&self.registry, company, job, request)?;

        let generation = self.generator.generate(company.system_prompt, &prompt).await?;

        let mut metadata = BTreeMap::new();
        metadata.insert(
            "client".to_string(),
            request
                .client_name
                .clone()
                .unwrap_or_else(|| "Anonymous".to_string()),
        );
        metadata.insert(
            "tone".to_string(),
            effective_tone(company, request).to_string(),
        );
        metadata.insert("model".to_string(), generation.model.clone());
        if let Some(format) = &request.output_format {
            metadata.insert("output_format".to_string(), format.clone());
        }
        if let Some(priority) = &request.priority {
            metadata.insert("priority".to_string(), priority.clone());
        }

        Ok((generation, metadata))
    }

    /// Describes a job without calling the provider.
    pub fn preview(
        &self,
        company_id: &str,
        job_type: &str,
        brief: Option<&str>,
    ) -> Result<JobPreview, JobError> {
        let (company, job) = self.registry.job(company_id, job_type)?;

        Ok(JobPreview {
            company: company.name,
            job_type: job.key,
            job_label: job.label,
            brief_received: brief
                .filter(|b| !b.is_empty())
                .unwrap_or("(none provided)")
                .to_string(),
            estimated_time: job.estimated_time,
            status: "demo — no AI call made",
            message: format!(
                "POST /marketplace/submit with company_id='{company_id}' and job_type='{job_type}' to run this job."
            ),
        })
    }
}
