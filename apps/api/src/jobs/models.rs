use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Job submission: the same shape for every company.
///
/// `company_id` stays a plain string so an unknown company reaches the
/// dispatcher and comes back as a failed result rather than a decode error.
#[derive(Debug, Clone, Deserialize)]
pub struct JobRequest {
    pub company_id: String,
    pub job_type: String,
    pub brief: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    /// Omitted → "professional". An explicit null leaves it unset so the
    /// company's own default tone applies.
    #[serde(default = "default_tone")]
    pub tone: Option<String>,
    /// Informational only.
    #[serde(default = "default_output_format")]
    pub output_format: Option<String>,
    /// Informational only.
    #[serde(default = "default_priority")]
    pub priority: Option<String>,
    /// Company-specific extras. Not read by the pipeline.
    #[serde(default)]
    pub extra: HashMap<String, Value>,
}

fn default_tone() -> Option<String> {
    Some("professional".to_string())
}

fn default_output_format() -> Option<String> {
    Some("text".to_string())
}

fn default_priority() -> Option<String> {
    Some("normal".to_string())
}

#[cfg(test)]
impl JobRequest {
    pub fn new(company_id: &str, job_type: &str, brief: &str) -> Self {
        Self {
            company_id: company_id.to_string(),
            job_type: job_type.to_string(),
            brief: brief.to_string(),
            context: None,
            client_name: None,
            tone: default_tone(),
            output_format: default_output_format(),
            priority: default_priority(),
            extra: HashMap::new(),
        }
    }

    pub fn with_tone(mut self, tone: Option<&str>) -> Self {
        self.tone = tone.map(str::to_string);
        self
    }

    pub fn with_context(mut self, context: &str) -> Self {
        self.context = Some(context.to_string());
        self
    }

    pub fn with_client(mut self, client_name: &str) -> Self {
        self.client_name = Some(client_name.to_string());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    // Execution is synchronous, so only Done and Failed are ever produced.
    Queued,
    Running,
    Done,
    Failed,
}

/// Why a job failed. Lets the boundary pick a transport status without parsing `error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    InvalidJobType,
    MissingField,
    Generation,
    Internal,
}

/// Result envelope: built exactly once per job, success or failure.
#[derive(Debug, Clone, Serialize)]
pub struct JobResult {
    pub job_id: String,
    pub company_id: String,
    pub job_type: String,
    pub status: JobStatus,
    /// Present iff status is `done`.
    pub output: Option<String>,
    pub metadata: BTreeMap<String, String>,
    /// Present iff status is `failed`.
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
    pub duration_ms: u64,
    /// input + output tokens as reported by the provider.
    pub tokens_used: Option<u32>,
}

/// No-call preview of a job, for wiring up clients without spending provider credits.
#[derive(Debug, Clone, Serialize)]
pub struct JobPreview {
    pub company: &'static str,
    pub job_type: &'static str,
    pub job_label: &'static str,
    pub brief_received: String,
    pub estimated_time: &'static str,
    pub status: &'static str,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_request_minimal_fields_get_defaults() {
        let request: JobRequest = serde_json::from_value(json!({
            "company_id": "finance_office",
            "job_type": "generate_invoice",
            "brief": "Invoice Acme for £8,000"
        }))
        .unwrap();
        assert_eq!(request.tone.as_deref(), Some("professional"));
        assert_eq!(request.output_format.as_deref(), Some("text"));
        assert_eq!(request.priority.as_deref(), Some("normal"));
        assert!(request.context.is_none());
        assert!(request.client_name.is_none());
        assert!(request.extra.is_empty());
    }

    #[test]
    fn test_job_request_explicit_null_tone_stays_unset() {
        let request: JobRequest = serde_json::from_value(json!({
            "company_id": "support_desk",
            "job_type": "draft_response",
            "brief": "Customer double charged",
            "tone": null
        }))
        .unwrap();
        assert!(request.tone.is_none());
    }

    #[test]
    fn test_job_request_requires_brief() {
        let result: Result<JobRequest, _> = serde_json::from_value(json!({
            "company_id": "dev_shop",
            "job_type": "fix_bug"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_job_request_keeps_extra_fields() {
        let request: JobRequest = serde_json::from_value(json!({
            "company_id": "dev_shop",
            "job_type": "fix_bug",
            "brief": "NPE in login",
            "extra": {"language": "kotlin", "lines": 42}
        }))
        .unwrap();
        assert_eq!(request.extra["language"], "kotlin");
        assert_eq!(request.extra["lines"], 42);
    }

    #[test]
    fn test_job_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&JobStatus::Done).unwrap(), "\"done\"");
        assert_eq!(serde_json::to_string(&JobStatus::Failed).unwrap(), "\"failed\"");
        assert_eq!(serde_json::to_string(&JobStatus::Queued).unwrap(), "\"queued\"");
    }

    #[test]
    fn test_job_result_omits_error_kind_on_success() {
        let result = JobResult {
            job_id: "abc123def456".to_string(),
            company_id: "dev_shop".to_string(),
            job_type: "fix_bug".to_string(),
            status: JobStatus::Done,
            output: Some("fixed".to_string()),
            metadata: BTreeMap::new(),
            error: None,
            error_kind: None,
            duration_ms: 12,
            tokens_used: Some(30),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("error_kind").is_none());
        assert_eq!(value["error"], Value::Null);
        assert_eq!(value["status"], "done");
    }
}
