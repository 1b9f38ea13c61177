//! Job Renderer: turns a company template plus a job request into the final user prompt.
//!
//! Rendering is pure: the same (company, job, request) always yields the same bytes.

use serde_json::json;
use thiserror::Error;

use crate::companies::{Company, JobTemplate, Registry};
use crate::jobs::models::JobRequest;

/// Substituted for `{{context}}` when the request has none.
pub const CONTEXT_FALLBACK: &str = "No additional context provided.";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error(transparent)]
    Template(#[from] handlebars::RenderError),
}

/// The tone the prompt is rendered with: the request's, else the company default.
pub fn effective_tone<'a>(company: &Company, request: &'a JobRequest) -> &'a str {
    request
        .tone
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(company.default_tone)
}

pub fn render_prompt(
    registry: &Registry,
    company: &Company,
    job: &JobTemplate,
    request: &JobRequest,
) -> Result<String, RenderError> {
    // Whitespace is a real brief and is forwarded untouched.
    if request.brief.is_empty() {
        return Err(RenderError::MissingField("brief"));
    }

    let context = request
        .context
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(CONTEXT_FALLBACK);
    let tone = effective_tone(company, request);

    let mut prompt = registry.render(
        company.id,
        job.key,
        &json!({
            "brief": request.brief,
            "context": context,
            "tone": tone,
        }),
    )?;

    // Register suffixes key off the tone the caller actually sent.
    if let Some(suffix) = request.tone.as_deref().and_then(|t| company.tone_suffix(t)) {
        prompt.push_str("\n\n");
        prompt.push_str(suffix);
    }

    Ok(prompt)
}
