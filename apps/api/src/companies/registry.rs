//! Company registry: the read-only lookup table behind every listing and dispatch.
//!
//! Built once in `main` and shared behind an `Arc`; nothing mutates it afterwards.
//! Every job's prompt is registered with one strict-mode `Handlebars` instance
//! keyed `"<company_id>/<job_type>"`.

use std::collections::HashSet;
use std::fmt;

use handlebars::Handlebars;
use serde_json::{json, Value};

use crate::companies::{
    dev_shop, finance_office, marketing_agency, sales_team, support_desk, Company, CompanyCard,
    CompanyId, JobTemplate, RegistryError,
};

pub struct Registry {
    companies: Vec<Company>,
    templates: Handlebars<'static>,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("companies", &self.companies)
            .finish_non_exhaustive()
    }
}

fn template_name(company_id: CompanyId, job_type: &str) -> String {
    format!("{company_id}/{job_type}")
}

impl Registry {
    /// Validates and wraps a set of companies. Declaration order is preserved.
    ///
    /// Each template is compiled and dry-rendered once, so a syntax error or a
    /// placeholder other than `brief`, `context` or `tone` fails startup.
    pub fn new(companies: Vec<Company>) -> Result<Self, RegistryError> {
        let mut templates = Handlebars::new();
        templates.set_strict_mode(true);
        templates.register_escape_fn(handlebars::no_escape);

        let sample = json!({ "brief": "brief", "context": "context", "tone": "tone" });
        let mut seen = HashSet::new();

        for company in &companies {
            if !seen.insert(company.id) {
                return Err(RegistryError::DuplicateCompany(company.id));
            }
            if company.jobs.is_empty() {
                return Err(RegistryError::NoJobs(company.id));
            }

            let mut keys = HashSet::new();
            for job in &company.jobs {
                if !keys.insert(job.key) {
                    return Err(RegistryError::DuplicateJobType {
                        company_id: company.id,
                        job_type: job.key,
                    });
                }

                let invalid = |reason: String| RegistryError::InvalidTemplate {
                    company_id: company.id,
                    job_type: job.key,
                    reason,
                };
                let name = template_name(company.id, job.key);
                templates
                    .register_template_string(&name, job.prompt)
                    .map_err(|e| invalid(e.to_string()))?;
                templates
                    .render(&name, &sample)
                    .map_err(|e| invalid(e.to_string()))?;
            }
        }

        Ok(Self {
            companies,
            templates,
        })
    }

    /// The five shipped companies.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::new(vec![
            dev_shop::company(),
            marketing_agency::company(),
            sales_team::company(),
            finance_office::company(),
            support_desk::company(),
        ])
    }

    pub fn companies(&self) -> impl Iterator<Item = &Company> {
        self.companies.iter()
    }

    pub fn list_companies(&self) -> Vec<CompanyCard> {
        self.companies.iter().map(Company::card).collect()
    }

    pub fn get_company(&self, id: &str) -> Result<&Company, RegistryError> {
        let company_id: CompanyId = id.parse()?;
        self.companies
            .iter()
            .find(|c| c.id == company_id)
            .ok_or_else(|| RegistryError::UnknownCompany(id.to_string()))
    }

    pub fn get_job_types(&self, id: &str) -> Result<Vec<&'static str>, RegistryError> {
        self.get_company(id).map(Company::job_keys)
    }

    /// Resolves a (company, job type) pair, checking both against the registry.
    pub fn job(
        &self,
        company_id: &str,
        job_type: &str,
    ) -> Result<(&Company, &JobTemplate), RegistryError> {
        let company = self.get_company(company_id)?;
        match company.job(job_type) {
            Some(job) => Ok((company, job)),
            None => Err(RegistryError::UnknownJobType {
                company_id: company.id,
                job_type: job_type.to_string(),
                valid: self.get_job_types(company_id)?,
            }),
        }
    }

    /// Renders the registered template for `company_id/job_type` against `data`.
    pub fn render(
        &self,
        company_id: CompanyId,
        job_type: &str,
        data: &Value,
    ) -> Result<String, handlebars::RenderError> {
        self.templates
            .render(&template_name(company_id, job_type), data)
    }

    pub fn total_job_types(&self) -> usize {
        self.companies.iter().map(|c| c.jobs.len()).sum()
    }
}
