// Template Registry: one module per company holds its preamble and prompt table.
// Companies are plain data; `Registry` is built once at startup and shared read-only.

pub mod dev_shop;
pub mod finance_office;
pub mod marketing_agency;
pub mod registry;
pub mod sales_team;
pub mod support_desk;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use registry::Registry;

/// The fixed set of companies a job can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyId {
    DevShop,
    MarketingAgency,
    SalesTeam,
    FinanceOffice,
    SupportDesk,
}

impl CompanyId {
    pub const ALL: [CompanyId; 5] = [
        CompanyId::DevShop,
        CompanyId::MarketingAgency,
        CompanyId::SalesTeam,
        CompanyId::FinanceOffice,
        CompanyId::SupportDesk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyId::DevShop => "dev_shop",
            CompanyId::MarketingAgency => "marketing_agency",
            CompanyId::SalesTeam => "sales_team",
            CompanyId::FinanceOffice => "finance_office",
            CompanyId::SupportDesk => "support_desk",
        }
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompanyId {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompanyId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| RegistryError::UnknownCompany(s.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Company '{0}' not found.")]
    UnknownCompany(String),

    #[error("Job type '{job_type}' not available for '{company_id}'. Valid types: {valid:?}")]
    UnknownJobType {
        company_id: CompanyId,
        job_type: String,
        valid: Vec<&'static str>,
    },

    #[error("Company '{0}' is registered more than once")]
    DuplicateCompany(CompanyId),

    #[error("Company '{0}' has no job types")]
    NoJobs(CompanyId),

    #[error("Job type '{job_type}' is declared twice for '{company_id}'")]
    DuplicateJobType {
        company_id: CompanyId,
        job_type: &'static str,
    },

    #[error("Template '{company_id}/{job_type}' is invalid: {reason}")]
    InvalidTemplate {
        company_id: CompanyId,
        job_type: &'static str,
        reason: String,
    },
}

/// A single job a company offers: display metadata plus its Handlebars prompt template.
#[derive(Debug, Clone)]
pub struct JobTemplate {
    pub key: &'static str,
    pub label: &'static str,
    /// Human-facing estimate, e.g. "~45s".
    pub estimated_time: &'static str,
    pub prompt: &'static str,
}

impl JobTemplate {
    pub const fn new(
        key: &'static str,
        label: &'static str,
        estimated_time: &'static str,
        prompt: &'static str,
    ) -> Self {
        Self {
            key,
            label,
            estimated_time,
            prompt,
        }
    }

    pub fn summary(&self) -> JobSummary {
        JobSummary {
            key: self.key,
            label: self.label,
            time: self.estimated_time,
        }
    }
}

/// A company descriptor: preamble, tone policy, job table, and card metadata.
#[derive(Debug, Clone)]
pub struct Company {
    pub id: CompanyId,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    /// 1 = live, 2 = coming soon, 3 = premium
    pub phase: u8,
    pub icon: &'static str,
    pub colour: &'static str,
    pub price_from: &'static str,
    /// System preamble sent with every job for this company.
    pub system_prompt: &'static str,
    /// Substituted for `{tone}` when the request carries no tone.
    pub default_tone: &'static str,
    /// Sentences appended to the prompt when the request's tone matches exactly.
    pub tone_suffixes: &'static [(&'static str, &'static str)],
    /// Declaration order is listing order.
    pub jobs: Vec<JobTemplate>,
}

impl Company {
    pub fn job(&self, key: &str) -> Option<&JobTemplate> {
        self.jobs.iter().find(|j| j.key == key)
    }

    pub fn job_keys(&self) -> Vec<&'static str> {
        self.jobs.iter().map(|j| j.key).collect()
    }

    pub fn tone_suffix(&self, tone: &str) -> Option<&'static str> {
        self.tone_suffixes
            .iter()
            .find(|(t, _)| *t == tone)
            .map(|(_, suffix)| *suffix)
    }

    pub fn card(&self) -> CompanyCard {
        CompanyCard {
            id: self.id,
            name: self.name,
            tagline: self.tagline,
            description: self.description,
            phase: self.phase,
            jobs: self.jobs.iter().map(JobTemplate::summary).collect(),
            icon: self.icon,
            colour: self.colour,
            price_from: self.price_from,
        }
    }
}

/// Listing card for a company, as served to the marketplace frontend.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyCard {
    pub id: CompanyId,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub phase: u8,
    pub jobs: Vec<JobSummary>,
    pub icon: &'static str,
    pub colour: &'static str,
    pub price_from: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobSummary {
    pub key: &'static str,
    pub label: &'static str,
    pub time: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_id_round_trips_through_str() {
        for id in CompanyId::ALL {
            assert_eq!(id.as_str().parse::<CompanyId>().unwrap(), id);
        }
    }

    #[test]
    fn test_company_id_unknown_is_not_found() {
        let err = "unknown_co".parse::<CompanyId>().unwrap_err();
        assert!(matches!(err, RegistryError::UnknownCompany(ref id) if id == "unknown_co"));
        assert_eq!(err.to_string(), "Company 'unknown_co' not found.");
    }

    #[test]
    fn test_company_id_serde_is_snake_case() {
        let json = serde_json::to_string(&CompanyId::FinanceOffice).unwrap();
        assert_eq!(json, "\"finance_office\"");
        let id: CompanyId = serde_json::from_str("\"support_desk\"").unwrap();
        assert_eq!(id, CompanyId::SupportDesk);
    }

    #[test]
    fn test_dev_shop_tone_suffix_lookup() {
        let company = dev_shop::company();
        assert!(company.tone_suffix("casual").is_some());
        assert!(company.tone_suffix("technical").is_some());
        assert!(company.tone_suffix("formal").is_none());
    }

    #[test]
    fn test_card_preserves_job_order() {
        let company = finance_office::company();
        let card = company.card();
        let keys: Vec<_> = card.jobs.iter().map(|j| j.key).collect();
        assert_eq!(keys, company.job_keys());
        assert_eq!(keys[0], "generate_invoice");
    }

    #[test]
    fn test_unknown_job_type_message_lists_valid_keys() {
        let err = RegistryError::UnknownJobType {
            company_id: CompanyId::DevShop,
            job_type: "nonexistent_job".to_string(),
            valid: vec!["fix_bug", "write_tests"],
        };
        let msg = err.to_string();
        assert!(msg.contains("nonexistent_job"));
        assert!(msg.contains("\"fix_bug\""));
        assert!(msg.contains("\"write_tests\""));
    }
}
