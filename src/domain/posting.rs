//! Normalized job posting entity and job type classification
//!
//! Every source adapter emits `JobPosting` records in this shape. The
//! absolute `url` is the cross-source identity: the storage collaborator
//! upserts on it, this crate never deduplicates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies which adapter produced a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceId {
    #[serde(rename = "LinkedIn")]
    LinkedIn,
    #[serde(rename = "RemoteOK")]
    RemoteOk,
    #[serde(rename = "Relocate.me")]
    RelocateMe,
    #[serde(rename = "Larajobs")]
    Larajobs,
    #[serde(rename = "VueJobs")]
    VueJobs,
}

impl SourceId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LinkedIn => "LinkedIn",
            Self::RemoteOk => "RemoteOK",
            Self::RelocateMe => "Relocate.me",
            Self::Larajobs => "Larajobs",
            Self::VueJobs => "VueJobs",
        }
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employment category inferred from posting text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl JobType {
    /// Classify a posting from its title and description.
    ///
    /// Total function: keyword checks run in fixed priority order and fall
    /// through to `FullTime`. The order matters - a posting mentioning both
    /// "internship" and "contract" is an internship.
    pub fn classify(title: &str, description: &str) -> Self {
        let text = format!("{title} {description}").to_lowercase();

        if text.contains("intern") {
            Self::Internship
        } else if text.contains("contract") || text.contains("freelance") || text.contains("temporary") {
            Self::Contract
        } else if text.contains("part time") || text.contains("part-time") {
            Self::PartTime
        } else {
            Self::FullTime
        }
    }
}

/// One normalized job listing, created fresh on every aggregation run.
///
/// An adapter only emits a posting when `title`, `company`, and `url` are
/// all non-empty after extraction; partial extractions are dropped, not
/// reported as errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    /// Absolute URL; dedup key for the persistence collaborator.
    pub url: String,
    pub source: SourceId,
    /// May contain markup straight from the source.
    pub description: Option<String>,
    pub salary: Option<String>,
    pub job_type: JobType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Software Engineering Internship", "", JobType::Internship)]
    #[case("Backend Intern", "join our team", JobType::Internship)]
    #[case("DevOps Engineer", "6 month contract role", JobType::Contract)]
    #[case("Designer", "freelance engagement", JobType::Contract)]
    #[case("Data Analyst", "temporary cover position", JobType::Contract)]
    #[case("Support Engineer (part time)", "", JobType::PartTime)]
    #[case("Part-Time Bookkeeper", "", JobType::PartTime)]
    #[case("Senior Rust Engineer", "distributed systems work", JobType::FullTime)]
    #[case("", "", JobType::FullTime)]
    fn classify_cases(#[case] title: &str, #[case] description: &str, #[case] expected: JobType) {
        assert_eq!(JobType::classify(title, description), expected);
    }

    #[test]
    fn internship_outranks_contract() {
        assert_eq!(
            JobType::classify("Engineering Internship", "contract, freelance, temporary"),
            JobType::Internship
        );
    }

    #[test]
    fn contract_outranks_part_time() {
        assert_eq!(
            JobType::classify("Part-time contract developer", ""),
            JobType::Contract
        );
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(JobType::classify("FREELANCE Writer", ""), JobType::Contract);
    }

    #[test]
    fn keywords_in_description_count() {
        assert_eq!(
            JobType::classify("Engineer", "This is an INTERNSHIP opportunity"),
            JobType::Internship
        );
    }

    #[test]
    fn source_id_round_trips_through_serde() {
        let json = serde_json::to_string(&SourceId::RelocateMe).unwrap();
        assert_eq!(json, "\"Relocate.me\"");
        let back: SourceId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SourceId::RelocateMe);
    }

    #[test]
    fn posting_serializes_with_camel_case_job_type() {
        let posting = JobPosting {
            title: "Rust Engineer".into(),
            company: "Acme".into(),
            location: Some("Remote".into()),
            url: "https://example.com/jobs/1".into(),
            source: SourceId::RemoteOk,
            description: None,
            salary: None,
            job_type: JobType::FullTime,
        };
        let value = serde_json::to_value(&posting).unwrap();
        assert_eq!(value["jobType"], "FULL_TIME");
        assert_eq!(value["source"], "RemoteOK");
    }
}
