//! Larajobs adapter
//!
//! Structured JSON API returning the full current listing set; there is no
//! keyword search on the endpoint. Posting urls are built from the item
//! slug, and a missing company name falls back to a literal rather than
//! dropping the item.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use super::{non_empty, JobSource};
use crate::domain::{JobPosting, JobType, SourceId};
use crate::infrastructure::error::{ScrapeError, ScrapeResult};
use crate::infrastructure::http_client::HttpClient;

const API_URL: &str = "https://larajobs.com/api/jobs";
const ORIGIN: &str = "https://larajobs.com";
const DEFAULT_COMPANY: &str = "Unknown Company";
const DEFAULT_LOCATION: &str = "Remote";

pub struct LarajobsSource {
    client: Arc<HttpClient>,
}

impl LarajobsSource {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub(crate) fn parse_payload(&self, payload: &Value) -> ScrapeResult<Vec<JobPosting>> {
        let items = payload.as_array().ok_or_else(|| {
            ScrapeError::unexpected_shape("Larajobs", "expected a top-level array")
        })?;

        Ok(items
            .iter()
            .filter_map(|item| {
                let mapped = self.map_item(item);
                if mapped.is_none() {
                    debug!(source = %SourceId::Larajobs, "skipping item without title or slug");
                }
                mapped
            })
            .collect())
    }

    fn map_item(&self, item: &Value) -> Option<JobPosting> {
        let field = |name: &str| {
            item.get(name)
                .and_then(Value::as_str)
                .and_then(|s| non_empty(s.to_string()))
        };

        let title = field("title")?;
        let slug = field("slug")?;
        let url = format!("{ORIGIN}/jobs/{slug}");

        let company = field("company_name").unwrap_or_else(|| DEFAULT_COMPANY.to_string());
        let location = field("location").unwrap_or_else(|| DEFAULT_LOCATION.to_string());
        let description = field("description");
        let job_type = JobType::classify(&title, description.as_deref().unwrap_or(""));

        Some(JobPosting {
            title,
            company,
            location: Some(location),
            url,
            source: SourceId::Larajobs,
            description,
            salary: None,
            job_type,
        })
    }
}

#[async_trait]
impl JobSource for LarajobsSource {
    fn id(&self) -> SourceId {
        SourceId::Larajobs
    }

    async fn try_fetch(&self, _keyword: &str, _location: &str) -> ScrapeResult<Vec<JobPosting>> {
        let payload = self.client.get_json(API_URL).await?;
        self.parse_payload(&payload)
    }
}
