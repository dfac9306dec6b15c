//! RemoteOK adapter
//!
//! Structured JSON API. The feed's first element is a legal/metadata blob
//! rather than a job, and some entries omit fields, so every item is mapped
//! defensively: anything without a position, company, and url path is
//! skipped. Job urls in the feed are origin-relative.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use super::{non_empty, resolve_url, JobSource};
use crate::domain::{JobPosting, JobType, SourceId};
use crate::infrastructure::error::{ScrapeError, ScrapeResult};
use crate::infrastructure::http_client::HttpClient;

const API_URL: &str = "https://remoteok.com/api";
const ORIGIN: &str = "https://remoteok.com";
const DEFAULT_LOCATION: &str = "Remote";

pub struct RemoteOkSource {
    client: Arc<HttpClient>,
}

impl RemoteOkSource {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Validate the payload shape and map each item; per-item problems skip
    /// that item, a non-array payload fails the whole source.
    pub(crate) fn parse_payload(&self, payload: &Value) -> ScrapeResult<Vec<JobPosting>> {
        let items = payload.as_array().ok_or_else(|| {
            ScrapeError::unexpected_shape("RemoteOK", "expected a top-level array")
        })?;

        Ok(items
            .iter()
            .filter_map(|item| {
                let mapped = self.map_item(item);
                if mapped.is_none() {
                    debug!(source = %SourceId::RemoteOk, "skipping non-job or partial item");
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

        let title = field("position")?;
        let company = field("company")?;
        let path = field("url")?;
        let url = resolve_url(&path, ORIGIN).ok()?;

        let description = field("description");
        let salary = field("salary");
        let job_type = JobType::classify(&title, description.as_deref().unwrap_or(""));

        Some(JobPosting {
            title,
            company,
            location: Some(DEFAULT_LOCATION.to_string()),
            url,
            source: SourceId::RemoteOk,
            description,
            salary,
            job_type,
        })
    }
}

#[async_trait]
impl JobSource for RemoteOkSource {
    fn id(&self) -> SourceId {
        SourceId::RemoteOk
    }

    async fn try_fetch(&self, _keyword: &str, _location: &str) -> ScrapeResult<Vec<JobPosting>> {
        let payload = self.client.get_json(API_URL).await?;
        self.parse_payload(&payload)
    }
}
