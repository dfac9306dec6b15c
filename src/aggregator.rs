//! Concurrent fan-out over the registered source adapters
//!
//! One aggregation run spawns a task per adapter and joins them all, so
//! total latency is bounded by the slowest source rather than the sum.
//! Adapters already convert their own failures into empty lists, so the
//! join has no per-source error path; a panicked task is logged and
//! contributes nothing.

use std::sync::Arc;

use anyhow::{Context, Result};
use futures::future::join_all;
use tracing::{error, info};

use crate::domain::{JobPosting, SourceId};
use crate::infrastructure::http_client::{HttpClient, HttpClientConfig};
use crate::sources::{
    JobSource, LarajobsSource, LinkedInSource, RelocateSource, RemoteOkSource, VueJobsSource,
};

/// Result of one aggregation run: the unioned postings plus per-source
/// counts for operational visibility.
#[derive(Debug)]
pub struct ScrapeOutcome {
    pub postings: Vec<JobPosting>,
    pub source_counts: Vec<(SourceId, usize)>,
}

/// Registry of source adapters plus the shared HTTP client they use.
pub struct JobScraper {
    sources: Vec<Arc<dyn JobSource>>,
}

impl JobScraper {
    /// Build the default adapter set behind one shared HTTP client.
    pub fn new() -> Result<Self> {
        let config = HttpClientConfig::default();
        let client =
            Arc::new(HttpClient::new(&config).context("failed to build shared http client")?);

        let sources: Vec<Arc<dyn JobSource>> = vec![
            Arc::new(LinkedInSource::new(Arc::clone(&client)).context("linkedin selectors")?),
            Arc::new(RemoteOkSource::new(Arc::clone(&client))),
            Arc::new(RelocateSource::new(Arc::clone(&client)).context("relocate selectors")?),
            Arc::new(LarajobsSource::new(Arc::clone(&client))),
            Arc::new(VueJobsSource::new(client).context("vuejobs selectors")?),
        ];

        Ok(Self::with_sources(sources))
    }

    /// Build a scraper over an explicit adapter set, in registration order.
    pub fn with_sources(sources: Vec<Arc<dyn JobSource>>) -> Self {
        Self { sources }
    }

    /// Run every registered adapter concurrently and union the results.
    ///
    /// Infallible by design: a degraded source contributes an empty list
    /// and the run reports whatever the rest produced. Output preserves
    /// registration order across sources.
    pub async fn scrape_all(&self, keyword: &str, location: &str) -> ScrapeOutcome {
        info!(keyword, location, sources = self.sources.len(), "starting aggregation run");

        let tasks: Vec<_> = self
            .sources
            .iter()
            .map(|source| {
                let source = Arc::clone(source);
                let keyword = keyword.to_owned();
                let location = location.to_owned();
                tokio::spawn(async move { source.fetch(&keyword, &location).await })
            })
            .collect();

        let results = join_all(tasks).await;

        let mut postings = Vec::new();
        let mut source_counts = Vec::with_capacity(self.sources.len());

        for (source, result) in self.sources.iter().zip(results) {
            let id = source.id();
            match result {
                Ok(list) => {
                    info!(source = %id, count = list.len(), "source completed");
                    source_counts.push((id, list.len()));
                    postings.extend(list);
                }
                Err(join_err) => {
                    error!(source = %id, error = %join_err, "source task aborted");
                    source_counts.push((id, 0));
                }
            }
        }

        info!(total = postings.len(), "aggregation run complete");

        ScrapeOutcome {
            postings,
            source_counts,
        }
    }
}
