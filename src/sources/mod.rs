//! Source adapters: one module per external job board
//!
//! Every adapter implements [`JobSource`]. The fallible `try_fetch` holds
//! the per-source transport and extraction logic; the public `fetch`
//! converts any failure into an empty list so one source's outage never
//! aborts an aggregation run. Two strategies exist: markup scraping
//! (LinkedIn, Relocate.me, VueJobs) and structured JSON APIs (RemoteOK,
//! Larajobs).

pub mod larajobs;
pub mod linkedin;
pub mod relocate;
pub mod remoteok;
pub mod vuejobs;

pub use larajobs::LarajobsSource;
pub use linkedin::LinkedInSource;
pub use relocate::RelocateSource;
pub use remoteok::RemoteOkSource;
pub use vuejobs::VueJobsSource;

use async_trait::async_trait;
use scraper::Selector;
use tracing::warn;
use url::Url;

use crate::domain::{JobPosting, SourceId};
use crate::infrastructure::error::{ScrapeError, ScrapeResult};

/// Capability contract shared by all source adapters.
#[async_trait]
pub trait JobSource: Send + Sync {
    fn id(&self) -> SourceId;

    /// Fetch and normalize postings; any transport, shape, or extraction
    /// failure is returned as an error.
    async fn try_fetch(&self, keyword: &str, location: &str) -> ScrapeResult<Vec<JobPosting>>;

    /// Failure-isolation boundary: errors from `try_fetch` are logged with
    /// source context and degrade to an empty list.
    async fn fetch(&self, keyword: &str, location: &str) -> Vec<JobPosting> {
        match self.try_fetch(keyword, location).await {
            Ok(postings) => postings,
            Err(err) => {
                warn!(source = %self.id(), error = %err, "source degraded to empty result");
                Vec::new()
            }
        }
    }
}

/// Compile a CSS selector, mapping the (static-typo) failure into the
/// scrape error taxonomy.
pub(crate) fn selector(css: &str) -> ScrapeResult<Selector> {
    Selector::parse(css).map_err(|_| ScrapeError::Selector {
        selector: css.to_string(),
    })
}

/// Resolve a possibly-relative href against a source origin.
pub(crate) fn resolve_url(href: &str, base: &str) -> ScrapeResult<String> {
    let resolution_error = |reason: String| ScrapeError::UrlResolution {
        href: href.to_string(),
        base: base.to_string(),
        reason,
    };

    let base_url = Url::parse(base).map_err(|e| resolution_error(e.to_string()))?;
    let resolved = base_url
        .join(href)
        .map_err(|e| resolution_error(e.to_string()))?;
    Ok(resolved.to_string())
}

/// Trimmed element text, `None` when effectively empty.
pub(crate) fn non_empty(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
