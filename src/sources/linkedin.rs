//! LinkedIn adapter
//!
//! Scrapes the public jobs-guest search endpoint, which serves plain HTML
//! fragments of `.job-search-card` listings without authentication. The
//! `f_TPR=r86400` filter restricts results to the last 24 hours.

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use std::sync::Arc;
use tracing::debug;
use url::Url;

use super::{non_empty, resolve_url, selector, JobSource};
use crate::domain::{JobPosting, JobType, SourceId};
use crate::infrastructure::error::ScrapeResult;
use crate::infrastructure::http_client::HttpClient;

const SEARCH_ENDPOINT: &str =
    "https://www.linkedin.com/jobs-guest/jobs/api/seeMoreJobPostings/search";
const ORIGIN: &str = "https://www.linkedin.com";

/// Per-source selector table, compiled once at construction.
struct ListingSelectors {
    container: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    link: Selector,
    description: Selector,
}

pub struct LinkedInSource {
    client: Arc<HttpClient>,
    selectors: ListingSelectors,
}

impl LinkedInSource {
    pub fn new(client: Arc<HttpClient>) -> ScrapeResult<Self> {
        Ok(Self {
            client,
            selectors: ListingSelectors {
                container: selector(".job-search-card")?,
                title: selector(".base-search-card__title")?,
                company: selector(".base-search-card__subtitle")?,
                location: selector(".job-search-card__location")?,
                link: selector(".base-card__full-link")?,
                description: selector(".job-search-card__snippet")?,
            },
        })
    }

    fn search_url(keyword: &str, location: &str) -> String {
        // Static endpoint plus encoded params; cannot fail at runtime.
        Url::parse_with_params(
            SEARCH_ENDPOINT,
            &[
                ("keywords", keyword),
                ("location", location),
                ("f_TPR", "r86400"),
                ("start", "0"),
            ],
        )
        .map(String::from)
        .unwrap_or_else(|_| SEARCH_ENDPOINT.to_string())
    }

    pub(crate) fn parse_listings(&self, html: &str) -> Vec<JobPosting> {
        let document = Html::parse_document(html);
        let mut postings = Vec::new();

        for card in document.select(&self.selectors.container) {
            match self.extract_posting(&card) {
                Some(posting) => postings.push(posting),
                None => debug!(source = %SourceId::LinkedIn, "skipping card with missing required fields"),
            }
        }

        postings
    }

    fn extract_posting(&self, card: &ElementRef<'_>) -> Option<JobPosting> {
        let text_of = |sel: &Selector| {
            card.select(sel)
                .next()
                .and_then(|el| non_empty(el.text().collect()))
        };

        let title = text_of(&self.selectors.title)?;
        let company = text_of(&self.selectors.company)?;
        let href = card
            .select(&self.selectors.link)
            .next()
            .and_then(|el| el.value().attr("href"))?;
        let url = resolve_url(href, ORIGIN).ok()?;

        let location = text_of(&self.selectors.location);
        let description = text_of(&self.selectors.description);

        let job_type = JobType::classify(&title, description.as_deref().unwrap_or(""));

        Some(JobPosting {
            title,
            company,
            location,
            url,
            source: SourceId::LinkedIn,
            description,
            salary: None,
            job_type,
        })
    }
}

#[async_trait]
impl JobSource for LinkedInSource {
    fn id(&self) -> SourceId {
        SourceId::LinkedIn
    }

    async fn try_fetch(&self, keyword: &str, location: &str) -> ScrapeResult<Vec<JobPosting>> {
        let url = Self::search_url(keyword, location);
        let html = self.client.get_text(&url).await?;
        Ok(self.parse_listings(&html))
    }
}
