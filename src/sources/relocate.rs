//! Relocate.me adapter
//!
//! Plain HTML search results; listing markup nests company and location in
//! positional `.job__info` children, so the selector table leans on
//! `:nth-child`. Hrefs are relative and resolved against the origin.

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use std::sync::Arc;
use tracing::debug;
use url::Url;

use super::{non_empty, resolve_url, selector, JobSource};
use crate::domain::{JobPosting, JobType, SourceId};
use crate::infrastructure::error::ScrapeResult;
use crate::infrastructure::http_client::HttpClient;

const ORIGIN: &str = "https://relocate.me";
const DEFAULT_LOCATION: &str = "Location not specified";

struct ListingSelectors {
    container: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    link: Selector,
    preview: Selector,
}

pub struct RelocateSource {
    client: Arc<HttpClient>,
    selectors: ListingSelectors,
}

impl RelocateSource {
    pub fn new(client: Arc<HttpClient>) -> ScrapeResult<Self> {
        Ok(Self {
            client,
            selectors: ListingSelectors {
                container: selector(".jobs-list__job")?,
                title: selector(".job__title a b")?,
                company: selector(".job__info > div:nth-child(2) p")?,
                location: selector(".job__info > div:first-child p")?,
                link: selector(".job__title a")?,
                preview: selector(".job__preview")?,
            },
        })
    }

    fn search_url(keyword: &str) -> String {
        Url::parse_with_params(&format!("{ORIGIN}/search"), &[("q", keyword)])
            .map(String::from)
            .unwrap_or_else(|_| format!("{ORIGIN}/search"))
    }

    pub(crate) fn parse_listings(&self, html: &str) -> Vec<JobPosting> {
        let document = Html::parse_document(html);
        let mut postings = Vec::new();

        for listing in document.select(&self.selectors.container) {
            match self.extract_posting(&listing) {
                Some(posting) => postings.push(posting),
                None => debug!(source = %SourceId::RelocateMe, "skipping listing with missing required fields"),
            }
        }

        postings
    }

    fn extract_posting(&self, listing: &ElementRef<'_>) -> Option<JobPosting> {
        let text_of = |sel: &Selector| {
            listing
                .select(sel)
                .next()
                .and_then(|el| non_empty(el.text().collect()))
        };

        let title = text_of(&self.selectors.title)?;
        let company = text_of(&self.selectors.company)?;
        let href = listing
            .select(&self.selectors.link)
            .next()
            .and_then(|el| el.value().attr("href"))?;
        let url = resolve_url(href, ORIGIN).ok()?;

        let location = text_of(&self.selectors.location)
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string());
        let description = text_of(&self.selectors.preview);

        let job_type = JobType::classify(&title, description.as_deref().unwrap_or(""));

        Some(JobPosting {
            title,
            company,
            location: Some(location),
            url,
            source: SourceId::RelocateMe,
            description,
            salary: None,
            job_type,
        })
    }
}

#[async_trait]
impl JobSource for RelocateSource {
    fn id(&self) -> SourceId {
        SourceId::RelocateMe
    }

    async fn try_fetch(&self, keyword: &str, _location: &str) -> ScrapeResult<Vec<JobPosting>> {
        let url = Self::search_url(keyword);
        let html = self.client.get_text(&url).await?;
        Ok(self.parse_listings(&html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http_client::HttpClientConfig;

    fn source() -> RelocateSource {
        let client = Arc::new(HttpClient::new(&HttpClientConfig::default()).unwrap());
        RelocateSource::new(client).unwrap()
    }

    const LISTING: &str = r#"
        <div class="jobs-list__job">
          <div class="job__title"><a href="/jobs/go-developer-berlin"><b>Go Developer</b></a></div>
          <div class="job__info">
            <div><p>Berlin, Germany</p></div>
            <div><p>Shipyard GmbH</p></div>
          </div>
          <div class="job__preview">Relocation support and visa sponsorship.</div>
        </div>"#;

    #[test]
    fn resolves_relative_hrefs_to_absolute_urls() {
        let postings = source().parse_listings(LISTING);

        assert_eq!(postings.len(), 1);
        let posting = &postings[0];
        assert_eq!(posting.url, "https://relocate.me/jobs/go-developer-berlin");
        assert_eq!(posting.title, "Go Developer");
        assert_eq!(posting.company, "Shipyard GmbH");
        assert_eq!(posting.location.as_deref(), Some("Berlin, Germany"));
        assert_eq!(posting.job_type, JobType::FullTime);
    }

    #[test]
    fn missing_location_falls_back_to_default_literal() {
        let html = r#"
            <div class="jobs-list__job">
              <div class="job__title"><a href="/jobs/1"><b>Engineer</b></a></div>
              <div class="job__info">
                <div><p></p></div>
                <div><p>Acme</p></div>
              </div>
            </div>"#;

        let postings = source().parse_listings(html);
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].location.as_deref(), Some(DEFAULT_LOCATION));
    }

    #[test]
    fn listing_without_company_is_dropped() {
        let html = r#"
            <div class="jobs-list__job">
              <div class="job__title"><a href="/jobs/1"><b>Engineer</b></a></div>
              <div class="job__info"><div><p>Remote</p></div></div>
            </div>"#;

        assert!(source().parse_listings(html).is_empty());
    }

    #[test]
    fn search_url_carries_keyword() {
        assert_eq!(
            RelocateSource::search_url("rust"),
            "https://relocate.me/search?q=rust"
        );
    }
}
