//! VueJobs adapter
//!
//! The jobs index is a utility-class styled page with no stable semantic
//! markup, so the selector table keys off the framework classes. Each
//! listing is an anchor whose own href identifies the posting; the list
//! view carries no description, so classification sees the title only.

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use std::sync::Arc;
use tracing::debug;

use super::{non_empty, resolve_url, selector, JobSource};
use crate::domain::{JobPosting, JobType, SourceId};
use crate::infrastructure::error::ScrapeResult;
use crate::infrastructure::http_client::HttpClient;

const ORIGIN: &str = "https://vuejobs.com";
const JOBS_URL: &str = "https://vuejobs.com/jobs";
const DEFAULT_LOCATION: &str = "Location not specified";

struct ListingSelectors {
    container: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    salary: Selector,
}

pub struct VueJobsSource {
    client: Arc<HttpClient>,
    selectors: ListingSelectors,
}

impl VueJobsSource {
    pub fn new(client: Arc<HttpClient>) -> ScrapeResult<Self> {
        Ok(Self {
            client,
            selectors: ListingSelectors {
                container: selector(r#"a[href^="/jobs/"]"#)?,
                title: selector(".font-display.text-lg.font-bold")?,
                company: selector(".text-sm.font-medium.text-muted")?,
                location: selector(r#".text-xs.mt-3 span.inline-flex[class*="gap-1.5"]"#)?,
                salary: selector(r#".text-xs.mt-3 span[class*="bg-purple-100"]"#)?,
            },
        })
    }

    pub(crate) fn parse_listings(&self, html: &str) -> Vec<JobPosting> {
        let document = Html::parse_document(html);
        let mut postings = Vec::new();

        for anchor in document.select(&self.selectors.container) {
            match self.extract_posting(&anchor) {
                Some(posting) => postings.push(posting),
                None => debug!(source = %SourceId::VueJobs, "skipping listing with missing required fields"),
            }
        }

        postings
    }

    fn extract_posting(&self, anchor: &ElementRef<'_>) -> Option<JobPosting> {
        let text_of = |sel: &Selector| {
            anchor
                .select(sel)
                .next()
                .and_then(|el| non_empty(el.text().collect()))
        };

        let title = text_of(&self.selectors.title)?;
        let company = text_of(&self.selectors.company)
            .map(|raw| raw.strip_prefix("at ").unwrap_or(&raw).to_string())?;
        let href = anchor.value().attr("href")?;
        let url = resolve_url(href, ORIGIN).ok()?;

        let location = text_of(&self.selectors.location)
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string());
        let salary = text_of(&self.selectors.salary);

        // List view has no description; classify from the title alone.
        let job_type = JobType::classify(&title, "");

        Some(JobPosting {
            title,
            company,
            location: Some(location),
            url,
            source: SourceId::VueJobs,
            description: None,
            salary,
            job_type,
        })
    }
}

#[async_trait]
impl JobSource for VueJobsSource {
    fn id(&self) -> SourceId {
        SourceId::VueJobs
    }

    async fn try_fetch(&self, _keyword: &str, _location: &str) -> ScrapeResult<Vec<JobPosting>> {
        let html = self.client.get_text(JOBS_URL).await?;
        Ok(self.parse_listings(&html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http_client::HttpClientConfig;

    fn source() -> VueJobsSource {
        let client = Arc::new(HttpClient::new(&HttpClientConfig::default()).unwrap());
        VueJobsSource::new(client).unwrap()
    }

    const LISTING: &str = r#"
        <a href="/jobs/vue-developer-42">
          <div class="font-display text-lg font-bold">Vue Developer</div>
          <div class="text-sm font-medium text-muted">at Nuxt Labs</div>
          <div class="text-xs mt-3">
            <span class="inline-flex items-center gap-1.5">Remote, Europe</span>
            <span class="rounded bg-purple-100">$70k - $90k</span>
          </div>
        </a>"#;

    #[test]
    fn extracts_listing_with_salary_and_stripped_company() {
        let postings = source().parse_listings(LISTING);

        assert_eq!(postings.len(), 1);
        let posting = &postings[0];
        assert_eq!(posting.title, "Vue Developer");
        assert_eq!(posting.company, "Nuxt Labs");
        assert_eq!(posting.location.as_deref(), Some("Remote, Europe"));
        assert_eq!(posting.salary.as_deref(), Some("$70k - $90k"));
        assert_eq!(posting.url, "https://vuejobs.com/jobs/vue-developer-42");
        assert_eq!(posting.description, None);
    }

    #[test]
    fn anchor_without_title_markup_is_skipped() {
        let html = r#"<a href="/jobs/abc"><div class="text-sm font-medium text-muted">at Acme</div></a>"#;
        assert!(source().parse_listings(html).is_empty());
    }

    #[test]
    fn missing_location_and_salary_use_defaults() {
        let html = r#"
            <a href="/jobs/frontend-intern">
              <div class="font-display text-lg font-bold">Frontend Intern</div>
              <div class="text-sm font-medium text-muted">at Acme</div>
            </a>"#;

        let postings = source().parse_listings(html);
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].location.as_deref(), Some(DEFAULT_LOCATION));
        assert_eq!(postings[0].salary, None);
        assert_eq!(postings[0].job_type, JobType::Internship);
    }
}
