//! jobhive - multi-source job posting aggregation engine
//!
//! Fetches job postings from several independent external sources (HTML
//! pages and JSON APIs), normalizes them into a single record format, and
//! returns the union tagged per source. One unreliable source never aborts
//! a run; persistence and dedup by canonical URL belong to the caller.

pub mod aggregator;
pub mod domain;
pub mod infrastructure;
pub mod sources;

pub use aggregator::{JobScraper, ScrapeOutcome};
pub use domain::{JobPosting, JobType, SourceId};
pub use infrastructure::browser::BrowserSession;
pub use infrastructure::error::{ScrapeError, ScrapeResult};
pub use infrastructure::http_client::{HttpClient, HttpClientConfig};
pub use sources::JobSource;
