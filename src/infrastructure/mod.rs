//! Transport and process infrastructure shared by the source adapters

pub mod browser;
pub mod error;
pub mod http_client;

pub use browser::BrowserSession;
pub use error::{ScrapeError, ScrapeResult};
pub use http_client::{HttpClient, HttpClientConfig};
