//! Error types for fetch and extraction failures
//!
//! The taxonomy covers transport failures (network, timeout, bad status),
//! shape failures (payload is not the expected list/object), and extraction
//! failures (selector or URL problems). All of these stop at the adapter
//! boundary: a failed source contributes an empty list, never an error.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("http transport failure: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    // Field is deliberately not named `source`: thiserror would treat that
    // as the error cause, and a plain source name is not an Error.
    #[error("unexpected payload shape from {source_name}: {reason}")]
    UnexpectedShape {
        source_name: &'static str,
        reason: String,
    },

    #[error("invalid css selector '{selector}'")]
    Selector { selector: String },

    #[error("could not resolve '{href}' against {base}: {reason}")]
    UrlResolution {
        href: String,
        base: String,
        reason: String,
    },
}

impl ScrapeError {
    pub fn unexpected_shape(source_name: &'static str, reason: impl Into<String>) -> Self {
        Self::UnexpectedShape {
            source_name,
            reason: reason.into(),
        }
    }
}

pub type ScrapeResult<T> = Result<T, ScrapeError>;
