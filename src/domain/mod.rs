//! Domain types for normalized job postings

pub mod posting;

pub use posting::{JobPosting, JobType, SourceId};
