//! Pushshift implementation of [`SubmissionSource`](crate::providers::SubmissionSource).

pub mod params;
pub mod provider;
pub mod response;

pub use params::{PushshiftParams, Sort};
pub use provider::PushshiftProvider;
