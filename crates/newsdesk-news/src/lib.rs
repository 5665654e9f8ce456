//! Article acquisition for newsdesk.
//!
//! Fetches recent finance headlines from the NewsAPI `everything` endpoint,
//! or serves a fixed demo dataset when no API key is configured or the live
//! fetch comes back empty.

pub mod client;
pub mod demo;
pub mod error;
pub mod source;
pub mod types;

pub use client::NewsApiClient;
pub use demo::demo_articles;
pub use error::NewsError;
pub use source::{acquire_articles, AcquireOptions, Acquisition, ArticleOrigin};
