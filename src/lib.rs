//! Markdown feature extraction and section indexing.
//!
//! Two single-pass parsers turn raw markdown into structured records:
//! [`parse_features`] collects the list under a `Features/Functions:` heading,
//! and [`parse_markdown`] splits a document into classified `## ` sections with
//! per-category and per-importance indexes. [`pagination`] and [`search`] slice
//! and filter those results for display.

pub mod extractors;
pub mod pagination;
pub mod search;
pub mod source;
pub mod storage;
pub mod utils;

pub use extractors::{parse_features, parse_markdown, FeatureItem, ListItem, ParsedMarkdown, Section};
pub use pagination::{paginate, Page};
