// src/extractors/feature_list.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// --- Constants ---
/// Heading that opens the feature list in an uploaded document.
pub const FEATURES_ANCHOR: &str = "Features/Functions:";

// --- Regex Patterns (Lazy Static) ---
// "- item" / "* item"
static BULLET_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-*]\s+").expect("Failed to compile BULLET_MARKER_RE")
});

// "1. item" (ASCII digits only)
static ORDINAL_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+\.\s+").expect("Failed to compile ORDINAL_MARKER_RE")
});

// --- Data Structures ---
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureItem {
    pub id: usize,        // 1-based, document order
    pub text: String,     // Line content with list markers stripped
    pub raw_line: String, // Untouched source line
}

// --- Extractor ---
#[derive(Debug, Clone)]
pub struct FeatureListExtractor {
    anchor: String,
}

impl Default for FeatureListExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureListExtractor {
    pub fn new() -> Self {
        Self::with_anchor(FEATURES_ANCHOR)
    }

    /// Builds an extractor that starts collecting after `anchor` instead of the default heading.
    pub fn with_anchor(anchor: impl Into<String>) -> Self {
        Self { anchor: anchor.into() }
    }

    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    /// Extracts the feature lines that follow the anchor heading.
    ///
    /// Collection stops at the next markdown heading (`#...`). Blank lines are
    /// skipped, and a document without the anchor yields an empty list.
    pub fn extract(&self, markdown: &str) -> Vec<FeatureItem> {
        let lines: Vec<&str> = markdown.split('\n').collect();

        // 1. Locate the anchor line
        let start_index = match lines
            .iter()
            .position(|line| line.trim().starts_with(self.anchor.as_str()))
        {
            Some(idx) => idx,
            None => {
                tracing::debug!(
                    "Anchor '{}' not found in document ({} lines)",
                    self.anchor,
                    lines.len()
                );
                return Vec::new();
            }
        };
        tracing::trace!("Found anchor '{}' on line {}", self.anchor, start_index + 1);

        // 2. Collect until the next heading
        let mut features = Vec::new();
        let mut next_id = 1;

        for line in &lines[start_index + 1..] {
            let trimmed = line.trim();

            if trimmed.starts_with('#') {
                tracing::trace!("Stopping at heading: '{}'", trimmed);
                break;
            }
            if trimmed.is_empty() {
                continue;
            }

            let text = strip_list_marker(trimmed);
            if text.is_empty() {
                continue;
            }

            features.push(FeatureItem {
                id: next_id,
                text: text.to_string(),
                raw_line: (*line).to_string(),
            });
            next_id += 1;
        }

        tracing::debug!("Extracted {} feature(s) after '{}'", features.len(), self.anchor);
        features
    }
}

/// Parses features with the default `Features/Functions:` anchor.
pub fn parse_features(markdown: &str) -> Vec<FeatureItem> {
    FeatureListExtractor::new().extract(markdown)
}

// Bullet marker first, then an ordinal marker on what remains.
fn strip_list_marker(line: &str) -> &str {
    let without_bullet = match BULLET_MARKER_RE.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    };
    let without_ordinal = match ORDINAL_MARKER_RE.find(without_bullet) {
        Some(m) => &without_bullet[m.end()..],
        None => without_bullet,
    };
    without_ordinal.trim()
}
