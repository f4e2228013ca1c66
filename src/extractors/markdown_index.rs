// src/extractors/markdown_index.rs

// --- Imports ---
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// --- Constants ---
const SECTION_PREFIX: &str = "## ";
const BULLET_PREFIX: &str = "- ";
const TOC_MARKER: &str = "Table of Contents";

// --- Classification ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Security,
    #[serde(rename = "Core Features")]
    CoreFeatures,
    Technical,
    Support,
    General,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Security,
        Category::CoreFeatures,
        Category::Technical,
        Category::Support,
        Category::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Security => "Security",
            Self::CoreFeatures => "Core Features",
            Self::Technical => "Technical",
            Self::Support => "Support",
            Self::General => "General",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Importance {
    Critical,
    High,
    Medium,
    Low,
}

impl Importance {
    pub const ALL: [Importance; 4] = [
        Importance::Critical,
        Importance::High,
        Importance::Medium,
        Importance::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Evaluated top to bottom; the first rule with a keyword hit wins.
const CLASSIFICATION_RULES: &[(&[&str], Category, Importance)] = &[
    (
        &["security", "authentication", "authorization", "access control"],
        Category::Security,
        Importance::Critical,
    ),
    (&["transaction", "investment"], Category::CoreFeatures, Importance::High),
    (
        &["backend", "frontend", "api", "architecture", "data structure", "session management"],
        Category::Technical,
        Importance::High,
    ),
    (&["faq", "support", "error"], Category::Support, Importance::Low),
    (&["overview", "key features"], Category::CoreFeatures, Importance::High),
];

const FALLBACK_CLASSIFICATION: (Category, Importance) = (Category::Technical, Importance::Medium);

/// Classifies a section title by case-insensitive keyword search.
pub fn classify(title: &str) -> (Category, Importance) {
    let lower = title.trim().to_lowercase();
    CLASSIFICATION_RULES
        .iter()
        .find(|(keywords, _, _)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(_, category, importance)| (*category, *importance))
        .unwrap_or(FALLBACK_CLASSIFICATION)
}

// --- Data Structures ---
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub text: String,
    pub section: String,
    pub category: Category,
    pub importance: Importance,
    pub line_number: usize,   // 1-based
    pub section_index: usize, // Position of the owning section in `ParsedMarkdown::sections`
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub category: Category,
    pub importance: Importance,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedMarkdown {
    pub list_items: Vec<ListItem>,
    pub sections: Vec<Section>,
    pub by_category: BTreeMap<Category, Vec<ListItem>>,
    pub by_importance: BTreeMap<Importance, Vec<ListItem>>,
}

impl ParsedMarkdown {
    /// Assembles a result and builds both indexes from `list_items`.
    ///
    /// Every category and importance key is present, even when its bucket is empty.
    pub fn from_parts(list_items: Vec<ListItem>, sections: Vec<Section>) -> Self {
        let mut by_category: BTreeMap<Category, Vec<ListItem>> =
            Category::ALL.iter().map(|c| (*c, Vec::new())).collect();
        let mut by_importance: BTreeMap<Importance, Vec<ListItem>> =
            Importance::ALL.iter().map(|i| (*i, Vec::new())).collect();

        for item in &list_items {
            by_category.entry(item.category).or_default().push(item.clone());
            by_importance.entry(item.importance).or_default().push(item.clone());
        }

        Self { list_items, sections, by_category, by_importance }
    }

    pub fn items_in_category(&self, category: Category) -> &[ListItem] {
        self.by_category.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn items_with_importance(&self, importance: Importance) -> &[ListItem] {
        self.by_importance.get(&importance).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of categories that hold at least one item.
    pub fn populated_category_count(&self) -> usize {
        self.by_category.values().filter(|items| !items.is_empty()).count()
    }
}

// --- Indexer ---
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownIndexer;

impl MarkdownIndexer {
    pub fn new() -> Self {
        Self {}
    }

    /// Splits a document into `## ` sections and indexes the `- ` bullets under each.
    pub fn index(&self, markdown: &str) -> ParsedMarkdown {
        let mut sections: Vec<Section> = Vec::new();
        let mut list_items: Vec<ListItem> = Vec::new();

        for (idx, line) in markdown.split('\n').enumerate() {
            if line.starts_with(SECTION_PREFIX) && !line.contains(TOC_MARKER) {
                let title = line.replacen(SECTION_PREFIX, "", 1).trim().to_string();
                let (category, importance) = classify(&title);
                tracing::trace!("Line {}: section '{}' -> {} / {}", idx + 1, title, category, importance);

                sections.push(Section {
                    title,
                    category,
                    importance,
                    items: Vec::new(),
                });
            }

            let trimmed = line.trim();
            let Some(text) = trimmed.strip_prefix(BULLET_PREFIX) else {
                continue;
            };

            // A heading with an empty title does not open a section for bullets.
            let Some(section_index) = sections.len().checked_sub(1) else {
                continue;
            };
            let section = &mut sections[section_index];
            if section.title.is_empty() {
                continue;
            }

            let item = ListItem {
                text: text.to_string(),
                section: section.title.clone(),
                category: section.category,
                importance: section.importance,
                line_number: idx + 1,
                section_index,
            };
            section.items.push(item.clone());
            list_items.push(item);
        }

        tracing::debug!("Indexed {} section(s) with {} list item(s)", sections.len(), list_items.len());
        ParsedMarkdown::from_parts(list_items, sections)
    }
}

/// Indexes a markdown document with the default indexer.
pub fn parse_markdown(markdown: &str) -> ParsedMarkdown {
    MarkdownIndexer::new().index(markdown)
}
