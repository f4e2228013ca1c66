// src/extractors/mod.rs
pub mod feature_list;
pub mod markdown_index;

// Re-export key extraction types for convenience
pub use feature_list::{parse_features, FeatureItem, FeatureListExtractor, FEATURES_ANCHOR};
pub use markdown_index::{
    classify,
    parse_markdown,
    Category,
    Importance,
    ListItem,
    MarkdownIndexer,
    ParsedMarkdown,
    Section,
};
