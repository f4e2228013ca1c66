// src/search.rs

use crate::extractors::feature_list::FeatureItem;
use crate::extractors::markdown_index::{ListItem, ParsedMarkdown, Section};

/// Keeps the features whose text contains `query`, ignoring case.
pub fn filter_features(features: &[FeatureItem], query: &str) -> Vec<FeatureItem> {
    let query = query.to_lowercase();
    features
        .iter()
        .filter(|f| f.text.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

fn item_matches(item: &ListItem, query: &str) -> bool {
    item.text.to_lowercase().contains(query)
        || item.section.to_lowercase().contains(query)
        || item.category.as_str().to_lowercase().contains(query)
        || item.importance.as_str().to_lowercase().contains(query)
}

/// Narrows an index to the items matching `query` in their text, section,
/// category or importance.
///
/// A section survives when its title matches or any of its items do. Indexes
/// are rebuilt over the surviving items and `section_index` points into the
/// filtered section list. A blank query returns the index unchanged.
pub fn filter_index(parsed: &ParsedMarkdown, query: &str) -> ParsedMarkdown {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return parsed.clone();
    }

    let mut remap: Vec<Option<usize>> = vec![None; parsed.sections.len()];
    let mut sections: Vec<Section> = Vec::new();

    for (old_index, section) in parsed.sections.iter().enumerate() {
        let items: Vec<ListItem> = section
            .items
            .iter()
            .filter(|item| item_matches(item, &query))
            .cloned()
            .collect();

        if items.is_empty() && !section.title.to_lowercase().contains(&query) {
            continue;
        }

        let new_index = sections.len();
        remap[old_index] = Some(new_index);
        sections.push(Section {
            items: items
                .into_iter()
                .map(|item| ListItem { section_index: new_index, ..item })
                .collect(),
            ..section.clone()
        });
    }

    let list_items: Vec<ListItem> = parsed
        .list_items
        .iter()
        .filter(|item| item_matches(item, &query))
        .filter_map(|item| {
            // A matching item always keeps its section alive
            remap
                .get(item.section_index)
                .copied()
                .flatten()
                .map(|section_index| ListItem { section_index, ..item.clone() })
        })
        .collect();

    tracing::debug!(
        "Search '{}' kept {} of {} item(s) in {} section(s)",
        query,
        list_items.len(),
        parsed.list_items.len(),
        sections.len()
    );

    ParsedMarkdown::from_parts(list_items, sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::feature_list::parse_features;
    use crate::extractors::markdown_index::{parse_markdown, Category, Importance};

    const DOC: &str = "## Overview\n- Track investments\n- View dashboard\n\
                       ## Authentication\n- Login with identity provider\n\
                       ## Glossary\n- Ledger\n\
                       ## FAQ\n- How do I reset?";

    #[test]
    fn test_filter_features_case_insensitive() {
        let features = parse_features("Features/Functions:\n- Login\n- Logout\n- Export CSV");
        let hits = filter_features(&features, "LOG");

        assert_eq!(hits.iter().map(|f| f.id).collect::<Vec<_>>(), vec![1, 2], "Ids are kept from the parse");
        assert_eq!(filter_features(&features, "").len(), 3);
        assert!(filter_features(&features, " login").is_empty(), "Feature queries are not trimmed");
    }

    #[test]
    fn test_filter_index_blank_query_is_identity() {
        let parsed = parse_markdown(DOC);
        assert_eq!(filter_index(&parsed, "   "), parsed);
    }

    #[test]
    fn test_filter_index_by_text() {
        let parsed = parse_markdown(DOC);
        let filtered = filter_index(&parsed, "  Ledger ");

        assert_eq!(filtered.list_items.len(), 1);
        assert_eq!(filtered.sections.len(), 1);
        assert_eq!(filtered.sections[0].title, "Glossary");
        assert_eq!(filtered.list_items[0].section_index, 0, "Index must point into the filtered sections");
        assert_eq!(filtered.sections[0].items[0].section_index, 0);
        assert_eq!(filtered.items_in_category(Category::Technical).len(), 1);
        assert_eq!(filtered.by_category.len(), 5);
    }

    #[test]
    fn test_filter_index_by_importance_name() {
        let parsed = parse_markdown(DOC);
        let filtered = filter_index(&parsed, "critical");

        assert_eq!(filtered.list_items.len(), 1);
        assert_eq!(filtered.list_items[0].text, "Login with identity provider");
        assert_eq!(filtered.items_with_importance(Importance::Critical).len(), 1);
    }

    #[test]
    fn test_filter_index_matching_title_keeps_empty_section() {
        let parsed = parse_markdown("## Overview\n## Deployment\n- Docker");
        let filtered = filter_index(&parsed, "overview");

        assert_eq!(filtered.sections.len(), 1);
        assert!(filtered.sections[0].items.is_empty());
        assert!(filtered.list_items.is_empty());
    }

    #[test]
    fn test_filter_index_no_match() {
        let filtered = filter_index(&parse_markdown(DOC), "nonexistent");

        assert!(filtered.sections.is_empty());
        assert!(filtered.list_items.is_empty());
        assert_eq!(filtered.by_importance.len(), 4);
    }
}
