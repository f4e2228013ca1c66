// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};
use serde::Serialize;
use crate::extractors::feature_list::FeatureItem;
use crate::extractors::markdown_index::ParsedMarkdown;
use crate::utils::error::StorageError;

/// Summary written next to every extraction result.
#[derive(Debug, Clone, Serialize)]
pub struct RunMetadata {
    pub source: String,
    pub mode: String,
    pub query: Option<String>,
    pub item_count: usize,
    pub section_count: Option<usize>,
}

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self { base_dir: base_path })
    }

    // /base_dir/<stem>/
    fn target_dir(&self, stem: &str) -> Result<PathBuf, StorageError> {
        let target_dir = self.base_dir.join(stem);
        if !target_dir.exists() {
            fs::create_dir_all(&target_dir)?;
        }
        Ok(target_dir)
    }

    fn write_json<T: Serialize + ?Sized>(&self, stem: &str, suffix: &str, value: &T) -> Result<PathBuf, StorageError> {
        let file_path = self.target_dir(stem)?.join(format!("{}_{}.json", stem, suffix));

        let json = serde_json::to_string_pretty(value)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, json)?;

        tracing::info!("Saved {} to {}", suffix, file_path.display());
        Ok(file_path)
    }

    pub fn save_features(&self, stem: &str, features: &[FeatureItem]) -> Result<PathBuf, StorageError> {
        self.write_json(stem, "features", features)
    }

    pub fn save_index(&self, stem: &str, parsed: &ParsedMarkdown) -> Result<PathBuf, StorageError> {
        self.write_json(stem, "index", parsed)
    }

    /// Saves run metadata with an extraction timestamp
    pub fn save_metadata(&self, stem: &str, metadata: &RunMetadata) -> Result<PathBuf, StorageError> {
        let document = serde_json::json!({
            "source": metadata.source,
            "mode": metadata.mode,
            "query": metadata.query,
            "item_count": metadata.item_count,
            "section_count": metadata.section_count,
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });
        self.write_json(stem, "meta", &document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::feature_list::parse_features;
    use crate::extractors::markdown_index::parse_markdown;

    #[test]
    fn test_saves_features_and_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path().join("out")).unwrap();
        let features = parse_features("Features/Functions:\n- Login\n- Logout");

        let path = storage.save_features("guide", &features).unwrap();
        assert_eq!(path, dir.path().join("out/guide/guide_features.json"));
        let saved: Vec<FeatureItem> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved, features);

        let meta = RunMetadata {
            source: "guide.md".to_string(),
            mode: "features".to_string(),
            query: None,
            item_count: 2,
            section_count: None,
        };
        let meta_path = storage.save_metadata("guide", &meta).unwrap();
        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(meta_path).unwrap()).unwrap();
        assert_eq!(value["item_count"], 2);
        assert!(value["extraction_timestamp"].is_string());
    }

    #[test]
    fn test_saved_index_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();
        let parsed = parse_markdown("## Overview\n- a\n## FAQ\n- b");

        let path = storage.save_index("resources", &parsed).unwrap();
        let saved: ParsedMarkdown = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(saved, parsed);
    }
}
