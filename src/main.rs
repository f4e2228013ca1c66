// src/main.rs
use clap::{Parser, ValueEnum};
use markdown_indexer::extractors::{FeatureListExtractor, MarkdownIndexer, FEATURES_ANCHOR};
use markdown_indexer::pagination::Page;
use markdown_indexer::search;
use markdown_indexer::source::MarkdownSource;
use markdown_indexer::storage::{RunMetadata, StorageManager};
use markdown_indexer::utils::{self, config, AppError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Extract the list under the features anchor heading
    Features,
    /// Index `## ` sections and their bullets by category and importance
    Index,
}

impl Mode {
    fn as_str(&self) -> &'static str {
        match self {
            Mode::Features => "features",
            Mode::Index => "index",
        }
    }
}

/// Command Line Interface for the markdown feature extractor and indexer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Markdown file (.md) or http(s) URL to read
    #[arg(short, long)]
    source: String,

    /// What to extract from the document
    #[arg(short, long, value_enum, default_value = "features")]
    mode: Mode,

    /// Heading that opens the feature list (features mode)
    #[arg(long, default_value = FEATURES_ANCHOR)]
    anchor: String,

    /// Case-insensitive search applied before paging
    #[arg(short = 'q', long)]
    search: Option<String>,

    /// Page to print (1-based, clamped to the available pages)
    #[arg(short, long, default_value = "1")]
    page: usize,

    /// Items per page (falls back to MARKDOWN_PAGE_SIZE, then 20)
    #[arg(long)]
    page_size: Option<usize>,

    /// Output directory for extracted JSON
    #[arg(short, long, default_value = "./output")]
    output_dir: String,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);
    let page_size = config::resolve_page_size(args.page_size)?;

    // 3. Load the document
    let source = MarkdownSource::parse(&args.source);
    let content = source.load().await?;
    tracing::info!("Loaded {} bytes from {}", content.len(), source);

    // 4. Initialize storage
    let storage = StorageManager::new(&args.output_dir)?;
    let stem = source.name();
    let query = args.search.as_deref().filter(|q| !q.is_empty());

    let metadata = match args.mode {
        Mode::Features => {
            let extractor = FeatureListExtractor::with_anchor(args.anchor.as_str());
            let features = extractor.extract(&content);

            if features.is_empty() {
                tracing::warn!(
                    "No features found: {} has no '{}' section or it is empty",
                    source,
                    extractor.anchor()
                );
                return Ok(());
            }
            tracing::info!("Extracted {} feature(s) from {}", features.len(), source);
            storage.save_features(&stem, &features)?;
            let item_count = features.len();

            let shown = match query {
                Some(q) => search::filter_features(&features, q),
                None => features,
            };
            let page = Page::new(&shown, page_size, args.page);
            print_page_header(&page, "feature");
            for feature in page.items {
                println!("{:>4}. {}", feature.id, feature.text);
            }

            RunMetadata {
                source: source.to_string(),
                mode: args.mode.as_str().to_string(),
                query: query.map(str::to_string),
                item_count,
                section_count: None,
            }
        }
        Mode::Index => {
            let parsed = MarkdownIndexer::new().index(&content);

            if parsed.sections.is_empty() {
                tracing::warn!("No '## ' sections found in {}", source);
                return Ok(());
            }
            tracing::info!(
                "Indexed {} item(s) in {} section(s) across {} categories",
                parsed.list_items.len(),
                parsed.sections.len(),
                parsed.populated_category_count()
            );
            storage.save_index(&stem, &parsed)?;
            let (item_count, section_count) = (parsed.list_items.len(), parsed.sections.len());

            let shown = match query {
                Some(q) => search::filter_index(&parsed, q),
                None => parsed,
            };
            let page = Page::new(&shown.list_items, page_size, args.page);
            print_page_header(&page, "item");
            for item in page.items {
                println!(
                    "{:>5}  [{} / {}] {}: {}",
                    item.line_number, item.category, item.importance, item.section, item.text
                );
            }

            RunMetadata {
                source: source.to_string(),
                mode: args.mode.as_str().to_string(),
                query: query.map(str::to_string),
                item_count,
                section_count: Some(section_count),
            }
        }
    };

    storage.save_metadata(&stem, &metadata)?;
    tracing::info!("Processing finished for {}", source);

    Ok(())
}

fn print_page_header<T>(page: &Page<'_, T>, noun: &str) {
    let plural = if page.total_items == 1 { "" } else { "s" };
    if page.total_items == 0 {
        println!("No matching {}s", noun);
        return;
    }
    println!(
        "Showing {} - {} of {} {}{} (page {} of {})",
        page.first, page.last, page.total_items, noun, plural, page.number, page.total_pages
    );
}
