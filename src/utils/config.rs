// src/utils/config.rs
use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::utils::error::AppError;

/// Environment variable consulted when `--page-size` is not given.
pub const PAGE_SIZE_ENV: &str = "MARKDOWN_PAGE_SIZE";

/// Resolves the page size: command-line argument, then `MARKDOWN_PAGE_SIZE`, then the default.
pub fn resolve_page_size(arg: Option<usize>) -> Result<usize, AppError> {
    resolve_page_size_from(arg, std::env::var(PAGE_SIZE_ENV).ok())
}

pub fn resolve_page_size_from(arg: Option<usize>, env_value: Option<String>) -> Result<usize, AppError> {
    let size = match (arg, env_value) {
        (Some(size), _) => {
            tracing::debug!("Using page size {} from command-line argument", size);
            size
        }
        (None, Some(raw)) => {
            let size = raw.trim().parse::<usize>().map_err(|e| {
                AppError::Config(format!("Invalid {} value '{}': {}", PAGE_SIZE_ENV, raw, e))
            })?;
            tracing::debug!("Using page size {} from {}", size, PAGE_SIZE_ENV);
            size
        }
        (None, None) => {
            tracing::debug!("Using page size {} (default)", DEFAULT_PAGE_SIZE);
            DEFAULT_PAGE_SIZE
        }
    };

    if size == 0 {
        return Err(AppError::Config("Page size must be at least 1".to_string()));
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_wins_over_env() {
        let size = resolve_page_size_from(Some(50), Some("10".to_string())).unwrap();
        assert_eq!(size, 50);
    }

    #[test]
    fn test_env_and_default() {
        assert_eq!(resolve_page_size_from(None, Some(" 100 ".to_string())).unwrap(), 100);
        assert_eq!(resolve_page_size_from(None, None).unwrap(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        assert!(matches!(resolve_page_size_from(Some(0), None), Err(AppError::Config(_))));
        assert!(matches!(resolve_page_size_from(None, Some("ten".to_string())), Err(AppError::Config(_))));
        assert!(matches!(resolve_page_size_from(None, Some("0".to_string())), Err(AppError::Config(_))));
    }
}
