use bookmarker::errors::{BookmarkError, Result};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = BookmarkError::validation("Site name is required");

        assert!(matches!(error, BookmarkError::Validation(_)));
        assert!(error.to_string().contains("Validation Error"));
        assert!(error.to_string().contains("Site name is required"));
    }

    #[test]
    fn test_index_out_of_range_error() {
        let error = BookmarkError::index_out_of_range(5, 2);

        assert!(matches!(error, BookmarkError::IndexOutOfRange(_)));
        assert!(error.message().contains('5'));
        assert!(error.message().contains('2'));
    }

    #[test]
    fn test_storage_parse_error() {
        let error = BookmarkError::storage_parse("expected array");
        assert_eq!(error.format_simple(), "Storage Parse Error: expected array");
    }
}

#[cfg(test)]
mod error_code_tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            BookmarkError::validation(""),
            BookmarkError::index_out_of_range(0, 0),
            BookmarkError::storage_parse(""),
            BookmarkError::file_operation(""),
            BookmarkError::serialization(""),
            BookmarkError::config(""),
            BookmarkError::visit(""),
        ];
        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_colored_output_contains_code() {
        let error = BookmarkError::file_operation("disk full");
        let colored = error.format_colored();
        assert!(colored.contains("E004"));
        assert!(colored.contains("disk full"));
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: BookmarkError = io_error.into();
        assert!(matches!(error, BookmarkError::FileOperation(_)));
    }

    #[test]
    fn test_from_serde_error() {
        let serde_error = serde_json::from_str::<Vec<u8>>("nope").unwrap_err();
        let error: BookmarkError = serde_error.into();
        assert!(matches!(error, BookmarkError::Serialization(_)));
    }

    #[test]
    fn test_question_mark_propagation() {
        fn read() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here.json")?)
        }
        assert!(matches!(read(), Err(BookmarkError::FileOperation(_))));
    }

    #[test]
    fn test_is_std_error() {
        let error = BookmarkError::config("bad level");
        let dyn_error: &dyn Error = &error;
        assert!(dyn_error.source().is_none());
    }
}
