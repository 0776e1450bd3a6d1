//! URL 验证模块
//!
//! Bookmarks only accept http(s) URLs with a non-empty host part.

use once_cell::sync::Lazy;
use regex::Regex;

/// `scheme://` followed by a first character that is not whitespace, a dot,
/// `?` or `#`, then anything without whitespace.
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(http|https)://[^\s.?#][^\s]*$").expect("URL pattern is a valid regex")
});

/// URL 验证错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlValidationError {
    EmptyUrl,
    InvalidProtocol(String),
    InvalidFormat(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL cannot be empty"),
            Self::InvalidProtocol(proto) => write!(
                f,
                "Invalid protocol: {}. Only http:// and https:// are allowed",
                proto
            ),
            Self::InvalidFormat(url) => write!(f, "Invalid URL format: {}", url),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// Validate a bookmark URL after trimming surrounding whitespace.
pub fn validate_url(url: &str) -> Result<(), UrlValidationError> {
    let url = url.trim();

    if url.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        let proto = match url.split_once(':') {
            Some((scheme, _)) => format!("{}:", scheme),
            None => url.to_string(),
        };
        return Err(UrlValidationError::InvalidProtocol(proto));
    }

    if !URL_PATTERN.is_match(url) {
        return Err(UrlValidationError::InvalidFormat(url.to_string()));
    }

    Ok(())
}

pub fn is_valid_url(url: &str) -> bool {
    validate_url(url).is_ok()
}

/// 获取 URL 验证错误的用户友好消息
pub fn validation_error_message(error: &UrlValidationError) -> &'static str {
    match error {
        UrlValidationError::EmptyUrl => "URL cannot be empty",
        UrlValidationError::InvalidProtocol(_) => "URL must start with http:// or https://",
        UrlValidationError::InvalidFormat(_) => "Invalid URL format",
    }
}
