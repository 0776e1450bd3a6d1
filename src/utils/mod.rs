pub mod url_validator;

pub use url_validator::{is_valid_url, validate_url};
