//! Input validation logic

use super::form::{FormField, FormState};
use crate::storage::Bookmark;
use crate::utils::url_validator::{validate_url, validation_error_message};

/// First problem found with a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field.display_title(), self.message)
    }
}

/// Trim and check a name/URL pair, producing the bookmark to store.
pub fn validate_bookmark(site_name: &str, site_url: &str) -> Result<Bookmark, FieldError> {
    let site_name = site_name.trim();
    let site_url = site_url.trim();

    if site_name.is_empty() {
        return Err(FieldError {
            field: FormField::SiteName,
            message: "Site name is required".to_string(),
        });
    }

    if let Err(e) = validate_url(site_url) {
        return Err(FieldError {
            field: FormField::SiteUrl,
            message: validation_error_message(&e).to_string(),
        });
    }

    Ok(Bookmark::new(site_name, site_url))
}

impl FormState {
    /// Re-check both inputs and record every error, for live feedback.
    pub fn validate_inputs(&mut self) {
        self.clear_errors();

        if self.site_name.trim().is_empty() {
            self.set_error(FormField::SiteName, "Site name is required".to_string());
        }

        if let Err(e) = validate_url(&self.site_url) {
            self.set_error(
                FormField::SiteUrl,
                validation_error_message(&e).to_string(),
            );
        }
    }
}
