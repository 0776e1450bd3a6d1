use serde::{Deserialize, Serialize};

/// A single bookmark as persisted under the storage key.
///
/// The wire names are `siteName` / `siteUrl`; changing them breaks every
/// existing stored list, there is no migration path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub site_name: String,
    pub site_url: String,
}

impl Bookmark {
    pub fn new(site_name: impl Into<String>, site_url: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
            site_url: site_url.into(),
        }
    }
}

/// Insertion order is display order; the position is the only handle.
pub type BookmarkList = Vec<Bookmark>;
