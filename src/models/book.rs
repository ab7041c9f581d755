use serde::{Deserialize, Serialize};

/// Uniform per-book record extracted from a Google Books volume
///
/// Every field is defaulted when the source omits it, so a record always has
/// the same shape regardless of how sparse the API response was.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookRecord {
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub description: String,
    pub categories: Vec<String>,
    pub preview_link: Option<String>,
    pub page_count: Option<u32>,
}

impl BookRecord {
    /// Title shown to users, with a placeholder for records the API returned
    /// without one
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("(untitled)")
    }
}

// ============================================================================
// Google Books API Types
// ============================================================================

/// Raw response from GET /volumes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolumesResponse {
    /// Absent entirely when the query matches nothing
    #[serde(default)]
    pub items: Vec<VolumeItem>,
}

/// A single entry of the `items` array
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeItem {
    #[serde(default)]
    pub volume_info: VolumeInfo,
}

/// The `volumeInfo` object carrying the book metadata; any field may be absent
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub preview_link: Option<String>,
    #[serde(default)]
    pub page_count: Option<u32>,
}

impl From<VolumeInfo> for BookRecord {
    fn from(info: VolumeInfo) -> Self {
        BookRecord {
            title: info.title,
            authors: info.authors,
            description: info.description,
            categories: info.categories,
            preview_link: info.preview_link,
            page_count: info.page_count,
        }
    }
}
