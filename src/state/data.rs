/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalog layer and the UI layer.

use serde::{Deserialize, Serialize};

/// Represents a single photo in the portfolio catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    /// Unique identifier, stable across the catalog (e.g., "photo1")
    pub id: String,
    /// Display title (the only required text field)
    pub title: String,
    /// Longer description shown in the lightbox caption
    pub description: Option<String>,
    /// Where the photo was taken
    pub location: Option<String>,
    /// Free-form date label (e.g., "October 2023")
    pub date: Option<String>,
    /// Alternative text for the image
    pub alt: Option<String>,
    /// Image asset path, relative to the configured asset root
    pub src: String,
    /// Intrinsic width in pixels (always > 0)
    pub width: u32,
    /// Intrinsic height in pixels (always > 0)
    pub height: u32,
}

impl PhotoRecord {
    /// Width divided by height, used to size tiles
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Caption line shown under the title in the lightbox.
    /// Falls back to the alt text when there is no description.
    pub fn caption(&self) -> Option<&str> {
        self.description.as_deref().or(self.alt.as_deref())
    }

    /// Case-insensitive substring match against title, description and location.
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        let contains = |field: &str| field.to_lowercase().contains(needle);

        contains(&self.title)
            || self.description.as_deref().is_some_and(contains)
            || self.location.as_deref().is_some_and(contains)
    }
}

/// One entry of an external JSON catalog.
///
/// Same shape as [`PhotoRecord`] except the dimensions, which may be left
/// out and are then read from the image file itself.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub alt: Option<String>,
    pub src: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PhotoRecord {
        PhotoRecord {
            id: "p".into(),
            title: "Coastal Dawn".into(),
            description: None,
            location: Some("Pacific Coast".into()),
            date: None,
            alt: Some("Shoreline at dawn".into()),
            src: "p.jpg".into(),
            width: 1600,
            height: 1067,
        }
    }

    #[test]
    fn test_absent_fields_never_match() {
        let photo = record();
        assert!(photo.matches_lowercase("pacific"));
        assert!(photo.matches_lowercase("dawn"));
        // alt text is not searchable
        assert!(!photo.matches_lowercase("shoreline"));
    }

    #[test]
    fn test_caption_falls_back_to_alt() {
        let mut photo = record();
        assert_eq!(photo.caption(), Some("Shoreline at dawn"));

        photo.description = Some("First light".into());
        assert_eq!(photo.caption(), Some("First light"));
    }

    #[test]
    fn test_entry_dimensions_are_optional() {
        let entry: CatalogEntry = serde_json::from_str(
            r#"{ "id": "a", "title": "A", "src": "a.jpg" }"#,
        )
        .unwrap();
        assert_eq!(entry.width, None);
        assert_eq!(entry.height, None);
    }
}
