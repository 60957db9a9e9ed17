use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use super::data::{CatalogEntry, PhotoRecord};

/// Errors raised while building or loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate photo id `{0}`")]
    DuplicateId(String),

    #[error("photo `{id}` has invalid dimensions {width}x{height}")]
    InvalidDimensions { id: String, width: u32, height: u32 },

    #[error("photo `{0}` has no title")]
    MissingTitle(String),

    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not read dimensions of {path}: {source}")]
    Probe {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// The ordered, read-only set of photos available for display.
///
/// Order is the canonical display order of the unfiltered gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    photos: Vec<PhotoRecord>,
}

impl Catalog {
    /// Build a catalog, checking that ids are unique, every photo has a
    /// title and both dimensions are positive.
    pub fn new(photos: Vec<PhotoRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(photos.len());

        for photo in &photos {
            if !seen.insert(photo.id.as_str()) {
                return Err(CatalogError::DuplicateId(photo.id.clone()));
            }
            if photo.title.trim().is_empty() {
                return Err(CatalogError::MissingTitle(photo.id.clone()));
            }
            if photo.width == 0 || photo.height == 0 {
                return Err(CatalogError::InvalidDimensions {
                    id: photo.id.clone(),
                    width: photo.width,
                    height: photo.height,
                });
            }
        }

        Ok(Self { photos })
    }

    /// The six photos shipped with the application
    pub fn builtin() -> Self {
        let photo = |id: &str,
                     title: &str,
                     description: &str,
                     date: &str,
                     location: &str,
                     alt: &str,
                     width: u32,
                     height: u32| PhotoRecord {
            id: id.to_string(),
            title: title.to_string(),
            description: Some(description.to_string()),
            location: Some(location.to_string()),
            date: Some(date.to_string()),
            alt: Some(alt.to_string()),
            src: format!("gallery/{id}.jpg"),
            width,
            height,
        };

        Self {
            photos: vec![
                photo(
                    "photo1",
                    "Mountain Reflections",
                    "The still waters of the mountain lake perfectly mirror the majesty of the peaks.",
                    "October 2023",
                    "Canadian Rockies",
                    "Mountain reflections in a lake with towering peaks mirrored in still waters",
                    1600,
                    1200,
                ),
                photo(
                    "photo2",
                    "Urban Geometry",
                    "Abstract patterns in modern architecture create compelling visual rhythms.",
                    "November 2023",
                    "Downtown District",
                    "Abstract geometric patterns formed by modern building architecture with strong lines and shadows",
                    1600,
                    1200,
                ),
                photo(
                    "photo3",
                    "Portrait in Natural Light",
                    "Soft natural light brings out the gentle expression in this portrait.",
                    "December 2023",
                    "Sunset Park",
                    "Portrait of a person with soft natural lighting highlighting gentle facial features",
                    1200,
                    1600,
                ),
                photo(
                    "photo4",
                    "Abstract Formations",
                    "Natural patterns create striking abstract compositions.",
                    "January 2024",
                    "Coastal Cliffs",
                    "Abstract natural rock formations showing intricate patterns and textures",
                    1600,
                    1200,
                ),
                photo(
                    "photo5",
                    "Coastal Dawn",
                    "First light illuminates the coastal landscape with a golden glow.",
                    "February 2024",
                    "Pacific Coast",
                    "Coastal landscape at dawn with golden light illuminating the shoreline and ocean waves",
                    1600,
                    1067,
                ),
                photo(
                    "photo6",
                    "Urban Portrait",
                    "City lights create a dramatic backdrop for this atmospheric portrait.",
                    "March 2024",
                    "City Center",
                    "Portrait against a city skyline with bokeh lights creating a dramatic urban backdrop",
                    1200,
                    1600,
                ),
            ],
        }
    }

    /// Load a catalog from a JSON array of entries.
    ///
    /// Entries without `width`/`height` get them from the image file,
    /// resolved against `asset_root`.
    pub fn load(path: &Path, asset_root: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let entries: Vec<CatalogEntry> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        let photos = entries
            .into_iter()
            .map(|entry| resolve_entry(entry, asset_root))
            .collect::<Result<Vec<_>, _>>()?;

        let catalog = Self::new(photos)?;
        info!(path = %path.display(), photos = catalog.len(), "loaded external catalog");
        Ok(catalog)
    }

    pub fn photos(&self) -> &[PhotoRecord] {
        &self.photos
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

/// Fill in missing dimensions by reading the image header
fn resolve_entry(entry: CatalogEntry, asset_root: &Path) -> Result<PhotoRecord, CatalogError> {
    let (width, height) = match (entry.width, entry.height) {
        (Some(width), Some(height)) => (width, height),
        _ => {
            let path = asset_root.join(&entry.src);
            let dimensions = image::image_dimensions(&path)
                .map_err(|source| CatalogError::Probe { path: path.clone(), source })?;
            debug!(src = %entry.src, ?dimensions, "probed image dimensions");
            dimensions
        }
    };

    Ok(PhotoRecord {
        id: entry.id,
        title: entry.title,
        description: entry.description,
        location: entry.location,
        date: entry.date,
        alt: entry.alt,
        src: entry.src,
        width,
        height,
    })
}

/// Whether `query` turns filtering on. Blank queries do not.
pub fn is_active(query: Option<&str>) -> bool {
    query.is_some_and(|q| !q.trim().is_empty())
}

/// Narrow `photos` down to those whose title, description or location
/// contains `query`, ignoring case. Catalog order is preserved.
///
/// A missing or blank query returns every photo.
pub fn filter<'a>(photos: &'a [PhotoRecord], query: Option<&str>) -> Vec<&'a PhotoRecord> {
    match query {
        Some(q) if is_active(Some(q)) => {
            let needle = q.to_lowercase();
            photos
                .iter()
                .filter(|photo| photo.matches_lowercase(&needle))
                .collect()
        }
        _ => photos.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Write;

    fn titles(photos: &[&PhotoRecord]) -> Vec<String> {
        photos.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = Catalog::builtin();
        assert_eq!(builtin.len(), 6);
        assert!(Catalog::new(builtin.photos().to_vec()).is_ok());
    }

    #[test]
    fn test_mountain_query_finds_one_photo() {
        let catalog = Catalog::builtin();
        let result = filter(catalog.photos(), Some("mountain"));
        assert_eq!(titles(&result), vec!["Mountain Reflections"]);
    }

    #[test]
    fn test_query_is_case_insensitive_and_spans_fields() {
        let catalog = Catalog::builtin();

        // "URBAN" hits two titles
        let urban = filter(catalog.photos(), Some("URBAN"));
        assert_eq!(titles(&urban), vec!["Urban Geometry", "Urban Portrait"]);

        // "coast" hits a title and a location, in catalog order
        let coast = filter(catalog.photos(), Some("coast"));
        assert_eq!(titles(&coast), vec!["Abstract Formations", "Coastal Dawn"]);
    }

    #[test]
    fn test_blank_query_is_identity() {
        let catalog = Catalog::builtin();
        let all: Vec<&PhotoRecord> = catalog.photos().iter().collect();

        assert_eq!(filter(catalog.photos(), None), all);
        assert_eq!(filter(catalog.photos(), Some("")), all);
        assert_eq!(filter(catalog.photos(), Some("   ")), all);
    }

    #[test]
    fn test_empty_catalog_yields_empty_result() {
        assert!(filter(&[], Some("anything")).is_empty());
        assert!(filter(&[], None).is_empty());
    }

    #[test]
    fn test_no_match() {
        let catalog = Catalog::builtin();
        assert!(filter(catalog.photos(), Some("volcano")).is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut photos = Catalog::builtin().photos().to_vec();
        photos[1].id = "photo1".into();

        match Catalog::new(photos) {
            Err(CatalogError::DuplicateId(id)) => assert_eq!(id, "photo1"),
            other => panic!("expected DuplicateId, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let mut photos = Catalog::builtin().photos().to_vec();
        photos[2].height = 0;

        assert!(matches!(
            Catalog::new(photos),
            Err(CatalogError::InvalidDimensions { height: 0, .. })
        ));
    }

    #[test]
    fn test_missing_title_rejected() {
        let mut photos = Catalog::builtin().photos().to_vec();
        photos[0].title = "  ".into();

        assert!(matches!(Catalog::new(photos), Err(CatalogError::MissingTitle(_))));
    }

    #[test]
    fn test_load_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{ "id": "a", "title": "Harbor", "location": "Lisbon", "src": "a.jpg", "width": 800, "height": 600 }},
                {{ "id": "b", "title": "Dunes", "src": "b.jpg", "width": 600, "height": 800 }}
            ]"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path(), Path::new(".")).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.photos()[0].location.as_deref(), Some("Lisbon"));
        assert_eq!(catalog.photos()[1].height, 800);
    }

    #[test]
    fn test_load_reads_missing_dimensions() {
        let assets = tempfile::tempdir().unwrap();
        image::RgbImage::new(40, 30)
            .save(assets.path().join("sized.png"))
            .unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{ "id": "p", "title": "Sized", "src": "sized.png" }}]"#).unwrap();

        let catalog = Catalog::load(file.path(), assets.path()).unwrap();
        assert_eq!((catalog.photos()[0].width, catalog.photos()[0].height), (40, 30));
    }

    #[test]
    fn test_load_reports_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not a list").unwrap();

        assert!(matches!(
            Catalog::load(file.path(), Path::new(".")),
            Err(CatalogError::Json { .. })
        ));
    }

    fn arb_photo() -> impl Strategy<Value = PhotoRecord> {
        (
            "[a-zA-Z ]{1,12}",
            proptest::option::of("[a-zA-Z ]{0,16}"),
            proptest::option::of("[a-zA-Z ]{0,10}"),
        )
            .prop_map(|(title, description, location)| PhotoRecord {
                id: String::new(),
                title,
                description,
                location,
                date: None,
                alt: None,
                src: String::new(),
                width: 1,
                height: 1,
            })
    }

    fn arb_catalog() -> impl Strategy<Value = Vec<PhotoRecord>> {
        proptest::collection::vec(arb_photo(), 0..12).prop_map(|mut photos| {
            for (i, photo) in photos.iter_mut().enumerate() {
                photo.id = format!("p{i}");
            }
            photos
        })
    }

    proptest! {
        #[test]
        fn prop_result_is_ordered_subsequence(photos in arb_catalog(), query in "[a-zA-Z]{0,3}") {
            let result = filter(&photos, Some(query.as_str()));

            // Walk the catalog once; every result element must appear in order.
            let mut rest = photos.iter();
            for hit in &result {
                prop_assert!(rest.any(|p| p.id == hit.id));
            }
        }

        #[test]
        fn prop_every_hit_contains_query(photos in arb_catalog(), query in "[a-zA-Z]{1,3}") {
            let needle = query.to_lowercase();
            for hit in filter(&photos, Some(query.as_str())) {
                let found = hit.title.to_lowercase().contains(&needle)
                    || hit.description.as_deref().is_some_and(|d| d.to_lowercase().contains(&needle))
                    || hit.location.as_deref().is_some_and(|l| l.to_lowercase().contains(&needle));
                prop_assert!(found);
            }
        }

        #[test]
        fn prop_filter_is_idempotent(photos in arb_catalog(), query in "[a-zA-Z]{0,3}") {
            let once: Vec<PhotoRecord> = filter(&photos, Some(query.as_str())).into_iter().cloned().collect();
            let twice: Vec<PhotoRecord> = filter(&once, Some(query.as_str())).into_iter().cloned().collect();
            prop_assert_eq!(once, twice);
        }
    }
}
