/// Gallery page view state: the active search query and the lightbox.
///
/// Created when the gallery page is entered and dropped when it is left.
/// The catalog itself is shared, read-only state passed in by reference.

use tracing::info;

use super::catalog::{self, Catalog};
use super::data::PhotoRecord;
use super::lightbox::Lightbox;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryState {
    /// None when the search box is empty
    query: Option<String>,
    lightbox: Lightbox,
}

impl GalleryState {
    pub fn new() -> Self {
        Self {
            query: None,
            lightbox: Lightbox::new(),
        }
    }

    /// Enter the gallery with a search already typed in (home page collections)
    pub fn with_query(query: impl Into<String>) -> Self {
        let mut state = Self::new();
        let query = query.into();
        state.query = (!query.is_empty()).then_some(query);
        state
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn lightbox(&self) -> Lightbox {
        self.lightbox
    }

    /// True when the search text narrows the grid; blank text does not
    pub fn filter_active(&self) -> bool {
        catalog::is_active(self.query())
    }

    /// The photos currently shown in the grid, in catalog order
    pub fn filtered<'a>(&self, catalog: &'a Catalog) -> Vec<&'a PhotoRecord> {
        catalog::filter(catalog.photos(), self.query())
    }

    /// Replace the search text. The lightbox is re-checked against the
    /// new filtered length so it never points past the end.
    pub fn set_query(&mut self, value: String, catalog: &Catalog) {
        self.query = (!value.is_empty()).then_some(value);
        let len = self.filtered(catalog).len();
        self.lightbox.reconcile(len);
    }

    pub fn clear_query(&mut self, catalog: &Catalog) {
        self.set_query(String::new(), catalog);
    }

    /// A tile was activated; `index` is its position in the filtered grid
    pub fn select(&mut self, index: usize, catalog: &Catalog) {
        let len = self.filtered(catalog).len();
        if self.lightbox.open(index, len) {
            info!(index, "opened lightbox");
        }
    }

    pub fn next(&mut self, catalog: &Catalog) {
        let len = self.filtered(catalog).len();
        self.lightbox.next(len);
    }

    pub fn previous(&mut self) {
        self.lightbox.previous();
    }

    pub fn close(&mut self) {
        if self.lightbox.is_open() {
            info!("closed lightbox");
        }
        self.lightbox.close();
    }

    /// The photo shown in the lightbox, if it is open
    pub fn current<'a>(&self, catalog: &'a Catalog) -> Option<&'a PhotoRecord> {
        let index = self.lightbox.index()?;
        self.filtered(catalog).get(index).copied()
    }

    pub fn has_next(&self, catalog: &Catalog) -> bool {
        self.lightbox.has_next(self.filtered(catalog).len())
    }

    pub fn has_previous(&self) -> bool {
        self.lightbox.has_previous()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_opens_on_filtered_index() {
        let catalog = Catalog::builtin();
        let mut gallery = GalleryState::new();

        gallery.set_query("urban".into(), &catalog);
        gallery.select(1, &catalog);

        assert_eq!(gallery.lightbox(), Lightbox::Open(1));
        assert_eq!(gallery.current(&catalog).map(|p| p.title.as_str()), Some("Urban Portrait"));
        assert!(!gallery.has_next(&catalog));
        assert!(gallery.has_previous());
    }

    #[test]
    fn test_select_past_filtered_end_is_ignored() {
        let catalog = Catalog::builtin();
        let mut gallery = GalleryState::with_query("mountain");

        gallery.select(3, &catalog);
        assert_eq!(gallery.lightbox(), Lightbox::Closed);
    }

    #[test]
    fn test_narrowing_query_closes_stale_lightbox() {
        let catalog = Catalog::builtin();
        let mut gallery = GalleryState::new();

        gallery.select(5, &catalog);
        assert!(gallery.lightbox().is_open());

        gallery.set_query("mountain".into(), &catalog);
        assert_eq!(gallery.lightbox(), Lightbox::Closed);
        assert!(gallery.current(&catalog).is_none());
    }

    #[test]
    fn test_widening_query_keeps_lightbox() {
        let catalog = Catalog::builtin();
        let mut gallery = GalleryState::with_query("urban");

        gallery.select(1, &catalog);
        gallery.clear_query(&catalog);

        assert_eq!(gallery.lightbox(), Lightbox::Open(1));
        assert_eq!(gallery.query(), None);
    }

    #[test]
    fn test_walk_through_all_photos() {
        let catalog = Catalog::builtin();
        let mut gallery = GalleryState::new();

        gallery.select(0, &catalog);
        for _ in 0..10 {
            gallery.next(&catalog);
        }
        assert_eq!(gallery.current(&catalog).map(|p| p.id.as_str()), Some("photo6"));

        gallery.previous();
        assert_eq!(gallery.current(&catalog).map(|p| p.id.as_str()), Some("photo5"));

        gallery.close();
        assert!(gallery.current(&catalog).is_none());
    }

    #[test]
    fn test_whitespace_query_is_kept_but_inactive() {
        let catalog = Catalog::builtin();
        let mut gallery = GalleryState::new();

        gallery.set_query("  ".into(), &catalog);
        assert_eq!(gallery.query(), Some("  "));
        assert!(!gallery.filter_active());
        assert_eq!(gallery.filtered(&catalog).len(), 6);
    }
}
