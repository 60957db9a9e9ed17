use iced::widget::{column, scrollable, stack};
use iced::{keyboard, Element, Length, Size, Subscription, Task, Theme};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod content;
mod state;
mod ui;

use config::Settings;
use content::legal::{self, LegalKind};
use state::catalog::Catalog;
use state::contact::{ContactForm, Field, Ticket};
use state::gallery::GalleryState;

/// Pages reachable from the navigation bar and footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Gallery,
    Contact,
    Legal(LegalKind),
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Switch to another page
    Navigate(Page),
    /// Open the gallery with a search already filled in
    BrowseCollection(&'static str),
    /// Search box edited
    QueryChanged(String),
    ClearQuery,
    /// A tile was pressed; index into the filtered sequence
    TileSelected(usize),
    NextPhoto,
    PreviousPhoto,
    CloseLightbox,
    FieldEdited(Field, String),
    /// Enter pressed in a field: validate it
    FieldCommitted(Field),
    SubmitForm,
    /// The simulated send finished
    SubmissionSettled(Ticket),
    /// The success panel has been shown long enough
    SuccessElapsed(Ticket),
}

/// Main application state
struct Portfolio {
    settings: Settings,
    /// Read-only for the lifetime of the app
    catalog: Catalog,
    page: Page,
    /// Reset whenever the gallery page is entered or left
    gallery: GalleryState,
    /// Reset when the contact page is left, which also voids pending timers
    contact: ContactForm,
    /// "Last updated" line for the legal pages
    last_updated: String,
}

impl Portfolio {
    /// Create a new instance of the application
    fn new(settings: Settings) -> (Self, Task<Message>) {
        let catalog = load_catalog(&settings);
        info!(photos = catalog.len(), "📷 Portfolio initialized");

        (Self::with_catalog(settings, catalog), Task::none())
    }

    fn with_catalog(settings: Settings, catalog: Catalog) -> Self {
        Self {
            settings,
            catalog,
            page: Page::default(),
            gallery: GalleryState::new(),
            contact: ContactForm::new(),
            last_updated: legal::last_updated_today(),
        }
    }

    fn title(&self) -> String {
        let page = match self.page {
            Page::Home => return "Photography Portfolio".to_string(),
            Page::About => "About",
            Page::Gallery => "Gallery",
            Page::Contact => "Contact",
            Page::Legal(kind) => kind.document().title,
        };
        format!("{page} · Photography Portfolio")
    }

    /// Leave the current page, tearing down its view state
    fn navigate(&mut self, page: Page) {
        if self.page == Page::Contact && page != Page::Contact {
            self.contact.reset();
        }
        if page == Page::Gallery || self.page == Page::Gallery {
            self.gallery = GalleryState::new();
        }

        debug!(from = ?self.page, to = ?page, "navigate");
        self.page = page;
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(page) => {
                self.navigate(page);
                Task::none()
            }
            Message::BrowseCollection(query) => {
                self.navigate(Page::Gallery);
                self.gallery = GalleryState::with_query(query);
                Task::none()
            }
            Message::QueryChanged(query) => {
                self.gallery.set_query(query, &self.catalog);
                Task::none()
            }
            Message::ClearQuery => {
                self.gallery.clear_query(&self.catalog);
                Task::none()
            }
            Message::TileSelected(index) => {
                self.gallery.select(index, &self.catalog);
                Task::none()
            }
            Message::NextPhoto => {
                self.gallery.next(&self.catalog);
                Task::none()
            }
            Message::PreviousPhoto => {
                self.gallery.previous();
                Task::none()
            }
            Message::CloseLightbox => {
                self.gallery.close();
                Task::none()
            }
            Message::FieldEdited(field, value) => {
                self.contact.edit(field, value);
                Task::none()
            }
            Message::FieldCommitted(field) => {
                self.contact.blur(field);
                Task::none()
            }
            Message::SubmitForm => match self.contact.submit() {
                Some(ticket) => after(self.settings.submit_delay(), ticket, Message::SubmissionSettled),
                None => Task::none(),
            },
            Message::SubmissionSettled(ticket) => match self.contact.submission_settled(ticket) {
                Some(ticket) => after(self.settings.success_display(), ticket, Message::SuccessElapsed),
                None => Task::none(),
            },
            Message::SuccessElapsed(ticket) => {
                self.contact.success_elapsed(ticket);
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let asset_root = self.settings.asset_root.as_path();

        let page = match self.page {
            Page::Home => ui::pages::home(asset_root),
            Page::About => ui::pages::about(),
            Page::Gallery => ui::gallery::view(&self.gallery, &self.catalog, asset_root),
            Page::Contact => ui::contact::view(&self.contact),
            Page::Legal(kind) => ui::pages::legal(kind.document(), &self.last_updated),
        };

        let body = scrollable(column![ui::header(self.page), page, ui::footer(self.page)])
            .width(Length::Fill)
            .height(Length::Fill);

        match self.lightbox_photo() {
            Some(photo) => stack![
                body,
                ui::lightbox::view(
                    photo,
                    self.gallery.has_previous(),
                    self.gallery.has_next(&self.catalog),
                    asset_root,
                ),
            ]
            .into(),
            None => body.into(),
        }
    }

    /// The photo shown full-size, only while on the gallery page
    fn lightbox_photo(&self) -> Option<&state::data::PhotoRecord> {
        if !self.scroll_locked() {
            return None;
        }
        self.gallery.current(&self.catalog)
    }

    /// The page underneath is frozen while a photo is shown full-size
    fn scroll_locked(&self) -> bool {
        self.page == Page::Gallery && self.gallery.lightbox().scroll_locked()
    }

    /// Keyboard listener, alive only while the lightbox is open
    fn subscription(&self) -> Subscription<Message> {
        if self.scroll_locked() {
            keyboard::on_key_press(ui::lightbox::key_action)
        } else {
            Subscription::none()
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Deliver `message(ticket)` once `delay` has passed
fn after(delay: std::time::Duration, ticket: Ticket, message: fn(Ticket) -> Message) -> Task<Message> {
    Task::perform(
        async move {
            tokio::time::sleep(delay).await;
            ticket
        },
        message,
    )
}

/// The external catalog when one is configured and loads cleanly,
/// the built-in photos otherwise
fn load_catalog(settings: &Settings) -> Catalog {
    let Some(path) = &settings.catalog_path else {
        return Catalog::builtin();
    };

    match Catalog::load(path, &settings.asset_root) {
        Ok(catalog) if catalog.is_empty() => {
            warn!(path = %path.display(), "⚠️  External catalog has no photos, using built-in catalog");
            Catalog::builtin()
        }
        Ok(catalog) => catalog,
        Err(err) => {
            warn!(error = %err, "⚠️  Falling back to built-in catalog");
            Catalog::builtin()
        }
    }
}

fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    let settings = Settings::load();
    let (settings, settings_error) = match settings {
        Ok(settings) => (settings, None),
        Err(err) => (Settings::default(), Some(err)),
    };

    init_tracing(&settings.log_filter);
    if let Some(err) = settings_error {
        warn!(error = %err, "⚠️  Using default settings");
    }

    let window_size = Size::new(settings.window_width, settings.window_height);

    iced::application(Portfolio::title, Portfolio::update, Portfolio::view)
        .subscription(Portfolio::subscription)
        .theme(Portfolio::theme)
        .window_size(window_size)
        .centered()
        .run_with(move || Portfolio::new(settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use state::contact::{FieldError, Submission};
    use state::lightbox::Lightbox;
    use std::io::Write;

    fn app() -> Portfolio {
        Portfolio::with_catalog(Settings::default(), Catalog::builtin())
    }

    #[test]
    fn test_gallery_flow() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Page::Gallery));
        let _ = app.update(Message::QueryChanged("mountain".into()));
        let _ = app.update(Message::TileSelected(0));

        assert_eq!(app.lightbox_photo().map(|p| p.title.as_str()), Some("Mountain Reflections"));

        let _ = app.update(Message::NextPhoto);
        assert_eq!(app.gallery.lightbox(), Lightbox::Open(0));

        let _ = app.update(Message::CloseLightbox);
        assert!(app.lightbox_photo().is_none());
    }

    #[test]
    fn test_leaving_gallery_discards_view_state() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Page::Gallery));
        let _ = app.update(Message::QueryChanged("urban".into()));
        let _ = app.update(Message::TileSelected(1));

        let _ = app.update(Message::Navigate(Page::About));
        assert_eq!(app.gallery, GalleryState::new());
        assert!(app.lightbox_photo().is_none());
    }

    #[test]
    fn test_collection_prefills_query() {
        let mut app = app();
        let _ = app.update(Message::BrowseCollection("portrait"));

        assert_eq!(app.page, Page::Gallery);
        assert_eq!(app.gallery.query(), Some("portrait"));
        assert_eq!(app.gallery.filtered(&app.catalog).len(), 2);
    }

    #[test]
    fn test_empty_contact_submit_is_blocked() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Page::Contact));
        let _ = app.update(Message::SubmitForm);

        assert_eq!(app.contact.submission(), Submission::Idle);
        for field in Field::ALL {
            assert_eq!(app.contact.visible_error(field), Some(FieldError::Required));
        }
    }

    #[test]
    fn test_contact_submission_resets_after_success() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Page::Contact));
        for (field, value) in [
            (Field::Name, "Dorothea"),
            (Field::Email, "dorothea@example.org"),
            (Field::Subject, "Workshop"),
            (Field::Message, "Do you run portrait workshops in spring?"),
        ] {
            let _ = app.update(Message::FieldEdited(field, value.into()));
        }

        let _ = app.update(Message::SubmitForm);
        assert_eq!(app.contact.submission(), Submission::Submitting);

        // tickets are handed out sequentially
        let _ = app.update(Message::SubmissionSettled(1));
        assert_eq!(app.contact.submission(), Submission::Succeeded);

        let _ = app.update(Message::SuccessElapsed(2));
        assert_eq!(app.contact.submission(), Submission::Idle);
        assert_eq!(app.contact.value(Field::Name), "");
    }

    #[test]
    fn test_leaving_contact_voids_pending_timer() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Page::Contact));
        for field in Field::ALL {
            let _ = app.update(Message::FieldEdited(field, "valid@example.com".into()));
        }
        let _ = app.update(Message::SubmitForm);
        assert_eq!(app.contact.submission(), Submission::Submitting);

        let _ = app.update(Message::Navigate(Page::Home));
        let _ = app.update(Message::SubmissionSettled(1));
        assert_eq!(app.contact.submission(), Submission::Idle);
    }

    #[test]
    fn test_keyboard_listens_only_while_photo_shown() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Page::Gallery));
        assert!(!app.scroll_locked());
        let _ = app.subscription();

        let _ = app.update(Message::TileSelected(2));
        assert!(app.scroll_locked());
        assert!(app.lightbox_photo().is_some());
        let _ = app.subscription();

        let _ = app.update(Message::CloseLightbox);
        assert!(!app.scroll_locked());
        assert!(app.lightbox_photo().is_none());

        // a filter change that empties the grid releases the keyboard too
        let _ = app.update(Message::TileSelected(4));
        let _ = app.update(Message::QueryChanged("volcano".into()));
        assert!(!app.scroll_locked());
        assert!(app.lightbox_photo().is_none());
    }

    #[test]
    fn test_empty_external_catalog_falls_back_to_builtin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        let settings = Settings {
            catalog_path: Some(file.path().to_path_buf()),
            ..Settings::default()
        };
        assert_eq!(load_catalog(&settings), Catalog::builtin());
    }

    #[test]
    fn test_unreadable_external_catalog_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            catalog_path: Some(dir.path().join("missing.json")),
            ..Settings::default()
        };
        assert_eq!(load_catalog(&settings), Catalog::builtin());
    }

    #[test]
    fn test_every_page_view_builds() {
        let mut app = app();
        for page in [
            Page::Home,
            Page::About,
            Page::Gallery,
            Page::Contact,
            Page::Legal(LegalKind::Privacy),
            Page::Legal(LegalKind::Terms),
            Page::Legal(LegalKind::Cookies),
        ] {
            let _ = app.update(Message::Navigate(page));
            let _ = app.view();
        }

        let _ = app.update(Message::Navigate(Page::Gallery));
        let _ = app.update(Message::TileSelected(0));
        let _ = app.view();
    }

    #[test]
    fn test_titles() {
        let mut app = app();
        assert_eq!(app.title(), "Photography Portfolio");

        app.navigate(Page::Legal(LegalKind::Cookies));
        assert_eq!(app.title(), "Cookies Policy · Photography Portfolio");
    }
}
