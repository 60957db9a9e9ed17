/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The photo catalog and search filter (catalog.rs)
/// - Lightbox navigation (lightbox.rs)
/// - Gallery page view state (gallery.rs)
/// - Contact form validation and simulated submission (contact.rs)

pub mod catalog;
pub mod contact;
pub mod data;
pub mod gallery;
pub mod lightbox;
