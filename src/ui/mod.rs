/// User interface module
///
/// Views are plain functions from state to `Element<Message>`:
/// - `tile.rs` - one gallery thumbnail with caption
/// - `lightbox.rs` - full-window photo overlay
/// - `gallery.rs` - search box and tile grid
/// - `contact.rs` - contact form, details and FAQ
/// - `pages.rs` - home, about and legal pages
///
/// This file holds the shared chrome (header, footer) and palette.

pub mod contact;
pub mod gallery;
pub mod lightbox;
pub mod pages;
pub mod tile;

use iced::widget::{button, column, container, horizontal_space, row, text, Column};
use iced::{Alignment, Color, Element, Length};

use crate::content::{self, legal::LegalKind};
use crate::{Message, Page};

/// Gold accent used for headings and highlights
pub const ACCENT: Color = Color::from_rgb(0.85, 0.72, 0.47);
/// Dimmed body text
pub const MUTED: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.65);
/// Validation messages
pub const ERROR: Color = Color::from_rgb(0.94, 0.45, 0.45);

/// Widest the page content grows
pub const CONTENT_WIDTH: f32 = 1100.0;

/// Centered page title, as every page starts with one
pub fn page_title<'a>(title: &'a str, subtitle: Option<&'a str>) -> Element<'a, Message> {
    let mut heading = column![text(title).size(40)]
        .spacing(12)
        .align_x(Alignment::Center);

    if let Some(subtitle) = subtitle {
        heading = heading.push(text(subtitle).size(17).color(MUTED));
    }

    container(heading).width(Length::Fill).center_x(Length::Fill).into()
}

/// Accent-colored section heading
pub fn section_heading(title: &str) -> Element<'_, Message> {
    text(title).size(22).color(ACCENT).into()
}

fn nav_link(label: &str, target: Page, current: Page) -> Element<'_, Message> {
    let label = text(label).size(14);
    let label = if target == current { label.color(ACCENT) } else { label };

    button(label)
        .on_press(Message::Navigate(target))
        .style(button::text)
        .into()
}

/// Top navigation bar
pub fn header(current: Page) -> Element<'static, Message> {
    let brand = button(text(content::BRAND).size(20))
        .on_press(Message::Navigate(Page::Home))
        .style(button::text);

    let bar = row![
        brand,
        horizontal_space(),
        nav_link("GALLERY", Page::Gallery, current),
        nav_link("ABOUT", Page::About, current),
        nav_link("CONTACT", Page::Contact, current),
    ]
    .spacing(24)
    .align_y(Alignment::Center);

    container(bar)
        .padding([16, 32])
        .width(Length::Fill)
        .into()
}

/// Footer with tagline, navigation and legal links
pub fn footer(current: Page) -> Element<'static, Message> {
    let about = column![
        text(content::BRAND).size(16).color(ACCENT),
        text(content::TAGLINE).size(13).color(MUTED),
    ]
    .spacing(10)
    .width(Length::FillPortion(2));

    let navigation: Column<Message> = column![
        text("NAVIGATION").size(13),
        nav_link("Gallery", Page::Gallery, current),
        nav_link("About", Page::About, current),
        nav_link("Contact", Page::Contact, current),
    ]
    .spacing(4)
    .width(Length::FillPortion(1));

    let legal: Column<Message> = column![
        text("LEGAL").size(13),
        nav_link("Privacy Policy", Page::Legal(LegalKind::Privacy), current),
        nav_link("Terms of Service", Page::Legal(LegalKind::Terms), current),
        nav_link("Cookies Policy", Page::Legal(LegalKind::Cookies), current),
    ]
    .spacing(4)
    .width(Length::FillPortion(1));

    let columns = container(row![about, navigation, legal].spacing(32)).max_width(CONTENT_WIDTH);

    container(columns)
        .padding(40)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .style(container::dark)
        .into()
}
