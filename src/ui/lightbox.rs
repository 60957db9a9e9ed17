/// Lightbox overlay: one photo at a time over a dark backdrop
///
/// Pointer contract: a press on the backdrop closes the lightbox, a press
/// inside the content area is swallowed by `opaque` before it reaches the
/// backdrop. The whole overlay is opaque too, so the page underneath
/// neither scrolls nor reacts while a photo is shown.

use iced::keyboard::{self, key::Named, Key};
use iced::widget::{
    button, center, column, container, horizontal_space, image, mouse_area, opaque, row, text,
    Space,
};
use iced::{Alignment, Background, Color, ContentFit, Element, Length, Theme};
use std::path::Path;

use super::{ACCENT, MUTED};
use crate::state::data::PhotoRecord;
use crate::Message;

/// Map a key press to a lightbox action. Anything else is ignored.
pub fn key_action(key: Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        Key::Named(Named::Escape) => Some(Message::CloseLightbox),
        Key::Named(Named::ArrowLeft) => Some(Message::PreviousPhoto),
        Key::Named(Named::ArrowRight) => Some(Message::NextPhoto),
        _ => None,
    }
}

fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.96))),
        text_color: Some(Color::WHITE),
        ..container::Style::default()
    }
}

fn arrow<'a>(label: &'a str, message: Option<Message>) -> Element<'a, Message> {
    match message {
        Some(message) => button(text(label).size(36))
            .on_press(message)
            .style(button::text)
            .padding([8, 16])
            .into(),
        // keeps the photo centered when one arrow is hidden
        None => Space::with_width(Length::Fixed(64.0)).into(),
    }
}

fn caption(photo: &PhotoRecord) -> Element<'_, Message> {
    let mut info = column![text(&photo.title).size(26)].spacing(8);

    if let Some(description) = photo.caption() {
        info = info.push(text(description).size(15).color(MUTED));
    }

    let mut details = row![].spacing(18);
    if let Some(date) = &photo.date {
        details = details.push(text(date).size(13).color(ACCENT));
    }
    if let Some(location) = &photo.location {
        details = details.push(text(location).size(13).color(ACCENT));
    }

    info.push(details).into()
}

/// Build the overlay for `photo`
pub fn view<'a>(
    photo: &'a PhotoRecord,
    has_previous: bool,
    has_next: bool,
    asset_root: &Path,
) -> Element<'a, Message> {
    let picture = image(image::Handle::from_path(asset_root.join(&photo.src)))
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Contain);

    let stage = row![
        arrow("‹", has_previous.then_some(Message::PreviousPhoto)),
        picture,
        arrow("›", has_next.then_some(Message::NextPhoto)),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .height(Length::FillPortion(5));

    let content = column![stage, caption(photo)]
        .spacing(16)
        .max_width(1400.0);

    let close = button(text("✕").size(22))
        .on_press(Message::CloseLightbox)
        .style(button::text);

    let layout = column![
        row![horizontal_space(), close],
        center(opaque(content)).padding(24),
    ]
    .padding(16);

    let overlay = mouse_area(
        container(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(backdrop),
    )
    .on_press(Message::CloseLightbox);

    opaque(overlay)
}
