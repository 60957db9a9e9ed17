/// Gallery page: search box and tile grid
use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;
use std::path::Path;

use super::tile::{self, TileOptions};
use super::{page_title, CONTENT_WIDTH, MUTED};
use crate::state::catalog::Catalog;
use crate::state::gallery::GalleryState;
use crate::Message;

const SEARCH_PLACEHOLDER: &str = "Search by title, description or location...";

pub fn view<'a>(
    gallery: &'a GalleryState,
    catalog: &'a Catalog,
    asset_root: &Path,
) -> Element<'a, Message> {
    let filtered = gallery.filtered(catalog);

    let mut search = row![text_input(SEARCH_PLACEHOLDER, gallery.query().unwrap_or(""))
        .on_input(Message::QueryChanged)
        .padding(10)
        .size(14)]
    .spacing(8)
    .align_y(Alignment::Center)
    .width(Length::Fixed(480.0));

    if gallery.query().is_some() {
        search = search.push(
            button(text("✕").size(14))
                .on_press(Message::ClearQuery)
                .style(button::text),
        );
    }

    let body: Element<'a, Message> = if filtered.is_empty() && gallery.filter_active() {
        column![
            text("No photos match your search criteria.").size(17).color(MUTED),
            button(text("Clear search").size(14))
                .on_press(Message::ClearQuery)
                .style(button::secondary)
                .padding([8, 16]),
        ]
        .spacing(16)
        .align_x(Alignment::Center)
        .padding(60)
        .into()
    } else {
        let options = TileOptions::default();
        let tiles = filtered
            .into_iter()
            .enumerate()
            .map(|(index, photo)| tile::view(photo, index, asset_root, options))
            .collect();

        Wrap::with_elements(tiles)
            .spacing(24.0)
            .line_spacing(32.0)
            .into()
    };

    let page = column![
        page_title(
            "GALLERY",
            Some("A collection of my favorite works showcasing the beauty of light, composition, and emotion."),
        ),
        container(search).center_x(Length::Fill),
        container(body).center_x(Length::Fill),
    ]
    .spacing(40)
    .padding([48, 32])
    .max_width(CONTENT_WIDTH);

    container(page).center_x(Length::Fill).into()
}
