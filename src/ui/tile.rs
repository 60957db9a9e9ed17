/// Gallery tile: one thumbnail with its caption
use iced::widget::{button, column, image, row, text, Column};
use iced::{ContentFit, Element, Length};
use std::path::Path;

use super::MUTED;
use crate::state::data::PhotoRecord;
use crate::Message;

/// Display options for a tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileOptions {
    /// Tile width in logical pixels; height follows the photo's aspect ratio
    pub width: f32,
    /// Tallest a tile may get, so portrait shots don't dominate the grid
    pub max_height: f32,
    /// Show title, location and date under the image
    pub caption: bool,
}

impl Default for TileOptions {
    fn default() -> Self {
        Self {
            width: 340.0,
            max_height: 420.0,
            caption: true,
        }
    }
}

impl TileOptions {
    /// Height of the image area for a photo
    pub fn image_height(&self, photo: &PhotoRecord) -> f32 {
        (self.width / photo.aspect_ratio()).min(self.max_height)
    }
}

/// Render a tile. Pressing it reports `index`, its position in the
/// filtered sequence.
pub fn view<'a>(
    photo: &'a PhotoRecord,
    index: usize,
    asset_root: &Path,
    options: TileOptions,
) -> Element<'a, Message> {
    let picture = image(image::Handle::from_path(asset_root.join(&photo.src)))
        .width(Length::Fixed(options.width))
        .height(Length::Fixed(options.image_height(photo)))
        .content_fit(ContentFit::Cover);

    let mut body: Column<Message> = column![picture].spacing(8);

    if options.caption {
        let mut details = row![].spacing(12);
        if let Some(location) = &photo.location {
            details = details.push(text(location).size(12).color(MUTED));
        }
        if let Some(date) = &photo.date {
            details = details.push(text(date).size(12).color(MUTED));
        }

        body = body.push(text(&photo.title).size(17)).push(details);
    }

    button(body)
        .on_press(Message::TileSelected(index))
        .padding(0)
        .style(button::text)
        .width(Length::Fixed(options.width))
        .into()
}
