/// Static pages: home, about, and the three legal documents
use iced::widget::{button, column, container, image, row, text, Column};
use iced::{Alignment, ContentFit, Element, Length};
use std::path::Path;

use super::{page_title, section_heading, ACCENT, CONTENT_WIDTH, MUTED};
use crate::content::legal::{Block, LegalDocument};
use crate::content::{self, Collection};
use crate::{Message, Page};

fn page<'a>(body: Column<'a, Message>) -> Element<'a, Message> {
    container(body.spacing(48).padding([48, 32]).max_width(CONTENT_WIDTH))
        .center_x(Length::Fill)
        .into()
}

fn collection_card<'a>(collection: &Collection, asset_root: &Path) -> Element<'a, Message> {
    let cover = image(image::Handle::from_path(asset_root.join(collection.cover)))
        .width(Length::Fill)
        .height(Length::Fixed(200.0))
        .content_fit(ContentFit::Cover);

    let card = column![
        cover,
        text(collection.title).size(20),
        text(collection.description).size(13).color(MUTED),
    ]
    .spacing(8);

    button(card)
        .on_press(Message::BrowseCollection(collection.query))
        .style(button::text)
        .padding(0)
        .width(Length::Fill)
        .into()
}

pub fn home<'a>(asset_root: &Path) -> Element<'a, Message> {
    let hero = column![
        text(content::HERO_TITLE).size(52),
        text(content::HERO_SUBTITLE).size(18).color(MUTED),
        button(text("VIEW GALLERY").size(14))
            .on_press(Message::Navigate(Page::Gallery))
            .style(button::secondary)
            .padding([10, 24]),
    ]
    .spacing(20)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    let cards = content::COLLECTIONS
        .iter()
        .map(|collection| collection_card(collection, asset_root));

    let collections = column![
        section_heading("COLLECTIONS"),
        row(cards).spacing(20),
    ]
    .spacing(20);

    let featured = row![
        column![
            text("HIGHLIGHT").size(12).color(ACCENT),
            text(content::FEATURED_TITLE).size(28),
            text(content::FEATURED_TEXT).size(14).color(MUTED),
            button(text("VIEW SERIES").size(13))
                .on_press(Message::BrowseCollection("mountain"))
                .style(button::secondary)
                .padding([8, 18]),
        ]
        .spacing(14)
        .width(Length::FillPortion(2)),
        image(image::Handle::from_path(asset_root.join("featured.jpg")))
            .width(Length::FillPortion(3))
            .height(Length::Fixed(320.0))
            .content_fit(ContentFit::Cover),
    ]
    .spacing(32)
    .align_y(Alignment::Center);

    let closing = column![
        text(content::CLOSING_TITLE).size(30),
        text(content::CLOSING_TEXT).size(17).color(MUTED),
        button(text("GET IN TOUCH").size(14))
            .on_press(Message::Navigate(Page::Contact))
            .style(button::secondary)
            .padding([12, 32]),
    ]
    .spacing(18)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    page(column![
        hero,
        collections,
        column![section_heading("FEATURED WORK"), featured].spacing(20),
        closing,
    ])
}

fn bullet_list<'a>(items: &'a [&'a str]) -> Element<'a, Message> {
    Column::with_children(items.iter().map(|item| {
        row![text("→").size(13).color(ACCENT), text(*item).size(14)]
            .spacing(10)
            .into()
    }))
    .spacing(6)
    .into()
}

pub fn about<'a>() -> Element<'a, Message> {
    let profile = column![
        text(content::PHOTOGRAPHER).size(26).color(ACCENT),
        text(content::ROLE).size(12).color(MUTED),
    ]
    .spacing(6);

    let biography = Column::with_children(
        content::BIOGRAPHY
            .iter()
            .map(|paragraph| text(*paragraph).size(15).into()),
    )
    .spacing(14);

    let approach = row(content::APPROACH.iter().map(|(heading, body)| {
        column![text(*heading).size(18), text(*body).size(14).color(MUTED)]
            .spacing(10)
            .width(Length::Fill)
            .into()
    }))
    .spacing(32);

    let recognition = Column::with_children(content::RECOGNITION.iter().map(|(title, details)| {
        column![text(*title).size(15), text(*details).size(12).color(MUTED)]
            .spacing(2)
            .into()
    }))
    .spacing(14);

    let lists = row![
        column![section_heading("EQUIPMENT"), bullet_list(&content::EQUIPMENT)]
            .spacing(16)
            .width(Length::Fill),
        column![section_heading("RECOGNITION"), recognition]
            .spacing(16)
            .width(Length::Fill),
    ]
    .spacing(40);

    page(column![
        page_title("ABOUT ME", None),
        profile,
        column![section_heading("Biography"), biography].spacing(16),
        column![section_heading("MY APPROACH"), approach].spacing(16),
        lists,
    ])
}

pub fn legal<'a>(document: &'a LegalDocument, last_updated: &'a str) -> Element<'a, Message> {
    let mut body = column![page_title(document.title, Some(last_updated))];

    for section in document.sections {
        let mut part = column![text(section.heading).size(22)].spacing(10);

        for block in section.blocks {
            part = part.push(match *block {
                Block::Paragraph(paragraph) => text(paragraph).size(14).color(MUTED).into(),
                Block::Subheading(heading) => text(heading).size(17).into(),
                Block::Bullets(items) => bullet_list(items),
            });
        }

        body = body.push(part);
    }

    body = body.push(
        button(text("RETURN TO HOME").size(13))
            .on_press(Message::Navigate(Page::Home))
            .style(button::secondary)
            .padding([8, 18]),
    );

    page(body)
}
