/// Contact page: form, studio details and FAQ
use iced::widget::{button, column, container, row, text, text_input, Column};
use iced::{Alignment, Element, Length};

use super::{page_title, section_heading, ACCENT, CONTENT_WIDTH, ERROR, MUTED};
use crate::content;
use crate::state::contact::{ContactForm, Field, Submission};
use crate::Message;

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "Your name",
        Field::Email => "your.email@example.com",
        Field::Subject => "What is this regarding?",
        Field::Message => "Tell me about your project...",
    }
}

fn field_input(form: &ContactForm, field: Field) -> Element<'_, Message> {
    let mut input = text_input(placeholder(field), form.value(field)).padding(10);

    // inputs stay read-only while the message is on its way
    if form.submission() == Submission::Idle {
        input = input
            .on_input(move |value| Message::FieldEdited(field, value))
            .on_submit(Message::FieldCommitted(field));
    }

    let mut group = column![text(field.label()).size(13), input].spacing(6);

    if let Some(error) = form.visible_error(field) {
        group = group.push(text(error.message(field)).size(12).color(ERROR));
    }

    group.into()
}

fn form_panel(form: &ContactForm) -> Element<'_, Message> {
    if form.submission() == Submission::Succeeded {
        return container(
            column![
                text(content::SUCCESS_TITLE).size(22).color(ACCENT),
                text(content::SUCCESS_TEXT).size(14),
            ]
            .spacing(10)
            .align_x(Alignment::Center),
        )
        .padding(32)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .style(container::rounded_box)
        .into();
    }

    let submit = match form.submission() {
        Submission::Submitting => button(text("SENDING...").size(14)).padding([10, 24]),
        _ => button(text("SEND MESSAGE").size(14))
            .on_press(Message::SubmitForm)
            .padding([10, 24]),
    };

    let fields = Column::with_children(Field::ALL.map(|field| field_input(form, field)))
        .spacing(16);

    column![section_heading("Send a Message"), fields, submit]
        .spacing(20)
        .into()
}

fn details() -> Element<'static, Message> {
    let address = Column::with_children(
        content::CONTACT_ADDRESS
            .iter()
            .map(|line| text(*line).size(14).into()),
    );

    let faq = Column::with_children(content::FAQ.iter().map(|(question, answer)| {
        column![text(*question).size(15), text(*answer).size(13).color(MUTED)]
            .spacing(4)
            .into()
    }))
    .spacing(16);

    let social = row(content::SOCIAL_NETWORKS.iter().map(|network| {
        container(text(*network).size(13).color(MUTED))
            .padding([6, 14])
            .style(container::rounded_box)
            .into()
    }))
    .spacing(12);

    column![
        section_heading("Contact Information"),
        column![text("EMAIL").size(11).color(MUTED), text(content::CONTACT_EMAIL).size(14)].spacing(2),
        column![text("PHONE").size(11).color(MUTED), text(content::CONTACT_PHONE).size(14)].spacing(2),
        column![text("STUDIO").size(11).color(MUTED), address].spacing(2),
        section_heading("Connect With Me"),
        social,
        section_heading("Frequently Asked Questions"),
        faq,
    ]
    .spacing(18)
    .into()
}

pub fn view(form: &ContactForm) -> Element<'_, Message> {
    let body = column![
        page_title("CONTACT", Some(content::CONTACT_INTRO)),
        row![
            container(form_panel(form)).width(Length::FillPortion(7)),
            container(details()).width(Length::FillPortion(5)),
        ]
        .spacing(48),
    ]
    .spacing(48)
    .padding([48, 32])
    .max_width(CONTENT_WIDTH);

    container(body).center_x(Length::Fill).into()
}
