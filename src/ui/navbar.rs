// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown above the home and upload screens.
//!
//! The brand button returns to the home screen; the upload link opens the
//! upload screen. The editor has its own toolbar and does not show the navbar.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, rule, Column, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Highlights the upload link while the upload screen is shown.
    pub upload_active: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    OpenHome,
    OpenUpload,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenHome,
    OpenUpload,
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::OpenHome => Event::OpenHome,
        Message::OpenUpload => Event::OpenUpload,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = button(
        Text::new(format!("▣ {}", ctx.i18n.tr("navbar-brand"))).size(typography::TITLE_SM),
    )
    .on_press(Message::OpenHome)
    .padding([spacing::XXS, spacing::XS])
    .style(button::text);

    let upload_link = button(Text::new(ctx.i18n.tr("navbar-upload")).size(typography::BODY))
        .on_press(Message::OpenUpload)
        .padding([spacing::XXS, spacing::SM])
        .style(if ctx.upload_active {
            styles::button::selected
        } else {
            styles::button::unselected
        });

    let bar = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(upload_link);

    Column::new()
        .push(
            container(bar)
                .width(Length::Fill)
                .padding([spacing::XS, spacing::MD]),
        )
        .push(rule::horizontal(border::WIDTH_SM))
        .into()
}
