// SPDX-License-Identifier: MPL-2.0
//! Landing screen: hero, feature cards, the three usage steps and a call to action.

use crate::i18n::fluent::I18n;
use crate::library::format_file_size;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, container, scrollable, text, Column, Row, Text};
use iced::{Background, Border, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Upload limit in bytes, quoted in the formats card.
    pub max_file_size: u64,
}

#[derive(Debug, Clone)]
pub enum Message {
    GetStarted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenUpload,
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::GetStarted => Event::OpenUpload,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let limit = format_file_size(ctx.max_file_size);

    let content = Column::new()
        .spacing(spacing::XXL)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(hero(i18n))
        .push(features(i18n, &limit))
        .push(steps(i18n))
        .push(call_to_action(i18n));

    scrollable(content).height(Length::Fill).into()
}

fn start_button<'a>(i18n: &I18n) -> Element<'a, Message> {
    button(Text::new(i18n.tr("home-start-button")).size(typography::BODY_LG))
        .on_press(Message::GetStarted)
        .padding([spacing::XS, spacing::LG])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT + spacing::XS))
        .style(styles::button::primary)
        .into()
}

fn hero<'a>(i18n: &I18n) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("home-hero-title")).size(typography::TITLE_LG))
        .push(
            Text::new(i18n.tr("home-hero-subtitle"))
                .size(typography::BODY_LG)
                .style(text::secondary),
        )
        .push(start_button(i18n))
        .into()
}

fn feature_card<'a>(glyph: &'a str, title: String, body: String) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(glyph)
                .size(typography::TITLE_LG)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::PRIMARY_500),
                }),
        )
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(Text::new(body).size(typography::BODY).style(text::secondary));

    container(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

fn features<'a>(i18n: &I18n, limit: &str) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::LG)
        .push(feature_card(
            "⇪",
            i18n.tr("home-feature-formats-title"),
            i18n.tr_with_args("home-feature-formats-body", &[("limit", limit)]),
        ))
        .push(feature_card(
            "✎",
            i18n.tr("home-feature-editing-title"),
            i18n.tr("home-feature-editing-body"),
        ))
        .push(feature_card(
            "▦",
            i18n.tr("home-feature-batch-title"),
            i18n.tr("home-feature-batch-body"),
        ))
        .into()
}

fn step<'a>(number: u8, title: String, body: String) -> Element<'a, Message> {
    let badge = container(Text::new(number.to_string()).size(typography::BODY_LG))
        .center_x(Length::Fixed(spacing::XXL))
        .center_y(Length::Fixed(spacing::XXL))
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::PRIMARY_100)),
            text_color: Some(palette::PRIMARY_500),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(badge)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(Text::new(body).size(typography::BODY).style(text::secondary))
        .into()
}

fn steps<'a>(i18n: &I18n) -> Element<'a, Message> {
    let header = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("home-steps-title")).size(typography::TITLE_MD))
        .push(Text::new(i18n.tr("home-steps-subtitle")).style(text::secondary));

    let row = Row::new()
        .spacing(spacing::LG)
        .push(step(
            1,
            i18n.tr("home-step-upload-title"),
            i18n.tr("home-step-upload-body"),
        ))
        .push(step(
            2,
            i18n.tr("home-step-edit-title"),
            i18n.tr("home-step-edit-body"),
        ))
        .push(step(
            3,
            i18n.tr("home-step-save-title"),
            i18n.tr("home-step-save-body"),
        ));

    Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(header)
        .push(row)
        .into()
}

fn call_to_action<'a>(i18n: &I18n) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("home-cta-title")).size(typography::TITLE_MD))
        .push(Text::new(i18n.tr("home-cta-subtitle")).style(text::secondary))
        .push(start_button(i18n))
        .into()
}
