// SPDX-License-Identifier: MPL-2.0
//! Drop zone with the picker button and the dismissible inline error.

use super::{rejection_message, Message, ViewContext};
use crate::error::UploadRejection;
use crate::library::format_file_size;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, text, Column, Row, Space, Text};
use iced::{Element, Length};

pub fn view<'a>(
    is_dragging: bool,
    error: Option<&UploadRejection>,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let mut column = Column::new().spacing(spacing::MD).width(Length::Fill);

    if let Some(rejection) = error {
        column = column.push(error_banner(
            i18n.tr("upload-error-title"),
            rejection_message(i18n, rejection),
            i18n.tr("upload-error-dismiss"),
        ));
    }

    let limit = format_file_size(ctx.max_file_size);
    let zone = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new("⇪").size(typography::TITLE_LG).style(text::secondary))
        .push(Text::new(i18n.tr("upload-drop-hint")).size(typography::BODY))
        .push(
            button(Text::new(i18n.tr("upload-select-button")).size(typography::BODY))
                .on_press(Message::PickFiles)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::unselected),
        )
        .push(
            Text::new(i18n.tr_with_args("upload-formats-hint", &[("limit", &limit)]))
                .size(typography::CAPTION)
                .style(text::secondary),
        );

    column
        .push(
            container(zone)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .padding(spacing::LG)
                .style(styles::container::drop_zone(is_dragging)),
        )
        .into()
}

fn error_banner<'a>(title: String, message: String, dismiss: String) -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(title).size(typography::BODY))
        .push(Text::new(message).size(typography::BODY_SM));

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(body)
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(dismiss).size(typography::BODY_SM))
                .on_press(Message::DismissError)
                .padding([spacing::XXS, spacing::XS])
                .style(button::text),
        );

    container(row)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::error_banner)
        .into()
}
