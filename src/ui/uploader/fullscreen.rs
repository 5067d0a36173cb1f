// SPDX-License-Identifier: MPL-2.0
//! Fullscreen preview drawn over the upload screen.

use super::{Message, ViewContext};
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::styles;
use crate::upload::UploadedFile;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, image, opaque, Stack, Text};
use iced::{ContentFit, Element, Length};

pub fn view<'a>(file: &'a UploadedFile, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let picture = container(
        image(file.preview.handle().clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .padding(spacing::XL)
    .center(Length::Fill);

    let close = container(
        button(
            Text::new(format!("✕ {}", ctx.i18n.tr("library-close-preview")))
                .size(typography::BODY),
        )
            .on_press(Message::CloseFullscreen)
            .padding([spacing::XS, spacing::SM])
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_STRONG,
                opacity::OVERLAY_PRESSED,
            )),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Top)
    .padding(spacing::MD);

    opaque(
        container(Stack::new().push(picture).push(close))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
}
