// SPDX-License-Identifier: MPL-2.0
//! Top toolbar for the editor surface.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Row, Space, Text};
use iced::{Alignment, Element, Length};

use super::super::{Message, State, ToolbarMessage, ViewContext};

pub struct ToolbarModel<'a> {
    pub file_name: &'a str,
}

impl<'a> ToolbarModel<'a> {
    pub fn from_state(state: &'a State) -> Self {
        Self {
            file_name: state.file_name(),
        }
    }
}

pub fn view<'a>(model: &ToolbarModel<'a>, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let back_btn = button(Text::new(ctx.i18n.tr("editor-back")).size(typography::BODY))
        .on_press(ToolbarMessage::Back.into())
        .padding([spacing::XS, spacing::SM])
        .style(button::text);

    container(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Alignment::Center)
            .padding(spacing::XS)
            .push(back_btn)
            .push(Text::new(ctx.i18n.tr("editor-title")).size(typography::TITLE_SM))
            .push(Space::new().width(Length::Fill))
            .push(
                Text::new(model.file_name)
                    .size(typography::BODY_SM)
                    .style(text::secondary),
            ),
    )
    .width(Length::Fill)
    .style(styles::container::panel)
    .into()
}
