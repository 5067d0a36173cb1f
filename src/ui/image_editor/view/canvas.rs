// SPDX-License-Identifier: MPL-2.0
//! Preview surface. The rendered image already fits the preview bounds; it is
//! drawn at its natural size and only scaled down when the window is smaller.

use crate::media::ImageData;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, container, image, text, Column, Text};
use iced::{ContentFit, Element, Length};

use super::super::{LoadState, Message, State, ToolbarMessage, ViewContext};

pub struct CanvasModel<'a> {
    pub load: LoadState,
    pub preview: Option<&'a ImageData>,
}

impl<'a> CanvasModel<'a> {
    pub fn from_state(state: &'a State) -> Self {
        Self {
            load: state.load_state(),
            preview: state.preview(),
        }
    }
}

pub fn view<'a>(model: CanvasModel<'a>, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match (model.load, model.preview) {
        (LoadState::Ready, Some(preview)) => image(preview.handle.clone())
            .content_fit(ContentFit::ScaleDown)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        (LoadState::Loading, _) => Text::new(ctx.i18n.tr("editor-loading"))
            .size(typography::BODY_LG)
            .style(text::secondary)
            .into(),
        _ => missing(ctx),
    };

    container(content)
        .padding(spacing::LG)
        .center(Length::Fill)
        .into()
}

fn missing<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("editor-no-image")).size(typography::TITLE_SM))
        .push(
            button(Text::new(ctx.i18n.tr("editor-back")).size(typography::BODY))
                .on_press(ToolbarMessage::Back.into())
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        )
        .into()
}
