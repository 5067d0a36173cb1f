// SPDX-License-Identifier: MPL-2.0
//! Sidebar with the transform and adjustment controls and the save actions.

use crate::domain::editing::newtypes::filter_bounds;
use crate::domain::editing::TransformState;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, container, rule, scrollable, slider, text, Column, Row, Space, Text,
};
use iced::{Alignment, Element, Length};

use super::super::{Message, SidebarMessage, State, ViewContext};

pub struct SidebarModel {
    pub transform: TransformState,
    pub is_saving: bool,
}

impl SidebarModel {
    pub fn from_state(state: &State) -> Self {
        Self {
            transform: *state.transform(),
            is_saving: state.is_saving(),
        }
    }
}

pub fn view<'a>(model: &SidebarModel, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let controls = Column::new()
        .spacing(spacing::SM)
        .push(transform_section(&model.transform, ctx))
        .push(rule::horizontal(1))
        .push(adjust_section(&model.transform, ctx));

    let layout = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .push(scrollable(controls).height(Length::Fill))
        .push(footer(model, ctx));

    container(layout)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn action_button<'a>(label: String, message: SidebarMessage) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY_SM))
        .on_press(message.into())
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::button::unselected)
        .into()
}

fn button_pair<'a>(
    left: Element<'a, Message>,
    right: Element<'a, Message>,
) -> Element<'a, Message> {
    Row::new().spacing(spacing::XS).push(left).push(right).into()
}

fn transform_section<'a>(
    transform: &TransformState,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let zoom_label = i18n.tr_with_args(
        "editor-zoom-label",
        &[("percent", &transform.scale.percent().to_string())],
    );

    let zoom_out = button(Text::new("−").size(typography::BODY_LG))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::unselected);
    let zoom_out = if transform.scale.is_min() {
        zoom_out
    } else {
        zoom_out.on_press(SidebarMessage::ZoomOut.into())
    };
    let zoom_in = button(Text::new("+").size(typography::BODY_LG))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::unselected);
    let zoom_in = if transform.scale.is_max() {
        zoom_in
    } else {
        zoom_in.on_press(SidebarMessage::ZoomIn.into())
    };

    let zoom_row = Row::new()
        .spacing(spacing::XS)
        .align_y(Alignment::Center)
        .push(zoom_out)
        .push(
            container(Text::new(zoom_label).size(typography::BODY_SM))
                .center_x(Length::Fill),
        )
        .push(zoom_in);

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("editor-transform-section-title")).size(typography::BODY))
        .push(button_pair(
            action_button(
                format!("⟲ {}", i18n.tr("editor-rotate-left")),
                SidebarMessage::RotateLeft,
            ),
            action_button(
                format!("⟳ {}", i18n.tr("editor-rotate-right")),
                SidebarMessage::RotateRight,
            ),
        ))
        .push(button_pair(
            action_button(
                format!("⇆ {}", i18n.tr("editor-flip-horizontal")),
                SidebarMessage::FlipHorizontal,
            ),
            action_button(
                format!("⇅ {}", i18n.tr("editor-flip-vertical")),
                SidebarMessage::FlipVertical,
            ),
        ))
        .push(zoom_row)
        .into()
}

fn filter_slider<'a>(
    label: String,
    value: u8,
    on_change: fn(i32) -> SidebarMessage,
) -> Element<'a, Message> {
    let header = Row::new()
        .push(Text::new(label).size(typography::BODY_SM))
        .push(Space::new().width(Length::Fill))
        .push(
            Text::new(format!("{value}%"))
                .size(typography::BODY_SM)
                .style(text::secondary),
        );

    Column::new()
        .spacing(spacing::XXS)
        .push(header)
        .push(
            slider(
                i32::from(filter_bounds::MIN)..=i32::from(filter_bounds::MAX),
                i32::from(value),
                move |v| on_change(v).into(),
            )
            .step(1),
        )
        .into()
}

fn adjust_section<'a>(transform: &TransformState, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let reset = button(Text::new(i18n.tr("editor-reset")).size(typography::BODY_SM))
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::button::unselected);
    let reset = if transform.is_identity() {
        reset
    } else {
        reset.on_press(SidebarMessage::Reset.into())
    };

    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("editor-adjust-section-title")).size(typography::BODY))
        .push(filter_slider(
            i18n.tr("editor-brightness-label"),
            transform.brightness.value(),
            SidebarMessage::BrightnessChanged,
        ))
        .push(filter_slider(
            i18n.tr("editor-contrast-label"),
            transform.contrast.value(),
            SidebarMessage::ContrastChanged,
        ))
        .push(reset)
        .into()
}

fn footer<'a>(model: &SidebarModel, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let save = button(
        container(Text::new(ctx.i18n.tr("editor-save")).size(typography::BODY))
            .center_x(Length::Fill),
    )
    .padding(spacing::XS)
    .width(Length::Fill)
    .style(styles::button::primary);
    let save_as = button(
        container(Text::new(ctx.i18n.tr("editor-save-as")).size(typography::BODY_SM))
            .center_x(Length::Fill),
    )
    .padding(spacing::XS)
    .width(Length::Fill)
    .style(styles::button::unselected);

    let (save, save_as) = if model.is_saving {
        (save, save_as)
    } else {
        (
            save.on_press(SidebarMessage::Save.into()),
            save_as.on_press(SidebarMessage::SaveAs.into()),
        )
    };

    Column::new().spacing(spacing::XS).push(save).push(save_as).into()
}
