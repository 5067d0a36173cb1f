// SPDX-License-Identifier: MPL-2.0
//! Grid and table layouts of the uploaded images.
//!
//! Both layouts iterate [`Library::filtered`], and every action carries the
//! file's id.

use super::{Message, ViewContext};
use crate::i18n::fluent::I18n;
use crate::library::{format_file_size, Library, ViewMode};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::upload::UploadedFile;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, container, image, mouse_area, rule, text, text_input, Column, Row, Space, Stack, Text,
};
use iced::{ContentFit, Element, Length};

pub fn view<'a>(library: &'a Library, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let files: Vec<&UploadedFile> = library.filtered().collect();

    let body: Element<'a, Message> = if files.is_empty() {
        container(Text::new(ctx.i18n.tr("library-no-matches")).style(text::secondary))
            .padding(spacing::LG)
            .center_x(Length::Fill)
            .into()
    } else {
        match library.view_mode() {
            ViewMode::Grid => grid(&files, ctx.i18n),
            ViewMode::Table => table(&files, ctx.i18n),
        }
    };

    Column::new()
        .spacing(spacing::MD)
        .push(header(library, ctx.i18n))
        .push(body)
        .into()
}

fn header<'a>(library: &'a Library, i18n: &I18n) -> Element<'a, Message> {
    let filter = text_input(&i18n.tr("library-filter-placeholder"), library.filter_text())
        .on_input(Message::FilterChanged)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fixed(sizing::GRID_THUMBNAIL));

    let mode_button = |mode: ViewMode, label: String| {
        button(Text::new(label).size(typography::BODY_SM))
            .on_press(Message::SetViewMode(mode))
            .padding([spacing::XXS, spacing::SM])
            .style(if library.view_mode() == mode {
                styles::button::selected
            } else {
                styles::button::unselected
            })
    };

    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(i18n.tr("library-title")).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(filter)
        .push(mode_button(
            ViewMode::Grid,
            format!("▦ {}", i18n.tr("library-view-grid")),
        ))
        .push(mode_button(
            ViewMode::Table,
            format!("☰ {}", i18n.tr("library-view-table")),
        ))
        .into()
}

fn overlay_button<'a>(glyph: &'a str, message: Message) -> Element<'a, Message> {
    button(Text::new(glyph).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_STRONG,
        ))
        .into()
}

fn grid<'a>(files: &[&'a UploadedFile], i18n: &I18n) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(spacing::MD);

    for chunk in files.chunks(sizing::GRID_COLUMNS) {
        let mut row = Row::new().spacing(spacing::MD);
        for file in chunk {
            row = row.push(grid_card(file, i18n));
        }
        // Pad the last row so cards keep the same width.
        for _ in chunk.len()..sizing::GRID_COLUMNS {
            row = row.push(Space::new().width(Length::Fill));
        }
        rows = rows.push(row);
    }

    rows.into()
}

fn grid_card<'a>(file: &'a UploadedFile, i18n: &I18n) -> Element<'a, Message> {
    let thumbnail = mouse_area(
        image(file.preview.handle().clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::GRID_THUMBNAIL)),
    )
    .on_press(Message::OpenFullscreen(file.id));

    let actions = container(
        Row::new()
            .spacing(spacing::XXS)
            .push(overlay_button("⤢", Message::OpenFullscreen(file.id)))
            .push(overlay_button("✕", Message::Remove(file.id))),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Right)
    .padding(spacing::XS);

    let caption = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            container(Text::new(file.name()).size(typography::CAPTION))
                .width(Length::Fill)
                .clip(true),
        )
        .push(
            button(Text::new(i18n.tr("library-action-edit")).size(typography::CAPTION))
                .on_press(Message::Edit(file.id))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::primary),
        );

    container(
        Column::new()
            .push(Stack::new().push(thumbnail).push(actions))
            .push(rule::horizontal(1))
            .push(container(caption).padding([spacing::XS, spacing::SM])),
    )
    .width(Length::Fill)
    .clip(true)
    .style(styles::container::card)
    .into()
}

const NAME_PORTION: u16 = 4;
const SIZE_PORTION: u16 = 1;
const ACTIONS_PORTION: u16 = 2;

fn table<'a>(files: &[&'a UploadedFile], i18n: &I18n) -> Element<'a, Message> {
    let column_header = |label: String, width: Length| {
        container(
            Text::new(label.to_uppercase())
                .size(typography::CAPTION)
                .style(text::secondary),
        )
        .width(width)
    };

    let header = Row::new()
        .spacing(spacing::MD)
        .padding([spacing::XS, spacing::MD])
        .push(column_header(
            i18n.tr("library-column-preview"),
            Length::Fixed(sizing::TABLE_THUMBNAIL),
        ))
        .push(column_header(
            i18n.tr("library-column-name"),
            Length::FillPortion(NAME_PORTION),
        ))
        .push(column_header(
            i18n.tr("library-column-size"),
            Length::FillPortion(SIZE_PORTION),
        ))
        .push(column_header(
            i18n.tr("library-column-actions"),
            Length::FillPortion(ACTIONS_PORTION),
        ));

    let mut rows = Column::new().push(header).push(rule::horizontal(1));
    for file in files {
        rows = rows.push(table_row(file, i18n)).push(rule::horizontal(1));
    }

    container(rows)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

fn table_row<'a>(file: &'a UploadedFile, i18n: &I18n) -> Element<'a, Message> {
    let thumbnail = mouse_area(
        image(file.preview.handle().clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fixed(sizing::TABLE_THUMBNAIL))
            .height(Length::Fixed(sizing::TABLE_THUMBNAIL)),
    )
    .on_press(Message::OpenFullscreen(file.id));

    let action = |label: String, message: Message| {
        button(Text::new(label).size(typography::CAPTION))
            .on_press(message)
            .padding([spacing::XXS, spacing::XS])
    };

    let actions = Row::new()
        .spacing(spacing::XXS)
        .push(
            action(i18n.tr("library-action-view"), Message::OpenFullscreen(file.id))
                .style(styles::button::unselected),
        )
        .push(
            action(i18n.tr("library-action-edit"), Message::Edit(file.id))
                .style(styles::button::primary),
        )
        .push(
            action(i18n.tr("library-action-remove"), Message::Remove(file.id))
                .style(styles::button::danger),
        );

    Row::new()
        .spacing(spacing::MD)
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center)
        .push(thumbnail)
        .push(
            container(Text::new(file.name()).size(typography::BODY))
                .width(Length::FillPortion(NAME_PORTION))
                .clip(true),
        )
        .push(
            container(
                Text::new(format_file_size(file.file.size))
                    .size(typography::BODY_SM)
                    .style(text::secondary),
            )
            .width(Length::FillPortion(SIZE_PORTION)),
        )
        .push(container(actions).width(Length::FillPortion(ACTIONS_PORTION)))
        .into()
}
