// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Home and upload screens sit below the navbar; the editor brings its own
//! toolbar. Toasts are stacked over every screen.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::home;
use crate::ui::image_editor::{self, State as ImageEditorState};
use crate::ui::navbar;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::uploader::{self, State as UploaderState};
use iced::widget::{Column, Container, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub max_file_size: u64,
    pub uploader: &'a UploaderState,
    pub image_editor: Option<&'a ImageEditorState>,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Home => with_navbar(
            home::view(home::ViewContext {
                i18n: ctx.i18n,
                max_file_size: ctx.max_file_size,
            })
            .map(Message::Home),
            &ctx,
        ),
        Screen::Upload => with_navbar(
            ctx.uploader
                .view(uploader::ViewContext {
                    i18n: ctx.i18n,
                    max_file_size: ctx.max_file_size,
                })
                .map(Message::Uploader),
            &ctx,
        ),
        Screen::Editor => view_image_editor(ctx.image_editor, ctx.i18n),
    };

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn with_navbar<'a>(content: Element<'a, Message>, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let navbar = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        upload_active: ctx.screen == Screen::Upload,
    })
    .map(Message::Navbar);

    Column::new()
        .push(navbar)
        .push(Container::new(content).width(Length::Fill).height(Length::Fill))
        .into()
}

fn view_image_editor<'a>(
    editor: Option<&'a ImageEditorState>,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    match editor {
        Some(state) => state
            .view(image_editor::ViewContext { i18n })
            .map(Message::ImageEditor),
        None => Container::new(Text::new(i18n.tr("editor-no-image")))
            .center(Length::Fill)
            .into(),
    }
}
