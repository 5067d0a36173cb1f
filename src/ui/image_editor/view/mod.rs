// SPDX-License-Identifier: MPL-2.0
//! Editor view composition helpers.

pub mod canvas;
pub mod sidebar;
pub mod toolbar;

use iced::widget::{container, Column, Row};
use iced::{Element, Length};

use super::{LoadState, Message, State, ViewContext};
use canvas::CanvasModel;
use sidebar::SidebarModel;
use toolbar::ToolbarModel;

pub fn render<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let toolbar = toolbar::view(&ToolbarModel::from_state(state), ctx);

    let mut main_row = Row::new().spacing(0.0);
    if state.load_state() == LoadState::Ready {
        main_row = main_row.push(sidebar::view(&SidebarModel::from_state(state), ctx));
    }
    main_row = main_row.push(canvas::view(CanvasModel::from_state(state), ctx));

    container(Column::new().push(toolbar).push(main_row))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
