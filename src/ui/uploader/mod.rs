// SPDX-License-Identifier: MPL-2.0
//! Upload screen: the drop zone with its inline error, and the library of
//! uploaded images below it.
//!
//! Follows the "state down, messages up" pattern: [`State::update`] handles
//! local changes and returns an [`Event`] when the application has to act
//! (open a dialog, persist a preference, open the editor).

mod fullscreen;
mod image_list;
mod upload_control;

use crate::error::UploadRejection;
use crate::i18n::fluent::I18n;
use crate::library::{format_file_size, Library, ViewMode};
use crate::registry::StoredFile;
use crate::ui::design_tokens::spacing;
use crate::upload::{FileId, UploadBatch};
use iced::widget::{scrollable, Column, Stack};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub max_file_size: u64,
}

#[derive(Debug, Clone)]
pub enum Message {
    PickFiles,
    DismissError,
    FilterChanged(String),
    SetViewMode(ViewMode),
    OpenFullscreen(FileId),
    CloseFullscreen,
    Remove(FileId),
    Edit(FileId),
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    PickFilesRequested,
    ViewModeChanged(ViewMode),
    EditRequested(StoredFile),
}

#[derive(Debug, Default)]
pub struct State {
    library: Library,
    is_dragging: bool,
    error: Option<UploadRejection>,
}

impl State {
    #[must_use]
    pub fn new(view_mode: ViewMode) -> Self {
        Self {
            library: Library::new(view_mode),
            ..Self::default()
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::PickFiles => Event::PickFilesRequested,
            Message::DismissError => {
                self.error = None;
                Event::None
            }
            Message::FilterChanged(text) => {
                self.library.set_filter(text);
                Event::None
            }
            Message::SetViewMode(mode) => {
                if self.library.view_mode() == mode {
                    return Event::None;
                }
                self.library.set_view_mode(mode);
                Event::ViewModeChanged(mode)
            }
            Message::OpenFullscreen(id) => {
                self.library.open_fullscreen(id);
                Event::None
            }
            Message::CloseFullscreen => {
                self.library.close_fullscreen();
                Event::None
            }
            Message::Remove(id) => {
                self.library.remove(id);
                Event::None
            }
            Message::Edit(id) => match self.library.get(id) {
                Some(file) => Event::EditRequested(StoredFile::from_upload(file)),
                None => Event::None,
            },
        }
    }

    /// Adds the accepted files and updates the inline error.
    ///
    /// The last rejection of the batch replaces any shown error; a batch
    /// without rejections clears it. Returns the number of files added.
    pub fn apply_batch(&mut self, batch: UploadBatch) -> usize {
        let added = batch.accepted.len();
        self.error = batch.last_rejection().cloned();
        self.library.add(batch.accepted);
        added
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.is_dragging = dragging;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    #[must_use]
    pub fn error(&self) -> Option<&UploadRejection> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Revokes all previews.
    pub fn clear(&mut self) {
        self.library.clear();
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let mut content = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .width(Length::Fill)
            .push(upload_control::view(
                self.is_dragging,
                self.error.as_ref(),
                &ctx,
            ));

        if !self.library.is_empty() {
            content = content.push(image_list::view(&self.library, &ctx));
        }

        let page = scrollable(content).height(Length::Fill);

        match self.library.fullscreen() {
            Some(file) => Stack::new()
                .push(page)
                .push(fullscreen::view(file, &ctx))
                .into(),
            None => page.into(),
        }
    }
}

/// Localized inline message for a rejected file.
#[must_use]
pub fn rejection_message(i18n: &I18n, rejection: &UploadRejection) -> String {
    let name = rejection.file_name();
    match rejection {
        UploadRejection::TooLarge { limit, .. } => {
            let limit = format_file_size(*limit);
            i18n.tr_with_args(rejection.i18n_key(), &[("name", name), ("limit", &limit)])
        }
        UploadRejection::NotAnImage { .. } | UploadRejection::Unreadable { .. } => {
            i18n.tr_with_args(rejection.i18n_key(), &[("name", name)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use crate::upload::{self, FileBlob};
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png() -> Vec<u8> {
        let mut bytes = Vec::new();
        RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]))
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encode");
        bytes
    }

    fn batch(files: &[(&str, Vec<u8>)]) -> UploadBatch {
        upload::accept(
            files
                .iter()
                .map(|(name, bytes)| Ok(FileBlob::from_bytes(*name, bytes.clone(), None))),
            upload::DEFAULT_MAX_FILE_SIZE,
        )
    }

    #[test]
    fn invalid_file_sets_error_and_valid_batch_clears_it() {
        let mut state = State::default();

        let added = state.apply_batch(batch(&[("a.png", png()), ("notes.txt", b"hi".to_vec())]));
        assert_eq!(added, 1);
        assert_eq!(state.error().map(UploadRejection::file_name), Some("notes.txt"));

        state.apply_batch(batch(&[("b.png", png())]));
        assert!(state.error().is_none());
        assert_eq!(state.library().len(), 2);
    }

    #[test]
    fn dismiss_error_clears_message() {
        let mut state = State::default();
        state.apply_batch(batch(&[("notes.txt", b"hi".to_vec())]));
        assert!(state.error().is_some());

        state.update(Message::DismissError);
        assert!(state.error().is_none());
    }

    #[test]
    fn view_mode_change_is_reported_once() {
        let mut state = State::new(ViewMode::Grid);
        assert!(matches!(
            state.update(Message::SetViewMode(ViewMode::Table)),
            Event::ViewModeChanged(ViewMode::Table)
        ));
        assert!(matches!(
            state.update(Message::SetViewMode(ViewMode::Table)),
            Event::None
        ));
    }

    #[test]
    fn edit_produces_registry_entry() {
        let mut state = State::default();
        state.apply_batch(batch(&[("cat.png", png())]));
        let id = state.library().files()[0].id;

        match state.update(Message::Edit(id)) {
            Event::EditRequested(entry) => assert_eq!(entry.name, "cat.png"),
            other => panic!("expected EditRequested, got {other:?}"),
        }
    }

    #[test]
    fn remove_through_message_uses_id() {
        let mut state = State::default();
        state.apply_batch(batch(&[("a.png", png()), ("b.png", png())]));
        state.update(Message::FilterChanged("b".into()));
        let id = state.library().filtered().next().map(|f| f.id).expect("match");

        state.update(Message::Remove(id));
        let names: Vec<_> = state.library().files().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["a.png"]);
    }

    #[test]
    fn rejection_message_includes_limit() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let text = rejection_message(
            &i18n,
            &UploadRejection::TooLarge {
                name: "big.png".into(),
                size: 6 * 1024 * 1024,
                limit: 5 * 1024 * 1024,
            },
        );
        assert!(text.contains("5 MB"));
        assert!(text.contains("big.png"));
    }
}
