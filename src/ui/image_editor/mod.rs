// SPDX-License-Identifier: MPL-2.0
//! Image editor: rotate, flip, zoom and tone adjustments over a decoded copy
//! of the chosen file.
//!
//! This module follows the "state down, messages up" pattern used by the
//! upload screen. The editor never modifies the uploaded file; saving renders
//! the transform at native resolution into a new JPEG.

mod messages;
mod view;


use crate::domain::editing::TransformState;
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::media::{self, Bounds, ImageData};
use crate::registry;
use image_rs::DynamicImage;
use iced::Element;
use std::sync::Arc;

pub use messages::{Event, Message, SidebarMessage, ToolbarMessage};

/// Contextual data needed to render the editor view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Where the editor is in resolving its source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    /// The registry has no entry for the name, or its preview could not be
    /// decoded.
    Missing,
}

/// Everything a background export needs, detached from the editor state.
#[derive(Debug, Clone)]
pub struct ExportJob {
    pub image: Arc<DynamicImage>,
    pub transform: TransformState,
    pub file_name: String,
}

/// Local UI state for the editor screen.
#[derive(Debug)]
pub struct State {
    file_name: String,
    load: LoadState,
    source: Option<Arc<DynamicImage>>,
    transform: TransformState,
    preview: Option<ImageData>,
    bounds: Bounds,
    is_saving: bool,
}

impl State {
    /// Editor waiting for `file_name` to be resolved through the registry.
    #[must_use]
    pub fn loading(file_name: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            file_name: file_name.into(),
            load: LoadState::Loading,
            source: None,
            transform: TransformState::default(),
            preview: None,
            bounds,
            is_saving: false,
        }
    }

    /// Installs the decoded source and renders the first preview.
    pub fn set_source(&mut self, image: DynamicImage) {
        self.source = Some(Arc::new(image));
        self.transform.reset();
        self.load = LoadState::Ready;
        self.rerender();
    }

    pub fn set_missing(&mut self) {
        self.source = None;
        self.preview = None;
        self.load = LoadState::Missing;
    }

    pub fn set_saving(&mut self, saving: bool) {
        self.is_saving = saving;
    }

    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Toolbar(ToolbarMessage::Back) => Event::Exit,
            Message::Sidebar(msg) => self.handle_sidebar_message(msg),
        }
    }

    fn handle_sidebar_message(&mut self, message: SidebarMessage) -> Event {
        if self.load != LoadState::Ready {
            return Event::None;
        }

        let before = self.transform;
        match message {
            SidebarMessage::RotateLeft => self.transform.rotate_left(),
            SidebarMessage::RotateRight => self.transform.rotate_right(),
            SidebarMessage::FlipHorizontal => self.transform.flip_horizontal(),
            SidebarMessage::FlipVertical => self.transform.flip_vertical(),
            SidebarMessage::ZoomIn => self.transform.zoom_in(),
            SidebarMessage::ZoomOut => self.transform.zoom_out(),
            SidebarMessage::BrightnessChanged(value) => self.transform.set_brightness(value),
            SidebarMessage::ContrastChanged(value) => self.transform.set_contrast(value),
            SidebarMessage::Reset => self.transform.reset(),
            SidebarMessage::Save if !self.is_saving => return Event::SaveRequested,
            SidebarMessage::SaveAs if !self.is_saving => return Event::SaveAsRequested,
            SidebarMessage::Save | SidebarMessage::SaveAs => return Event::None,
        }

        if self.transform != before {
            self.rerender();
        }
        Event::None
    }

    fn rerender(&mut self) {
        let Some(source) = &self.source else {
            return;
        };
        let rendered = media::render(source, &self.transform, Some(self.bounds));
        log::debug!(
            "rendered {} preview at {}x{} ({:?})",
            self.file_name,
            rendered.width(),
            rendered.height(),
            self.transform
        );
        self.preview = Some(ImageData::from_rgba(rendered));
    }

    /// Snapshot for a background export, `None` until the source is loaded.
    #[must_use]
    pub fn export_job(&self) -> Option<ExportJob> {
        self.source.as_ref().map(|image| ExportJob {
            image: Arc::clone(image),
            transform: self.transform,
            file_name: media::export_file_name(&self.file_name),
        })
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn load_state(&self) -> LoadState {
        self.load
    }

    #[must_use]
    pub fn transform(&self) -> &TransformState {
        &self.transform
    }

    #[must_use]
    pub fn preview(&self) -> Option<&ImageData> {
        self.preview.as_ref()
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        view::render(self, &ctx)
    }
}

impl ExportJob {
    /// Encodes the export. Runs off the UI thread.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] when JPEG encoding fails.
    pub fn encode(&self, quality: u8) -> Result<Vec<u8>> {
        media::export(&self.image, &self.transform, quality)
    }
}

/// Resolves `file_name` through the registry and decodes its preview.
///
/// Returns `Ok(None)` when the registry has no entry with that name.
///
/// # Errors
///
/// Returns [`Error::Storage`] when the stored preview cannot be read and
/// [`Error::Decode`] when its bytes are not a decodable image.
pub fn load_source(file_name: &str) -> Result<Option<DynamicImage>> {
    load_source_from(file_name, None)
}

/// [`load_source`] against an explicit registry directory.
///
/// # Errors
///
/// See [`load_source`].
pub fn load_source_from(
    file_name: &str,
    registry_dir: Option<std::path::PathBuf>,
) -> Result<Option<DynamicImage>> {
    let Some(entry) = registry::get_file_by_name_with_override(file_name, registry_dir) else {
        log::warn!("no registry entry for {file_name}");
        return Ok(None);
    };

    let bytes = registry::resolve_preview(&entry.preview)?;
    let mime = media::detect_mime(&entry.name, &bytes);
    if !media::mime::is_image_mime(&mime) {
        return Err(Error::Decode(format!("{} is not an image ({mime})", entry.name)));
    }
    media::decode(&bytes, &mime).map(Some)
}
