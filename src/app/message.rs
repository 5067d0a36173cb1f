// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::{Error, UploadRejection};
use crate::ui::home;
use crate::ui::image_editor;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::uploader;
use crate::upload::FileBlob;
use image_rs::DynamicImage;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Home(home::Message),
    Uploader(uploader::Message),
    ImageEditor(image_editor::Message),
    Notification(notifications::NotificationMessage),
    /// Result of the native multi-file picker (`None` when cancelled).
    FilesPicked(Option<Vec<PathBuf>>),
    /// Files are being dragged over the window.
    FilesHovered,
    /// The drag left the window without dropping.
    FilesHoveredLeft,
    /// One file of a drop. A multi-file drop arrives as one message per file.
    FileDropped(PathBuf),
    /// The drop settle delay elapsed; pending dropped paths form one batch.
    FlushDrops,
    /// Files read from disk, ready for validation.
    FilesRead(Vec<Result<FileBlob, UploadRejection>>),
    /// The editor source was resolved through the registry.
    EditorLoaded {
        name: String,
        result: Result<Option<Box<DynamicImage>>, Error>,
    },
    SaveAsDialogResult(Option<PathBuf>),
    /// An export finished writing, with the destination path.
    SaveCompleted(Result<PathBuf, Error>),
    /// Escape closes the fullscreen preview.
    EscapePressed,
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `zh-CN`, `en-US`).
    pub lang: Option<String>,
    /// Files uploaded at startup through the normal validation.
    pub files: Vec<PathBuf>,
    /// Optional data directory override (registry and state files).
    /// Takes precedence over `ICED_DROP_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_DROP_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
