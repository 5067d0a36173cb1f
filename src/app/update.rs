// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component `update` functions return events; the handlers here turn those
//! events into side effects (dialogs, file IO, persistence, notifications)
//! and screen changes.

use super::config::{self, Config};
use super::paths;
use super::persisted_state::AppState;
use super::{Message, Screen};
use crate::error::{Error, UploadRejection};
use crate::i18n::fluent::I18n;
use crate::media::{export, Bounds};
use crate::registry::{self, StoredFile};
use crate::ui::home::{self, Event as HomeEvent};
use crate::ui::image_editor::{self, Event as ImageEditorEvent, State as ImageEditorState};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::uploader::{self, Event as UploaderEvent, State as UploaderState};
use crate::upload::{self, FileBlob};
use iced::{window, Task};
use std::path::PathBuf;
use std::time::Duration;

/// Files of one drop arrive as separate events; they are collected for this
/// long before being validated as a single batch.
pub const DROP_SETTLE_DELAY: Duration = Duration::from_millis(50);

/// Extensions offered by the upload picker. Content is still sniffed after
/// reading, so this only narrows the dialog.
const PICKER_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff", "ico", "svg",
];

/// Runs decoding or encoding on the blocking pool so async workers stay free.
async fn run_blocking<T, F>(work: F) -> Result<T, Error>
where
    F: FnOnce() -> Result<T, Error> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|err| Error::Io(err.to_string()))?
}

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a mut Screen,
    pub config: &'a mut Config,
    pub uploader: &'a mut UploaderState,
    pub image_editor: &'a mut Option<ImageEditorState>,
    pub pending_drops: &'a mut Vec<PathBuf>,
    pub persisted: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
}

impl UpdateContext<'_> {
    fn switch_screen(&mut self, target: Screen) {
        if *self.screen == Screen::Editor && target != Screen::Editor {
            *self.image_editor = None;
        }
        *self.screen = target;
    }

    fn persist_state(&mut self) {
        if let Some(key) = self.persisted.save() {
            self.notifications.push(Notification::warning(key));
        }
    }
}

/// Handles navbar messages.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::OpenHome => ctx.switch_screen(Screen::Home),
        NavbarEvent::OpenUpload => ctx.switch_screen(Screen::Upload),
    }
    Task::none()
}

/// Handles landing screen messages.
pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: home::Message) -> Task<Message> {
    match home::update(message) {
        HomeEvent::OpenUpload => ctx.switch_screen(Screen::Upload),
    }
    Task::none()
}

/// Handles upload screen messages.
pub fn handle_uploader_message(
    ctx: &mut UpdateContext<'_>,
    message: uploader::Message,
) -> Task<Message> {
    match ctx.uploader.update(message) {
        UploaderEvent::None => Task::none(),
        UploaderEvent::PickFilesRequested => {
            handle_open_files_dialog(ctx.persisted.last_open_directory.clone(), ctx.i18n)
        }
        UploaderEvent::ViewModeChanged(mode) => {
            ctx.config.library.view_mode = Some(mode);
            if let Err(err) = config::save(ctx.config) {
                log::warn!("cannot save settings: {err}");
                ctx.notifications
                    .push(Notification::warning("notification-config-save-error"));
            }
            Task::none()
        }
        UploaderEvent::EditRequested(entry) => open_editor(ctx, entry),
    }
}

/// Opens the multi-file picker.
pub fn handle_open_files_dialog(last_directory: Option<PathBuf>, i18n: &I18n) -> Task<Message> {
    let filter_name = i18n.tr("upload-dialog-filter");
    Task::perform(
        async move {
            let mut dialog =
                rfd::AsyncFileDialog::new().add_filter(filter_name, PICKER_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_files().await.map(|handles| {
                handles
                    .into_iter()
                    .map(|h| h.path().to_path_buf())
                    .collect()
            })
        },
        Message::FilesPicked,
    )
}

/// Handles the result of the picker. Cancelling leaves everything unchanged.
pub fn handle_files_picked(
    ctx: &mut UpdateContext<'_>,
    paths: Option<Vec<PathBuf>>,
) -> Task<Message> {
    let Some(paths) = paths.filter(|paths| !paths.is_empty()) else {
        return Task::none();
    };

    if let Some(first) = paths.first() {
        ctx.persisted.remember_open_location(first);
        ctx.persist_state();
    }
    read_files(paths, ctx.config.upload.max_file_size_bytes())
}

/// Reads files from disk in the background.
pub fn read_files(paths: Vec<PathBuf>, max_size: u64) -> Task<Message> {
    log::debug!("reading {} file(s)", paths.len());
    Task::perform(upload::read_blobs(paths, max_size), Message::FilesRead)
}

/// Starts collecting a drop. Only the first path of a drop schedules the flush.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    ctx.uploader.set_dragging(false);
    ctx.pending_drops.push(path);

    if ctx.pending_drops.len() == 1 {
        Task::perform(
            async { tokio::time::sleep(DROP_SETTLE_DELAY).await },
            |()| Message::FlushDrops,
        )
    } else {
        Task::none()
    }
}

/// Validates the collected drop as one batch.
pub fn handle_flush_drops(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let paths = std::mem::take(ctx.pending_drops);
    if paths.is_empty() {
        return Task::none();
    }
    read_files(paths, ctx.config.upload.max_file_size_bytes())
}

/// Validates freshly read files and adds the accepted ones to the library.
pub fn handle_files_read(
    ctx: &mut UpdateContext<'_>,
    blobs: Vec<Result<FileBlob, UploadRejection>>,
) -> Task<Message> {
    let batch = upload::accept(blobs, ctx.config.upload.max_file_size_bytes());
    let rejected = batch.rejections.len();
    let added = ctx.uploader.apply_batch(batch);

    log::info!("upload batch: {added} accepted, {rejected} rejected");
    if added > 0 {
        ctx.notifications.push(
            Notification::success("notification-files-added").with_arg("count", added.to_string()),
        );
    }
    if *ctx.screen == Screen::Home {
        ctx.switch_screen(Screen::Upload);
    }
    Task::none()
}

/// Stores the registry entry and opens the editor on it.
fn open_editor(ctx: &mut UpdateContext<'_>, entry: StoredFile) -> Task<Message> {
    let name = entry.name.clone();
    registry::upsert(entry);

    let (max_width, max_height) = ctx.config.editor.preview_bounds();
    *ctx.image_editor = Some(ImageEditorState::loading(
        name.clone(),
        Bounds::new(max_width, max_height),
    ));
    ctx.switch_screen(Screen::Editor);

    Task::perform(
        async move {
            let lookup = name.clone();
            let result = run_blocking(move || image_editor::load_source(&lookup))
                .await
                .map(|image| image.map(Box::new));
            (name, result)
        },
        |(name, result)| Message::EditorLoaded { name, result },
    )
}

/// Installs the resolved editor source, ignoring results for an editor that
/// was closed or switched to another file meanwhile.
pub fn handle_editor_loaded(
    ctx: &mut UpdateContext<'_>,
    name: &str,
    result: Result<Option<Box<image_rs::DynamicImage>>, Error>,
) -> Task<Message> {
    let Some(editor) = ctx.image_editor.as_mut().filter(|e| e.file_name() == name) else {
        return Task::none();
    };

    match result {
        Ok(Some(image)) => editor.set_source(*image),
        Ok(None) => editor.set_missing(),
        Err(err) => {
            log::warn!("cannot load {name} for editing: {err}");
            editor.set_missing();
            ctx.notifications
                .push(Notification::error("notification-load-error"));
        }
    }
    Task::none()
}

/// Handles image editor messages.
pub fn handle_editor_message(
    ctx: &mut UpdateContext<'_>,
    message: image_editor::Message,
) -> Task<Message> {
    let Some(editor) = ctx.image_editor.as_mut() else {
        return Task::none();
    };

    match editor.update(message) {
        ImageEditorEvent::None => Task::none(),
        ImageEditorEvent::Exit => {
            ctx.switch_screen(Screen::Upload);
            Task::none()
        }
        ImageEditorEvent::SaveRequested => handle_save(ctx),
        ImageEditorEvent::SaveAsRequested => handle_save_as_dialog(ctx),
    }
}

/// Writes the export into the downloads directory.
fn handle_save(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(editor) = ctx.image_editor.as_mut() else {
        return Task::none();
    };
    let Some(job) = editor.export_job() else {
        return Task::none();
    };
    let Some(dir) = paths::get_downloads_dir(ctx.persisted.last_save_directory.as_deref()) else {
        log::warn!("no downloads directory available");
        ctx.notifications
            .push(Notification::error("notification-save-error"));
        return Task::none();
    };

    editor.set_saving(true);
    let quality = ctx.config.editor.export_quality();
    Task::perform(
        run_blocking(move || {
            let bytes = job.encode(quality)?;
            export::save_into_dir(&dir, &job.file_name, &bytes)
        }),
        Message::SaveCompleted,
    )
}

/// Opens the native save dialog with the export name pre-filled.
fn handle_save_as_dialog(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(job) = ctx.image_editor.as_ref().and_then(ImageEditorState::export_job) else {
        return Task::none();
    };
    let last_save_directory = ctx.persisted.last_save_directory.clone();
    let filter_name = ctx.i18n.tr("editor-save-dialog-filter");

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_file_name(&job.file_name)
                .add_filter(filter_name, &["jpg", "jpeg"]);

            if let Some(dir) = last_save_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.save_file().await.map(|h| h.path().to_path_buf())
        },
        Message::SaveAsDialogResult,
    )
}

/// Encodes and writes to the path chosen in the save dialog.
pub fn handle_save_as_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };
    let Some(editor) = ctx.image_editor.as_mut() else {
        return Task::none();
    };
    let Some(job) = editor.export_job() else {
        return Task::none();
    };

    editor.set_saving(true);
    let quality = ctx.config.editor.export_quality();
    Task::perform(
        run_blocking(move || {
            let bytes = job.encode(quality)?;
            export::save_to_path(&path, &bytes)?;
            Ok(path)
        }),
        Message::SaveCompleted,
    )
}

/// Reports the save result and remembers the directory on success.
pub fn handle_save_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<PathBuf, Error>,
) -> Task<Message> {
    if let Some(editor) = ctx.image_editor.as_mut() {
        editor.set_saving(false);
    }

    match result {
        Ok(path) => {
            log::info!("saved edited image to {}", path.display());
            ctx.persisted.remember_save_location(&path);
            ctx.persist_state();
            ctx.notifications.push(
                Notification::success("editor-saved-to")
                    .with_arg("path", path.display().to_string()),
            );
        }
        Err(err) => {
            log::error!("cannot save edited image: {err}");
            ctx.notifications
                .push(Notification::error("notification-save-error"));
        }
    }
    Task::none()
}

/// Escape closes the fullscreen preview.
pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if *ctx.screen == Screen::Upload {
        ctx.uploader.update(uploader::Message::CloseFullscreen);
    }
    Task::none()
}

/// Revokes every preview before the window goes away.
pub fn handle_window_close(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    log::info!("closing, revoking {} preview(s)", ctx.uploader.library().len());
    ctx.uploader.clear();
    *ctx.image_editor = None;
    window::close(id)
}
