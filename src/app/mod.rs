// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the home, upload and
//! editor screens.
//!
//! The `App` struct wires together the screens, localization, preferences
//! and notifications, and translates messages into side effects like file
//! reads, exports or config persistence.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::i18n::fluent::I18n;
use crate::ui::image_editor::State as ImageEditorState;
use crate::ui::notifications::{self, Notification};
use crate::ui::uploader::State as UploaderState;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    theme: Theme,
    uploader: UploaderState,
    image_editor: Option<ImageEditorState>,
    /// Paths of a drop still being collected.
    pending_drops: Vec<PathBuf>,
    /// Persisted application state (last open and save directories).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("uploaded_files", &self.uploader.library().len())
            .field("editing", &self.image_editor.as_ref().map(|e| e.file_name()))
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;
pub const MIN_WINDOW_WIDTH: f32 = 720.0;

/// Builds the window settings. Close requests are routed through the
/// application so previews can be revoked first.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Home,
            config: Config::default(),
            theme: Theme::Dark,
            uploader: UploaderState::default(),
            image_editor: None,
            pending_drops: Vec::new(),
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and uploads the files passed on the
    /// command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let (app_state, state_warning) = persisted_state::AppState::load();

        let mut app = App {
            i18n,
            theme: config.general.theme_mode.iced_theme(),
            uploader: UploaderState::new(config.library.view_mode.unwrap_or_default()),
            config,
            app_state,
            ..Self::default()
        };

        // Show warnings for config/state loading issues
        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }
        if let Some(key) = state_warning {
            app.notifications.push(Notification::warning(key));
        }

        let task = if flags.files.is_empty() {
            Task::none()
        } else {
            log::info!("uploading {} file(s) from the command line", flags.files.len());
            app.screen = Screen::Upload;
            update::read_files(flags.files, app.config.upload.max_file_size_bytes())
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match (&self.screen, &self.image_editor) {
            (Screen::Editor, Some(editor)) => format!("{} - {app_name}", editor.file_name()),
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            screen: &mut self.screen,
            config: &mut self.config,
            uploader: &mut self.uploader,
            image_editor: &mut self.image_editor,
            pending_drops: &mut self.pending_drops,
            persisted: &mut self.app_state,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Navbar(msg) => update::handle_navbar_message(&mut ctx, msg),
            Message::Home(msg) => update::handle_home_message(&mut ctx, msg),
            Message::Uploader(msg) => update::handle_uploader_message(&mut ctx, msg),
            Message::ImageEditor(msg) => update::handle_editor_message(&mut ctx, msg),
            Message::Notification(msg) => {
                ctx.notifications.handle_message(&msg);
                Task::none()
            }
            Message::FilesPicked(paths) => update::handle_files_picked(&mut ctx, paths),
            Message::FilesHovered => {
                ctx.uploader.set_dragging(true);
                Task::none()
            }
            Message::FilesHoveredLeft => {
                ctx.uploader.set_dragging(false);
                Task::none()
            }
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::FlushDrops => update::handle_flush_drops(&mut ctx),
            Message::FilesRead(blobs) => update::handle_files_read(&mut ctx, blobs),
            Message::EditorLoaded { name, result } => {
                update::handle_editor_loaded(&mut ctx, &name, result)
            }
            Message::SaveAsDialogResult(path) => {
                update::handle_save_as_dialog_result(&mut ctx, path)
            }
            Message::SaveCompleted(result) => update::handle_save_completed(&mut ctx, result),
            Message::EscapePressed => update::handle_escape(&mut ctx),
            Message::WindowCloseRequested(id) => update::handle_window_close(&mut ctx, id),
            Message::Tick(_) => {
                ctx.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            max_file_size: self.config.upload.max_file_size_bytes(),
            uploader: &self.uploader,
            image_editor: self.image_editor.as_ref(),
            notifications: &self.notifications,
        })
    }
}
