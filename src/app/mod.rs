// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the entry card and the
//! viewer modal.
//!
//! The `App` owns the entry being shown, its image load state and, while the
//! modal is open, one mounted viewer. Viewer effects are translated here into
//! window-level side effects (fullscreen mode), and card actions are routed
//! through the injected [`EntryActions`].

pub mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::EntryActions;
use crate::config::{self, ViewerSettings};
use crate::domain::entry::{ImageSource, JournalEntry, WallCode};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::infrastructure::LocalOutbox;
use crate::media::{self, ImageData};
use crate::ui::entry_card::{CardImage, StatusLine};
use crate::ui::viewer::component;
use iced::{window, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Load state of the entry's page photo.
#[derive(Debug, Clone)]
pub enum ImageState {
    Loading,
    Ready(ImageData),
    Failed(Error),
}

impl ImageState {
    #[must_use]
    pub fn ready(&self) -> Option<&ImageData> {
        match self {
            ImageState::Ready(data) => Some(data),
            _ => None,
        }
    }

    fn as_card(&self) -> CardImage<'_> {
        match self {
            ImageState::Loading => CardImage::Loading,
            ImageState::Ready(data) => CardImage::Ready(data),
            ImageState::Failed(err) => CardImage::Failed(err),
        }
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    entry: JournalEntry,
    image: ImageState,
    /// Mounted viewer; `None` while the modal is closed.
    viewer: Option<component::State>,
    viewer_settings: ViewerSettings,
    actions: Arc<dyn EntryActions>,
    status: Option<StatusLine>,
    submitting: bool,
    /// Window mode last requested from the runtime.
    fullscreen: bool,
    window_id: Option<window::Id>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("entry", &self.entry)
            .field("viewer_open", &self.viewer.is_some())
            .field("fullscreen", &self.fullscreen)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let actions: Arc<dyn EntryActions> = Arc::new(default_outbox());

    // iced calls `boot` through `Fn`, so hand it clones.
    let boot = move || App::new(flags.clone(), Arc::clone(&actions));

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn default_outbox() -> LocalOutbox {
    let data_dir = paths::get_app_data_dir().unwrap_or_else(|| {
        tracing::warn!("no data directory available; using the working directory");
        PathBuf::from(".")
    });
    tracing::debug!(data_dir = %data_dir.display(), "submission outbox ready");
    LocalOutbox::new(data_dir)
}

impl App {
    /// Reads config, resolves the entry from `flags` and starts loading its
    /// image.
    pub fn new(flags: Flags, actions: Arc<dyn EntryActions>) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let wall = flags
            .wall
            .as_deref()
            .or(config.wall.code.as_deref())
            .and_then(WallCode::new);
        let entry = JournalEntry::new(
            ImageSource::parse(&flags.source),
            flags.alt.unwrap_or_default(),
            wall,
        );
        tracing::info!(source = %entry.source, wall = ?entry.wall, "showing entry");

        let mut app = Self::with_parts(i18n, entry, config.viewer.settings(), actions);
        if let Some(key) = config_warning {
            app.status = Some(StatusLine::error(app.i18n.tr(&key)));
        }

        let task = Task::perform(media::load(app.entry.source.clone()), Message::ImageLoaded);
        (app, task)
    }

    /// Builds an app with the image still loading and no I/O performed.
    pub fn with_parts(
        i18n: I18n,
        entry: JournalEntry,
        viewer_settings: ViewerSettings,
        actions: Arc<dyn EntryActions>,
    ) -> Self {
        Self {
            i18n,
            entry,
            image: ImageState::Loading,
            viewer: None,
            viewer_settings,
            actions,
            status: None,
            submitting: false,
            fullscreen: false,
            window_id: None,
        }
    }

    #[must_use]
    pub fn entry(&self) -> &JournalEntry {
        &self.entry
    }

    #[must_use]
    pub fn image(&self) -> &ImageState {
        &self.image
    }

    #[must_use]
    pub fn viewer(&self) -> Option<&component::State> {
        self.viewer.as_ref()
    }

    #[must_use]
    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn is_window_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn title(&self) -> String {
        if self.entry.has_alt() {
            self.i18n.tr_with_args(
                "window-title-with-alt",
                &[("alt", self.entry.alt.trim().to_string())],
            )
        } else {
            self.i18n.tr("window-title")
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}
