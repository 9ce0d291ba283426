// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and launch flags.

use crate::application::port::EntryError;
use crate::domain::entry::SubmissionReceipt;
use crate::error::Error;
use crate::media::ImageData;
use crate::ui::entry_card;
use crate::ui::viewer::component;
use iced::window;

/// Top-level messages consumed by [`super::App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    ImageLoaded(Result<ImageData, Error>),
    Card(entry_card::Message),
    Viewer(component::Message),
    SubmitFinished(Result<SubmissionReceipt, EntryError>),
    /// First event seen from the main window, used to learn its id.
    WindowSeen(window::Id),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Path or `http(s)` URL of the page photo.
    pub source: String,
    /// Description of the page.
    pub alt: Option<String>,
    /// Wall code; falls back to `[wall] code` from the config file.
    pub wall: Option<String>,
    /// Takes precedence over `JOURNAL_WALL_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Takes precedence over `JOURNAL_WALL_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
