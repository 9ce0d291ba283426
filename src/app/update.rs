// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application root.
//!
//! Card actions go through the injected [`EntryActions`]; viewer effects are
//! turned into window mode changes.

use super::{App, ImageState, Message};
use crate::application::port::EntryError;
use crate::domain::entry::SubmissionReceipt;
use crate::ui::entry_card::{self, StatusLine};
use crate::ui::viewer::component::{self, Effect, Props};
use iced::{window, Task};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ImageLoaded(Ok(data)) => {
                tracing::debug!(width = data.width, height = data.height, "image loaded");
                self.image = ImageState::Ready(data);
                Task::none()
            }
            Message::ImageLoaded(Err(err)) => {
                tracing::warn!(error = %err, source = %self.entry.source, "failed to load image");
                self.image = ImageState::Failed(err);
                // A viewer without pixels has nothing to show.
                self.close_viewer()
            }
            Message::Card(message) => self.handle_card_message(message),
            Message::Viewer(message) => self.handle_viewer_message(message),
            Message::SubmitFinished(result) => {
                self.handle_submit_finished(result);
                Task::none()
            }
            Message::WindowSeen(id) => {
                if self.window_id.is_none() {
                    tracing::debug!(?id, "main window identified");
                    self.window_id = Some(id);
                }
                Task::none()
            }
        }
    }

    fn handle_card_message(&mut self, message: entry_card::Message) -> Task<Message> {
        match message {
            entry_card::Message::Open => {
                self.open_viewer();
                Task::none()
            }
            entry_card::Message::Share => self.share(),
            entry_card::Message::Submit => self.submit(),
        }
    }

    fn open_viewer(&mut self) {
        if self.viewer.is_some() || self.image.ready().is_none() {
            return;
        }
        let props = Props {
            alt: self.entry.alt.clone(),
            class: None,
        };
        self.viewer = Some(component::State::new(props, self.viewer_settings));
        tracing::debug!("viewer opened");
    }

    fn close_viewer(&mut self) -> Task<Message> {
        if self.viewer.take().is_some() {
            tracing::debug!("viewer closed");
        }
        self.apply_window_mode(false)
    }

    fn handle_viewer_message(&mut self, message: component::Message) -> Task<Message> {
        let Some(viewer) = self.viewer.as_mut() else {
            return Task::none();
        };

        match viewer.handle_message(message) {
            Effect::None => Task::none(),
            Effect::FullscreenChanged(fullscreen) => self.apply_window_mode(fullscreen),
            Effect::Close => self.close_viewer(),
        }
    }

    /// Requests `fullscreen` from the runtime when it differs from the
    /// current window mode and the window id is known.
    fn apply_window_mode(&mut self, fullscreen: bool) -> Task<Message> {
        if self.fullscreen == fullscreen {
            return Task::none();
        }
        let Some(id) = self.window_id else {
            tracing::debug!(fullscreen, "window id unknown; mode change skipped");
            return Task::none();
        };

        self.fullscreen = fullscreen;
        let mode = if fullscreen {
            window::Mode::Fullscreen
        } else {
            window::Mode::Windowed
        };
        window::set_mode(id, mode)
    }

    fn share(&mut self) -> Task<Message> {
        match self.actions.share(&self.entry) {
            Ok(link) => {
                tracing::info!(link = %link, "share link created");
                self.status = Some(StatusLine::success(
                    self.i18n
                        .tr_with_args("status-link-copied", &[("link", link.to_string())]),
                ));
                iced::clipboard::write(link.0)
            }
            Err(err) => {
                tracing::warn!(error = %err, "share failed");
                self.status = Some(StatusLine::error(self.i18n.tr(err.i18n_key())));
                Task::none()
            }
        }
    }

    fn submit(&mut self) -> Task<Message> {
        if self.submitting {
            return Task::none();
        }
        self.submitting = true;
        self.status = Some(StatusLine::info(self.i18n.tr("status-submitting")));

        let actions = self.actions.clone();
        let entry = self.entry.clone();
        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || actions.submit(&entry))
                    .await
                    .unwrap_or_else(|err| Err(EntryError::Storage(err.to_string())))
            },
            Message::SubmitFinished,
        )
    }

    fn handle_submit_finished(&mut self, result: Result<SubmissionReceipt, EntryError>) {
        self.submitting = false;
        self.status = Some(match result {
            Ok(receipt) => {
                tracing::info!(
                    id = %receipt.id,
                    location = %receipt.location.display(),
                    "entry submitted"
                );
                StatusLine::success(self.i18n.tr("status-submitted"))
            }
            Err(err) => {
                tracing::warn!(error = %err, "submission failed");
                StatusLine::error(self.i18n.tr(err.i18n_key()))
            }
        });
    }
}
