// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating interaction state and update logic.
//!
//! One `State` exists per mounted viewer. The host creates it when the modal
//! opens and drops it on close, which also drops every subscription it
//! returned (keyboard shortcuts, animation ticks).

use super::canvas::{ImageCanvas, InputModel};
use super::click::ClickTracker;
use super::controls;
use super::shortcuts::Shortcut;
use crate::config::{ViewerSettings, TRANSITION_TICK_MS};
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::state::{PinchState, Transform, Transition, ViewState};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{canvas, container, Column, Stack, Text};
use iced::{event, keyboard, mouse, time, touch, window, Element, Event, Length, Point};
use iced::Subscription;
use std::time::{Duration, Instant};

/// Messages emitted by the viewer widgets and subscriptions.
#[derive(Debug, Clone)]
pub enum Message {
    Controls(controls::Message),
    PointerPressed(Point),
    PointerMoved(Point),
    PointerReleased,
    PointerLeft,
    WheelScrolled(mouse::ScrollDelta),
    FingerPressed {
        finger: touch::Finger,
        position: Point,
    },
    FingerMoved {
        finger: touch::Finger,
        position: Point,
    },
    FingerLifted {
        finger: touch::Finger,
    },
    Shortcut(Shortcut),
    Tick(Instant),
}

/// Side effects the host must carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The viewer entered (`true`) or left (`false`) fullscreen.
    FullscreenChanged(bool),
    /// The user asked to close the modal.
    Close,
}

/// Mount-time inputs supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Props {
    pub alt: String,
    /// Optional style class, kept as a label.
    pub class: Option<String>,
}

pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub image: &'a ImageData,
}

/// Everything the view needs, derived from the state.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel<'a> {
    pub transform: Transform,
    pub input: InputModel,
    /// Whether eased transitions are currently allowed.
    pub animated: bool,
    pub alt: &'a str,
    pub class: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct State {
    view: ViewState,
    pinch: PinchState,
    touch_finger: Option<touch::Finger>,
    clicks: ClickTracker,
    transition: Transition,
    displayed: Transform,
    animating: bool,
    settings: ViewerSettings,
    props: Props,
}

impl State {
    /// Mounts a fresh viewer: scale 1, no pan, windowed.
    #[must_use]
    pub fn new(props: Props, settings: ViewerSettings) -> Self {
        Self::mounted_at(props, settings, Instant::now())
    }

    #[must_use]
    pub fn mounted_at(props: Props, settings: ViewerSettings, now: Instant) -> Self {
        let view = ViewState::default();
        Self {
            view,
            pinch: PinchState::default(),
            touch_finger: None,
            clicks: ClickTracker::new(settings.double_click),
            transition: Transition::at_rest(view.transform(), now),
            displayed: view.transform(),
            animating: false,
            settings,
            props,
        }
    }

    #[must_use]
    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.view.is_fullscreen()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_pinching()
    }

    /// Transform currently on screen, which may lag the target while easing.
    #[must_use]
    pub fn displayed_transform(&self) -> Transform {
        self.displayed
    }

    #[must_use]
    pub fn view_model(&self) -> ViewModel<'_> {
        let cursor = if !self.view.scale().allows_pan() {
            mouse::Interaction::default()
        } else if self.view.is_dragging() {
            mouse::Interaction::Grabbing
        } else {
            mouse::Interaction::Grab
        };

        ViewModel {
            transform: self.displayed,
            input: InputModel {
                is_dragging: self.view.is_dragging(),
                fingers_down: self.pinch.finger_count() > 0,
                cursor,
            },
            animated: self.settings.transition.is_some() && !self.is_gesturing(),
            alt: &self.props.alt,
            class: self.props.class.as_deref(),
        }
    }

    /// Keyboard shortcuts exist only while fullscreen; ticks only while easing.
    pub fn subscription(&self) -> Subscription<Message> {
        let shortcuts = if self.view.is_fullscreen() {
            event::listen_with(fullscreen_shortcut)
        } else {
            Subscription::none()
        };

        let ticks = if self.animating {
            time::every(Duration::from_millis(TRANSITION_TICK_MS)).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([shortcuts, ticks])
    }

    /// Applies `message` and reports what the host must do. Every viewer
    /// change is local, so no task is ever produced.
    pub fn handle_message(&mut self, message: Message) -> Effect {
        self.handle_message_at(message, Instant::now())
    }

    /// Applies `message` as if it happened at `now`.
    pub fn handle_message_at(&mut self, message: Message, now: Instant) -> Effect {
        let effect = match message {
            Message::Controls(message) => self.handle_controls(message),
            Message::PointerPressed(position) => {
                self.view.on_pointer_down(position);
                if self.clicks.press(now) {
                    self.view.on_pointer_up();
                    self.view.on_double_click();
                }
                Effect::None
            }
            Message::PointerMoved(position) => {
                self.view.on_pointer_move(position);
                Effect::None
            }
            Message::PointerReleased => {
                self.view.on_pointer_up();
                Effect::None
            }
            Message::PointerLeft => {
                self.view.on_pointer_up();
                self.clicks.clear();
                Effect::None
            }
            Message::WheelScrolled(delta) => {
                self.view.on_wheel(wheel_delta_y(delta));
                Effect::None
            }
            Message::FingerPressed { finger, position } => {
                self.finger_pressed(finger, position);
                Effect::None
            }
            Message::FingerMoved { finger, position } => {
                self.finger_moved(finger, position);
                Effect::None
            }
            Message::FingerLifted { finger } => {
                self.pinch.release(finger);
                if self.touch_finger == Some(finger) {
                    self.touch_finger = None;
                    self.view.on_pointer_up();
                }
                Effect::None
            }
            Message::Shortcut(shortcut) => self.handle_shortcut(shortcut),
            Message::Tick(at) => {
                self.advance(at);
                return Effect::None;
            }
        };

        self.sync_transition(now);
        effect
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let model = self.view_model();

        let image = canvas(ImageCanvas::new(env.image, model.transform, model.input))
            .width(Length::Fill)
            .height(Length::Fill);

        let toolbar = controls::view(
            controls::ViewContext { i18n: env.i18n },
            self.view.scale(),
            self.view.is_fullscreen(),
        )
        .map(Message::Controls);

        let mut overlay = Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Center)
            .push(toolbar)
            .push(iced::widget::Space::new().height(Length::Fill));

        if !model.alt.is_empty() {
            overlay = overlay.push(
                container(Text::new(model.alt).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::container::indicator),
            );
        }

        container(Stack::new().push(image).push(overlay))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(Vertical::Center)
            .style(styles::container::backdrop)
            .into()
    }

    fn handle_controls(&mut self, message: controls::Message) -> Effect {
        match message {
            controls::Message::ZoomIn => self.view.zoom_in(),
            controls::Message::ZoomOut => self.view.zoom_out(),
            controls::Message::Reset => self.view.reset(),
            controls::Message::ToggleFullscreen => {
                let fullscreen = self.view.toggle_fullscreen();
                tracing::debug!(fullscreen, "viewer fullscreen toggled");
                return Effect::FullscreenChanged(fullscreen);
            }
            controls::Message::Close => return Effect::Close,
        }
        Effect::None
    }

    fn handle_shortcut(&mut self, shortcut: Shortcut) -> Effect {
        // The listener is dropped on exit, but a key queued just before
        // leaving fullscreen can still arrive.
        if !self.view.is_fullscreen() {
            return Effect::None;
        }

        match shortcut {
            Shortcut::ExitFullscreen => {
                if self.view.exit_fullscreen() {
                    tracing::debug!("viewer left fullscreen via keyboard");
                    return Effect::FullscreenChanged(false);
                }
            }
            Shortcut::ZoomIn => self.view.zoom_in(),
            Shortcut::ZoomOut => self.view.zoom_out(),
            Shortcut::Reset => self.view.reset(),
        }
        Effect::None
    }

    fn finger_pressed(&mut self, finger: touch::Finger, position: Point) {
        self.pinch.press(finger, position, self.view.scale());

        if self.pinch.finger_count() == 1 {
            self.touch_finger = Some(finger);
            self.view.on_pointer_down(position);
        } else {
            // A second finger turns the gesture into a pinch (or, when
            // pinching is disabled, into nothing at all).
            self.touch_finger = None;
            self.view.on_pointer_up();
        }
    }

    fn finger_moved(&mut self, finger: touch::Finger, position: Point) {
        let pinched = self.pinch.update(finger, position);

        if self.pinch.finger_count() > 1 {
            if let Some(scale) = pinched.filter(|_| self.settings.pinch_zoom) {
                self.view.set_scale(scale);
            }
        } else if self.touch_finger == Some(finger) {
            self.view.on_pointer_move(position);
        }
    }

    fn is_gesturing(&self) -> bool {
        self.view.is_dragging() || self.pinch.is_pinching()
    }

    /// Points the transition at the current target, snapping during gestures.
    fn sync_transition(&mut self, now: Instant) {
        let target = self.view.transform();
        if self.is_gesturing() {
            self.transition.snap(target, now);
        } else {
            self.transition
                .retarget(target, self.settings.transition, now);
        }
        self.advance(now);
    }

    fn advance(&mut self, now: Instant) {
        self.displayed = self.transition.value_at(now);
        self.animating = self.transition.is_running(now);
    }
}

/// Vertical wheel delta in the "positive scrolls down" convention.
///
/// Iced reports scrolling down as a negative `y`.
fn wheel_delta_y(delta: mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => -y,
    }
}

fn fullscreen_shortcut(
    event: Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            Shortcut::from_key(&key).map(Message::Shortcut)
        }
        _ => None,
    }
}
