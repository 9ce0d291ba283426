// SPDX-License-Identifier: MPL-2.0
//! Viewer toolbar: zoom buttons, zoom readout, fullscreen toggle and close.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::state::Scale;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, tooltip, Row, Text},
    Element, Length,
};

#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ZoomIn,
    ZoomOut,
    Reset,
    ToggleFullscreen,
    Close,
}

pub fn view<'a>(ctx: ViewContext<'a>, scale: Scale, is_fullscreen: bool) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let zoom_label = Text::new(i18n.tr_with_args(
        "viewer-zoom-percent",
        &[("percent", scale.percent().to_string())],
    ))
    .size(typography::BODY)
    .width(Length::Fixed(sizing::ZOOM_LABEL_WIDTH))
    .align_x(Horizontal::Center);

    let fullscreen_key = if is_fullscreen {
        "viewer-exit-fullscreen-tooltip"
    } else {
        "viewer-enter-fullscreen-tooltip"
    };

    let zoom_out = (!scale.is_min()).then_some(Message::ZoomOut);
    let zoom_in = (!scale.is_max()).then_some(Message::ZoomIn);

    let toolbar = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(tool(i18n, "−", "viewer-zoom-out-tooltip", zoom_out))
        .push(zoom_label)
        .push(tool(i18n, "+", "viewer-zoom-in-tooltip", zoom_in))
        .push(tool(i18n, "1:1", "viewer-reset-tooltip", Some(Message::Reset)))
        .push(tool(i18n, "⛶", fullscreen_key, Some(Message::ToggleFullscreen)))
        .push(tool(i18n, "✕", "viewer-close-tooltip", Some(Message::Close)));

    container(toolbar)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::indicator)
        .into()
}

/// Round overlay button; disabled when `on_press` is `None`.
fn tool<'a>(
    i18n: &I18n,
    glyph: &'a str,
    tooltip_key: &str,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let face = button(
        Text::new(glyph)
            .size(typography::BODY)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(Length::Fixed(sizing::BUTTON_HEIGHT))
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .on_press_maybe(on_press)
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ));

    tooltip(
        face,
        Text::new(i18n.tr(tooltip_key)).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .style(styles::container::indicator)
    .into()
}
