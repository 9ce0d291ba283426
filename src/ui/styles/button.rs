// SPDX-License-Identifier: MPL-2.0
//! Button styles for the entry card and the viewer toolbar.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main call to action on the entry card.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border, elevation) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => {
            return button::Style {
                background: Some(Background::Color(palette::GRAY_200)),
                text_color: palette::GRAY_400,
                border: Border {
                    color: palette::GRAY_400,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                shadow: iced::Shadow::default(),
                snap: true,
            }
        }
        _ => (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: elevation,
        snap: true,
    }
}

/// Translucent round buttons floating over the image.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}
