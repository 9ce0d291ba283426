// SPDX-License-Identifier: MPL-2.0
//! Entry card shown on the wall: thumbnail, alt text and the entry actions.

use crate::domain::entry::JournalEntry;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, image, mouse_area, Column, Row, Text};
use iced::{alignment::Horizontal, mouse, Color, ContentFit, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Open,
    Share,
    Submit,
}

/// Loading state of the entry image as the card sees it.
#[derive(Debug, Clone, Copy)]
pub enum CardImage<'a> {
    Loading,
    Ready(&'a ImageData),
    Failed(&'a Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// One-line feedback under the actions, already localized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    fn color(&self) -> Option<Color> {
        match self.kind {
            StatusKind::Info => None,
            StatusKind::Success => Some(palette::SUCCESS_500),
            StatusKind::Error => Some(palette::ERROR_500),
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub entry: &'a JournalEntry,
    pub image: CardImage<'a>,
    pub status: Option<&'a StatusLine>,
    pub submitting: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let mut header = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("card-title")).size(typography::TITLE_SM));
    if let Some(wall) = &ctx.entry.wall {
        header = header.push(
            Text::new(i18n.tr_with_args("card-wall-label", &[("wall", wall.to_string())]))
                .size(typography::CAPTION),
        );
    }

    let alt: Element<'_, Message> = if ctx.entry.has_alt() {
        Text::new(ctx.entry.alt.as_str()).size(typography::BODY).into()
    } else {
        Text::new(i18n.tr("card-no-alt"))
            .size(typography::BODY)
            .color(palette::GRAY_400)
            .into()
    };

    let is_ready = matches!(ctx.image, CardImage::Ready(_));
    let actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(i18n.tr("card-open-button")))
                .on_press_maybe(is_ready.then_some(Message::Open))
                .style(styles::button::primary),
        )
        .push(button(Text::new(i18n.tr("card-share-button"))).on_press(Message::Share))
        .push(
            button(Text::new(i18n.tr(if ctx.submitting {
                "card-submitting-button"
            } else {
                "card-submit-button"
            })))
            .on_press_maybe((!ctx.submitting).then_some(Message::Submit)),
        );

    let mut body = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(thumbnail(i18n, ctx.image))
        .push(alt)
        .push(actions);

    if let Some(status) = ctx.status {
        let mut line = Text::new(status.text.as_str()).size(typography::CAPTION);
        if let Some(color) = status.color() {
            line = line.color(color);
        }
        body = body.push(line);
    }

    container(body)
        .padding(spacing::LG)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(styles::container::panel)
        .into()
}

fn thumbnail<'a>(i18n: &I18n, state: CardImage<'a>) -> Element<'a, Message> {
    let placeholder = |text: String, color: Option<Color>| -> Element<'a, Message> {
        let mut label = Text::new(text).size(typography::BODY);
        if let Some(color) = color {
            label = label.color(color);
        }
        container(label)
            .center_x(Length::Fill)
            .center_y(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
            .into()
    };

    match state {
        CardImage::Loading => placeholder(i18n.tr("card-loading"), None),
        CardImage::Failed(error) => placeholder(
            format!("{}\n{}", i18n.tr("card-load-failed"), i18n.tr(error.i18n_key())),
            Some(palette::ERROR_500),
        ),
        CardImage::Ready(data) => mouse_area(
            container(
                image(data.handle.clone())
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill)
                    .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT)),
            )
            .align_x(Horizontal::Center),
        )
        .on_press(Message::Open)
        .interaction(mouse::Interaction::ZoomIn)
        .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::{ImageSource, WallCode};

    fn entry() -> JournalEntry {
        JournalEntry::new(
            ImageSource::parse("https://walls.example/p/3.jpg"),
            "Week 12 doodles",
            WallCode::new("river-st"),
        )
    }

    #[test]
    fn card_renders_in_every_image_state() {
        let i18n = I18n::default();
        let entry = entry();
        let image = ImageData::from_rgba(1, 1, vec![0, 0, 0, 255]);
        let error = Error::Network("timeout".into());
        let status = StatusLine::success("copied");

        for state in [
            CardImage::Loading,
            CardImage::Ready(&image),
            CardImage::Failed(&error),
        ] {
            let _element = view(ViewContext {
                i18n: &i18n,
                entry: &entry,
                image: state,
                status: Some(&status),
                submitting: false,
            });
        }
    }

    #[test]
    fn status_colors_follow_kind() {
        assert_eq!(StatusLine::info("x").color(), None);
        assert_eq!(StatusLine::success("x").color(), Some(palette::SUCCESS_500));
        assert_eq!(StatusLine::error("x").color(), Some(palette::ERROR_500));
    }
}
