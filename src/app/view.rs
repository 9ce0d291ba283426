// SPDX-License-Identifier: MPL-2.0
//! Root view: the entry card, with the viewer modal stacked above it while
//! open.

use super::{App, Message};
use crate::ui::entry_card;
use crate::ui::viewer::component::ViewEnv;
use iced::widget::{container, Stack};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let card = entry_card::view(entry_card::ViewContext {
            i18n: &self.i18n,
            entry: &self.entry,
            image: self.image.as_card(),
            status: self.status.as_ref(),
            submitting: self.submitting,
        })
        .map(Message::Card);

        let wall = container(card).center(Length::Fill);

        let modal = self.viewer.as_ref().zip(self.image.ready()).map(|(viewer, image)| {
            viewer
                .view(ViewEnv {
                    i18n: &self.i18n,
                    image,
                })
                .map(Message::Viewer)
        });

        match modal {
            Some(modal) => Stack::new().push(wall).push(modal).into(),
            None => wall.into(),
        }
    }
}
