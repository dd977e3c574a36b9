// SPDX-License-Identifier: MPL-2.0
//! Dialog for picking which lecture flyer to download.
//!
//! The dialog floats over the page on a dimmed backdrop. Clicking the
//! backdrop or the close button dismisses it; clicking inside the card does
//! not.

use crate::content::Flyer;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::layout::Layout;
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, mouse_area, opaque, Column, Container, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layout: Layout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Choose(Flyer),
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Save the chosen flyer; the dialog closes as well.
    Download(Flyer),
    Closed,
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Choose(flyer) => Event::Download(flyer),
        Message::Close => Event::Closed,
    }
}

/// The dialog card, centered on a full-window backdrop.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("flyer-modal-title"))
        .size(typography::TITLE_MD)
        .width(Length::Fill)
        .align_x(ctx.layout.start());

    let close = button(Text::new("✕").size(typography::BODY))
        .padding(spacing::XXS)
        .style(styles::button::link)
        .on_press(Message::Close);

    let header = ctx.layout.row(vec![title.into(), close.into()]);

    let choices = Flyer::ALL.iter().fold(
        Column::new().spacing(spacing::SM),
        |column, &flyer| {
            column.push(
                button(
                    Text::new(ctx.i18n.tr(flyer.label_key()))
                        .width(Length::Fill)
                        .align_x(Horizontal::Center),
                )
                .width(Length::Fill)
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::Choose(flyer)),
            )
        },
    );

    let dismiss = button(Text::new(ctx.i18n.tr("flyer-modal-close")).size(typography::BODY))
        .style(styles::button::link)
        .on_press(Message::Close);

    let card = Container::new(
        Column::new()
            .push(header)
            .push(choices)
            .push(dismiss)
            .spacing(spacing::LG)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fixed(sizing::MODAL_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::modal);

    let backdrop = Container::new(opaque(card))
        .center(Length::Fill)
        .style(styles::container::backdrop);

    opaque(mouse_area(backdrop).on_press(Message::Close))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    #[test]
    fn choosing_a_flyer_requests_download() {
        for flyer in Flyer::ALL {
            assert_eq!(update(Message::Choose(flyer)), Event::Download(flyer));
        }
        assert_eq!(update(Message::Close), Event::Closed);
    }

    #[test]
    fn modal_view_renders_in_both_locales() {
        for locale in Locale::ALL {
            let i18n = I18n::new(locale);
            let _element = view(ViewContext {
                i18n: &i18n,
                layout: Layout {
                    direction: locale.direction(),
                    compact: false,
                },
            });
        }
    }
}
