// SPDX-License-Identifier: MPL-2.0
//! Rotating testimonial card.

use crate::content::{Testimonial, TESTIMONIALS, TESTIMONIAL_STARS};
use crate::i18n::I18n;
use crate::ui::carousel::{self, Message};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::layout::Layout;
use crate::ui::state::Rotator;
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};
use std::time::Duration;

/// Rotator over the fixed testimonial list.
pub fn rotator(interval: Duration) -> Option<Rotator<Testimonial>> {
    Rotator::new(TESTIMONIALS.to_vec(), interval)
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub rotator: &'a Rotator<Testimonial>,
    pub layout: Layout,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let testimonial = ctx.rotator.current();

    let stars = Text::new("★".repeat(TESTIMONIAL_STARS))
        .size(typography::TITLE_SM)
        .color(palette::AMBER_400);

    let quote = Text::new(format!("“{}”", ctx.i18n.tr(testimonial.quote_key)))
        .size(typography::BODY_LG)
        .align_x(Horizontal::Center)
        .width(Length::Fill);

    let name = Text::new(ctx.i18n.tr(testimonial.name_key)).size(typography::TITLE_SM);
    let role = Text::new(ctx.i18n.tr(testimonial.role_key)).size(typography::CAPTION);

    let card = Container::new(
        Column::new()
            .push(stars)
            .push(quote)
            .push(name)
            .push(role)
            .spacing(spacing::SM)
            .align_x(Horizontal::Center),
    )
    .padding(if ctx.layout.compact {
        spacing::MD
    } else {
        spacing::XL
    })
    .width(Length::Fill)
    .max_width(sizing::NARROW_MAX_WIDTH)
    .style(styles::container::card);

    let heading = Column::new()
        .push(Text::new(ctx.i18n.tr("testimonials-title")).size(typography::TITLE_LG))
        .push(
            Text::new(ctx.i18n.tr("testimonials-subtitle"))
                .size(typography::BODY_LG)
                .align_x(Horizontal::Center),
        )
        .spacing(spacing::XS)
        .align_x(Horizontal::Center);

    Column::new()
        .push(heading)
        .push(card)
        .push(carousel::dots(ctx.rotator))
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    #[test]
    fn rotator_covers_all_testimonials() {
        let rotator = rotator(Duration::from_millis(6000)).expect("static list");
        assert_eq!(rotator.len(), TESTIMONIALS.len());
        assert_eq!(rotator.current(), &TESTIMONIALS[0]);
    }

    #[test]
    fn testimonial_view_renders_every_entry() {
        let mut rotator = rotator(Duration::from_millis(6000)).expect("static list");
        for locale in Locale::ALL {
            let i18n = I18n::new(locale);
            for _ in 0..rotator.len() {
                let element = view(ViewContext {
                    i18n: &i18n,
                    rotator: &rotator,
                    layout: Layout {
                        direction: locale.direction(),
                        compact: true,
                    },
                });
                drop(element);
                carousel::update(&mut rotator, Message::Tick);
            }
        }
    }
}
