// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for page-level navigation.
//!
//! The bar shows the speaker's name, links to the main page sections and the
//! language toggle. On compact windows the section links are hidden and only
//! the name and the toggle remain.

use crate::i18n::I18n;
use crate::locale::Locale;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::layout::Layout;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Space, Text},
    Element, Length,
};

/// Page sections reachable from the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Services,
    About,
    Testimonials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Services,
        Section::About,
        Section::Testimonials,
        Section::Contact,
    ];

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Section::Services => "nav-services",
            Section::About => "nav-about",
            Section::Testimonials => "nav-testimonials",
            Section::Contact => "nav-contact",
        }
    }

    /// Vertical scroll position of the section, relative to the scrollable
    /// page height.
    #[must_use]
    pub fn scroll_anchor(self) -> f32 {
        match self {
            Section::Services => 0.34,
            Section::About => 0.50,
            Section::Testimonials => 0.66,
            Section::Contact => 1.0,
        }
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub locale: Locale,
    pub layout: Layout,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    GoTo(Section),
    ToggleLanguage,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ScrollTo(Section),
    ToggleLanguage,
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::GoTo(section) => Event::ScrollTo(section),
        Message::ToggleLanguage => Event::ToggleLanguage,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("nav-brand")).size(typography::TITLE_SM);

    // The toggle names the language it switches *to*.
    let toggle = button(Text::new(ctx.locale.toggle_label()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::outline)
        .on_press(Message::ToggleLanguage);

    let mut items: Vec<Element<'a, Message>> = vec![brand.into()];
    items.push(Space::new().width(Length::Fill).into());
    if !ctx.layout.compact {
        let links = Section::ALL.iter().map(|&section| {
            button(Text::new(ctx.i18n.tr(section.label_key())).size(typography::BODY))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::link)
                .on_press(Message::GoTo(section))
                .into()
        });
        items.push(
            ctx.layout
                .row(links.collect())
                .spacing(spacing::MD)
                .into(),
        );
        items.push(Space::new().width(Length::Fill).into());
    }
    items.push(toggle.into());

    let bar = ctx
        .layout
        .row(items)
        .spacing(spacing::MD)
        .align_y(Vertical::Center);

    Container::new(
        Container::new(bar)
            .padding([spacing::SM, spacing::LG])
            .width(Length::Fill)
            .style(styles::container::navbar),
    )
    .padding([spacing::SM, spacing::MD])
    .width(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Direction;

    fn layout(direction: Direction, compact: bool) -> Layout {
        Layout { direction, compact }
    }

    #[test]
    fn navbar_view_renders_in_both_directions() {
        for locale in Locale::ALL {
            let i18n = I18n::new(locale);
            let _element = view(ViewContext {
                i18n: &i18n,
                locale,
                layout: layout(locale.direction(), false),
            });
        }
    }

    #[test]
    fn navbar_view_renders_compact() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            locale: Locale::Hebrew,
            layout: layout(Direction::Rtl, true),
        });
    }

    #[test]
    fn section_links_emit_scroll_events() {
        for section in Section::ALL {
            assert_eq!(update(Message::GoTo(section)), Event::ScrollTo(section));
        }
        assert_eq!(update(Message::ToggleLanguage), Event::ToggleLanguage);
    }

    #[test]
    fn scroll_anchors_follow_page_order() {
        let anchors: Vec<f32> = Section::ALL.iter().map(|s| s.scroll_anchor()).collect();
        assert!(anchors.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(Section::Contact.scroll_anchor(), 1.0);
    }
}
