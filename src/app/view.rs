// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The banner and navbar stay pinned at the top; every section below them
//! scrolls. The flyer dialog and the toasts are stacked over the page.

use super::page::Page;
use super::update::PAGE_SCROLL_ID;
use super::Message;
use crate::i18n::I18n;
use crate::locale::Locale;
use crate::ui::flyer_modal;
use crate::ui::gallery;
use crate::ui::layout::Layout;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::sections::{self, section, ViewContext as SectionsViewContext};
use crate::ui::styles;
use crate::ui::testimonials;
use iced::widget::scrollable::Viewport;
use iced::widget::{Column, Container, Id, Scrollable, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub locale: Locale,
    pub layout: Layout,
    pub page: &'a Page,
    pub flyer_modal_open: bool,
    pub notifications: &'a notifications::Manager,
    pub year: i32,
}

/// Renders the whole page with its overlays.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let sections_ctx = SectionsViewContext {
        i18n: ctx.i18n,
        layout: ctx.layout,
        variant: ctx.page.variant,
        counter: &ctx.page.counter,
        portrait: ctx.page.portrait.as_ref(),
        year: ctx.year,
    };

    let mut header = Column::new().width(Length::Fill);
    if let Some(banner) = sections::build_banner(&sections_ctx) {
        header = header.push(banner.map(Message::Section));
    }
    header = header.push(
        navbar::view(NavbarViewContext {
            i18n: ctx.i18n,
            locale: ctx.locale,
            layout: ctx.layout,
        })
        .map(Message::Navbar),
    );

    let page = Column::new()
        .push(header)
        .push(
            Scrollable::new(build_sections(&ctx, &sections_ctx))
                .id(Id::new(PAGE_SCROLL_ID))
                .width(Length::Fill)
                .height(Length::Fill)
                .on_scroll(|viewport: Viewport| Message::PageScrolled {
                    offset_y: viewport.absolute_offset().y,
                    viewport_height: viewport.bounds().height,
                    content_height: viewport.content_bounds().height,
                }),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let mut stack = Stack::new().push(
        Container::new(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::page),
    );

    if ctx.flyer_modal_open {
        stack = stack.push(
            flyer_modal::view(flyer_modal::ViewContext {
                i18n: ctx.i18n,
                layout: ctx.layout,
            })
            .map(Message::FlyerModal),
        );
    }

    if let Some(toasts) = Toast::view_overlay(ctx.notifications, ctx.i18n, ctx.layout.direction) {
        stack = stack.push(toasts.map(Message::Notification));
    }

    stack.width(Length::Fill).height(Length::Fill).into()
}

/// Every scrolling section, top to bottom, alternating bands.
fn build_sections<'a>(
    ctx: &ViewContext<'a>,
    sections_ctx: &SectionsViewContext<'a>,
) -> Column<'a, Message> {
    let mut column = Column::new()
        .push(section(
            sections::build_hero(sections_ctx).map(Message::Section),
            false,
        ))
        .width(Length::Fill);

    if let Some(rotator) = &ctx.page.gallery {
        column = column.push(section(
            gallery::view(gallery::ViewContext {
                i18n: ctx.i18n,
                rotator,
                variant: ctx.page.variant,
                layout: ctx.layout,
            })
            .map(Message::Gallery),
            false,
        ));
    }

    column = column
        .push(section(
            sections::build_stats(sections_ctx).map(Message::Section),
            true,
        ))
        .push(section(
            sections::build_services(sections_ctx).map(Message::Section),
            false,
        ))
        .push(section(
            sections::build_about(sections_ctx).map(Message::Section),
            true,
        ));

    if let Some(rotator) = &ctx.page.testimonials {
        column = column.push(section(
            testimonials::view(testimonials::ViewContext {
                i18n: ctx.i18n,
                rotator,
                layout: ctx.layout,
            })
            .map(Message::Testimonials),
            false,
        ));
    }

    column
        .push(section(
            sections::build_talks(sections_ctx).map(Message::Section),
            true,
        ))
        .push(section(
            sections::build_contact(sections_ctx).map(Message::Section),
            false,
        ))
        .push(sections::build_footer(sections_ctx).map(Message::Section))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use crate::app::variant::Variant;
    use crate::ui::notifications::Notification;

    #[test]
    fn page_renders_with_overlays_in_both_locales() {
        let config = Config::default();
        let mut notifications = notifications::Manager::new();
        notifications.push(Notification::success("notification-flyer-saved").with_arg("path", "/tmp/a.jpg"));

        for locale in Locale::ALL {
            let i18n = I18n::new(locale);
            for variant in [Variant::Home, Variant::Preview] {
                let page = Page::new(variant, &config, None);
                for (width, modal) in [(1200.0, false), (500.0, true)] {
                    let _element = view(ViewContext {
                        i18n: &i18n,
                        locale,
                        layout: Layout::new(locale.direction(), width, 768.0),
                        page: &page,
                        flyer_modal_open: modal,
                        notifications: &notifications,
                        year: 2026,
                    });
                }
            }
        }
    }
}
