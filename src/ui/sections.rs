// SPDX-License-Identifier: MPL-2.0
//! Static page sections: banner, hero, statistics, services, about, talks,
//! contact and footer.
//!
//! The rotating gallery and testimonials live in their own modules; the
//! application interleaves them with the sections built here.

use crate::app::variant::Variant;
use crate::content::{
    Service, Stat, Talk, ABOUT_BADGE_KEYS, ABOUT_PARAGRAPH_KEYS, EMAIL_URL, INSTAGRAM_URL,
    LINKEDIN_URL, SERVICES, STATS, TALKS, WHATSAPP_URL,
};
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::layout::Layout;
use crate::ui::navbar::Section;
use crate::ui::state::CountUp;
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::alignment::Horizontal;
use iced::widget::{button, image, Column, Container, Text};
use iced::{ContentFit, Element, Length};

/// Contextual data needed to render the sections.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layout: Layout,
    pub variant: Variant,
    /// Shared progress of the statistics count-up.
    pub counter: &'a CountUp,
    pub portrait: Option<&'a image::Handle>,
    /// Year shown in the footer copyright line.
    pub year: i32,
}

/// Messages emitted by the sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// An outbound link was activated.
    OpenLink(&'static str),
    OpenFlyerModal,
    ScrollTo(Section),
    SwitchVariant(Variant),
}

/// Relative position in the scrolled page where the statistics band starts,
/// consistent with the navbar's section anchors.
pub const STATS_ANCHOR: f32 = 0.25;

/// Whether any of the statistics band is visible in a viewport of
/// `viewport_height` scrolled down by `offset_y` over `content_height`.
#[must_use]
pub fn stats_in_view(offset_y: f32, viewport_height: f32, content_height: f32) -> bool {
    if content_height <= viewport_height {
        return true;
    }
    (offset_y + viewport_height) / content_height >= STATS_ANCHOR
}

/// Wraps section content in a full-width band with the page's vertical
/// rhythm; the content itself is capped at the page width.
pub fn section<'a, M: 'a>(content: impl Into<Element<'a, M>>, band: bool) -> Element<'a, M> {
    let inner = Container::new(content)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH);
    let outer = Container::new(inner)
        .center_x(Length::Fill)
        .padding([spacing::SECTION / 2.0, spacing::LG]);
    if band {
        outer.style(styles::container::band).into()
    } else {
        outer.into()
    }
}

/// Notice strip shown above the navbar on the preview page.
pub fn build_banner<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let key = ctx.variant.banner_key()?;

    let notice = Text::new(ctx.i18n.tr(key)).size(typography::CAPTION);
    let back = button(
        Text::new(ctx.i18n.tr("preview-banner-back")).size(typography::CAPTION),
    )
    .padding([0.0, spacing::XS])
    .style(styles::button::link)
    .on_press(Message::SwitchVariant(Variant::Home));

    Some(
        Container::new(ctx.layout.row(vec![notice.into(), back.into()]).spacing(spacing::SM))
            .center_x(Length::Fill)
            .padding(spacing::XS)
            .style(styles::container::banner)
            .into(),
    )
}

pub fn build_hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let align = ctx.layout.text_align();

    let badge = Container::new(Text::new(ctx.i18n.tr("hero-badge")).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::tag);

    let cta_talk = button(Text::new(ctx.i18n.tr("hero-cta-talk")).size(typography::BODY))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::ScrollTo(Section::Contact));
    let cta_more = button(Text::new(ctx.i18n.tr("hero-cta-more")).size(typography::BODY))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::outline)
        .on_press(Message::ScrollTo(Section::About));

    let text_block = Column::new()
        .push(badge)
        .push(Text::new(ctx.i18n.tr("hero-greeting")).size(typography::TITLE_MD))
        .push(Text::new(ctx.i18n.tr("hero-name")).size(typography::DISPLAY))
        .push(Text::new(ctx.i18n.tr("hero-title")).size(typography::TITLE_MD))
        .push(
            Text::new(ctx.i18n.tr("hero-subtitle"))
                .size(typography::BODY_LG)
                .align_x(align)
                .width(Length::Fill),
        )
        .push(
            ctx.layout
                .row(vec![cta_talk.into(), cta_more.into()])
                .spacing(spacing::SM),
        )
        .spacing(spacing::MD)
        .align_x(align)
        .width(Length::Fill);

    ctx.layout.flow(
        vec![text_block.into(), build_portrait(ctx.portrait)],
        spacing::XL,
    )
}

/// Profile photo, or the speaker's initials when it is not available.
fn build_portrait<'a>(portrait: Option<&image::Handle>) -> Element<'a, Message> {
    let size = Length::Fixed(sizing::PORTRAIT);
    let content: Element<'a, Message> = match portrait {
        Some(handle) => image::Image::new(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(size)
            .height(size)
            .into(),
        None => Container::new(Text::new("GA").size(typography::DISPLAY))
            .center_x(size)
            .center_y(size)
            .into(),
    };
    Container::new(content)
        .style(styles::container::photo(true))
        .into()
}

/// The four animated statistics.
pub fn build_stats<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let blocks = STATS
        .iter()
        .map(|stat| build_stat(ctx, stat))
        .collect();
    ctx.layout.flow(blocks, spacing::LG)
}

fn build_stat<'a>(ctx: &ViewContext<'a>, stat: &Stat) -> Element<'a, Message> {
    let value = format!("{}{}", ctx.counter.value(stat.value), stat.suffix);
    Column::new()
        .push(Text::new(value).size(typography::STAT))
        .push(Text::new(ctx.i18n.tr(stat.label_key)).size(typography::BODY))
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .into()
}

/// Centered section title with a subtitle below it.
fn build_heading<'a>(
    ctx: &ViewContext<'a>,
    title_key: &str,
    subtitle_key: &str,
) -> Column<'a, Message> {
    Column::new()
        .push(Text::new(ctx.i18n.tr(title_key)).size(typography::TITLE_LG))
        .push(
            Text::new(ctx.i18n.tr(subtitle_key))
                .size(typography::BODY_LG)
                .align_x(Horizontal::Center),
        )
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
}

pub fn build_services<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards = SERVICES
        .iter()
        .map(|service| build_service_card(ctx, service))
        .collect();

    Column::new()
        .push(build_heading(ctx, "services-title", "services-subtitle"))
        .push(ctx.layout.flow(cards, spacing::LG))
        .spacing(spacing::XL)
        .into()
}

fn build_service_card<'a>(ctx: &ViewContext<'a>, service: &Service) -> Element<'a, Message> {
    let align = ctx.layout.start();

    let tags = service
        .tag_keys
        .iter()
        .map(|key| {
            Container::new(Text::new(ctx.i18n.tr(key)).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::container::tag)
                .into()
        })
        .collect();

    let download = button(
        Text::new(ctx.i18n.tr("services-download-flyer")).size(typography::BODY),
    )
    .padding(0)
    .style(styles::button::link)
    .on_press(Message::OpenFlyerModal);

    Container::new(
        Column::new()
            .push(Text::new(ctx.i18n.tr(service.title_key)).size(typography::TITLE_MD))
            .push(
                Text::new(ctx.i18n.tr(service.description_key))
                    .size(typography::BODY)
                    .align_x(align)
                    .width(Length::Fill),
            )
            .push(ctx.layout.row(tags).spacing(spacing::XS).wrap())
            .push(download)
            .spacing(spacing::MD)
            .align_x(align),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

pub fn build_about<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let align = ctx.layout.text_align();

    let paragraphs = ABOUT_PARAGRAPH_KEYS.iter().fold(
        Column::new().spacing(spacing::SM).width(Length::Fill),
        |column, key| {
            column.push(
                Text::new(ctx.i18n.tr(key))
                    .size(typography::BODY_LG)
                    .align_x(align)
                    .width(Length::Fill),
            )
        },
    );

    let quote = Text::new(format!("“{}”", ctx.i18n.tr("about-quote")))
        .size(typography::TITLE_SM)
        .align_x(align)
        .width(Length::Fill);

    let text_block = Column::new()
        .push(Text::new(ctx.i18n.tr("about-title")).size(typography::TITLE_LG))
        .push(paragraphs)
        .push(quote)
        .spacing(spacing::LG)
        .align_x(align)
        .width(Length::Fill);

    let badges = ABOUT_BADGE_KEYS.iter().fold(
        Column::new().spacing(spacing::SM).align_x(Horizontal::Center),
        |column, key| {
            column.push(
                Container::new(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::container::tag),
            )
        },
    );

    ctx.layout
        .flow(vec![text_block.into(), badges.into()], spacing::XL)
}

pub fn build_talks<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards = TALKS.iter().map(|talk| build_talk_card(ctx, talk)).collect();

    Column::new()
        .push(build_heading(ctx, "talks-title", "talks-subtitle"))
        .push(ctx.layout.flow(cards, spacing::LG))
        .spacing(spacing::XL)
        .into()
}

fn build_talk_card<'a>(ctx: &ViewContext<'a>, talk: &Talk) -> Element<'a, Message> {
    let align = ctx.layout.start();
    let views = ctx
        .i18n
        .tr_args("talk-views", &[("views", FluentValue::from(talk.views))]);

    let cover = Container::new(Text::new("▶").size(typography::TITLE_LG))
        .center_x(Length::Fill)
        .height(Length::Fixed(sizing::THUMB_HEIGHT))
        .style(styles::container::photo(false));

    let card = Container::new(
        Column::new()
            .push(cover)
            .push(Text::new(ctx.i18n.tr(talk.title_key)).size(typography::TITLE_SM))
            .push(Text::new(talk.speaker).size(typography::BODY))
            .push(Text::new(views).size(typography::CAPTION))
            .spacing(spacing::XS)
            .align_x(align),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card);

    button(card)
        .padding(0)
        .width(Length::Fill)
        .style(styles::button::bare)
        .on_press(Message::OpenLink(talk.url))
        .into()
}

pub fn build_contact<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let whatsapp = button(Text::new(ctx.i18n.tr("contact-whatsapp")).size(typography::BODY))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::whatsapp)
        .on_press(Message::OpenLink(WHATSAPP_URL));
    let email = button(Text::new(ctx.i18n.tr("contact-email")).size(typography::BODY))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::outline)
        .on_press(Message::OpenLink(EMAIL_URL));

    let social = [
        ("contact-instagram", INSTAGRAM_URL),
        ("contact-linkedin", LINKEDIN_URL),
    ]
    .into_iter()
    .map(|(key, url)| {
        button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
            .style(styles::button::link)
            .on_press(Message::OpenLink(url))
            .into()
    })
    .collect();

    build_heading(ctx, "contact-title", "contact-subtitle")
        .push(ctx.layout.flow(
            vec![
                Container::new(whatsapp).center_x(Length::Fill).into(),
                Container::new(email).center_x(Length::Fill).into(),
            ],
            spacing::MD,
        ))
        .push(Text::new(ctx.i18n.tr("contact-follow")).size(typography::BODY))
        .push(ctx.layout.row(social).spacing(spacing::MD))
        .spacing(spacing::LG)
        .into()
}

pub fn build_footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let copyright = ctx.i18n.tr_args(
        "footer-copyright",
        &[("year", FluentValue::from(ctx.year.to_string()))],
    );

    let mut column = Column::new()
        .push(Text::new(copyright).size(typography::CAPTION))
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .width(Length::Fill);

    if ctx.variant == Variant::Home {
        column = column.push(
            button(Text::new(ctx.i18n.tr("footer-preview-link")).size(typography::CAPTION))
                .padding(0)
                .style(styles::button::link)
                .on_press(Message::SwitchVariant(Variant::Preview)),
        );
    }

    Container::new(column)
        .padding(spacing::LG)
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use std::time::{Duration, Instant};

    fn render_all(ctx: &ViewContext<'_>) {
        let _banner = build_banner(ctx);
        let _hero = build_hero(ctx);
        let _stats = build_stats(ctx);
        let _services = build_services(ctx);
        let _about = build_about(ctx);
        let _talks = build_talks(ctx);
        let _contact = build_contact(ctx);
        let _footer = build_footer(ctx);
    }

    #[test]
    fn sections_render_for_every_locale_variant_and_width() {
        let counter = CountUp::new(Duration::from_millis(1800), Default::default());
        for locale in Locale::ALL {
            let i18n = I18n::new(locale);
            for variant in [Variant::Home, Variant::Preview] {
                for compact in [false, true] {
                    render_all(&ViewContext {
                        i18n: &i18n,
                        layout: Layout {
                            direction: locale.direction(),
                            compact,
                        },
                        variant,
                        counter: &counter,
                        portrait: None,
                        year: 2026,
                    });
                }
            }
        }
    }

    #[test]
    fn banner_only_on_preview() {
        let i18n = I18n::default();
        let counter = CountUp::new(Duration::from_millis(2000), Default::default());
        let ctx = |variant| ViewContext {
            i18n: &i18n,
            layout: Layout {
                direction: Locale::Hebrew.direction(),
                compact: false,
            },
            variant,
            counter: &counter,
            portrait: None,
            year: 2026,
        };
        assert!(build_banner(&ctx(Variant::Home)).is_none());
        assert!(build_banner(&ctx(Variant::Preview)).is_some());
    }

    #[test]
    fn finished_counter_shows_exact_targets() {
        let mut counter = CountUp::new(Duration::from_millis(1800), Default::default());
        let start = Instant::now();
        counter.start(start);
        counter.tick(start + Duration::from_secs(2));
        let shown: Vec<String> = STATS
            .iter()
            .map(|s| format!("{}{}", counter.value(s.value), s.suffix))
            .collect();
        assert_eq!(shown, ["10+", "200+", "5000+", "98%"]);
    }

    #[test]
    fn stats_come_into_view_once_scrolled_to_their_band() {
        // 800px window over a 4000px page: the band starts at 1000px.
        assert!(!stats_in_view(0.0, 800.0, 4000.0));
        assert!(!stats_in_view(150.0, 800.0, 4000.0));
        assert!(stats_in_view(200.0, 800.0, 4000.0));
        assert!(stats_in_view(3200.0, 800.0, 4000.0));
    }

    #[test]
    fn short_page_shows_stats_immediately() {
        assert!(stats_in_view(0.0, 1200.0, 900.0));
    }
}
