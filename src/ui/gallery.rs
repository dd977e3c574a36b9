// SPDX-License-Identifier: MPL-2.0
//! Lecture photo gallery.
//!
//! The home page shows every photo as a thumbnail, the active one enlarged
//! and glowing. The preview page shows the active photo large with a
//! thumbnail strip below it. Both advance on the carousel timer and jump to a
//! photo when it is clicked.

use crate::app::variant::Variant;
use crate::content::{LecturePhoto, LECTURE_PHOTOS};
use crate::i18n::I18n;
use crate::ui::carousel::{self, Message};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::layout::Layout;
use crate::ui::state::Rotator;
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, Column, Container, Text};
use iced::{ContentFit, Element, Length};
use std::path::Path;

/// Height of the large photo on the preview page.
const FEATURE_HEIGHT: f32 = 360.0;

/// A lecture photo with its image, if the file was found.
#[derive(Debug, Clone)]
pub struct GalleryPhoto {
    pub photo: LecturePhoto,
    handle: Option<image::Handle>,
}

impl GalleryPhoto {
    /// Looks the photo up in `assets_dir`. A missing file leaves the photo
    /// without an image; it is then drawn as a labelled placeholder.
    pub fn resolve(photo: LecturePhoto, assets_dir: Option<&Path>) -> Self {
        let handle = assets_dir
            .map(|dir| dir.join(photo.file_name))
            .filter(|path| path.is_file())
            .map(image::Handle::from_path);
        if handle.is_none() {
            tracing::debug!(file = photo.file_name, "lecture photo not found, using placeholder");
        }
        Self { photo, handle }
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.handle.is_some()
    }
}

/// All lecture photos, resolved against `assets_dir`.
pub fn photos(assets_dir: Option<&Path>) -> Vec<GalleryPhoto> {
    LECTURE_PHOTOS
        .iter()
        .map(|&photo| GalleryPhoto::resolve(photo, assets_dir))
        .collect()
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub rotator: &'a Rotator<GalleryPhoto>,
    pub variant: Variant,
    pub layout: Layout,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr("gallery-label"))
        .size(typography::CAPTION)
        .align_x(Horizontal::Center);

    let body: Element<'a, Message> = if ctx.variant.shows_thumbnail_strip() {
        feature_with_strip(&ctx)
    } else {
        thumbnails(&ctx)
    };

    Column::new()
        .push(label)
        .push(body)
        .push(carousel::dots(ctx.rotator))
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .into()
}

/// Every photo in a row; the active one is larger.
fn thumbnails<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tiles = ctx
        .rotator
        .iter_marked()
        .map(|(index, photo, active)| {
            let (width, height) = if active {
                (sizing::THUMB_ACTIVE_WIDTH, sizing::THUMB_ACTIVE_HEIGHT)
            } else {
                (sizing::THUMB_WIDTH, sizing::THUMB_HEIGHT)
            };
            tile(ctx.i18n, index, photo, active, width, height)
        })
        .collect();

    ctx.layout
        .row(tiles)
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .into()
}

/// The active photo large, the others as a strip.
fn feature_with_strip<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let index = ctx.rotator.current_index();
    let feature = Container::new(picture(
        ctx.i18n,
        index,
        ctx.rotator.current(),
        Length::Fill,
        Length::Fixed(FEATURE_HEIGHT),
    ))
    .width(Length::Fill)
    .max_width(sizing::NARROW_MAX_WIDTH)
    .style(styles::container::photo(true));

    let strip = ctx
        .rotator
        .iter_marked()
        .map(|(index, photo, active)| {
            tile(
                ctx.i18n,
                index,
                photo,
                active,
                sizing::THUMB_WIDTH,
                sizing::THUMB_HEIGHT,
            )
        })
        .collect();

    Column::new()
        .push(feature)
        .push(ctx.layout.row(strip).spacing(spacing::XS))
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .into()
}

fn tile<'a>(
    i18n: &I18n,
    index: usize,
    photo: &GalleryPhoto,
    active: bool,
    width: f32,
    height: f32,
) -> Element<'a, Message> {
    let framed = Container::new(picture(
        i18n,
        index,
        photo,
        Length::Fixed(width),
        Length::Fixed(height),
    ))
    .style(styles::container::photo(active));

    button(framed)
        .padding(0)
        .style(styles::button::bare)
        .on_press(Message::Select(index))
        .into()
}

fn picture<'a>(
    i18n: &I18n,
    index: usize,
    photo: &GalleryPhoto,
    width: Length,
    height: Length,
) -> Element<'a, Message> {
    match &photo.handle {
        Some(handle) => image::Image::new(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(width)
            .height(height)
            .into(),
        None => {
            let alt = i18n.tr_args(
                "gallery-photo-alt",
                &[("number", FluentValue::from(index + 1))],
            );
            Container::new(Text::new(alt).size(typography::CAPTION))
                .padding(spacing::XS)
                .center_x(width)
                .center_y(height)
                .into()
        }
    }
}
