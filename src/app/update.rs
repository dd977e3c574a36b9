// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers receive an [`UpdateContext`] of mutable borrows into `App` and
//! return the follow-up [`Task`], keeping `App::update` a thin dispatcher.

use super::config::Config;
use super::flyers;
use super::page::Page;
use super::preferences::PreferenceStore;
use super::variant::Variant;
use super::Message;
use crate::content::Flyer;
use crate::i18n::I18n;
use crate::locale::LocaleStore;
use crate::ui::flyer_modal::{self, Event as FlyerModalEvent};
use crate::ui::navbar::{self, Event as NavbarEvent, Section};
use crate::ui::notifications::{self, Notification};
use crate::ui::sections;
use iced::widget::{operation, scrollable::RelativeOffset, Id};
use iced::{clipboard, Task};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Id of the page's scrollable.
pub const PAGE_SCROLL_ID: &str = "podium-page";

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a, S> {
    pub locale: &'a mut LocaleStore<S>,
    pub i18n: &'a mut I18n,
    pub config: &'a Config,
    pub assets_dir: Option<&'a Path>,
    pub page: &'a mut Page,
    pub flyer_modal_open: &'a mut bool,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_navbar_message<S: PreferenceStore>(
    ctx: &mut UpdateContext<'_, S>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::ScrollTo(section) => scroll_to(section),
        NavbarEvent::ToggleLanguage => {
            let locale = ctx.locale.toggle();
            ctx.i18n.set_locale(locale);
            Task::none()
        }
    }
}

pub fn handle_section_message<S: PreferenceStore>(
    ctx: &mut UpdateContext<'_, S>,
    message: sections::Message,
) -> Task<Message> {
    match message {
        sections::Message::OpenLink(url) => open_link(ctx, url),
        sections::Message::OpenFlyerModal => {
            *ctx.flyer_modal_open = true;
            Task::none()
        }
        sections::Message::ScrollTo(section) => scroll_to(section),
        sections::Message::SwitchVariant(variant) => switch_variant(ctx, variant),
    }
}

pub fn handle_flyer_modal_message<S: PreferenceStore>(
    ctx: &mut UpdateContext<'_, S>,
    message: flyer_modal::Message,
) -> Task<Message> {
    *ctx.flyer_modal_open = false;
    match flyer_modal::update(message) {
        FlyerModalEvent::Download(flyer) => request_flyer_download(ctx, flyer),
        FlyerModalEvent::Closed => Task::none(),
    }
}

/// Saves the flyer where the user chose, reporting the outcome as a
/// notification.
pub fn handle_flyer_save_result<S: PreferenceStore>(
    ctx: &mut UpdateContext<'_, S>,
    flyer: Flyer,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(destination) = path else {
        tracing::debug!(?flyer, "flyer save dialog cancelled");
        return Task::none();
    };
    let Some(source) = flyers::locate(flyer, ctx.assets_dir) else {
        notify_missing_flyer(ctx, flyer);
        return Task::none();
    };

    match flyers::save(&source, &destination) {
        Ok(bytes) => {
            tracing::info!(?flyer, path = %destination.display(), bytes, "flyer saved");
            ctx.notifications.push(
                Notification::success("notification-flyer-saved")
                    .with_arg("path", destination.display().to_string()),
            );
        }
        Err(err) => {
            tracing::warn!(?flyer, path = %destination.display(), error = %err, "flyer save failed");
            ctx.notifications.push(
                Notification::error("notification-flyer-failed").with_arg("error", err.to_string()),
            );
        }
    }
    Task::none()
}

/// Starts the count-up the first time the statistics band scrolls into
/// view. Later scrolling has no effect on it.
pub fn handle_page_scrolled(
    page: &mut Page,
    offset_y: f32,
    viewport_height: f32,
    content_height: f32,
    now: Instant,
) {
    if page.counter.is_started() {
        return;
    }
    if sections::stats_in_view(offset_y, viewport_height, content_height) {
        tracing::debug!(offset_y, "statistics in view, starting count-up");
        page.counter.start(now);
    }
}

/// Advances a running count-up.
pub fn handle_counter_frame(page: &mut Page, now: Instant) {
    page.counter.tick(now);
}

fn request_flyer_download<S: PreferenceStore>(
    ctx: &mut UpdateContext<'_, S>,
    flyer: Flyer,
) -> Task<Message> {
    if flyers::locate(flyer, ctx.assets_dir).is_none() {
        notify_missing_flyer(ctx, flyer);
        return Task::none();
    }

    let file_name = flyer.download_name(ctx.page.variant);
    let title = ctx.i18n.tr("flyer-save-dialog-title");

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(&title)
                .set_file_name(file_name)
                .add_filter("JPEG", &["jpg", "jpeg"])
                .save_file()
                .await
                .map(|h| h.path().to_path_buf())
        },
        move |path| Message::FlyerSaveDialogResult { flyer, path },
    )
}

fn notify_missing_flyer<S>(ctx: &mut UpdateContext<'_, S>, flyer: Flyer) {
    tracing::warn!(file = flyer.source_file(), "flyer image not found in assets");
    ctx.notifications.push(
        Notification::warning("notification-flyer-missing").with_arg("file", flyer.source_file()),
    );
}

/// Copies an outbound link to the clipboard; the desktop app does not
/// launch a browser.
fn open_link<S>(ctx: &mut UpdateContext<'_, S>, url: &'static str) -> Task<Message> {
    tracing::debug!(url, "link copied");
    ctx.notifications
        .push(Notification::info("notification-link-copied").with_arg("url", url));
    clipboard::write(url.to_string())
}

fn switch_variant<S>(ctx: &mut UpdateContext<'_, S>, variant: Variant) -> Task<Message> {
    if ctx.page.variant == variant {
        return Task::none();
    }
    tracing::info!(from = %ctx.page.variant, to = %variant, "switching page variant");
    *ctx.page = Page::new(variant, ctx.config, ctx.assets_dir);
    *ctx.flyer_modal_open = false;
    snap_page_to(0.0)
}

fn scroll_to(section: Section) -> Task<Message> {
    snap_page_to(section.scroll_anchor())
}

fn snap_page_to(y: f32) -> Task<Message> {
    operation::snap_to(Id::new(PAGE_SCROLL_ID), RelativeOffset { x: 0.0, y })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::preferences::MemoryStore;
    use crate::app::subscription;
    use crate::locale::{Direction, Locale, LANGUAGE_KEY};
    use crate::ui::notifications::Severity;
    use std::fs;
    use std::time::Duration;
    use tempfile::tempdir;

    struct Fixture {
        locale: LocaleStore<MemoryStore>,
        i18n: I18n,
        config: Config,
        page: Page,
        modal_open: bool,
        notifications: notifications::Manager,
    }

    impl Fixture {
        fn new() -> Self {
            let config = Config::default();
            let locale = LocaleStore::load(MemoryStore::new());
            Self {
                i18n: I18n::new(locale.locale()),
                locale,
                page: Page::new(Variant::Home, &config, None),
                config,
                modal_open: false,
                notifications: notifications::Manager::new(),
            }
        }

        fn ctx<'a>(&'a mut self, assets_dir: Option<&'a Path>) -> UpdateContext<'a, MemoryStore> {
            UpdateContext {
                locale: &mut self.locale,
                i18n: &mut self.i18n,
                config: &self.config,
                assets_dir,
                page: &mut self.page,
                flyer_modal_open: &mut self.modal_open,
                notifications: &mut self.notifications,
            }
        }

        fn last_notification(&self) -> Option<(Severity, String)> {
            self.notifications
                .visible()
                .last()
                .map(|n| (n.severity(), n.message_key().to_string()))
        }
    }

    #[test]
    fn toggle_language_updates_store_translations_and_storage() {
        let mut fx = Fixture::new();
        let _ = handle_navbar_message(&mut fx.ctx(None), navbar::Message::ToggleLanguage);

        assert_eq!(fx.locale.locale(), Locale::English);
        assert_eq!(fx.locale.direction(), Direction::Ltr);
        assert_eq!(fx.i18n.current_locale(), Locale::English);
        assert_eq!(
            fx.locale.storage().get(LANGUAGE_KEY).expect("memory store"),
            Some("en".to_string())
        );
    }

    #[test]
    fn flyer_action_opens_modal_and_close_hides_it() {
        let mut fx = Fixture::new();
        let _ = handle_section_message(&mut fx.ctx(None), sections::Message::OpenFlyerModal);
        assert!(fx.modal_open);

        let _ = handle_flyer_modal_message(&mut fx.ctx(None), flyer_modal::Message::Close);
        assert!(!fx.modal_open);
        assert!(!fx.notifications.has_notifications());
    }

    #[test]
    fn download_without_assets_warns_and_closes_modal() {
        let mut fx = Fixture::new();
        fx.modal_open = true;
        let _ = handle_flyer_modal_message(
            &mut fx.ctx(None),
            flyer_modal::Message::Choose(Flyer::PublicSpeaking),
        );

        assert!(!fx.modal_open);
        assert_eq!(
            fx.last_notification(),
            Some((Severity::Warning, "notification-flyer-missing".to_string()))
        );
    }

    #[test]
    fn cancelled_save_dialog_does_nothing() {
        let mut fx = Fixture::new();
        let _ = handle_flyer_save_result(&mut fx.ctx(None), Flyer::BodyLanguage, None);
        assert!(!fx.notifications.has_notifications());
    }

    #[test]
    fn chosen_destination_receives_flyer_copy() {
        let assets = tempdir().expect("tempdir");
        fs::write(assets.path().join(Flyer::BodyLanguage.source_file()), b"flyer").expect("write");
        let downloads = tempdir().expect("tempdir");
        let destination = downloads.path().join("gabi-body-language.jpg");

        let mut fx = Fixture::new();
        let _ = handle_flyer_save_result(
            &mut fx.ctx(Some(assets.path())),
            Flyer::BodyLanguage,
            Some(destination.clone()),
        );

        assert_eq!(fs::read(&destination).expect("read"), b"flyer");
        assert_eq!(
            fx.last_notification(),
            Some((Severity::Success, "notification-flyer-saved".to_string()))
        );
    }

    #[test]
    fn open_link_reports_copied_url() {
        let mut fx = Fixture::new();
        let _ = handle_section_message(
            &mut fx.ctx(None),
            sections::Message::OpenLink(crate::content::WHATSAPP_URL),
        );
        let notification = fx.notifications.visible().last().expect("notification");
        assert_eq!(notification.message_key(), "notification-link-copied");
        assert_eq!(
            notification.message_args(),
            &[("url".to_string(), crate::content::WHATSAPP_URL.to_string())]
        );
    }

    #[test]
    fn switching_variant_remounts_page() {
        let mut fx = Fixture::new();
        if let Some(gallery) = fx.page.gallery.as_mut() {
            gallery.select_index(2);
        }
        fx.modal_open = true;
        let mount_id_before = fx.page.mount_id;
        let timers_before = subscription::tests::identities(
            subscription::create_carousel_subscription(&fx.page),
        );

        let _ = handle_section_message(
            &mut fx.ctx(None),
            sections::Message::SwitchVariant(Variant::Preview),
        );

        assert_eq!(fx.page.variant, Variant::Preview);
        assert_ne!(fx.page.mount_id, mount_id_before);
        assert!(subscription::tests::identities(
            subscription::create_carousel_subscription(&fx.page)
        )
        .iter()
        .all(|id| !timers_before.contains(id)));
        assert_eq!(fx.page.gallery.as_ref().map(|g| g.current_index()), Some(0));
        assert!(!fx.page.counter.is_running());
        assert!(!fx.modal_open);
    }

    #[test]
    fn counter_waits_for_the_statistics_to_scroll_into_view() {
        let mut fx = Fixture::new();
        let start = Instant::now();

        handle_counter_frame(&mut fx.page, start);
        handle_page_scrolled(&mut fx.page, 0.0, 800.0, 4000.0, start);
        assert!(!fx.page.counter.is_started());
        assert_eq!(fx.page.counter.value(5000), 0);

        handle_page_scrolled(&mut fx.page, 600.0, 800.0, 4000.0, start);
        assert!(fx.page.counter.is_running());

        handle_counter_frame(&mut fx.page, start + Duration::from_millis(900));
        assert_eq!(fx.page.counter.value(200), 100);

        handle_counter_frame(&mut fx.page, start + Duration::from_millis(1800));
        assert!(fx.page.counter.is_finished());
        assert_eq!(fx.page.counter.value(5000), 5000);
    }

    #[test]
    fn counter_runs_once_despite_further_scrolling() {
        let mut fx = Fixture::new();
        let start = Instant::now();
        handle_page_scrolled(&mut fx.page, 1000.0, 800.0, 4000.0, start);
        handle_counter_frame(&mut fx.page, start + Duration::from_secs(2));
        assert!(fx.page.counter.is_finished());

        handle_page_scrolled(&mut fx.page, 0.0, 800.0, 4000.0, start + Duration::from_secs(3));
        handle_page_scrolled(&mut fx.page, 1000.0, 800.0, 4000.0, start + Duration::from_secs(4));
        assert!(fx.page.counter.is_finished());
        assert_eq!(fx.page.counter.value(98), 98);
    }
}
