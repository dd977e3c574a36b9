// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the locale store, the translations, the mounted page
//! and the notification queue, and translates messages into side effects like
//! locale persistence, clipboard writes or flyer downloads. Policy decisions
//! (window size, which variant opens, how the `--lang` override is applied)
//! stay close to the main update loop so user-facing behavior is easy to
//! audit.

pub mod config;
pub mod flyers;
mod message;
pub mod page;
pub mod paths;
pub mod preferences;
mod subscription;
mod update;
pub mod variant;
mod view;

pub use message::{Flags, Message};

use crate::i18n::I18n;
use crate::locale::LocaleStore;
use crate::ui::carousel;
use crate::ui::layout::Layout;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use chrono::Datelike;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use page::Page;
use preferences::CborFileStore;
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    locale: LocaleStore<CborFileStore>,
    i18n: I18n,
    config: Config,
    assets_dir: Option<PathBuf>,
    page: Page,
    theme_mode: ThemeMode,
    /// Current window width in logical pixels.
    window_width: f32,
    flyer_modal_open: bool,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Copyright year, fixed at startup.
    year: i32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.locale.locale())
            .field("variant", &self.page.variant)
            .field("window_width", &self.window_width)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are consumed on the
    // first call and any later call boots with defaults.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the config file, the stored
    /// preferences and the `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let assets_dir = paths::get_app_assets_dir();

        let mut locale = LocaleStore::load(CborFileStore::new());
        if let Some(code) = flags.lang.as_deref() {
            locale.set_locale_code(code);
        }
        let i18n = I18n::new(locale.locale());

        let variant = flags
            .variant
            .or(config.general.variant)
            .unwrap_or_default();
        let page = Page::new(variant, &config, assets_dir.as_deref());

        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(notifications::Notification::warning(key));
        }

        tracing::info!(
            locale = %locale.locale(),
            variant = %variant,
            assets = ?assets_dir,
            "application started"
        );

        let app = App {
            theme_mode: config.general.theme_mode,
            locale,
            i18n,
            config,
            assets_dir,
            page,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            flyer_modal_open: false,
            notifications,
            year: chrono::Local::now().year(),
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr(self.page.variant.title_key())
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn layout(&self) -> Layout {
        Layout::new(
            self.locale.direction(),
            self.window_width,
            self.config.layout.compact_width(),
        )
    }

    fn subscription(&self) -> Subscription<Message> {
        let carousel_sub = subscription::create_carousel_subscription(&self.page);
        let counter_sub = subscription::create_counter_subscription(&self.page.counter);
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());
        let window_sub = subscription::create_window_subscription();

        Subscription::batch([carousel_sub, counter_sub, tick_sub, window_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            locale: &mut self.locale,
            i18n: &mut self.i18n,
            config: &self.config,
            assets_dir: self.assets_dir.as_deref(),
            page: &mut self.page,
            flyer_modal_open: &mut self.flyer_modal_open,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Section(section_message) => {
                update::handle_section_message(&mut ctx, section_message)
            }
            Message::FlyerModal(modal_message) => {
                update::handle_flyer_modal_message(&mut ctx, modal_message)
            }
            Message::FlyerSaveDialogResult { flyer, path } => {
                update::handle_flyer_save_result(&mut ctx, flyer, path)
            }
            Message::Gallery(carousel_message) => {
                if let Some(rotator) = self.page.gallery.as_mut() {
                    carousel::update(rotator, carousel_message);
                }
                Task::none()
            }
            Message::Testimonials(carousel_message) => {
                if let Some(rotator) = self.page.testimonials.as_mut() {
                    carousel::update(rotator, carousel_message);
                }
                Task::none()
            }
            Message::PageScrolled {
                offset_y,
                viewport_height,
                content_height,
            } => {
                update::handle_page_scrolled(
                    &mut self.page,
                    offset_y,
                    viewport_height,
                    content_height,
                    Instant::now(),
                );
                Task::none()
            }
            Message::CounterFrame(now) => {
                update::handle_counter_frame(&mut self.page, now);
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_width = size.width;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            locale: self.locale.locale(),
            layout: self.layout(),
            page: &self.page,
            flyer_modal_open: self.flyer_modal_open,
            notifications: &self.notifications,
            year: self.year,
        })
    }
}
