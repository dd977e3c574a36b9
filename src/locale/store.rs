// SPDX-License-Identifier: MPL-2.0
//! The application's single source of truth for the display language.
//!
//! `LocaleStore` is created once at startup and owned by the application
//! root; views receive it by reference. Every locale change goes through
//! [`LocaleStore::set_locale`], which updates the in-memory value, the
//! document attributes, and the persisted preference in that order.
//! Persistence is best effort: failures are logged and otherwise ignored.

use super::{Direction, DocumentAttributes, Locale};
use crate::app::preferences::PreferenceStore;

/// Storage key of the persisted display language.
pub const LANGUAGE_KEY: &str = "gabiPortfolioLanguage";

/// Holds the active locale and the document attributes derived from it.
#[derive(Debug)]
pub struct LocaleStore<S> {
    locale: Locale,
    document: DocumentAttributes,
    storage: S,
}

impl<S: PreferenceStore> LocaleStore<S> {
    /// Loads the persisted locale.
    ///
    /// - stored `he`/`en`: adopted as is
    /// - nothing stored, or an unrecognized value: primary locale, and the
    ///   primary code is written back
    /// - storage read failure: primary locale, nothing written
    pub fn load(storage: S) -> Self {
        let mut store = Self {
            locale: Locale::PRIMARY,
            document: DocumentAttributes::for_locale(Locale::PRIMARY),
            storage,
        };

        match store.storage.get(LANGUAGE_KEY) {
            Ok(Some(code)) => match Locale::from_code(&code) {
                Some(locale) => {
                    tracing::info!(locale = %locale, "restored display language");
                    store.apply(locale);
                }
                None => {
                    tracing::warn!(stored = %code, "ignoring unrecognized stored language");
                    store.persist();
                }
            },
            Ok(None) => {
                tracing::debug!("no stored display language, using primary");
                store.persist();
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not read stored display language");
            }
        }

        store
    }

    /// Current locale.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Current text direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.document.dir
    }

    /// Attributes the rendered document should carry.
    #[must_use]
    pub fn document(&self) -> DocumentAttributes {
        self.document
    }

    /// Switches to `locale` and persists it.
    ///
    /// The in-memory state and document attributes always change, even when
    /// the preference cannot be written.
    pub fn set_locale(&mut self, locale: Locale) {
        self.apply(locale);
        self.persist();
        tracing::info!(locale = %locale, dir = self.document.dir.as_str(), "display language changed");
    }

    /// Switches to the locale named by `code`.
    ///
    /// Unrecognized codes leave the active locale untouched. Returns whether
    /// the code was accepted.
    pub fn set_locale_code(&mut self, code: &str) -> bool {
        match Locale::from_code(code) {
            Some(locale) => {
                self.set_locale(locale);
                true
            }
            None => {
                tracing::warn!(code, "rejected unsupported language code");
                false
            }
        }
    }

    /// Switches to the other locale and returns it.
    pub fn toggle(&mut self) -> Locale {
        let next = self.locale.toggled();
        self.set_locale(next);
        next
    }

    /// Read access to the backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn apply(&mut self, locale: Locale) {
        self.locale = locale;
        self.document = DocumentAttributes::for_locale(locale);
    }

    fn persist(&mut self) {
        if let Err(err) = self.storage.set(LANGUAGE_KEY, self.locale.code()) {
            tracing::warn!(error = %err, "could not save display language");
        }
    }
}
