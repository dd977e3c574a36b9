// SPDX-License-Identifier: MPL-2.0
use crate::locale::Locale;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<Locale, FluentBundle<FluentResource>>,
    current_locale: Locale,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("locales", &self.bundles.keys().collect::<Vec<_>>())
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(Locale::PRIMARY)
    }
}

impl I18n {
    /// Loads the embedded bundles and selects `locale`.
    ///
    /// A translation file that fails to parse is skipped with a warning; its
    /// keys then render as `MISSING: <key>`.
    pub fn new(locale: Locale) -> Self {
        let mut bundles = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(code) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Some(locale) = Locale::from_code(code) else {
                tracing::debug!(file = filename, "ignoring translation file for unsupported locale");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            match build_bundle(locale.language_identifier(), &content.data) {
                Some(bundle) => {
                    bundles.insert(locale, bundle);
                }
                None => tracing::warn!(file = filename, "failed to load translation file"),
            }
        }

        Self {
            bundles,
            current_locale: locale,
        }
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.current_locale = locale;
    }

    #[must_use]
    pub fn current_locale(&self) -> Locale {
        self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Formats `key` with named arguments.
    pub fn tr_args(&self, key: &str, args: &[(&str, FluentValue<'_>)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.clone());
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                    tracing::debug!(key, ?errors, "translation formatting errors");
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn build_bundle(
    langid: LanguageIdentifier,
    data: &[u8],
) -> Option<FluentBundle<FluentResource>> {
    let source = String::from_utf8_lossy(data).to_string();
    let resource = FluentResource::try_new(source).ok()?;
    let mut bundle = FluentBundle::new(vec![langid]);
    // Hebrew text with Latin placeables would otherwise carry invisible
    // FSI/PDI marks into every label.
    bundle.set_use_isolating(false);
    bundle.add_resource(resource).ok()?;
    Some(bundle)
}
