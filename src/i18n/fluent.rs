// SPDX-License-Identifier: MPL-2.0
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use tracing::warn;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None)
    }
}

impl I18n {
    /// Loads every embedded `.ftl` table and selects a locale.
    ///
    /// `preferred` comes from the settings profile and wins over the OS locale.
    pub fn new(preferred: Option<&str>) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                warn!(file = filename, "Ignoring string table with invalid locale name");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    warn!(file = filename, errors = errors.len(), "String table has syntax errors");
                    resource
                }
            };

            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                warn!(
                    file = filename,
                    errors = errors.len(),
                    "String table has duplicate messages"
                );
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }

        let os_locale = sys_locale::get_locale();
        let current_locale = resolve_locale(preferred, os_locale.as_deref(), &available_locales)
            .unwrap_or_else(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key`, substituting the named Fluent variables.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
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
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

fn resolve_locale(
    preferred: Option<&str>,
    os_locale: Option<&str>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Settings profile, 2. OS locale
    [preferred, os_locale]
        .into_iter()
        .flatten()
        .find_map(|candidate| match_available(candidate, available))
}

/// Finds an exact match first, then a table for the same language.
fn match_available(
    candidate: &str,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let lang = candidate.parse::<LanguageIdentifier>().ok()?;
    if available.contains(&lang) {
        return Some(lang);
    }
    available
        .iter()
        .find(|locale| locale.language == lang.language)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn test_resolve_locale_preferred() {
        let lang = resolve_locale(Some("fr"), Some("en-US"), &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_os() {
        let lang = resolve_locale(None, Some("fr"), &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_matches_language_only() {
        let lang = resolve_locale(None, Some("fr-CA"), &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_skips_unavailable_preference() {
        let lang = resolve_locale(Some("de"), Some("fr-FR"), &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_none() {
        assert_eq!(resolve_locale(Some("ja"), None, &available()), None);
    }

    #[test]
    fn bundled_tables_are_loaded() {
        let i18n = I18n::new(Some("en-US"));
        assert!(i18n.available_locales.contains(&"en-US".parse().unwrap()));
        assert!(i18n.available_locales.contains(&"fr".parse().unwrap()));
        assert_eq!(i18n.current_locale(), &"en-US".parse::<LanguageIdentifier>().unwrap());
    }

    #[test]
    fn translates_labels() {
        let i18n = I18n::new(Some("en-US"));
        assert_eq!(i18n.tr("gallery-previous"), "Previous");
        assert_eq!(i18n.tr("gallery-next"), "Next");
        assert_eq!(i18n.tr("artwork-a-poet-reading"), "A Poet Reading");
    }

    #[test]
    fn preferred_language_selects_table() {
        let i18n = I18n::new(Some("fr"));
        assert_eq!(i18n.tr("gallery-next"), "Suivant");
    }

    #[test]
    fn unknown_preference_still_yields_a_table() {
        let i18n = I18n::new(Some("ja"));
        assert!(i18n.available_locales.contains(i18n.current_locale()));
    }

    #[test]
    fn substitutes_arguments() {
        let i18n = I18n::new(Some("en-US"));
        let position = i18n.tr_with_args("gallery-position", &[("position", "2"), ("total", "3")]);
        assert_eq!(position, "2 / 3");
    }

    #[test]
    fn missing_key_is_flagged() {
        let i18n = I18n::new(Some("en-US"));
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }
}
