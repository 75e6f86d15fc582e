//! Internationalization module
//!
//! Provides report labels in English (en) and French (fr).
//! Supports automatic language detection based on system locale.

mod en;
mod fr;

use std::collections::HashMap;

/// Internationalization manager
pub struct I18n {
    current_lang: String,
    translations: HashMap<String, String>,
}

impl I18n {
    /// Create a new I18n instance with the specified language
    pub fn new(lang: &str) -> Self {
        let mut i18n = Self {
            current_lang: String::new(),
            translations: HashMap::new(),
        };
        i18n.set_language(lang);
        i18n
    }

    /// Set the current language ("auto" reads the locale environment)
    pub fn set_language(&mut self, lang: &str) {
        let lang = if lang == "auto" {
            detect_system_language()
        } else {
            lang.to_string()
        };

        self.translations = match lang.as_str() {
            "fr" => fr::get_translations(),
            _ => en::get_translations(),
        };
        self.current_lang = if lang == "fr" { lang } else { "en".to_string() };

        log::info!("Language set to: {}", self.current_lang);
    }

    /// Get a translated string by key, falling back to the key itself
    pub fn get(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Get the current language code
    pub fn current_language(&self) -> &str {
        &self.current_lang
    }

    /// Get available languages
    pub fn available_languages() -> Vec<(&'static str, &'static str)> {
        vec![("en", "English"), ("fr", "Fran\u{00E7}ais")]
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new("auto")
    }
}

/// Detect the language from the locale environment
fn detect_system_language() -> String {
    let locale = preferred_locale(|name| std::env::var(name).ok());
    language_from_locale(&locale).to_string()
}

/// First non-empty of LC_ALL, LC_MESSAGES and LANG, in POSIX precedence order
fn preferred_locale<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| "en".to_string())
}

/// Map a locale string such as "fr_FR.UTF-8" to a supported language code
fn language_from_locale(locale: &str) -> &'static str {
    let lang_code = locale
        .split('_')
        .next()
        .unwrap_or("en")
        .split('.')
        .next()
        .unwrap_or("en");

    match lang_code {
        "fr" => "fr",
        _ => "en",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_locale_mapping() {
        assert_eq!(language_from_locale("fr_FR.UTF-8"), "fr");
        assert_eq!(language_from_locale("fr"), "fr");
        assert_eq!(language_from_locale("en_IN.UTF-8"), "en");
        assert_eq!(language_from_locale("hi_IN"), "en");
        assert_eq!(language_from_locale("C.UTF-8"), "en");
    }

    #[test]
    fn test_lc_all_wins_over_lang() {
        let env = |name: &str| match name {
            "LC_ALL" => Some("fr_FR.UTF-8".to_string()),
            "LANG" => Some("en_IN.UTF-8".to_string()),
            _ => None,
        };
        assert_eq!(preferred_locale(env), "fr_FR.UTF-8");

        let env = |name: &str| match name {
            "LC_ALL" => Some(String::new()),
            "LANG" => Some("fr_CA".to_string()),
            _ => None,
        };
        assert_eq!(preferred_locale(env), "fr_CA");
        assert_eq!(preferred_locale(|_: &str| None), "en");
    }

    #[test]
    fn test_lookup_and_fallback() {
        let i18n = I18n::new("en");
        assert_eq!(i18n.current_language(), "en");
        assert_eq!(i18n.get("breakdown.base"), "Base Consumption");
        assert_eq!(i18n.get("no.such.key"), "no.such.key");

        let i18n = I18n::new("de");
        assert_eq!(i18n.current_language(), "en");
    }

    #[test]
    fn test_catalogues_share_keys() {
        let en: HashSet<_> = en::get_translations().into_keys().collect();
        let fr: HashSet<_> = fr::get_translations().into_keys().collect();
        assert_eq!(en, fr);
    }

    #[test]
    fn test_switch_language() {
        let mut i18n = I18n::new("en");
        i18n.set_language("fr");
        assert_eq!(i18n.current_language(), "fr");
        assert_eq!(i18n.get("appliance.washing_machine"), "Lave-linge");
        assert_eq!(I18n::available_languages().len(), 2);
    }
}
