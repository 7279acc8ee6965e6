use std::env;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleSettingsError {
    #[error("no supported locales configured")]
    NoSupportedLocales,

    #[error("default locale '{0}' is not in the supported set")]
    UnsupportedDefault(String),

    #[error("fallback locale '{0}' is not in the supported set")]
    UnsupportedFallback(String),
}

/// Locale pair threaded through every translation lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocale {
    pub locale: String,
    pub fallback: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSettings {
    pub default_locale: String,
    pub fallback_locale: String,
    /// Every project must be translated into these plus the en/nb minimum.
    pub supported_locales: Vec<String>,
}

impl LocaleSettings {
    pub const DEFAULT_LOCALE: &'static str = "nb";
    pub const DEFAULT_FALLBACK_LOCALE: &'static str = "en";
    pub const DEFAULT_SUPPORTED_LOCALES: &'static [&'static str] = &["en", "nb"];

    pub fn new(
        default_locale: &str,
        fallback_locale: &str,
        supported_locales: &[&str],
    ) -> Result<Self, LocaleSettingsError> {
        let supported_locales: Vec<String> = supported_locales
            .iter()
            .filter_map(|l| normalize_locale(l))
            .collect();

        if supported_locales.is_empty() {
            return Err(LocaleSettingsError::NoSupportedLocales);
        }

        let default_locale = normalize_locale(default_locale).unwrap_or_default();
        if !supported_locales.contains(&default_locale) {
            return Err(LocaleSettingsError::UnsupportedDefault(default_locale));
        }

        let fallback_locale = normalize_locale(fallback_locale).unwrap_or_default();
        if !supported_locales.contains(&fallback_locale) {
            return Err(LocaleSettingsError::UnsupportedFallback(fallback_locale));
        }

        Ok(Self {
            default_locale,
            fallback_locale,
            supported_locales,
        })
    }

    /// Reads `APP_DEFAULT_LOCALE`, `APP_FALLBACK_LOCALE` and the comma
    /// separated `APP_SUPPORTED_LOCALES`, falling back to nb / en / en,nb.
    pub fn from_env() -> Result<Self, LocaleSettingsError> {
        let default_locale = non_empty_var("APP_DEFAULT_LOCALE")
            .unwrap_or_else(|| Self::DEFAULT_LOCALE.to_string());
        let fallback_locale = non_empty_var("APP_FALLBACK_LOCALE")
            .unwrap_or_else(|| Self::DEFAULT_FALLBACK_LOCALE.to_string());
        let supported = non_empty_var("APP_SUPPORTED_LOCALES")
            .unwrap_or_else(|| Self::DEFAULT_SUPPORTED_LOCALES.join(","));

        let supported: Vec<&str> = supported.split(',').collect();
        Self::new(&default_locale, &fallback_locale, &supported)
    }

    pub fn is_supported(&self, locale: &str) -> bool {
        self.supported_locales.iter().any(|l| l == locale)
    }

    /// Query parameter first, then `Accept-Language`, then the default.
    /// Unsupported candidates are skipped.
    pub fn resolve(&self, requested: Option<&str>, accept_language: Option<&str>) -> ResolvedLocale {
        let from_request = requested
            .and_then(normalize_locale)
            .filter(|l| self.is_supported(l));

        let locale = from_request
            .or_else(|| {
                accept_language.and_then(|header| {
                    parse_accept_language(header)
                        .into_iter()
                        .find(|l| self.is_supported(l))
                })
            })
            .unwrap_or_else(|| self.default_locale.clone());

        ResolvedLocale {
            locale,
            fallback: self.fallback_locale.clone(),
        }
    }
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            default_locale: Self::DEFAULT_LOCALE.to_string(),
            fallback_locale: Self::DEFAULT_FALLBACK_LOCALE.to_string(),
            supported_locales: Self::DEFAULT_SUPPORTED_LOCALES
                .iter()
                .map(|l| l.to_string())
                .collect(),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.trim().is_empty())
}

/// Lowercased primary subtag: `nb-NO` -> `nb`, `EN_us` -> `en`.
pub fn normalize_locale(raw: &str) -> Option<String> {
    let primary = raw.trim().split(['-', '_']).next()?;
    if primary.is_empty() || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(primary.to_ascii_lowercase())
}

/// Locales from an `Accept-Language` header, highest quality first.
/// Entries with q=0 and wildcards are dropped.
pub fn parse_accept_language(header: &str) -> Vec<String> {
    let mut weighted: Vec<(String, f32)> = header
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let tag = parts.next()?.trim();
            if tag == "*" {
                return None;
            }
            let quality = parts
                .find_map(|p| p.trim().strip_prefix("q="))
                .map(|q| q.trim().parse::<f32>().unwrap_or(0.0))
                .unwrap_or(1.0);
            if quality <= 0.0 {
                return None;
            }
            normalize_locale(tag).map(|locale| (locale, quality))
        })
        .collect();

    // Stable, so equal weights keep header order.
    weighted.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut locales = Vec::with_capacity(weighted.len());
    for (locale, _) in weighted {
        if !locales.contains(&locale) {
            locales.push(locale);
        }
    }
    locales
}
