mod extractor;
mod locale;

pub use extractor::RequestLocale;
pub use locale::{
    normalize_locale, parse_accept_language, LocaleSettings, LocaleSettingsError, ResolvedLocale,
};
