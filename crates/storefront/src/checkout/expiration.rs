//! Card expiration dropdowns.

use chrono::{Locale, TimeZone, Utc};

/// Locale used when neither the request nor the configuration names a known one.
pub const FALLBACK_LOCALE: Locale = Locale::en_US;

/// The twelve month entries, formatted `"MM - Month"` in `locale`.
#[must_use]
pub fn expiration_months(locale: Locale) -> Vec<String> {
    (1..=12)
        .filter_map(|month| {
            let first = Utc.with_ymd_and_hms(2000, month, 1, 0, 0, 0).single()?;
            Some(format!(
                "{month:02} - {}",
                first.format_localized("%B", locale)
            ))
        })
        .collect()
}

/// `count` consecutive years starting at `start_year`.
#[must_use]
pub fn expiration_years(start_year: i32, count: usize) -> Vec<i32> {
    (start_year..).take(count).collect()
}

/// Regions for bare languages whose usual region code differs from the
/// language code.
const LANGUAGE_REGIONS: &[(&str, &str)] = &[
    ("cs", "CZ"),
    ("da", "DK"),
    ("el", "GR"),
    ("en", "US"),
    ("he", "IL"),
    ("ja", "JP"),
    ("ko", "KR"),
    ("nb", "NO"),
    ("pt", "PT"),
    ("sv", "SE"),
    ("uk", "UA"),
    ("zh", "CN"),
];

/// Parse a POSIX-style locale name (`fr_FR`), a BCP 47 tag (`fr-FR`) or a
/// bare language (`fr`, resolved to its main region).
#[must_use]
pub fn parse_locale(name: &str) -> Option<Locale> {
    let normalized = name.trim().replace('-', "_");
    if let Ok(locale) = Locale::try_from(normalized.as_str()) {
        return Some(locale);
    }

    let (language, region) = normalized
        .split_once('_')
        .map_or((normalized.as_str(), None), |(language, region)| {
            (language, Some(region))
        });
    let language = language.to_ascii_lowercase();
    if language.is_empty() || !language.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }

    let region = match region {
        Some(region) => region.to_ascii_uppercase(),
        None => LANGUAGE_REGIONS
            .iter()
            .find(|(code, _)| *code == language)
            .map_or_else(|| language.to_ascii_uppercase(), |(_, region)| (*region).to_string()),
    };
    Locale::try_from(format!("{language}_{region}").as_str()).ok()
}

/// Pick the locale for a request from its `Accept-Language` header.
///
/// Tags are tried in header order, ignoring quality weights. The first
/// recognised one wins; otherwise `default` is used.
#[must_use]
pub fn negotiate_locale(accept_language: Option<&str>, default: Locale) -> Locale {
    accept_language
        .into_iter()
        .flat_map(|header| header.split(','))
        .filter_map(|entry| entry.split(';').next())
        .find_map(parse_locale)
        .unwrap_or(default)
}
