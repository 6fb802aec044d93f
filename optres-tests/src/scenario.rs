//! Small end-to-end pipelines built only from combinators.

use optres::{None, Ok, Option, Result, Some};

/// `None` for a zero denominator, and for `i64::MIN / -1`, which has no `i64` result.
pub fn divide(numerator: i64, denominator: i64) -> Option<i64> {
    Option::from(numerator.checked_div(denominator))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

/// Looks up `key` in a flat `key=value` listing.
pub fn lookup<'a>(listing: &'a str, key: &str) -> Option<&'a str> {
    listing
        .lines()
        .filter_map(|line| line.split_once('='))
        .find(|(k, _)| k.trim() == key)
        .map(|(_, v)| v.trim())
        .into()
}

/// An optional integer setting: absent is fine, present but malformed is not.
pub fn optional_int(listing: &str, key: &'static str) -> Result<Option<i64>, ConfigError> {
    lookup(listing, key)
        .map(|raw| {
            Result::from(raw.parse::<i64>()).map_err(|_| ConfigError::Invalid {
                key,
                value: raw.to_string(),
            })
        })
        .transpose()
}

/// A required integer setting.
pub fn required_int(listing: &str, key: &'static str) -> Result<i64, ConfigError> {
    optional_int(listing, key).and_then(|v| v.ok_or(ConfigError::Missing(key)))
}

/// `total / parts`, falling back to the whole total when `parts` is unset and
/// failing when `parts` is zero or the quotient overflows.
pub fn share(listing: &str) -> Result<i64, ConfigError> {
    required_int(listing, "total").and_then(|total| {
        optional_int(listing, "parts").and_then(|parts| match parts {
            Some(parts) => divide(total, parts).ok_or_else(|| ConfigError::Invalid {
                key: "parts",
                value: parts.to_string(),
            }),
            None => Ok(total),
        })
    })
}
