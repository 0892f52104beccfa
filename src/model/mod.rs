//! Core data model for the record catalog.
//!
//! Defines [`AlbumRecord`], one entry of the catalog as it arrives from a
//! [`CatalogSource`](crate::catalog::CatalogSource), and the normalization
//! rules every statistic relies on:
//!
//! - [`is_truthy`] - boolean-like text (`isfavorite`, `isep`)
//! - [`parse_year`] - leading-integer year parsing
//! - [`split_genres`] - comma/slash separated genre lists
//! - [`SizeBucket`] - physical record size classification
//!
//! Catalog fields are loosely typed: a year may be `1975` or `"1975"`, a
//! favorite flag may be `true` or `"Yes"`. Every field is therefore stored
//! as optional text and interpreted through the functions above.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single record in the catalog.
///
/// Empty strings and `null` are treated as absent. Unknown keys in the
/// source document are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlbumRecord {
    /// Artist name, free text
    #[serde(deserialize_with = "loose_text", skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    /// Album title, free text
    #[serde(deserialize_with = "loose_text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// One or more genres separated by `,` or `/`
    #[serde(deserialize_with = "loose_text", skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Release year as entered
    #[serde(deserialize_with = "loose_year", skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// Physical size, usually `7"`, `10"` or `12"`
    #[serde(deserialize_with = "loose_text", skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Favorite marker (see [`is_truthy`])
    #[serde(deserialize_with = "loose_text", skip_serializing_if = "Option::is_none")]
    pub isfavorite: Option<String>,
    /// EP marker (see [`is_truthy`])
    #[serde(deserialize_with = "loose_text", skip_serializing_if = "Option::is_none")]
    pub isep: Option<String>,
    /// Artwork URL, never fetched
    #[serde(deserialize_with = "loose_text", skip_serializing_if = "Option::is_none")]
    pub artwork: Option<String>,
}

impl AlbumRecord {
    /// Whether the record is marked as a favorite.
    pub fn is_favorite(&self) -> bool {
        is_truthy(self.isfavorite.as_deref())
    }

    /// Whether the record is marked as an EP. Unmarked records are LPs.
    pub fn is_ep(&self) -> bool {
        is_truthy(self.isep.as_deref())
    }

    /// Parsed release year, if any.
    pub fn release_year(&self) -> Option<i64> {
        self.year.as_deref().and_then(parse_year)
    }

    /// Genre tokens of this record, in the order they appear.
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.genre.as_deref().into_iter().flat_map(split_genres)
    }

    /// Artist name used for grouping (exact match, no case folding).
    pub fn artist_name(&self) -> Option<&str> {
        self.artist.as_deref().filter(|a| !a.is_empty())
    }

    /// Size bucket, or `None` when the record has no size at all.
    pub fn size_bucket(&self) -> Option<SizeBucket> {
        self.size.as_deref().map(SizeBucket::classify)
    }

    /// Whether a non-blank artwork URL is present.
    pub fn has_artwork(&self) -> bool {
        self.artwork
            .as_deref()
            .map(|a| !a.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Normalize a boolean-like text field.
///
/// The value is trimmed and lowercased; only `yes` and `true` count as set.
/// Absent values are false.
pub fn is_truthy(value: Option<&str>) -> bool {
    match value {
        Some(v) => {
            let normalized = v.trim().to_lowercase();
            normalized == "yes" || normalized == "true"
        }
        None => false,
    }
}

/// Parse a year from free text.
///
/// Skips leading whitespace, accepts an optional sign and reads the longest
/// run of ASCII digits that follows. Trailing text is ignored, so
/// `"1975-03-01"` yields 1975. Returns `None` when no digits lead the value
/// or the number does not fit in an `i32`.
pub fn parse_year(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let year: i32 = digits[..end].parse().ok()?;
    Some(i64::from(if negative { -year } else { year }))
}

/// Split a genre field on `,` and `/`, trimming tokens and dropping empty ones.
///
/// `"Rock, Jazz/Blues"` yields `Rock`, `Jazz`, `Blues`.
pub fn split_genres(raw: &str) -> impl Iterator<Item = &str> {
    raw.split([',', '/'])
        .map(str::trim)
        .filter(|g| !g.is_empty())
}

/// Physical record size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SizeBucket {
    #[serde(rename = "7\"")]
    Seven,
    #[serde(rename = "10\"")]
    Ten,
    #[serde(rename = "12\"")]
    Twelve,
    Other,
}

impl SizeBucket {
    /// All buckets in display order.
    pub const ALL: [SizeBucket; 4] = [Self::Seven, Self::Ten, Self::Twelve, Self::Other];

    /// Classify a raw size value. Only exact (trimmed) matches of the three
    /// standard sizes are recognized; everything else is `Other`.
    pub fn classify(raw: &str) -> Self {
        match raw.trim() {
            "7\"" => Self::Seven,
            "10\"" => Self::Ten,
            "12\"" => Self::Twelve,
            _ => Self::Other,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Seven => "7\"",
            Self::Ten => "10\"",
            Self::Twelve => "12\"",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for SizeBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Accept strings, numbers and booleans as text. Empty strings, `null`,
/// arrays and objects become `None`.
fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(value_text))
}

/// Like [`loose_text`], but a numeric `0` means "no year". The string `"0"`
/// is kept.
fn loose_year<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        value => value.and_then(value_text),
    })
}

fn value_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
