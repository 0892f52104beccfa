//! Release year range and per-year counts.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::AlbumRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i64,
    pub count: usize,
}

/// Year range of the catalog.
///
/// When no record has a parseable year, `oldest` and `newest` are `None`,
/// `span` is 0 and there is no distribution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct YearRangeStats {
    pub oldest: Option<i64>,
    pub newest: Option<i64>,
    /// Inclusive number of years covered
    pub span: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution: Option<Vec<YearCount>>,
}

impl YearRangeStats {
    /// Whether any valid year was found.
    pub fn has_years(&self) -> bool {
        self.oldest.is_some()
    }
}

pub fn year_range_stats(albums: &[AlbumRecord]) -> YearRangeStats {
    let mut years: BTreeMap<i64, usize> = BTreeMap::new();
    for year in albums.iter().filter_map(AlbumRecord::release_year) {
        *years.entry(year).or_default() += 1;
    }

    let (Some(&oldest), Some(&newest)) = (years.keys().next(), years.keys().next_back()) else {
        return YearRangeStats::default();
    };

    YearRangeStats {
        oldest: Some(oldest),
        newest: Some(newest),
        span: newest - oldest + 1,
        distribution: Some(
            years
                .into_iter()
                .map(|(year, count)| YearCount { year, count })
                .collect(),
        ),
    }
}
