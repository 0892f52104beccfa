//! Decade distribution.

use std::collections::BTreeMap;

use serde::Serialize;

use super::percentage;
use crate::model::AlbumRecord;

/// Records released in one decade.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecadeCount {
    /// Label such as `"1970s"`
    pub decade: String,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecadeStats {
    /// Decades in chronological order
    pub distribution: Vec<DecadeCount>,
    pub total_with_year: usize,
}

/// First year of the decade containing `year` (1975 -> 1970, -5 -> -10).
pub fn decade_of(year: i64) -> i64 {
    year.div_euclid(10) * 10
}

pub fn decade_stats(albums: &[AlbumRecord]) -> DecadeStats {
    let mut decades: BTreeMap<i64, usize> = BTreeMap::new();
    for year in albums.iter().filter_map(AlbumRecord::release_year) {
        *decades.entry(decade_of(year)).or_default() += 1;
    }

    let total_with_year = decades.values().sum();
    let distribution = decades
        .into_iter()
        .map(|(decade, count)| DecadeCount {
            decade: format!("{decade}s"),
            count,
            percentage: percentage(count, total_with_year),
        })
        .collect();

    DecadeStats {
        distribution,
        total_with_year,
    }
}
