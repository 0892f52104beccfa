//! Collection statistics.
//!
//! [`StatsEngine::compute`] turns a catalog into a [`StatisticsReport`].
//! Each section of the report comes from an independent function that only
//! reads the album slice:
//!
//! - [`genre_stats`] - genre distribution (comma/slash separated genres)
//! - [`decade_stats`] - records per decade
//! - [`artist_stats`] - top artists, discographies, diversity
//! - [`size_stats`] - 7"/10"/12"/Other split
//! - [`favorite_stats`] - favorites and their genres
//! - [`record_type_stats`] - EP/LP split
//! - [`year_range_stats`] - oldest/newest year and per-year counts
//! - [`estimate_listening_time`] - runtime estimate from record types
//! - [`ArtworkAnalyzer`] - artwork coverage and palette
//!
//! None of them can fail: values that cannot be interpreted are left out of
//! the denominator they would feed. Percentages are rounded to one decimal
//! place and are 0 when their denominator is 0.
//!
//! Large catalogs are evaluated on the rayon pool; the result is identical
//! to the sequential path.

mod artists;
mod artwork;
mod decades;
mod favorites;
mod genres;
mod listening;
mod record_types;
mod sizes;
mod years;

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::config::StatsConfig;
use crate::model::AlbumRecord;

pub use artists::{ArtistCount, ArtistStats, DISCOGRAPHY_THRESHOLD, TOP_ARTISTS, artist_stats};
pub use artwork::{ArtworkAnalyzer, ColorAnalysis, PLACEHOLDER_PALETTE, PlaceholderPalette};
pub use decades::{DecadeCount, DecadeStats, decade_of, decade_stats};
pub use favorites::{FavoriteStats, TOP_FAVORITE_GENRES, favorite_stats};
pub use genres::{GenreCount, GenreStats, genre_stats};
pub use listening::{DisplayTime, FunFacts, ListeningTime, ReleaseKind, estimate_listening_time};
pub use record_types::{RecordTypeStats, TypeShare, record_type_stats};
pub use sizes::{SizeCount, SizeStats, size_stats};
pub use years::{YearCount, YearRangeStats, year_range_stats};

/// Full statistics for a catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsReport {
    pub total_records: usize,
    pub genres: GenreStats,
    pub decades: DecadeStats,
    pub artists: ArtistStats,
    pub sizes: SizeStats,
    pub favorites: FavoriteStats,
    pub record_types: RecordTypeStats,
    pub years: YearRangeStats,
    pub listening_time: ListeningTime,
    pub color_analysis: ColorAnalysis,
}

/// Computes [`StatisticsReport`]s.
///
/// The engine holds no catalog state; the same engine can be reused for any
/// number of catalogs.
#[derive(Debug, Clone)]
pub struct StatsEngine<A = PlaceholderPalette> {
    parallel_threshold: usize,
    analyzer: A,
}

impl StatsEngine {
    /// Engine with the default settings and the placeholder palette.
    pub fn new() -> Self {
        Self::from_config(&StatsConfig::default())
    }

    /// Engine tuned by the `[stats]` config section.
    pub fn from_config(config: &StatsConfig) -> Self {
        Self {
            parallel_threshold: config.parallel_threshold,
            analyzer: PlaceholderPalette,
        }
    }
}

impl Default for StatsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ArtworkAnalyzer> StatsEngine<A> {
    /// Replace the artwork analyzer.
    pub fn with_analyzer<B: ArtworkAnalyzer>(self, analyzer: B) -> StatsEngine<B> {
        StatsEngine {
            parallel_threshold: self.parallel_threshold,
            analyzer,
        }
    }

    /// Catalog size from which sections are computed in parallel.
    /// `0` disables parallel evaluation.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Compute statistics for `albums`.
    ///
    /// Returns `None` for an empty catalog so callers can tell "nothing to
    /// report" apart from a report full of zeros.
    pub fn compute(&self, albums: &[AlbumRecord]) -> Option<StatisticsReport> {
        if albums.is_empty() {
            debug!(target: "stats", "Empty catalog, no report");
            return None;
        }

        let parallel = self.parallel_threshold > 0 && albums.len() >= self.parallel_threshold;
        let report = if parallel {
            self.compute_parallel(albums)
        } else {
            self.compute_sequential(albums)
        };

        debug!(
            target: "stats",
            records = report.total_records,
            genres = report.genres.unique_genres,
            artists = report.artists.unique_artists,
            parallel,
            "Computed collection statistics"
        );
        Some(report)
    }

    fn compute_sequential(&self, albums: &[AlbumRecord]) -> StatisticsReport {
        StatisticsReport {
            total_records: albums.len(),
            genres: genre_stats(albums),
            decades: decade_stats(albums),
            artists: artist_stats(albums),
            sizes: size_stats(albums),
            favorites: favorite_stats(albums),
            record_types: record_type_stats(albums),
            years: year_range_stats(albums),
            listening_time: estimate_listening_time(albums),
            color_analysis: self.analyzer.analyze(albums),
        }
    }

    fn compute_parallel(&self, albums: &[AlbumRecord]) -> StatisticsReport {
        let ((genres, decades), (artists, sizes)) = rayon::join(
            || rayon::join(|| genre_stats(albums), || decade_stats(albums)),
            || rayon::join(|| artist_stats(albums), || size_stats(albums)),
        );
        let ((favorites, record_types), ((years, listening_time), color_analysis)) = rayon::join(
            || rayon::join(|| favorite_stats(albums), || record_type_stats(albums)),
            || {
                rayon::join(
                    || {
                        rayon::join(
                            || year_range_stats(albums),
                            || estimate_listening_time(albums),
                        )
                    },
                    || self.analyzer.analyze(albums),
                )
            },
        );

        StatisticsReport {
            total_records: albums.len(),
            genres,
            decades,
            artists,
            sizes,
            favorites,
            record_types,
            years,
            listening_time,
            color_analysis,
        }
    }
}

/// Compute statistics with the default engine.
pub fn compute(albums: &[AlbumRecord]) -> Option<StatisticsReport> {
    StatsEngine::new().compute(albums)
}

/// `count / total * 100`, rounded to one decimal place; 0 when `total` is 0.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 * 1000.0 / total as f64).round() / 10.0
}

/// Occurrence counter that remembers first-seen order.
///
/// Ranking sorts by count with a stable sort, so equal counts stay in the
/// order their keys first appeared.
#[derive(Debug, Default)]
pub(crate) struct Tally<'a> {
    index: HashMap<&'a str, usize>,
    entries: Vec<(&'a str, usize)>,
}

impl<'a> Tally<'a> {
    pub(crate) fn add(&mut self, key: &'a str) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Number of distinct keys.
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all counts.
    pub(crate) fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Entries by count, highest first.
    pub(crate) fn into_ranked(self) -> Vec<(&'a str, usize)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}
