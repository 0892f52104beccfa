//! Artist representation and diversity.

use serde::Serialize;

use super::{Tally, percentage};
use crate::model::AlbumRecord;

/// Number of artists reported in [`ArtistStats::most_represented`].
pub const TOP_ARTISTS: usize = 10;

/// Minimum records for an artist to count as a potential complete discography.
pub const DISCOGRAPHY_THRESHOLD: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistCount {
    pub name: String,
    pub count: usize,
    /// Share of all records in the catalog
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistStats {
    pub most_represented: Vec<ArtistCount>,
    pub unique_artists: usize,
    /// Every artist with at least [`DISCOGRAPHY_THRESHOLD`] records
    pub potential_complete_discographies: Vec<String>,
    /// Unique artists per hundred records
    pub artist_diversity: f64,
}

pub fn artist_stats(albums: &[AlbumRecord]) -> ArtistStats {
    let mut tally = Tally::default();
    for artist in albums.iter().filter_map(AlbumRecord::artist_name) {
        tally.add(artist);
    }

    let total = albums.len();
    let unique_artists = tally.len();
    let ranked = tally.into_ranked();

    let potential_complete_discographies = ranked
        .iter()
        .filter(|(_, count)| *count >= DISCOGRAPHY_THRESHOLD)
        .map(|(name, _)| name.to_string())
        .collect();

    let most_represented = ranked
        .into_iter()
        .take(TOP_ARTISTS)
        .map(|(name, count)| ArtistCount {
            name: name.to_string(),
            count,
            percentage: percentage(count, total),
        })
        .collect();

    ArtistStats {
        most_represented,
        unique_artists,
        potential_complete_discographies,
        artist_diversity: percentage(unique_artists, total),
    }
}
