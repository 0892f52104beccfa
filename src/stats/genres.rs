//! Genre distribution.

use serde::Serialize;

use super::{Tally, percentage};
use crate::model::AlbumRecord;

/// One genre and how often it occurs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreCount {
    pub name: String,
    pub count: usize,
    pub percentage: f64,
}

/// Genre distribution across the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreStats {
    /// Genres by count, most frequent first
    pub distribution: Vec<GenreCount>,
    /// Genre token occurrences, not records
    pub total_with_genre: usize,
    pub unique_genres: usize,
}

/// Count every genre token of the given records.
///
/// A record tagged `"Rock, Jazz"` adds one to both genres.
pub(crate) fn tally_genres<'a>(albums: impl IntoIterator<Item = &'a AlbumRecord>) -> Tally<'a> {
    let mut tally = Tally::default();
    for album in albums {
        for genre in album.genres() {
            tally.add(genre);
        }
    }
    tally
}

/// Rank tallied genres, computing percentages against `denominator`.
pub(crate) fn ranked_genres(tally: Tally<'_>, denominator: usize) -> Vec<GenreCount> {
    tally
        .into_ranked()
        .into_iter()
        .map(|(name, count)| GenreCount {
            name: name.to_string(),
            count,
            percentage: percentage(count, denominator),
        })
        .collect()
}

pub fn genre_stats(albums: &[AlbumRecord]) -> GenreStats {
    let tally = tally_genres(albums);
    let total_with_genre = tally.total();
    let distribution = ranked_genres(tally, total_with_genre);

    GenreStats {
        unique_genres: distribution.len(),
        distribution,
        total_with_genre,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::genre_album;

    #[test]
    fn test_multi_genre_records() {
        let albums = vec![
            genre_album("Rock"),
            genre_album("Rock, Jazz"),
            genre_album("Jazz/Blues"),
        ];
        let stats = genre_stats(&albums);

        let counts: Vec<_> = stats
            .distribution
            .iter()
            .map(|g| (g.name.as_str(), g.count))
            .collect();
        assert_eq!(counts, vec![("Rock", 2), ("Jazz", 2), ("Blues", 1)]);
        assert_eq!(stats.total_with_genre, 5);
        assert_eq!(stats.unique_genres, 3);
        assert_eq!(stats.distribution[0].percentage, 40.0);
        assert_eq!(stats.distribution[2].percentage, 20.0);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let albums = vec![
            genre_album("Soul"),
            genre_album("Funk"),
            genre_album("Disco, Funk"),
            genre_album("Soul"),
        ];
        let stats = genre_stats(&albums);

        let names: Vec<_> = stats.distribution.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Soul", "Funk", "Disco"]);
    }

    #[test]
    fn test_no_genres() {
        let albums = vec![AlbumRecord::default(), genre_album(" , / ")];
        let stats = genre_stats(&albums);

        assert!(stats.distribution.is_empty());
        assert_eq!(stats.total_with_genre, 0);
        assert_eq!(stats.unique_genres, 0);
    }

    #[test]
    fn test_genre_names_are_case_sensitive() {
        let albums = vec![genre_album("rock"), genre_album("Rock")];
        let stats = genre_stats(&albums);
        assert_eq!(stats.unique_genres, 2);
    }
}
