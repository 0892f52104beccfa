//! Favorite records and their genres.

use serde::Serialize;

use super::genres::{GenreCount, ranked_genres, tally_genres};
use super::percentage;
use crate::model::AlbumRecord;

/// Number of genres kept in [`FavoriteStats::genre_breakdown`].
pub const TOP_FAVORITE_GENRES: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteStats {
    pub count: usize,
    /// Share of all records
    pub percentage: f64,
    /// Most common genres among favorites; percentages are of the favorite count
    pub genre_breakdown: Vec<GenreCount>,
}

pub fn favorite_stats(albums: &[AlbumRecord]) -> FavoriteStats {
    let favorites: Vec<&AlbumRecord> = albums.iter().filter(|a| a.is_favorite()).collect();
    let count = favorites.len();

    let mut genre_breakdown = ranked_genres(tally_genres(favorites), count);
    genre_breakdown.truncate(TOP_FAVORITE_GENRES);

    FavoriteStats {
        count,
        percentage: percentage(count, albums.len()),
        genre_breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::favorite_album;

    #[test]
    fn test_only_favorites_count() {
        let albums = vec![
            favorite_album("yes", "Jazz"),
            favorite_album(" TRUE ", "Jazz, Soul"),
            favorite_album("no", "Metal"),
            AlbumRecord {
                genre: Some("Metal".to_string()),
                ..Default::default()
            },
        ];
        let stats = favorite_stats(&albums);

        assert_eq!(stats.count, 2);
        assert_eq!(stats.percentage, 50.0);
        let genres: Vec<_> = stats
            .genre_breakdown
            .iter()
            .map(|g| (g.name.as_str(), g.count, g.percentage))
            .collect();
        assert_eq!(genres, vec![("Jazz", 2, 100.0), ("Soul", 1, 50.0)]);
    }

    #[test]
    fn test_breakdown_limited_to_top_five() {
        let albums = vec![
            favorite_album("yes", "A, B, C"),
            favorite_album("yes", "D, E, F"),
            favorite_album("yes", "F"),
        ];
        let stats = favorite_stats(&albums);

        assert_eq!(stats.genre_breakdown.len(), TOP_FAVORITE_GENRES);
        assert_eq!(stats.genre_breakdown[0].name, "F");
    }

    #[test]
    fn test_no_favorites() {
        let albums = vec![favorite_album("maybe", "Rock")];
        let stats = favorite_stats(&albums);

        assert_eq!(stats.count, 0);
        assert_eq!(stats.percentage, 0.0);
        assert!(stats.genre_breakdown.is_empty());
    }
}
