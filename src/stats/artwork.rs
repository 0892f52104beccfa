//! Artwork coverage and color palette.
//!
//! No image is ever fetched or decoded. [`PlaceholderPalette`] counts
//! records with artwork and reports a fixed palette; the
//! [`ArtworkAnalyzer`] trait is the seam for a real analysis.

use serde::Serialize;

use super::percentage;
use crate::model::AlbumRecord;

/// Colors reported by [`PlaceholderPalette`].
pub const PLACEHOLDER_PALETTE: [&str; 5] = ["#e53935", "#8e24aa", "#1e88e5", "#43a047", "#ffb300"];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorAnalysis {
    pub albums_with_artwork: usize,
    /// Share of all records that have artwork
    pub coverage_percentage: f64,
    pub color_palette: Vec<String>,
}

/// Produces the color analysis section of a report.
pub trait ArtworkAnalyzer: Send + Sync {
    fn analyze(&self, albums: &[AlbumRecord]) -> ColorAnalysis;
}

/// Coverage counting with a constant palette.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderPalette;

impl ArtworkAnalyzer for PlaceholderPalette {
    fn analyze(&self, albums: &[AlbumRecord]) -> ColorAnalysis {
        let albums_with_artwork = albums.iter().filter(|a| a.has_artwork()).count();

        ColorAnalysis {
            albums_with_artwork,
            coverage_percentage: percentage(albums_with_artwork, albums.len()),
            color_palette: PLACEHOLDER_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::artwork_album;

    #[test]
    fn test_coverage_counts_non_blank_urls() {
        let albums = vec![
            artwork_album("https://covers.example/1.jpg"),
            artwork_album("   "),
            AlbumRecord::default(),
            artwork_album("https://covers.example/2.jpg"),
        ];
        let analysis = PlaceholderPalette.analyze(&albums);

        assert_eq!(analysis.albums_with_artwork, 2);
        assert_eq!(analysis.coverage_percentage, 50.0);
    }

    #[test]
    fn test_palette_is_fixed() {
        let analysis = PlaceholderPalette.analyze(&[]);
        assert_eq!(analysis.color_palette, PLACEHOLDER_PALETTE);
        assert_eq!(analysis.coverage_percentage, 0.0);
    }
}
