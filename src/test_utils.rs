//! Test fixtures for vinyl-stats tests.
//!
//! Each helper builds an [`AlbumRecord`] with a single field set. Combine
//! fields with struct update syntax:
//!
//! ```ignore
//! let record = AlbumRecord {
//!     year: Some("1977".to_string()),
//!     ..genre_album("Punk")
//! };
//! ```

use crate::model::AlbumRecord;

/// A record with only a genre field.
pub fn genre_album(genre: &str) -> AlbumRecord {
    AlbumRecord {
        genre: Some(genre.to_string()),
        ..Default::default()
    }
}

/// A record with only a year field.
pub fn year_album(year: &str) -> AlbumRecord {
    AlbumRecord {
        year: Some(year.to_string()),
        ..Default::default()
    }
}

/// A record with only an artist field.
pub fn artist_album(artist: &str) -> AlbumRecord {
    AlbumRecord {
        artist: Some(artist.to_string()),
        ..Default::default()
    }
}

/// A record with only a size field.
pub fn size_album(size: &str) -> AlbumRecord {
    AlbumRecord {
        size: Some(size.to_string()),
        ..Default::default()
    }
}

/// A record with only an EP marker.
pub fn ep_album(isep: &str) -> AlbumRecord {
    AlbumRecord {
        isep: Some(isep.to_string()),
        ..Default::default()
    }
}

/// A record with only an artwork URL.
pub fn artwork_album(url: &str) -> AlbumRecord {
    AlbumRecord {
        artwork: Some(url.to_string()),
        ..Default::default()
    }
}

/// A record with a favorite marker and genre.
pub fn favorite_album(isfavorite: &str, genre: &str) -> AlbumRecord {
    AlbumRecord {
        isfavorite: Some(isfavorite.to_string()),
        ..genre_album(genre)
    }
}

/// A fully populated record.
pub fn mock_album(artist: &str, title: &str, genre: &str, year: &str, size: &str) -> AlbumRecord {
    AlbumRecord {
        artist: Some(artist.to_string()),
        title: Some(title.to_string()),
        genre: Some(genre.to_string()),
        year: Some(year.to_string()),
        size: Some(size.to_string()),
        isfavorite: None,
        isep: None,
        artwork: Some(format!("https://covers.example/{}.jpg", title.to_lowercase())),
    }
}

/// A small, varied catalog covering every report section.
pub fn mock_catalog() -> Vec<AlbumRecord> {
    vec![
        AlbumRecord {
            isfavorite: Some("yes".to_string()),
            ..mock_album("Can", "Tago Mago", "Krautrock, Experimental", "1971", "12\"")
        },
        mock_album("Can", "Ege Bamyasi", "Krautrock", "1972", "12\""),
        mock_album("Can", "Future Days", "Krautrock/Ambient", "1973", "12\""),
        AlbumRecord {
            isep: Some("Yes".to_string()),
            ..mock_album("Neu!", "Neu! 2", "Krautrock", "1973", "10\"")
        },
        mock_album("Kraftwerk", "Autobahn", "Electronic", "1974", "12\""),
        AlbumRecord {
            isfavorite: Some("TRUE".to_string()),
            ..mock_album("Kraftwerk", "Das Model", "Electronic, Synth-pop", "1978", "7\"")
        },
        mock_album("Cluster", "Zuckerzeit", "Electronic", "unknown", "12 inch"),
        AlbumRecord {
            artist: Some("Harmonia".to_string()),
            ..Default::default()
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_field_helpers() {
        assert_eq!(genre_album("Jazz").genre.as_deref(), Some("Jazz"));
        assert!(genre_album("Jazz").year.is_none());
        assert_eq!(ep_album("yes").isep.as_deref(), Some("yes"));
        assert!(favorite_album("yes", "Soul").is_favorite());
    }

    #[test]
    fn test_mock_catalog_shape() {
        let albums = mock_catalog();
        assert_eq!(albums.len(), 8);
        assert_eq!(albums.iter().filter(|a| a.is_favorite()).count(), 2);
        assert_eq!(albums.iter().filter(|a| a.is_ep()).count(), 1);
    }
}
