//! Estimated listening time.
//!
//! Catalog entries carry no durations, so each record is classified into a
//! [`ReleaseKind`] with a typical runtime and the runtimes are summed.

use serde::Serialize;

use crate::model::{AlbumRecord, SizeBucket};

/// Runtime class of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseKind {
    Lp,
    Ep,
    Single,
}

impl ReleaseKind {
    /// Classify a record: an EP marker wins, then a 7" size means a single,
    /// everything else is an LP.
    pub fn of(album: &AlbumRecord) -> Self {
        if album.is_ep() {
            Self::Ep
        } else if album.size_bucket() == Some(SizeBucket::Seven) {
            Self::Single
        } else {
            Self::Lp
        }
    }

    /// Typical runtime in minutes.
    pub fn minutes(&self) -> u64 {
        match self {
            Self::Lp => 40,
            Self::Ep => 20,
            Self::Single => 8,
        }
    }
}

/// Days/hours/minutes breakdown for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DisplayTime {
    pub days: u64,
    /// Hours left after whole days
    pub hours: u64,
    pub minutes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListeningTime {
    pub total_minutes: u64,
    /// Whole hours, not reduced by days
    pub hours: u64,
    pub formatted_time: String,
    pub display_time: DisplayTime,
}

impl ListeningTime {
    pub fn from_minutes(total_minutes: u64) -> Self {
        let hours = total_minutes / 60;
        let minutes = total_minutes % 60;
        let days = hours / 24;
        let remaining_hours = hours % 24;

        let formatted_time = if days > 0 {
            format!("{days} days, {remaining_hours} hours, {minutes} minutes")
        } else {
            format!("{hours} hours, {minutes} minutes")
        };

        Self {
            total_minutes,
            hours,
            formatted_time,
            display_time: DisplayTime {
                days,
                hours: remaining_hours,
                minutes,
            },
        }
    }

    /// Short form used on overview cards, e.g. `"2d 5h"`.
    pub fn compact(&self) -> String {
        format!("{}d {}h", self.display_time.days, self.display_time.hours)
    }

    pub fn fun_facts(&self) -> FunFacts {
        FunFacts::from_listening_time(self)
    }
}

/// Coast-to-coast road trip, NY to LA
const ROAD_TRIP_MILES: u64 = 2800;
const ROAD_TRIP_MPH: u64 = 65;
const LISTENING_HOURS_PER_DAY: u64 = 8;
const HOURS_PER_NOVEL: u64 = 5;

/// Comparisons shown under the listening time on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunFacts {
    /// Days to get through the catalog at 8 hours a day
    pub marathon_days: u64,
    /// Whole days of non-stop playback, rounded up
    pub albums_per_day: u64,
    /// Share of the catalog heard on the road trip; `None` under one hour
    pub road_trip_percentage: Option<u64>,
    /// Novels read in the same time, at 5 hours each
    pub novel_count: u64,
}

impl FunFacts {
    pub fn from_listening_time(time: &ListeningTime) -> Self {
        let hours = time.hours;
        let road_trip_percentage = match hours * ROAD_TRIP_MPH {
            0 => None,
            distance => Some(ROAD_TRIP_MILES * 100 / distance),
        };

        Self {
            marathon_days: hours.div_ceil(LISTENING_HOURS_PER_DAY),
            albums_per_day: time.total_minutes.div_ceil(24 * 60),
            road_trip_percentage,
            novel_count: hours / HOURS_PER_NOVEL,
        }
    }
}

impl Default for ListeningTime {
    fn default() -> Self {
        Self::from_minutes(0)
    }
}

pub fn estimate_listening_time(albums: &[AlbumRecord]) -> ListeningTime {
    let total = albums.iter().map(|a| ReleaseKind::of(a).minutes()).sum();
    ListeningTime::from_minutes(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ep_album, size_album};

    #[test]
    fn test_classification_priority() {
        let seven_inch_ep = AlbumRecord {
            isep: Some("yes".to_string()),
            size: Some("7\"".to_string()),
            ..Default::default()
        };
        assert_eq!(ReleaseKind::of(&seven_inch_ep), ReleaseKind::Ep);
        assert_eq!(ReleaseKind::of(&size_album(" 7\" ")), ReleaseKind::Single);
        assert_eq!(ReleaseKind::of(&size_album("10\"")), ReleaseKind::Lp);
        assert_eq!(ReleaseKind::of(&ep_album("no")), ReleaseKind::Lp);
        assert_eq!(ReleaseKind::of(&AlbumRecord::default()), ReleaseKind::Lp);
    }

    #[test]
    fn test_mixed_catalog_estimate() {
        let albums = vec![ep_album("yes"), size_album("7\""), AlbumRecord::default()];
        let time = estimate_listening_time(&albums);

        assert_eq!(time.total_minutes, 68);
        assert_eq!(time.hours, 1);
        assert_eq!(
            time.display_time,
            DisplayTime {
                days: 0,
                hours: 1,
                minutes: 8
            }
        );
        assert_eq!(time.formatted_time, "1 hours, 8 minutes");
    }

    #[test]
    fn test_formatting_with_days() {
        // 37 LPs = 1480 minutes = 24h 40m
        let time = ListeningTime::from_minutes(37 * 40);

        assert_eq!(time.hours, 24);
        assert_eq!(time.display_time.days, 1);
        assert_eq!(time.display_time.hours, 0);
        assert_eq!(time.formatted_time, "1 days, 0 hours, 40 minutes");
        assert_eq!(time.compact(), "1d 0h");
    }

    #[test]
    fn test_zero_minutes() {
        let time = ListeningTime::default();
        assert_eq!(time.formatted_time, "0 hours, 0 minutes");
    }

    #[test]
    fn test_fun_facts() {
        // 100 LPs = 4000 minutes = 66h 40m
        let facts = ListeningTime::from_minutes(100 * 40).fun_facts();

        assert_eq!(facts.marathon_days, 9);
        assert_eq!(facts.albums_per_day, 3);
        // 2800 / (66 * 65) * 100 = 65.27
        assert_eq!(facts.road_trip_percentage, Some(65));
        assert_eq!(facts.novel_count, 13);
    }

    #[test]
    fn test_fun_facts_round_up_partial_days() {
        let facts = ListeningTime::from_minutes(68).fun_facts();

        assert_eq!(facts.marathon_days, 1);
        assert_eq!(facts.albums_per_day, 1);
        assert_eq!(facts.road_trip_percentage, Some(4307));
        assert_eq!(facts.novel_count, 0);
    }

    #[test]
    fn test_fun_facts_under_an_hour() {
        let facts = ListeningTime::from_minutes(40).fun_facts();
        assert_eq!(facts.road_trip_percentage, None);
        assert_eq!(facts.marathon_days, 0);
        assert_eq!(facts.albums_per_day, 1);

        assert_eq!(ListeningTime::default().fun_facts().albums_per_day, 0);
    }
}
