//! Physical size distribution (7", 10", 12", Other).

use serde::Serialize;

use super::percentage;
use crate::model::{AlbumRecord, SizeBucket};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeCount {
    pub size: SizeBucket,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeStats {
    /// Non-empty buckets in `7"`, `10"`, `12"`, `Other` order
    pub distribution: Vec<SizeCount>,
    /// Records with any size value, including unrecognized ones
    pub total_with_size: usize,
}

pub fn size_stats(albums: &[AlbumRecord]) -> SizeStats {
    let mut counts = [0usize; 4];
    for bucket in albums.iter().filter_map(AlbumRecord::size_bucket) {
        counts[bucket_index(bucket)] += 1;
    }

    let total_with_size = counts.iter().sum();
    let distribution = SizeBucket::ALL
        .into_iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(size, count)| SizeCount {
            size,
            count,
            percentage: percentage(count, total_with_size),
        })
        .collect();

    SizeStats {
        distribution,
        total_with_size,
    }
}

fn bucket_index(bucket: SizeBucket) -> usize {
    match bucket {
        SizeBucket::Seven => 0,
        SizeBucket::Ten => 1,
        SizeBucket::Twelve => 2,
        SizeBucket::Other => 3,
    }
}
