//! EP/LP split.

use serde::Serialize;

use super::percentage;
use crate::model::AlbumRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeShare {
    pub count: usize,
    pub percentage: f64,
}

/// Every record is exactly one of EP or LP; unmarked records are LPs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordTypeStats {
    pub eps: TypeShare,
    pub lps: TypeShare,
}

pub fn record_type_stats(albums: &[AlbumRecord]) -> RecordTypeStats {
    let total = albums.len();
    let eps = albums.iter().filter(|a| a.is_ep()).count();
    let lps = total - eps;

    RecordTypeStats {
        eps: TypeShare {
            count: eps,
            percentage: percentage(eps, total),
        },
        lps: TypeShare {
            count: lps,
            percentage: percentage(lps, total),
        },
    }
}
