//! Vinyl Stats - descriptive statistics for a vinyl record catalog.
//!
//! The [`stats`] module is the core: a pure engine that turns a list of
//! [`AlbumRecord`](model::AlbumRecord)s into a
//! [`StatisticsReport`](stats::StatisticsReport). Catalogs are supplied by a
//! [`CatalogSource`](catalog::CatalogSource); the [`cli`] module is a thin
//! consumer that prints reports.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod stats;
#[cfg(test)]
pub mod test_utils;
