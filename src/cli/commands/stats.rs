//! Catalog statistics command.

use std::fmt::Write;
use std::path::PathBuf;

use anyhow::{anyhow, bail};
use tracing::debug;

use crate::catalog::{CatalogSource, JsonFileSource};
use crate::config::Config;
use crate::stats::{StatisticsReport, StatsEngine};

/// How a report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Compute and print statistics for a catalog file
pub fn cmd_stats(
    config: &Config,
    path: Option<&PathBuf>,
    format: Option<&str>,
    compact: bool,
) -> anyhow::Result<()> {
    let Some(path) = path.or(config.catalog.path.as_ref()) else {
        bail!("No catalog given. Pass a path or set catalog.path in the config file.");
    };
    let format: OutputFormat = format
        .unwrap_or(config.output.format.as_str())
        .parse()
        .map_err(|e: String| anyhow!(e))?;

    let albums = JsonFileSource::new(path).load()?;
    let engine = StatsEngine::from_config(&config.stats);

    let Some(report) = engine.compute(&albums) else {
        println!("No records in catalog {:?}", path);
        return Ok(());
    };
    debug!(target: "cli::stats", ?format, "Rendering report");

    match format {
        OutputFormat::Json => {
            let json = if compact || !config.output.pretty_json {
                serde_json::to_string(&report)?
            } else {
                serde_json::to_string_pretty(&report)?
            };
            println!("{}", json);
        }
        OutputFormat::Text => print!("{}", render_text(&report)?),
    }
    Ok(())
}

/// Render a report as the plain-text dashboard.
pub fn render_text(report: &StatisticsReport) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(out, "Collection Statistics")?;
    writeln!(out, "=====================")?;
    writeln!(out, "Records:   {}", report.total_records)?;
    writeln!(out, "Artists:   {}", report.artists.unique_artists)?;
    writeln!(out, "Genres:    {}", report.genres.unique_genres)?;
    writeln!(out, "Play Time: {}", report.listening_time.compact())?;
    writeln!(out)?;

    writeln!(out, "Genres ({} tagged)", report.genres.total_with_genre)?;
    for genre in &report.genres.distribution {
        write_row(&mut out, &genre.name, genre.count, genre.percentage)?;
    }
    writeln!(out)?;

    writeln!(out, "Decades ({} with year)", report.decades.total_with_year)?;
    for decade in &report.decades.distribution {
        write_row(&mut out, &decade.decade, decade.count, decade.percentage)?;
    }
    writeln!(out)?;

    writeln!(out, "Sizes ({} with size)", report.sizes.total_with_size)?;
    for size in &report.sizes.distribution {
        write_row(&mut out, size.size.label(), size.count, size.percentage)?;
    }
    writeln!(out)?;

    writeln!(out, "Record Types")?;
    let types = &report.record_types;
    write_row(&mut out, "EP", types.eps.count, types.eps.percentage)?;
    write_row(&mut out, "LP", types.lps.count, types.lps.percentage)?;
    writeln!(out)?;

    writeln!(out, "Top Artists")?;
    for artist in &report.artists.most_represented {
        write_row(&mut out, &artist.name, artist.count, artist.percentage)?;
    }
    writeln!(out, "  Diversity: {:.1}%", report.artists.artist_diversity)?;
    writeln!(out)?;

    let discographies = &report.artists.potential_complete_discographies;
    if !discographies.is_empty() {
        writeln!(out, "Potential Complete Discographies")?;
        for name in discographies {
            writeln!(out, "  {}", name)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Years")?;
    let years = &report.years;
    match (years.oldest, years.newest, &years.distribution) {
        (Some(oldest), Some(newest), Some(distribution)) if !distribution.is_empty() => {
            writeln!(out, "  Oldest: {}", oldest)?;
            writeln!(out, "  Newest: {}", newest)?;
            writeln!(out, "  Span:   {} years", years.span)?;
            for year in distribution {
                writeln!(out, "  {:<24} {:>5}", year.year, year.count)?;
            }
        }
        _ => writeln!(out, "  No year data")?,
    }
    writeln!(out)?;

    let listening = &report.listening_time;
    writeln!(out, "Listening Time")?;
    writeln!(
        out,
        "  {} ({} minutes)",
        listening.formatted_time, listening.total_minutes
    )?;
    let facts = listening.fun_facts();
    writeln!(out, "  At 8 hours a day: {} days", facts.marathon_days)?;
    writeln!(out, "  Non-stop playback: {} days", facts.albums_per_day)?;
    if let Some(share) = facts.road_trip_percentage {
        writeln!(out, "  NY to LA road trip: {}% of the collection", share)?;
    }
    writeln!(
        out,
        "  Novels in the same time: {} (5 hours each)",
        facts.novel_count
    )?;
    writeln!(out)?;

    let favorites = &report.favorites;
    writeln!(
        out,
        "Favorites: {} ({:.1}%)",
        favorites.count, favorites.percentage
    )?;
    for genre in &favorites.genre_breakdown {
        write_row(&mut out, &genre.name, genre.count, genre.percentage)?;
    }
    writeln!(out)?;

    let artwork = &report.color_analysis;
    writeln!(
        out,
        "Artwork: {} of {} ({:.1}%)",
        artwork.albums_with_artwork, report.total_records, artwork.coverage_percentage
    )?;

    Ok(out)
}

fn write_row(out: &mut String, label: &str, count: usize, percentage: f64) -> std::fmt::Result {
    writeln!(out, "  {:<24} {:>5}  {:>5.1}%", label, count, percentage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::compute;
    use crate::test_utils::{mock_catalog, year_album};

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!(" Text ".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_text_sections() {
        let report = compute(&mock_catalog()).unwrap();
        let text = render_text(&report).unwrap();

        assert!(text.starts_with("Collection Statistics"));
        assert!(text.contains("Records:   8"));
        assert!(text.contains("Genres ("));
        assert!(text.contains("Potential Complete Discographies\n  Can\n"));
        assert!(text.contains("Oldest: 1971"));
        assert!(text.contains(&format!("  {:<24} {:>5}\n", 1973, 2)));
        assert!(text.contains(&report.listening_time.formatted_time));
        assert!(text.contains("At 8 hours a day: 1 days"));
        assert!(text.contains("Novels in the same time: 0"));
        assert!(text.contains("Favorites: 2 (25.0%)"));
    }

    #[test]
    fn test_render_text_without_years() {
        let report = compute(&[year_album("unknown")]).unwrap();
        let text = render_text(&report).unwrap();
        assert!(text.contains("No year data"));
        assert!(!text.contains("Potential Complete Discographies"));
        assert!(!text.contains("road trip"));
    }

    #[test]
    fn test_cmd_stats_requires_catalog() {
        let config = Config::default();
        assert!(cmd_stats(&config, None, None, false).is_err());
    }

    #[test]
    fn test_cmd_stats_rejects_unknown_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "[]").unwrap();

        let config = Config::default();
        assert!(cmd_stats(&config, Some(&path), Some("xml"), false).is_err());
        assert!(cmd_stats(&config, Some(&path), Some("json"), false).is_ok());
    }
}
