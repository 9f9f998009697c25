//! Integration tests for the dashboard facade.
//!
//! Drives configuration parsing, aggregation, and scene composition
//! together through the public API, the way the binary does.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use arbor_carbon::daily_totals;
use arbor_core::{ArborConfig, Dashboard, DashboardReport};
use arbor_types::{DailyTotalRecord, Event, Period, StatusTier, TreeAction};
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn record(date: &str, planted: u64, cut: u64) -> DailyTotalRecord {
    DailyTotalRecord {
        date: date.to_owned(),
        planted,
        cut,
    }
}

fn seeded_report(dashboard: &Dashboard, records: &[DailyTotalRecord], period: Period) -> DashboardReport {
    let mut rng = StdRng::seed_from_u64(99);
    dashboard.report_from_records(records, period, &mut rng).unwrap()
}

#[test]
fn configured_constants_flow_into_the_report() {
    let config = ArborConfig::parse(
        "carbon:\n  co2_absorbed_per_tree_per_year_kg: 0\n  co2_released_per_cut_tree_kg: 1000\n",
    )
    .unwrap();
    let dashboard = Dashboard::new(&config).unwrap();

    let report = seeded_report(&dashboard, &[record("2024-05-05", 500, 3)], Period::Day);
    assert!((report.stats.co2_impact_tons + 3.0).abs() < 1e-12);
    assert_eq!(report.status.tier, StatusTier::Negative);
    assert_eq!(report.status.color, "#f57c00");
}

#[test]
fn seeded_reports_are_reproducible() {
    let dashboard = Dashboard::new(&ArborConfig::default()).unwrap();
    let records = [record("2024-01-31", 10, 2), record("2024-02-01", 5, 5)];

    let a = seeded_report(&dashboard, &records, Period::Week);
    let b = seeded_report(&dashboard, &records, Period::Week);
    assert_eq!(a, b);
}

#[test]
fn month_view_from_raw_events() {
    let day = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();
    let events: Vec<Event> = [
        (day(1, 3), TreeAction::Planted, 40),
        (day(1, 3), TreeAction::Cut, 1),
        (day(1, 20), TreeAction::Planted, 20),
        (day(2, 14), TreeAction::Cut, 4),
    ]
    .into_iter()
    .filter_map(|(date, action, quantity)| Event::new(date, action, quantity))
    .collect();

    let dashboard = Dashboard::new(&ArborConfig::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    let report = dashboard
        .report(&daily_totals(&events), Period::Month, &mut rng)
        .unwrap();

    assert_eq!(report.chart.labels, vec!["January 2024", "February 2024"]);
    assert_eq!(report.chart.planted, vec![60, 0]);
    assert_eq!(report.chart.cut, vec![1, 4]);
    assert_eq!(report.stats.period_label.as_deref(), Some("2024-02"));
    assert_eq!(report.stats.balance, -4);
    // Feb: 4 * 150 kg released.
    assert!((report.stats.co2_impact_tons + 0.6).abs() < 1e-12);
    assert_eq!(report.status.tier, StatusTier::Negative);

    // Lifetime 60 planted, 5 cut: round(60 * (1 - 5/60)) = 55 trees.
    let trees = report
        .scene
        .sprites
        .iter()
        .filter(|s| s.marker.kind == arbor_types::MarkerKind::Tree)
        .count();
    assert_eq!(trees, 55);
}

#[test]
fn report_serializes_for_the_renderer() {
    let dashboard = Dashboard::new(&ArborConfig::default()).unwrap();
    let report = seeded_report(&dashboard, &[record("2023-07-01", 300, 0)], Period::Year);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["period"], "year");
    assert_eq!(json["buckets"][0]["key"]["period"], "year");
    assert_eq!(json["buckets"][0]["key"]["year"], 2023);
    assert_eq!(json["status"]["tier"], "excellent");
    assert_eq!(json["status"]["message_key"], "carbon.status.excellent");
    assert_eq!(json["scene"]["clouds"].as_array().map(Vec::len), Some(10));
}
