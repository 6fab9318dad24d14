// File: crates/fuelplot-core/tests/tooltip.rs
// Purpose: Validate tooltip label formats and the show/move/hide states.

use fuelplot_core::parse::parse_date;
use fuelplot_core::tooltip::{Visibility, FADE_MS};
use fuelplot_core::{FillupRecord, Tooltip, TooltipKind};

fn record() -> FillupRecord {
    FillupRecord {
        date_key: "2020/01/05".to_string(),
        date: parse_date("2020/01/05").expect("valid date"),
        mileage: 300.0,
        miles_remaining: 50.0,
        gallons_filled: 10.0,
        price_per_gallon: 3.0,
        mpg: 30.6,
        price_per_mile: 0.1,
        gas_utilization: 300.0 / 350.0,
        days_since_fillup: Some(4.0),
    }
}

#[test]
fn label_formats_match_their_charts() {
    let r = record();
    assert_eq!(TooltipKind::Mileage.format(&r, false), "300");
    assert_eq!(TooltipKind::PotentialMiles.format(&r, false), "300 + 50 = 350");
    assert_eq!(TooltipKind::AvgMpg.format(&r, false), "30.6 mpg");
    assert_eq!(TooltipKind::PricePerMile.format(&r, false), "0.100 $/mile");
    assert_eq!(TooltipKind::FillupFrequency.format(&r, false), "[2020/01/05]: 4 days");
}

#[test]
fn optional_date_prefix() {
    let r = record();
    assert_eq!(TooltipKind::AvgMpg.format(&r, true), "[2020/01/05]: 30.6 mpg");
    assert_eq!(
        TooltipKind::PotentialMiles.format(&r, true),
        "[2020/01/05]: 300 + 50 = 350"
    );
}

#[test]
fn formatting_is_deterministic() {
    let r = record();
    for kind in [
        TooltipKind::Mileage,
        TooltipKind::PotentialMiles,
        TooltipKind::AvgMpg,
        TooltipKind::PricePerMile,
        TooltipKind::FillupFrequency,
    ] {
        assert_eq!(kind.format(&r, false), kind.format(&r, false));
    }
}

#[test]
fn pointer_over_shows_above_the_pointer() {
    let mut tooltip = Tooltip::new();
    assert!(!tooltip.is_visible());

    let fade = tooltip.pointer_over("300", 120.0, 80.0);
    assert!(tooltip.is_visible());
    assert_eq!(tooltip.text(), "300");
    assert_eq!(tooltip.position(), (120.0, 60.0));
    assert_eq!(fade.to, Visibility::Visible);
    assert_eq!(fade.duration_ms, FADE_MS);
}

#[test]
fn pointer_move_updates_without_a_fade() {
    let mut tooltip = Tooltip::new();
    tooltip.pointer_over("300", 120.0, 80.0);
    tooltip.pointer_move("305", 130.0, 90.0);
    assert!(tooltip.is_visible());
    assert_eq!(tooltip.text(), "305");
    assert_eq!(tooltip.position(), (130.0, 70.0));
}

#[test]
fn pointer_out_fades_to_hidden() {
    let mut tooltip = Tooltip::new();
    tooltip.pointer_over("300", 120.0, 80.0);
    let fade = tooltip.pointer_out();
    assert!(!tooltip.is_visible());
    assert_eq!(fade.to, Visibility::Hidden);
    assert_eq!(fade.duration_ms, FADE_MS);
}

#[test]
fn last_writer_wins_across_charts() {
    let mut tooltip = Tooltip::new();
    tooltip.pointer_over("30.6 mpg", 100.0, 100.0);
    tooltip.pointer_over("0.100 $/mile", 200.0, 200.0);
    assert_eq!(tooltip.text(), "0.100 $/mile");
    assert_eq!(tooltip.position(), (200.0, 180.0));
}
