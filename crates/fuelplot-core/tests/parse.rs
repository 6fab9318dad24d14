// File: crates/fuelplot-core/tests/parse.rs
// Purpose: Validate TSV parsing, derived fields, and fail-closed coercion.

use fuelplot_core::parse::{parse_tsv, parse_tsv_path};
use fuelplot_core::{ChartError, DeriveOptions, GasUtilizationForm, PriceFormula};

const HEADER: &str = "Date\tMileage\tGallons Filled\tPrice Per Gallon\tMiles Remaining\tMPG\n";

fn tsv(rows: &[&str]) -> Vec<u8> {
    let mut out = String::from(HEADER);
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
    out.into_bytes()
}

#[test]
fn parses_row_and_derives_fields() {
    let data = tsv(&["2020/01/01\t300\t10\t3.00\t50\t30"]);
    let records = parse_tsv(&data[..], &DeriveOptions::default()).expect("parse");

    assert_eq!(records.len(), 1);
    let r = &records[0];
    assert_eq!(r.date_key, "2020/01/01");
    assert_eq!(r.mileage, 300.0);
    assert_eq!(r.gallons_filled, 10.0);
    assert_eq!(r.price_per_gallon, 3.0);
    assert_eq!(r.miles_remaining, 50.0);
    assert_eq!(r.mpg, 30.0);
    assert_eq!(r.potential_miles(), 350.0);
    // Default formula: price per gallon over mpg.
    assert!((r.price_per_mile - 0.1).abs() < 1e-12);
    assert!((r.gas_utilization - 300.0 / 350.0).abs() < 1e-12);
    assert!(r.days_since_fillup.is_none());
}

#[test]
fn fuel_cost_formula_divides_by_mileage() {
    let data = tsv(&["2020/01/01\t300\t10\t3.00\t50\t30"]);
    let opts = DeriveOptions {
        price_formula: PriceFormula::FuelCostOverMileage,
        ..DeriveOptions::default()
    };
    let records = parse_tsv(&data[..], &opts).expect("parse");
    // (10 * 3.00) / 300 = 0.1
    assert!((records[0].price_per_mile - 0.1).abs() < 1e-12);
}

#[test]
fn formulas_disagree_when_mpg_is_not_mileage_over_gallons() {
    let data = tsv(&["2020/01/01\t300\t12\t3.00\t50\t30"]);
    let per_gallon = parse_tsv(&data[..], &DeriveOptions::default()).expect("parse");
    let opts = DeriveOptions {
        price_formula: PriceFormula::FuelCostOverMileage,
        ..DeriveOptions::default()
    };
    let fuel_cost = parse_tsv(&data[..], &opts).expect("parse");
    assert!((per_gallon[0].price_per_mile - 0.1).abs() < 1e-12);
    assert!((fuel_cost[0].price_per_mile - 0.12).abs() < 1e-12);
}

#[test]
fn gas_utilization_percent_form() {
    let data = tsv(&["2020/01/01\t300\t10\t3.00\t50\t30"]);
    let opts = DeriveOptions {
        gas_utilization: GasUtilizationForm::Percent,
        ..DeriveOptions::default()
    };
    let records = parse_tsv(&data[..], &opts).expect("parse");
    let pct = records[0].gas_utilization;
    assert!((pct - 100.0 * 300.0 / 350.0).abs() < 1e-9);
    assert!((0.0..=100.0).contains(&pct));
}

#[test]
fn gas_utilization_stays_in_unit_interval() {
    let data = tsv(&[
        "2020/01/01\t0\t10\t3.00\t50\t30",
        "2020/02/01\t300\t10\t3.00\t0\t30",
        "2020/03/01\t150\t10\t3.00\t150\t30",
    ]);
    let records = parse_tsv(&data[..], &DeriveOptions::default()).expect("parse");
    for r in &records {
        assert!((0.0..=1.0).contains(&r.gas_utilization), "{}", r.gas_utilization);
    }
}

#[test]
fn malformed_number_reports_row_and_column() {
    let data = tsv(&[
        "2020/01/01\t300\t10\t3.00\t50\t30",
        "2020/02/01\t300\t10\t3.00\t50\tthirty",
    ]);
    let err = parse_tsv(&data[..], &DeriveOptions::default()).unwrap_err();
    match err {
        ChartError::MalformedNumber { row, column, value } => {
            assert_eq!(row, 3);
            assert_eq!(column, "MPG");
            assert_eq!(value, "thirty");
        }
        other => panic!("expected MalformedNumber, got {other:?}"),
    }
}

#[test]
fn malformed_date_reports_row() {
    let data = tsv(&["not-a-date\t300\t10\t3.00\t50\t30"]);
    let err = parse_tsv(&data[..], &DeriveOptions::default()).unwrap_err();
    match err {
        ChartError::MalformedDate { row, value } => {
            assert_eq!(row, 2);
            assert_eq!(value, "not-a-date");
        }
        other => panic!("expected MalformedDate, got {other:?}"),
    }
}

#[test]
fn missing_column_is_reported_by_name() {
    let data = b"Date\tMileage\n2020/01/01\t300\n";
    let err = parse_tsv(&data[..], &DeriveOptions::default()).unwrap_err();
    match err {
        ChartError::MissingColumn(name) => assert_eq!(name, "Gallons Filled"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn missing_file_is_a_read_error() {
    let err = parse_tsv_path(
        std::path::Path::new("target/does-not-exist.tsv"),
        &DeriveOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ChartError::Read(_)));
}

#[test]
fn accepts_dash_separated_dates_and_times() {
    let data = tsv(&["2020-01-01 12:30\t300\t10\t3.00\t50\t30"]);
    let records = parse_tsv(&data[..], &DeriveOptions::default()).expect("parse");
    assert_eq!(records[0].date.format("%Y/%m/%d %H:%M").to_string(), "2020/01/01 12:30");
}
