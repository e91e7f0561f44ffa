use chrono::NaiveDate;
use dash_chart::ChartError;
use dash_chart::core::{SeriesEntry, format_value, series_values};
use rust_decimal::Decimal;

#[test]
fn decimal_aggregates_convert_to_f64() {
    let entry = SeriesEntry::from_decimal("Revenue", Decimal::new(1_234_50, 2)).expect("entry");
    assert_eq!(entry.label, "Revenue");
    assert!((entry.value - 1234.5).abs() <= 1e-9);
    assert_eq!(format_value(entry.value), "1234.5");
}

#[test]
fn date_buckets_are_labeled_by_format() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 15).expect("date");
    let entry = SeriesEntry::from_date(date, "%b", 100.0).expect("entry");
    assert_eq!(entry, SeriesEntry::new("Jan", 100.0));
}

#[test]
fn unknown_date_format_is_rejected_without_panicking() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 5).expect("date");
    let err = SeriesEntry::from_date(date, "%Q", 1.0).expect_err("unknown specifier must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn series_values_keep_order() {
    let series = vec![
        SeriesEntry::new("a", 3.0),
        SeriesEntry::new("b", 1.0),
        SeriesEntry::new("c", 2.0),
    ];
    assert_eq!(series_values(&series), vec![3.0, 1.0, 2.0]);
}
