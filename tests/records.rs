use deckband::{RowRecord, cagr, format_pct, format_value, unit_label_from_summary};

#[test]
fn values_get_thousands_separators() {
    assert_eq!(format_value(1234567.891, 1), "1,234,567.9");
    assert_eq!(format_value(999.94, 1), "999.9");
    assert_eq!(format_value(1000.0, 1), "1,000.0");
    assert_eq!(format_value(-1234.5, 1), "-1,234.5");
    assert_eq!(format_value(999.9, 0), "1,000");
    assert_eq!(format_value(0.0, 1), "0.0");
    assert_eq!(format_value(f64::NAN, 1), "");
}

#[test]
fn cagr_basics() {
    let nine_year_doubling = cagr(100.0, 200.0, 9).unwrap();
    assert!((nine_year_doubling - 8.0059).abs() < 0.001);
    assert_eq!(cagr(0.0, 200.0, 9), None);
    assert_eq!(cagr(100.0, -1.0, 9), None);
    assert_eq!(cagr(100.0, 200.0, 0), None);
}

#[test]
fn percent_display() {
    assert_eq!(format_pct(Some(8.0059)), "8.0%");
    assert_eq!(format_pct(Some(12.35)), "12.3%");
    assert_eq!(format_pct(None), "");
    assert_eq!(format_pct(Some(f64::NAN)), "");
}

#[test]
fn unit_labels_normalize() {
    assert_eq!(unit_label_from_summary("US$ Million"), "Million US$");
    assert_eq!(unit_label_from_summary("Sales in BILLION dollars"), "Billion US$");
    assert_eq!(unit_label_from_summary("Tonnes"), "Tonnes");
    assert_eq!(unit_label_from_summary(""), "");
}

#[test]
fn record_from_values_formats_fields() {
    let r = RowRecord::from_values("Natural", 1250.5, 2500.25, 9);
    assert_eq!(r.value_t0, "1,250.5");
    assert_eq!(r.value_t1, "2,500.2");
    assert_eq!(r.growth, "8.0%");
    assert_eq!(r.unit, None);
}

#[test]
fn fields_substitute_the_shared_unit() {
    let without = RowRecord::from_values("Natural", 10.0, 20.0, 9);
    assert_eq!(without.fields("Million US$")[1], "Million US$");

    let with = RowRecord {
        unit: Some("Billion US$".into()),
        ..without
    };
    assert_eq!(with.fields("Million US$")[1], "Billion US$");
    assert_eq!(with.fields("Million US$")[0], "Natural");
}
