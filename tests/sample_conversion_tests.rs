use chrono::{TimeZone, Utc};
use horizon_rs::core::{RawSeries, Sample};
use rust_decimal::Decimal;

#[test]
fn datetime_samples_carry_epoch_milliseconds() {
    let time = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let sample = Sample::from_datetime(time, 42.0);

    assert_eq!(sample.timestamp_ms, time.timestamp_millis());
    assert_eq!(sample.value, 42.0);
}

#[test]
fn decimal_samples_convert_losslessly_for_small_values() {
    let sample = Sample::from_decimal(1_000, Decimal::new(12_345, 2)).expect("representable");

    assert_eq!(sample.timestamp_ms, 1_000);
    assert_eq!(sample.value, 123.45);
}

#[test]
fn converted_samples_build_a_valid_series() {
    let base = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
    let samples: Vec<Sample> = (0..3)
        .map(|i| Sample::from_datetime(base + chrono::Duration::seconds(i), f64::from(i as i32)))
        .collect();

    let series = RawSeries::new(samples).expect("chronological samples");
    assert_eq!(series.len(), 3);
    assert_eq!(series.samples()[1].timestamp_ms - series.samples()[0].timestamp_ms, 1_000);
}
