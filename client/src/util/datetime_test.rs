use super::*;
use time::macros::offset;

const TS: &str = "2024-03-05T14:07:09Z";

#[test]
fn date_layout_is_day_first() {
    assert_eq!(format_timestamp(Some(TS), Layout::Date, UtcOffset::UTC, TABLE_MISSING), "05/03/2024");
}

#[test]
fn date_time_layout_includes_seconds() {
    assert_eq!(
        format_timestamp(Some(TS), Layout::DateTime, UtcOffset::UTC, EXPORT_MISSING),
        "05/03/2024, 14:07:09"
    );
}

#[test]
fn offset_shifts_wall_clock_and_date() {
    assert_eq!(
        format_timestamp(Some("2024-03-05T23:30:00Z"), Layout::DateTime, offset!(+2), EXPORT_MISSING),
        "06/03/2024, 01:30:00"
    );
}

#[test]
fn fractional_seconds_and_offsets_parse() {
    assert_eq!(
        format_timestamp(Some("2024-03-05T14:07:09.123+01:00"), Layout::DateTime, UtcOffset::UTC, "-"),
        "05/03/2024, 13:07:09"
    );
}

#[test]
fn missing_values_use_placeholder() {
    assert_eq!(format_timestamp(None, Layout::Date, UtcOffset::UTC, TABLE_MISSING), "—");
    assert_eq!(format_timestamp(Some(""), Layout::DateTime, UtcOffset::UTC, DETAIL_MISSING), "Never");
    assert_eq!(format_timestamp(Some("  "), Layout::DateTime, UtcOffset::UTC, EXPORT_MISSING), "N/A");
}

#[test]
fn unparseable_values_are_shown_verbatim() {
    assert_eq!(format_timestamp(Some("yesterday"), Layout::Date, UtcOffset::UTC, TABLE_MISSING), "yesterday");
}

#[test]
fn format_local_is_utc_off_browser() {
    assert_eq!(format_local(Some(TS), Layout::DateTime, EXPORT_MISSING), "05/03/2024, 14:07:09");
    assert_eq!(format_local(None, Layout::DateTime, EXPORT_MISSING), "N/A");
}
