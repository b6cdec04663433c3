//! Display formatting for API timestamps.
//!
//! The API sends `lastLogin` as RFC 3339. The table, the view modal and the
//! spreadsheet export each render it differently, and each has its own
//! placeholder for "never logged in". Output follows the `en-GB` day-first
//! layout in the viewer's local offset.

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

const DATE: &[BorrowedFormatItem<'static>] = format_description!("[day]/[month]/[year]");
const DATE_TIME: &[BorrowedFormatItem<'static>] =
    format_description!("[day]/[month]/[year], [hour]:[minute]:[second]");

/// Placeholder in the table's "Last Online" column.
pub const TABLE_MISSING: &str = "—";
/// Placeholder in the view modal.
pub const DETAIL_MISSING: &str = "Never";
/// Placeholder in the exported spreadsheet.
pub const EXPORT_MISSING: &str = "N/A";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// `dd/mm/yyyy`
    Date,
    /// `dd/mm/yyyy, HH:MM:SS`
    DateTime,
}

pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(raw.trim(), &Rfc3339).ok()
}

/// Render an optional timestamp. Absent or blank values yield `missing`;
/// values that fail to parse are shown as sent.
pub fn format_timestamp(raw: Option<&str>, layout: Layout, offset: UtcOffset, missing: &str) -> String {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return missing.to_owned();
    };
    let Some(ts) = parse_timestamp(raw) else {
        return raw.to_owned();
    };
    let items = match layout {
        Layout::Date => DATE,
        Layout::DateTime => DATE_TIME,
    };
    ts.to_offset(offset).format(items).unwrap_or_else(|_| raw.to_owned())
}

/// Same as [`format_timestamp`] using the browser's offset at that instant.
pub fn format_local(raw: Option<&str>, layout: Layout, missing: &str) -> String {
    let offset = raw.and_then(parse_timestamp).map_or(UtcOffset::UTC, local_offset_at);
    format_timestamp(raw, layout, offset, missing)
}

/// Viewer's UTC offset at `ts`; UTC outside the browser.
pub fn local_offset_at(ts: OffsetDateTime) -> UtcOffset {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        {
            let millis = (ts.unix_timestamp_nanos() / 1_000_000) as f64;
            let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(millis));
            // getTimezoneOffset is UTC minus local, in minutes.
            let seconds = (-date.get_timezone_offset() * 60.0) as i32;
            UtcOffset::from_whole_seconds(seconds).unwrap_or(UtcOffset::UTC)
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ts;
        UtcOffset::UTC
    }
}
