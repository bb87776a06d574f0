//! Inclusive date-window selection.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Inclusive `[start, end-of-day(end)]` instant range.
///
/// The end boundary is widened to the last millisecond of its calendar day,
/// so a window ending on `2024-05-10` includes every record created at any
/// time on May 10th. The start boundary is used as given. A window whose
/// end precedes its start selects nothing (it never errors).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end: end_of_day(end),
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// End boundary after normalization (23:59:59.999 of the end day).
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end.date_naive()
    }

    /// Whether an instant falls inside the window, inclusive on both ends.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// Last represented millisecond of the instant's calendar day.
fn end_of_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    let eod = instant
        .date_naive()
        .and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_else(|| instant.naive_utc());
    Utc.from_utc_datetime(&eod)
}
