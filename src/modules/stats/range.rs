// Date-range presets used to scope the statistics snapshot.
//
// Purpose
// - Turn a preset name and a reference date into inclusive millisecond
//   bounds: today, the ISO week (Monday through Sunday), or the calendar
//   month. Custom bounds come from the caller untouched.

use chrono::{
    Datelike, Days, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Weekday,
};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePreset {
    Today,
    Week,
    Month,
    Custom,
}

/// Inclusive epoch-millisecond bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: i64,
    pub end: i64,
}

impl DateRange {
    pub fn custom(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, at: i64) -> bool {
        self.start <= at && at <= self.end
    }
}

/// Resolves a non-custom preset against a reference date in local time.
/// Returns `None` for `Custom`, whose bounds are caller-supplied.
pub fn resolve_preset(preset: RangePreset, today: NaiveDate) -> Option<DateRange> {
    let (first, last) = match preset {
        RangePreset::Today => (today, today),
        RangePreset::Week => week_span(today),
        RangePreset::Month => month_span(today),
        RangePreset::Custom => return None,
    };
    Some(DateRange {
        start: local_millis(day_start(first)),
        end: local_millis(day_end(last)),
    })
}

pub fn week_span(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let week = today.week(Weekday::Mon);
    (week.first_day(), week.last_day())
}

pub fn month_span(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = today.with_day(1).unwrap_or(today);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.checked_sub_days(Days::new(1)))
        .unwrap_or(today);
    (first, last)
}

fn day_start(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

fn day_end(day: NaiveDate) -> NaiveDateTime {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999)
        .map(|t| day.and_time(t))
        .unwrap_or_else(|| day.and_time(NaiveTime::MIN))
}

fn local_millis(at: NaiveDateTime) -> i64 {
    // DST gaps have no unambiguous local instant; fall back to UTC.
    match Local.from_local_datetime(&at).earliest() {
        Some(zoned) => zoned.timestamp_millis(),
        None => at.and_utc().timestamp_millis(),
    }
}
