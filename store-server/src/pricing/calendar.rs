//! Promotional calendar
//!
//! 黑色星期五 (11 月最后一个周五) 与波兰法定节日的日期判定。
//! 只看月/日 (黑五需要年份来确定具体是哪一天)。

use chrono::{Datelike, NaiveDate, Weekday};

/// Fixed holiday dates: (month, day, display name)
const POLISH_HOLIDAYS: [(u32, u32, &str); 9] = [
    (1, 1, "New Year"),
    (1, 6, "Epiphany"),
    (5, 1, "Labour Day"),
    (5, 3, "Constitution Day"),
    (8, 15, "Assumption of Mary"),
    (11, 1, "All Saints Day"),
    (11, 11, "Independence Day"),
    (12, 25, "Christmas Day"),
    (12, 26, "Second Day of Christmas"),
];

/// Black Friday for the given year: the last Friday of November
///
/// Scans November 30 backwards to day 1 and returns the first Friday.
pub fn black_friday(year: i32) -> NaiveDate {
    for day in (1..=30).rev() {
        if let Some(date) = NaiveDate::from_ymd_opt(year, 11, day) {
            if date.weekday() == Weekday::Fri {
                return date;
            }
        }
    }

    // November always contains a Friday; fixed fallback keeps the function total
    NaiveDate::from_ymd_opt(year, 11, 24).unwrap_or_default()
}

/// Whether the date is Black Friday of its own year
pub fn is_black_friday(date: NaiveDate) -> bool {
    black_friday(date.year()) == date
}

/// Display name of the holiday falling on this (month, day), if any
pub fn holiday_name(date: NaiveDate) -> Option<&'static str> {
    POLISH_HOLIDAYS
        .iter()
        .find(|(month, day, _)| *month == date.month() && *day == date.day())
        .map(|(_, _, name)| *name)
}

/// Whether the date is one of the fixed holidays
pub fn is_holiday(date: NaiveDate) -> bool {
    holiday_name(date).is_some()
}
