use std::ops::RangeInclusive;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    consts::{
        CENTURY_CYCLE, DAYS_IN_MONTH, FALLBACK_DAYS, FEBRUARY, FEBRUARY_DAYS_LEAP,
        GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MIN_DAY, MIN_MONTH,
    },
    fields::RawFields,
    token::FieldKind,
};

/// Validated field values. Zero means the field is not filled in yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateFields {
    pub day:   u32,
    pub month: u32,
    pub year:  u32,
}

impl DateFields {
    pub const fn get(&self, kind: FieldKind) -> u32 {
        match kind {
            FieldKind::Day => self.day,
            FieldKind::Month => self.month,
            FieldKind::Year => self.year,
        }
    }

    /// True when day, month and year are all set
    pub const fn is_complete(&self) -> bool {
        self.day != 0 && self.month != 0 && self.year != 0
    }
}

/// Year 0 is the unset year and counts as a common year.
pub const fn is_leap_year(year: u32) -> bool {
    if year == 0 {
        return false;
    }
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days in `month` of `year`. Months outside `1..=12`, including the unset month 0,
/// get 31 days.
pub const fn days_in_month(year: u32, month: u32) -> u32 {
    if month == 0 || month > MAX_MONTH {
        FALLBACK_DAYS
    } else if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Empty or unparseable digit strings count as 0.
fn parse_field(s: &str) -> u32 {
    s.parse().unwrap_or(0)
}

/// Turns raw digit strings into field values inside calendar bounds.
///
/// Year is clamped into `years` unless it is 0. Month is clamped to `1..=12`, but an
/// empty month stays 0. Day is clamped to the length of the month, and like month, a typed
/// zero becomes 1 while an empty day stays 0.
pub fn validate(raw: &RawFields, years: &RangeInclusive<u32>) -> DateFields {
    let mut year = parse_field(&raw.year);
    let mut month = parse_field(&raw.month);
    let mut day = parse_field(&raw.day);

    if year != 0 && !years.contains(&year) {
        let clamped = year.max(*years.start()).min(*years.end());
        debug!("year {year} clamped to {clamped}");
        year = clamped;
    }

    if month > MAX_MONTH {
        debug!("month {month} clamped to {MAX_MONTH}");
        month = MAX_MONTH;
    } else if month < MIN_MONTH && !raw.month.is_empty() {
        debug!("month {:?} clamped to {MIN_MONTH}", raw.month);
        month = MIN_MONTH;
    }

    if day != 0 {
        let max_day = days_in_month(year, month);
        if day > max_day {
            debug!("day {day} clamped to {max_day} for {year:04}-{month:02}");
            day = max_day;
        }
    } else if !raw.day.is_empty() {
        debug!("day {:?} clamped to {MIN_DAY}", raw.day);
        day = MIN_DAY;
    }

    DateFields { day, month, year }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MAX_YEAR, MIN_YEAR};

    const YEARS: RangeInclusive<u32> = MIN_YEAR..=MAX_YEAR;

    fn raw(day: &str, month: &str, year: &str) -> RawFields {
        RawFields {
            day:   day.to_owned(),
            month: month.to_owned(),
            year:  year.to_owned(),
        }
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        u32,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2100,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
            TestCase {
                year:        0,
                is_leap:     false,
                description: "unset year",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_days_in_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(2023, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(0, 2), 28);
    }

    #[test]
    fn test_days_in_month_fallback() {
        assert_eq!(days_in_month(2024, 0), 31);
        assert_eq!(days_in_month(2024, 13), 31);
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(validate(&raw("29", "02", "2000"), &YEARS).day, 29);
        assert_eq!(validate(&raw("29", "02", "1900"), &YEARS).day, 28);
    }

    #[test]
    fn test_month_clamps() {
        assert_eq!(validate(&raw("01", "13", ""), &YEARS).month, 12);
        assert_eq!(validate(&raw("01", "00", ""), &YEARS).month, 1);
        assert_eq!(validate(&raw("01", "0", ""), &YEARS).month, 1);
        assert_eq!(validate(&raw("01", "", ""), &YEARS).month, 0);
    }

    #[test]
    fn test_day_follows_month() {
        // unset year counts as a common year
        let fields = validate(&raw("31", "2", ""), &YEARS);
        assert_eq!(fields, DateFields { day: 28, month: 2, year: 0 });

        let fields = validate(&raw("31", "04", "2024"), &YEARS);
        assert_eq!(fields.day, 30);
    }

    #[test]
    fn test_day_without_month_uses_fallback() {
        assert_eq!(validate(&raw("45", "", ""), &YEARS).day, 31);
        assert_eq!(validate(&raw("31", "", ""), &YEARS).day, 31);
    }

    #[test]
    fn test_day_zero() {
        assert_eq!(validate(&raw("00", "05", ""), &YEARS).day, 1);
        assert_eq!(validate(&raw("0", "", ""), &YEARS).day, 1);
        assert_eq!(validate(&raw("", "05", ""), &YEARS).day, 0);
    }

    #[test]
    fn test_year_bounds() {
        assert_eq!(validate(&raw("", "", "0000"), &YEARS).year, 0);
        assert_eq!(validate(&raw("", "", "0001"), &YEARS).year, 1);
        assert_eq!(validate(&raw("", "", "1850"), &(1900..=2100)).year, 1900);
        assert_eq!(validate(&raw("", "", "2500"), &(1900..=2100)).year, 2100);
        assert_eq!(validate(&raw("", "", "99999"), &YEARS).year, 9999);
    }

    #[test]
    fn test_unparseable_is_zero() {
        // too many digits for u32
        let fields = validate(&raw("", "", "99999999999"), &YEARS);
        assert_eq!(fields.year, 0);
    }

    #[test]
    fn test_is_complete() {
        assert!(validate(&raw("01", "02", "2003"), &YEARS).is_complete());
        assert!(!validate(&raw("01", "02", ""), &YEARS).is_complete());
    }
}
