//! # Program Duration
//!
//! Course dates arrive as `YYYY-MM-DD` strings. Duration is counted in
//! whole calendar months between the first date entry's start and end,
//! using only the year (characters 0..4) and month (characters 5..7) of
//! each string. The day is ignored, so `2020-09-30` to `2020-10-01` is one
//! month.
//!
//! A string whose year or month slice is missing or non-numeric is
//! rejected with [`CourseError::MalformedDate`] rather than panicking.

use crate::error::CourseError;

/// Months in one semester.
pub const MONTHS_PER_SEMESTER: i64 = 6;

/// The year and month prefix of a date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    /// Calendar year.
    pub year: i64,
    /// Month as written; not range-checked.
    pub month: i64,
}

impl YearMonth {
    /// Read the `YYYY` and `MM` slices of a `YYYY-MM...` string.
    ///
    /// # Errors
    ///
    /// Returns [`CourseError::MalformedDate`] if either slice is out of
    /// range or does not parse as an integer.
    pub fn parse(s: &str) -> Result<Self, CourseError> {
        let malformed = |reason| CourseError::MalformedDate {
            value: s.to_string(),
            reason,
        };
        let year = s
            .get(0..4)
            .ok_or_else(|| malformed("shorter than four characters"))?
            .parse()
            .map_err(|_| malformed("year is not numeric"))?;
        let month = s
            .get(5..7)
            .ok_or_else(|| malformed("no month at positions 5..7"))?
            .parse()
            .map_err(|_| malformed("month is not numeric"))?;
        Ok(Self { year, month })
    }

    /// Signed number of months from `self` to `other`.
    pub fn months_until(&self, other: &YearMonth) -> i64 {
        (other.year - self.year) * 12 + (other.month - self.month)
    }
}

/// Whole months between two `YYYY-MM-DD` strings.
///
/// Negative when `end` precedes `start`.
pub fn months_between(start: &str, end: &str) -> Result<i64, CourseError> {
    let start = YearMonth::parse(start)?;
    let end = YearMonth::parse(end)?;
    Ok(start.months_until(&end))
}

/// Number of semesters in `months`, rounded toward negative infinity.
pub fn semesters_for(months: i64) -> i64 {
    months.div_euclid(MONTHS_PER_SEMESTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_date() {
        let ym = YearMonth::parse("2020-09-01").unwrap();
        assert_eq!(ym, YearMonth { year: 2020, month: 9 });
    }

    #[test]
    fn test_parse_year_month_only() {
        let ym = YearMonth::parse("2021-03").unwrap();
        assert_eq!(ym, YearMonth { year: 2021, month: 3 });
    }

    #[test]
    fn test_months_between_spec_example() {
        assert_eq!(months_between("2020-09-01", "2022-03-01").unwrap(), 18);
        assert_eq!(semesters_for(18), 3);
    }

    #[test]
    fn test_same_month_is_zero() {
        assert_eq!(months_between("2024-10-01", "2024-10-31").unwrap(), 0);
    }

    #[test]
    fn test_day_is_ignored() {
        assert_eq!(months_between("2020-09-30", "2020-10-01").unwrap(), 1);
    }

    #[test]
    fn test_negative_duration() {
        assert_eq!(months_between("2022-03-01", "2020-09-01").unwrap(), -18);
        assert_eq!(semesters_for(-18), -3);
        assert_eq!(semesters_for(-7), -2);
    }

    #[test]
    fn test_semesters_round_down() {
        assert_eq!(semesters_for(0), 0);
        assert_eq!(semesters_for(5), 0);
        assert_eq!(semesters_for(6), 1);
        assert_eq!(semesters_for(11), 1);
        assert_eq!(semesters_for(24), 4);
    }

    #[test]
    fn test_short_string_rejected() {
        assert!(matches!(
            YearMonth::parse("2020"),
            Err(CourseError::MalformedDate { .. })
        ));
        assert!(YearMonth::parse("").is_err());
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert!(YearMonth::parse("abcd-09-01").is_err());
        assert!(YearMonth::parse("2020-9-01").is_err());
        assert!(YearMonth::parse("2020-xx-01").is_err());
    }

    #[test]
    fn test_error_carries_value() {
        let err = months_between("2020-09-01", "soon").unwrap_err();
        assert!(err.to_string().contains("soon"));
    }
}
