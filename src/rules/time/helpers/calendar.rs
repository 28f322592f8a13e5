use chrono::NaiveDate;

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-based) of `year`, `None` for a month out of
/// range.
pub fn days_in_month(year: i64, month: i64) -> Option<u32> {
    let idx = usize::try_from(month.checked_sub(1)?).ok()?;
    let days = *DAYS_IN_MONTH.get(idx)?;
    Some(if idx == 1 && is_leap_year(year) { days + 1 } else { days })
}

/// Move `(year, month)` by `delta` months.
///
/// Whole years are carried first (truncating toward zero), then the remainder
/// is applied to the month and wrapped once into `1..=12`.
pub fn shift_months(year: i64, month: i64, delta: i64) -> (i64, i64) {
    let mut year = year + delta / 12;
    let mut month = if delta < 0 { month - delta.abs() % 12 } else { month + delta % 12 };

    if month > 12 {
        year += 1;
        month -= 12;
    } else if month < 1 {
        year -= 1;
        month += 12;
    }

    (year, month)
}

/// `NaiveDate` from wide components, `None` when any is out of range.
pub fn date_from_parts(year: i64, month: i64, day: i64) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, u32::try_from(month).ok()?, u32::try_from(day).ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn february_follows_leap_years() {
        assert_eq!(days_in_month(2021, 2), Some(28));
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(2021, 13), None);
        assert_eq!(days_in_month(2021, 0), None);
    }

    #[test]
    fn shift_months_carries_years() {
        assert_eq!(shift_months(2021, 6, -1), (2021, 5));
        assert_eq!(shift_months(2021, 1, -1), (2020, 12));
        assert_eq!(shift_months(2021, 12, 1), (2022, 1));
        assert_eq!(shift_months(2021, 6, -12), (2020, 6));
        assert_eq!(shift_months(2021, 6, -17), (2020, 1));
        assert_eq!(shift_months(2021, 6, 25), (2023, 7));
    }

    #[test]
    fn date_from_parts_rejects_impossible_dates() {
        assert!(date_from_parts(2021, 2, 30).is_none());
        assert!(date_from_parts(2021, 13, 1).is_none());
        assert!(date_from_parts(2021, 6, -1).is_none());
        assert_eq!(date_from_parts(2021, 2, 28), NaiveDate::from_ymd_opt(2021, 2, 28));
    }
}
