use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Months, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// First and last day of a calendar month.
///
/// Months outside 1..=12 are a caller bug and are reported, never clamped.
pub fn month_bounds(year: i32, month: u32) -> AppResult<(NaiveDate, NaiveDate)> {
    let first =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(AppError::InvalidPeriod { year, month })?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or(AppError::InvalidPeriod { year, month })?;
    Ok((first, last))
}

/// Every date of `[first, last]`, ascending.
pub fn days_inclusive(first: NaiveDate, last: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    first.iter_days().take_while(move |d| *d <= last)
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse `YYYY-MM`.
pub fn parse_month(s: &str) -> AppResult<(i32, u32)> {
    let d = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(s.to_string()))?;
    Ok((d.year(), d.month()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_handle_leap_years_and_december() {
        let (first, last) = month_bounds(2024, 2).unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let (_, last) = month_bounds(2025, 12).unwrap();
        assert_eq!(last, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    }

    #[test]
    fn month_thirteen_is_rejected() {
        let err = month_bounds(2025, 13).unwrap_err();
        assert!(matches!(err, AppError::InvalidPeriod { year: 2025, month: 13 }));
        assert!(month_bounds(2025, 0).is_err());
    }

    #[test]
    fn days_of_month_are_complete() {
        let (first, last) = month_bounds(2025, 4).unwrap();
        assert_eq!(days_inclusive(first, last).count(), 30);
        let (first, last) = month_bounds(2025, 1).unwrap();
        assert_eq!(days_inclusive(first, last).count(), 31);
    }

    #[test]
    fn parses_month_keys() {
        assert_eq!(parse_month("2025-07").unwrap(), (2025, 7));
        assert!(parse_month("2025-7x").is_err());
    }
}
