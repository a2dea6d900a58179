//! Time utilities: parsing event timestamps from user input.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Accepts `YYYY-MM-DDTHH:MM[:SS]` and `YYYY-MM-DD HH:MM[:SS]`.
pub fn parse_datetime(s: &str) -> AppResult<NaiveDateTime> {
    let s = s.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

pub fn parse_optional_datetime(input: Option<&String>) -> AppResult<Option<NaiveDateTime>> {
    input.map(|s| parse_datetime(s)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_layouts() {
        let expected = chrono::NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap();
        assert_eq!(parse_datetime("2025-01-02T06:00").unwrap(), expected);
        assert_eq!(parse_datetime("2025-01-02 06:00").unwrap(), expected);
        assert_eq!(parse_datetime("2025-01-02T06:00:00").unwrap(), expected);
        assert!(parse_datetime("06:00").is_err());
    }
}
