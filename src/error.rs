/// Errors returned by the grid and year builders.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth { month: u32 },

    #[error("invalid week start day: {day} (must be 1..=7)")]
    InvalidWeekStart { day: u32 },

    #[error("year {year} is outside the supported calendar range")]
    InvalidYear { year: i32 },

    /// Offsetting `date` by `days` left the representable date range.
    #[error("{date} offset by {days} days is outside the supported calendar range")]
    DateOutOfRange { date: chrono::NaiveDate, days: i64 },
}

#[cfg(test)]
mod tests {
    use super::GridError;

    #[test]
    fn test_messages() {
        let table = vec![
            (
                GridError::InvalidMonth { month: 13 },
                "invalid month: 13 (must be 1..=12)",
            ),
            (
                GridError::InvalidWeekStart { day: 0 },
                "invalid week start day: 0 (must be 1..=7)",
            ),
            (
                GridError::InvalidYear { year: 400_000 },
                "year 400000 is outside the supported calendar range",
            ),
            (
                GridError::DateOutOfRange {
                    date: chrono::NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                    days: i64::MAX,
                },
                "2024-02-01 offset by 9223372036854775807 days is outside the supported calendar range",
            ),
        ];

        for (err, msg) in table {
            assert_eq!(err.to_string(), msg)
        }
    }
}
