use crate::time::today;
use anyhow::{anyhow, Result};
use chrono::Datelike;

const DATE_ENDINGS: [&str; 4] = ["th", "st", "rd", "nd"];

fn split(s: &str) -> Result<Vec<String>> {
    let regex = regex::Regex::new(r#"[/.-]"#)?;
    Ok(regex.split(s.trim()).map(|p| p.to_string()).collect())
}

fn ymd(year: i32, month: u32, day: u32) -> Result<chrono::NaiveDate> {
    chrono::NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| anyhow!("Invalid date {}-{}-{}", year, month, day))
}

/// Parses a reference date. Accepts `YYYY-MM-DD`, `MM-DD` (this year) and `DD`
/// (this month), with `-`, `/` or `.` separators.
pub fn parse_date(s: &str) -> Result<chrono::NaiveDate> {
    let parts = split(s)?;
    match parts.len() {
        3 => ymd(parts[0].parse()?, parts[1].parse()?, parts[2].parse()?),
        2 => ymd(today().year(), parts[0].parse()?, parts[1].parse()?),
        1 => {
            let now = today();
            let mut part = parts[0].clone();
            for ending in DATE_ENDINGS {
                if part.ends_with(ending) {
                    part = part.trim_end_matches(ending).to_string();
                    break;
                }
            }
            ymd(now.year(), now.month(), part.parse()?)
        }
        _ => Err(anyhow!("Cannot parse date")),
    }
}

/// Parses the month a grid is built for: `YYYY-MM`, or a bare `MM` in the
/// current year.
pub fn parse_year_month(s: &str) -> Result<(i32, u32)> {
    let parts = split(s)?;
    let (year, month) = match parts.len() {
        2 => (parts[0].parse()?, parts[1].parse()?),
        1 => (today().year(), parts[0].parse()?),
        _ => return Err(anyhow!("Cannot parse month")),
    };

    if !(1..=12).contains(&month) {
        return Err(anyhow!("Invalid month {}", month));
    }

    Ok((year, month))
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_parse_date() {
        use super::parse_date;
        use crate::time::today;
        use chrono::Datelike;

        let table = vec![
            (
                "2018-10-23",
                chrono::NaiveDate::from_ymd_opt(2018, 10, 23).unwrap(),
            ),
            (
                "2018/10/23",
                chrono::NaiveDate::from_ymd_opt(2018, 10, 23).unwrap(),
            ),
            (
                "2018.10.23",
                chrono::NaiveDate::from_ymd_opt(2018, 10, 23).unwrap(),
            ),
            (
                "10/23",
                chrono::NaiveDate::from_ymd_opt(today().year(), 10, 23).unwrap(),
            ),
            (
                "10-23",
                chrono::NaiveDate::from_ymd_opt(today().year(), 10, 23).unwrap(),
            ),
            (
                "1st",
                chrono::NaiveDate::from_ymd_opt(today().year(), today().month(), 1).unwrap(),
            ),
            (
                "12",
                chrono::NaiveDate::from_ymd_opt(today().year(), today().month(), 12).unwrap(),
            ),
        ];

        for (to_parse, t) in table {
            assert_eq!(parse_date(to_parse).unwrap(), t, "{}", to_parse)
        }
    }

    #[test]
    fn test_parse_date_errors() {
        use super::parse_date;

        for to_parse in ["2023-02-29", "2024-13-01", "1-2-3-4", "today", ""] {
            assert!(parse_date(to_parse).is_err(), "{}", to_parse)
        }
    }

    #[test]
    fn test_parse_year_month() {
        use super::parse_year_month;
        use crate::time::today;
        use chrono::Datelike;

        let table = vec![
            ("2024-02", (2024, 2)),
            ("1999/12", (1999, 12)),
            ("7", (today().year(), 7)),
        ];

        for (to_parse, t) in table {
            assert_eq!(parse_year_month(to_parse).unwrap(), t, "{}", to_parse)
        }

        assert!(parse_year_month("2024-13").is_err());
        assert!(parse_year_month("2024-0").is_err());
        assert!(parse_year_month("2024-02-01").is_err());
    }
}
