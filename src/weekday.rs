use crate::error::GridError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub const DAYS_IN_WEEK: u32 = 7;

/// The weekday (1=Monday..7=Sunday) shown in the leftmost column of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct WeekStart(u32);

impl WeekStart {
    pub fn new(day: u32) -> Result<Self, GridError> {
        if (1..=DAYS_IN_WEEK).contains(&day) {
            Ok(Self(day))
        } else {
            Err(GridError::InvalidWeekStart { day })
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for WeekStart {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<u32> for WeekStart {
    type Error = GridError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WeekStart> for u32 {
    fn from(value: WeekStart) -> Self {
        value.0
    }
}

/// Weekday of `date` as 1=Monday..7=Sunday.
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().number_from_monday()
}

/// Column (0..=6) that `date` occupies in a week whose first column is `week_start`.
pub fn column_index(week_start: WeekStart, date: NaiveDate) -> u32 {
    let day = weekday_index(date);
    if day >= week_start.get() {
        day - week_start.get()
    } else {
        DAYS_IN_WEEK - week_start.get() + day
    }
}

pub fn add_days(date: NaiveDate, days: i64) -> Result<NaiveDate, GridError> {
    chrono::TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or(GridError::DateOutOfRange { date, days })
}
