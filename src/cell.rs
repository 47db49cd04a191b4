use crate::weekday::weekday_index;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CellMode {
    Month,
    Year,
}

/// Which month a day cell falls in, relative to the month the grid was built for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "i8", into = "i8")]
pub enum BelongTo {
    Previous,
    Current,
    Next,
}

impl From<BelongTo> for i8 {
    fn from(value: BelongTo) -> Self {
        match value {
            BelongTo::Previous => -1,
            BelongTo::Current => 0,
            BelongTo::Next => 1,
        }
    }
}

impl TryFrom<i8> for BelongTo {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Previous),
            0 => Ok(Self::Current),
            1 => Ok(Self::Next),
            x => Err(format!("invalid belongTo value {}", x)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MonthCellData {
    mode: CellMode,
    theme: String,
    belong_to: BelongTo,
    is_cur_date: bool,
    year: i32,
    month: u32,
    day: u32,
    is_weekend: bool,
    week_num: u32,
    date: NaiveDate,
    date_display: String,
}

impl MonthCellData {
    pub fn new(
        theme: &str,
        belong_to: BelongTo,
        is_cur_date: bool,
        date: NaiveDate,
        week_num: u32,
    ) -> Self {
        let day = weekday_index(date);
        Self {
            mode: CellMode::Month,
            theme: theme.to_string(),
            belong_to,
            is_cur_date,
            year: date.year(),
            month: date.month(),
            day,
            is_weekend: day == 6 || day == 7,
            week_num,
            date,
            date_display: format!("{:02}", date.day()),
        }
    }

    pub fn mode(&self) -> CellMode {
        self.mode
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn belong_to(&self) -> BelongTo {
        self.belong_to
    }

    pub fn is_cur_date(&self) -> bool {
        self.is_cur_date
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Weekday index, 1=Monday..7=Sunday.
    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn is_weekend(&self) -> bool {
        self.is_weekend
    }

    pub fn week_num(&self) -> u32 {
        self.week_num
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn date_display(&self) -> &str {
        &self.date_display
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct YearCellData {
    mode: CellMode,
    theme: String,
    is_cur_year: bool,
    is_cur_mon: bool,
    year: i32,
    month: u32,
    date: NaiveDate,
    month_display: String,
}

impl YearCellData {
    pub fn new(
        theme: &str,
        is_cur_year: bool,
        is_cur_mon: bool,
        date: NaiveDate,
        month_display: &str,
    ) -> Self {
        Self {
            mode: CellMode::Year,
            theme: theme.to_string(),
            is_cur_year,
            is_cur_mon,
            year: date.year(),
            month: date.month(),
            date,
            month_display: month_display.to_string(),
        }
    }

    pub fn mode(&self) -> CellMode {
        self.mode
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn is_cur_year(&self) -> bool {
        self.is_cur_year
    }

    pub fn is_cur_mon(&self) -> bool {
        self.is_cur_mon
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn month_display(&self) -> &str {
        &self.month_display
    }
}
