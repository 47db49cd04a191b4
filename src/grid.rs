use crate::{
    cell::{BelongTo, MonthCellData, YearCellData},
    error::GridError,
    locale::{Locale, FIRST_MONTH_OF_YEAR, LAST_MONTH_OF_YEAR},
    weekday::{add_days, column_index, WeekStart, DAYS_IN_WEEK},
};
use chrono::{Datelike, NaiveDate};

pub type MonthRows = Vec<Vec<MonthCellData>>;

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, GridError> {
    if !(FIRST_MONTH_OF_YEAR..=LAST_MONTH_OF_YEAR).contains(&month) {
        return Err(GridError::InvalidMonth { month });
    }

    NaiveDate::from_ymd_opt(year, month, 1).ok_or(GridError::InvalidYear { year })
}

fn last_of_month(year: i32, month: u32) -> Result<NaiveDate, GridError> {
    (28..=31)
        .rev()
        .find_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .ok_or(GridError::InvalidYear { year })
}

/// Accumulates day cells into rows of seven, numbering rows from 1.
struct RowBuilder<'a> {
    theme: &'a str,
    rows: MonthRows,
    row: Vec<MonthCellData>,
    week_num: u32,
}

impl<'a> RowBuilder<'a> {
    fn new(theme: &'a str) -> Self {
        Self {
            theme,
            rows: Vec::new(),
            row: Vec::with_capacity(DAYS_IN_WEEK as usize),
            week_num: 1,
        }
    }

    fn push(&mut self, belong_to: BelongTo, is_cur_date: bool, date: NaiveDate) {
        self.row.push(MonthCellData::new(
            self.theme,
            belong_to,
            is_cur_date,
            date,
            self.week_num,
        ));

        if self.row.len() == DAYS_IN_WEEK as usize {
            tracing::trace!(week_num = self.week_num, "closed row");
            self.rows.push(std::mem::take(&mut self.row));
            self.week_num += 1;
        }
    }

    fn remaining(&self) -> usize {
        if self.row.is_empty() {
            0
        } else {
            DAYS_IN_WEEK as usize - self.row.len()
        }
    }

    fn finish(mut self) -> MonthRows {
        if !self.row.is_empty() {
            self.rows.push(self.row);
        }

        self.rows
    }
}

/// Builds the day grid of a month view using the default name table.
///
/// Rows always hold seven cells. Days of the previous month fill the first row
/// up to the first of `month`, days of the next month fill the last row.
pub fn create_month_cells_data(
    year: i32,
    month: u32,
    week_start_day: u32,
    reference: NaiveDate,
    theme: &str,
) -> Result<MonthRows, GridError> {
    create_month_cells_data_with(
        year,
        month,
        WeekStart::new(week_start_day)?,
        reference,
        theme,
    )
}

pub fn create_month_cells_data_with(
    year: i32,
    month: u32,
    week_start: WeekStart,
    reference: NaiveDate,
    theme: &str,
) -> Result<MonthRows, GridError> {
    let begin = first_of_month(year, month)?;
    let end = last_of_month(year, month)?;
    let days = end.day() as i64;
    let leading = column_index(week_start, begin) as i64;

    let mut builder = RowBuilder::new(theme);

    for i in 0..leading {
        builder.push(BelongTo::Previous, false, add_days(begin, i - leading)?);
    }

    for i in 0..days {
        let date = add_days(begin, i)?;
        builder.push(BelongTo::Current, date == reference, date);
    }

    for i in 0..builder.remaining() as i64 {
        builder.push(BelongTo::Next, false, add_days(end, i + 1)?);
    }

    let rows = builder.finish();
    tracing::debug!(
        year,
        month,
        week_start = week_start.get(),
        leading,
        rows = rows.len(),
        "built month grid"
    );

    Ok(rows)
}

/// Builds the twelve month cells of a year view using the default name table.
pub fn create_year_cells_data(
    year: i32,
    reference: NaiveDate,
    theme: &str,
) -> Result<Vec<YearCellData>, GridError> {
    create_year_cells_data_in(Locale::default(), year, reference, theme)
}

pub fn create_year_cells_data_in(
    locale: Locale,
    year: i32,
    reference: NaiveDate,
    theme: &str,
) -> Result<Vec<YearCellData>, GridError> {
    let is_cur_year = reference.year() == year;
    let mut months = Vec::with_capacity(LAST_MONTH_OF_YEAR as usize);

    for month in FIRST_MONTH_OF_YEAR..=LAST_MONTH_OF_YEAR {
        let is_cur_mon = is_cur_year && reference.month() == month;
        months.push(YearCellData::new(
            theme,
            is_cur_year,
            is_cur_mon,
            first_of_month(year, month)?,
            locale.month_label(month),
        ));
    }

    tracing::debug!(year, is_cur_year, "built year view");

    Ok(months)
}

/// Weekday indices of the seven grid columns, left to right, with their labels.
pub fn weekday_columns(week_start: WeekStart, locale: Locale) -> Vec<(u32, &'static str)> {
    (0..DAYS_IN_WEEK)
        .map(|column| {
            let index = (week_start.get() - 1 + column) % DAYS_IN_WEEK + 1;
            (index, locale.weekday_label(index))
        })
        .collect()
}
