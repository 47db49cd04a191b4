use crate::{
    cell::YearCellData,
    filenames::monthgrid_config,
    grid::{
        create_month_cells_data_with, create_year_cells_data_in, weekday_columns, MonthRows,
    },
    locale::Locale,
    weekday::WeekStart,
};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILENAME: &str = ".monthgrid.conf";

fn default_theme() -> String {
    "full".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    week_start_day: WeekStart,
    #[serde(default = "default_theme")]
    theme: String,
    #[serde(default)]
    locale: Locale,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            week_start_day: WeekStart::default(),
            theme: default_theme(),
            locale: Locale::default(),
        }
    }
}

impl Config {
    pub fn load(filename: Option<std::path::PathBuf>) -> Result<Self, anyhow::Error> {
        let path = filename.unwrap_or(monthgrid_config());
        let mut io = std::fs::OpenOptions::new();
        io.read(true);

        match io.open(&path) {
            Ok(io) => Ok(serde_yaml::from_reader(io)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no configuration found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, filename: Option<std::path::PathBuf>) -> Result<(), anyhow::Error> {
        let path = filename.unwrap_or(monthgrid_config());
        let mut io = std::fs::OpenOptions::new();
        io.write(true);
        io.truncate(true);
        io.create(true);
        let io = io.open(path)?;

        Ok(serde_yaml::to_writer(io, self)?)
    }

    pub fn set_week_start_day(&mut self, day: u32) -> Result<(), anyhow::Error> {
        self.week_start_day = WeekStart::new(day)?;
        Ok(())
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start_day
    }

    pub fn set_theme(&mut self, theme: String) {
        self.theme = theme;
    }

    pub fn theme(&self) -> String {
        self.theme.clone()
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn month_cells(
        &self,
        year: i32,
        month: u32,
        reference: chrono::NaiveDate,
    ) -> Result<MonthRows, anyhow::Error> {
        Ok(create_month_cells_data_with(
            year,
            month,
            self.week_start_day,
            reference,
            &self.theme,
        )?)
    }

    pub fn year_cells(
        &self,
        year: i32,
        reference: chrono::NaiveDate,
    ) -> Result<Vec<YearCellData>, anyhow::Error> {
        Ok(create_year_cells_data_in(
            self.locale,
            year,
            reference,
            &self.theme,
        )?)
    }

    /// Column headers for month grids built from this configuration.
    pub fn weekday_columns(&self) -> Vec<(u32, &'static str)> {
        weekday_columns(self.week_start_day, self.locale)
    }
}
