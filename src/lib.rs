pub mod cell;
pub mod config;
pub mod error;
pub mod export;
pub mod filenames;
pub mod grid;
pub mod locale;
pub mod logging;
pub mod parsers;
pub mod time;
pub mod weekday;

pub use cell::{BelongTo, CellMode, MonthCellData, YearCellData};
pub use error::GridError;
pub use grid::{
    create_month_cells_data, create_month_cells_data_with, create_year_cells_data,
    create_year_cells_data_in, weekday_columns, MonthRows,
};
pub use locale::{weekday_label, Locale};
pub use weekday::{add_days, column_index, weekday_index, WeekStart};
