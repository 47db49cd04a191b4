mod date;

pub use self::date::{parse_date, parse_year_month};
