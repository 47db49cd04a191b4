pub fn now() -> chrono::DateTime<chrono::Local> {
    chrono::Local::now()
}

/// Today's date in local time, the default reference date for both views.
pub fn today() -> chrono::NaiveDate {
    now().date_naive()
}
