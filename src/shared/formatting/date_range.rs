use chrono::NaiveDate;

const MONTH_YEAR: &str = "%b %Y";

/// `"Mar 2021 - Present"` style range; an open end renders as `Present`.
pub fn format_date_range(start: NaiveDate, end: Option<NaiveDate>) -> String {
    let start = start.format(MONTH_YEAR);

    match end {
        Some(end) => format!("{start} - {}", end.format(MONTH_YEAR)),
        None => format!("{start} - Present"),
    }
}
