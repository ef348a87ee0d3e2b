use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Both bounds are inclusive.
pub fn is_date_in_range(date: NaiveDate, start_date: NaiveDate, end_date: NaiveDate) -> bool {
    date >= start_date && date <= end_date
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, day).unwrap()
    }

    #[test]
    fn range_includes_both_bounds() {
        assert!(is_date_in_range(date(5), date(5), date(7)));
        assert!(is_date_in_range(date(7), date(5), date(7)));
        assert!(is_date_in_range(date(6), date(5), date(7)));
        assert!(!is_date_in_range(date(4), date(5), date(7)));
        assert!(!is_date_in_range(date(8), date(5), date(7)));
    }

    #[test]
    fn inverted_range_matches_nothing() {
        assert!(!is_date_in_range(date(6), date(7), date(5)));
    }

    #[test]
    fn formats_as_iso_date() {
        assert_eq!(format_date(date(5)), "2024-02-05");
    }
}
