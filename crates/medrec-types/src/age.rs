//! Age derivation from a date of birth

use chrono::{Datelike, NaiveDate, Utc};

/// Whole years between `birth` and `on`, counting a year only once the
/// birthday month/day has been reached.
pub fn age_in_years_on(birth: NaiveDate, on: NaiveDate) -> u32 {
    let mut years = on.year() - birth.year();
    if (on.month(), on.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// Age in whole years as of today (UTC)
pub fn age_in_years(birth: NaiveDate) -> u32 {
    age_in_years_on(birth, Utc::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn counts_whole_years() {
        assert_eq!(age_in_years_on(date(1990, 7, 22), date(2024, 7, 22)), 34);
        assert_eq!(age_in_years_on(date(1990, 7, 22), date(2024, 12, 31)), 34);
    }

    #[test]
    fn birthday_not_yet_reached() {
        assert_eq!(age_in_years_on(date(1990, 7, 22), date(2024, 7, 21)), 33);
        assert_eq!(age_in_years_on(date(1990, 7, 22), date(2024, 1, 1)), 33);
    }

    #[test]
    fn leap_day_birth() {
        // Feb 29 birthday counts on Mar 1 of common years
        assert_eq!(age_in_years_on(date(2000, 2, 29), date(2023, 2, 28)), 22);
        assert_eq!(age_in_years_on(date(2000, 2, 29), date(2023, 3, 1)), 23);
        assert_eq!(age_in_years_on(date(2000, 2, 29), date(2024, 2, 29)), 24);
    }

    #[test]
    fn birth_today_is_zero() {
        assert_eq!(age_in_years_on(date(2024, 5, 5), date(2024, 5, 5)), 0);
    }

    #[test]
    fn future_birth_saturates_to_zero() {
        assert_eq!(age_in_years_on(date(2030, 1, 1), date(2024, 5, 5)), 0);
    }
}
