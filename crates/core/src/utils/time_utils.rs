use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::constants::SETTLEMENT_LAG_DAYS;

/// Settlement date for a trade: the trade date plus the fixed lag, rolled
/// forward past weekends. Period attribution and FX lookups for a sell
/// both key off this date.
pub fn settlement_date(trade_date: NaiveDate) -> NaiveDate {
    let mut date = trade_date + Duration::days(SETTLEMENT_LAG_DAYS);
    while matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        date += Duration::days(1);
    }
    date
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn midweek_trade_settles_two_days_later() {
        // Monday 2025-08-04 -> Wednesday 2025-08-06
        assert_eq!(settlement_date(date(2025, 8, 4)), date(2025, 8, 6));
    }

    #[test]
    fn settlement_rolls_off_saturday() {
        // Thursday 2025-07-31 -> Saturday -> Monday 2025-08-04
        assert_eq!(settlement_date(date(2025, 7, 31)), date(2025, 8, 4));
    }

    #[test]
    fn settlement_rolls_off_sunday() {
        // Friday 2025-08-01 -> Sunday -> Monday 2025-08-04
        assert_eq!(settlement_date(date(2025, 8, 1)), date(2025, 8, 4));
    }

    #[test]
    fn settlement_can_cross_a_year_boundary() {
        // Monday 2024-12-30 -> Wednesday 2025-01-01
        assert_eq!(settlement_date(date(2024, 12, 30)), date(2025, 1, 1));
    }
}
