use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::fx_errors::FxError;
use super::fx_model::ExchangeRate;

/// Reporting-time currency conversion over a dated rate table.
///
/// Rates are indexed per (from, to) pair and sorted by date; inverse pairs
/// are derived where no direct rate is loaded. Within one date the last
/// loaded row for a pair wins.
pub struct CurrencyConverter {
    // (from, to) -> date-ascending series
    rates: HashMap<(String, String), Vec<(NaiveDate, Decimal)>>,
}

impl CurrencyConverter {
    pub fn new(exchange_rates: Vec<ExchangeRate>) -> Result<Self, FxError> {
        let mut by_pair: HashMap<(String, String), BTreeMap<NaiveDate, Decimal>> = HashMap::new();

        for rate in exchange_rates {
            if rate.from_currency == rate.to_currency {
                continue;
            }
            if rate.rate <= Decimal::ZERO {
                return Err(FxError::InvalidRate(format!(
                    "{}/{} on {}: {}",
                    rate.from_currency, rate.to_currency, rate.date, rate.rate
                )));
            }
            by_pair
                .entry((rate.from_currency, rate.to_currency))
                .or_default()
                .insert(rate.date, rate.rate);
        }

        // Derive inverse pairs; a directly loaded rate wins over a derived one.
        let mut inverses: HashMap<(String, String), Vec<(NaiveDate, Decimal)>> = HashMap::new();
        for ((from, to), series) in &by_pair {
            let inverted = inverses.entry((to.clone(), from.clone())).or_default();
            for (date, rate) in series {
                inverted.push((*date, Decimal::ONE / rate));
            }
        }
        for (pair, series) in inverses {
            let slot = by_pair.entry(pair).or_default();
            for (date, rate) in series {
                slot.entry(date).or_insert(rate);
            }
        }

        let rates = by_pair
            .into_iter()
            .map(|(pair, series)| (pair, series.into_iter().collect()))
            .collect();

        Ok(CurrencyConverter { rates })
    }

    fn series(&self, from: &str, to: &str) -> Result<&[(NaiveDate, Decimal)], FxError> {
        self.rates
            .get(&(from.to_string(), to.to_string()))
            .map(|series| series.as_slice())
            .filter(|series| !series.is_empty())
            .ok_or_else(|| FxError::RateNotFound(format!("{}/{}", from, to)))
    }

    /// Latest available rate for the pair.
    pub fn latest_rate(&self, from: &str, to: &str) -> Result<Decimal, FxError> {
        if from == to {
            return Ok(Decimal::ONE);
        }
        let series = self.series(from, to)?;
        series
            .last()
            .map(|(_, rate)| *rate)
            .ok_or_else(|| FxError::RateNotFound(format!("{}/{}", from, to)))
    }

    /// First rate dated on or after `date`, or the latest known rate when
    /// the date is past the end of the series (settlement in the future,
    /// or no newer rate published yet).
    pub fn rate_on_or_after(
        &self,
        from: &str,
        to: &str,
        date: NaiveDate,
    ) -> Result<Decimal, FxError> {
        if from == to {
            return Ok(Decimal::ONE);
        }
        let series = self.series(from, to)?;
        let index = series.partition_point(|(d, _)| *d < date);
        series
            .get(index)
            .or_else(|| series.last())
            .map(|(_, rate)| *rate)
            .ok_or_else(|| FxError::RateNotFound(format!("{}/{}", from, to)))
    }

    /// Converts an amount at the latest available rate.
    pub fn convert_latest(&self, amount: Decimal, from: &str, to: &str) -> Result<Decimal, FxError> {
        if from == to {
            return Ok(amount);
        }
        Ok(amount * self.latest_rate(from, to)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn krw_rates() -> Vec<ExchangeRate> {
        vec![
            ExchangeRate::new("USD", "KRW", dec!(1300), date(2025, 1, 10)),
            ExchangeRate::new("USD", "KRW", dec!(1350), date(2025, 2, 10)),
            ExchangeRate::new("USD", "KRW", dec!(1450), date(2025, 3, 10)),
        ]
    }

    #[test]
    fn latest_rate_is_the_newest_row() {
        let converter = CurrencyConverter::new(krw_rates()).unwrap();
        assert_eq!(converter.latest_rate("USD", "KRW").unwrap(), dec!(1450));
    }

    #[test]
    fn rate_on_or_after_picks_first_matching_date() {
        let converter = CurrencyConverter::new(krw_rates()).unwrap();

        // Exact match.
        assert_eq!(
            converter
                .rate_on_or_after("USD", "KRW", date(2025, 2, 10))
                .unwrap(),
            dec!(1350)
        );
        // Between two rows: the next published rate applies.
        assert_eq!(
            converter
                .rate_on_or_after("USD", "KRW", date(2025, 1, 20))
                .unwrap(),
            dec!(1350)
        );
    }

    #[test]
    fn rate_after_series_end_falls_back_to_latest() {
        let converter = CurrencyConverter::new(krw_rates()).unwrap();
        assert_eq!(
            converter
                .rate_on_or_after("USD", "KRW", date(2025, 6, 1))
                .unwrap(),
            dec!(1450)
        );
    }

    #[test]
    fn inverse_pair_is_derived() {
        let converter = CurrencyConverter::new(krw_rates()).unwrap();
        assert_eq!(
            converter.latest_rate("KRW", "USD").unwrap(),
            Decimal::ONE / dec!(1450)
        );
    }

    #[test]
    fn last_row_wins_within_one_date() {
        let mut rates = krw_rates();
        rates.push(ExchangeRate::new("USD", "KRW", dec!(1460), date(2025, 3, 10)));
        let converter = CurrencyConverter::new(rates).unwrap();

        assert_eq!(converter.latest_rate("USD", "KRW").unwrap(), dec!(1460));
    }

    #[test]
    fn same_currency_is_identity() {
        let converter = CurrencyConverter::new(vec![]).unwrap();
        assert_eq!(converter.latest_rate("KRW", "KRW").unwrap(), Decimal::ONE);
        assert_eq!(
            converter.convert_latest(dec!(500), "KRW", "KRW").unwrap(),
            dec!(500)
        );
    }

    #[test]
    fn unknown_pair_is_an_error() {
        let converter = CurrencyConverter::new(krw_rates()).unwrap();
        assert!(matches!(
            converter.latest_rate("EUR", "KRW"),
            Err(FxError::RateNotFound(_))
        ));
    }

    #[test]
    fn non_positive_rate_is_rejected() {
        let rates = vec![ExchangeRate::new("USD", "KRW", dec!(0), date(2025, 1, 10))];
        assert!(matches!(
            CurrencyConverter::new(rates),
            Err(FxError::InvalidRate(_))
        ));
    }

    #[test]
    fn convert_latest_multiplies_by_rate() {
        let converter = CurrencyConverter::new(krw_rates()).unwrap();
        assert_eq!(
            converter.convert_latest(dec!(100), "USD", "KRW").unwrap(),
            dec!(145000)
        );
    }
}
