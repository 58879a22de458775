//! Shared fakes and builders for integration tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use folio_core::ledger::{
    CashFlowDirection, CashMovement, DividendRecord, LedgerError, LedgerSource, TradeRecord,
    TradeSide,
};
use folio_core::market_data::{ClosingPrices, MarketDataError, MarketDataProvider};

pub struct FakeOracle {
    quotes: HashMap<String, ClosingPrices>,
}

impl FakeOracle {
    pub fn new(quotes: &[(&str, Decimal, Decimal)]) -> Self {
        FakeOracle {
            quotes: quotes
                .iter()
                .map(|(id, latest, previous)| {
                    (
                        id.to_string(),
                        ClosingPrices {
                            latest: *latest,
                            previous_close: *previous,
                        },
                    )
                })
                .collect(),
        }
    }
}

#[async_trait]
impl MarketDataProvider for FakeOracle {
    async fn latest_and_previous_close(
        &self,
        instrument_id: &str,
    ) -> Result<ClosingPrices, MarketDataError> {
        self.quotes
            .get(instrument_id)
            .copied()
            .ok_or_else(|| MarketDataError::NotFound(instrument_id.to_string()))
    }
}

#[derive(Default)]
pub struct FakeLedger {
    pub trades: HashMap<String, Vec<TradeRecord>>,
    pub cash_movements: HashMap<String, Vec<CashMovement>>,
    pub dividends: Vec<DividendRecord>,
    pub unavailable: bool,
}

#[async_trait]
impl LedgerSource for FakeLedger {
    async fn trades(&self, account_id: &str) -> Result<Vec<TradeRecord>, LedgerError> {
        if self.unavailable {
            return Err(LedgerError::Unavailable("store offline".to_string()));
        }
        Ok(self.trades.get(account_id).cloned().unwrap_or_default())
    }

    async fn cash_movements(&self, account_id: &str) -> Result<Vec<CashMovement>, LedgerError> {
        if self.unavailable {
            return Err(LedgerError::Unavailable("store offline".to_string()));
        }
        Ok(self
            .cash_movements
            .get(account_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn dividends(&self) -> Result<Vec<DividendRecord>, LedgerError> {
        if self.unavailable {
            return Err(LedgerError::Unavailable("store offline".to_string()));
        }
        Ok(self.dividends.clone())
    }
}

pub fn trade(
    account_id: &str,
    instrument_id: &str,
    asset_class: &str,
    day: (i32, u32, u32),
    side: TradeSide,
    quantity: Decimal,
    unit_price: Decimal,
) -> TradeRecord {
    TradeRecord {
        account_id: account_id.to_string(),
        instrument_id: instrument_id.to_string(),
        instrument_name: format!("{} name", instrument_id),
        asset_class: asset_class.to_string(),
        trade_date: NaiveDate::from_ymd_opt(day.0, day.1, day.2).unwrap(),
        side,
        quantity,
        unit_price,
        amount: quantity * unit_price,
        fee: Decimal::ZERO,
        marked_price: None,
    }
}

pub fn deposit(account_id: &str, amount: Decimal) -> CashMovement {
    CashMovement {
        account_id: account_id.to_string(),
        date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
        direction: CashFlowDirection::Deposit,
        amount,
    }
}

pub fn dividend(account_id: &str, amount: Decimal) -> DividendRecord {
    DividendRecord {
        account_id: account_id.to_string(),
        amount,
    }
}
