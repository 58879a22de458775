use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest and previous closing price for one instrument.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClosingPrices {
    pub latest: Decimal,
    pub previous_close: Decimal,
}

impl ClosingPrices {
    /// A pair where both closes are the same price, so the day change over
    /// it is zero.
    pub fn flat(price: Decimal) -> Self {
        ClosingPrices {
            latest: price,
            previous_close: price,
        }
    }

    pub fn zero() -> Self {
        ClosingPrices::flat(Decimal::ZERO)
    }

    pub fn day_change_per_unit(&self) -> Decimal {
        self.latest - self.previous_close
    }
}
