use log::warn;
use rust_decimal::Decimal;
use std::collections::VecDeque;

use crate::ledger::TradeRecord;

/// One acquisition applied to a cost basis tracker.
#[derive(Debug, Clone, Copy)]
pub struct LotAcquisition {
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub amount: Decimal,
    pub fee: Decimal,
    /// Conversion rate into the reporting currency, captured at the lot's
    /// settlement. ONE for native-currency accounting.
    pub fx_rate: Decimal,
}

impl LotAcquisition {
    pub fn from_trade(trade: &TradeRecord) -> Self {
        LotAcquisition {
            quantity: trade.quantity,
            unit_price: trade.unit_price,
            amount: trade.amount,
            fee: trade.fee,
            fx_rate: Decimal::ONE,
        }
    }

    pub fn with_fx_rate(mut self, fx_rate: Decimal) -> Self {
        self.fx_rate = fx_rate;
        self
    }
}

/// One disposal applied to a cost basis tracker.
#[derive(Debug, Clone, Copy)]
pub struct LotDisposal {
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub amount: Decimal,
    pub fee: Decimal,
    /// Conversion rate into the reporting currency, captured at the
    /// disposal's settlement. ONE for native-currency accounting.
    pub fx_rate: Decimal,
}

impl LotDisposal {
    pub fn from_trade(trade: &TradeRecord) -> Self {
        LotDisposal {
            quantity: trade.quantity,
            unit_price: trade.unit_price,
            amount: trade.amount,
            fee: trade.fee,
            fx_rate: Decimal::ONE,
        }
    }

    pub fn with_fx_rate(mut self, fx_rate: Decimal) -> Self {
        self.fx_rate = fx_rate;
        self
    }
}

/// Outcome of applying one disposal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SellOutcome {
    pub realized_profit: Decimal,
    pub proceeds: Decimal,
    pub cost_of_sold: Decimal,
}

/// Cost basis tracking for one instrument's trade sequence.
///
/// The two implementations are distinct accounting methods and are not
/// interchangeable; callers pick one per reporting need. Neither rejects
/// an oversell: disposals beyond the held quantity pass through so data
/// entry errors stay visible downstream.
pub trait CostBasisStrategy {
    fn apply_buy(&mut self, lot: LotAcquisition);
    fn apply_sell(&mut self, disposal: LotDisposal) -> SellOutcome;
    fn held_quantity(&self) -> Decimal;
    fn average_cost(&self) -> Decimal;
}

/// Weighted-average cost: all held units share one blended unit cost,
/// recomputed only on purchases.
#[derive(Debug, Clone, Default)]
pub struct WeightedAverageCost {
    held_quantity: Decimal,
    average_cost: Decimal,
}

impl WeightedAverageCost {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CostBasisStrategy for WeightedAverageCost {
    fn apply_buy(&mut self, lot: LotAcquisition) {
        let new_cost_basis = self.average_cost * self.held_quantity + lot.amount + lot.fee;
        self.held_quantity += lot.quantity;
        self.average_cost = if self.held_quantity.is_zero() {
            Decimal::ZERO
        } else {
            new_cost_basis / self.held_quantity
        };
    }

    fn apply_sell(&mut self, disposal: LotDisposal) -> SellOutcome {
        // Average cost stays at the pre-sale blend; only purchases move it.
        let realized_profit =
            (disposal.unit_price - self.average_cost) * disposal.quantity - disposal.fee;
        let cost_of_sold = self.average_cost * disposal.quantity;
        self.held_quantity -= disposal.quantity;
        if self.held_quantity.is_sign_negative() && !self.held_quantity.is_zero() {
            warn!(
                "Sell exceeds held quantity; position is now {}",
                self.held_quantity
            );
        }
        SellOutcome {
            realized_profit,
            proceeds: disposal.amount - disposal.fee,
            cost_of_sold,
        }
    }

    fn held_quantity(&self) -> Decimal {
        self.held_quantity
    }

    fn average_cost(&self) -> Decimal {
        self.average_cost
    }
}

/// One open buy lot awaiting FIFO relief.
#[derive(Debug, Clone)]
struct OpenLot {
    quantity: Decimal,
    amount: Decimal,
    fee: Decimal,
    fx_rate: Decimal,
}

/// Strict FIFO lot matching: sells consume whole buy lots in acquisition
/// order, prorating a partially consumed lot. Each lot keeps the FX rate
/// it was acquired under, so relieved cost is restated lot by lot.
#[derive(Debug, Clone, Default)]
pub struct FifoLotMatching {
    lots: VecDeque<OpenLot>,
}

impl FifoLotMatching {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_lot_count(&self) -> usize {
        self.lots.len()
    }
}

impl CostBasisStrategy for FifoLotMatching {
    fn apply_buy(&mut self, lot: LotAcquisition) {
        self.lots.push_back(OpenLot {
            quantity: lot.quantity,
            amount: lot.amount,
            fee: lot.fee,
            fx_rate: lot.fx_rate,
        });
    }

    fn apply_sell(&mut self, disposal: LotDisposal) -> SellOutcome {
        let proceeds = (disposal.amount - disposal.fee) * disposal.fx_rate;
        let mut remaining = disposal.quantity;
        let mut cost_of_sold = Decimal::ZERO;

        while remaining > Decimal::ZERO {
            let Some(front) = self.lots.front_mut() else {
                warn!("Sell exceeds open lots; unmatched quantity {}", remaining);
                break;
            };

            if front.quantity <= remaining {
                cost_of_sold += (front.amount + front.fee) * front.fx_rate;
                remaining -= front.quantity;
                self.lots.pop_front();
            } else {
                let ratio = remaining / front.quantity;
                cost_of_sold += (front.amount + front.fee) * ratio * front.fx_rate;
                front.quantity -= remaining;
                front.amount *= Decimal::ONE - ratio;
                front.fee *= Decimal::ONE - ratio;
                remaining = Decimal::ZERO;
            }
        }

        SellOutcome {
            realized_profit: proceeds - cost_of_sold,
            proceeds,
            cost_of_sold,
        }
    }

    fn held_quantity(&self) -> Decimal {
        self.lots.iter().map(|lot| lot.quantity).sum()
    }

    fn average_cost(&self) -> Decimal {
        let quantity = self.held_quantity();
        if quantity.is_zero() {
            return Decimal::ZERO;
        }
        let basis: Decimal = self.lots.iter().map(|lot| lot.amount + lot.fee).sum();
        basis / quantity
    }
}
