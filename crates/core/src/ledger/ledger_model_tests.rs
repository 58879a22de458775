use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::ledger::{CashFlowDirection, CashMovement, DividendRecord, TradeRecord, TradeSide};

fn sample_trade() -> TradeRecord {
    TradeRecord {
        account_id: "ISA".to_string(),
        instrument_id: "005930".to_string(),
        instrument_name: "Samsung Electronics".to_string(),
        asset_class: "Equity".to_string(),
        trade_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        side: TradeSide::Buy,
        quantity: dec!(10),
        unit_price: dec!(71000),
        amount: dec!(710000),
        fee: dec!(350),
        marked_price: None,
    }
}

#[test]
fn trade_record_serializes_camel_case() {
    let json = serde_json::to_value(sample_trade()).unwrap();

    assert_eq!(json["accountId"], "ISA");
    assert_eq!(json["instrumentId"], "005930");
    assert_eq!(json["side"], "BUY");
    assert!(json["markedPrice"].is_null());
}

#[test]
fn trade_record_round_trips() {
    let trade = sample_trade();
    let json = serde_json::to_string(&trade).unwrap();
    let back: TradeRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(back, trade);
}

#[test]
fn marked_price_defaults_to_none() {
    let json = r#"{
        "accountId": "ISA",
        "instrumentId": "FUND-1",
        "instrumentName": "Balanced Fund",
        "assetClass": "Fund",
        "tradeDate": "2025-01-02",
        "side": "BUY",
        "quantity": 3.0,
        "unitPrice": 1000.0,
        "amount": 3000.0,
        "fee": 0.0
    }"#;

    let trade: TradeRecord = serde_json::from_str(json).unwrap();
    assert_eq!(trade.marked_price, None);
}

#[test]
fn cash_movement_signed_amount_follows_direction() {
    let deposit = CashMovement {
        account_id: "ISA".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
        direction: CashFlowDirection::Deposit,
        amount: dec!(500000),
    };
    let withdrawal = CashMovement {
        direction: CashFlowDirection::Withdrawal,
        ..deposit.clone()
    };

    assert_eq!(deposit.signed_amount(), dec!(500000));
    assert_eq!(withdrawal.signed_amount(), dec!(-500000));
}

#[test]
fn dividend_record_serializes_camel_case() {
    let dividend = DividendRecord {
        account_id: "Pension".to_string(),
        amount: dec!(12000),
    };
    let json = serde_json::to_value(&dividend).unwrap();

    assert_eq!(json["accountId"], "Pension");
}
