/// Decimal precision for rate fields
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Calendar-day lag between a trade and its settlement, before rolling
/// forward past weekends
pub const SETTLEMENT_LAG_DAYS: i64 = 2;
