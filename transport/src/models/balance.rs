use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyAsset {
    pub ccy: String,
    pub bal: Decimal,
    pub avail_bal: Decimal,
    pub frozen_bal: Decimal,
    pub eq: Decimal,
    pub eq_usd: Decimal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Balance {
    pub total_equity: Decimal,
    pub available: Decimal,
    pub frozen: Decimal,
    pub margin_used: Decimal,
    pub unrealized_pnl: Decimal,
    #[serde(default)]
    pub assets: Vec<CurrencyAsset>,
}
