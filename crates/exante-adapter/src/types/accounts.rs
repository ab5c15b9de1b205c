/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs for account endpoints
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One user account and its access status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub status: String,
    pub account_id: String,
}

/// Per-currency value breakdown within an account summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencySummary {
    pub code: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub converted_value: Decimal,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str")]
    pub value: Decimal,
}

/// One open position within an account summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSummary {
    pub id: Option<String>,
    pub symbol_id: String,
    pub symbol_type: String,
    pub currency: String,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub quantity: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub average_price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub value: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub converted_value: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub pnl: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub converted_pnl: Option<Decimal>,
}

/// Account summary for a given session date and currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub account: Option<String>,
    pub account_id: Option<String>,
    pub currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub free_money: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub margin_utilization: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub money_used_for_margin: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub net_asset_value: Decimal,
    pub currencies: Vec<CurrencySummary>,
    pub positions: Vec<PositionSummary>,
    /// Unix milliseconds
    pub timestamp: i64,
    /// [year, month, day]
    pub session_date: Option<(i32, u32, u32)>,
}
