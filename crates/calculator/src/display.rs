//! Formatted, display-ready view of a [`Calculation`].
//!
//! Values are rendered with two decimals. Rows carry their leverage tier and
//! whether the margin is larger than the capital entered, so the page only
//! has to bind strings and class names.

use serde::Serialize;

use crate::{
    engine::{Calculation, ComputedRow},
    leverage::LeverageTier,
};

pub const TABLE_HEADERS: [&str; 5] = [
    "Leverage",
    "Margin",
    "Stop Loss (%)",
    "Take Profit (%)",
    "Profit ($)",
];

pub const EMPTY_TABLE_MESSAGE: &str = "Enter values to see results.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub index: usize,
    pub leverage: u32,
    pub tier: LeverageTier,
    pub tier_class: &'static str,
    pub margin: String,
    pub stop_loss: String,
    pub take_profit: String,
    pub profit: String,
    pub margin_exceeds_capital: bool,
}

impl RowView {
    pub fn new(row: &ComputedRow, initial_capital: f64) -> Self {
        let tier = LeverageTier::for_leverage(row.leverage);
        Self {
            index: row.index,
            leverage: row.leverage,
            tier,
            tier_class: tier.css_class(),
            margin: format_money(row.margin),
            stop_loss: format_percent(row.stop_loss),
            take_profit: format_percent(row.take_profit),
            profit: format_money(row.profit),
            margin_exceeds_capital: row.margin > initial_capital,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationView {
    pub loss_per_trade: String,
    pub position_size: String,
    pub rows: Vec<RowView>,
    pub empty_message: Option<&'static str>,
}

impl CalculationView {
    pub fn new(calculation: &Calculation, initial_capital: f64) -> Self {
        let rows: Vec<RowView> = calculation
            .rows
            .iter()
            .map(|row| RowView::new(row, initial_capital))
            .collect();
        let empty_message = rows.is_empty().then_some(EMPTY_TABLE_MESSAGE);

        Self {
            loss_per_trade: format_fixed(calculation.loss_per_trade),
            position_size: format_fixed(calculation.position_size),
            rows,
            empty_message,
        }
    }
}

pub fn format_fixed(value: f64) -> String {
    // Avoid printing "-0.00".
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.2}")
}

pub fn format_money(value: f64) -> String {
    format!("${}", format_fixed(value))
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", format_fixed(value))
}
