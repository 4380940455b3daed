use serde::Serialize;

use crate::{inputs::CalculatorInputs, leverage::LEVERAGE_LEVELS};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComputedRow {
    pub index: usize,
    pub leverage: u32,
    pub margin: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub profit: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Calculation {
    pub loss_per_trade: f64,
    pub position_size: f64,
    pub rows: Vec<ComputedRow>,
}

// Zero and NaN both count as "not entered".
fn is_unset(value: f64) -> bool {
    value == 0.0 || value.is_nan()
}

/// Amount of capital put at risk on a single trade.
pub fn loss_per_trade(initial_capital: f64, risk_per_trade: f64, number_of_trades: f64) -> f64 {
    if is_unset(initial_capital) || is_unset(risk_per_trade) || is_unset(number_of_trades) {
        return 0.0;
    }

    initial_capital * (risk_per_trade / 100.0) / number_of_trades
}

/// Notional size whose stop-loss move loses exactly `loss_per_trade`.
pub fn position_size(loss_per_trade: f64, stop_loss_percent: f64) -> f64 {
    if is_unset(loss_per_trade) || is_unset(stop_loss_percent) {
        return 0.0;
    }

    loss_per_trade / (stop_loss_percent / 100.0)
}

pub fn compute_row(
    index: usize,
    leverage: u32,
    position_size: f64,
    stop_loss_percent: f64,
    take_profit_percent: f64,
) -> ComputedRow {
    let lev = f64::from(leverage);
    let margin = position_size / lev;
    let stop_loss = stop_loss_percent * lev;
    let take_profit = take_profit_percent * lev;
    let profit = take_profit / 100.0 * margin;

    ComputedRow {
        index,
        leverage,
        margin,
        stop_loss,
        take_profit,
        profit,
    }
}

/// One row per entry of [`LEVERAGE_LEVELS`], or none until position size,
/// stop loss and take profit are all set.
pub fn compute_rows(
    position_size: f64,
    stop_loss_percent: f64,
    take_profit_percent: f64,
) -> Vec<ComputedRow> {
    if is_unset(position_size) || is_unset(stop_loss_percent) || is_unset(take_profit_percent) {
        return Vec::new();
    }

    LEVERAGE_LEVELS
        .iter()
        .enumerate()
        .map(|(index, &leverage)| {
            compute_row(
                index,
                leverage,
                position_size,
                stop_loss_percent,
                take_profit_percent,
            )
        })
        .collect()
}

pub fn calculate(inputs: &CalculatorInputs) -> Calculation {
    let loss_per_trade = loss_per_trade(
        inputs.initial_capital,
        inputs.risk_per_trade,
        inputs.number_of_trades,
    );
    let position_size = position_size(loss_per_trade, inputs.stop_loss_percent);
    let rows = compute_rows(
        position_size,
        inputs.stop_loss_percent,
        inputs.take_profit_percent,
    );

    Calculation {
        loss_per_trade,
        position_size,
        rows,
    }
}
