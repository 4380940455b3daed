use std::fmt;

use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize,
};

/// The five user-entered numbers the table is derived from.
///
/// Every field is finite once it has passed through [`coerce`] or
/// [`CalculatorInputs::set`]; missing values default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorInputs {
    #[serde(deserialize_with = "lenient_number")]
    pub initial_capital: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub risk_per_trade: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub number_of_trades: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub stop_loss_percent: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub take_profit_percent: f64,
}

impl CalculatorInputs {
    pub fn new(
        initial_capital: f64,
        risk_per_trade: f64,
        number_of_trades: f64,
        stop_loss_percent: f64,
        take_profit_percent: f64,
    ) -> Self {
        Self {
            initial_capital: sanitize(initial_capital),
            risk_per_trade: sanitize(risk_per_trade),
            number_of_trades: sanitize(number_of_trades),
            stop_loss_percent: sanitize(stop_loss_percent),
            take_profit_percent: sanitize(take_profit_percent),
        }
    }

    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::InitialCapital => self.initial_capital,
            InputField::RiskPerTrade => self.risk_per_trade,
            InputField::NumberOfTrades => self.number_of_trades,
            InputField::StopLossPercent => self.stop_loss_percent,
            InputField::TakeProfitPercent => self.take_profit_percent,
        }
    }

    pub fn set(&mut self, field: InputField, value: f64) {
        let value = sanitize(value);
        match field {
            InputField::InitialCapital => self.initial_capital = value,
            InputField::RiskPerTrade => self.risk_per_trade = value,
            InputField::NumberOfTrades => self.number_of_trades = value,
            InputField::StopLossPercent => self.stop_loss_percent = value,
            InputField::TakeProfitPercent => self.take_profit_percent = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    InitialCapital,
    RiskPerTrade,
    NumberOfTrades,
    StopLossPercent,
    TakeProfitPercent,
}

impl InputField {
    pub const ALL: [InputField; 5] = [
        Self::InitialCapital,
        Self::RiskPerTrade,
        Self::NumberOfTrades,
        Self::StopLossPercent,
        Self::TakeProfitPercent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::InitialCapital => "initial_capital",
            Self::RiskPerTrade => "risk_per_trade",
            Self::NumberOfTrades => "number_of_trades",
            Self::StopLossPercent => "stop_loss_percent",
            Self::TakeProfitPercent => "take_profit_percent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::InitialCapital => "Initial Capital ($)",
            Self::RiskPerTrade => "Risk per Trade (%)",
            Self::NumberOfTrades => "Number of Trades",
            Self::StopLossPercent => "Stop Loss (%)",
            Self::TakeProfitPercent => "Take Profit (%)",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == value)
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turns raw form text into a number. Blank, unparseable and non-finite
/// input all read as zero.
pub fn coerce(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    trimmed.parse::<f64>().map(sanitize).unwrap_or(0.0)
}

pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Accepts a JSON number, numeric string, boolean or null and coerces it.
pub fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientNumberVisitor)
}

struct LenientNumberVisitor;

impl<'de> Visitor<'de> for LenientNumberVisitor {
    type Value = f64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number, a numeric string, or null")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<f64, E> {
        Ok(sanitize(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<f64, E> {
        Ok(if value { 1.0 } else { 0.0 })
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<f64, E> {
        Ok(coerce(value))
    }

    fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
        Ok(0.0)
    }

    fn visit_none<E: de::Error>(self) -> Result<f64, E> {
        Ok(0.0)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}
