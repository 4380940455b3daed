pub mod display;
pub mod engine;
pub mod form;
pub mod inputs;
pub mod leverage;

pub use display::{CalculationView, RowView, EMPTY_TABLE_MESSAGE, TABLE_HEADERS};
pub use engine::{calculate, compute_rows, loss_per_trade, position_size, Calculation, ComputedRow};
pub use form::CalculatorForm;
pub use inputs::{coerce, CalculatorInputs, InputField};
pub use leverage::{LeverageTier, LEVERAGE_LEVELS};

pub fn module_ready() -> bool {
    true
}
