use crate::{
    engine::{calculate, Calculation},
    inputs::{coerce, CalculatorInputs, InputField},
};

/// Input state plus the table derived from it. Every setter recomputes the
/// derived values before returning, so `calculation()` never lags `inputs()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorForm {
    inputs: CalculatorInputs,
    calculation: Calculation,
}

impl CalculatorForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_inputs(inputs: CalculatorInputs) -> Self {
        let calculation = calculate(&inputs);
        Self {
            inputs,
            calculation,
        }
    }

    pub fn inputs(&self) -> &CalculatorInputs {
        &self.inputs
    }

    pub fn calculation(&self) -> &Calculation {
        &self.calculation
    }

    pub fn set(&mut self, field: InputField, value: f64) -> &Calculation {
        self.inputs.set(field, value);
        self.recompute()
    }

    pub fn set_raw(&mut self, field: InputField, raw: &str) -> &Calculation {
        self.set(field, coerce(raw))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn recompute(&mut self) -> &Calculation {
        self.calculation = calculate(&self.inputs);
        &self.calculation
    }
}
