use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use calculator::{
    inputs::lenient_number, CalculationView, CalculatorForm, InputField, LEVERAGE_LEVELS,
};

#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct LeveragesResponse {
    pub leverages: Vec<u32>,
}

/// One edit sent by the page over the form socket.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct FieldUpdate {
    pub field: InputField,
    #[serde(deserialize_with = "lenient_number")]
    pub value: f64,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct FrameErrorResponse {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("frame is not a valid field update: {0}")]
    InvalidUpdate(#[from] serde_json::Error),
    #[error("binary frames are not supported")]
    BinaryFrame,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum OpenSessionError {
    #[error("form session id space exhausted")]
    SessionIdOverflow,
}

#[derive(Clone, Debug)]
pub struct AppState {
    next_session_id: Arc<AtomicU64>,
    index_html: Arc<str>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            next_session_id: Arc::new(AtomicU64::new(0)),
            index_html: render_zero_state_index().into(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_session(&self) -> Result<u64, OpenSessionError> {
        let previous = self
            .next_session_id
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                current.checked_add(1)
            })
            .map_err(|_| OpenSessionError::SessionIdOverflow)?;

        Ok(previous + 1)
    }

    pub fn index_html(&self) -> &str {
        &self.index_html
    }

    pub fn leverages(&self) -> LeveragesResponse {
        LeveragesResponse {
            leverages: LEVERAGE_LEVELS.to_vec(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_next_session_id_for_test(next_session_id: u64) -> Self {
        Self {
            next_session_id: Arc::new(AtomicU64::new(next_session_id)),
            ..Self::default()
        }
    }
}

pub fn form_view(form: &CalculatorForm) -> CalculationView {
    CalculationView::new(form.calculation(), form.inputs().initial_capital)
}

pub fn parse_update(frame: &str) -> Result<FieldUpdate, FrameError> {
    Ok(serde_json::from_str(frame)?)
}

fn render_zero_state_index() -> String {
    let form = CalculatorForm::new();
    ui::render_index(form.inputs(), &form_view(&form))
}
