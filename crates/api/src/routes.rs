use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json,
    Router,
};
use calculator::{calculate, CalculationView, CalculatorInputs};
use tracing::debug;

use crate::{
    state::{AppState, LeveragesResponse},
    ws,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/static/styles.css", get(styles))
        .route("/static/app.js", get(script))
        .route("/api/leverages", get(leverages))
        .route("/api/calculate", post(calculate_view))
        .route("/ws/form", get(ws::form_socket))
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.index_html().to_owned())
}

async fn styles() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], ui::styles_css())
}

async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        ui::app_js(),
    )
}

async fn leverages(State(state): State<AppState>) -> Json<LeveragesResponse> {
    Json(state.leverages())
}

async fn calculate_view(Json(inputs): Json<CalculatorInputs>) -> Json<CalculationView> {
    let calculation = calculate(&inputs);
    debug!(
        loss_per_trade = calculation.loss_per_trade,
        position_size = calculation.position_size,
        rows = calculation.rows.len(),
        "calculated risk table"
    );

    Json(CalculationView::new(&calculation, inputs.initial_capital))
}
