use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use calculator::CalculatorForm;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::state::{form_view, parse_update, AppState, FrameError, FrameErrorResponse};

pub async fn form_socket(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    let session_id = match state.open_session() {
        Ok(session_id) => session_id,
        Err(err) => {
            warn!(error = %err, "rejecting form socket");
            return StatusCode::SERVICE_UNAVAILABLE.into_response();
        }
    };

    ws.on_upgrade(move |socket| run_form_session(socket, session_id))
}

async fn run_form_session(mut socket: WebSocket, session_id: u64) {
    info!(session_id, "form session opened");

    // Each connection edits its own form; nothing is shared between sessions.
    let mut form = CalculatorForm::new();
    if send_json(&mut socket, &form_view(&form)).await.is_err() {
        return;
    }

    while let Some(inbound) = socket.recv().await {
        let outcome = match inbound {
            Ok(Message::Text(frame)) => apply_frame(&mut form, &frame),
            Ok(Message::Binary(_)) => Err(FrameError::BinaryFrame),
            Ok(Message::Close(_)) => break,
            Ok(_) => continue,
            Err(err) => {
                debug!(session_id, error = %err, "form socket receive failed");
                break;
            }
        };

        let sent = match outcome {
            Ok(()) => send_json(&mut socket, &form_view(&form)).await,
            Err(err) => {
                warn!(session_id, error = %err, "ignoring form frame");
                let response = FrameErrorResponse {
                    error: err.to_string(),
                };
                send_json(&mut socket, &response).await
            }
        };
        if sent.is_err() {
            break;
        }
    }

    info!(session_id, "form session closed");
}

fn apply_frame(form: &mut CalculatorForm, frame: &str) -> Result<(), FrameError> {
    let update = parse_update(frame)?;
    form.set(update.field, update.value);
    Ok(())
}

async fn send_json<T: Serialize>(socket: &mut WebSocket, payload: &T) -> Result<(), ()> {
    let text = serde_json::to_string(payload).map_err(|_| ())?;
    socket.send(Message::Text(text)).await.map_err(|_| ())
}
