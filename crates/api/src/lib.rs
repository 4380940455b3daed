pub mod routes;
pub mod state;
pub mod ws;

use axum::Router;

pub fn module_ready() -> bool {
    true
}

pub fn app() -> Router {
    routes::router(state::AppState::new())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use futures_util::{SinkExt, Stream, StreamExt};
    use serde_json::{json, Value};
    use tokio::net::TcpListener;
    use tokio_tungstenite::{connect_async, tungstenite::Message};
    use tower::ServiceExt;

    use crate::app;

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_calculate(body: Value) -> Request<Body> {
        Request::post("/api/calculate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn index_serves_prerendered_form() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Trading Calculator"));
        assert!(html.contains("name=\"take_profit_percent\""));
    }

    #[tokio::test]
    async fn static_assets_have_content_types() {
        let css = app()
            .oneshot(Request::get("/static/styles.css").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let js = app()
            .oneshot(Request::get("/static/app.js").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(css.headers()[header::CONTENT_TYPE], "text/css; charset=utf-8");
        assert_eq!(
            js.headers()[header::CONTENT_TYPE],
            "application/javascript; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn leverages_lists_fixed_ladder() {
        let response = app()
            .oneshot(Request::get("/api/leverages").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(
            json_body(response).await,
            json!({ "leverages": [2, 3, 5, 10, 15, 20, 30, 50, 100, 125] })
        );
    }

    #[tokio::test]
    async fn calculate_returns_formatted_table() {
        let response = app()
            .oneshot(post_calculate(json!({
                "initial_capital": 10000,
                "risk_per_trade": "1",
                "number_of_trades": 5,
                "stop_loss_percent": 2,
                "take_profit_percent": 4
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["loss_per_trade"], "20.00");
        assert_eq!(body["position_size"], "1000.00");
        assert_eq!(body["rows"].as_array().unwrap().len(), 10);
        assert_eq!(body["rows"][3]["margin"], "$100.00");
        assert_eq!(body["rows"][3]["profit"], "$40.00");
        assert_eq!(body["rows"][9]["tier"], "high");
        assert_eq!(body["empty_message"], Value::Null);
    }

    #[tokio::test]
    async fn calculate_treats_missing_and_garbage_fields_as_zero() {
        let response = app()
            .oneshot(post_calculate(json!({ "initial_capital": "abc" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["loss_per_trade"], "0.00");
        assert_eq!(body["rows"], json!([]));
        assert_eq!(body["empty_message"], "Enter values to see results.");
    }

    #[tokio::test]
    async fn calculate_rejects_non_object_body() {
        let response = app()
            .oneshot(post_calculate(json!("10000")))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn form_socket_recomputes_after_each_update() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app()).await.unwrap();
        });

        let (mut socket, _) = connect_async(format!("ws://{addr}/ws/form")).await.unwrap();

        let first = next_json(&mut socket).await;
        assert_eq!(first["position_size"], "0.00");

        let edits = [
            ("initial_capital", json!("10000")),
            ("risk_per_trade", json!(1)),
            ("number_of_trades", json!(5)),
            ("stop_loss_percent", json!(2)),
            ("take_profit_percent", json!(4)),
        ];
        let mut last = Value::Null;
        for (field, value) in edits {
            let frame = json!({ "field": field, "value": value }).to_string();
            socket.send(Message::Text(frame)).await.unwrap();
            last = next_json(&mut socket).await;
        }
        assert_eq!(last["rows"].as_array().unwrap().len(), 10);
        assert_eq!(last["rows"][0]["margin"], "$500.00");

        socket.send(Message::Text("garbage".into())).await.unwrap();
        let error = next_json(&mut socket).await;
        assert!(error["error"].as_str().unwrap().contains("not a valid field update"));

        // The session survives a bad frame.
        let frame = json!({ "field": "take_profit_percent", "value": 0 }).to_string();
        socket.send(Message::Text(frame)).await.unwrap();
        let cleared = next_json(&mut socket).await;
        assert_eq!(cleared["rows"], json!([]));
    }

    async fn next_json<S>(socket: &mut S) -> Value
    where
        S: Stream<Item = Result<Message, tokio_tungstenite::tungstenite::Error>> + Unpin,
    {
        loop {
            match socket.next().await {
                Some(Ok(Message::Text(text))) => return serde_json::from_str(&text).unwrap(),
                Some(Ok(_)) => continue,
                other => panic!("socket ended unexpectedly: {other:?}"),
            }
        }
    }
}
