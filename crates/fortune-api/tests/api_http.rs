// crates/fortune-api/tests/api_http.rs
//
// End-to-end client behavior against a throwaway in-process backend.
// Each test stands up an axum router on an ephemeral port and points a
// real ApiClient at it, so status handling, the JSON guard and the
// service-level error mapping are exercised over actual HTTP.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use fortune_api::{
    broker_holdings, generate_file_system, generate_strategy, portfolio_holdings,
    portfolio_signals, run_backtest, ApiClient, ApiError,
};
use fortune_core::{NodeKind, SignalKind, TradeDirection};

/// Bind the router on an ephemeral port and return its base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Gemini stub that records every prompt it is asked and answers with a
/// fixed reply string.
#[derive(Clone)]
struct GeminiStub {
    reply: String,
    prompts: Arc<Mutex<Vec<String>>>,
}

async fn gemini_handler(State(stub): State<GeminiStub>, Json(body): Json<Value>) -> Json<Value> {
    let prompt = body
        .get("prompt")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    stub.prompts.lock().unwrap().push(prompt);
    Json(json!({ "response": stub.reply }))
}

fn gemini_router(reply: &str) -> (Router, Arc<Mutex<Vec<String>>>) {
    let stub = GeminiStub {
        reply: reply.to_string(),
        prompts: Arc::default(),
    };
    let prompts = stub.prompts.clone();
    let app = Router::new()
        .route("/api/gemini", post(gemini_handler))
        .with_state(stub);
    (app, prompts)
}

#[tokio::test]
async fn holdings_decode_from_backend_payload() {
    let app = Router::new().route(
        "/api/portfolio/holdings",
        get(|| async {
            Json(json!([
                {
                    "id": "h1", "name": "Reliance Industries", "ticker": "RELIANCE",
                    "quantity": 10, "avgPrice": 2800.0, "currentPrice": 2950.5,
                    "value": 29505.0, "pnl": 1505.0
                },
                {
                    "id": "h2", "name": "Tata Consultancy", "ticker": "TCS",
                    "quantity": 5, "avgPrice": 4100.0, "currentPrice": 3990.0,
                    "value": 19950.0, "pnl": -550.0
                }
            ]))
        }),
    );
    let base = serve(app).await;

    let holdings = portfolio_holdings(&ApiClient::new(&base)).await.unwrap();

    assert_eq!(holdings.len(), 2);
    assert_eq!(holdings[0].ticker, "RELIANCE");
    assert_eq!(holdings[0].avg_price, 2800.0);
    assert_eq!(holdings[1].pnl, -550.0);
}

#[tokio::test]
async fn signals_decode_from_backend_payload() {
    let app = Router::new().route(
        "/api/portfolio/signals",
        get(|| async {
            Json(json!([
                {
                    "id": "s7", "ticker": "RELIANCE", "type": "BUY", "price": 2951.0,
                    "timestamp": "2024-03-04T10:15:00Z", "strategy": "RSI + Bollinger Bands"
                }
            ]))
        }),
    );
    let base = serve(app).await;

    let signals = portfolio_signals(&ApiClient::new(&base)).await.unwrap();

    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].kind, SignalKind::Buy);
    assert_eq!(signals[0].strategy, "RSI + Bollinger Bands");
}

#[tokio::test]
async fn backtest_posts_symbol_and_strategy() {
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<Value>>>);

    async fn backtest_handler(
        State(captured): State<Captured>,
        Json(body): Json<Value>,
    ) -> Json<Value> {
        captured.0.lock().unwrap().push(body);
        Json(json!({
            "trades": [
                {"id": 1, "date": "2024-03-04", "type": "long",
                 "entry": 101.5, "exit": 104.0, "pnl": 2.5}
            ],
            "metrics": {
                "totalPnl": 2.5, "winRate": 100.0, "maxDrawdown": 1.2,
                "sharpeRatio": 1.9, "cagr": 12.0,
                "equityCurve": [{"trade": 1, "equity": 102.5}]
            }
        }))
    }

    let captured = Captured::default();
    let bodies = captured.0.clone();
    let app = Router::new()
        .route("/api/backtest", post(backtest_handler))
        .with_state(captured);
    let base = serve(app).await;

    let report = run_backtest(&ApiClient::new(&base), "RELIANCE", "rsi_bb")
        .await
        .unwrap();

    assert_eq!(report.trades.len(), 1);
    assert_eq!(report.trades[0].direction, TradeDirection::Long);
    assert_eq!(report.metrics.total_pnl, 2.5);
    assert_eq!(report.metrics.equity_curve[0].equity, 102.5);

    let bodies = bodies.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0], json!({"symbol": "RELIANCE", "strategy": "rsi_bb"}));
}

#[tokio::test]
async fn backend_detail_wins_over_status_reason() {
    let app = Router::new().route(
        "/api/backtest",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"detail": "symbol not found"})),
            )
        }),
    );
    let base = serve(app).await;

    let err = run_backtest(&ApiClient::new(&base), "NOPE", "rsi_bb")
        .await
        .unwrap_err();

    match &err {
        ApiError::Network { status, detail, .. } => {
            assert_eq!(*status, 500);
            assert_eq!(detail.as_deref(), Some("symbol not found"));
        }
        other => panic!("expected Network error, got {other:?}"),
    }
    assert_eq!(err.user_message(), "symbol not found");
}

#[tokio::test]
async fn error_status_without_detail_reports_reason() {
    let app = Router::new().route(
        "/api/portfolio/holdings",
        get(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
    );
    let base = serve(app).await;

    let err = portfolio_holdings(&ApiClient::new(&base)).await.unwrap_err();

    assert_eq!(
        err.user_message(),
        "network response was not ok: Bad Gateway"
    );
}

#[tokio::test]
async fn ok_status_with_non_json_body_is_a_parse_failure() {
    let app = Router::new().route(
        "/api/portfolio/signals",
        get(|| async { "<html>login required</html>" }),
    );
    let base = serve(app).await;

    let err = portfolio_signals(&ApiClient::new(&base)).await.unwrap_err();

    match &err {
        ApiError::Parse(message) => assert!(!message.is_empty()),
        other => panic!("expected Parse error, got {other:?}"),
    }
    assert!(err.user_message().starts_with("failed to parse JSON:"));
}

#[tokio::test]
async fn scaffold_sends_one_templated_prompt() {
    let (app, prompts) = gemini_router(
        r#"{"name": "project", "type": "folder", "children": []}"#,
    );
    let base = serve(app).await;

    let node = generate_file_system(&ApiClient::new(&base), "an empty project folder")
        .await
        .unwrap();
    assert_eq!(node.name, "project");
    assert_eq!(node.kind, NodeKind::Folder);

    let prompts = prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].starts_with("You are an expert file system generator."));
    assert!(prompts[0].contains("The user's request is: \"an empty project folder\""));
}

#[tokio::test]
async fn scaffold_accepts_fenced_reply() {
    let reply = "```json\n{\"name\": \"app\", \"type\": \"folder\", \"children\": [\n  {\"name\": \"main.rs\", \"type\": \"file\", \"content\": \"\"}\n]}\n```";
    let (app, _prompts) = gemini_router(reply);
    let base = serve(app).await;

    let node = generate_file_system(&ApiClient::new(&base), "a rust app")
        .await
        .unwrap();

    assert_eq!(node.name, "app");
    assert_eq!(node.children().len(), 1);
    assert_eq!(node.children()[0].name, "main.rs");
}

#[tokio::test]
async fn scaffold_rejects_prose_reply() {
    let (app, _prompts) = gemini_router("Sorry, I cannot help with that request.");
    let base = serve(app).await;

    let err = generate_file_system(&ApiClient::new(&base), "anything")
        .await
        .unwrap_err();

    assert_eq!(
        err.user_message(),
        "The AI returned an invalid structure. Please try rephrasing your prompt."
    );
}

#[tokio::test]
async fn scaffold_rejects_file_rooted_tree() {
    let (app, _prompts) =
        gemini_router(r#"{"name": "notes.txt", "type": "file", "content": "hi"}"#);
    let base = serve(app).await;

    let err = generate_file_system(&ApiClient::new(&base), "just one file")
        .await
        .unwrap_err();

    assert_eq!(
        err.user_message(),
        "The AI returned an invalid structure. Please try rephrasing your prompt."
    );
}

#[tokio::test]
async fn scaffold_maps_backend_failure_to_connection_message() {
    let app = Router::new().route(
        "/api/gemini",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    );
    let base = serve(app).await;

    let err = generate_file_system(&ApiClient::new(&base), "anything")
        .await
        .unwrap_err();

    assert_eq!(
        err.user_message(),
        "Failed to generate file system. Please check your backend connection."
    );
}

#[tokio::test]
async fn strategy_returns_reply_verbatim() {
    let reply = "Buy when RSI < 30 and price touches the lower band.";
    let (app, prompts) = gemini_router(reply);
    let base = serve(app).await;

    let text = generate_strategy(&ApiClient::new(&base), "RSI + Bollinger Bands")
        .await
        .unwrap();

    assert_eq!(text, reply);
    let prompts = prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].starts_with("You are an expert in quantitative trading strategies."));
    assert!(prompts[0].ends_with("The user's prompt is: \"RSI + Bollinger Bands\""));
}

#[tokio::test]
async fn strategy_maps_any_failure_to_connection_message() {
    let app = Router::new().route(
        "/api/gemini",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base = serve(app).await;

    let err = generate_strategy(&ApiClient::new(&base), "anything")
        .await
        .unwrap_err();

    assert_eq!(
        err.user_message(),
        "Failed to generate strategy. Please check your backend connection."
    );
}

#[tokio::test]
async fn broker_holdings_uses_broker_route() {
    let app = Router::new().route(
        "/api/broker/holdings",
        get(|| async {
            Json(json!([
                {
                    "id": "h1", "name": "Reliance Industries", "ticker": "RELIANCE",
                    "quantity": 12, "avgPrice": 2800.0, "currentPrice": 2950.5,
                    "value": 35406.0, "pnl": 1806.0
                }
            ]))
        }),
    );
    let base = serve(app).await;

    let holdings = broker_holdings(&ApiClient::new(&base)).await.unwrap();

    assert_eq!(holdings.len(), 1);
    assert_eq!(holdings[0].quantity, 12.0);
}
