use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use medgloss_formatter::{ErrorKind, FormatError, Formatter, OpenAiFormatter, RemoteFormatter};
use serde_json::{Value, json};
use tokio::net::TcpListener;

async fn spawn_upstream(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

#[derive(Clone, Default)]
struct Seen {
    auth: Arc<Mutex<Option<String>>>,
    body: Arc<Mutex<Option<Value>>>,
}

fn openai_upstream(seen: Seen, status: StatusCode, reply: Value) -> Router {
    Router::new()
        .route(
            "/v1/responses",
            post(
                move |State(seen): State<Seen>, headers: HeaderMap, Json(body): Json<Value>| {
                    let reply = reply.clone();
                    async move {
                        *seen.auth.lock().unwrap() = headers
                            .get("authorization")
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);
                        *seen.body.lock().unwrap() = Some(body);
                        (status, Json(reply))
                    }
                },
            ),
        )
        .with_state(seen)
}

fn formatter(base: &str, key: Option<&str>) -> OpenAiFormatter {
    OpenAiFormatter::new(
        key.map(str::to_string),
        format!("{base}/v1/responses"),
        "gpt-4.1-mini".to_string(),
    )
}

#[tokio::test]
async fn formats_term_from_model_output() {
    let seen = Seen::default();
    let reply = json!({
        "output": [{
            "type": "message",
            "content": [{
                "type": "output_text",
                "text": "Here you go: {\"term\":\"Osteomyelitis\",\"pronunciation_ar\":\"أوستيوميلايتس\",\"meaning_ar\":\"التهاب العظم\",\"definition_ar\":\"عدوى بكتيرية في العظم\"}"
            }]
        }]
    });
    let base = spawn_upstream(openai_upstream(seen.clone(), StatusCode::OK, reply)).await;

    let record = formatter(&base, Some("test-key"))
        .format("osteomyelitis")
        .await
        .unwrap();

    assert_eq!(record.term, "Osteomyelitis");
    assert_eq!(record.pronunciation, "أوستيوميلايتس");
    assert_eq!(record.meaning, "التهاب العظم");
    assert_eq!(record.definition, "عدوى بكتيرية في العظم");

    assert_eq!(seen.auth.lock().unwrap().as_deref(), Some("Bearer test-key"));
    let body = seen.body.lock().unwrap().clone().unwrap();
    assert_eq!(body["model"], "gpt-4.1-mini");
    assert!(body["input"].as_str().unwrap().ends_with("User term: osteomyelitis"));
}

#[tokio::test]
async fn upstream_error_body_is_passed_through() {
    let reply = json!({ "error": { "message": "Incorrect API key provided" } });
    let base = spawn_upstream(openai_upstream(
        Seen::default(),
        StatusCode::UNAUTHORIZED,
        reply,
    ))
    .await;

    let err = formatter(&base, Some("bad-key"))
        .format("Nephritis")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Upstream);
    assert!(err.to_string().contains("Incorrect API key provided"));
}

#[tokio::test]
async fn reply_without_json_is_a_parse_error() {
    let reply = json!({ "output_text": "Sorry, I can't format that." });
    let base = spawn_upstream(openai_upstream(Seen::default(), StatusCode::OK, reply)).await;

    let err = formatter(&base, Some("test-key"))
        .format("Nephritis")
        .await
        .unwrap_err();

    assert!(matches!(err, FormatError::NoJson));
}

#[tokio::test]
async fn missing_key_fails_before_any_request() {
    // Nothing listens here: a request would surface as a network error
    let err = formatter("http://127.0.0.1:9", None)
        .format("Nephritis")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert_eq!(err.to_string(), "Missing OPENAI_API_KEY");
}

#[tokio::test]
async fn empty_query_is_rejected() {
    let err = formatter("http://127.0.0.1:9", Some("test-key"))
        .format("")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[tokio::test]
async fn remote_formatter_reads_term_endpoint() {
    let router = Router::new().route(
        "/api/term",
        post(|Json(body): Json<Value>| async move {
            let query = body["query"].as_str().unwrap_or_default().to_string();
            Json(json!({
                "term": query,
                "pronunciation_ar": "أنيميا",
                "meaning_ar": "فقر الدم",
                "definition_ar": ""
            }))
        }),
    );
    let base = spawn_upstream(router).await;

    let record = RemoteFormatter::new(&format!("{base}/"))
        .format("Anemia")
        .await
        .unwrap();

    assert_eq!(record.term, "Anemia");
    assert_eq!(record.meaning, "فقر الدم");
    assert_eq!(record.definition, "");
}

#[tokio::test]
async fn remote_formatter_surfaces_endpoint_error() {
    let router = Router::new().route(
        "/api/term",
        post(|| async {
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": "Model did not return JSON" })),
            )
        }),
    );
    let base = spawn_upstream(router).await;

    let err = RemoteFormatter::new(&base)
        .format("Anemia")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Upstream);
    assert_eq!(err.to_string(), "Model did not return JSON");
}
