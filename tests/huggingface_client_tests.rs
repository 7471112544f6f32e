// ================================================================================================
// HOSTED INFERENCE CLIENT TEST SUITE
// ================================================================================================
//
// Points HuggingFaceClient at a local axum server that mimics the hosted
// inference API, then checks request shape, response decoding and the
// text generator's fallback chain on top of it.
//
// ================================================================================================

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::post,
};
use serde_json::{Value, json};

use common::spawn_router;
use course_ai_server::config::InferenceConfig;
use course_ai_server::error::Error;
use course_ai_server::generation::{COURSE_CREATION_CONTEXT, TextGenerator, generate_mock_content};
use course_ai_server::inference::{HuggingFaceClient, InferenceClient};

const QA_MODEL: &str = "deepset/roberta-base-squad2";
const EMBEDDING_MODEL: &str = "sentence-transformers/all-MiniLM-L6-v2";
const TOKEN: &str = "hf_test_token";

#[derive(Clone, Copy)]
enum Behaviour {
    Healthy,
    QaDown,
    AllDown,
}

#[derive(Clone)]
struct FakeApi {
    behaviour: Behaviour,
    calls: Arc<AtomicUsize>,
}

async fn fake_model(
    State(api): State<FakeApi>,
    Path((org, model)): Path<(String, String)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    api.calls.fetch_add(1, Ordering::SeqCst);

    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"));
    if !authorized {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "Invalid credentials"})));
    }

    let model = format!("{org}/{model}");
    let unavailable = (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({"error": format!("Model {model} is currently loading")})),
    );

    if model == QA_MODEL {
        if !matches!(api.behaviour, Behaviour::Healthy) {
            return unavailable;
        }
        assert_eq!(body["inputs"]["context"], COURSE_CREATION_CONTEXT);
        let question = body["inputs"]["question"].as_str().unwrap_or_default();
        return (
            StatusCode::OK,
            Json(json!({"answer": format!("answer to: {question}"), "score": 0.42, "start": 0, "end": 10})),
        );
    }

    if model == EMBEDDING_MODEL {
        if matches!(api.behaviour, Behaviour::AllDown) {
            return unavailable;
        }
        assert!(body["inputs"].is_string());
        return (StatusCode::OK, Json(json!([[0.25, 0.5, 0.75]])));
    }

    (StatusCode::NOT_FOUND, Json(json!({"error": "Model not found"})))
}

async fn spawn_fake_api(behaviour: Behaviour) -> (String, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route("/models/{org}/{model}", post(fake_model))
        .with_state(FakeApi {
            behaviour,
            calls: Arc::clone(&calls),
        });
    (spawn_router(router).await, calls)
}

fn client_for(base_url: &str, token: &str) -> HuggingFaceClient {
    let config = InferenceConfig {
        access_token: Some(token.to_string()),
        api_base_url: base_url.to_string(),
        qa_model: QA_MODEL.to_string(),
        embedding_model: EMBEDDING_MODEL.to_string(),
    };
    HuggingFaceClient::new(&config, token).unwrap()
}

#[tokio::test]
async fn test_question_answering_request_and_response() {
    let (base, calls) = spawn_fake_api(Behaviour::Healthy).await;
    let client = client_for(&base, TOKEN);

    let answer = client
        .question_answering("What is a course?", COURSE_CREATION_CONTEXT)
        .await
        .unwrap();

    assert_eq!(answer.answer, "answer to: What is a course?");
    assert!((answer.score - 0.42).abs() < f64::EPSILON);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_feature_extraction_reduces_nested_output() {
    let (base, _) = spawn_fake_api(Behaviour::Healthy).await;
    let client = client_for(&base, TOKEN);

    let embedding = client.feature_extraction("some prompt").await.unwrap();
    assert_eq!(embedding, vec![0.25, 0.5, 0.75]);
}

#[tokio::test]
async fn test_api_errors_carry_status_and_message() {
    let (base, _) = spawn_fake_api(Behaviour::QaDown).await;
    let client = client_for(&base, TOKEN);

    match client.question_answering("q", COURSE_CREATION_CONTEXT).await {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
            assert!(message.contains("currently loading"));
        }
        other => panic!("expected API error, got {other:?}"),
    }

    let unauthorized = client_for(&base, "wrong-token");
    match unauthorized.feature_extraction("q").await {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_api_is_a_transport_error() {
    // Bind then drop a listener so the port is known to be closed
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{addr}"), TOKEN);
    let result = client.question_answering("q", COURSE_CREATION_CONTEXT).await;
    assert!(matches!(result, Err(Error::Http(_))));
}

#[tokio::test]
async fn test_generator_uses_remote_answer() {
    let (base, _) = spawn_fake_api(Behaviour::Healthy).await;
    let generator = TextGenerator::new(Some(Arc::new(client_for(&base, TOKEN))));

    let text = generator.generate_text("What is a lesson?").await;
    assert_eq!(text, "answer to: What is a lesson?");
}

#[tokio::test]
async fn test_generator_falls_back_when_qa_is_down() {
    let (base, calls) = spawn_fake_api(Behaviour::QaDown).await;
    let generator = TextGenerator::new(Some(Arc::new(client_for(&base, TOKEN))));

    let prompt = "Write lesson content about Traits.";
    assert_eq!(generator.generate_text(prompt).await, generate_mock_content(prompt));
    // question answering, then feature extraction
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_generator_falls_back_when_everything_is_down() {
    let (base, calls) = spawn_fake_api(Behaviour::AllDown).await;
    let generator = TextGenerator::new(Some(Arc::new(client_for(&base, TOKEN))));

    let prompt = "Give me an outline for Compilers.";
    assert_eq!(generator.generate_text(prompt).await, generate_mock_content(prompt));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
