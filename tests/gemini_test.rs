//! Gemini summarizer against a mock `generateContent` endpoint.

use notekeeper::summarize::{GeminiSummarizer, SummarizerConfig};
use notekeeper::{NotesError, Summarizer};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

fn summarizer_for(server: &MockServer) -> GeminiSummarizer {
    GeminiSummarizer::new(SummarizerConfig {
        base_url: server.uri(),
        api_key: Some("test-key".to_string()),
        timeout_seconds: 5,
        ..Default::default()
    })
    .expect("Failed to create summarizer")
}

#[tokio::test]
async fn test_summary_is_returned() {
    let mock_server = MockServer::start().await;

    let response = json!({
        "candidates": [{
            "content": {
                "parts": [{"text": "The note lists groceries."}],
                "role": "model"
            },
            "finishReason": "STOP"
        }]
    });

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{
                "parts": [{
                    "text": "Summarize the following note in 2-3 sentences:\n\nmilk, eggs, bread"
                }]
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .expect(1)
        .mount(&mock_server)
        .await;

    let summary = summarizer_for(&mock_server)
        .summarize("milk, eggs, bread")
        .await
        .unwrap();

    assert_eq!(summary, "The note lists groceries.");
}

#[tokio::test]
async fn test_multiple_parts_are_joined() {
    let mock_server = MockServer::start().await;

    let response = json!({
        "candidates": [{
            "content": {"parts": [{"text": "First. "}, {"text": "Second."}]}
        }]
    });

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .mount(&mock_server)
        .await;

    let summary = summarizer_for(&mock_server).summarize("x").await.unwrap();
    assert_eq!(summary, "First. Second.");
}

#[tokio::test]
async fn test_api_error_becomes_provider_error() {
    let mock_server = MockServer::start().await;

    let error = json!({
        "error": {
            "code": 429,
            "message": "Resource has been exhausted",
            "status": "RESOURCE_EXHAUSTED"
        }
    });

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_json(&error))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = summarizer_for(&mock_server)
        .summarize("text")
        .await
        .unwrap_err();

    match err {
        NotesError::Provider(msg) => {
            assert!(msg.contains("429"), "unexpected message: {msg}");
            assert!(msg.contains("Resource has been exhausted"));
            assert!(msg.contains("RESOURCE_EXHAUSTED"));
        }
        other => panic!("expected provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_is_kept() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&mock_server)
        .await;

    let err = summarizer_for(&mock_server)
        .summarize("text")
        .await
        .unwrap_err();
    assert!(matches!(err, NotesError::Provider(ref m) if m.contains("bad gateway")));
}

#[tokio::test]
async fn test_blocked_prompt_is_provider_error() {
    let mock_server = MockServer::start().await;

    let response = json!({
        "promptFeedback": {"blockReason": "SAFETY"}
    });

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .mount(&mock_server)
        .await;

    let err = summarizer_for(&mock_server)
        .summarize("text")
        .await
        .unwrap_err();
    assert!(matches!(err, NotesError::Provider(ref m) if m.contains("SAFETY")));
}

#[tokio::test]
async fn test_empty_content_never_reaches_provider() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = summarizer_for(&mock_server).summarize("").await.unwrap_err();
    assert!(matches!(err, NotesError::Validation(_)));
}

#[tokio::test]
async fn test_slow_provider_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"candidates": []}))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let summarizer = GeminiSummarizer::new(SummarizerConfig {
        base_url: mock_server.uri(),
        api_key: Some("test-key".to_string()),
        timeout_seconds: 1,
        ..Default::default()
    })
    .unwrap();

    let err = summarizer.summarize("text").await.unwrap_err();
    assert!(matches!(err, NotesError::Provider(ref m) if m.contains("timed out")));
}
