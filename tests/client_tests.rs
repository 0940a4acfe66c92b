//! Transport behavior against a mock backend: URL resolution, headers,
//! and the error envelope.

use gemdeck::api::document::DocumentAnalyzeRequest;
use gemdeck::api::text::TextGenerateRequest;
use gemdeck::client::{ApiClient, ClientError, NO_RESPONSE_MESSAGE};
use gemdeck::FilePart;
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

fn text_request(prompt: &str) -> TextGenerateRequest {
    TextGenerateRequest::new(prompt)
}

#[tokio::test]
async fn test_json_post_hits_suffixed_path_with_json_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/text/generate"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "text": "こんにちは",
            "model": "gemini-3-pro-preview"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // The server URI carries no /api suffix; the client appends it once.
    let client = ApiClient::new(server.uri()).unwrap();
    let response = client.generate_text(&text_request("挨拶して")).await.unwrap();

    assert_eq!(response.text, "こんにちは");
}

#[tokio::test]
async fn test_already_suffixed_base_url_is_not_doubled() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/text/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "text": "ok",
            "model": "m"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(format!("{}/api", server.uri())).unwrap();
    client.generate_text(&text_request("hi")).await.unwrap();
}

#[tokio::test]
async fn test_server_detail_is_shown_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/text/generate"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "detail": "モデルがサポートされていません",
            "message": "bad request"
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let error = client.generate_text(&text_request("hi")).await.unwrap_err();

    assert!(matches!(error, ClientError::Server { .. }));
    assert_eq!(error.user_message(), "モデルがサポートされていません");
}

#[tokio::test]
async fn test_server_message_used_when_detail_absent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/text/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "message": "internal failure"
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let error = client.generate_text(&text_request("hi")).await.unwrap_err();

    assert_eq!(error.user_message(), "internal failure");
}

#[tokio::test]
async fn test_status_text_used_when_envelope_missing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/text/generate"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let error = client.generate_text(&text_request("hi")).await.unwrap_err();

    assert_eq!(error.user_message(), "サーバーエラー: 503 Service Unavailable");
}

#[tokio::test]
async fn test_unreachable_backend_maps_to_connectivity_message() {
    // Start a server only to learn a free local port, then shut it down.
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = ApiClient::new(uri).unwrap();
    let error = client.generate_text(&text_request("hi")).await.unwrap_err();

    assert!(matches!(error, ClientError::Connection(_)));
    assert_eq!(error.user_message(), NO_RESPONSE_MESSAGE);
}

/// Matches requests whose content type is multipart with a boundary, i.e.
/// where reqwest replaced the default JSON content type.
struct MultipartContentType;

impl Match for MultipartContentType {
    fn matches(&self, request: &Request) -> bool {
        request
            .headers
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data; boundary="))
    }
}

#[tokio::test]
async fn test_multipart_upload_overrides_content_type_and_carries_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/document/analyze"))
        .and(MultipartContentType)
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("name=\"prompt\""))
        .and(body_string_contains("要点を挙げてください"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "analysis": "要約です",
            "model": "gemini-3-pro-preview",
            "page_count": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let request = DocumentAnalyzeRequest {
        file: FilePart::new("report.pdf", b"%PDF-1.4".to_vec()),
        prompt: "要点を挙げてください".to_string(),
        model: None,
    };
    let response = client.analyze_document(request).await.unwrap();

    assert_eq!(response.analysis, "要約です");
    assert_eq!(response.page_count, Some(3));
}

#[tokio::test]
async fn test_chat_route_sends_history_and_reads_message() {
    use gemdeck::api::text::{ChatMessage, ChatRequest, ChatRole};

    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/text/chat"))
        .and(body_string_contains("\"role\":\"assistant\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "続きです",
            "model": "gemini-3-pro-preview"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let request = ChatRequest {
        messages: vec![
            ChatMessage {
                role: ChatRole::User,
                content: "物語を始めて".to_string(),
            },
            ChatMessage {
                role: ChatRole::Assistant,
                content: "むかしむかし".to_string(),
            },
            ChatMessage {
                role: ChatRole::User,
                content: "続けて".to_string(),
            },
        ],
        model: None,
        temperature: Some(0.7),
    };
    let response = client.chat_text(&request).await.unwrap();

    assert_eq!(response.message, "続きです");
}

#[tokio::test]
async fn test_batch_embeddings_preserve_input_order() {
    use gemdeck::api::embedding::BatchEmbeddingRequest;

    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/embedding/batch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "embeddings": [[0.5, 0.6], [0.7, 0.8]],
            "model": "text-embedding-004",
            "dimensions": 2
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let request = BatchEmbeddingRequest {
        texts: vec!["alpha".to_string(), "beta".to_string()],
        model: None,
    };
    let response = client.generate_batch_embeddings(&request).await.unwrap();

    assert_eq!(response.embeddings, vec![vec![0.5, 0.6], vec![0.7, 0.8]]);
    assert_eq!(response.dimensions, 2);
}
