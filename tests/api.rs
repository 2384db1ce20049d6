use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use directors_cut_api::{
    app::{env::Envy, router},
    genai::{
        errors::GenerationError,
        generator::{GenerationRequest, TextGenerator},
    },
    AppState,
};
use serde_json::{json, Value};
use tower::ServiceExt;

struct StubGenerator {
    reply: Option<String>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl StubGenerator {
    fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    fn name(&self) -> &str {
        "stub"
    }

    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        self.requests.lock().unwrap().push(request);

        match &self.reply {
            Some(reply) => Ok(reply.to_string()),
            None => Err(GenerationError::Status {
                code: 503,
                body: "overloaded".to_string(),
            }),
        }
    }
}

fn app(generator: Arc<StubGenerator>) -> Router {
    let envy = Envy {
        app_env: Some("test".to_string()),
        port: None,
        google_api_key: "test_key".to_string(),
        gemini_model: None,
        gemini_api_url: None,
        gemini_timeout_secs: None,
        rate_limit_per_second: Some(100),
    };

    router::create_router(AppState {
        envy: Arc::new(envy),
        generator,
    })
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    post_raw(uri, &body.to_string())
}

// `json!` does not keep key order, so bodies whose field order matters are
// sent verbatim.
fn post_raw(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    let body = match bytes.is_empty() {
        true => Value::Null,
        false => serde_json::from_slice(&bytes).unwrap(),
    };

    (status, body)
}

#[tokio::test]
async fn root_reports_online() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, body) = send(app(StubGenerator::replying("")), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "online");
    assert_eq!(body["generator"], "stub");
}

#[tokio::test]
async fn compose_prompt_is_deterministic() {
    let generator = StubGenerator::replying("unused");
    let body = json!({
        "targetModel": "Midjourney",
        "inputs": {
            "prompt": "a fox in snow",
            "aspectRatio": "16:9",
            "version": "6",
            "chaos": 25,
            "stylize": 100,
            "video": true
        }
    });

    let (status, response) = send(app(generator.clone()), post_json("/api/compose-prompt", body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        response["finalPrompt"],
        "a fox in snow --ar 16:9 --v 6 --c 25 --video"
    );
    assert!(generator.requests().is_empty());
}

#[tokio::test]
async fn compose_prompt_falls_back_for_unknown_target() {
    let body = r#"{
        "targetModel": "Sora",
        "inputs": { "character": "a knight", "aspect": "16:9", "upscale": true }
    }"#;

    let (status, response) = send(
        app(StubGenerator::replying("unused")),
        post_raw("/api/compose-prompt", body),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["finalPrompt"], "a knight, 16:9");
}

#[tokio::test]
async fn compose_prompt_requires_inputs() {
    let (status, response) = send(
        app(StubGenerator::replying("unused")),
        post_json("/api/compose-prompt", json!({ "targetModel": "Veo" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response["message"],
        "Invalid payload provided. Missing inputs."
    );
}

#[tokio::test]
async fn generate_prompt_relays_model_text() {
    let generator = StubGenerator::replying("A lone knight guards a crumbling castle --ar 16:9");
    let body = json!({
        "targetModel": "Veo 3+ Studio",
        "inputs": {
            "character": "a knight",
            "scene": "a castle",
            "aspect": "16:9",
            "duration": 8
        }
    });

    let (status, response) = send(app(generator.clone()), post_json("/api/generate-prompt", body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        response["finalPrompt"],
        "A lone knight guards a crumbling castle --ar 16:9"
    );

    let requests = generator.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].system_instruction.contains("Veo"));
    assert!(requests[0].user_text.contains("- Character & Action: a knight"));
    assert!(requests[0]
        .user_text
        .contains("Draft prompt: a knight, a castle --ar 16:9 --duration 8s"));
    assert!(!requests[0].expects_json);
}

#[tokio::test]
async fn generate_prompt_uses_generic_instruction_for_unknown_target() {
    let generator = StubGenerator::replying("a castle at dusk");
    let body = json!({ "targetModel": "Sora", "inputs": { "scene": "a castle" } });

    let (status, _) = send(app(generator.clone()), post_json("/api/generate-prompt", body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        generator.requests()[0].system_instruction,
        "Combine the user's inputs into a descriptive prompt."
    );
}

#[tokio::test]
async fn generate_prompt_surfaces_model_failure() {
    let body = json!({ "targetModel": "Luma", "inputs": { "scene": "a castle" } });

    let (status, response) = send(
        app(StubGenerator::failing()),
        post_json("/api/generate-prompt", body),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response["message"], "Failed to generate final prompt.");
}

#[tokio::test]
async fn generate_variants_returns_three() {
    let generator = StubGenerator::replying(
        "```json\n[\"A lone figure at sunset\", \"A fisherman mending nets\", \"A child building a sandcastle\"]\n```",
    );
    let body = json!({ "inputText": "a man on a beach", "fieldType": "character" });

    let (status, response) = send(app(generator.clone()), post_json("/api/generate-variants", body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        response["variants"],
        json!([
            "A lone figure at sunset",
            "A fisherman mending nets",
            "A child building a sandcastle"
        ])
    );

    let requests = generator.requests();
    assert_eq!(requests[0].user_text, "a man on a beach");
    assert!(requests[0].expects_json);
    assert!(requests[0].system_instruction.contains("character description"));
}

#[tokio::test]
async fn generate_variants_requires_input_text() {
    let generator = StubGenerator::replying("[]");

    let (status, response) = send(
        app(generator.clone()),
        post_json("/api/generate-variants", json!({ "inputText": "  " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["message"].as_str().unwrap().contains("inputText"));
    assert!(generator.requests().is_empty());
}

#[tokio::test]
async fn generate_variants_rejects_unreadable_answer() {
    let (status, response) = send(
        app(StubGenerator::replying("Sorry, I can't do that.")),
        post_json("/api/generate-variants", json!({ "text": "a man on a beach" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response["message"], "Failed to generate variants.");
}

#[tokio::test]
async fn api_routes_only_accept_post() {
    for uri in [
        "/api/compose-prompt",
        "/api/generate-prompt",
        "/api/generate-variants",
    ] {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (status, response) = send(app(StubGenerator::replying("")), request).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{uri}");
        assert_eq!(response["message"], "Only POST requests allowed");
    }
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let (status, response) = send(
        app(StubGenerator::replying("")),
        post_raw("/api/generate-variants", "{ not json"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["message"].is_string());
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let request = Request::builder()
        .uri("/api/nothing-here")
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(app(StubGenerator::replying("")), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
