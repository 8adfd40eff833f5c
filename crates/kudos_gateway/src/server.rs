use crate::media_store::MediaStore;
use crate::types::{
    ComplimentRequest, ComplimentResponse, ErrorResponse, HealthResponse, MediaItem,
    MediaListResponse,
};
use anyhow::{Context, Result};
use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use kudos_core::config::ServerConfig;
use kudos_core::MediaAnalysis;
use kudos_expression::{ComplimentSelector, Mode};
use kudos_reasoning::StoryAnalyzer;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;

/// Shared state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<StoryAnalyzer>,
    pub selector: Arc<ComplimentSelector>,
    pub media: Arc<MediaStore>,
}

/// Build the API router.
///
/// - `POST /api/compliment` analyse a story (and optional media), return a compliment
/// - `GET /api/media/:user_id` recent uploads for a user
/// - `GET /api/health` liveness plus media store size
pub fn router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/api/compliment", post(handle_compliment))
        .route("/api/media/:user_id", get(list_media))
        .route("/api/health", get(health))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

const MEDIA_SWEEP_PERIOD: Duration = Duration::from_secs(10 * 60);

/// The compliment HTTP server.
pub struct GatewayServer {
    state: AppState,
    host: String,
    port: u16,
    max_body_bytes: usize,
}

impl GatewayServer {
    pub fn new(state: AppState, config: &ServerConfig) -> Self {
        Self {
            state,
            host: config.host.clone(),
            port: config.port,
            max_body_bytes: config.max_body_bytes,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Bind and serve until the process is stopped.
    pub async fn run(self) -> Result<()> {
        let addr = self.addr();
        MediaStore::spawn_sweeper(self.state.media.clone(), MEDIA_SWEEP_PERIOD);
        let app = router(self.state, self.max_body_bytes);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        tracing::info!("Story compliment server listening on {}", addr);
        axum::serve(listener, app)
            .await
            .context("Server error")?;
        Ok(())
    }
}

/// JSON error body with a status code.
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn rejected(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }

    fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

// ============================================================================
// Route handlers
// ============================================================================

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "Story Compliment AI is running!",
        media_storage_size: state.media.user_count().await,
    })
}

async fn list_media(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<MediaListResponse> {
    let entries = state
        .media
        .get_recent(&user_id, state.media.retention())
        .await;
    let media: Vec<MediaItem> = entries
        .into_iter()
        .map(|e| MediaItem {
            mime_type: e.mime_type,
            timestamp: e.timestamp,
        })
        .collect();
    Json(MediaListResponse {
        user_id,
        media_count: media.len(),
        media,
    })
}

/// POST /api/compliment
///
/// Media that fails to decode is dropped and the request continues text-only.
async fn handle_compliment(
    State(state): State<AppState>,
    payload: Result<Json<ComplimentRequest>, JsonRejection>,
) -> Result<Json<ComplimentResponse>, ApiError> {
    let Json(req) = payload.map_err(ApiError::rejected)?;
    let story = req.story();
    let upload = req.media.as_ref().and_then(|m| {
        match STANDARD.decode(m.payload()) {
            Ok(bytes) if !bytes.is_empty() => Some((m, bytes)),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("Ignoring undecodable {} upload: {}", m.mime_type, e);
                None
            }
        }
    });

    if story.is_empty() && upload.is_none() {
        return Err(ApiError::bad_request("Story text or media is required"));
    }

    let mut text = story.to_string();
    let mut media_analysis: Option<MediaAnalysis> = None;
    if let Some((m, bytes)) = upload {
        state.media.put(req.user_id(), bytes, &m.mime_type).await;
        let analysis = state.analyzer.analyze_media(m.payload(), &m.mime_type).await;
        match serde_json::to_string(&analysis) {
            Ok(json) => {
                text.push_str("\n[Media Analysis: ");
                text.push_str(&json);
                text.push(']');
            }
            Err(e) => tracing::warn!("Could not serialise media analysis: {}", e),
        }
        media_analysis = Some(analysis);
    }

    let outcome = state.analyzer.analyze_story(text.trim()).await;
    let mode = Mode::parse(req.mode.as_deref().unwrap_or_default());
    let compliment = state
        .selector
        .select(
            &outcome.record,
            mode,
            media_analysis.as_ref(),
            req.language(),
            &mut rand::thread_rng(),
        )
        .map_err(|e| {
            tracing::error!("Compliment selection failed: {}", e);
            ApiError::internal(e.to_string())
        })?;

    tracing::info!(
        "Compliment for {} ({}, {}, {:?})",
        req.user_id(),
        compliment.category,
        compliment.language,
        outcome.source
    );

    Ok(Json(ComplimentResponse {
        analysis: outcome.record,
        compliment: compliment.text,
        mode: compliment.category,
        language: compliment.language,
        source: outcome.source,
        media_analysis,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use kudos_expression::ComplimentBook;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn state() -> AppState {
        AppState {
            analyzer: Arc::new(StoryAnalyzer::offline()),
            selector: Arc::new(ComplimentSelector::new(
                ComplimentBook::builtin().unwrap(),
                None,
            )),
            media: Arc::new(MediaStore::new(Duration::from_secs(86_400))),
        }
    }

    fn app(state: AppState) -> Router {
        router(state, 1024 * 1024)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn read_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = app(state()).oneshot(get("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["status"], "OK");
        assert_eq!(body["mediaStorageSize"], 0);
    }

    #[tokio::test]
    async fn test_compliment_from_story() {
        let response = app(state())
            .oneshot(post_json(
                "/api/compliment",
                json!({"story": "Today I finished my first marathon! It was challenging but I never gave up."}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        assert_eq!(body["source"], "heuristic");
        assert_eq!(body["language"], "english");
        assert!(!body["compliment"].as_str().unwrap().is_empty());
        let intensity = body["analysis"]["emotionIntensity"].as_u64().unwrap();
        assert!((1..=10).contains(&intensity));
        assert!(body.get("mediaAnalysis").is_none());
    }

    #[tokio::test]
    async fn test_explicit_mode() {
        let response = app(state())
            .oneshot(post_json(
                "/api/compliment",
                json!({"story": "I am so happy today!", "mode": "soul"}),
            ))
            .await
            .unwrap();
        let body = read_json(response).await;
        assert_eq!(body["mode"], "deepSoul");
    }

    #[tokio::test]
    async fn test_missing_story_and_media_is_rejected() {
        let response = app(state())
            .oneshot(post_json("/api/compliment", json!({"story": "   "})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["error"], "Story text or media is required");
    }

    #[tokio::test]
    async fn test_malformed_body_gets_json_error() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/compliment")
            .header("content-type", "application/json")
            .body(Body::from("{\"story\": "))
            .unwrap();
        let response = app(state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert!(!body["error"].as_str().unwrap().is_empty());

        let request = Request::builder()
            .method("POST")
            .uri("/api/compliment")
            .body(Body::from(json!({"story": "hi"}).to_string()))
            .unwrap();
        let response = app(state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(read_json(response).await["error"].is_string());

        let response = app(state())
            .oneshot(post_json("/api/compliment", json!({"story": 42})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(read_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_undecodable_media_is_ignored() {
        let state = state();
        let bad = json!({"data": "not base64!!", "type": "image/png"});

        // Without a story the request has nothing left to work with.
        let response = app(state.clone())
            .oneshot(post_json("/api/compliment", json!({"media": bad})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app(state.clone())
            .oneshot(post_json(
                "/api/compliment",
                json!({"story": "Had a calm day.", "media": bad, "userId": "u1"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert!(body.get("mediaAnalysis").is_none());
        assert_eq!(state.media.user_count().await, 0);
    }

    #[tokio::test]
    async fn test_media_upload_is_stored_and_listed() {
        let state = state();
        let data = format!("data:image/png;base64,{}", STANDARD.encode([137u8, 80, 78, 71]));
        let response = app(state.clone())
            .oneshot(post_json(
                "/api/compliment",
                json!({"media": {"data": data, "type": "image/png"}, "userId": "alice"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["mediaAnalysis"]["mediaType"], "image/png");

        let response = app(state.clone())
            .oneshot(get("/api/media/alice"))
            .await
            .unwrap();
        let body = read_json(response).await;
        assert_eq!(body["userId"], "alice");
        assert_eq!(body["mediaCount"], 1);
        assert_eq!(body["media"][0]["type"], "image/png");
        assert!(body["media"][0]["timestamp"].as_i64().unwrap() > 0);

        let body = read_json(app(state).oneshot(get("/api/health")).await.unwrap()).await;
        assert_eq!(body["mediaStorageSize"], 1);
    }

    #[tokio::test]
    async fn test_media_for_unknown_user_is_empty() {
        let response = app(state()).oneshot(get("/api/media/nobody")).await.unwrap();
        let body = read_json(response).await;
        assert_eq!(body["mediaCount"], 0);
        assert_eq!(body["media"], json!([]));
    }

    #[test]
    fn test_gateway_server_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            ..Default::default()
        };
        let server = GatewayServer::new(state(), &config);
        assert_eq!(server.addr(), "127.0.0.1:0");
    }
}
