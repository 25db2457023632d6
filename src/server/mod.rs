use crate::errors::AppResult;
use crate::models::{ErrorResponse, TranslateRequest, TranslateResponse};
use crate::provider::{self, ChatProvider};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

pub struct AppState {
    pub provider: Arc<dyn ChatProvider>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn router(provider: Arc<dyn ChatProvider>) -> Router {
    let state = Arc::new(AppState { provider });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/translate", post(translate))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn start_server(host: &str, port: u16, provider: Arc<dyn ChatProvider>) -> AppResult<()> {
    let app = router(provider);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "translate-llm"
    }))
}

/// `POST /api/translate`
///
/// An unreadable body fails with 500 before the provider is contacted. A
/// provider failure is logged and reported as 502.
async fn translate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        warn!("Rejected translate request: {}", e.body_text());
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("failed to load data: {}", e.body_text()),
            }),
        )
    })?;

    debug!("Translating {} chars from '{}' to '{}'", request.text.chars().count(), request.from, request.to);

    match provider::translate(state.provider.as_ref(), &request).await {
        Ok(result) => Ok(Json(TranslateResponse { result })),
        Err(e) => {
            error!("Translation provider failed: {}", e);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: format!("translation failed: {}", e),
                }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::fake::FakeProvider;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn post_json(app: Router, body: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/translate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn translate_relays_first_message() {
        let provider = Arc::new(FakeProvider::replying("Hola"));
        let app = router(provider.clone());

        let (status, body) = post_json(
            app,
            r#"{"from":"English","to":"Spanish","text":"Hello"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "result": { "role": "assistant", "content": "Hola", "refusal": null } })
        );
        assert_eq!(provider.call_count(), 1);
        let calls = provider.calls.lock().unwrap();
        assert_eq!(
            calls[0][1].content.as_deref(),
            Some("Hello {{ English }} [[ Spanish ]]")
        );
    }

    #[tokio::test]
    async fn missing_fields_are_forwarded_as_empty() {
        let provider = Arc::new(FakeProvider::replying("?"));
        let (status, _) = post_json(router(provider.clone()), r#"{"text":"Hello"}"#).await;

        assert_eq!(status, StatusCode::OK);
        let calls = provider.calls.lock().unwrap();
        assert_eq!(calls[0][1].content.as_deref(), Some("Hello {{  }} [[  ]]"));
    }

    #[tokio::test]
    async fn non_string_fields_are_forwarded_as_text() {
        let provider = Arc::new(FakeProvider::replying("?"));
        let (status, _) = post_json(
            router(provider.clone()),
            r#"{"from":5,"to":"Spanish","text":"Hello"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let calls = provider.calls.lock().unwrap();
        assert_eq!(calls[0][1].content.as_deref(), Some("Hello {{ 5 }} [[ Spanish ]]"));
    }

    #[tokio::test]
    async fn provider_failure_is_bad_gateway() {
        let provider = Arc::new(FakeProvider::failing("HTTP 401: bad key"));
        let (status, body) = post_json(
            router(provider),
            r#"{"from":"English","to":"German","text":"Hi"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body["error"].as_str().unwrap().contains("bad key"));
    }

    #[tokio::test]
    async fn malformed_body_fails_before_provider_call() {
        let provider = Arc::new(FakeProvider::replying("unused"));
        let (status, body) = post_json(router(provider.clone()), "{not json").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().starts_with("failed to load data"));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = router(Arc::new(FakeProvider::replying("")));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
    }
}
