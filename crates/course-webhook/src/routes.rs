//! Webhook routes.
//!
//! - `POST <path>` records a GitHub delivery in the event store
//! - `GET /health` reports liveness

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use course_core::{ActionsEvent, EventStore};
use serde_json::{Value, json};
use std::sync::Arc;

/// Header carrying the GitHub event name.
pub const EVENT_HEADER: &str = "x-github-event";

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    store: Arc<EventStore>,
}

impl AppState {
    /// State writing to `store`.
    pub fn new(store: Arc<EventStore>) -> Self {
        Self { store }
    }

    /// The event store.
    pub fn store(&self) -> &EventStore {
        &self.store
    }
}

/// Build the router, mounting the receiver at `path`.
pub fn router(path: &str, state: AppState) -> Router {
    Router::new()
        .route(path, post(receive))
        .route("/health", get(health))
        .with_state(state)
}

async fn receive(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    let payload: Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected webhook delivery");
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() })));
        }
    };

    let event_type = headers.get(EVENT_HEADER).and_then(|v| v.to_str().ok());
    let event = ActionsEvent::from_webhook(event_type, &payload);
    tracing::info!(
        event_type = %event.event_type,
        action = event.action.as_deref().unwrap_or("-"),
        "Received webhook"
    );

    match state.store.append(event).await {
        Ok(count) => {
            tracing::debug!(count, "Stored webhook event");
            (StatusCode::OK, Json(json!({ "status": "received" })))
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to store webhook event");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
        }
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn app(dir: &TempDir) -> (Router, Arc<EventStore>) {
        let store = Arc::new(EventStore::new(dir.path().join("events.json"), 2));
        (router("/webhook/github", AppState::new(store.clone())), store)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn delivery(event: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/webhook/github")
            .header("content-type", "application/json")
            .header("X-GitHub-Event", event)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let dir = TempDir::new().unwrap();
        let (app, _) = app(&dir);

        let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_receive_records_event() {
        let dir = TempDir::new().unwrap();
        let (app, store) = app(&dir);

        let resp = app
            .oneshot(delivery(
                "workflow_run",
                r#"{"action":"completed","workflow_run":{"name":"CI"}}"#,
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!({"status": "received"}));

        let events = store.load().await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, "workflow_run");
        assert_eq!(events[0].action.as_deref(), Some("completed"));
    }

    #[tokio::test]
    async fn test_receive_without_event_header() {
        let dir = TempDir::new().unwrap();
        let (app, store) = app(&dir);

        let req = Request::builder()
            .method("POST")
            .uri("/webhook/github")
            .body(Body::from("{}"))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let events = store.load().await.unwrap();
        assert_eq!(events[0].event_type, "unknown");
    }

    #[tokio::test]
    async fn test_receive_invalid_json() {
        let dir = TempDir::new().unwrap();
        let (app, store) = app(&dir);

        let resp = app.oneshot(delivery("push", "not json")).await.unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(resp).await["error"].is_string());
        assert!(!store.exists());
    }

    #[tokio::test]
    async fn test_receive_keeps_last_events() {
        let dir = TempDir::new().unwrap();
        let (app, store) = app(&dir);

        for action in ["a", "b", "c"] {
            let body = format!(r#"{{"action":"{action}"}}"#);
            let resp = app
                .clone()
                .oneshot(delivery("check_run", &body))
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let actions: Vec<_> = store
            .load()
            .await
            .unwrap()
            .into_iter()
            .filter_map(|e| e.action)
            .collect();
        assert_eq!(actions, vec!["b", "c"]);
    }

    #[tokio::test]
    async fn test_receive_store_failure() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "file, not a directory").unwrap();
        let store = Arc::new(EventStore::new(blocker.join("events.json"), 10));
        let app = router("/webhook/github", AppState::new(store));

        let resp = app.oneshot(delivery("push", "{}")).await.unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_json(resp).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_get_on_webhook_path_not_allowed() {
        let dir = TempDir::new().unwrap();
        let (app, _) = app(&dir);

        let req = Request::builder()
            .uri("/webhook/github")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
