use std::path::Path;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use modalkit_common::embed::embed_url;
use modalkit_common::ModalConfig;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{error, info, warn};

use crate::store::{ConfigStore, StoredConfig};

pub struct AppState {
    pub store: Arc<dyn ConfigStore>,
    /// Base for embed links, e.g. `https://modals.example.com`
    pub public_url: String,
}

#[derive(Deserialize)]
struct SaveRequest {
    config: ModalConfig,
    #[serde(default)]
    publish: bool,
}

#[derive(Deserialize)]
struct FetchQuery {
    id: Option<String>,
}

#[derive(Serialize)]
struct SavedBody {
    #[serde(flatten)]
    record: StoredConfig,
    #[serde(rename = "embedUrl")]
    embed_url: String,
}

/// API routes, plus the web bundle at `web_dir` for every other path
pub fn app_router(state: Arc<AppState>, web_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route("/api/modal-config", get(fetch_config).post(save_config))
        .route("/health", get(health))
        .with_state(state);

    match web_dir {
        Some(dir) => router.fallback_service(
            ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))),
        ),
        None => router,
    }
}

fn success<T: Serialize>(data: T) -> Response {
    Json(json!({ "success": true, "data": data })).into_response()
}

fn failure(status: StatusCode, message: impl Into<String>) -> Response {
    let message: String = message.into();
    (status, Json(json!({ "success": false, "error": message }))).into_response()
}

async fn save_config(
    State(state): State<Arc<AppState>>,
    body: Result<Json<SaveRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!("Rejected save request: {rejection}");
            return failure(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    if let Err(errors) = request.config.validate() {
        let message = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return failure(StatusCode::UNPROCESSABLE_ENTITY, message);
    }

    match state.store.insert(request.config, request.publish).await {
        Ok(record) => {
            info!("Saved modal config {} (published: {})", record.id, record.published);
            let embed_url = embed_url(&state.public_url, &record.id);
            success(SavedBody { record, embed_url })
        }
        Err(e) => {
            error!("Failed to save modal config: {e}");
            failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save modal config")
        }
    }
}

async fn fetch_config(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FetchQuery>,
) -> Response {
    let Some(id) = query.id.filter(|id| !id.is_empty()) else {
        return failure(StatusCode::BAD_REQUEST, "Missing config ID");
    };

    match state.store.fetch(&id).await {
        Ok(Some(record)) => success(record),
        Ok(None) => failure(StatusCode::NOT_FOUND, "Failed to fetch modal config"),
        Err(e) => {
            error!("Failed to fetch modal config {id}: {e}");
            failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch modal config")
        }
    }
}

async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryConfigStore;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let state = Arc::new(AppState {
            store: Arc::new(InMemoryConfigStore::default()),
            public_url: "https://modals.test/".to_string(),
        });
        app_router(state, None)
    }

    async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post(body: Value) -> Request<Body> {
        Request::post("/api/modal-config")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_config(query: &str) -> Request<Body> {
        Request::get(format!("/api/modal-config{query}"))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn publish_then_fetch() {
        let router = test_router();
        let config = ModalConfig::starter();

        let (status, saved) =
            send(&router, post(json!({ "config": config, "publish": true }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(saved["success"], true);
        let id = saved["data"]["id"].as_str().unwrap().to_string();
        assert_eq!(saved["data"]["published"], true);
        assert_eq!(
            saved["data"]["embedUrl"],
            format!("https://modals.test/embed/{id}")
        );

        let (status, fetched) = send(&router, get_config(&format!("?id={id}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["data"]["id"], id.as_str());
        assert!(fetched["data"].get("embedUrl").is_none());
        let loaded: ModalConfig =
            serde_json::from_value(fetched["data"]["config"].clone()).unwrap();
        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn publish_defaults_to_false() {
        let router = test_router();
        let (status, saved) =
            send(&router, post(json!({ "config": ModalConfig::starter() }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(saved["data"]["published"], false);
    }

    #[tokio::test]
    async fn invalid_config_is_rejected() {
        let router = test_router();
        let (status, body) =
            send(&router, post(json!({ "config": ModalConfig::default() }))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "config has no steps");
    }

    #[tokio::test]
    async fn missing_id_is_bad_request() {
        let router = test_router();
        for query in ["", "?id="] {
            let (status, body) = send(&router, get_config(query)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "Missing config ID");
        }
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let router = test_router();
        let (status, body) = send(&router, get_config("?id=does-not-exist")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Failed to fetch modal config");
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let router = test_router();
        let request = Request::post("/api/modal-config")
            .header("content-type", "application/json")
            .body(Body::from("{\"config\": 3}"))
            .unwrap();
        let (status, body) = send(&router, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn health_is_ok() {
        let response = test_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"ok");
    }
}
