use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use scoped_i18n::{I18n, LanguageRegistry, STANDARDS, is_deletion};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::config::Config;

#[derive(Serialize, Deserialize)]
pub struct CreateMessageRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Clone)]
pub struct AppState {
    /// Writes are serialized by the lock; the store itself has no locking
    pub i18n: Arc<RwLock<I18n>>,
    pub registry: Arc<LanguageRegistry>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(i18n: I18n, registry: LanguageRegistry, config: Config) -> Self {
        AppState {
            i18n: Arc::new(RwLock::new(i18n)),
            registry: Arc::new(registry),
            config: Arc::new(config),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let message = if state.config.readonly {
        get(message_get)
    } else {
        get(message_get).post(message_create).delete(message_delete)
    };

    Router::new()
        .route("/v1/message/ln/{ln}/{*scopes}", message)
        .route("/v1/languages", get(language_list))
        .route("/v1/language/standards", get(standard_list))
        .route("/v1/language/{language}", get(language_get))
        .route("/v1/instance", get(instance_get))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Split a wildcard route capture into scope labels, ignoring empty segments.
fn split_scopes(raw: &str) -> Vec<&str> {
    raw.split('/').filter(|label| !label.is_empty()).collect()
}

/// The store key for a language given in a URL.
///
/// Registry languages (by name or any code) resolve through the store's
/// standard; anything else is used verbatim, lowercased.
fn language_string(registry: &LanguageRegistry, i18n: &I18n, ln: &str) -> String {
    match registry.find(ln) {
        Some(key) => i18n.language_string(key),
        None => ln.to_lowercase(),
    }
}

async fn message_get(
    State(state): State<AppState>,
    Path((ln, raw_scopes)): Path<(String, String)>,
) -> Response {
    let scopes = split_scopes(&raw_scopes);
    let i18n = state.i18n.read().await;
    let language = language_string(&state.registry, &i18n, &ln);

    if let Some(text) = i18n.message_by_string(&language, scopes.as_slice()) {
        return Json(text).into_response();
    }

    debug!("No message for '{}' at '{}'", language, raw_scopes);
    if state.config.not_found_with_404 {
        (StatusCode::NOT_FOUND, Json(serde_json::Value::Null)).into_response()
    } else {
        Json(format!("{}_{}", ln, placeholder_scopes(&raw_scopes))).into_response()
    }
}

async fn message_create(
    State(state): State<AppState>,
    Path((ln, raw_scopes)): Path<(String, String)>,
    Json(request): Json<CreateMessageRequest>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let scopes = split_scopes(&raw_scopes);
    if scopes.is_empty() {
        return Err(bad_request("A message needs at least one scope"));
    }
    // Empty text means deletion, which only DELETE may request
    if is_deletion(&request.message) {
        return Err(bad_request("Message text must not be empty; use DELETE to remove"));
    }

    let mut i18n = state.i18n.write().await;
    let language = language_string(&state.registry, &i18n, &ln);
    i18n.push_message_by_string(&language, &request.message, scopes.as_slice());
    info!("Stored message for '{}' at '{}'", language, scopes.join("/"));

    Ok(StatusCode::CREATED)
}

async fn message_delete(
    State(state): State<AppState>,
    Path((ln, raw_scopes)): Path<(String, String)>,
) -> StatusCode {
    let scopes = split_scopes(&raw_scopes);
    let mut i18n = state.i18n.write().await;
    let language = language_string(&state.registry, &i18n, &ln);
    i18n.push_message_by_string(&language, "", scopes.as_slice());
    info!("Deleted message for '{}' at '{}'", language, scopes.join("/"));

    StatusCode::NO_CONTENT
}

/// The scope part of a missing-message placeholder.
///
/// The wildcard capture already excludes the slash after `{ln}`, so only one
/// trailing slash is trimmed. Inner and extra leading slashes are kept.
fn placeholder_scopes(raw: &str) -> &str {
    raw.strip_suffix('/').unwrap_or(raw)
}

fn bad_request(error: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}

async fn language_list(State(state): State<AppState>) -> Response {
    Json(state.registry.languages()).into_response()
}

async fn standard_list() -> Json<Vec<&'static str>> {
    Json(STANDARDS.to_vec())
}

async fn language_get(
    State(state): State<AppState>,
    Path(language): Path<String>,
) -> Response {
    Json(state.registry.find_or_none(&language)).into_response()
}

async fn instance_get(State(state): State<AppState>) -> Response {
    let i18n = state.i18n.read().await;
    Json(&*i18n).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request};
    use scoped_i18n::{ISO_639_1, LanguageKey};
    use tower::ServiceExt;

    fn sample_store() -> I18n {
        let registry = LanguageRegistry::builtin();
        let mut i18n = I18n::new(ISO_639_1);
        i18n.pusher(&["system", "text", "error"])
            .push(registry.english(), "error occurred")
            .push(registry.chinese(), "错误");
        i18n.pusher(&["system", "error", "unknown"])
            .push(registry.english(), "Unknown error");
        i18n
    }

    fn test_app_with(config: Config) -> (Router, AppState) {
        let state = AppState::new(sample_store(), LanguageRegistry::builtin(), config);
        (router(state.clone()), state)
    }

    fn test_app() -> (Router, AppState) {
        test_app_with(Config::default())
    }

    async fn send(
        app: Router,
        method: Method,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, Vec<u8>) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app.oneshot(request.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    fn json_string(bytes: &[u8]) -> String {
        serde_json::from_slice(bytes).unwrap()
    }

    #[tokio::test]
    async fn test_get_by_code_and_name() {
        let (app, _) = test_app();
        let (status, body) = send(
            app.clone(),
            Method::GET,
            "/v1/message/ln/en/system/text/error",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_string(&body), "error occurred");

        let (status, body) = send(
            app,
            Method::GET,
            "/v1/message/ln/chinese/system/text/error/",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_string(&body), "错误");
    }

    #[tokio::test]
    async fn test_missing_message_placeholder() {
        let (app, _) = test_app();
        let (status, body) = send(
            app,
            Method::GET,
            "/v1/message/ln/fr/system/text/error",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_string(&body), "fr_system/text/error");
    }

    #[tokio::test]
    async fn test_missing_message_404() {
        let (app, _) = test_app_with(Config {
            not_found_with_404: true,
            ..Config::default()
        });
        let (status, _) = send(app, Method::GET, "/v1/message/ln/en/system/text", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_then_get_then_delete() {
        let (app, state) = test_app();
        let (status, _) = send(
            app.clone(),
            Method::POST,
            "/v1/message/ln/ja/system/text/error",
            Some(r#"{"message": "エラー"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            state
                .i18n
                .read()
                .await
                .message_by_string("ja", &["system", "text", "error"]),
            Some("エラー")
        );

        let (status, body) = send(
            app.clone(),
            Method::GET,
            "/v1/message/ln/jpn/system/text/error",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_string(&body), "エラー");

        let (status, _) = send(
            app,
            Method::DELETE,
            "/v1/message/ln/ja/system/text/error",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(
            state
                .i18n
                .read()
                .await
                .message_by_string("ja", &["system", "text", "error"]),
            None
        );
    }

    #[tokio::test]
    async fn test_create_rejects_empty_text() {
        let (app, state) = test_app();
        let (status, body) = send(
            app,
            Method::POST,
            "/v1/message/ln/en/system/text/error",
            Some(r#"{"message": ""}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(error["error"].as_str().unwrap().contains("DELETE"));
        assert_eq!(
            state
                .i18n
                .read()
                .await
                .message_by_string("en", &["system", "text", "error"]),
            Some("error occurred")
        );
    }

    #[tokio::test]
    async fn test_readonly_has_no_write_routes() {
        let (app, state) = test_app_with(Config {
            readonly: true,
            ..Config::default()
        });
        let (status, _) = send(
            app.clone(),
            Method::POST,
            "/v1/message/ln/en/system/text/error",
            Some(r#"{"message": "changed"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

        let (status, _) = send(
            app,
            Method::DELETE,
            "/v1/message/ln/en/system/text/error",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(state.i18n.read().await.record_count(), 3);
    }

    #[tokio::test]
    async fn test_standards_and_languages() {
        let (app, _) = test_app();
        let (status, body) = send(app.clone(), Method::GET, "/v1/language/standards", None).await;
        assert_eq!(status, StatusCode::OK);
        let standards: Vec<String> = serde_json::from_slice(&body).unwrap();
        assert_eq!(standards, STANDARDS);

        let (status, body) = send(app.clone(), Method::GET, "/v1/languages", None).await;
        assert_eq!(status, StatusCode::OK);
        let raw: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(raw["english"]["Keys"]["ISO 639-1"], "en");
        let languages: std::collections::BTreeMap<String, LanguageKey> =
            serde_json::from_slice(&body).unwrap();
        assert_eq!(&languages, LanguageRegistry::builtin().languages());

        let (_, body) = send(app.clone(), Method::GET, "/v1/language/zh", None).await;
        let chinese: LanguageKey = serde_json::from_slice(&body).unwrap();
        assert_eq!(chinese.resolve("Custom"), "chinese");

        let (_, body) = send(app, Method::GET, "/v1/language/klingon", None).await;
        let none: LanguageKey = serde_json::from_slice(&body).unwrap();
        assert_eq!(none.resolve(ISO_639_1), "none");
    }

    #[tokio::test]
    async fn test_instance_round_trips() {
        let (app, _) = test_app();
        let (status, body) = send(app, Method::GET, "/v1/instance", None).await;
        assert_eq!(status, StatusCode::OK);
        let restored = scoped_i18n::from_json(std::str::from_utf8(&body).unwrap()).unwrap();
        assert_eq!(restored, sample_store());
    }

    #[tokio::test]
    async fn test_placeholder_keeps_inner_slashes() {
        let (app, _) = test_app();
        let (status, body) = send(app, Method::GET, "/v1/message/ln/fr//a//", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_string(&body), "fr_/a/");
    }

    #[test]
    fn test_placeholder_scopes() {
        assert_eq!(placeholder_scopes("a/b/"), "a/b");
        assert_eq!(placeholder_scopes("/a//"), "/a/");
        assert_eq!(placeholder_scopes("a"), "a");
        assert_eq!(placeholder_scopes("/"), "");
    }

    #[test]
    fn test_split_scopes() {
        assert_eq!(split_scopes("/a/b/"), vec!["a", "b"]);
        assert_eq!(split_scopes("a//b"), vec!["a", "b"]);
        assert!(split_scopes("/").is_empty());
    }
}
