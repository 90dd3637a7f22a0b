//! HTTP server for prompt-fanout

use super::demo::demo_routes;
use super::routes::fanout_routes;
use axum::Router;
use fanout_application::{LlmGateway, RunFanOutUseCase};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the application router around a fan-out use case
pub fn router<G: LlmGateway + 'static>(use_case: Arc<RunFanOutUseCase<G>>) -> Router {
    Router::new()
        .merge(fanout_routes::<G>())
        .merge(demo_routes::<Arc<RunFanOutUseCase<G>>>())
        .layer(TraceLayer::new_for_http())
        .with_state(use_case)
}

/// Run the HTTP server until Ctrl-C
pub async fn serve<G: LlmGateway + 'static>(
    addr: SocketAddr,
    use_case: Arc<RunFanOutUseCase<G>>,
) -> std::io::Result<()> {
    let app = router(use_case);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use fanout_application::{GatewayError, ResponseCache};
    use fanout_domain::{FanOutResult, Message, Model};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    // ==================== Test Mocks ====================

    struct EchoGateway {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl LlmGateway for EchoGateway {
        async fn complete(
            &self,
            _model: &Model,
            messages: &[Message],
        ) -> Result<String, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(GatewayError::ConnectionError("refused".to_string()));
            }
            let prompt = messages.last().map(|m| m.content.as_str()).unwrap_or("");
            Ok(format!("ECHO:{}", prompt))
        }
    }

    #[derive(Default)]
    struct MapCache(Mutex<HashMap<String, FanOutResult>>);

    impl ResponseCache for MapCache {
        fn get(&self, query: &str) -> Option<FanOutResult> {
            self.0.lock().unwrap().get(query).cloned()
        }

        fn put(&self, query: String, result: FanOutResult) {
            self.0.lock().unwrap().insert(query, result);
        }

        fn len(&self) -> usize {
            self.0.lock().unwrap().len()
        }
    }

    fn app(fail: bool) -> (Router, Arc<EchoGateway>) {
        let gateway = Arc::new(EchoGateway {
            calls: AtomicUsize::new(0),
            fail,
        });
        let use_case = RunFanOutUseCase::new(Arc::clone(&gateway), Arc::new(MapCache::default()));
        (router(Arc::new(use_case)), gateway)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
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

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    // ==================== Fan-out route ====================

    #[tokio::test]
    async fn test_run_prompts_success_and_cache() {
        let (app, gateway) = app(false);

        let response = app
            .clone()
            .oneshot(post_json("/run-prompts", r#"{"query":"Explain REST"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let first = json_body(response).await;
        let results = first["results"].as_object().unwrap();
        assert_eq!(results.len(), 6);
        for key in [
            "zero_shot",
            "few_shot",
            "chain_of_thought",
            "react",
            "self_critique",
            "multi_role",
        ] {
            let text = results[key].as_str().unwrap();
            assert!(text.starts_with("ECHO:"));
            assert!(text.contains("Explain REST"));
        }
        assert!(first["comparative_analysis"].as_str().unwrap().starts_with("ECHO:"));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 7);

        let response = app
            .oneshot(post_json("/run-prompts", r#"{"query":"Explain REST"}"#))
            .await
            .unwrap();
        assert_eq!(json_body(response).await, first);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 7);
    }

    #[tokio::test]
    async fn test_run_prompts_empty_query() {
        let (app, gateway) = app(false);

        let response = app
            .oneshot(post_json("/run-prompts", r#"{"query":""}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(json_body(response).await["error"].is_string());
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_run_prompts_whitespace_query_is_answered() {
        let (app, gateway) = app(false);

        let response = app
            .oneshot(post_json("/run-prompts", r#"{"query":"   "}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["results"].as_object().unwrap().len(), 6);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 7);
    }

    #[tokio::test]
    async fn test_run_prompts_malformed_body() {
        let (app, gateway) = app(false);

        let response = app
            .clone()
            .oneshot(post_json("/run-prompts", r#"{"question":"Explain REST"}"#))
            .await
            .unwrap();
        assert!(response.status().is_client_error());

        let response = app
            .oneshot(post_json("/run-prompts", "not json"))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_run_prompts_upstream_failure() {
        let (app, _gateway) = app(true);

        let response = app
            .oneshot(post_json("/run-prompts", r#"{"query":"Explain REST"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = json_body(response).await;
        assert!(body["error"].as_str().unwrap().contains("refused"));
    }

    // ==================== Demo routes ====================

    #[tokio::test]
    async fn test_home() {
        let (app, _) = app(false);

        let response = app.oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({"message": "Server is running"})
        );
    }

    #[tokio::test]
    async fn test_greet() {
        let (app, _) = app(false);

        let response = app.clone().oneshot(get("/greet?name=Ana&age=30")).await.unwrap();
        assert_eq!(
            json_body(response).await,
            serde_json::json!({"message": "Hello Ana", "age": 30})
        );

        let response = app.clone().oneshot(get("/greet?name=Ana")).await.unwrap();
        assert_eq!(
            json_body(response).await,
            serde_json::json!({"message": "Hello Ana", "age": null})
        );

        let response = app.oneshot(get("/greet")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_user_echoes_body() {
        let (app, _) = app(false);

        let response = app
            .oneshot(post_json("/create-user", r#"{"name":"Ana","roles":["admin"]}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({
                "message": "User created",
                "user": {"name": "Ana", "roles": ["admin"]}
            })
        );
    }
}
