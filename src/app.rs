use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    api,
    config::AppConfig,
    middleware::assign_trace_id,
    service::ranking::{self, RankingProvider},
};

#[derive(Clone)]
pub struct AppState {
    pub ranker: Arc<dyn RankingProvider>,
}

pub fn build_router(config: &AppConfig) -> anyhow::Result<Router> {
    let ranker = ranking::from_config(&config.ranker)?;
    Ok(router_with_ranker(ranker))
}

pub fn router_with_ranker(ranker: Arc<dyn RankingProvider>) -> Router {
    let state = AppState { ranker };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(assign_trace_id))
        .layer(cors);

    Router::new()
        .route(
            "/",
            get(api::health::liveness).post(api::recipes::recommend),
        )
        .route("/healthz", get(api::health::health_check))
        .layer(middleware)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::{model::Recipe, service::ranking::DummyRanker};

    struct EmptyRanker;

    impl RankingProvider for EmptyRanker {
        fn top_recipes(&self, _ingredients: &BTreeSet<String>) -> anyhow::Result<Vec<Recipe>> {
            Ok(Vec::new())
        }
    }

    fn dummy_router() -> Router {
        router_with_ranker(Arc::new(DummyRanker::new(3)))
    }

    async fn body_json(res: Response) -> Value {
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/")
            .body(body.into())
            .unwrap()
    }

    #[tokio::test]
    async fn get_root_reports_liveness() {
        let res = dummy_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().contains_key("x-trace-id"));
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"The service is up and running!");
    }

    #[tokio::test]
    async fn healthz_returns_ok() {
        let res = dummy_router()
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await, json!({ "ok": true }));
    }

    #[tokio::test]
    async fn post_builds_report_from_dummy_recipes() {
        let payload = json!({ "ingredients": ["Bread", "bacon!", "eggs"] }).to_string();
        let res = dummy_router().oneshot(post(payload)).await.unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert!(body["created_at"].as_str().is_some_and(|s| !s.is_empty()));

        let recipes = body["recipes"].as_array().unwrap();
        assert_eq!(recipes.len(), 3);
        assert_eq!(recipes[0]["name"], "Bacon Cheeseburger");
        assert_eq!(recipes[0]["link"], "cheeseburger.com");
        assert_eq!(recipes[0]["matching"], json!(["bacon", "bread"]));
        assert_eq!(recipes[0]["additional"], json!(["egg"]));
        assert_eq!(recipes[2]["name"], "Candied Bacon");
        assert_eq!(recipes[2]["link"], "candiesgalore.net/savoury");
        assert_eq!(recipes[2]["missing"], json!(["mint", "oil", "sugar"]));
    }

    #[tokio::test]
    async fn post_accepts_json_without_content_type() {
        let res = dummy_router()
            .oneshot(post(r#"{"ingredients": []}"#))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn post_with_json_content_type() {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"ingredients": ["onion"]}"#))
            .unwrap();
        let res = dummy_router().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn empty_ranking_returns_empty_recipes() {
        let router = router_with_ranker(Arc::new(EmptyRanker));
        let res = router
            .oneshot(post(r#"{"ingredients": ["egg"]}"#))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert_eq!(body["recipes"], json!([]));
        assert!(body["created_at"].is_string());
    }

    #[tokio::test]
    async fn malformed_payloads_are_bad_requests() {
        for payload in [
            "not json",
            r#"{"items": ["egg"]}"#,
            r#"{"ingredients": "egg"}"#,
            r#"{"ingredients": [1, 2]}"#,
        ] {
            let res = dummy_router().oneshot(post(payload)).await.unwrap();
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{payload}");
            let body = body_json(res).await;
            assert_eq!(body["error"]["code"], "BadRequest");
        }
    }
}
