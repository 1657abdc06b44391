use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use loupe_core::{tokenize_document, CorpusIndex, RankConfig};
use loupe_server::build_app;
use serde_json::Value;
use tower::ServiceExt;

fn tiny_index() -> CorpusIndex {
    let mut index = CorpusIndex::new();
    index.add_document("cat.xml".into(), tokenize_document("cat cat cat cat"));
    index.add_document("dog.xml".into(), tokenize_document("dog dog cat"));
    index.add_document("fish.xml".into(), tokenize_document("fish only"));
    index
}

fn app(config: RankConfig) -> Router {
    build_app(tiny_index(), config, "assets".into())
}

async fn search(app: Router, query: &str) -> (StatusCode, Value) {
    let req = Request::post("/api/search").body(Body::from(query.to_string())).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn search_returns_ranked_path_score_pairs() {
    let (status, json) = search(app(RankConfig::default()), "cat").await;
    assert_eq!(status, StatusCode::OK);

    let pairs = json.as_array().unwrap();
    assert_eq!(pairs.len(), 3);
    for pair in pairs {
        let pair = pair.as_array().unwrap();
        assert_eq!(pair.len(), 2);
        assert!(pair[0].is_string());
        assert!(pair[1].is_number());
    }

    assert_eq!(pairs[0][0], "cat.xml");
    assert!(pairs[0][1].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn result_limit_is_configurable() {
    let config = RankConfig { limit: 1, ..Default::default() };
    let (status, json) = search(app(config), "cat").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_terms_are_not_an_error() {
    let (status, json) = search(app(RankConfig::default()), "zebra").await;
    assert_eq!(status, StatusCode::OK);
    let pairs = json.as_array().unwrap();
    assert!(pairs.iter().all(|p| p[1].as_f64().unwrap() == 0.0));
}

#[tokio::test]
async fn health_endpoint_responds() {
    let resp = app(RankConfig::default())
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
