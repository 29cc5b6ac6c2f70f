//! Route-level tests
//!
//! Run the full router against a stub generator and an in-memory store;
//! no network, no disk.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use deckplan_core::OutlineService;
use deckplan_gen::{ContentGenerator, GenerateError};
use deckplan_model::{Chapter, Outline, OutlineId, SubChapter};
use deckplan_store::{MemoryOutlineStore, OutlineStore};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

const GENERATED_OUTLINE: &str = "\
Rust in Production
1. Introduction
  1.1 Background
    1.1.1 Motivation
2. Adoption
";

struct StubGenerator {
    response: &'static str,
    calls: AtomicUsize,
}

impl StubGenerator {
    fn new(response: &'static str) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentGenerator for StubGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.to_string())
    }
}

type TestService = OutlineService<StubGenerator, MemoryOutlineStore>;

fn test_app(response: &'static str) -> (Router, Arc<TestService>) {
    let service = Arc::new(OutlineService::new(
        StubGenerator::new(response),
        MemoryOutlineStore::new(),
    ));
    (deckplan_server::router(service.clone()), service)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_route_answers() {
    let (app, _) = test_app("");
    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_outline_returns_201_with_parsed_tree() {
    let (app, service) = test_app(GENERATED_OUTLINE);

    let response = app
        .oneshot(post_json("/outlines", r#"{"title":"Rust in Production"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["title"], "Rust in Production");
    assert_eq!(body["chapters"].as_array().unwrap().len(), 2);
    // wire format is camelCase
    assert!(body["chapters"][0]["subChapters"].is_array());
    assert_eq!(service.generator().call_count(), 1);
}

#[tokio::test]
async fn create_outline_with_blank_title_is_400_without_generation() {
    let (app, service) = test_app(GENERATED_OUTLINE);

    let response = app
        .oneshot(post_json("/outlines", r#"{"title":"   "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "title must not be empty");
    assert_eq!(service.generator().call_count(), 0);
}

#[tokio::test]
async fn create_empty_outline_makes_no_generation_call() {
    let (app, service) = test_app(GENERATED_OUTLINE);

    let response = app
        .oneshot(post_json("/outlines/empty", r#"{"title":""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["title"], "Untitled outline");
    assert_eq!(body["chapters"].as_array().unwrap().len(), 0);
    assert_eq!(service.generator().call_count(), 0);
}

#[tokio::test]
async fn fetch_round_trips_the_created_outline() {
    let (app, _) = test_app(GENERATED_OUTLINE);

    let created = app
        .clone()
        .oneshot(post_json("/outlines", r#"{"title":"Rust in Production"}"#))
        .await
        .unwrap();
    let created: Outline = serde_json::from_value(body_json(created).await).unwrap();

    let response = app
        .oneshot(get(&format!("/outlines/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Outline = serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn fetch_missing_outline_is_404() {
    let (app, _) = test_app("");
    let response = app
        .oneshot(get(&format!("/outlines/{}", OutlineId::new())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn fetch_with_unparseable_id_is_404() {
    let (app, _) = test_app("");
    let response = app.oneshot(get("/outlines/not-a-uuid")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn edit_renames_a_chapter_and_persists() {
    let (app, service) = test_app("");
    let outline = Outline::new("Topic").with_chapters(vec![Chapter::new("Old name")]);
    let target = outline.chapters[0].id;
    service.store().put(&outline).await.unwrap();

    let body = format!(
        r#"{{"editPath":{{"chapterId":"{target}"}},"newTitle":"New name"}}"#
    );
    let response = app
        .clone()
        .oneshot(put_json(&format!("/outlines/{}", outline.id), &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Outline = serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(updated.chapters[0].title, "New name");

    let fetched = app
        .oneshot(get(&format!("/outlines/{}", outline.id)))
        .await
        .unwrap();
    let fetched: Outline = serde_json::from_value(body_json(fetched).await).unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn edit_with_regenerate_replaces_children() {
    let (app, service) = test_app("1. Fresh A\n2. Fresh B");
    let outline = Outline::new("Topic").with_chapters(vec![
        Chapter::new("Target").with_sub_chapters(vec![SubChapter::new("Stale")]),
    ]);
    let target = outline.chapters[0].id;
    service.store().put(&outline).await.unwrap();

    let body = format!(
        r#"{{"editPath":{{"chapterId":"{target}"}},"newTitle":"Renamed","regenerate":true}}"#
    );
    let response = app
        .oneshot(put_json(&format!("/outlines/{}", outline.id), &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Outline = serde_json::from_value(body_json(response).await).unwrap();
    let subs = &updated.chapters[0].sub_chapters;
    assert_eq!(subs.len(), 2);
    assert_eq!(subs[0].title, "Fresh A");
    assert_eq!(service.generator().call_count(), 1);
}

#[tokio::test]
async fn edit_with_unknown_node_id_is_400() {
    let (app, service) = test_app("");
    let outline = Outline::new("Topic").with_chapters(vec![Chapter::new("Only")]);
    service.store().put(&outline).await.unwrap();

    let body = format!(
        r#"{{"editPath":{{"pointId":"{}"}},"newTitle":"x"}}"#,
        deckplan_model::NodeId::new()
    );
    let response = app
        .oneshot(put_json(&format!("/outlines/{}", outline.id), &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn edit_with_empty_edit_path_is_400() {
    let (app, service) = test_app("");
    let outline = Outline::new("Topic");
    service.store().put(&outline).await.unwrap();

    let response = app
        .oneshot(put_json(
            &format!("/outlines/{}", outline.id),
            r#"{"editPath":{},"newTitle":"x"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "edit path must reference exactly one node");
}

#[tokio::test]
async fn edit_with_ambiguous_edit_path_is_400() {
    let (app, service) = test_app("");
    let outline = Outline::new("Topic").with_chapters(vec![Chapter::new("Only")]);
    let chapter = outline.chapters[0].id;
    service.store().put(&outline).await.unwrap();

    let body = format!(
        r#"{{"editPath":{{"chapterId":"{chapter}","pointId":"{chapter}"}},"newTitle":"x"}}"#
    );
    let response = app
        .oneshot(put_json(&format!("/outlines/{}", outline.id), &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn edit_on_missing_outline_is_404() {
    let (app, _) = test_app("");

    let body = format!(
        r#"{{"editPath":{{"chapterId":"{}"}},"newTitle":"x"}}"#,
        deckplan_model::NodeId::new()
    );
    let response = app
        .oneshot(put_json(&format!("/outlines/{}", OutlineId::new()), &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
