use crate::modules::catalog::core::project::ProjectStatus;
use crate::shell::http::router;
use crate::tests::fixtures::projects::ProjectBuilder;
use crate::tests::fixtures::state::TestStateBuilder;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn ids(cards: &serde_json::Value) -> Vec<String> {
    cards
        .as_array()
        .unwrap()
        .iter()
        .map(|card| card["id"].as_str().unwrap().to_string())
        .collect()
}

fn get(uri: &str, client: &str) -> Request<Body> {
    Request::get(uri)
        .header("x-client-id", client)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn remote_records_override_seed_projects_and_drafts_stay_hidden() {
    let state = TestStateBuilder::new()
        .with_documents(vec![
            ProjectBuilder::new()
                .id("seed-last-lantern")
                .title_ko("마지막 등불 (개정판)")
                .build(),
            ProjectBuilder::new().id("remote-new").build(),
            ProjectBuilder::new()
                .id("remote-draft")
                .status(ProjectStatus::Draft)
                .build(),
        ])
        .build();
    let app = router(state);

    let cards = json(app.oneshot(get("/projects", "c-1")).await.unwrap()).await;

    assert_eq!(
        ids(&cards),
        vec![
            "seed-cyberpunk-edgerunners",
            "seed-last-lantern",
            "seed-mecha-protocol",
            "seed-forest-of-whispers",
            "remote-new",
        ]
    );
    assert_eq!(cards[1]["title"]["ko"], "마지막 등불 (개정판)");
}

#[tokio::test]
async fn a_client_in_test_mode_browses_its_local_drafts_without_the_store() {
    let state = TestStateBuilder::new()
        .allow_mock_identity(true)
        .offline_store()
        .build();
    let app = router(state);

    let enable = Request::put("/session/test-mode")
        .header("content-type", "application/json")
        .header("x-client-id", "c-1")
        .body(Body::from(r#"{"enabled":true}"#))
        .unwrap();
    assert_eq!(
        app.clone().oneshot(enable).await.unwrap().status(),
        StatusCode::NO_CONTENT
    );

    let create = Request::post("/admin/projects")
        .header("content-type", "application/json")
        .header("x-client-id", "c-1")
        .body(Body::from(
            r#"{"status":"draft","title":{"ko":"점토 인형","en":"Clay Doll"},"technique":["Maya"]}"#,
        ))
        .unwrap();
    let created = app.clone().oneshot(create).await.unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = json(created).await;
    assert_eq!(created["createdBy"], "mock-admin");
    let local_id = created["id"].as_str().unwrap().to_string();
    assert!(local_id.starts_with("local-"));

    let own = json(app.clone().oneshot(get("/projects?category=3D", "c-1")).await.unwrap()).await;
    assert!(ids(&own).contains(&local_id));

    let other = json(app.clone().oneshot(get("/projects?category=3D", "c-2")).await.unwrap()).await;
    assert!(!ids(&other).contains(&local_id));

    let clear = Request::delete("/session/drafts")
        .header("x-client-id", "c-1")
        .body(Body::empty())
        .unwrap();
    assert_eq!(
        app.clone().oneshot(clear).await.unwrap().status(),
        StatusCode::NO_CONTENT
    );
    let after = json(app.oneshot(get("/projects", "c-1")).await.unwrap()).await;
    assert_eq!(ids(&after).len(), 4);
}

#[tokio::test]
async fn searching_matches_titles_and_member_names_but_not_descriptions() {
    let app = router(TestStateBuilder::new().build());

    let by_member = json(app.clone().oneshot(get("/projects?q=%20CHOI%20", "c-1")).await.unwrap()).await;
    assert_eq!(ids(&by_member), vec!["seed-forest-of-whispers"]);

    let by_description = json(app.oneshot(get("/projects?q=felt", "c-1")).await.unwrap()).await;
    assert!(ids(&by_description).is_empty());
}

#[tokio::test]
async fn viewing_a_project_counts_once_and_shows_in_its_detail() {
    let state = TestStateBuilder::new()
        .with_documents(vec![ProjectBuilder::new().views(5).build()])
        .build();
    let app = router(state);

    for _ in 0..3 {
        let view = Request::post("/projects/project-fixed-0001/views")
            .header("x-client-id", "c-1")
            .body(Body::empty())
            .unwrap();
        assert_eq!(app.clone().oneshot(view).await.unwrap().status(), StatusCode::OK);
    }

    let detail = json(app.oneshot(get("/projects/project-fixed-0001", "c-1")).await.unwrap()).await;
    assert_eq!(detail["views"], 6);
}
