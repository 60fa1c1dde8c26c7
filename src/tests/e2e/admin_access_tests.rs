use crate::modules::access::core::role::Role;
use crate::shell::http::router;
use crate::tests::fixtures::projects::ProjectBuilder;
use crate::tests::fixtures::state::TestStateBuilder;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn as_user(method: &str, uri: &str, uid: &str, body: Body) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-user-id", uid)
        .header("x-user-email", format!("{uid}@dsu.ac.kr"))
        .body(body)
        .unwrap()
}

async fn dashboard(app: &Router, uid: &str) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(as_user("GET", "/admin/dashboard", uid, Body::empty()))
        .await
        .unwrap();
    json(response).await
}

#[tokio::test]
async fn a_new_user_waits_for_approval_until_an_admin_promotes_them() {
    let app = router(TestStateBuilder::new().with_user("admin-1", Role::Admin).build());

    let waiting = dashboard(&app, "newcomer").await;
    assert_eq!(waiting["view"], "awaiting_approval");

    let users = app
        .clone()
        .oneshot(as_user("GET", "/admin/users", "admin-1", Body::empty()))
        .await
        .unwrap();
    let users = json(users).await;
    assert_eq!(users[0]["uid"], "newcomer");
    assert_eq!(users[0]["role"], "pending");

    let promote = app
        .clone()
        .oneshot(as_user(
            "PUT",
            "/admin/users/newcomer/role",
            "admin-1",
            Body::from(r#"{"role":"student"}"#),
        ))
        .await
        .unwrap();
    assert_eq!(promote.status(), StatusCode::OK);

    let empty = dashboard(&app, "newcomer").await;
    assert_eq!(empty["view"], "create_first_project");

    let created = app
        .clone()
        .oneshot(as_user(
            "POST",
            "/admin/projects",
            "newcomer",
            Body::from(r#"{"status":"draft","title":{"ko":"첫 작품"}}"#),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);

    let listed = dashboard(&app, "newcomer").await;
    assert_eq!(listed["view"], "projects");
    assert_eq!(listed["canManageUsers"], false);
    assert_eq!(listed["projects"].as_array().unwrap().len(), 1);
    assert_eq!(listed["projects"][0]["title"]["ko"], "첫 작품");
}

#[tokio::test]
async fn an_admin_sees_and_edits_projects_owned_by_students() {
    let state = TestStateBuilder::new()
        .with_documents(vec![ProjectBuilder::new().created_by("student-1").views(3).build()])
        .with_user("admin-1", Role::Admin)
        .with_user("student-2", Role::Student)
        .build();
    let app = router(state);

    let admin_view = dashboard(&app, "admin-1").await;
    assert_eq!(admin_view["projects"].as_array().unwrap().len(), 5);
    assert_eq!(admin_view["stats"]["mostViewed"]["id"], "project-fixed-0001");

    let edit = r#"{"title":{"ko":"관리자 수정"}}"#;
    let by_admin = app
        .clone()
        .oneshot(as_user(
            "PUT",
            "/admin/projects/project-fixed-0001",
            "admin-1",
            Body::from(edit),
        ))
        .await
        .unwrap();
    assert_eq!(by_admin.status(), StatusCode::OK);
    assert_eq!(json(by_admin).await["createdBy"], "student-1");

    let by_other_student = app
        .oneshot(as_user(
            "PUT",
            "/admin/projects/project-fixed-0001",
            "student-2",
            Body::from(edit),
        ))
        .await
        .unwrap();
    assert_eq!(by_other_student.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn the_mock_identity_only_works_when_enabled() {
    let disabled = router(TestStateBuilder::new().build());
    let response = disabled
        .oneshot(as_user("GET", "/admin/dashboard", "mock-admin", Body::empty()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let enabled = router(TestStateBuilder::new().allow_mock_identity(true).build());
    let view = dashboard(&enabled, "mock-admin").await;
    assert_eq!(view["view"], "projects");
    assert_eq!(view["canManageUsers"], true);
}
