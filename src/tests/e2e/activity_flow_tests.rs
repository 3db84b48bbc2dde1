// End-to-end flows over the wired router: full create/track/stop/report
// journeys, exercised through HTTP the way a client would drive them.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::test_support::{TOKEN_A, TOKEN_B, make_state};

#[fixture]
fn app() -> Router {
    router(make_state())
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: &str,
    body: Option<&str>,
) -> axum::response::Response {
    let mut request = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"));
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap()
}

async fn json_of(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_task(app: &Router, token: &str, title: &str) -> serde_json::Value {
    let response = send(
        app,
        Method::POST,
        "/api/tasks",
        token,
        Some(&format!(r#"{{"title":"{title}"}}"#)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    json_of(response).await
}

async fn start_entry(app: &Router, token: &str, task_id: &str) -> axum::response::Response {
    send(
        app,
        Method::POST,
        "/api/time-entries/start",
        token,
        Some(&format!(r#"{{"task_id":"{task_id}"}}"#)),
    )
    .await
}

#[rstest]
#[tokio::test]
async fn it_should_walk_a_full_tracking_session(app: Router) {
    let task = create_task(&app, TOKEN_A, "Draft report").await;
    let task_id = task["id"].as_str().unwrap();
    assert_eq!(task["status"], "todo");
    assert_eq!(task["priority"], "medium");

    let started = start_entry(&app, TOKEN_A, task_id).await;
    assert_eq!(started.status(), StatusCode::CREATED);
    let entry = json_of(started).await;
    assert!(entry["end_time"].is_null());

    let entry_id = entry["id"].as_str().unwrap();
    let stopped = send(
        &app,
        Method::PUT,
        &format!("/api/time-entries/{entry_id}/stop"),
        TOKEN_A,
        None,
    )
    .await;
    assert_eq!(stopped.status(), StatusCode::OK);
    let stopped = json_of(stopped).await;
    assert!(stopped["end_time"].as_i64().unwrap() >= stopped["start_time"].as_i64().unwrap());

    let active = send(&app, Method::GET, "/api/time-entries/active", TOKEN_A, None).await;
    assert!(json_of(active).await.is_null());

    let listed = send(&app, Method::GET, "/api/time-entries", TOKEN_A, None).await;
    assert_eq!(json_of(listed).await.as_array().unwrap().len(), 1);
}

#[rstest]
#[tokio::test]
async fn it_should_keep_the_first_entry_when_a_second_start_races_in(app: Router) {
    let task = create_task(&app, TOKEN_A, "Draft report").await;
    let other = create_task(&app, TOKEN_A, "Review notes").await;
    let first = json_of(start_entry(&app, TOKEN_A, task["id"].as_str().unwrap()).await).await;

    let second = start_entry(&app, TOKEN_A, other["id"].as_str().unwrap()).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let active = send(&app, Method::GET, "/api/time-entries/active", TOKEN_A, None).await;
    assert_eq!(json_of(active).await["id"], first["id"]);
}

#[rstest]
#[tokio::test]
async fn it_should_stop_an_entry_whose_task_was_deleted(app: Router) {
    let task = create_task(&app, TOKEN_A, "Draft report").await;
    let task_id = task["id"].as_str().unwrap();
    let entry = json_of(start_entry(&app, TOKEN_A, task_id).await).await;
    let entry_id = entry["id"].as_str().unwrap();

    let deleted = send(
        &app,
        Method::DELETE,
        &format!("/api/tasks/{task_id}"),
        TOKEN_A,
        None,
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    // The entry outlives its task and still closes normally.
    let stopped = send(
        &app,
        Method::PUT,
        &format!("/api/time-entries/{entry_id}/stop"),
        TOKEN_A,
        None,
    )
    .await;
    assert_eq!(stopped.status(), StatusCode::OK);
}

#[rstest]
#[tokio::test]
async fn it_should_report_todays_work_in_the_summary(app: Router) {
    let task = create_task(&app, TOKEN_A, "Draft report").await;
    let task_id = task["id"].as_str().unwrap();
    let entry = json_of(start_entry(&app, TOKEN_A, task_id).await).await;
    let entry_id = entry["id"].as_str().unwrap();
    let stopped = send(
        &app,
        Method::PUT,
        &format!("/api/time-entries/{entry_id}/stop"),
        TOKEN_A,
        None,
    )
    .await;
    assert_eq!(stopped.status(), StatusCode::OK);

    let stats = send(&app, Method::GET, "/api/stats?range=today", TOKEN_A, None).await;
    assert_eq!(stats.status(), StatusCode::OK);
    let stats = json_of(stats).await;
    assert_eq!(stats["pending_tasks"], 1);
    assert_eq!(stats["completed_tasks"], 0);
    assert_eq!(stats["tasks_by_status"]["todo"], 1);
    assert_eq!(stats["tasks_by_priority"]["medium"], 1);
    // Sub-second session floors to zero hours.
    assert_eq!(stats["total_hours"], 0.0);
}

#[rstest]
#[tokio::test]
async fn it_should_keep_two_users_worlds_apart(app: Router) {
    let task_a = create_task(&app, TOKEN_A, "Draft report").await;
    let task_b = create_task(&app, TOKEN_B, "Plan sprint").await;

    // Both users may track at the same time.
    let started_a = start_entry(&app, TOKEN_A, task_a["id"].as_str().unwrap()).await;
    assert_eq!(started_a.status(), StatusCode::CREATED);
    let started_b = start_entry(&app, TOKEN_B, task_b["id"].as_str().unwrap()).await;
    assert_eq!(started_b.status(), StatusCode::CREATED);

    let listed_a = json_of(send(&app, Method::GET, "/api/tasks", TOKEN_A, None).await).await;
    assert_eq!(listed_a.as_array().unwrap().len(), 1);
    assert_eq!(listed_a[0]["title"], "Draft report");

    let task_a_id = task_a["id"].as_str().unwrap();
    let foreign_update = send(
        &app,
        Method::PUT,
        &format!("/api/tasks/{task_a_id}"),
        TOKEN_B,
        Some(r#"{"title":"Hijacked"}"#),
    )
    .await;
    assert_eq!(foreign_update.status(), StatusCode::NOT_FOUND);

    let entry_a = json_of(send(&app, Method::GET, "/api/time-entries/active", TOKEN_A, None).await)
        .await;
    let entry_a_id = entry_a["id"].as_str().unwrap();
    let foreign_delete = send(
        &app,
        Method::DELETE,
        &format!("/api/time-entries/{entry_a_id}"),
        TOKEN_B,
        None,
    )
    .await;
    assert_eq!(foreign_delete.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn it_should_expose_the_caller_profile(app: Router) {
    let response = send(&app, Method::GET, "/api/users/me", TOKEN_A, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let profile = json_of(response).await;
    assert_eq!(profile["user_id"], "user-fixed-0001");
    assert_eq!(profile["email"], "teddy@example.com");
}
