//! End-to-end tests against an in-process fake of the activities server.

use activity_signup::{
    Activity, ActivityApi, ActivityController, ApiConfig, Catalog, HttpActivityApi, MemorySurface,
    NoticeKind, NoticeTimings, RemovalTarget, ViewState,
};
use axum::extract::{OriginalUri, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct FakeServer {
    catalog: Catalog,
    fail_catalog: bool,
    /// Raw request targets, as received
    requests: Vec<String>,
}

type Shared = Arc<Mutex<FakeServer>>;

#[derive(Deserialize)]
struct EmailQuery {
    email: String,
}

fn detail(status: StatusCode, text: &str) -> Response {
    (status, Json(json!({ "detail": text }))).into_response()
}

async fn list_activities(State(state): State<Shared>, OriginalUri(uri): OriginalUri) -> Response {
    let mut server = state.lock().unwrap();
    server.requests.push(format!("GET {}", uri));
    if server.fail_catalog {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
    }
    Json(server.catalog.clone()).into_response()
}

async fn signup(
    State(state): State<Shared>,
    OriginalUri(uri): OriginalUri,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Response {
    let mut server = state.lock().unwrap();
    server.requests.push(format!("POST {}", uri));

    let Some(activity) = server.catalog.get_mut(&name) else {
        return detail(StatusCode::NOT_FOUND, "Activity not found");
    };
    if activity.participants.contains(&query.email) {
        return detail(StatusCode::BAD_REQUEST, "Student is already signed up");
    }
    activity.participants.push(query.email.clone());

    Json(json!({ "message": format!("Signed up {} for {}", query.email, name) })).into_response()
}

async fn unregister(
    State(state): State<Shared>,
    OriginalUri(uri): OriginalUri,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Response {
    let mut server = state.lock().unwrap();
    server.requests.push(format!("DELETE {}", uri));

    let Some(activity) = server.catalog.get_mut(&name) else {
        return detail(StatusCode::NOT_FOUND, "Activity not found");
    };
    let Some(pos) = activity.participants.iter().position(|p| *p == query.email) else {
        return detail(
            StatusCode::NOT_FOUND,
            "Student is not signed up for this activity",
        );
    };
    activity.participants.remove(pos);

    Json(json!({ "message": format!("Unregistered {} from {}", query.email, name) }))
        .into_response()
}

fn seed_catalog() -> Catalog {
    Catalog::new()
        .with(
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .participant("a@x.com")
            .participant("b@x.com"),
        )
        .with(
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            ),
        )
}

async fn spawn_server(state: Shared) -> String {
    let app = Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/:name/signup", post(signup))
        .route("/activities/:name/unregister", delete(unregister))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn setup() -> (
    ActivityController<HttpActivityApi, MemorySurface>,
    Shared,
) {
    let state: Shared = Arc::new(Mutex::new(FakeServer {
        catalog: seed_catalog(),
        ..FakeServer::default()
    }));
    let base_url = spawn_server(state.clone()).await;

    let api = HttpActivityApi::new(&ApiConfig {
        base_url,
        request_timeout_secs: 5,
    })
    .unwrap();
    let controller = ActivityController::new(api, MemorySurface::new(), NoticeTimings::default());

    (controller, state)
}

fn requests(state: &Shared) -> Vec<String> {
    state.lock().unwrap().requests.clone()
}

fn catalog_fetches(state: &Shared) -> usize {
    requests(state).iter().filter(|r| r.starts_with("GET ")).count()
}

#[tokio::test]
async fn test_start_renders_server_catalog_in_order() {
    let (controller, state) = setup().await;
    controller.start().await;

    let view_state = controller.surface().view_state();
    let view = view_state.catalog().expect("catalog rendered");
    assert_eq!(view.options, vec!["Chess Club", "Programming Class"]);
    assert_eq!(view.cards[0].spots_left, 10);
    assert_eq!(view.cards[1].availability_label(), "20 spots left");
    assert_eq!(requests(&state), vec!["GET /activities"]);
}

#[tokio::test]
async fn test_signup_flow_reloads_catalog() {
    let (controller, state) = setup().await;
    controller.start().await;

    controller
        .submit_signup("new student@x.com", "Chess Club")
        .await;

    let notice = controller.surface().last_notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.text, "Signed up new student@x.com for Chess Club");
    assert_eq!(controller.surface().form_resets(), 1);

    assert_eq!(
        requests(&state),
        vec![
            "GET /activities",
            "POST /activities/Chess%20Club/signup?email=new%20student%40x.com",
            "GET /activities",
        ]
    );

    let view_state = controller.surface().view_state();
    let card = &view_state.catalog().unwrap().cards[0];
    assert_eq!(card.spots_left, 9);
    assert_eq!(card.participants.last().unwrap().email, "new student@x.com");
}

#[tokio::test]
async fn test_duplicate_signup_shows_server_detail() {
    let (controller, state) = setup().await;
    controller.start().await;

    controller.submit_signup("a@x.com", "Chess Club").await;

    let notice = controller.surface().last_notice().unwrap();
    assert_eq!(notice.text, "Student is already signed up");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(catalog_fetches(&state), 1);
    assert_eq!(controller.surface().form_resets(), 0);
}

#[tokio::test]
async fn test_signup_for_unknown_activity() {
    let (controller, _state) = setup().await;

    controller.submit_signup("a@x.com", "Underwater Basket Weaving").await;

    assert_eq!(
        controller.surface().last_notice().unwrap().text,
        "Activity not found"
    );
}

#[tokio::test]
async fn test_removal_click_unregisters_and_reloads() {
    let (controller, state) = setup().await;
    controller.start().await;

    let id = RemovalTarget::new("Chess Club", "a@x.com").id();
    assert!(controller.handle_removal_click(&id).await);

    assert_eq!(
        requests(&state)[1],
        "DELETE /activities/Chess%20Club/unregister?email=a%40x.com"
    );
    assert_eq!(catalog_fetches(&state), 2);
    assert_eq!(
        controller.surface().last_notice().unwrap().text,
        "Unregistered a@x.com from Chess Club"
    );
    assert_eq!(
        controller.rendered_removals(),
        vec![RemovalTarget::new("Chess Club", "b@x.com")]
    );
}

#[tokio::test]
async fn test_unregister_non_member_keeps_view() {
    let (controller, state) = setup().await;
    controller.start().await;
    let before = controller.surface().view_state();

    controller
        .remove_participant("Chess Club", "ghost@x.com")
        .await;

    assert_eq!(
        controller.surface().last_notice().unwrap().text,
        "Student is not signed up for this activity"
    );
    assert_eq!(controller.surface().view_state(), before);
    assert_eq!(catalog_fetches(&state), 1);
}

#[tokio::test]
async fn test_catalog_error_status_renders_failure() {
    let (controller, state) = setup().await;
    state.lock().unwrap().fail_catalog = true;

    controller.start().await;

    assert_eq!(controller.surface().view_state(), ViewState::Failed);
    assert!(controller.rendered_removals().is_empty());
}

#[tokio::test]
async fn test_rejected_status_surfaces_from_client() {
    let (controller, _state) = setup().await;

    let err = controller
        .api()
        .unregister("Chess Club", "ghost@x.com")
        .await
        .unwrap_err();
    assert_eq!(err.detail(), Some("Student is not signed up for this activity"));
    assert!(!err.is_transport());
}

#[tokio::test]
async fn test_server_gone_is_transport_failure() {
    // Reserve a port, then release it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpActivityApi::new(&ApiConfig {
        base_url: format!("http://{}", addr),
        request_timeout_secs: 2,
    })
    .unwrap();
    let controller = ActivityController::new(api, MemorySurface::new(), NoticeTimings::default());

    controller.remove_participant("Chess Club", "a@x.com").await;

    let notice = controller.surface().last_notice().unwrap();
    assert_eq!(notice.text, "Failed to remove participant. Please try again.");
    assert_eq!(controller.surface().render_count(), 0);
}
