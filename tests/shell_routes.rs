mod common;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use axum_extra::extract::cookie::Key;
use common::MockDb;
use dbms_projects::{AppState, app_router};
use tower::ServiceExt;

fn app(db: &MockDb) -> Router {
    let db = db.clone();
    app_router(AppState::new(Key::generate(), move || db.clone()))
}

fn form_post(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).expect("failed to build request")
}

async fn body_string(resp: Response) -> String {
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(body.to_vec()).expect("response body was not utf-8")
}

/// Press one navigation button and return the session cookie the server set.
async fn press(app: &Router, event: &str, cookie: Option<&str>) -> String {
    let resp = app
        .clone()
        .oneshot(form_post("/navigate", &format!("event={event}"), cookie))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], "/");
    session_cookie(&resp)
}

/// `name=value` part of the session cookie a response sets.
fn session_cookie(resp: &Response) -> String {
    let set_cookie = resp.headers()[header::SET_COOKIE]
        .to_str()
        .expect("set-cookie was not ascii");
    set_cookie
        .split(';')
        .next()
        .expect("empty set-cookie")
        .to_string()
}

async fn title(app: &Router, cookie: Option<&str>) -> String {
    let resp = app.clone().oneshot(get("/", cookie)).await.expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_string(resp).await;
    let start = html.find("<h1>").expect("no title") + "<h1>".len();
    let end = html.find("</h1>").expect("no title");
    html[start..end].to_string()
}

#[tokio::test]
async fn new_session_starts_at_home() {
    let app = app(&MockDb::default());
    assert_eq!(title(&app, None).await, "DBMS Projects");
}

#[tokio::test]
async fn navigation_walks_home_dashboard_records_and_back() {
    let app = app(&MockDb::default());

    let cookie = press(&app, "get_started", None).await;
    assert_eq!(title(&app, Some(&cookie)).await, "Dashboard");

    let cookie = press(&app, "see_all_records", Some(&cookie)).await;
    assert_eq!(title(&app, Some(&cookie)).await, "Display All Records");

    let cookie = press(&app, "back", Some(&cookie)).await;
    assert_eq!(title(&app, Some(&cookie)).await, "Dashboard");

    let cookie = press(&app, "back", Some(&cookie)).await;
    assert_eq!(title(&app, Some(&cookie)).await, "DBMS Projects");
}

#[tokio::test]
async fn event_not_offered_on_home_does_not_skip_ahead() {
    let app = app(&MockDb::default());
    let cookie = press(&app, "see_all_records", None).await;
    assert_eq!(title(&app, Some(&cookie)).await, "DBMS Projects");
}

#[tokio::test]
async fn unknown_event_is_a_bad_request() {
    let app = app(&MockDb::default());
    let resp = app
        .oneshot(form_post("/navigate", "event=teleport", None))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_string(resp).await.contains("UNKNOWN_EVENT"));
}

#[tokio::test]
async fn tampered_cookie_falls_back_to_home() {
    let app = app(&MockDb::default());
    assert_eq!(
        title(&app, Some("current_page=dashboard")).await,
        "DBMS Projects"
    );
}

#[tokio::test]
async fn empty_table_name_never_reaches_the_database() {
    let db = MockDb::users();
    let resp = app(&db)
        .oneshot(form_post("/records", "table_name=", None))
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_string(resp).await;
    assert!(html.contains("<p class=\"error\">Please enter a valid table name.</p>"));
    assert_eq!(db.opened(), 0);
}

#[tokio::test]
async fn records_form_renders_users_table() {
    let db = MockDb::users();
    let resp = app(&db)
        .oneshot(form_post("/records", "table_name=users", None))
        .await
        .expect("request failed");

    let html = body_string(resp).await;
    assert!(html.contains("<th>id</th><th>name</th>"));
    assert!(html.contains("<td>1</td><td>a</td>"));
    assert!(html.contains("<td>2</td><td>b</td>"));
    assert_eq!(html.matches("<tr>").count(), 3);
    assert_eq!((db.opened(), db.closed()), (1, 1));
}

#[tokio::test]
async fn records_form_reports_empty_tables() {
    let db = MockDb::default().with_table("audit", &["id", "at"], &[]);
    let resp = app(&db)
        .oneshot(form_post("/records", "table_name=audit", None))
        .await
        .expect("request failed");

    let html = body_string(resp).await;
    assert!(html.contains("No records found in the table."));
    assert!(!html.contains("<table>"));
}

#[tokio::test]
async fn records_form_shows_driver_error_verbatim() {
    let db = MockDb::users();
    let resp = app(&db)
        .oneshot(form_post("/records", "table_name=orders", None))
        .await
        .expect("request failed");

    let html = body_string(resp).await;
    assert!(html.contains("<p class=\"error\">Database error:"));
    assert!(html.contains("Table &#39;shop.orders&#39; doesn&#39;t exist"));
    assert_eq!((db.opened(), db.closed()), (1, 1));
}

#[tokio::test]
async fn add_record_form_inserts_one_row() {
    let db = MockDb::users();
    let resp = app(&db)
        .oneshot(form_post(
            "/add-record",
            "table_name=users&values=3%0D%0Ac",
            None,
        ))
        .await
        .expect("request failed");

    let html = body_string(resp).await;
    assert!(html.contains("<p class=\"success\">Record added successfully</p>"));
    assert_eq!(db.rows("users").len(), 3);
    assert_eq!(db.rows("users")[2], ["3", "c"]);
}

#[tokio::test]
async fn add_record_form_requires_values() {
    let db = MockDb::users();
    let resp = app(&db)
        .oneshot(form_post("/add-record", "table_name=users&values=", None))
        .await
        .expect("request failed");

    let html = body_string(resp).await;
    assert!(html.contains("Please enter at least one value."));
    assert_eq!(db.opened(), 0);
}

#[tokio::test]
async fn submitting_a_form_moves_the_session_to_its_page() {
    let db = MockDb::users();
    let app = app(&db);

    let resp = app
        .clone()
        .oneshot(form_post("/records", "table_name=users", None))
        .await
        .expect("request failed");
    let cookie = session_cookie(&resp);
    assert_eq!(title(&app, Some(&cookie)).await, "Display All Records");

    let resp = app
        .clone()
        .oneshot(form_post("/add-record", "table_name=users&values=", Some(&cookie)))
        .await
        .expect("request failed");
    let cookie = session_cookie(&resp);
    assert_eq!(title(&app, Some(&cookie)).await, "Add a New Record");

    let cookie = press(&app, "back", Some(&cookie)).await;
    assert_eq!(title(&app, Some(&cookie)).await, "Dashboard");
}

#[tokio::test]
async fn api_returns_records_as_json() {
    let db = MockDb::users();
    let resp = app(&db)
        .oneshot(get("/api/records/users", None))
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value =
        serde_json::from_str(&body_string(resp).await).expect("body was not json");
    assert_eq!(
        json,
        serde_json::json!({"columns": ["id", "name"], "rows": [["1", "a"], ["2", "b"]]})
    );
}

#[tokio::test]
async fn api_rejects_invalid_table_names() {
    let db = MockDb::users();
    let resp = app(&db)
        .oneshot(get("/api/records/bad-name", None))
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_string(resp).await.contains(r#""code":"INVALID_INPUT""#));
    assert_eq!(db.opened(), 0);
}

#[tokio::test]
async fn health_does_not_touch_the_database() {
    let db = MockDb::refusing_connections("down");
    let resp = app(&db)
        .oneshot(get("/health", None))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "ok");
}
