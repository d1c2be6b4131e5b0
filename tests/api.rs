use axum::{
    body::{to_bytes, Body, Bytes},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use folio_app::AppState;
use folio_kernel::settings::Settings;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app_with_delay(async_delay_ms: u64) -> (AppState, Router) {
    let mut settings = Settings::default();
    settings.catalog.async_delay_ms = async_delay_ms;

    let state = AppState::seeded();
    let registry = folio_app::build_registry(&state, &settings);
    (state, folio_http::build_router(&registry, &settings))
}

fn app() -> (AppState, Router) {
    app_with_delay(0)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Bytes) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Bytes) {
    send(app, Method::GET, uri, None).await
}

fn text(bytes: &Bytes) -> &str {
    std::str::from_utf8(bytes).unwrap()
}

fn json_of(bytes: &Bytes) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

fn titles(value: &Value) -> Vec<&str> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect()
}

async fn register(app: &Router, username: &str, password: &str) -> (StatusCode, Bytes) {
    send(
        app,
        Method::POST,
        "/register",
        Some(json!({ "username": username, "password": password })),
    )
    .await
}

async fn review_count(state: &AppState, isbn: &str, username: &str) -> usize {
    state
        .catalog
        .reviews(isbn)
        .await
        .unwrap()
        .iter()
        .filter(|r| r.username == username)
        .count()
}

#[tokio::test]
async fn lists_the_seeded_catalog_in_order() {
    let (_, app) = app();
    let (status, body) = get(&app, "/books").await;

    assert_eq!(status, StatusCode::OK);
    let books = json_of(&body);
    let isbns: Vec<_> = books
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["ISBN"].as_str().unwrap())
        .collect();
    assert_eq!(isbns, vec!["113", "221", "432", "531", "455"]);
    assert_eq!(books[3]["review"][0]["rating"], 5);
    assert_eq!(books[0]["username"], "jamesc");
}

#[tokio::test]
async fn isbn_lookup_returns_exactly_that_book() {
    let (_, app) = app();

    for isbn in ["113", "221", "432", "531", "455"] {
        let (status, body) = get(&app, &format!("/books/isbn/{isbn}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_of(&body)["ISBN"], isbn);
    }

    let (status, body) = get(&app, "/books/isbn/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(text(&body), "Book not found");
}

#[tokio::test]
async fn author_lookup_matches_promise_variant() {
    let (_, app) = app();

    for author in ["napoleon%20hill", "James%20Clear", "Nobody"] {
        let direct = get(&app, &format!("/books/author/{author}")).await;
        let deferred = get(&app, &format!("/promise/books/author/{author}")).await;
        assert_eq!(direct, deferred, "author {author}");
    }

    let (status, body) = get(&app, "/books/author/NAPOLEON%20HILL").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        titles(&json_of(&body)),
        vec!["Think and Grow Rich", "Outwitting the Devil"]
    );

    let (status, body) = get(&app, "/promise/books/author/Nobody").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(text(&body), "No books found for this author");
}

#[tokio::test]
async fn title_lookup_is_case_insensitive_substring() {
    let (_, app) = app();

    for uri in ["/books/title/habit", "/promise/books/title/habit"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            titles(&json_of(&body)),
            vec!["Atomic Habits", "The 7 Habits of Highly Effective People"]
        );
    }

    let (status, body) = get(&app, "/books/title/zzz").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(text(&body), "No books found for this title");
}

#[tokio::test]
async fn promise_isbn_lookup_rejects_with_plain_text() {
    let (_, app) = app();

    let (status, body) = get(&app, "/promise/books/isbn/531").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body)["author"], "Stephen R. Covey");

    let (status, body) = get(&app, "/promise/books/isbn/000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(text(&body), "Book not found");
}

#[tokio::test]
async fn reviews_of_a_book() {
    let (_, app) = app();

    let (status, body) = get(&app, "/books/113/review").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body), json!([]));

    let (status, body) = get(&app, "/books/531/review").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body).as_array().unwrap().len(), 2);

    let (status, body) = get(&app, "/books/000/review").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(text(&body), "Book not found");
}

#[tokio::test]
async fn registering_twice_conflicts() {
    let (_, app) = app();

    let (status, body) = register(&app, "alice", "pw").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text(&body), "User registered successfully");

    let (status, body) = register(&app, "alice", "another").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text(&body), "User already exists");
}

#[tokio::test]
async fn registration_requires_both_fields() {
    let (state, app) = app();

    for body in [
        Some(json!({ "username": "alice" })),
        Some(json!({ "password": "pw" })),
        Some(json!({ "username": "", "password": "pw" })),
        None,
    ] {
        let (status, response) = send(&app, Method::POST, "/register", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(text(&response), "Username and password required");
    }
    assert!(state.users.is_empty().await);
}

#[tokio::test]
async fn login_needs_exact_credentials() {
    let (_, app) = app();
    register(&app, "alice", "pw").await;

    let login = |body: Value| {
        let app = app.clone();
        async move { send(&app, Method::POST, "/login", Some(body)).await }
    };

    let (status, body) = login(json!({ "username": "alice", "password": "pw" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text(&body), "Login successful");

    for attempt in [
        json!({ "username": "alice", "password": "PW" }),
        json!({ "username": "bob", "password": "pw" }),
        json!({ "username": "alice" }),
    ] {
        let (status, body) = login(attempt).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(text(&body), "Invalid credentials");
    }
}

#[tokio::test]
async fn unregistered_reviewer_is_unauthorized() {
    let (state, app) = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/books/113/review",
        Some(json!({ "username": "ghost", "review": "Loved it" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(text(&body), "Unauthorized user");
    assert!(state.catalog.reviews("113").await.unwrap().is_empty());
}

#[tokio::test]
async fn add_review_validation_order() {
    let (_, app) = app();
    register(&app, "alice", "pw").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/books/000/review",
        Some(json!({ "username": "ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text(&body), "Username and review required");

    let (status, body) = send(
        &app,
        Method::POST,
        "/books/000/review",
        Some(json!({ "username": "ghost", "review": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(text(&body), "Book not found");
}

#[tokio::test]
async fn registered_user_adds_reviews_without_login() {
    let (_, app) = app();
    register(&app, "alice", "pw").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/books/221/review",
        Some(json!({ "username": "alice", "review": "Calming" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text(&body), "Review added");

    let (_, body) = get(&app, "/books/221/review").await;
    assert_eq!(
        json_of(&body),
        json!([{ "username": "alice", "review": "Calming" }])
    );
}

#[tokio::test]
async fn delete_removes_every_review_by_the_user() {
    let (state, app) = app();
    register(&app, "alice", "pw").await;

    for take in ["first take", "second take"] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/books/531/review",
            Some(json!({ "username": "alice", "review": take })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    assert_eq!(review_count(&state, "531", "alice").await, 2);

    let (status, body) = send(
        &app,
        Method::DELETE,
        "/books/531/review",
        Some(json!({ "username": "alice" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text(&body), "Review deleted");
    assert_eq!(review_count(&state, "531", "alice").await, 0);
    assert_eq!(state.catalog.reviews("531").await.unwrap().len(), 2);

    // Deleting again is still a success
    let (status, _) = send(
        &app,
        Method::DELETE,
        "/books/531/review",
        Some(json!({ "username": "alice" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn delete_failures() {
    let (state, app) = app();

    let (status, body) = send(
        &app,
        Method::DELETE,
        "/books/000/review",
        Some(json!({ "username": "user7" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(text(&body), "Book not found");

    let (status, body) = send(&app, Method::DELETE, "/books/531/review", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(text(&body), "Unauthorized user");

    let (status, _) = send(
        &app,
        Method::DELETE,
        "/books/531/review",
        Some(json!({ "username": "user7" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(state.catalog.reviews("531").await.unwrap().len(), 2);
}

#[tokio::test]
async fn async_listing_is_identical_but_delayed() {
    let (_, app) = app_with_delay(50);

    let started = std::time::Instant::now();
    let delayed = get(&app, "/async/books").await;
    assert!(started.elapsed() >= std::time::Duration::from_millis(50));

    let direct = get(&app, "/books").await;
    assert_eq!(delayed.0, StatusCode::OK);
    assert_eq!(delayed, direct);
}

#[tokio::test]
async fn async_listing_sees_review_mutations() {
    let (_, app) = app();
    register(&app, "alice", "pw").await;
    send(
        &app,
        Method::POST,
        "/books/455/review",
        Some(json!({ "username": "alice", "review": "Dark" })),
    )
    .await;

    let (_, body) = get(&app, "/async/books").await;
    assert_eq!(json_of(&body)[4]["review"][0]["username"], "alice");
}

#[tokio::test]
async fn health_and_docs_are_served() {
    let (_, app) = app();

    let (status, body) = get(&app, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text(&body), "ok");

    let (status, body) = get(&app, "/docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    let doc = json_of(&body);
    assert!(doc["paths"]["/books/{isbn}/review"]["delete"].is_object());
    assert!(doc["paths"]["/register"]["post"].is_object());
    assert!(doc["components"]["schemas"]["Book"].is_object());
}

#[tokio::test]
async fn isolated_states_do_not_share_users() {
    let (_, first) = app();
    let (_, second) = app();

    register(&first, "alice", "pw").await;
    let (status, _) = register(&second, "alice", "pw").await;
    assert_eq!(status, StatusCode::OK);
}
