use actix_web::{
    http::{header::ContentType, StatusCode},
    test,
    web::Data,
    App,
};
use serde_json::{json, Value};
use sqlx::{Pool, Postgres};
use tours_server::{configure_app, db::Database};

macro_rules! init_app {
    ($pool:expr) => {{
        let db = Data::new(Database::with_pool($pool));
        test::init_service(App::new().app_data(db).configure(configure_app)).await
    }};
}

macro_rules! send_json {
    ($app:expr, $req:expr, $body:expr) => {{
        let req = $req
            .insert_header(ContentType::json())
            .set_json($body)
            .to_request();
        test::call_service(&$app, req).await
    }};
}

macro_rules! create {
    ($app:expr, $uri:expr, $body:expr) => {{
        let resp = send_json!($app, test::TestRequest::post().uri($uri), $body);
        assert_eq!(resp.status(), StatusCode::CREATED, "creating {}", $uri);
        let body: Value = test::read_body_json(resp).await;
        body["id"].as_i64().unwrap()
    }};
}

macro_rules! get_json {
    ($app:expr, $uri:expr) => {{
        let req = test::TestRequest::get().uri(&$uri).to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "fetching {}", $uri);
        let body: Value = test::read_body_json(resp).await;
        body
    }};
}

#[sqlx::test]
async fn test_tour_round_trip_and_merge(pool: Pool<Postgres>) {
    let app = init_app!(pool);

    let user = create!(app, "/users", json!({ "email": "a@x.com", "name": "Alice" }));
    let tour = create!(
        app,
        "/tours",
        json!({
            "name": "SMU Campus Tour",
            "rating": 4.5,
            "description": "Walk around the campus",
            "link": "smu/cover",
            "user_id": user
        })
    );

    let body = get_json!(app, format!("/tours/{}", tour));
    assert_eq!(body["name"], "SMU Campus Tour");
    assert_eq!(body["rating"], 4.5);
    assert_eq!(body["description"], "Walk around the campus");
    assert_eq!(body["link"], "smu/cover");
    assert_eq!(body["user_id"], user);
    assert!(body["created_at"].is_string());

    let resp = send_json!(
        app,
        test::TestRequest::put().uri(&format!("/tours/{}", tour)),
        json!({ "rating": 5.0 })
    );
    assert_eq!(resp.status(), StatusCode::OK);

    let body = get_json!(app, format!("/tours/{}", tour));
    assert_eq!(body["rating"], 5.0);
    assert_eq!(body["name"], "SMU Campus Tour");

    let tours = get_json!(app, format!("/tours/user/{}", user));
    assert_eq!(tours.as_array().unwrap().len(), 1);

    let resp = send_json!(
        app,
        test::TestRequest::put().uri("/tours/99"),
        json!({ "rating": 1.0 })
    );
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn test_invalid_tour_rejected(pool: Pool<Postgres>) {
    let app = init_app!(pool);

    let user = create!(app, "/users", json!({ "email": "a@x.com" }));

    let resp = send_json!(
        app,
        test::TestRequest::post().uri("/tours"),
        json!({ "name": " ", "rating": 1.0, "description": "d", "link": "l", "user_id": user })
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // missing field
    let resp = send_json!(
        app,
        test::TestRequest::post().uri("/tours"),
        json!({ "name": "T", "description": "d", "link": "l", "user_id": user })
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/tours/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_itinerary_full_update(pool: Pool<Postgres>) {
    let app = init_app!(pool);

    let user = create!(app, "/users", json!({ "email": "a@x.com" }));
    let tour_body = |name: &str| {
        json!({ "name": name, "rating": 4.0, "description": "d", "link": "l", "user_id": user })
    };
    let first = create!(app, "/tours", tour_body("First"));
    let second = create!(app, "/tours", tour_body("Second"));

    let stop = create!(
        app,
        "/itineraries",
        json!({ "itinerary": "Gate", "tour_id": first })
    );

    let resp = send_json!(
        app,
        test::TestRequest::put().uri(&format!("/itineraries/{}", stop)),
        json!({ "itinerary": "Bridge", "tour_id": second })
    );
    assert_eq!(resp.status(), StatusCode::OK);

    let body = get_json!(app, format!("/itineraries/{}", stop));
    assert_eq!(body["itinerary"], "Bridge");
    assert_eq!(body["tour_id"], second);

    assert!(get_json!(app, format!("/tours/itineraries/{}", first))
        .as_array()
        .unwrap()
        .is_empty());

    // moving under a tour that does not exist
    let resp = send_json!(
        app,
        test::TestRequest::put().uri(&format!("/itineraries/{}", stop)),
        json!({ "itinerary": "Bridge", "tour_id": 99 })
    );
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // both fields are required
    let resp = send_json!(
        app,
        test::TestRequest::put().uri(&format!("/itineraries/{}", stop)),
        json!({ "itinerary": "Bridge" })
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_highlights_by_tour(pool: Pool<Postgres>) {
    let app = init_app!(pool);

    let user = create!(app, "/users", json!({ "email": "a@x.com" }));
    let tour = create!(
        app,
        "/tours",
        json!({ "name": "T", "rating": 4.0, "description": "d", "link": "l", "user_id": user })
    );

    for name in ["Library", "Lawn", "Chapel"] {
        create!(
            app,
            "/highlights",
            json!({ "highlight": name, "tour_id": tour })
        );
    }

    let body = get_json!(app, format!("/tours/highlights/{}", tour));
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["highlight"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Library", "Lawn", "Chapel"]);
}

#[sqlx::test]
async fn test_users_and_admins(pool: Pool<Postgres>) {
    let app = init_app!(pool);

    let admin = create!(
        app,
        "/users",
        json!({ "email": "root@x.com", "type": "admin", "name": "Root" })
    );
    let regular = create!(
        app,
        "/users",
        json!({
            "email": "a@x.com",
            "name": "Alice",
            "languageSpoken": "English",
            "selfIntro": "Hi"
        })
    );

    let admins = get_json!(app, "/users/admin".to_owned());
    let admins = admins.as_array().unwrap();
    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0]["id"], admin);

    let all = get_json!(app, "/users".to_owned());
    assert_eq!(all.as_array().unwrap().len(), 2);

    let resp = send_json!(
        app,
        test::TestRequest::put().uri(&format!("/users/{}", regular)),
        json!({ "name": "Alice B", "email": "ab@x.com" })
    );
    assert_eq!(resp.status(), StatusCode::OK);

    let body = get_json!(app, format!("/users/{}", regular));
    assert_eq!(body["name"], "Alice B");
    assert_eq!(body["email"], "ab@x.com");
    assert_eq!(body["languageSpoken"], "English");
    assert_eq!(body["selfIntro"], "Hi");
    assert_eq!(body["type"], "regular");
    assert!(body.get("password_hash").is_none());

    // taking another user's email
    let resp = send_json!(
        app,
        test::TestRequest::put().uri(&format!("/users/{}", regular)),
        json!({ "name": "Alice B", "email": "root@x.com" })
    );
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // name is required
    let resp = send_json!(
        app,
        test::TestRequest::put().uri(&format!("/users/{}", regular)),
        json!({ "email": "ab@x.com" })
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = send_json!(
        app,
        test::TestRequest::post().uri("/users"),
        json!({ "email": "a@x.com", "type": "superuser" })
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_video_update_keeps_counters(pool: Pool<Postgres>) {
    let app = init_app!(pool);

    let user = create!(app, "/users", json!({ "email": "a@x.com" }));
    let video = create!(
        app,
        "/videos",
        json!({
            "name": "Walk",
            "link": "walk.mp4",
            "p_link": "walk/cover",
            "description": "Morning walk",
            "view_count": 10,
            "user_id": user
        })
    );

    let resp = send_json!(
        app,
        test::TestRequest::put().uri(&format!("/videos/{}", video)),
        json!({ "name": "Evening walk", "view_count": 0, "thumb_up": 100 })
    );
    assert_eq!(resp.status(), StatusCode::OK);

    let body = get_json!(app, format!("/videos/{}", video));
    assert_eq!(body["name"], "Evening walk");
    assert_eq!(body["description"], "Morning walk");
    assert_eq!(body["link"], "walk.mp4");
    assert_eq!(body["view_count"], 10);
    assert_eq!(body["thumb_up"], 0);

    let videos = get_json!(app, format!("/videos/user/{}", user));
    assert_eq!(videos.as_array().unwrap().len(), 1);

    let resp = send_json!(
        app,
        test::TestRequest::post().uri("/videos"),
        json!({ "name": "Bad", "link": "b.mp4", "p_link": "b", "view_count": -1, "user_id": user })
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_comments(pool: Pool<Postgres>) {
    let app = init_app!(pool);

    let author = create!(app, "/users", json!({ "email": "a@x.com" }));
    let owner = create!(app, "/users", json!({ "email": "b@x.com" }));
    let video = create!(
        app,
        "/videos",
        json!({ "name": "v", "link": "v.mp4", "p_link": "v", "user_id": owner })
    );

    let comment = create!(
        app,
        "/comments",
        json!({ "description": "Nice", "video_id": video, "user_id": author })
    );

    let resp = send_json!(
        app,
        test::TestRequest::put().uri(&format!("/comments/{}", comment)),
        json!({ "description": "Very nice" })
    );
    assert_eq!(resp.status(), StatusCode::OK);

    let body = get_json!(app, format!("/comments/{}", comment));
    assert_eq!(body["description"], "Very nice");

    let by_video = get_json!(app, format!("/comments/video/{}", video));
    assert_eq!(by_video.as_array().unwrap().len(), 1);

    let by_author = get_json!(app, format!("/comments/user/{}", author));
    assert_eq!(by_author.as_array().unwrap().len(), 1);

    let by_owner = get_json!(app, format!("/comments/user/{}", owner));
    assert!(by_owner.as_array().unwrap().is_empty());

    let resp = send_json!(
        app,
        test::TestRequest::put().uri(&format!("/comments/{}", comment)),
        json!({ "description": "" })
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::delete()
        .uri(&format!("/comments/{}", comment))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/comments/{}", comment))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn test_download_missing_video(pool: Pool<Postgres>) {
    let app = init_app!(pool);

    let req = test::TestRequest::get()
        .uri("/videos/download/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
