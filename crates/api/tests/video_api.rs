//! HTTP-level integration tests for the `/videos` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, keys, post_form, post_json, post_raw};
use serde_json::json;
use sqlx::PgPool;
use videostore_db::repositories::VideoRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn alf() -> serde_json::Value {
    json!({
        "title": "Alf the movie",
        "overview": "The most early 90s movie of all time",
        "release_date": "2025-12-16",
        "total_inventory": 6,
        "available_inventory": 6,
    })
}

async fn create(pool: &PgPool, body: serde_json::Value) -> i64 {
    let response = post_json(common::build_test_app(pool.clone()), "/videos", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

async fn seed(pool: &PgPool) {
    for (title, release_date) in [
        ("Wonder Woman 2", "2020-12-25"),
        ("Alf the movie", "2025-12-16"),
        ("Matrix", "1999-03-31"),
    ] {
        create(
            pool,
            json!({
                "title": title,
                "overview": "Synopsis",
                "release_date": release_date,
                "total_inventory": 10,
                "available_inventory": 4,
            }),
        )
        .await;
    }
}

async fn list(pool: &PgPool, uri: &str) -> Vec<serde_json::Value> {
    let response = get(common::build_test_app(pool.clone()), uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await.as_array().unwrap().clone()
}

// ---------------------------------------------------------------------------
// Index
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn index_lists_every_video_with_summary_fields(pool: PgPool) {
    seed(&pool).await;

    let videos = list(&pool, "/videos").await;
    assert_eq!(videos.len() as i64, VideoRepo::count(&pool).await.unwrap());
    for video in &videos {
        assert_eq!(
            keys(video),
            ["available_inventory", "id", "release_date", "title"]
        );
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn index_works_with_no_videos(pool: PgPool) {
    let videos = list(&pool, "/videos").await;
    assert!(videos.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn index_sorts_by_title(pool: PgPool) {
    seed(&pool).await;

    let videos = list(&pool, "/videos?sort=title").await;
    assert!(videos
        .windows(2)
        .all(|pair| pair[0]["title"].as_str() <= pair[1]["title"].as_str()));
    assert_eq!(videos[0]["title"], "Alf the movie");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn index_sorts_by_release_date(pool: PgPool) {
    seed(&pool).await;

    let videos = list(&pool, "/videos?sort=release_date").await;
    assert!(videos
        .windows(2)
        .all(|pair| pair[0]["release_date"].as_str() <= pair[1]["release_date"].as_str()));
    assert_eq!(videos[0]["release_date"], "1999-03-31");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn index_sorts_by_id_for_unknown_sort(pool: PgPool) {
    seed(&pool).await;

    for uri in ["/videos?sort=invalid", "/videos?sort=", "/videos"] {
        let videos = list(&pool, uri).await;
        assert_eq!(videos.len(), 3);
        assert!(videos
            .windows(2)
            .all(|pair| pair[0]["id"].as_i64() < pair[1]["id"].as_i64()));
        assert_eq!(videos[0]["title"], "Wonder Woman 2");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn index_title_sort_is_byte_order_regardless_of_case(pool: PgPool) {
    for title in ["alien", "Zorro", "Batman"] {
        create(
            &pool,
            json!({
                "title": title,
                "overview": "Synopsis",
                "release_date": "2001-01-01",
                "total_inventory": 1,
                "available_inventory": 1,
            }),
        )
        .await;
    }

    let videos = list(&pool, "/videos?sort=title").await;
    let titles: Vec<_> = videos.iter().map(|v| v["title"].as_str().unwrap()).collect();
    assert_eq!(titles, ["Batman", "Zorro", "alien"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn index_with_repeated_sort_uses_last_value(pool: PgPool) {
    seed(&pool).await;

    let videos = list(&pool, "/videos?sort=title&sort=release_date").await;
    assert_eq!(videos.len(), 3);
    assert_eq!(videos[0]["release_date"], "1999-03-31");

    let videos = list(&pool, "/videos?sort=release_date&sort=bogus").await;
    assert_eq!(videos[0]["title"], "Wonder Woman 2");
}

// ---------------------------------------------------------------------------
// Show
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn show_returns_detail_fields(pool: PgPool) {
    let overview = "Wonder Woman squares off against Maxwell Lord and the Cheetah, \
                    a villainess who possesses superhuman strength and agility.";
    let id = create(
        &pool,
        json!({
            "title": "Wonder Woman 2",
            "overview": overview,
            "release_date": "2020-12-25",
            "total_inventory": 100,
            "available_inventory": 100,
        }),
    )
    .await;

    let response = get(common::build_test_app(pool), &format!("/videos/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        keys(&json),
        [
            "available_inventory",
            "overview",
            "release_date",
            "title",
            "total_inventory"
        ]
    );
    assert_eq!(json["title"], "Wonder Woman 2");
    assert_eq!(json["overview"], overview);
    assert_eq!(json["release_date"], "2020-12-25");
    assert_eq!(json["total_inventory"], 100);
    assert_eq!(json["available_inventory"], 100);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn show_missing_video_returns_404(pool: PgPool) {
    for uri in [
        "/videos/-1",
        "/videos/999999",
        "/videos/not-a-number",
        "/videos/%FF",
    ] {
        let response = get(common::build_test_app(pool.clone()), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");

        let json = body_json(response).await;
        assert_eq!(json, json!({"errors": ["Not Found"]}));
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_valid_video(pool: PgPool) {
    let before = VideoRepo::count(&pool).await.unwrap();

    let response = post_json(common::build_test_app(pool.clone()), "/videos", alf()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    assert_eq!(VideoRepo::count(&pool).await.unwrap(), before + 1);
    let stored = VideoRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Alf the movie");
    assert_eq!(stored.total_inventory, 6);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_from_form_params(pool: PgPool) {
    let response = post_form(
        common::build_test_app(pool.clone()),
        "/videos",
        "title=Alf+the+movie&overview=The+most+early+90s+movie&release_date=2025-12-16\
         &total_inventory=6&available_inventory=6",
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(VideoRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_null_title_returns_400(pool: PgPool) {
    let mut body = alf();
    body["title"] = serde_json::Value::Null;

    let response = post_json(common::build_test_app(pool.clone()), "/videos", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["errors"]["title"], json!(["can't be blank"]));
    assert_eq!(VideoRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_nested_under_wrapper_key_is_rejected(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/videos",
        json!({ "video": alf() }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["errors"]["title"], json!(["can't be blank"]));
    assert_eq!(
        json["errors"]["total_inventory"],
        json!(["can't be blank", "is not a number"])
    );
    assert_eq!(VideoRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_reports_every_invalid_field(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/videos",
        json!({
            "title": "",
            "overview": "ok",
            "release_date": "2025-12-16",
            "total_inventory": -1,
            "available_inventory": 1.5,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(
        json,
        json!({"errors": {
            "available_inventory": ["must be an integer"],
            "title": ["can't be blank"],
            "total_inventory": ["must be greater than or equal to 0"],
        }})
    );
    assert_eq!(VideoRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_malformed_body_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_raw(app, "/videos", "application/json", "{not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["errors"].is_array());

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/videos", json!(["title"])).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(VideoRepo::count(&pool).await.unwrap(), 0);
}
