//! `/health` readiness reporting and the cross-cutting middleware every
//! game store response passes through.

mod common;

use axum::body::Body;
use axum::http::header::{ACCESS_CONTROL_EXPOSE_HEADERS, ORIGIN};
use axum::http::{Method, Request, StatusCode};
use common::{body_json, build_test_app, get};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_is_ok_with_seeded_catalog(pool: PgPool) {
    let response = get(build_test_app(pool), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["genres_seeded"], true);
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_is_degraded_without_genres(pool: PgPool) {
    sqlx::query("DELETE FROM genres").execute(&pool).await.unwrap();

    let json = body_json(get(build_test_app(pool), "/health").await).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["genres_seeded"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_is_degraded_when_database_is_gone(pool: PgPool) {
    let app = build_test_app(pool.clone());
    pool.close().await;

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
    assert_eq!(json["genres_seeded"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_storage_failure_on_games_is_sanitized_500(pool: PgPool) {
    let app = build_test_app(pool.clone());
    pool.close().await;

    let response = get(app, "/games").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({"error": "An internal error occurred", "code": "INTERNAL_ERROR"})
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unrouted_path_returns_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/consoles").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_game_responses_carry_request_id(pool: PgPool) {
    let response = get(build_test_app(pool), "/games").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id header")
        .to_str()
        .unwrap();
    assert_eq!(request_id.len(), 36);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_cross_origin_create_exposes_location(pool: PgPool) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/games")
        .header(ORIGIN, "http://localhost:5173")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "name": "Chrono",
                "genreId": 2,
                "price": 19.99,
                "releaseDate": "1995-03-11",
            })
            .to_string(),
        ))
        .unwrap();

    let response = build_test_app(pool).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let exposed = response
        .headers()
        .get(ACCESS_CONTROL_EXPOSE_HEADERS)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(exposed.eq_ignore_ascii_case("location"), "exposed: {exposed}");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_preflight_for_update_is_allowed(pool: PgPool) {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/games/1")
        .header(ORIGIN, "http://localhost:5173")
        .header("Access-Control-Request-Method", "PUT")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = build_test_app(pool).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let methods = response
        .headers()
        .get("access-control-allow-methods")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(methods.contains("PUT"), "allowed methods: {methods}");
}
