//! Store-backed integration tests.
//!
//! `#[sqlx::test]` provisions a fresh database per test from `DATABASE_URL`
//! and applies the crate's migrations, so these exercise the real
//! uniqueness and ownership invariants.

use axum::http::StatusCode;
use axum_test::TestServer;
use pokedex_api::auth::{issue_token, verify_token};
use pokedex_api::pokeapi::PokeApiClient;
use pokedex_api::router::{build_router, AppState};
use sqlx::PgPool;

const SECRET: &str = "test-secret";

fn make_server(pool: PgPool) -> TestServer {
    let state = AppState {
        pool,
        jwt_secret: SECRET.to_owned(),
        pokeapi: PokeApiClient::new("http://127.0.0.1:1"),
    };
    TestServer::new(build_router(state)).unwrap()
}

async fn create_user(pool: &PgPool, email: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO users (email, password_hash) VALUES ($1, 'x') RETURNING id")
        .bind(email)
        .fetch_one(pool)
        .await
        .expect("insert user")
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_email_registration_returns_400(pool: PgPool) {
    let server = make_server(pool.clone());

    let first = server
        .post("/register")
        .json(&serde_json::json!({"email": "a@b.com", "password": "pw1"}))
        .await;
    assert_eq!(first.status_code(), StatusCode::OK);
    let body: serde_json::Value = first.json();
    assert_eq!(body["message"], "a@b.com created successfully");

    let second = server
        .post("/register")
        .json(&serde_json::json!({"email": "a@b.com", "password": "pw2"}))
        .await;
    assert_eq!(second.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = second.json();
    assert_eq!(body["message"], "Email already exists");

    // No duplicate row was created.
    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = 'a@b.com'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(users, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn login_issues_token_for_the_right_subject(pool: PgPool) {
    let server = make_server(pool.clone());

    server
        .post("/register")
        .json(&serde_json::json!({"email": "a@b.com", "password": "pw1"}))
        .await
        .assert_status_ok();

    let unknown = server
        .post("/login")
        .json(&serde_json::json!({"email": "nobody@b.com", "password": "pw1"}))
        .await;
    assert_eq!(unknown.status_code(), StatusCode::NOT_FOUND);

    let wrong = server
        .post("/login")
        .json(&serde_json::json!({"email": "a@b.com", "password": "pw2"}))
        .await;
    assert_eq!(wrong.status_code(), StatusCode::UNAUTHORIZED);

    let ok = server
        .post("/login")
        .json(&serde_json::json!({"email": "a@b.com", "password": "pw1"}))
        .await;
    assert_eq!(ok.status_code(), StatusCode::OK);
    let body: serde_json::Value = ok.json();
    assert_eq!(body["message"], "Login successful");

    let user_id: i64 = sqlx::query_scalar("SELECT id FROM users WHERE email = 'a@b.com'")
        .fetch_one(&pool)
        .await
        .unwrap();
    let claims = verify_token(SECRET, body["token"].as_str().unwrap()).unwrap();
    assert_eq!(claims.sub, user_id);
    let delta = claims.exp - chrono::Utc::now().timestamp();
    assert!((3500..=3600).contains(&delta));
}

#[sqlx::test(migrations = "./migrations")]
async fn repeated_capture_dedupes_the_pokemon_not_the_records(pool: PgPool) {
    let server = make_server(pool.clone());
    let ash = create_user(&pool, "ash@example.com").await;
    let misty = create_user(&pool, "misty@example.com").await;
    let ash_token = issue_token(SECRET, ash).unwrap();
    let misty_token = issue_token(SECRET, misty).unwrap();

    // Ash catches pikachu twice, Misty once.
    for token in [&ash_token, &ash_token, &misty_token] {
        let response = server
            .post("/protected/catch")
            .authorization_bearer(token)
            .json(&serde_json::json!({"name": "pikachu"}))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Pokemon caught");
    }

    // Exactly one pokemon row, shared across users and captures.
    let pokemons: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pokemons WHERE name = 'pikachu'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(pokemons, 1);

    // One caught record per capture event.
    let ash_records: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM caught_pokemons WHERE user_id = $1")
            .bind(ash)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(ash_records, 2);
    let misty_records: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM caught_pokemons WHERE user_id = $1")
            .bind(misty)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(misty_records, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn releasing_a_foreign_record_returns_404_and_keeps_it(pool: PgPool) {
    let server = make_server(pool.clone());
    let ash = create_user(&pool, "ash@example.com").await;
    let misty = create_user(&pool, "misty@example.com").await;
    let ash_token = issue_token(SECRET, ash).unwrap();
    let misty_token = issue_token(SECRET, misty).unwrap();

    let caught = server
        .post("/protected/catch")
        .authorization_bearer(&ash_token)
        .json(&serde_json::json!({"name": "snorlax"}))
        .await;
    assert_eq!(caught.status_code(), StatusCode::OK);
    let body: serde_json::Value = caught.json();
    let record_id = body["data"]["id"].as_i64().unwrap();

    // Another user's release attempt is indistinguishable from not-found.
    let foreign = server
        .delete(&format!("/protected/release/{record_id}"))
        .authorization_bearer(&misty_token)
        .await;
    assert_eq!(foreign.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = foreign.json();
    assert_eq!(body["message"], "Pokemon not found or not owned by user");

    // The record is untouched.
    let remaining: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM caught_pokemons WHERE id = $1")
            .bind(record_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(remaining, 1);

    // The owner can release it.
    let owned = server
        .delete(&format!("/protected/release/{record_id}"))
        .authorization_bearer(&ash_token)
        .await;
    assert_eq!(owned.status_code(), StatusCode::OK);
    let body: serde_json::Value = owned.json();
    assert_eq!(body["message"], "Pokemon is released");

    let remaining: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM caught_pokemons WHERE id = $1")
            .bind(record_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(remaining, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn empty_collection_lists_as_a_message(pool: PgPool) {
    let server = make_server(pool.clone());
    let ash = create_user(&pool, "ash@example.com").await;
    let token = issue_token(SECRET, ash).unwrap();

    let response = server
        .get("/protected/caught")
        .authorization_bearer(&token)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "No Pokémon found.");
}

#[sqlx::test(migrations = "./migrations")]
async fn listing_joins_records_with_their_pokemon(pool: PgPool) {
    let server = make_server(pool.clone());
    let ash = create_user(&pool, "ash@example.com").await;
    let token = issue_token(SECRET, ash).unwrap();

    for name in ["pikachu", "snorlax"] {
        server
            .post("/protected/catch")
            .authorization_bearer(&token)
            .json(&serde_json::json!({"name": name}))
            .await
            .assert_status_ok();
    }

    let response = server
        .get("/protected/caught")
        .authorization_bearer(&token)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["name"], "pikachu");
    assert_eq!(data[1]["name"], "snorlax");
}
