#![cfg(test)]

use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub fn unique_email() -> String {
    let id = Uuid::now_v7().as_simple().to_string();
    format!("{}@test.example", &id[..16])
}

pub async fn insert_user(pool: &PgPool, name: &str, email: &str, avatar: Option<&str>) -> Uuid {
    sqlx::query_scalar::<_, Uuid>("INSERT INTO users (name, email, avatar) VALUES ($1, $2, $3) RETURNING id")
        .bind(name)
        .bind(email)
        .bind(avatar)
        .fetch_one(pool)
        .await
        .expect("insert user")
}

pub async fn delete_user(pool: &PgPool, user_id: Uuid) {
    sqlx::query("DELETE FROM profiles WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .await
        .expect("delete profile");
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(pool)
        .await
        .expect("delete user");
}

pub async fn user_exists(pool: &PgPool, user_id: Uuid) -> bool {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .expect("check user")
}

pub async fn profile_exists(pool: &PgPool, user_id: Uuid) -> bool {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM profiles WHERE user_id = $1)")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .expect("check profile")
}

pub async fn session_exists(pool: &PgPool, session_id: Uuid) -> bool {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM sessions WHERE id = $1)")
        .bind(session_id)
        .fetch_one(pool)
        .await
        .expect("check session")
}

pub fn session_cookie(session_id: Uuid, cookie_name: &str) -> String {
    format!("{}={}", cookie_name, session_id)
}

pub async fn insert_session(pool: &PgPool, user_id: Uuid) -> Uuid {
    sqlx::query_scalar::<_, Uuid>("INSERT INTO sessions (user_id) VALUES ($1) RETURNING id")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .expect("insert session")
}

pub async fn insert_expired_session(pool: &PgPool, user_id: Uuid, age_seconds: i64) -> Uuid {
    let started = Utc::now() - Duration::seconds(age_seconds);
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO sessions (user_id, created_at, last_activity) VALUES ($1, $2, $2) RETURNING id",
    )
    .bind(user_id)
    .bind(started)
    .fetch_one(pool)
    .await
    .expect("insert expired session")
}
