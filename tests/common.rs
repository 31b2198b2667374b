#![allow(dead_code)]

use lesson_booking_backend::{
    api::router::create_router,
    config::Config,
    infra::repositories::{
        sqlite_booking_repo::SqliteBookingRepo, sqlite_class_repo::SqliteClassRepo,
        sqlite_instructor_repo::SqliteInstructorRepo,
    },
    state::AppState,
};

use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config { database_url: db_url, port: 0 };

        let state = Arc::new(AppState {
            config,
            instructor_repo: Arc::new(SqliteInstructorRepo::new(pool.clone())),
            class_repo: Arc::new(SqliteClassRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
        });

        let router = create_router(state);

        Self { router, pool, db_filename }
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_json(&self, uri: &str, payload: &Value) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn put_json(&self, uri: &str, payload: &Value) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn delete(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(Request::builder().method("DELETE").uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn create_instructor(&self, name: &str) -> Value {
        let res = self
            .post_json(
                "/api/v1/instructors",
                &json!({
                    "name": name,
                    "email": format!("{}@studio.example", name.to_lowercase().replace(' ', ".")),
                    "phone": "+1 555 0100",
                    "bio": "Teaches at the studio.",
                    "specialization": "Piano, Guitar",
                    "hourly_rate_cents": 6500
                }),
            )
            .await;
        assert!(res.status().is_success(), "create_instructor failed: {}", res.status());
        parse_body(res).await
    }

    /// Creates a class `days_from_now` days out (negative for a past slot).
    pub async fn create_class(
        &self,
        instructor_id: i64,
        instrument: &str,
        level: &str,
        days_from_now: i64,
    ) -> Value {
        let res = self
            .post_json(
                "/api/v1/classes",
                &json!({
                    "instructor_id": instructor_id,
                    "instrument": instrument,
                    "level": level,
                    "scheduled_at": (Utc::now() + Duration::days(days_from_now)).to_rfc3339(),
                    "price_cents": 5000,
                    "description": format!("{} lesson", instrument)
                }),
            )
            .await;
        assert!(res.status().is_success(), "create_class failed: {}", res.status());
        parse_body(res).await
    }

    /// Full-row update that only swaps the status, keeping the rest as created.
    pub async fn set_class_status(&self, class: &Value, status: &str) -> Value {
        let res = self
            .put_json(
                &format!("/api/v1/classes/{}", class["id"].as_i64().unwrap()),
                &json!({
                    "instructor_id": class["instructor_id"],
                    "instrument": class["instrument"],
                    "level": class["level"],
                    "scheduled_at": class["scheduled_at"],
                    "duration_minutes": class["duration_minutes"],
                    "price_cents": class["price_cents"],
                    "description": class["description"],
                    "status": status
                }),
            )
            .await;
        assert!(res.status().is_success(), "set_class_status failed: {}", res.status());
        parse_body(res).await
    }

    pub async fn book_class(&self, class_id: i64, student: &str) -> Response {
        self.post_json(
            "/api/v1/bookings",
            &json!({
                "class_id": class_id,
                "student_name": student,
                "student_email": format!("{}@mail.example", student.to_lowercase()),
                "student_phone": "+1 555 0199"
            }),
        )
        .await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
