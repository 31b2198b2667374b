mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_booking_writes_ledger_and_flips_class() {
    let app = TestApp::new().await;
    let instructor = app.create_instructor("Lena").await;
    let class = app.create_class(instructor["id"].as_i64().unwrap(), "Piano", "BEGINNER", 1).await;
    let class_id = class["id"].as_i64().unwrap();

    let before = Utc::now();
    let res = app
        .post_json(
            "/api/v1/bookings",
            &json!({
                "class_id": class_id,
                "student_name": "Sam Rivers",
                "student_email": "sam@mail.example",
                "student_phone": "+1 555 0199",
                "notes": "Prefers jazz pieces"
            }),
        )
        .await;
    let after = Utc::now();

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;

    assert_eq!(body["status"], "CONFIRMED");
    assert_eq!(body["class_id"], class_id);
    assert_eq!(body["student_name"], "Sam Rivers");
    assert_eq!(body["student_email"], "sam@mail.example");
    assert_eq!(body["student_phone"], "+1 555 0199");
    assert_eq!(body["notes"], "Prefers jazz pieces");

    let booked_at: DateTime<Utc> = body["booked_at"].as_str().unwrap().parse().unwrap();
    assert!(booked_at >= before && booked_at <= after);

    let class = parse_body(app.get(&format!("/api/v1/classes/{}", class_id)).await).await;
    assert_eq!(class["status"], "BOOKED");
}

#[tokio::test]
async fn test_booking_without_notes() {
    let app = TestApp::new().await;
    let instructor = app.create_instructor("Lena").await;
    let class = app.create_class(instructor["id"].as_i64().unwrap(), "Piano", "BEGINNER", 1).await;

    let body = parse_body(app.book_class(class["id"].as_i64().unwrap(), "Bob").await).await;
    assert!(body["notes"].is_null());
}

#[tokio::test]
async fn test_booking_unknown_class_is_rejected() {
    let app = TestApp::new().await;
    let res = app.book_class(999, "Sam").await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let bookings = parse_body(app.get("/api/v1/bookings").await).await;
    assert_eq!(bookings.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_booking_rejected_for_every_ineligible_status() {
    let app = TestApp::new().await;
    let instructor = app.create_instructor("Lena").await;
    let id = instructor["id"].as_i64().unwrap();

    for status in ["BOOKED", "CANCELLED", "COMPLETED"] {
        let class = app.create_class(id, "Piano", "BEGINNER", 1).await;
        let class = app.set_class_status(&class, status).await;

        let res = app.book_class(class["id"].as_i64().unwrap(), "Sam").await;
        assert_eq!(res.status(), StatusCode::CONFLICT, "status {} should not be bookable", status);
    }

    let bookings = parse_body(app.get("/api/v1/bookings").await).await;
    assert_eq!(bookings.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_booking_past_class_is_rejected() {
    let app = TestApp::new().await;
    let instructor = app.create_instructor("Lena").await;
    let past = app.create_class(instructor["id"].as_i64().unwrap(), "Piano", "BEGINNER", -1).await;

    let res = app.book_class(past["id"].as_i64().unwrap(), "Sam").await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    // Nothing written, class untouched.
    let class = parse_body(app.get(&format!("/api/v1/classes/{}", past["id"].as_i64().unwrap())).await).await;
    assert_eq!(class["status"], "AVAILABLE");
    assert!(class["booking"].is_null());
}

#[tokio::test]
async fn test_cancel_reopens_class() {
    let app = TestApp::new().await;
    let instructor = app.create_instructor("Lena").await;
    let class = app.create_class(instructor["id"].as_i64().unwrap(), "Piano", "BEGINNER", 1).await;
    let class_id = class["id"].as_i64().unwrap();

    let booking = parse_body(app.book_class(class_id, "Sam").await).await;
    let booking_id = booking["id"].as_i64().unwrap();

    let res = app.post_json(&format!("/api/v1/bookings/{}/cancel", booking_id), &json!({})).await;
    assert_eq!(res.status(), StatusCode::OK);

    let booking = parse_body(app.get(&format!("/api/v1/bookings/{}", booking_id)).await).await;
    assert_eq!(booking["status"], "CANCELLED");

    let class = parse_body(app.get(&format!("/api/v1/classes/{}", class_id)).await).await;
    assert_eq!(class["status"], "AVAILABLE");
}

#[tokio::test]
async fn test_cancel_unknown_booking_is_silent() {
    let app = TestApp::new().await;
    let instructor = app.create_instructor("Lena").await;
    let class = app.create_class(instructor["id"].as_i64().unwrap(), "Piano", "BEGINNER", 1).await;
    app.book_class(class["id"].as_i64().unwrap(), "Sam").await;

    let res = app.post_json("/api/v1/bookings/555555/cancel", &json!({})).await;
    assert_eq!(res.status(), StatusCode::OK);

    // The existing booking and its class are untouched.
    let bookings = parse_body(app.get("/api/v1/bookings").await).await;
    assert_eq!(bookings[0]["status"], "CONFIRMED");
    let class = parse_body(app.get(&format!("/api/v1/classes/{}", class["id"].as_i64().unwrap())).await).await;
    assert_eq!(class["status"], "BOOKED");
}

#[tokio::test]
async fn test_get_booking_expands_class_and_instructor() {
    let app = TestApp::new().await;
    let instructor = app.create_instructor("Lena").await;
    let class = app.create_class(instructor["id"].as_i64().unwrap(), "Piano", "BEGINNER", 1).await;

    let booking = parse_body(app.book_class(class["id"].as_i64().unwrap(), "Sam").await).await;
    let body = parse_body(app.get(&format!("/api/v1/bookings/{}", booking["id"].as_i64().unwrap())).await).await;

    assert_eq!(body["class"]["instrument"], "Piano");
    assert_eq!(body["class"]["status"], "BOOKED");
    assert_eq!(body["instructor"]["name"], "Lena");
}

#[tokio::test]
async fn test_get_unknown_booking_is_404() {
    let app = TestApp::new().await;
    let res = app.get("/api/v1/bookings/999").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bookings_by_instructor_most_recent_first() {
    let app = TestApp::new().await;
    let lena = app.create_instructor("Lena").await;
    let marc = app.create_instructor("Marc").await;
    let lena_id = lena["id"].as_i64().unwrap();

    let c1 = app.create_class(lena_id, "Piano", "BEGINNER", 1).await;
    let c2 = app.create_class(lena_id, "Guitar", "BEGINNER", 2).await;
    let other = app.create_class(marc["id"].as_i64().unwrap(), "Drums", "BEGINNER", 1).await;

    let first = parse_body(app.book_class(c1["id"].as_i64().unwrap(), "Ana").await).await;
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    let second = parse_body(app.book_class(c2["id"].as_i64().unwrap(), "Ben").await).await;
    app.book_class(other["id"].as_i64().unwrap(), "Caro").await;

    let body = parse_body(app.get(&format!("/api/v1/instructors/{}/bookings", lena_id)).await).await;
    let ids: Vec<i64> = body.as_array().unwrap().iter().map(|b| b["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![second["id"].as_i64().unwrap(), first["id"].as_i64().unwrap()]);

    assert_eq!(body[0]["instructor"]["name"], "Lena");
}

#[tokio::test]
async fn test_list_all_bookings_unfiltered() {
    let app = TestApp::new().await;
    let lena = app.create_instructor("Lena").await;
    let marc = app.create_instructor("Marc").await;

    let c1 = app.create_class(lena["id"].as_i64().unwrap(), "Piano", "BEGINNER", 1).await;
    let c2 = app.create_class(marc["id"].as_i64().unwrap(), "Drums", "BEGINNER", 1).await;
    app.book_class(c1["id"].as_i64().unwrap(), "Ana").await;
    app.book_class(c2["id"].as_i64().unwrap(), "Ben").await;

    let body = parse_body(app.get("/api/v1/bookings").await).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}
