use actix_web::web::Data;
use actix_web::{test, web, App, HttpResponse};
use crushers_golf::controller::booking::{BookingLedger, BookingMap};
use crushers_golf::controller::pages;
use crushers_golf::DemoContext;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;

macro_rules! demo_app {
    () => {{
        let ctx = Data::new(DemoContext::new(42, 50, 12));
        let bookings: BookingMap = Arc::new(RwLock::new(BookingLedger::new()));
        test::init_service(
            App::new()
                .app_data(ctx.clone())
                .app_data(Data::new(bookings.clone()))
                .route("/", web::get().to(pages::index))
                .route("/dashboard", web::get().to(pages::dashboard))
                .route("/sessions", web::get().to(pages::sessions))
                .route("/matching", web::get().to(pages::matching))
                .route("/improve", web::get().to(pages::improve))
                .route("/profile", web::get().to(pages::profile))
                .route("/schedule", web::get().to(pages::schedule))
                .route("/schedule/book", web::post().to(pages::schedule_book))
                .route("/schedule/cancel", web::post().to(pages::schedule_cancel))
                .route("/health", web::get().to(HttpResponse::Ok)),
        )
        .await
    }};
}

#[actix_web::test]
async fn health_endpoint_responds() {
    let app = demo_app!();
    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn landing_page_renders_html() {
    let app = demo_app!();
    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert!(resp.status().is_success());
    let body = test::read_body(resp).await;
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("Crushers Golf"));
    assert!(html.contains("simulator bays"));
}

#[actix_web::test]
async fn dashboard_json_returns_the_demo_user() {
    let app = demo_app!();
    let payload: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/dashboard?json=1").to_request(),
    )
    .await;

    assert_eq!(payload["user"]["id"], "demo-user-001");
    assert_eq!(payload["user"]["handicap"], 18.4);
    assert!(payload["club_stats"].as_array().is_some_and(|a| !a.is_empty()));
    assert!(payload["strokes_gained"]["total"].is_number());
}

#[actix_web::test]
async fn sessions_json_lists_the_demo_users_sessions() {
    let app = demo_app!();
    let payload: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/sessions?json=1").to_request(),
    )
    .await;

    let sessions = payload.as_array().expect("array of sessions");
    assert!(!sessions.is_empty());
    assert!(sessions.len() <= 20);
}

#[actix_web::test]
async fn matching_json_honors_the_limit_parameter() {
    let app = demo_app!();
    let payload: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/matching?json=1&limit=5")
            .to_request(),
    )
    .await;

    let matches = payload.as_array().expect("array of matches");
    assert_eq!(matches.len(), 5);
    for m in matches {
        let score = m["match_score"].as_i64().expect("integer score");
        assert!((0..=100).contains(&score));
    }

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/matching?limit=nope").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn improve_json_returns_the_plan() {
    let app = demo_app!();
    let payload: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/improve?json=1").to_request(),
    )
    .await;

    assert_eq!(payload["user_id"], "demo-user-001");
    let areas = payload["focus_areas"].as_array().expect("focus areas");
    assert_eq!(areas.len(), 3);
}

#[actix_web::test]
async fn profile_json_includes_the_driver_snapshot() {
    let app = demo_app!();
    let payload: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/profile?json=1").to_request(),
    )
    .await;

    assert_eq!(payload["user"]["id"], "demo-user-001");

    // recompute the driver aggregates from an identically seeded context
    let ctx = DemoContext::new(42, 50, 12);
    let drives: Vec<_> = ctx
        .user_shots
        .iter()
        .filter(|s| s.club == "Driver")
        .collect();
    assert!(!drives.is_empty());
    let expected_carry =
        (drives.iter().map(|s| s.carry).sum::<f64>() / drives.len() as f64).round();
    let expected_best = drives
        .iter()
        .map(|s| s.total_distance)
        .fold(0.0, f64::max)
        .round();

    assert_eq!(payload["driver"]["avg_carry"], expected_carry);
    assert_eq!(payload["driver"]["best_drive"], expected_best);
    let smash = payload["driver"]["avg_smash_factor"]
        .as_f64()
        .expect("smash factor");
    assert!((1.0..=1.6).contains(&smash));
}

#[actix_web::test]
async fn profile_page_renders_driver_highlights() {
    let app = demo_app!();
    let resp = test::call_service(&app, test::TestRequest::get().uri("/profile").to_request()).await;
    assert!(resp.status().is_success());
    let body = test::read_body(resp).await;
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("Driver highlights"));
    assert!(html.contains("Areas to improve"));
}

#[actix_web::test]
async fn booking_flow_rejects_conflicts_over_http() {
    let app = demo_app!();
    let form: Vec<(&str, &str)> = vec![("bay", "1"), ("date", "2025-06-01"), ("hour", "10")];

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/schedule/book")
            .set_form(&form)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 303);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/schedule/book")
            .set_form(&form)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 409);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/schedule/cancel")
            .set_form(&form)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 303);
}

#[actix_web::test]
async fn schedule_rejects_a_malformed_date() {
    let app = demo_app!();
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/schedule?date=junk")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
}
