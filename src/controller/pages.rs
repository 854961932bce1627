use crate::controller::booking::{BookingError, BookingMap};
use crate::controller::context::DemoContext;
use crate::view;
use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;

// Helper function to get a query parameter with a default value
fn get_param_str<'a>(query: &'a HashMap<String, String>, key: &str) -> &'a str {
    query.get(key).map(|s| s.as_str()).unwrap_or("")
}

fn flag(query: &HashMap<String, String>, key: &str) -> bool {
    match get_param_str(query, key) {
        "1" => true,
        "0" => false,
        other => other.parse().unwrap_or(false), // Default to false
    }
}

fn html(markup: maud::Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub async fn index(ctx: Data<DemoContext>) -> impl Responder {
    html(view::index::render_index_template(&ctx))
}

pub async fn dashboard(
    query: web::Query<HashMap<String, String>>,
    ctx: Data<DemoContext>,
) -> impl Responder {
    if flag(&query, "json") {
        return HttpResponse::Ok().json(json!({
            "user": ctx.current_user,
            "strokes_gained": ctx.strokes_gained,
            "club_stats": ctx.club_stats,
            "recent_sessions": ctx.user_sessions,
            "tracked_shots": ctx.user_shots.len(),
        }));
    }
    html(view::dashboard::render_dashboard_template(&ctx))
}

pub async fn sessions(
    query: web::Query<HashMap<String, String>>,
    ctx: Data<DemoContext>,
) -> impl Responder {
    if flag(&query, "json") {
        return HttpResponse::Ok().json(&ctx.user_sessions);
    }
    html(view::sessions::render_sessions_template(&ctx))
}

pub async fn matching(
    query: web::Query<HashMap<String, String>>,
    ctx: Data<DemoContext>,
) -> impl Responder {
    let limit_str = get_param_str(&query, "limit").trim();
    let matches = if limit_str.is_empty() {
        ctx.peer_matches.clone()
    } else {
        match limit_str.parse::<usize>() {
            Ok(limit) => ctx.matches_with_limit(limit),
            Err(_) => {
                return HttpResponse::BadRequest()
                    .json(json!({"error": "limit must be a non-negative integer"}));
            }
        }
    };

    if flag(&query, "json") {
        return HttpResponse::Ok().json(&matches);
    }
    html(view::matching::render_matching_template(&ctx, &matches))
}

pub async fn improve(
    query: web::Query<HashMap<String, String>>,
    ctx: Data<DemoContext>,
) -> impl Responder {
    if flag(&query, "json") {
        return HttpResponse::Ok().json(&ctx.plan);
    }
    html(view::improve::render_improve_template(&ctx))
}

pub async fn profile(
    query: web::Query<HashMap<String, String>>,
    ctx: Data<DemoContext>,
) -> impl Responder {
    if flag(&query, "json") {
        return HttpResponse::Ok().json(json!({
            "user": ctx.current_user,
            "driver": view::profile::driver_snapshot(&ctx.user_shots),
        }));
    }
    html(view::profile::render_profile_template(&ctx))
}

pub async fn schedule(
    query: web::Query<HashMap<String, String>>,
    ctx: Data<DemoContext>,
    bookings: Data<BookingMap>,
) -> impl Responder {
    let date = match get_param_str(&query, "date").trim() {
        "" => Utc::now().date_naive().format("%Y-%m-%d").to_string(),
        d => d.to_string(),
    };

    let ledger = bookings.read().await;
    let open = match ledger.open_slots(&date) {
        Ok(n) => n,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e.to_string()})),
    };
    let day_bookings: Vec<_> = ledger
        .bookings_for_day(&date)
        .into_iter()
        .cloned()
        .collect();

    html(view::schedule::render_schedule_template(
        &ctx,
        &date,
        &day_bookings,
        open,
    ))
}

#[derive(Deserialize)]
pub struct SlotForm {
    pub bay: u8,
    pub date: String,
    pub hour: u8,
}

fn booking_error_response(e: BookingError) -> HttpResponse {
    let body = json!({"error": e.to_string()});
    match e {
        BookingError::SlotTaken => HttpResponse::Conflict().json(body),
        BookingError::NotFound => HttpResponse::NotFound().json(body),
        BookingError::NotYourBooking => HttpResponse::Forbidden().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

pub async fn schedule_book(
    form: web::Form<SlotForm>,
    ctx: Data<DemoContext>,
    bookings: Data<BookingMap>,
) -> impl Responder {
    let mut ledger = bookings.write().await;
    match ledger.book(
        form.bay,
        &form.date,
        form.hour,
        &ctx.current_user.id,
        &ctx.current_user.name,
    ) {
        Ok(_) => HttpResponse::SeeOther()
            .insert_header(("Location", format!("/schedule?date={}", form.date)))
            .finish(),
        Err(e) => booking_error_response(e),
    }
}

pub async fn schedule_cancel(
    form: web::Form<SlotForm>,
    ctx: Data<DemoContext>,
    bookings: Data<BookingMap>,
) -> impl Responder {
    let mut ledger = bookings.write().await;
    match ledger.cancel(form.bay, &form.date, form.hour, &ctx.current_user.id) {
        Ok(_) => HttpResponse::SeeOther()
            .insert_header(("Location", format!("/schedule?date={}", form.date)))
            .finish(),
        Err(e) => booking_error_response(e),
    }
}
