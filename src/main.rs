use actix_files::Files;
use actix_web::web::Data;
use actix_web::{web, App, HttpResponse, HttpServer};
use crushers_golf::args;
use crushers_golf::controller::booking::{BookingLedger, BookingMap};
use crushers_golf::controller::pages;
use crushers_golf::DemoContext;
use std::sync::Arc;
use tokio::sync::RwLock;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::args_checks();

    // One generation pass per process; every request reads the same data.
    let ctx = Data::new(DemoContext::new(args.seed, args.users, args.match_limit));
    let bookings: BookingMap = Arc::new(RwLock::new(BookingLedger::new()));

    eprintln!(
        "crushers-golf: seed {}, {} golfers generated, listening on 0.0.0.0:{}",
        args.seed,
        ctx.data.users.len(),
        args.port
    );

    HttpServer::new(move || {
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
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", "./static")) // Serve the static files
    })
    .bind(("0.0.0.0", args.port))?
    .run()
    .await?;
    Ok(())
}
