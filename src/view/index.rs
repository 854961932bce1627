use crate::controller::context::DemoContext;
use crate::view::layout::page_shell;
use maud::{html, Markup};

pub fn render_index_template(ctx: &DemoContext) -> Markup {
    let total_shots: u32 = ctx.data.users.iter().map(|u| u.total_shots).sum();

    let content = html! {
        section class="hero" {
            h1 { "Know your game. Crush your handicap." }
            p {
                "Every swing in our bays is captured by TrackMan: ball speed, spin, "
                "carry, dispersion, and twenty other numbers that tell you exactly "
                "where strokes are hiding."
            }
            a class="cta" href="/dashboard" { "Open the demo dashboard" }
        }

        section class="stats-strip" {
            div class="stat-card" {
                span class="stat-value" { (ctx.data.users.len()) }
                span class="stat-label" { "golfers training here" }
            }
            div class="stat-card" {
                span class="stat-value" { (total_shots) }
                span class="stat-label" { "shots tracked" }
            }
            div class="stat-card" {
                span class="stat-value" { "3" }
                span class="stat-label" { "simulator bays" }
            }
        }

        section class="features" {
            div class="feature" {
                h3 { "Full TrackMan telemetry" }
                p { "Club and ball data for every shot, aggregated per club so you can see your real gapping." }
            }
            div class="feature" {
                h3 { "Peer matching" }
                p { "We pair you with golfers who share your handicap, swing speed, and weaknesses, and who have already made the jump you want." }
            }
            div class="feature" {
                h3 { "Improvement plans" }
                p { "A focus-area plan built from your weakest numbers, with drills and a realistic timeframe." }
            }
            div class="feature" {
                h3 { "Bay booking" }
                p { "Reserve an hour in any of our three bays, seven days a week." }
            }
        }
    };

    page_shell("Home", "/", content)
}
