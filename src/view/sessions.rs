use crate::controller::context::DemoContext;
use crate::utils::{format_distance, format_speed};
use crate::view::layout::page_shell;
use maud::{html, Markup};

pub fn render_sessions_template(ctx: &DemoContext) -> Markup {
    let content = html! {
        h2 { "Practice sessions" }
        p class="subtle" {
            (ctx.user_sessions.len()) " sessions on record, newest first."
        }

        @if ctx.user_sessions.is_empty() {
            p { "No sessions recorded yet." }
        } @else {
            table class="styled-table" {
                thead {
                    tr {
                        th { "DATE" }
                        th { "BAY" }
                        th { "DURATION" }
                        th { "SHOTS" }
                        th { "AVG BALL SPEED" }
                        th { "AVG CARRY" }
                        th { "AVG CLUB SPEED" }
                        th { "BEST DRIVE" }
                    }
                }
                tbody {
                    @for session in &ctx.user_sessions {
                        tr {
                            td { (session.date) }
                            td { "Bay " (session.bay_number) }
                            td { (session.duration) " min" }
                            td { (session.shot_count) }
                            td { (format_speed(session.avg_ball_speed)) }
                            td { (format_distance(session.avg_carry)) }
                            td { (format_speed(session.avg_club_speed)) }
                            td {
                                @if session.best_drive > 0.0 {
                                    (format_distance(session.best_drive))
                                } @else {
                                    "-"
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    page_shell("Sessions", "/sessions", content)
}
