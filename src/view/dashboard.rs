use crate::controller::context::DemoContext;
use crate::utils::{format_distance, format_speed, handicap_label};
use crate::view::layout::page_shell;
use maud::{html, Markup};

pub fn render_dashboard_template(ctx: &DemoContext) -> Markup {
    let user = &ctx.current_user;
    let sg = &ctx.strokes_gained;

    let content = html! {
        h2 { "Welcome back, " (user.name) }

        div class="stat-row" {
            div class="stat-card" {
                span class="stat-value" { (user.handicap) }
                span class="stat-label" { "handicap (" (handicap_label(user.handicap)) ")" }
            }
            div class="stat-card" {
                span class="stat-value" { (user.target_handicap) }
                span class="stat-label" { "target handicap" }
            }
            div class="stat-card" {
                span class="stat-value" { (format_speed(user.swing_speed)) }
                span class="stat-label" { "driver swing speed" }
            }
            div class="stat-card" {
                span class="stat-value" { (user.total_sessions) }
                span class="stat-label" { "sessions" }
            }
            div class="stat-card" {
                span class="stat-value" { (user.total_shots) }
                span class="stat-label" { "shots tracked" }
            }
        }

        h3 { "Strokes gained vs. scratch" }
        table class="styled-table" {
            thead {
                tr {
                    th { "OFF THE TEE" }
                    th { "APPROACH" }
                    th { "AROUND THE GREEN" }
                    th { "PUTTING" }
                    th { "TOTAL" }
                }
            }
            tbody {
                tr {
                    td { (sg.off_the_tee) }
                    td { (sg.approach) }
                    td { (sg.around_the_green) }
                    td { (sg.putting) }
                    td class="total" { (sg.total) }
                }
            }
        }

        h3 { "Club averages" }
        table class="styled-table" {
            thead {
                tr {
                    th { "CLUB" }
                    th { "SHOTS" }
                    th { "CARRY" }
                    th { "TOTAL" }
                    th { "BALL SPEED" }
                    th { "LAUNCH" }
                    th { "SPIN" }
                    th { "DISPERSION" }
                }
            }
            tbody {
                @for stat in &ctx.club_stats {
                    tr {
                        td { (stat.club) }
                        td { (stat.shot_count) }
                        td { (format_distance(stat.avg_carry)) }
                        td { (format_distance(stat.avg_total)) }
                        td { (format_speed(stat.avg_ball_speed)) }
                        td { (stat.avg_launch_angle) "\u{b0}" }
                        td { (stat.avg_spin_rate) " rpm" }
                        td { (format_distance(stat.dispersion)) }
                    }
                }
            }
        }

        h3 { "Recent sessions" }
        @if ctx.user_sessions.is_empty() {
            p { "No sessions yet. Book a bay to get started." }
        } @else {
            table class="styled-table" {
                thead {
                    tr {
                        th { "DATE" }
                        th { "BAY" }
                        th { "SHOTS" }
                        th { "AVG CARRY" }
                        th { "BEST DRIVE" }
                    }
                }
                tbody {
                    @for session in ctx.user_sessions.iter().take(5) {
                        tr {
                            td { (session.date) }
                            td { "Bay " (session.bay_number) }
                            td { (session.shot_count) }
                            td { (format_distance(session.avg_carry)) }
                            td { (format_distance(session.best_drive)) }
                        }
                    }
                }
            }
        }
    };

    page_shell("Dashboard", "/dashboard", content)
}
