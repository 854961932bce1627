use crate::controller::context::DemoContext;
use crate::model::PeerMatch;
use crate::utils::{handicap_label, match_score_class};
use crate::view::layout::page_shell;
use maud::{html, Markup};

pub fn render_matching_template(ctx: &DemoContext, matches: &[PeerMatch]) -> Markup {
    let content = html! {
        h2 { "Golfers like you" }
        p class="subtle" {
            "Matched against " (ctx.data.users.len() - 1) " golfers at "
            (ctx.current_user.home_facility) " by handicap, swing speed, build, and shared weaknesses."
        }

        div class="match-grid" {
            @for m in matches {
                div class="match-card" {
                    div class="match-head" {
                        span class="match-name" { (m.user.name) }
                        span class=(format!("match-score {}", match_score_class(m.match_score))) {
                            (m.match_score) "%"
                        }
                    }
                    p class="subtle" {
                        (handicap_label(m.user.handicap)) " \u{b7} "
                        (m.user.handicap) " handicap \u{b7} "
                        (m.user.player_type)
                    }
                    ul class="match-reasons" {
                        @for reason in &m.match_reasons {
                            li { (reason) }
                        }
                    }
                    @if !m.shared_weaknesses.is_empty() {
                        p class="shared" {
                            "Working on: " (m.shared_weaknesses.join(", "))
                        }
                    }
                    p class="journey" { (m.their_journey) }
                }
            }
        }

        @if matches.is_empty() {
            p { "No peers to match against yet." }
        }
    };

    page_shell("Matching", "/matching", content)
}
