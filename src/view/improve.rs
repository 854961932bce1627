use crate::controller::context::DemoContext;
use crate::view::layout::page_shell;
use maud::{html, Markup};

pub fn render_improve_template(ctx: &DemoContext) -> Markup {
    let plan = &ctx.plan;

    let content = html! {
        h2 { (plan.title) }
        p class="subtle" { (plan.description) }
        p {
            "Estimated improvement: " strong { (plan.estimated_improvement) " strokes" }
            " over " (plan.timeframe) "."
        }

        @for area in &plan.focus_areas {
            div class="focus-area" {
                div class="focus-head" {
                    h3 { (area.name) }
                    span class=(format!("priority priority-{}", area.priority)) {
                        (area.priority) " priority"
                    }
                }
                table class="styled-table" {
                    thead {
                        tr {
                            th { "CURRENT" }
                            th { "PEER AVERAGE" }
                            th { "TARGET" }
                        }
                    }
                    tbody {
                        tr {
                            td { (area.current_stat) (area.unit) }
                            td { (area.peer_average) (area.unit) }
                            td { (area.target_stat) (area.unit) }
                        }
                    }
                }
                @for drill in &area.drills {
                    div class="drill" {
                        strong { (drill.name) }
                        p { (drill.description) }
                        p class="subtle" { (drill.duration) " \u{b7} " (drill.frequency) }
                    }
                }
            }
        }
    };

    page_shell("Improve", "/improve", content)
}
