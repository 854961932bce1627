use crate::controller::booking::BAY_COUNT;
use crate::controller::context::DemoContext;
use crate::model::BayBooking;
use crate::utils::{facility_hours, format_hour};
use crate::view::layout::page_shell;
use chrono::{Datelike, Duration, NaiveDate, Utc};
use maud::{html, Markup};
use std::collections::HashMap;

pub fn render_schedule_template(
    ctx: &DemoContext,
    date: &str,
    bookings: &[BayBooking],
    open_slots: u32,
) -> Markup {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap_or_else(|_| Utc::now().date_naive());
    let hours = facility_hours(day.weekday());
    let prev = (day - Duration::days(1)).format("%Y-%m-%d").to_string();
    let next = (day + Duration::days(1)).format("%Y-%m-%d").to_string();

    let by_slot: HashMap<(u8, u8), &BayBooking> = bookings
        .iter()
        .map(|b| ((b.bay_number, b.hour), b))
        .collect();

    let content = html! {
        h2 { "Bay schedule" }
        div class="date-nav" {
            a href=(format!("/schedule?date={prev}")) { "\u{2190} " (prev) }
            strong { (day.format("%A, %B %e, %Y").to_string()) }
            a href=(format!("/schedule?date={next}")) { (next) " \u{2192}" }
        }
        p class="subtle" { (open_slots) " open slots today." }

        table class="styled-table schedule" {
            thead {
                tr {
                    th { "TIME" }
                    @for bay in 1..=BAY_COUNT {
                        th { "BAY " (bay) }
                    }
                }
            }
            tbody {
                @for hour in hours {
                    tr {
                        td class="hour" { (format_hour(hour)) }
                        @for bay in 1..=BAY_COUNT {
                            @match by_slot.get(&(bay, hour)) {
                                Some(b) if b.user_id == ctx.current_user.id => {
                                    td class="slot mine" {
                                        form method="post" action="/schedule/cancel" {
                                            input type="hidden" name="bay" value=(bay);
                                            input type="hidden" name="date" value=(date);
                                            input type="hidden" name="hour" value=(hour);
                                            button type="submit" { "Cancel" }
                                        }
                                    }
                                }
                                Some(b) => {
                                    td class="slot taken" { (b.user_name) }
                                }
                                None => {
                                    td class="slot open" {
                                        form method="post" action="/schedule/book" {
                                            input type="hidden" name="bay" value=(bay);
                                            input type="hidden" name="date" value=(date);
                                            input type="hidden" name="hour" value=(hour);
                                            button type="submit" { "Book" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    page_shell("Schedule", "/schedule", content)
}
