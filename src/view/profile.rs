use crate::controller::context::DemoContext;
use crate::engine::seed_data::round2;
use crate::model::TrackManShot;
use crate::utils::{format_distance, format_speed, handicap_label};
use crate::view::layout::page_shell;
use chrono::NaiveDate;
use maud::{html, Markup};
use serde::Serialize;

/// Driver-only aggregates for the profile snapshot. Carry and best drive
/// round to whole yards, smash factor to two decimals.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct DriverSnapshot {
    pub avg_carry: f64,
    pub best_drive: f64,
    pub avg_smash_factor: f64,
}

pub fn driver_snapshot(shots: &[TrackManShot]) -> DriverSnapshot {
    let drives: Vec<&TrackManShot> = shots.iter().filter(|s| s.club == "Driver").collect();
    if drives.is_empty() {
        return DriverSnapshot {
            avg_carry: 0.0,
            best_drive: 0.0,
            avg_smash_factor: 0.0,
        };
    }
    let n = drives.len() as f64;
    DriverSnapshot {
        avg_carry: (drives.iter().map(|s| s.carry).sum::<f64>() / n).round(),
        best_drive: drives
            .iter()
            .map(|s| s.total_distance)
            .fold(0.0, f64::max)
            .round(),
        avg_smash_factor: round2(drives.iter().map(|s| s.smash_factor).sum::<f64>() / n),
    }
}

fn member_since(join_date: &str) -> String {
    NaiveDate::parse_from_str(join_date, "%Y-%m-%d")
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|_| join_date.to_string())
}

pub fn render_profile_template(ctx: &DemoContext) -> Markup {
    let user = &ctx.current_user;
    let driver = driver_snapshot(&ctx.user_shots);

    let content = html! {
        h2 { "Profile" }
        p class="subtle" { "Your golf identity and performance snapshot." }

        div class="profile-card" {
            h3 { (user.name) }
            p class="subtle" {
                (user.home_facility)
                " \u{b7} Member since " (member_since(&user.join_date))
                " \u{b7} " (user.email)
            }
            span class="player-type" { (user.player_type) }
        }

        div class="stat-row" {
            div class="stat-card" {
                span class="stat-value" { (user.handicap) }
                span class="stat-label" { "handicap (" (handicap_label(user.handicap)) ")" }
            }
            div class="stat-card" {
                span class="stat-value" { (format_speed(user.swing_speed)) }
                span class="stat-label" { "driver swing speed" }
            }
            div class="stat-card" {
                span class="stat-value" { (user.total_sessions) }
                span class="stat-label" { (user.total_shots) " shots across sessions" }
            }
            div class="stat-card" {
                span class="stat-value" { (user.target_handicap) }
                span class="stat-label" { "target \u{b7} " (user.primary_goal) }
            }
        }

        h3 { "Physical profile" }
        table class="styled-table" {
            thead {
                tr {
                    th { "AGE" }
                    th { "HEIGHT" }
                    th { "WEIGHT" }
                    th { "PLAYER TYPE" }
                }
            }
            tbody {
                tr {
                    td { (user.age) " years" }
                    td { (user.height / 12) "'" (user.height % 12) "\"" }
                    td { (user.weight) " lbs" }
                    td { (user.player_type) }
                }
            }
        }

        h3 { "Driver highlights" }
        table class="styled-table" {
            thead {
                tr {
                    th { "AVG CARRY" }
                    th { "BEST DRIVE" }
                    th { "CLUB SPEED" }
                    th { "SMASH FACTOR" }
                }
            }
            tbody {
                tr {
                    td { (format_distance(driver.avg_carry)) }
                    td { (format_distance(driver.best_drive)) }
                    td { (format_speed(user.swing_speed)) }
                    td { (driver.avg_smash_factor) }
                }
            }
        }

        div class="trait-grid" {
            div {
                h3 { "Strengths" }
                ul class="trait-list trait-good" {
                    @for s in &user.strengths {
                        li { (s) }
                    }
                }
            }
            div {
                h3 { "Areas to improve" }
                ul class="trait-list trait-bad" {
                    @for w in &user.weaknesses {
                        li { (w) }
                    }
                }
            }
        }
    };

    page_shell("Profile", "/profile", content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(carry: f64, total: f64, smash: f64) -> TrackManShot {
        let mut shot = TrackManShot::default();
        shot.club = "Driver".to_string();
        shot.carry = carry;
        shot.total_distance = total;
        shot.smash_factor = smash;
        shot
    }

    #[test]
    fn snapshot_only_counts_driver_shots() {
        let mut wedge = TrackManShot::default();
        wedge.club = "Pitching Wedge".to_string();
        wedge.carry = 110.0;
        wedge.total_distance = 115.0;
        wedge.smash_factor = 1.24;

        let shots = vec![drive(240.0, 262.0, 1.44), wedge, drive(250.0, 271.0, 1.48)];
        let snap = driver_snapshot(&shots);
        assert_eq!(snap.avg_carry, 245.0);
        assert_eq!(snap.best_drive, 271.0);
        assert_eq!(snap.avg_smash_factor, 1.46);
    }

    #[test]
    fn snapshot_is_zeroed_without_driver_shots() {
        let snap = driver_snapshot(&[]);
        assert_eq!(snap.avg_carry, 0.0);
        assert_eq!(snap.best_drive, 0.0);
        assert_eq!(snap.avg_smash_factor, 0.0);
    }
}
