use crate::engine::seed_data::round1;
use chrono::Weekday;
use std::ops::Range;

pub fn format_distance(yards: f64) -> String {
    format!("{} yds", yards.round() as i64)
}

pub fn format_speed(mph: f64) -> String {
    format!("{} mph", round1(mph))
}

pub fn format_degrees(deg: f64) -> String {
    let sign = if deg > 0.0 { "+" } else { "" };
    format!("{sign}{}\u{b0}", round1(deg))
}

pub fn handicap_label(handicap: f64) -> &'static str {
    if handicap < 5.0 {
        "Scratch"
    } else if handicap < 10.0 {
        "Single Digit"
    } else if handicap < 15.0 {
        "Low-Mid"
    } else if handicap < 20.0 {
        "Mid"
    } else if handicap < 25.0 {
        "High"
    } else {
        "Beginner"
    }
}

/// CSS class for a match-score badge.
pub fn match_score_class(score: i32) -> &'static str {
    if score >= 80 {
        "match-strong"
    } else if score >= 60 {
        "match-good"
    } else {
        "match-low"
    }
}

pub fn format_hour(hour: u8) -> String {
    match hour {
        0 => "12 AM".to_string(),
        h if h < 12 => format!("{h} AM"),
        12 => "12 PM".to_string(),
        h => format!("{} PM", h - 12),
    }
}

/// Open hours per day, half-open. Fixed facility policy: Sundays 8-20,
/// every other day 7-22.
pub fn facility_hours(day: Weekday) -> Range<u8> {
    match day {
        Weekday::Sun => 8..20,
        _ => 7..22,
    }
}

pub fn is_within_facility_hours(day: Weekday, hour: u8) -> bool {
    facility_hours(day).contains(&hour)
}
