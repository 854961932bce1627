use crate::engine::rng::SeededRng;
use crate::engine::seed_data::round1;
use crate::model::{PeerMatch, UserProfile};

/// Scores every candidate against `user` and returns up to `limit` matches,
/// best first. There is no minimum-score filter; a 0-score candidate still
/// ranks, it just sorts last. The generator drives the narrative filler, so
/// a fixed seed gives identical output on every call.
pub fn find_peer_matches(
    user: &UserProfile,
    all_users: &[UserProfile],
    limit: usize,
    rng: &mut SeededRng,
) -> Vec<PeerMatch> {
    let mut scored: Vec<PeerMatch> = all_users
        .iter()
        .filter(|u| u.id != user.id)
        .map(|candidate| {
            let mut score = 0.0_f64;
            let mut reasons: Vec<String> = Vec::new();

            // handicap similarity (0-25 points)
            let handicap_diff = (user.handicap - candidate.handicap).abs();
            score += (25.0 - handicap_diff * 2.0).max(0.0);
            if handicap_diff < 5.0 {
                reasons.push(format!("Similar handicap ({})", candidate.handicap));
            }

            // swing speed similarity (0-20 points)
            let speed_diff = (user.swing_speed - candidate.swing_speed).abs();
            score += (20.0 - speed_diff).max(0.0);
            if speed_diff < 8.0 {
                reasons.push(format!("Similar swing speed ({} mph)", candidate.swing_speed));
            }

            // age similarity (0-10 points)
            let age_diff = (f64::from(user.age) - f64::from(candidate.age)).abs();
            score += (10.0 - age_diff * 0.5).max(0.0);
            if age_diff < 10.0 {
                reasons.push("Similar age group".to_string());
            }

            // physical similarity (0-10 points)
            let height_diff = (f64::from(user.height) - f64::from(candidate.height)).abs();
            let weight_diff = (f64::from(user.weight) - f64::from(candidate.weight)).abs();
            score += (10.0 - height_diff - weight_diff * 0.1).max(0.0);
            if height_diff < 3.0 && weight_diff < 20.0 {
                reasons.push("Similar build".to_string());
            }

            // shared weaknesses (0-25 points), the strongest pairing signal
            let shared_weaknesses: Vec<String> = user
                .weaknesses
                .iter()
                .filter(|w| candidate.weaknesses.contains(w))
                .cloned()
                .collect();
            score += ((shared_weaknesses.len() * 8) as f64).min(25.0);
            if !shared_weaknesses.is_empty() {
                let plural = if shared_weaknesses.len() > 1 { "es" } else { "" };
                reasons.push(format!("{} shared weakness{plural}", shared_weaknesses.len()));
            }

            // improvement bonus when the candidate sits below the user
            let improvement_delta = user.handicap - candidate.handicap;
            if improvement_delta > 0.0 {
                score += (improvement_delta * 2.0).min(10.0);
                reasons.push(format!("Improved {} strokes ahead", round1(improvement_delta)));
            }

            if candidate.home_facility == user.home_facility {
                score += 5.0;
                reasons.push("Same facility".to_string());
            }

            PeerMatch {
                user: candidate.clone(),
                match_score: (score.round() as i32).min(100),
                match_reasons: reasons,
                improvement_delta: round1(improvement_delta),
                shared_weaknesses,
                their_journey: journey_narrative(candidate, improvement_delta, rng),
            }
        })
        .collect();

    // stable sort keeps candidate iteration order on score ties
    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    scored.truncate(limit);
    scored
}

fn journey_narrative(user: &UserProfile, delta: f64, rng: &mut SeededRng) -> String {
    let first_name = user.name.split(' ').next().unwrap_or(&user.name);

    if delta > 5.0 {
        let focus = user
            .strengths
            .first()
            .map(|s| s.to_lowercase())
            .unwrap_or_else(|| "consistent practice".to_string());
        let months = (rng.next_f64() * 8.0 + 3.0).round() as i64;
        return format!(
            "{first_name} was once a {} handicap and dropped to {} over {months} months by focusing on {focus}.",
            (user.handicap + delta).round() as i64,
            user.handicap,
        );
    }
    if delta > 0.0 {
        let focus = user
            .strengths
            .first()
            .map(|s| s.to_lowercase())
            .unwrap_or_else(|| "dedicated practice sessions".to_string());
        return format!(
            "{first_name} is currently working through similar challenges and has made steady progress with {focus}.",
        );
    }
    format!(
        "{first_name} is on a similar journey and could be a great practice partner to push each other forward."
    )
}
