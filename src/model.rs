use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Id-keyed collections produced by the generation pass.
pub type IdMap<V> = HashMap<String, V, RandomState>;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlayerType {
    Casual,
    Competitive,
    Beginner,
}

impl PlayerType {
    pub fn from_handicap(handicap: f64) -> Self {
        if handicap < 8.0 {
            PlayerType::Competitive
        } else if handicap > 25.0 {
            PlayerType::Beginner
        } else {
            PlayerType::Casual
        }
    }
}

impl fmt::Display for PlayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerType::Casual => write!(f, "casual"),
            PlayerType::Competitive => write!(f, "competitive"),
            PlayerType::Beginner => write!(f, "beginner"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub handicap: f64,
    pub age: u32,
    /// inches
    pub height: u32,
    /// lbs
    pub weight: u32,
    /// avg driver swing speed, mph
    pub swing_speed: f64,
    pub player_type: PlayerType,
    pub join_date: String,
    pub total_sessions: u32,
    /// back-filled once shot generation completes
    pub total_shots: u32,
    pub target_handicap: f64,
    pub primary_goal: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub home_facility: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub date: String,
    /// minutes
    pub duration: u32,
    pub bay_number: u8,
    pub shot_count: u32,
    pub avg_ball_speed: f64,
    pub avg_carry: f64,
    pub avg_club_speed: f64,
    /// max total distance among this session's Driver shots, 0 if none
    pub best_drive: f64,
    pub notes: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TrackManShot {
    pub id: String,
    pub session_id: String,
    pub shot_number: u32,
    pub club: String,
    // ball data
    pub ball_speed: f64,
    pub launch_angle: f64,
    pub launch_direction: f64,
    pub spin_rate: i32,
    pub spin_axis: f64,
    pub apex_height: f64,
    pub carry: f64,
    pub total_distance: f64,
    /// yards, + right / - left
    pub side_lateral: f64,
    pub landing_angle: f64,
    pub curve: f64,
    // club data
    pub club_speed: f64,
    pub attack_angle: f64,
    pub club_path: f64,
    pub face_angle: f64,
    pub face_to_path: f64,
    pub dynamic_loft: f64,
    pub spin_loft: f64,
    pub smash_factor: f64,
    /// 0-100
    pub efficiency: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClubStats {
    pub club: String,
    pub avg_carry: f64,
    pub avg_total: f64,
    pub avg_ball_speed: f64,
    pub avg_launch_angle: f64,
    pub avg_spin_rate: i32,
    pub avg_club_speed: f64,
    /// max carry minus min carry, yards
    pub dispersion: f64,
    pub shot_count: u32,
}

/// Signed deltas vs. a scratch-golfer baseline; negative means behind scratch.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct StrokesGained {
    pub off_the_tee: f64,
    pub approach: f64,
    pub around_the_green: f64,
    pub putting: f64,
    pub total: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Drill {
    pub name: String,
    pub description: String,
    pub duration: String,
    pub frequency: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FocusArea {
    pub name: String,
    pub current_stat: i32,
    pub target_stat: i32,
    pub unit: String,
    pub drills: Vec<Drill>,
    pub peer_average: i32,
    pub priority: Priority,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ImprovementPlan {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub based_on_peers: i64,
    pub focus_areas: Vec<FocusArea>,
    /// strokes
    pub estimated_improvement: f64,
    pub timeframe: String,
}

/// Computed on demand by the matching scorer, never persisted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PeerMatch {
    pub user: UserProfile,
    /// 0-100
    pub match_score: i32,
    pub match_reasons: Vec<String>,
    /// subject handicap minus candidate handicap; positive = candidate better
    pub improvement_delta: f64,
    pub shared_weaknesses: Vec<String>,
    pub their_journey: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BayBooking {
    pub id: String,
    pub bay_number: u8,
    pub date: String,
    /// 0-23
    pub hour: u8,
    pub user_id: String,
    pub user_name: String,
    pub created_at: String,
}

/// Everything one generation pass produces, keyed by user / session id.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DemoData {
    pub users: Vec<UserProfile>,
    pub sessions_by_user: IdMap<Vec<Session>>,
    pub shots_by_session: IdMap<Vec<TrackManShot>>,
    pub club_stats_by_user: IdMap<Vec<ClubStats>>,
    pub strokes_gained_by_user: IdMap<StrokesGained>,
    pub plans_by_user: IdMap<ImprovementPlan>,
}

impl DemoData {
    pub fn sessions_for(&self, user_id: &str) -> &[Session] {
        self.sessions_by_user
            .get(user_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn shots_for_session(&self, session_id: &str) -> &[TrackManShot] {
        self.shots_by_session
            .get(session_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
