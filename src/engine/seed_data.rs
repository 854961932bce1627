use crate::engine::rng::SeededRng;
use crate::model::{
    ClubStats, DemoData, Drill, FocusArea, IdMap, ImprovementPlan, PlayerType, Priority, Session,
    StrokesGained, TrackManShot, UserProfile,
};
use chrono::{Duration, Months, Utc};

pub const DEMO_USER_COUNT: usize = 50;
pub const HOME_FACILITY: &str = "Crushers - St. George";
pub const DEMO_USER_ID: &str = "demo-user-001";

/// Sessions per user are capped regardless of the profile's nominal total.
const MAX_SESSIONS: u32 = 20;

const FIRST_NAMES: &[&str] = &[
    "Jake", "Mike", "Ryan", "Chris", "Tyler", "Brandon", "Kyle", "Josh", "Matt", "Austin",
    "Sarah", "Emily", "Jessica", "Amanda", "Megan", "Lauren", "Ashley", "Nicole", "Brooke",
    "Taylor", "David", "James", "Robert", "Daniel", "Kevin", "Brian", "Steve", "Mark", "Tom",
    "Alex", "Rachel", "Samantha", "Katie", "Lisa", "Jennifer", "Maria", "Diana", "Tina",
    "Heather", "Kelly", "Nathan", "Ethan", "Caleb", "Noah", "Liam", "Mason", "Logan", "Luke",
    "Ben", "Ian",
];

const LAST_NAMES: &[&str] = &[
    "Johnson", "Smith", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Anderson", "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Thompson",
    "White", "Harris", "Clark", "Lewis", "Walker", "Hall", "Allen", "Young", "King", "Wright",
    "Scott", "Adams", "Nelson", "Hill", "Ramirez", "Campbell", "Mitchell", "Roberts", "Carter",
    "Phillips", "Evans", "Turner", "Torres", "Parker", "Collins", "Edwards", "Stewart", "Flores",
    "Morris", "Nguyen", "Murphy", "Rivera",
];

const GOALS: &[&str] = &[
    "Break 90 consistently",
    "Eliminate my slice",
    "Add 20 yards to my drive",
    "Get more consistent with irons",
    "Lower my handicap by 5 strokes",
    "Hit more greens in regulation",
    "Improve short game",
    "Better course management",
    "Break 80",
    "Compete in local tournaments",
    "Play scratch golf",
    "Improve wedge distances",
];

const STRENGTHS: &[&str] = &[
    "Driving distance", "Putting accuracy", "Iron consistency", "Short game touch",
    "Course management", "Mental game", "Wedge play", "Tee shots", "Fairway woods",
    "Lag putting", "Bunker play", "Recovery shots",
];

const WEAKNESSES: &[&str] = &[
    "Slice off the tee", "Inconsistent irons", "Poor bunker play", "Three-putting",
    "Approach shot accuracy", "Driver accuracy", "Short game chipping", "Distance control",
    "Hitting greens in regulation", "Fairway finding", "Wedge distance gaps", "Mental composure",
];

pub struct ClubProfile {
    pub name: &'static str,
    pub speed_mult: f64,
    pub launch_angle: (f64, f64),
    pub spin: (f64, f64),
    pub carry: (f64, f64),
}

pub const CLUB_PROFILES: &[ClubProfile] = &[
    ClubProfile { name: "Driver", speed_mult: 1.0, launch_angle: (8.0, 16.0), spin: (2000.0, 3200.0), carry: (180.0, 310.0) },
    ClubProfile { name: "3-Wood", speed_mult: 0.92, launch_angle: (10.0, 16.0), spin: (3000.0, 4200.0), carry: (170.0, 265.0) },
    ClubProfile { name: "5-Wood", speed_mult: 0.88, launch_angle: (12.0, 18.0), spin: (3500.0, 5000.0), carry: (155.0, 240.0) },
    ClubProfile { name: "4-Iron", speed_mult: 0.82, launch_angle: (12.0, 18.0), spin: (3800.0, 5500.0), carry: (140.0, 220.0) },
    ClubProfile { name: "5-Iron", speed_mult: 0.79, launch_angle: (13.0, 20.0), spin: (4200.0, 5800.0), carry: (130.0, 210.0) },
    ClubProfile { name: "6-Iron", speed_mult: 0.76, launch_angle: (15.0, 22.0), spin: (4800.0, 6500.0), carry: (120.0, 195.0) },
    ClubProfile { name: "7-Iron", speed_mult: 0.73, launch_angle: (16.0, 25.0), spin: (5500.0, 7500.0), carry: (110.0, 180.0) },
    ClubProfile { name: "8-Iron", speed_mult: 0.70, launch_angle: (18.0, 28.0), spin: (6500.0, 8500.0), carry: (100.0, 165.0) },
    ClubProfile { name: "9-Iron", speed_mult: 0.67, launch_angle: (20.0, 32.0), spin: (7500.0, 9500.0), carry: (90.0, 150.0) },
    ClubProfile { name: "PW", speed_mult: 0.64, launch_angle: (24.0, 36.0), spin: (8000.0, 10500.0), carry: (80.0, 140.0) },
    ClubProfile { name: "GW", speed_mult: 0.60, launch_angle: (26.0, 38.0), spin: (8500.0, 11000.0), carry: (70.0, 125.0) },
    ClubProfile { name: "SW", speed_mult: 0.55, launch_angle: (28.0, 42.0), spin: (9000.0, 12000.0), carry: (50.0, 100.0) },
    ClubProfile { name: "LW", speed_mult: 0.50, launch_angle: (30.0, 48.0), spin: (9500.0, 13000.0), carry: (30.0, 80.0) },
];

fn club_profile(club: &str) -> &'static ClubProfile {
    CLUB_PROFILES
        .iter()
        .find(|p| p.name == club)
        .unwrap_or(&CLUB_PROFILES[6]) // 7-Iron fallback
}

pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// 0.3-1.0 scalar from handicap; closer to 1 means better shot quality.
pub fn skill_factor(handicap: f64) -> f64 {
    (1.0 - handicap / 50.0).max(0.3)
}

pub fn generate_users(rng: &mut SeededRng, count: usize) -> Vec<UserProfile> {
    (0..count)
        .map(|i| {
            let handicap = rng.rand(2.0, 36.0);
            let swing_speed = if handicap < 12.0 {
                rng.rand(100.0, 118.0)
            } else if handicap < 22.0 {
                rng.rand(85.0, 105.0)
            } else {
                rng.rand(70.0, 92.0)
            };

            let age = rng.rand_int(18, 68) as u32;
            let player_type = PlayerType::from_handicap(handicap);

            let months_ago = rng.rand_int(1, 18) as u32;
            let join_date = Utc::now()
                .date_naive()
                .checked_sub_months(Months::new(months_ago))
                .unwrap_or_else(|| Utc::now().date_naive());

            let id = rng.next_id();
            let name = format!("{} {}", rng.pick(FIRST_NAMES), rng.pick(LAST_NAMES));
            let height = rng.rand_int(62, 76) as u32;
            let weight = rng.rand_int(130, 240) as u32;
            let total_sessions = rng.rand_int(5, 80) as u32;
            let target_handicap = (round1(handicap - rng.rand(3.0, 8.0))).max(0.0);
            let primary_goal = rng.pick(GOALS).to_string();
            let strength_count = rng.rand_int(2, 4) as usize;
            let strengths = rng
                .pick_n(STRENGTHS, strength_count)
                .iter()
                .map(|s| s.to_string())
                .collect();
            let weakness_count = rng.rand_int(2, 4) as usize;
            let weaknesses = rng
                .pick_n(WEAKNESSES, weakness_count)
                .iter()
                .map(|s| s.to_string())
                .collect();

            UserProfile {
                id,
                name,
                email: format!("user{i}@crushers.golf"),
                avatar: format!(
                    "https://api.dicebear.com/9.x/notionists/svg?seed={i}&backgroundColor=f0f0f0"
                ),
                handicap: round1(handicap),
                age,
                height,
                weight,
                swing_speed: round1(swing_speed),
                player_type,
                join_date: join_date.format("%Y-%m-%d").to_string(),
                total_sessions,
                total_shots: 0, // computed later
                target_handicap,
                primary_goal,
                strengths,
                weaknesses,
                home_facility: HOME_FACILITY.to_string(),
            }
        })
        .collect()
}

pub fn generate_shot(
    rng: &mut SeededRng,
    session_id: &str,
    shot_number: u32,
    club: &str,
    user_swing_speed: f64,
    user_handicap: f64,
) -> TrackManShot {
    let profile = club_profile(club);
    let skill = skill_factor(user_handicap);

    let club_speed = user_swing_speed * profile.speed_mult * rng.rand(0.95, 1.05);
    let smash_factor = rng.rand(1.35, 1.52) * (0.85 + skill * 0.15);
    let ball_speed = club_speed * smash_factor;

    let launch_angle = rng.rand(profile.launch_angle.0, profile.launch_angle.1);
    let spin_rate = rng.rand(profile.spin.0, profile.spin.1);

    let carry_base = profile.carry.0 + (profile.carry.1 - profile.carry.0) * skill;
    let carry = carry_base * rng.rand(0.9, 1.1);
    let total_distance = carry * rng.rand(1.02, 1.15);

    // higher handicap = wider lateral miss, up to +/- 25 yards
    let dispersion = (1.0 - skill) * 25.0;
    let side_lateral = rng.rand(-dispersion, dispersion);

    let attack_angle = if club == "Driver" {
        rng.rand(-3.0, 5.0)
    } else {
        rng.rand(-8.0, -1.0)
    };
    let club_path = rng.rand(-5.0, 5.0) * (1.0 - skill * 0.5);
    let face_angle = club_path + rng.rand(-3.0, 3.0) * (1.0 - skill * 0.3);
    let face_to_path = face_angle - club_path;

    let dynamic_loft = launch_angle + rng.rand(1.0, 5.0);
    let spin_loft = dynamic_loft - attack_angle;

    TrackManShot {
        id: rng.next_id(),
        session_id: session_id.to_string(),
        shot_number,
        club: club.to_string(),
        ball_speed: round1(ball_speed),
        launch_angle: round1(launch_angle),
        launch_direction: round1(rng.rand(-3.0, 3.0)),
        spin_rate: spin_rate.round() as i32,
        spin_axis: round1(rng.rand(-25.0, 25.0)),
        apex_height: round1(carry * rng.rand(0.08, 0.18)),
        carry: round1(carry),
        total_distance: round1(total_distance),
        side_lateral: round1(side_lateral),
        landing_angle: round1(rng.rand(30.0, 55.0)),
        curve: round1(rng.rand(-15.0, 15.0) * (1.0 - skill * 0.5)),
        club_speed: round1(club_speed),
        attack_angle: round1(attack_angle),
        club_path: round1(club_path),
        face_angle: round1(face_angle),
        face_to_path: round1(face_to_path),
        dynamic_loft: round1(dynamic_loft),
        spin_loft: round1(spin_loft),
        smash_factor: round2(smash_factor),
        efficiency: (skill * 100.0 * rng.rand(0.85, 1.1)).round() as i32,
    }
}

/// Generates a user's practice history: up to 20 sessions dated within the
/// last 180 days, 30-80 shots each across all clubs. Sessions come back
/// newest-first; shots are the flat list across all of them.
pub fn generate_sessions(
    rng: &mut SeededRng,
    user: &UserProfile,
    count: Option<u32>,
) -> (Vec<Session>, Vec<TrackManShot>) {
    let session_count = count.unwrap_or(user.total_sessions).min(MAX_SESSIONS);
    let mut sessions = Vec::new();
    let mut all_shots = Vec::new();
    let today = Utc::now().date_naive();

    for _ in 0..session_count {
        let session_id = rng.next_id();
        let days_ago = rng.rand_int(1, 180);
        let date = today - Duration::days(days_ago);

        let shot_count = rng.rand_int(30, 80) as u32;
        let mut session_shots = Vec::with_capacity(shot_count as usize);

        for s in 0..shot_count {
            let club = rng.pick(CLUB_PROFILES).name;
            session_shots.push(generate_shot(
                rng,
                &session_id,
                s + 1,
                club,
                user.swing_speed,
                user.handicap,
            ));
        }

        let best_drive = session_shots
            .iter()
            .filter(|s| s.club == "Driver")
            .map(|s| s.total_distance)
            .fold(0.0_f64, f64::max);

        let n = shot_count as f64;
        let avg = |f: fn(&TrackManShot) -> f64| {
            round1(session_shots.iter().map(f).sum::<f64>() / n)
        };

        sessions.push(Session {
            id: session_id,
            user_id: user.id.clone(),
            date: date.format("%Y-%m-%d").to_string(),
            duration: rng.rand_int(30, 120) as u32,
            bay_number: rng.rand_int(1, 3) as u8,
            shot_count,
            avg_ball_speed: avg(|s| s.ball_speed),
            avg_carry: avg(|s| s.carry),
            avg_club_speed: avg(|s| s.club_speed),
            best_drive: round1(best_drive),
            notes: String::new(),
        });

        all_shots.append(&mut session_shots);
    }

    sessions.sort_by(|a, b| b.date.cmp(&a.date));
    (sessions, all_shots)
}

/// Full aggregation over one user's shots, grouped by club. Recomputed from
/// scratch whenever the shot set changes; never partially updated.
pub fn compute_club_stats(shots: &[TrackManShot]) -> Vec<ClubStats> {
    let mut club_order: Vec<&str> = Vec::new();
    for shot in shots {
        if !club_order.contains(&shot.club.as_str()) {
            club_order.push(&shot.club);
        }
    }

    let mut stats: Vec<ClubStats> = club_order
        .iter()
        .map(|club| {
            let club_shots: Vec<&TrackManShot> =
                shots.iter().filter(|s| s.club == *club).collect();
            let n = club_shots.len() as f64;
            let avg =
                |f: fn(&TrackManShot) -> f64| round1(club_shots.iter().map(|s| f(s)).sum::<f64>() / n);

            let max_carry = club_shots.iter().map(|s| s.carry).fold(f64::MIN, f64::max);
            let min_carry = club_shots.iter().map(|s| s.carry).fold(f64::MAX, f64::min);

            ClubStats {
                club: club.to_string(),
                avg_carry: avg(|s| s.carry),
                avg_total: avg(|s| s.total_distance),
                avg_ball_speed: avg(|s| s.ball_speed),
                avg_launch_angle: avg(|s| s.launch_angle),
                avg_spin_rate: (club_shots.iter().map(|s| f64::from(s.spin_rate)).sum::<f64>() / n)
                    .round() as i32,
                avg_club_speed: avg(|s| s.club_speed),
                dispersion: round1(max_carry - min_carry),
                shot_count: club_shots.len() as u32,
            }
        })
        .collect();

    stats.sort_by(|a, b| {
        b.avg_carry
            .partial_cmp(&a.avg_carry)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    stats
}

/// Strokes gained is synthesized from handicap alone, not from shot data:
/// four negative-skewed draws scaled by handicap/20, summed into the total.
pub fn compute_strokes_gained(rng: &mut SeededRng, handicap: f64) -> StrokesGained {
    let factor = handicap / 20.0;
    let off_the_tee = round2(rng.rand(-2.5, 0.5) * factor);
    let approach = round2(rng.rand(-3.0, 0.3) * factor);
    let around_the_green = round2(rng.rand(-2.0, 0.3) * factor);
    let putting = round2(rng.rand(-1.5, 0.5) * factor);

    StrokesGained {
        off_the_tee,
        approach,
        around_the_green,
        putting,
        total: round2(off_the_tee + approach + around_the_green + putting),
    }
}

pub fn generate_improvement_plan(rng: &mut SeededRng, user: &UserProfile) -> ImprovementPlan {
    let focus_areas = user
        .weaknesses
        .iter()
        .take(3)
        .map(|weakness| {
            let current_stat = rng.rand(40.0, 70.0).round() as i32;
            let target_stat = rng.rand(75.0, 95.0).round() as i32;
            let peer_average = rng.rand(65.0, 85.0).round() as i32;
            let priority = if rng.rand(0.0, 1.0) > 0.6 {
                Priority::High
            } else if rng.rand(0.0, 1.0) > 0.3 {
                Priority::Medium
            } else {
                Priority::Low
            };

            FocusArea {
                name: weakness.clone(),
                current_stat,
                target_stat,
                unit: "%".to_string(),
                peer_average,
                priority,
                drills: vec![
                    Drill {
                        name: format!("{weakness} Focus Drill"),
                        description: format!(
                            "Targeted practice to improve your {}",
                            weakness.to_lowercase()
                        ),
                        duration: "15-20 min".to_string(),
                        frequency: "3x per week".to_string(),
                    },
                    Drill {
                        name: format!("{weakness} Challenge"),
                        description: format!(
                            "Progressive challenge to build consistency in {}",
                            weakness.to_lowercase()
                        ),
                        duration: "10-15 min".to_string(),
                        frequency: "2x per week".to_string(),
                    },
                ],
            }
        })
        .collect();

    ImprovementPlan {
        id: rng.next_id(),
        user_id: user.id.clone(),
        title: format!("Path to {} Handicap", user.target_handicap),
        description: format!(
            "Based on {} golfers who made similar improvements",
            rng.rand_int(8, 25)
        ),
        based_on_peers: rng.rand_int(8, 25),
        focus_areas,
        estimated_improvement: round1(rng.rand(2.0, 6.0)),
        timeframe: format!("{} months", rng.rand_int(2, 6)),
    }
}

fn demo_persona(generated: UserProfile) -> UserProfile {
    UserProfile {
        id: DEMO_USER_ID.to_string(),
        name: "You (Demo)".to_string(),
        email: "demo@crushers.golf".to_string(),
        handicap: 18.4,
        age: 32,
        height: 71,
        weight: 185,
        swing_speed: 95.2,
        player_type: PlayerType::Casual,
        total_sessions: 24,
        target_handicap: 12.0,
        primary_goal: "Break 80".to_string(),
        strengths: vec!["Driving distance".to_string(), "Mental game".to_string()],
        weaknesses: vec![
            "Inconsistent irons".to_string(),
            "Three-putting".to_string(),
            "Approach shot accuracy".to_string(),
        ],
        ..generated
    }
}

/// The full generation pass: a fresh generator seeded with `seed`, `count`
/// users (user 0 overwritten with the stable demo persona), and for each
/// user the sessions, shots, club stats, strokes gained, and improvement
/// plan. Same seed and count give bit-identical output.
pub fn generate_demo_data(seed: u32, count: usize) -> DemoData {
    let mut rng = SeededRng::new(seed);
    let mut users = generate_users(&mut rng, count);

    if let Some(first) = users.first_mut() {
        *first = demo_persona(first.clone());
    }

    let mut sessions_by_user: IdMap<Vec<Session>> = IdMap::default();
    let mut shots_by_session: IdMap<Vec<TrackManShot>> = IdMap::default();
    let mut club_stats_by_user: IdMap<Vec<ClubStats>> = IdMap::default();
    let mut strokes_gained_by_user: IdMap<StrokesGained> = IdMap::default();
    let mut plans_by_user: IdMap<ImprovementPlan> = IdMap::default();

    for user in &mut users {
        let (sessions, shots) = generate_sessions(&mut rng, user, None);

        club_stats_by_user.insert(user.id.clone(), compute_club_stats(&shots));
        strokes_gained_by_user.insert(
            user.id.clone(),
            compute_strokes_gained(&mut rng, user.handicap),
        );
        plans_by_user.insert(user.id.clone(), generate_improvement_plan(&mut rng, user));
        user.total_shots = shots.len() as u32;

        for shot in shots {
            shots_by_session
                .entry(shot.session_id.clone())
                .or_default()
                .push(shot);
        }
        sessions_by_user.insert(user.id.clone(), sessions);
    }

    DemoData {
        users,
        sessions_by_user,
        shots_by_session,
        club_stats_by_user,
        strokes_gained_by_user,
        plans_by_user,
    }
}
