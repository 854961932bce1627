use crate::engine::matching::find_peer_matches;
use crate::engine::rng::SeededRng;
use crate::engine::seed_data::generate_demo_data;
use crate::model::{
    ClubStats, DemoData, ImprovementPlan, PeerMatch, Session, StrokesGained, TrackManShot,
    UserProfile,
};

/// One generated population plus the demo user's slice of it, built once at
/// startup and shared read-only across requests. Owning the data here (and
/// the seed alongside it) keeps regeneration and narrative draws explicit;
/// there is no module-level cache.
pub struct DemoContext {
    pub seed: u32,
    pub data: DemoData,
    pub current_user: UserProfile,
    pub user_sessions: Vec<Session>,
    pub user_shots: Vec<TrackManShot>,
    pub club_stats: Vec<ClubStats>,
    pub strokes_gained: StrokesGained,
    pub plan: ImprovementPlan,
    pub peer_matches: Vec<PeerMatch>,
}

impl DemoContext {
    pub fn new(seed: u32, user_count: usize, match_limit: usize) -> Self {
        let data = generate_demo_data(seed, user_count.max(1));
        let current_user = data.users[0].clone();

        let user_sessions = data.sessions_for(&current_user.id).to_vec();
        let user_shots: Vec<TrackManShot> = user_sessions
            .iter()
            .flat_map(|s| data.shots_for_session(&s.id).iter().cloned())
            .collect();
        let club_stats = data
            .club_stats_by_user
            .get(&current_user.id)
            .cloned()
            .unwrap_or_default();
        let strokes_gained = data
            .strokes_gained_by_user
            .get(&current_user.id)
            .cloned()
            .unwrap_or_default();
        let plan = data
            .plans_by_user
            .get(&current_user.id)
            .cloned()
            .unwrap_or_else(|| ImprovementPlan {
                id: String::new(),
                user_id: current_user.id.clone(),
                title: String::new(),
                description: String::new(),
                based_on_peers: 0,
                focus_areas: vec![],
                estimated_improvement: 0.0,
                timeframe: String::new(),
            });

        let peer_matches = find_peer_matches(
            &current_user,
            &data.users,
            match_limit,
            &mut SeededRng::new(seed),
        );

        DemoContext {
            seed,
            data,
            current_user,
            user_sessions,
            user_shots,
            club_stats,
            strokes_gained,
            plan,
            peer_matches,
        }
    }

    /// Recomputes matches at a different cap. The narrative generator is
    /// reseeded from the context seed, so output is stable per (seed, limit).
    pub fn matches_with_limit(&self, limit: usize) -> Vec<PeerMatch> {
        find_peer_matches(
            &self.current_user,
            &self.data.users,
            limit,
            &mut SeededRng::new(self.seed),
        )
    }
}
