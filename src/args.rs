use crate::engine::rng::DEMO_SEED;
use crate::engine::seed_data::DEMO_USER_COUNT;
use clap::Parser;

pub fn args_checks() -> Args {
    Args::parse()
}

#[derive(Parser, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8081)]
    pub port: u16,

    /// Seed for the demo data generator; same seed, same population
    #[arg(short, long, default_value_t = DEMO_SEED)]
    pub seed: u32,

    /// Number of synthetic golfers to generate
    #[arg(short = 'n', long, default_value_t = DEMO_USER_COUNT)]
    pub users: usize,

    /// Peer matches shown on the matching page
    #[arg(short = 'm', long, default_value_t = 12)]
    pub match_limit: usize,
}
