pub mod args;
pub mod model;
pub mod utils;
pub mod engine {
    pub mod matching;
    pub mod rng;
    pub mod seed_data;
}
pub mod controller {
    pub mod booking;
    pub mod context;
    pub mod pages;
}
pub mod view {
    pub mod dashboard;
    pub mod improve;
    pub mod index;
    pub mod layout;
    pub mod matching;
    pub mod profile;
    pub mod schedule;
    pub mod sessions;
}

// Re-export commonly used items for easier access in tests and other modules
pub use controller::context::DemoContext;
pub use engine::seed_data::generate_demo_data;
