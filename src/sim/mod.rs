//! Strategy evaluation by repeated simulation.
//!
//! ## Overview
//!
//! - **simulate_one_game**: one game, every player using the same strategy
//! - **simulate_many**: a seeded batch, sequential or parallel
//! - **ScoreSummary**: mean, extremes and histogram of final scores
//! - **scores**: the comma-separated score list read by reporting tools
//!
//! ## Usage
//!
//! ```
//! use rust_climb::core::GameConfig;
//! use rust_climb::sim::{simulate_many, SimulationConfig};
//! use rust_climb::strategy::MinimizeHeightStrategy;
//!
//! let config = SimulationConfig::new()
//!     .with_iterations(4)
//!     .with_seed(1)
//!     .with_game(GameConfig::new().with_max_search_depth(3));
//! let batch = simulate_many(&MinimizeHeightStrategy, &config);
//!
//! assert_eq!(batch.scores.len(), 4);
//! println!("{}", batch.summary());
//! ```

pub mod runner;
pub mod scores;
pub mod summary;

pub use runner::{
    simulate_many, simulate_many_with, simulate_one_game, BatchResult, FailedGame, SimulationConfig,
};
pub use scores::{format_scores, parse_scores, read_scores, write_scores};
pub use summary::ScoreSummary;
