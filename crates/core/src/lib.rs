pub mod agent;
pub mod engine;
pub mod error;
pub mod grid;
pub mod mapgen;
pub mod session;
pub mod settings;
pub mod types;

pub use agent::Agent;
pub use engine::{
    Collection, DEFAULT_MAX_EXPANSIONS, Target, TurnEvent, decide_move, find_path, select_target,
    take_turn,
};
pub use error::ConfigError;
pub use grid::Grid;
pub use mapgen::{GenerationParams, GridGenerator, RepairReport, generate};
pub use session::{HumanAction, Margin, MatchOutcome, Session, TurnReport, Winner};
pub use settings::MatchSettings;
pub use types::*;
