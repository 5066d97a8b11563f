//! Autonomous agent decision making: path searches, target choice and the per-turn step.

pub mod controller;
pub mod pathfinding;
pub mod targeting;

pub use controller::{Collection, TurnEvent, collect_at, decide_move, plan, take_turn};
pub use pathfinding::{
    DEFAULT_MAX_EXPANSIONS, breadth_first, find_path, is_step_connected, manhattan,
};
pub use targeting::{Target, select_target};
