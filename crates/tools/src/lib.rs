//! Command-line support for headless gemrush matches: settings files, the
//! human-side autopilot and the session leaderboard.

pub mod autopilot;
pub mod leaderboard;
pub mod settings;
