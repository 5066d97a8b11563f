//! Match configuration: a difficulty preset plus optional overrides.

use serde::{Deserialize, Serialize};

use crate::engine::DEFAULT_MAX_EXPANSIONS;
use crate::error::ConfigError;
use crate::mapgen::GenerationParams;
use crate::types::{Difficulty, Strategy};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchSettings {
    pub difficulty: Difficulty,
    pub strategy: Strategy,
    pub max_expansions: usize,
    pub seed: Option<u64>,
    pub size: Option<usize>,
    pub wall_probability: Option<f64>,
    pub resource_probability: Option<f64>,
    pub move_limit: Option<u32>,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            strategy: Strategy::default(),
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            seed: None,
            size: None,
            wall_probability: None,
            resource_probability: None,
            move_limit: None,
        }
    }
}

impl MatchSettings {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self { difficulty, ..Self::default() }
    }

    /// The difficulty preset with any overrides applied, validated.
    pub fn generation_params(&self) -> Result<GenerationParams, ConfigError> {
        let preset = GenerationParams::for_difficulty(self.difficulty);
        GenerationParams::new(
            self.size.unwrap_or(preset.size),
            self.wall_probability.unwrap_or(preset.wall_probability),
            self.resource_probability.unwrap_or(preset.resource_probability),
        )
    }

    pub fn move_limit(&self) -> Result<u32, ConfigError> {
        match self.move_limit.unwrap_or(self.difficulty.move_limit()) {
            0 => Err(ConfigError::InvalidMoveLimit),
            limit => Ok(limit),
        }
    }
}
