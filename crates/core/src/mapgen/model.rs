//! Validated inputs for grid generation.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::Difficulty;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub size: usize,
    pub wall_probability: f64,
    pub resource_probability: f64,
}

impl GenerationParams {
    pub fn new(
        size: usize,
        wall_probability: f64,
        resource_probability: f64,
    ) -> Result<Self, ConfigError> {
        let params = Self { size, wall_probability, resource_probability };
        params.validate()?;
        Ok(params)
    }

    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            size: difficulty.grid_size(),
            wall_probability: difficulty.wall_probability(),
            resource_probability: difficulty.resource_probability(),
        }
    }

    /// Rejects, never clamps, out-of-range values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < 1 {
            return Err(ConfigError::InvalidSize { size: self.size });
        }
        check_probability("wall", self.wall_probability)?;
        check_probability("resource", self.resource_probability)?;
        if self.wall_probability + self.resource_probability > 1.0 {
            return Err(ConfigError::ProbabilitiesExceedOne {
                wall: self.wall_probability,
                resource: self.resource_probability,
            });
        }
        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidProbability { name, value });
    }
    Ok(())
}
