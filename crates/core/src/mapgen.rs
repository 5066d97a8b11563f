//! Grid generation: probabilistic cell draws, connectivity repair, and validated inputs.

pub mod model;
pub mod repair;

mod draw;
mod generator;

pub use generator::GridGenerator;
pub use model::GenerationParams;
pub use repair::RepairReport;

use rand_chacha::rand_core::Rng;

use crate::error::ConfigError;
use crate::grid::Grid;

/// Validates `params`, draws a grid from `rng`, and repairs it. The returned grid's
/// restore snapshot is the repaired layout.
pub fn generate<R: Rng + ?Sized>(
    params: GenerationParams,
    rng: &mut R,
) -> Result<Grid, ConfigError> {
    Ok(GridGenerator::new(params)?.generate(rng).0)
}
