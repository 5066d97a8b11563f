//! Per-cell probabilistic grid generation followed by connectivity repair.

use rand_chacha::rand_core::Rng;

use super::draw::{inclusive, unit};
use super::model::GenerationParams;
use super::repair::{RepairReport, repair};
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::types::{Cell, GemKind};

pub struct GridGenerator {
    params: GenerationParams,
}

impl GridGenerator {
    pub fn new(params: GenerationParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> GenerationParams {
        self.params
    }

    /// Draws every cell, forces the start and goal empty, then repairs connectivity.
    ///
    /// The same random source feeds both the draw and any fallback carve, so an
    /// identically seeded source always reproduces the same grid.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> (Grid, RepairReport) {
        let mut grid = self.draw_cells(rng);
        let report = repair(&mut grid, rng);
        tracing::info!(
            size = self.params.size,
            resources = grid.remaining_resource_count(),
            pruned = report.pruned_resources,
            carved = report.carved_cells,
            "generated grid"
        );
        (grid, report)
    }

    /// The raw draw before repair. Start and goal are already empty.
    pub fn draw_cells<R: Rng + ?Sized>(&self, rng: &mut R) -> Grid {
        let size = self.params.size;
        let wall = self.params.wall_probability;
        let resource_ceiling = wall + self.params.resource_probability;

        let mut cells = Vec::with_capacity(size * size);
        for _ in 0..size * size {
            let roll = unit(rng);
            let cell = if roll < wall {
                Cell::Wall
            } else if roll < resource_ceiling {
                Cell::gem(draw_gem(rng))
            } else {
                Cell::Empty
            };
            cells.push(cell);
        }
        cells[0] = Cell::Empty;
        cells[size * size - 1] = Cell::Empty;

        Grid::from_cells(size, cells)
    }
}

fn draw_gem<R: Rng + ?Sized>(rng: &mut R) -> GemKind {
    let multiplier = inclusive(rng, 1, GemKind::ALL.len() as u32);
    GemKind::ALL[(multiplier - 1) as usize]
}
