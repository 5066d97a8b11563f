//! Post-generation connectivity repair: orphaned resources are pruned and the goal
//! is made reachable from the start, carving a monotone corridor when needed.

use std::collections::VecDeque;

use rand_chacha::rand_core::Rng;

use super::draw::coin;
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::types::{Cell, Direction, Pos};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RepairReport {
    pub pruned_resources: usize,
    pub carved_cells: usize,
}

/// Runs both repair passes and freezes the result as the grid's restore snapshot.
pub fn repair<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> RepairReport {
    let pruned_resources = prune_unreachable_resources(grid);
    let carved_cells = ensure_goal_reachable(grid, rng);
    grid.refreeze();
    RepairReport { pruned_resources, carved_cells }
}

/// Flood fill from the start over non-wall cells. Indexed like the grid's cells.
pub fn reachable_from_start(grid: &Grid) -> Vec<bool> {
    let mut visited = vec![false; grid.size() * grid.size()];
    let start = grid.start();
    if !grid.valid(start) {
        return visited;
    }

    let mut queue = VecDeque::new();
    visited[grid.index(start)] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for direction in Direction::ALL {
            let next = current.step(direction);
            if !grid.valid(next) {
                continue;
            }
            let idx = grid.index(next);
            if !visited[idx] {
                visited[idx] = true;
                queue.push_back(next);
            }
        }
    }

    visited
}

/// Checks what `repair` guarantees: empty start and goal, the goal reachable from
/// the start, and no resource cut off from it.
pub fn check_playable(grid: &Grid) -> Result<(), ConfigError> {
    if grid.cell(grid.start()) != Cell::Empty || grid.cell(grid.goal()) != Cell::Empty {
        return Err(ConfigError::UnplayableGrid { reason: "start and goal must be empty" });
    }
    let reachable = reachable_from_start(grid);
    if !reachable[grid.index(grid.goal())] {
        return Err(ConfigError::UnplayableGrid { reason: "goal is unreachable from start" });
    }
    if grid.resource_positions().any(|pos| !reachable[grid.index(pos)]) {
        return Err(ConfigError::UnplayableGrid { reason: "a resource is unreachable from start" });
    }
    Ok(())
}

/// Empties every resource cell the start cannot reach. Returns how many were removed.
pub fn prune_unreachable_resources(grid: &mut Grid) -> usize {
    let reachable = reachable_from_start(grid);
    let mut pruned = 0;
    for (cell, &reached) in grid.cells_mut().iter_mut().zip(&reachable) {
        if cell.is_resource() && !reached {
            *cell = Cell::Empty;
            pruned += 1;
        }
    }
    pruned
}

/// Carves a down/right corridor from start to goal when the goal is cut off.
/// Returns the number of cells whose contents changed; zero when no carve was needed.
pub fn ensure_goal_reachable<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> usize {
    let goal = grid.goal();
    if reachable_from_start(grid)[grid.index(goal)] {
        return 0;
    }

    let mut carved = 0;
    let mut cursor = grid.start();
    while cursor != goal {
        carved += usize::from(clear_cell(grid, cursor));
        let can_go_down = cursor.y < goal.y;
        let can_go_right = cursor.x < goal.x;
        let direction = match (can_go_down, can_go_right) {
            (true, true) if coin(rng) => Direction::Down,
            (true, true) => Direction::Right,
            (true, false) => Direction::Down,
            _ => Direction::Right,
        };
        cursor = cursor.step(direction);
    }
    carved += usize::from(clear_cell(grid, goal));

    tracing::warn!(carved, "goal was unreachable; carved a fallback corridor");
    carved
}

fn clear_cell(grid: &mut Grid, pos: Pos) -> bool {
    let idx = grid.index(pos);
    let cell = &mut grid.cells_mut()[idx];
    let changed = *cell != Cell::Empty;
    *cell = Cell::Empty;
    changed
}
