//! Interchangeable 4-connected path searches over a `Grid`.
//!
//! Every strategy explores neighbours in the fixed order up, down, left, right and
//! is bounded by an expansion budget: the number of cells popped from its frontier
//! (or, for the greedy walk, the number of steps taken). A search that runs out of
//! budget before reaching the goal returns an empty path even when a route exists.
//! An empty path is never an error; callers treat it as "stay put".

mod astar;
mod divide;
mod greedy;
mod search;

use std::collections::VecDeque;

use crate::grid::Grid;
use crate::types::{Pos, Strategy};

/// Budget used when the caller does not pick one.
pub const DEFAULT_MAX_EXPANSIONS: usize = 100;

/// Runs `strategy` from `start` to `goal`. A non-empty result begins at `start`;
/// every strategy except the greedy walk also ends at `goal`.
pub fn find_path(
    grid: &Grid,
    start: Pos,
    goal: Pos,
    strategy: Strategy,
    max_expansions: usize,
) -> Vec<Pos> {
    let path = match strategy {
        Strategy::BreadthFirst => breadth_first(grid, start, goal, max_expansions),
        Strategy::DepthFirst => {
            search::frontier_search(grid, start, goal, max_expansions, Vec::new())
        }
        Strategy::GreedyManhattan => greedy::greedy_manhattan(grid, start, goal, max_expansions),
        Strategy::DivideAndConquer => divide::divide_and_conquer(grid, start, goal, max_expansions),
        Strategy::AStar => astar::a_star(grid, start, goal, max_expansions),
    };
    if path.is_empty() {
        tracing::debug!(?strategy, ?start, ?goal, max_expansions, "no path within budget");
    }
    path
}

/// Shortest path in steps when the goal is popped within `max_expansions`.
pub fn breadth_first(grid: &Grid, start: Pos, goal: Pos, max_expansions: usize) -> Vec<Pos> {
    search::frontier_search(grid, start, goal, max_expansions, VecDeque::new())
}

pub fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

/// True when consecutive positions are exactly one orthogonal step apart.
pub fn is_step_connected(path: &[Pos]) -> bool {
    path.windows(2).all(|pair| manhattan(pair[0], pair[1]) == 1)
}
