//! Hill-climbing on Manhattan distance. No frontier and no backtracking.

use super::manhattan;
use crate::grid::Grid;
use crate::types::{Direction, Pos};

/// Steps to the first neighbour with the smallest distance to `goal` while that
/// strictly improves on the current cell. Stops early, returning the partial walk,
/// once no neighbour improves or `max_expansions` steps were taken.
pub(super) fn greedy_manhattan(
    grid: &Grid,
    start: Pos,
    goal: Pos,
    max_expansions: usize,
) -> Vec<Pos> {
    let mut path = vec![start];
    let mut current = start;

    while current != goal && path.len() <= max_expansions {
        let here = manhattan(current, goal);
        let mut best: Option<(u32, Pos)> = None;
        for direction in Direction::ALL {
            let next = current.step(direction);
            if !grid.valid(next) {
                continue;
            }
            let distance = manhattan(next, goal);
            if best.is_none_or(|(best_distance, _)| distance < best_distance) {
                best = Some((distance, next));
            }
        }

        match best {
            Some((distance, next)) if distance < here => {
                path.push(next);
                current = next;
            }
            _ => {
                tracing::debug!(?current, ?goal, "greedy walk stalled short of the goal");
                break;
            }
        }
    }

    path
}
