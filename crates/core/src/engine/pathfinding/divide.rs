//! Splits long searches at the coordinate midpoint and splices two breadth-first halves.

use std::collections::VecDeque;

use super::manhattan;
use super::search::frontier_search;
use crate::grid::Grid;
use crate::types::Pos;

/// Searches at or below this Manhattan distance go straight to breadth-first.
const DIRECT_SEARCH_DISTANCE: u32 = 4;

pub(super) fn divide_and_conquer(
    grid: &Grid,
    start: Pos,
    goal: Pos,
    max_expansions: usize,
) -> Vec<Pos> {
    let whole = || frontier_search(grid, start, goal, max_expansions, VecDeque::new());

    if manhattan(start, goal) <= DIRECT_SEARCH_DISTANCE {
        return whole();
    }

    let midpoint = Pos::new((start.y + goal.y) / 2, (start.x + goal.x) / 2);
    if !grid.valid(midpoint) {
        return whole();
    }

    let mut first = frontier_search(grid, start, midpoint, max_expansions, VecDeque::new());
    if first.is_empty() {
        return whole();
    }
    let second = frontier_search(grid, midpoint, goal, max_expansions, VecDeque::new());
    if second.is_empty() {
        return whole();
    }

    first.pop();
    first.extend(second);
    first
}
