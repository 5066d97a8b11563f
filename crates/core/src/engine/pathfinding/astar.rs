//! Best-first search ordered by steps taken plus Manhattan distance to the goal.

use std::collections::BTreeSet;

use super::manhattan;
use super::search::SearchTree;
use crate::grid::Grid;
use crate::types::{Direction, Pos};

/// Open-set entry. Ties on `f` prefer the cell closer to the goal, then insertion order,
/// which keeps the fixed neighbour order decisive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct OpenNode {
    f: u32,
    h: u32,
    seq: u64,
    y: i32,
    x: i32,
}

pub(super) fn a_star(grid: &Grid, start: Pos, goal: Pos, max_expansions: usize) -> Vec<Pos> {
    if !grid.in_bounds(start) || !grid.in_bounds(goal) {
        return Vec::new();
    }

    let mut tree = SearchTree::new(grid);
    let mut g_score = vec![u32::MAX; grid.size() * grid.size()];
    let mut open_set = BTreeSet::new();
    let mut seq = 0_u64;

    let h = manhattan(start, goal);
    g_score[grid.index(start)] = 0;
    open_set.insert(OpenNode { f: h, h, seq, y: start.y, x: start.x });

    let mut expansions = 0;
    while expansions < max_expansions {
        let Some(node) = open_set.pop_first() else {
            break;
        };
        expansions += 1;

        let current = Pos::new(node.y, node.x);
        if tree.is_visited(grid, current) {
            continue;
        }
        if current == goal {
            return tree.reconstruct(grid, current);
        }
        tree.mark_visited(grid, current);

        let tentative = g_score[grid.index(current)] + 1;
        for direction in Direction::ALL {
            let next = current.step(direction);
            if !grid.valid(next) || tree.is_visited(grid, next) {
                continue;
            }
            let idx = grid.index(next);
            if tentative < g_score[idx] {
                g_score[idx] = tentative;
                tree.set_parent(grid, next, current);
                seq += 1;
                let h = manhattan(next, goal);
                open_set.insert(OpenNode { f: tentative + h, h, seq, y: next.y, x: next.x });
            }
        }
    }

    Vec::new()
}
