//! Frontier-driven uninformed search shared by the breadth-first and depth-first strategies.

use std::collections::VecDeque;

use crate::grid::Grid;
use crate::types::{Direction, Pos};

/// Order in which discovered cells are expanded.
pub(super) trait Frontier {
    fn push(&mut self, pos: Pos);
    fn pop(&mut self) -> Option<Pos>;
}

/// First in, first out: breadth-first.
impl Frontier for VecDeque<Pos> {
    fn push(&mut self, pos: Pos) {
        self.push_back(pos);
    }

    fn pop(&mut self) -> Option<Pos> {
        self.pop_front()
    }
}

/// Last in, first out: depth-first.
impl Frontier for Vec<Pos> {
    fn push(&mut self, pos: Pos) {
        Vec::push(self, pos);
    }

    fn pop(&mut self) -> Option<Pos> {
        Vec::pop(self)
    }
}

/// Visited flags and parent pointers over the whole grid.
pub(super) struct SearchTree {
    visited: Vec<bool>,
    parent: Vec<Option<Pos>>,
}

impl SearchTree {
    pub(super) fn new(grid: &Grid) -> Self {
        let cells = grid.size() * grid.size();
        Self { visited: vec![false; cells], parent: vec![None; cells] }
    }

    pub(super) fn is_visited(&self, grid: &Grid, pos: Pos) -> bool {
        self.visited[grid.index(pos)]
    }

    pub(super) fn mark_visited(&mut self, grid: &Grid, pos: Pos) {
        self.visited[grid.index(pos)] = true;
    }

    pub(super) fn set_parent(&mut self, grid: &Grid, pos: Pos, parent: Pos) {
        self.parent[grid.index(pos)] = Some(parent);
    }

    /// Walks parent pointers back from `end`; the result starts at the search root.
    pub(super) fn reconstruct(&self, grid: &Grid, end: Pos) -> Vec<Pos> {
        let mut path = vec![end];
        let mut cursor = end;
        while let Some(parent) = self.parent[grid.index(cursor)] {
            path.push(parent);
            cursor = parent;
        }
        path.reverse();
        path
    }
}

/// Expands at most `max_expansions` popped cells; a goal popped within the budget
/// yields the parent-pointer path, anything else yields an empty path.
pub(super) fn frontier_search<F: Frontier>(
    grid: &Grid,
    start: Pos,
    goal: Pos,
    max_expansions: usize,
    mut frontier: F,
) -> Vec<Pos> {
    if !grid.in_bounds(start) || !grid.in_bounds(goal) {
        return Vec::new();
    }

    let mut tree = SearchTree::new(grid);
    tree.mark_visited(grid, start);
    frontier.push(start);

    let mut expansions = 0;
    while expansions < max_expansions {
        let Some(current) = frontier.pop() else {
            break;
        };
        if current == goal {
            return tree.reconstruct(grid, current);
        }
        for direction in Direction::ALL {
            let next = current.step(direction);
            if grid.valid(next) && !tree.is_visited(grid, next) {
                tree.mark_visited(grid, next);
                tree.set_parent(grid, next, current);
                frontier.push(next);
            }
        }
        expansions += 1;
    }

    Vec::new()
}
