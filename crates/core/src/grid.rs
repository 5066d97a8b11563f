//! The square playing field: typed cells plus the frozen layout used by `restore`.

use crate::types::{Cell, GemKind, Pos};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
    initial: Vec<Cell>,
}

impl Grid {
    /// Wraps a finished layout and freezes it as the restore snapshot.
    pub(crate) fn from_cells(size: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        let initial = cells.clone();
        Self { size, cells, initial }
    }

    /// Builds a grid from rows of `#` (wall), `.` (empty) and `1`-`5` (gem tier).
    ///
    /// Returns `None` when the rows are not square or contain other characters.
    /// Meant for fixtures: no repair runs, so the layout is taken as given (even with a
    /// walled start or orphaned gems) and frozen for `restore`. `Session::with_grid`
    /// refuses layouts that generation could not have produced.
    pub fn from_ascii(rows: &[&str]) -> Option<Self> {
        let size = rows.len();
        if size == 0 {
            return None;
        }
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            if row.chars().count() != size {
                return None;
            }
            for ch in row.chars() {
                let cell = match ch {
                    '#' => Cell::Wall,
                    '.' => Cell::Empty,
                    digit => {
                        let tier = digit.to_digit(10)?;
                        Cell::gem(GemKind::from_multiplier(tier)?)
                    }
                };
                cells.push(cell);
            }
        }
        Some(Self::from_cells(size, cells))
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn start(&self) -> Pos {
        Pos::new(0, 0)
    }

    pub fn goal(&self) -> Pos {
        let last = self.size as i32 - 1;
        Pos::new(last, last)
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.size && (pos.y as usize) < self.size
    }

    /// Out-of-bounds positions read as walls.
    pub fn cell(&self, pos: Pos) -> Cell {
        if !self.in_bounds(pos) {
            return Cell::Wall;
        }
        self.cells[self.index(pos)]
    }

    /// In bounds and not a wall.
    pub fn valid(&self, pos: Pos) -> bool {
        !self.cell(pos).is_wall()
    }

    pub fn has_resource(&self, pos: Pos) -> bool {
        self.cell(pos).is_resource()
    }

    pub fn gem_at(&self, pos: Pos) -> Option<GemKind> {
        match self.cell(pos) {
            Cell::Resource { gem, .. } => Some(gem),
            _ => None,
        }
    }

    pub fn value_at(&self, pos: Pos) -> u32 {
        match self.cell(pos) {
            Cell::Resource { value, .. } => value,
            _ => 0,
        }
    }

    /// Takes the resource at `pos`, leaving the cell empty. Non-resource cells yield 0
    /// and are left untouched.
    pub fn collect(&mut self, pos: Pos) -> u32 {
        let Cell::Resource { value, .. } = self.cell(pos) else {
            return 0;
        };
        let idx = self.index(pos);
        self.cells[idx] = Cell::Empty;
        value
    }

    pub fn remaining_resource_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_resource()).count()
    }

    pub fn any_resource_left(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_resource())
    }

    /// Puts every cell back to the layout frozen at construction.
    pub fn restore(&mut self) {
        self.cells.copy_from_slice(&self.initial);
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let size = self.size as i32;
        (0..size).flat_map(move |y| (0..size).map(move |x| Pos::new(y, x)))
    }

    pub fn resource_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(|pos| self.has_resource(*pos))
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(4 + self.cells.len() * 5);
        bytes.extend((self.size as u32).to_le_bytes());
        for cell in &self.cells {
            match cell {
                Cell::Wall => bytes.push(0),
                Cell::Empty => bytes.push(1),
                Cell::Resource { gem, value } => {
                    bytes.push(1 + gem.multiplier() as u8);
                    bytes.extend(value.to_le_bytes());
                }
            }
        }
        bytes
    }

    pub fn to_ascii(&self) -> Vec<String> {
        let size = self.size as i32;
        (0..size)
            .map(|y| {
                (0..size)
                    .map(|x| match self.cell(Pos::new(y, x)) {
                        Cell::Wall => '#',
                        Cell::Empty => '.',
                        Cell::Resource { gem, .. } => {
                            char::from_digit(gem.multiplier(), 10).unwrap_or('?')
                        }
                    })
                    .collect()
            })
            .collect()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub(crate) fn refreeze(&mut self) {
        self.initial.copy_from_slice(&self.cells);
    }

    pub(crate) fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.size + (pos.x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_ascii(&["..5", ".#.", "1.."]).expect("fixture should parse")
    }

    #[test]
    fn ascii_fixture_round_trips_through_to_ascii() {
        let grid = sample();
        assert_eq!(grid.to_ascii(), vec!["..5", ".#.", "1.."]);
        assert_eq!(grid.gem_at(Pos::new(0, 2)), Some(GemKind::Diamond));
        assert_eq!(grid.value_at(Pos::new(2, 0)), 100);
    }

    #[test]
    fn ascii_fixture_rejects_ragged_rows_and_unknown_glyphs() {
        assert!(Grid::from_ascii(&["..", "."]).is_none());
        assert!(Grid::from_ascii(&["..", ".x"]).is_none());
        assert!(Grid::from_ascii(&["..", ".9"]).is_none());
        assert!(Grid::from_ascii(&[]).is_none());
    }

    #[test]
    fn out_of_bounds_and_walls_are_not_valid() {
        let grid = sample();
        assert!(grid.valid(Pos::new(0, 0)));
        assert!(!grid.valid(Pos::new(1, 1)));
        assert!(!grid.valid(Pos::new(-1, 0)));
        assert!(!grid.valid(Pos::new(0, 3)));
        assert!(!grid.has_resource(Pos::new(7, 7)));
    }

    #[test]
    fn collect_is_idempotent() {
        let mut grid = sample();
        let diamond = Pos::new(0, 2);
        assert_eq!(grid.collect(diamond), 500);
        assert_eq!(grid.cell(diamond), Cell::Empty);
        assert_eq!(grid.collect(diamond), 0);
        assert_eq!(grid.remaining_resource_count(), 1);
    }

    #[test]
    fn collect_on_walls_and_out_of_bounds_changes_nothing() {
        let mut grid = sample();
        let before = grid.clone();
        assert_eq!(grid.collect(Pos::new(1, 1)), 0);
        assert_eq!(grid.collect(Pos::new(9, 9)), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn restore_brings_back_collected_resources() {
        let mut grid = sample();
        grid.collect(Pos::new(0, 2));
        grid.collect(Pos::new(2, 0));
        assert!(!grid.any_resource_left());

        grid.restore();
        assert_eq!(grid.remaining_resource_count(), 2);
        assert_eq!(grid.to_ascii(), vec!["..5", ".#.", "1.."]);
    }

    #[test]
    fn resource_positions_scan_in_row_major_order() {
        let grid = Grid::from_ascii(&["2.1", "...", "3.."]).expect("fixture should parse");
        let found: Vec<Pos> = grid.resource_positions().collect();
        assert_eq!(found, vec![Pos::new(0, 0), Pos::new(0, 2), Pos::new(2, 0)]);
    }
}
