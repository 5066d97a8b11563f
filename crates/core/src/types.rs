use serde::{Deserialize, Serialize};

/// Grid coordinate. `y` is the row, `x` the column; (0,0) is the top-left start cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub const fn new(y: i32, x: i32) -> Self {
        Self { y, x }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dy, dx) = direction.delta();
        Self { y: self.y + dy, x: self.x + dx }
    }
}

/// Four-connected movement, listed in the fixed exploration order used by every search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The direction leading from `from` to an orthogonally adjacent `to`.
    pub fn between(from: Pos, to: Pos) -> Option<Direction> {
        Direction::ALL.into_iter().find(|direction| from.step(*direction) == to)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GemKind {
    Gold,
    Sapphire,
    Emerald,
    Ruby,
    Diamond,
}

impl GemKind {
    pub const ALL: [GemKind; 5] =
        [GemKind::Gold, GemKind::Sapphire, GemKind::Emerald, GemKind::Ruby, GemKind::Diamond];

    pub const BASE_VALUE: u32 = 100;

    /// Maps a tier multiplier in `1..=5` to its gem; anything else is rejected.
    pub fn from_multiplier(multiplier: u32) -> Option<GemKind> {
        match multiplier {
            1..=5 => Some(GemKind::ALL[(multiplier - 1) as usize]),
            _ => None,
        }
    }

    pub const fn multiplier(self) -> u32 {
        match self {
            GemKind::Gold => 1,
            GemKind::Sapphire => 2,
            GemKind::Emerald => 3,
            GemKind::Ruby => 4,
            GemKind::Diamond => 5,
        }
    }

    pub const fn value(self) -> u32 {
        self.multiplier() * Self::BASE_VALUE
    }
}

/// A single grid cell. Only resource cells carry a tier and a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Empty,
    Resource { gem: GemKind, value: u32 },
}

impl Cell {
    pub const fn gem(gem: GemKind) -> Self {
        Cell::Resource { gem, value: gem.value() }
    }

    pub const fn is_wall(self) -> bool {
        matches!(self, Cell::Wall)
    }

    pub const fn is_resource(self) -> bool {
        matches!(self, Cell::Resource { .. })
    }
}

/// Interchangeable pathfinding algorithms the autonomous agent can be driven by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    BreadthFirst,
    DepthFirst,
    GreedyManhattan,
    DivideAndConquer,
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::GreedyManhattan,
        Strategy::DivideAndConquer,
        Strategy::AStar,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "breadth_first",
            Strategy::DepthFirst => "depth_first",
            Strategy::GreedyManhattan => "greedy_manhattan",
            Strategy::DivideAndConquer => "divide_and_conquer",
            Strategy::AStar => "a_star",
        }
    }

    pub fn from_name(name: &str) -> Option<Strategy> {
        Strategy::ALL.into_iter().find(|strategy| strategy.name() == name)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const BASE_MOVE_LIMIT: u32 = 200;

    pub const fn grid_size(self) -> usize {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 20,
            Difficulty::Hard => 30,
        }
    }

    pub const fn wall_probability(self) -> f64 {
        match self {
            Difficulty::Easy => 0.15,
            Difficulty::Medium => 0.25,
            Difficulty::Hard => 0.35,
        }
    }

    pub const fn resource_probability(self) -> f64 {
        match self {
            Difficulty::Easy => 0.30,
            Difficulty::Medium => 0.25,
            Difficulty::Hard => 0.20,
        }
    }

    pub const fn move_limit(self) -> u32 {
        match self {
            Difficulty::Easy => Self::BASE_MOVE_LIMIT * 3 / 2,
            Difficulty::Medium => Self::BASE_MOVE_LIMIT,
            Difficulty::Hard => Self::BASE_MOVE_LIMIT * 3 / 4,
        }
    }

    pub fn from_name(name: &str) -> Option<Difficulty> {
        match name {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}
