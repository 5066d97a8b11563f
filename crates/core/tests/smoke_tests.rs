use gemrush_core::engine::{breadth_first, is_step_connected, manhattan};
use gemrush_core::{
    DEFAULT_MAX_EXPANSIONS, Difficulty, Direction, Grid, HumanAction, MatchSettings, Pos, Session,
    Strategy, find_path, select_target,
};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

fn open_grid(size: usize) -> Grid {
    let row = ".".repeat(size);
    let rows: Vec<&str> = (0..size).map(|_| row.as_str()).collect();
    Grid::from_ascii(&rows).expect("open grid should parse")
}

#[test]
fn test_lone_diamond_on_open_five_by_five() {
    let grid = Grid::from_ascii(&[".....", ".....", ".....", ".....", "....5"])
        .expect("fixture should parse");
    let start = Pos::new(0, 0);
    let goal = Pos::new(4, 4);

    let path = breadth_first(&grid, start, goal, DEFAULT_MAX_EXPANSIONS);
    assert_eq!(path.len(), 9);
    assert_eq!(manhattan(start, goal), 8);

    let target = select_target(&grid, start, DEFAULT_MAX_EXPANSIONS).expect("diamond selected");
    assert_eq!(target.pos, goal);
    assert_eq!(target.score, 62.5);
}

#[test]
fn test_greedy_stops_short_when_a_detour_is_required() {
    let grid = Grid::from_ascii(&[".....", "..#..", "..#..", "..#..", "....."])
        .expect("fixture should parse");
    let goal = Pos::new(2, 4);

    let path = find_path(&grid, Pos::new(2, 0), goal, Strategy::GreedyManhattan, 100);
    let stopped_at = *path.last().expect("greedy always returns its start");
    assert_ne!(stopped_at, goal);
    assert!(is_step_connected(&path));

    let retry = find_path(&grid, stopped_at, goal, Strategy::GreedyManhattan, 100);
    assert_eq!(retry, vec![stopped_at]);
}

#[test]
fn test_small_budget_misses_far_corner_on_open_board() {
    let grid = open_grid(20);
    let path = find_path(&grid, Pos::new(0, 0), Pos::new(19, 19), Strategy::BreadthFirst, 5);
    assert!(path.is_empty());
}

fn play_to_end(seed: u64, strategy: Strategy, difficulty: Difficulty) -> Session {
    let settings = MatchSettings { strategy, ..MatchSettings::for_difficulty(difficulty) };
    let mut session = Session::new(&settings, &mut ChaCha8Rng::seed_from_u64(seed))
        .expect("preset settings should be valid");

    // Sweep the board row by row so the human keeps spending moves.
    let mut heading = Direction::Right;
    for _ in 0..2_000 {
        if session.is_finished() {
            break;
        }
        let report = session.human_move(heading);
        if matches!(report.human, HumanAction::Bumped { .. }) {
            let down = session.human_move(Direction::Down);
            if matches!(down.human, HumanAction::Bumped { .. }) {
                session.human_move(Direction::Up);
            }
            heading = if heading == Direction::Right { Direction::Left } else { Direction::Right };
        }
    }
    session
}

#[test]
fn test_smoke_every_strategy_finishes_a_match() {
    for strategy in Strategy::ALL {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let session = play_to_end(2024, strategy, difficulty);
            assert!(session.is_finished(), "{strategy:?} on {difficulty:?} never finished");
            let outcome = session.outcome().expect("finished match has an outcome");
            assert_eq!(outcome.human_score, session.human().score);
            assert_eq!(outcome.autonomous_score, session.autonomous().score);
        }
    }
}

#[test]
fn test_smoke_autonomous_agent_scores_on_an_easy_board() {
    let session = play_to_end(7, Strategy::BreadthFirst, Difficulty::Easy);
    assert!(session.autonomous().score > 0);
    assert!(session.autonomous().moves > 0);
}
