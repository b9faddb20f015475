use gomoku::board::Axis;
use gomoku::eval::{evaluate_position, PatternScore};
use gomoku::{check_win, create_empty_board, select_move, Board, Difficulty, Pos, Stone};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn axis_strategy() -> impl Strategy<Value = Axis> {
    prop::sample::select(Axis::ALL.to_vec())
}

fn stone_strategy() -> impl Strategy<Value = Stone> {
    prop::sample::select(vec![Stone::Black, Stone::White])
}

fn difficulty_strategy() -> impl Strategy<Value = Difficulty> {
    prop::sample::select(Difficulty::ALL.to_vec())
}

/// Five cells along `axis` starting at `(x, y)`, or `None` if they leave the board
fn run_of_five(x: i32, y: i32, axis: Axis) -> Option<Vec<Pos>> {
    let (dx, dy) = axis.delta();
    (0..5)
        .map(|i| {
            let (cx, cy) = (x + dx * i, y + dy * i);
            ((0..15).contains(&cx) && (0..15).contains(&cy)).then(|| Pos::new(cx as u8, cy as u8))
        })
        .collect()
}

fn scatter(cells: &[(u8, u8, bool)]) -> Board {
    let mut board = Board::new();
    for &(x, y, black) in cells {
        let pos = Pos::new(x, y);
        if board.is_empty(pos) {
            board.place_stone(pos, if black { Stone::Black } else { Stone::White });
        }
    }
    board
}

proptest! {
    #[test]
    fn five_in_a_row_found_from_any_stone(
        x in 0i32..15,
        y in 0i32..15,
        axis in axis_strategy(),
        color in stone_strategy(),
        trigger in 0usize..5,
    ) {
        let run = run_of_five(x, y, axis);
        prop_assume!(run.is_some());
        let run = run.unwrap();

        let mut board = Board::new();
        for &pos in &run {
            board.place_stone(pos, color);
        }

        let line = check_win(&board, run[trigger], color);
        prop_assert_eq!(line, Some(run));
    }

    #[test]
    fn four_in_a_row_is_not_a_win(
        x in 0i32..15,
        y in 0i32..15,
        axis in axis_strategy(),
        color in stone_strategy(),
        trigger in 0usize..4,
    ) {
        let run = run_of_five(x, y, axis);
        prop_assume!(run.is_some());
        let run = run.unwrap();

        let mut board = Board::new();
        for &pos in &run[..4] {
            board.place_stone(pos, color);
        }
        prop_assert_eq!(check_win(&board, run[trigger], color), None);
    }

    #[test]
    fn completing_cell_scores_five(
        x in 0i32..15,
        y in 0i32..15,
        axis in axis_strategy(),
        color in stone_strategy(),
        gap in 0usize..5,
    ) {
        let run = run_of_five(x, y, axis);
        prop_assume!(run.is_some());
        let run = run.unwrap();

        let mut board = Board::new();
        for (i, &pos) in run.iter().enumerate() {
            if i != gap {
                board.place_stone(pos, color);
            }
        }
        prop_assert_eq!(evaluate_position(&board, run[gap], color), PatternScore::FIVE);
    }

    #[test]
    fn ai_always_picks_an_empty_cell(
        cells in prop::collection::vec((0u8..15, 0u8..15, any::<bool>()), 0..120),
        difficulty in difficulty_strategy(),
        side in stone_strategy(),
        seed in any::<u64>(),
    ) {
        let board = scatter(&cells);
        let mv = select_move(&board, difficulty, side, StdRng::seed_from_u64(seed));
        let pos = mv.expect("board is never full here");
        prop_assert!(board.in_bounds(pos));
        prop_assert!(board.is_empty(pos));
    }

    #[test]
    fn seeded_ai_is_reproducible(
        cells in prop::collection::vec((0u8..15, 0u8..15, any::<bool>()), 0..60),
        difficulty in difficulty_strategy(),
        seed in any::<u64>(),
    ) {
        let board = scatter(&cells);
        let a = select_move(&board, difficulty, Stone::White, StdRng::seed_from_u64(seed));
        let b = select_move(&board, difficulty, Stone::White, StdRng::seed_from_u64(seed));
        prop_assert_eq!(a, b);
    }
}

#[test]
fn empty_board_is_15_by_15() {
    let board = create_empty_board(15).unwrap();
    assert_eq!(board.size(), 15);
    assert_eq!(board.empty_cells().count(), 225);
}

#[test]
fn four_on_the_edge_has_one_completing_cell() {
    let mut board = Board::new();
    for x in 0..4 {
        board.place_stone(Pos::new(x, 0), Stone::Black);
    }
    for difficulty in [Difficulty::Medium, Difficulty::Hard] {
        let win = select_move(&board, difficulty, Stone::Black, StdRng::seed_from_u64(1));
        assert_eq!(win, Some(Pos::new(4, 0)));

        // White has no win of its own and must block the only open end
        let block = select_move(&board, difficulty, Stone::White, StdRng::seed_from_u64(1));
        assert_eq!(block, Some(Pos::new(4, 0)));
    }
}

#[test]
fn white_four_is_completed_and_blocked() {
    let mut board = Board::new();
    for x in 0..4 {
        board.place_stone(Pos::new(x, 1), Stone::White);
    }
    assert_eq!(
        evaluate_position(&board, Pos::new(4, 1), Stone::White),
        PatternScore::FIVE
    );

    // White wins there; Black must block there
    let white = select_move(&board, Difficulty::Medium, Stone::White, StdRng::seed_from_u64(2));
    let black = select_move(&board, Difficulty::Medium, Stone::Black, StdRng::seed_from_u64(2));
    assert_eq!(white, Some(Pos::new(4, 1)));
    assert_eq!(black, Some(Pos::new(4, 1)));
}
