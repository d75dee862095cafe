use hanoi_moves::{
    moves, solve, solve_puzzle, Board, BufferSink, HanoiError, Move, Peg, Puzzle, Strategy,
    TextRenderer,
};

fn mv(disk: u32, from: char, to: char) -> Move {
    Move::new(disk, Peg::new(from).unwrap(), Peg::new(to).unwrap())
}

fn solve_classic(n: i64) -> Vec<Move> {
    let mut out: Vec<Move> = Vec::new();
    solve(n, Peg::A, Peg::C, Peg::B, &mut out).unwrap();
    out
}

#[test]
fn test_one_disk_moves_straight_across() {
    assert_eq!(solve_classic(1), vec![mv(1, 'A', 'C')]);
}

#[test]
fn test_two_disks() {
    assert_eq!(
        solve_classic(2),
        vec![mv(1, 'A', 'B'), mv(2, 'A', 'C'), mv(1, 'B', 'C')]
    );
}

/// 角色交換最容易寫錯，三個圓盤逐步比對
#[test]
fn test_three_disks_swaps_peg_roles() {
    assert_eq!(
        solve_classic(3),
        vec![
            mv(1, 'A', 'C'),
            mv(2, 'A', 'B'),
            mv(1, 'C', 'B'),
            mv(3, 'A', 'C'),
            mv(1, 'B', 'A'),
            mv(2, 'B', 'C'),
            mv(1, 'A', 'C'),
        ]
    );
}

#[test]
fn test_four_disks_is_deterministic() {
    let first = solve_classic(4);
    let second = solve_classic(4);
    assert_eq!(first.len(), 15);
    assert_eq!(first, second);
}

#[test]
fn test_move_count_is_two_to_the_n_minus_one() {
    for n in 1..=12 {
        let mut out: Vec<Move> = Vec::new();
        let emitted = solve(n, Peg::A, Peg::C, Peg::B, &mut out).unwrap();
        assert_eq!(emitted, (1u64 << n) - 1, "n = {}", n);
        assert_eq!(out.len() as u64, emitted);
    }
}

#[test]
fn test_first_move_depends_on_parity() {
    for n in 1..=10 {
        let first = solve_classic(n)[0];
        let expected = if n % 2 == 1 {
            mv(1, 'A', 'C')
        } else {
            mv(1, 'A', 'B')
        };
        assert_eq!(first, expected, "n = {}", n);
    }
}

#[test]
fn test_largest_disk_moves_once_in_the_middle() {
    let out = solve_classic(5);
    let largest: Vec<usize> = out
        .iter()
        .enumerate()
        .filter(|(_, m)| m.disk == 5)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(largest, vec![15]);
    assert_eq!(out[15], mv(5, 'A', 'C'));
}

#[test]
fn test_replay_on_board_ends_sorted_on_destination() {
    for n in 0..=10 {
        let puzzle = Puzzle::new(n, Peg::A, Peg::C, Peg::B).unwrap();
        let mut board = Board::new(puzzle.disks, puzzle.rods);
        for m in moves(&puzzle) {
            board.apply(&m).unwrap();
        }
        assert!(board.is_solved(), "n = {}", n);
        let expected: Vec<u32> = (1..=n as u32).rev().collect();
        assert_eq!(board.disks_on(Peg::C), expected.as_slice());
        assert!(board.disks_on(Peg::A).is_empty());
        assert!(board.disks_on(Peg::B).is_empty());
    }
}

#[test]
fn test_iterative_matches_recursive() {
    for n in 0..=12 {
        let puzzle = Puzzle::new(n, Peg::A, Peg::C, Peg::B).unwrap();
        let mut recursive: Vec<Move> = Vec::new();
        let mut iterative: Vec<Move> = Vec::new();
        solve_puzzle(&puzzle, Strategy::Recursive, &mut recursive).unwrap();
        solve_puzzle(&puzzle, Strategy::Iterative, &mut iterative).unwrap();
        assert_eq!(recursive, iterative, "n = {}", n);
        assert_eq!(moves(&puzzle).collect::<Vec<_>>(), recursive);
    }
}

#[test]
fn test_custom_labels() {
    let (l, m, r) = (
        Peg::new('L').unwrap(),
        Peg::new('M').unwrap(),
        Peg::new('R').unwrap(),
    );
    let mut out: Vec<Move> = Vec::new();
    solve(2, l, r, m, &mut out).unwrap();
    assert_eq!(out, vec![mv(1, 'L', 'M'), mv(2, 'L', 'R'), mv(1, 'M', 'R')]);
}

#[test]
fn test_zero_disks_emit_nothing() {
    assert!(solve_classic(0).is_empty());
}

#[test]
fn test_negative_disks_rejected() {
    let mut out: Vec<Move> = Vec::new();
    let err = solve(-1, Peg::A, Peg::C, Peg::B, &mut out).unwrap_err();
    assert!(matches!(err, HanoiError::NegativeDiskCount { disks: -1 }));
    assert!(out.is_empty());
}

#[test]
fn test_duplicate_pegs_rejected() {
    let mut out: Vec<Move> = Vec::new();
    let err = solve(3, Peg::A, Peg::A, Peg::B, &mut out).unwrap_err();
    assert!(matches!(err, HanoiError::DuplicatePeg { peg: 'A' }));
    assert!(out.is_empty());
}

#[test]
fn test_text_output_for_classic_run() {
    let mut sink = TextRenderer::new(BufferSink::new());
    solve(4, Peg::A, Peg::C, Peg::B, &mut sink).unwrap();
    let text = sink.into_inner().into_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 15);
    assert_eq!(lines[0], "Move disk 1 from rod A to rod B");
    assert_eq!(lines[1], "Move disk 2 from rod A to rod C");
    assert_eq!(lines[7], "Move disk 4 from rod A to rod C");
    assert_eq!(lines[14], "Move disk 1 from rod B to rod C");
    assert!(text.ends_with('\n'));
}
