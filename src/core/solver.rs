//! Tower of Hanoi move generation.
//!
//! Moving `n` disks from `from` to `to` is: move the top `n - 1` disks out of
//! the way onto `aux`, move disk `n` directly, then move the `n - 1` disks
//! from `aux` onto `to`. Both strategies below emit exactly that order.

use crate::core::{DiskCount, Move, MoveSink, Peg, Puzzle, Rods, Strategy};
use crate::utils::error::Result;
use std::iter::FusedIterator;

/// Solves `disks` disks from `from` to `to` via `aux`, recursively, and
/// returns the number of moves emitted.
///
/// A negative disk count or a repeated peg label is rejected before anything
/// is emitted. Zero disks emit nothing.
pub fn solve<S: MoveSink + ?Sized>(
    disks: i64,
    from: Peg,
    to: Peg,
    aux: Peg,
    sink: &mut S,
) -> Result<u64> {
    let puzzle = Puzzle::new(disks, from, to, aux)?;
    solve_puzzle(&puzzle, Strategy::Recursive, sink)
}

pub fn solve_puzzle<S: MoveSink + ?Sized>(
    puzzle: &Puzzle,
    strategy: Strategy,
    sink: &mut S,
) -> Result<u64> {
    tracing::debug!(
        "Solving {} disks {} -> {} via {} ({})",
        puzzle.disks,
        puzzle.rods.from(),
        puzzle.rods.to(),
        puzzle.rods.aux(),
        strategy
    );

    let emitted = match strategy {
        Strategy::Recursive => {
            let rods = puzzle.rods;
            solve_recursive(puzzle.disks.get(), rods.from(), rods.to(), rods.aux(), sink)?
        }
        Strategy::Iterative => {
            let mut emitted = 0;
            for mv in moves(puzzle) {
                sink.emit_move(&mv)?;
                emitted += 1;
            }
            emitted
        }
    };

    Ok(emitted)
}

fn solve_recursive<S: MoveSink + ?Sized>(
    n: u32,
    from: Peg,
    to: Peg,
    aux: Peg,
    sink: &mut S,
) -> Result<u64> {
    match n {
        0 => Ok(0),
        1 => {
            sink.emit_move(&Move::new(1, from, to))?;
            Ok(1)
        }
        _ => {
            let before = solve_recursive(n - 1, from, aux, to, sink)?;
            sink.emit_move(&Move::new(n, from, to))?;
            let after = solve_recursive(n - 1, aux, to, from, sink)?;
            Ok(before + 1 + after)
        }
    }
}

/// Lazy move sequence for `puzzle`, in the same order as the recursive solver.
pub fn moves(puzzle: &Puzzle) -> Moves {
    Moves::new(puzzle.disks, puzzle.rods)
}

#[derive(Debug, Clone, Copy)]
enum Frame {
    Transfer { n: u32, from: Peg, to: Peg, aux: Peg },
    Emit(Move),
}

/// Explicit-stack iterator over the moves of one transfer.
///
/// The stack never holds more than `2n + 1` frames.
#[derive(Debug, Clone)]
pub struct Moves {
    stack: Vec<Frame>,
    remaining: u64,
}

impl Moves {
    fn new(disks: DiskCount, rods: Rods) -> Self {
        let n = disks.get();
        let mut stack = Vec::with_capacity(2 * n as usize + 1);
        if n > 0 {
            stack.push(Frame::Transfer {
                n,
                from: rods.from(),
                to: rods.to(),
                aux: rods.aux(),
            });
        }
        Self {
            stack,
            remaining: disks.move_count(),
        }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl Iterator for Moves {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Emit(mv) => {
                    self.remaining -= 1;
                    return Some(mv);
                }
                Frame::Transfer { n: 1, from, to, .. } => {
                    self.remaining -= 1;
                    return Some(Move::new(1, from, to));
                }
                Frame::Transfer { n, from, to, aux } => {
                    // 後進先出：先推最後要執行的步驟
                    self.stack.push(Frame::Transfer {
                        n: n - 1,
                        from: aux,
                        to,
                        aux: from,
                    });
                    self.stack.push(Frame::Emit(Move::new(n, from, to)));
                    self.stack.push(Frame::Transfer {
                        n: n - 1,
                        from,
                        to: aux,
                        aux: to,
                    });
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Moves {}
