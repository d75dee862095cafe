use crate::core::{DiskCount, Move, Peg, Rods};
use crate::utils::error::{HanoiError, Result};

/// Three explicit stacks of disks, used to check that a move stream is legal.
///
/// Disk `1` is the smallest. Every stack is kept ordered largest-at-bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    disks: u32,
    rods: Rods,
    stacks: [Vec<u32>; 3],
    moves_applied: u64,
}

impl Board {
    /// All `disks` start on `rods.from()`.
    pub fn new(disks: DiskCount, rods: Rods) -> Self {
        let n = disks.get();
        let mut stacks: [Vec<u32>; 3] = Default::default();
        stacks[0] = (1..=n).rev().collect();
        Self {
            disks: n,
            rods,
            stacks,
            moves_applied: 0,
        }
    }

    fn slot(&self, peg: Peg) -> Option<usize> {
        if peg == self.rods.from() {
            Some(0)
        } else if peg == self.rods.to() {
            Some(1)
        } else if peg == self.rods.aux() {
            Some(2)
        } else {
            None
        }
    }

    fn illegal(mv: &Move, reason: impl Into<String>) -> HanoiError {
        HanoiError::IllegalMove {
            disk: mv.disk,
            from: mv.from.label(),
            to: mv.to.label(),
            reason: reason.into(),
        }
    }

    pub fn apply(&mut self, mv: &Move) -> Result<()> {
        let from = self
            .slot(mv.from)
            .ok_or_else(|| Self::illegal(mv, format!("rod {} is not on this board", mv.from)))?;
        let to = self
            .slot(mv.to)
            .ok_or_else(|| Self::illegal(mv, format!("rod {} is not on this board", mv.to)))?;
        if from == to {
            return Err(Self::illegal(mv, "source and destination are the same rod"));
        }

        match self.stacks[from].last() {
            None => return Err(Self::illegal(mv, "source rod is empty")),
            Some(&top) if top != mv.disk => {
                return Err(Self::illegal(
                    mv,
                    format!("disk {} is on top of the source rod", top),
                ))
            }
            Some(_) => {}
        }
        if let Some(&top) = self.stacks[to].last() {
            if top < mv.disk {
                return Err(Self::illegal(
                    mv,
                    format!("cannot place it on smaller disk {}", top),
                ));
            }
        }

        if let Some(disk) = self.stacks[from].pop() {
            self.stacks[to].push(disk);
        }
        self.moves_applied += 1;
        Ok(())
    }

    /// Disks on `peg`, bottom first.
    pub fn disks_on(&self, peg: Peg) -> &[u32] {
        match self.slot(peg) {
            Some(i) => self.stacks[i].as_slice(),
            None => &[],
        }
    }

    pub fn is_solved(&self) -> bool {
        self.stacks[1].len() == self.disks as usize
    }

    pub fn moves_applied(&self) -> u64 {
        self.moves_applied
    }

    pub fn ensure_solved(&self) -> Result<()> {
        if self.is_solved() {
            Ok(())
        } else {
            Err(HanoiError::Unsolved {
                disks: self.disks,
                to: self.rods.to().label(),
            })
        }
    }
}
