use crate::core::{solver, MoveSink, Puzzle, Strategy};
use crate::utils::error::Result;
use serde::Serialize;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub disks: u32,
    pub from: char,
    pub to: char,
    pub aux: char,
    pub strategy: Strategy,
    pub moves: u64,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

fn serialize_millis<S: serde::Serializer>(
    d: &Duration,
    s: S,
) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}

/// Runs one solve against a sink.
pub struct HanoiEngine<S: MoveSink> {
    sink: S,
    strategy: Strategy,
}

impl<S: MoveSink> HanoiEngine<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            strategy: Strategy::default(),
        }
    }

    pub fn with_strategy(sink: S, strategy: Strategy) -> Self {
        Self { sink, strategy }
    }

    pub fn run(&mut self, puzzle: &Puzzle) -> Result<RunSummary> {
        let start = Instant::now();
        tracing::info!(
            "🚀 Moving {} disks from rod {} to rod {} ({} moves expected)",
            puzzle.disks,
            puzzle.rods.from(),
            puzzle.rods.to(),
            puzzle.disks.move_count()
        );

        let moves = solver::solve_puzzle(puzzle, self.strategy, &mut self.sink)?;
        self.sink.finish()?;

        let elapsed = start.elapsed();
        tracing::info!("✅ Emitted {} moves in {:?}", moves, elapsed);

        Ok(RunSummary {
            disks: puzzle.disks.get(),
            from: puzzle.rods.from().label(),
            to: puzzle.rods.to().label(),
            aux: puzzle.rods.aux().label(),
            strategy: self.strategy,
            moves,
            elapsed,
        })
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Move, Peg};

    #[test]
    fn test_engine_reports_summary() {
        let puzzle = Puzzle::new(4, Peg::A, Peg::C, Peg::B).unwrap();
        let mut engine = HanoiEngine::new(Vec::<Move>::new());
        let summary = engine.run(&puzzle).unwrap();
        assert_eq!(summary.moves, 15);
        assert_eq!(summary.disks, 4);
        assert_eq!((summary.from, summary.to, summary.aux), ('A', 'C', 'B'));
        assert_eq!(engine.into_sink().len(), 15);
    }

    #[test]
    fn test_summary_serializes_elapsed_as_millis() {
        let summary = RunSummary {
            disks: 1,
            from: 'A',
            to: 'C',
            aux: 'B',
            strategy: Strategy::Iterative,
            moves: 1,
            elapsed: Duration::from_millis(12),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["elapsed_ms"], 12);
        assert_eq!(json["strategy"], "iterative");
    }
}
