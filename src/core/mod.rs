pub mod board;
pub mod engine;
pub mod solver;

pub use crate::domain::model::{DiskCount, Move, OutputFormat, Peg, Puzzle, Rods, Strategy};
pub use crate::domain::ports::{MoveSink, TextSink};
pub use crate::utils::error::Result;
