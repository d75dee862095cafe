pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{BufferSink, ConsoleSink, CsvSink, JsonLinesSink, TextRenderer, VerifyingSink};
pub use config::{toml_config::TomlConfig, RunConfig};
pub use crate::core::board::Board;
pub use crate::core::engine::{HanoiEngine, RunSummary};
pub use crate::core::solver::{moves, solve, solve_puzzle, Moves};
pub use domain::model::{DiskCount, Move, OutputFormat, Peg, Puzzle, Rods, Strategy};
pub use domain::ports::{MoveSink, TextSink};
pub use utils::error::{HanoiError, Result};
