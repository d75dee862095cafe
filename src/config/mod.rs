pub mod toml_config;

use crate::core::{DiskCount, OutputFormat, Peg, Puzzle, Rods, Strategy};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub disks: i64,
    pub from: Peg,
    pub to: Peg,
    pub aux: Peg,
    pub max_disks: u32,
    pub strategy: Strategy,
    pub format: OutputFormat,
    pub verify: bool,
    pub summary: bool,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Default for RunConfig {
    // 原始程式寫死的參數：4 個圓盤，A -> C，經由 B
    fn default() -> Self {
        Self {
            disks: 4,
            from: Peg::A,
            to: Peg::C,
            aux: Peg::B,
            max_disks: DiskCount::MAX,
            strategy: Strategy::default(),
            format: OutputFormat::default(),
            verify: false,
            summary: false,
            verbose: false,
            json_logs: false,
        }
    }
}

impl RunConfig {
    /// Layers a config file over the current values.
    pub fn apply_toml(&mut self, file: &TomlConfig) -> Result<()> {
        file.validate()?;

        if let Some(disks) = file.puzzle.disks {
            self.disks = disks;
        }
        if let Some(peg) = file.from_peg()? {
            self.from = peg;
        }
        if let Some(peg) = file.to_peg()? {
            self.to = peg;
        }
        if let Some(peg) = file.aux_peg()? {
            self.aux = peg;
        }
        if let Some(strategy) = file.strategy()? {
            self.strategy = strategy;
        }
        if let Some(format) = file.format()? {
            self.format = format;
        }
        self.max_disks = file.max_disks();
        self.verify = file.output.verify.unwrap_or(self.verify);
        self.summary = file.output.summary.unwrap_or(self.summary);
        self.verbose = file.logging.verbose.unwrap_or(self.verbose);
        self.json_logs = file.logging.json.unwrap_or(self.json_logs);
        Ok(())
    }

    pub fn from_toml(file: &TomlConfig) -> Result<Self> {
        let mut config = Self::default();
        config.apply_toml(file)?;
        Ok(config)
    }

    pub fn puzzle(&self) -> Result<Puzzle> {
        Ok(Puzzle {
            disks: DiskCount::with_limit(self.disks, self.max_disks)?,
            rods: Rods::new(self.from, self.to, self.aux)?,
        })
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        self.puzzle().map(|_| ())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "hanoi")]
#[command(about = "Print the moves that solve the Tower of Hanoi puzzle")]
pub struct CliConfig {
    /// Number of disks [default: 4]
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub disks: Option<i64>,

    /// Source rod label [default: A]
    #[arg(long)]
    pub from: Option<Peg>,

    /// Destination rod label [default: C]
    #[arg(long)]
    pub to: Option<Peg>,

    /// Auxiliary rod label [default: B]
    #[arg(long)]
    pub aux: Option<Peg>,

    #[arg(long, value_enum)]
    pub strategy: Option<Strategy>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Replay every move on a three-peg board and fail on an illegal one
    #[arg(long)]
    pub verify: bool,

    /// Print a run summary as JSON to stderr
    #[arg(long)]
    pub summary: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列 > 設定檔 > 預設值
    pub fn resolve(&self) -> Result<RunConfig> {
        let mut config = RunConfig::default();

        if let Some(path) = &self.config {
            let file = TomlConfig::from_file(path)?;
            config.apply_toml(&file)?;
        }

        if let Some(disks) = self.disks {
            config.disks = disks;
        }
        if let Some(peg) = self.from {
            config.from = peg;
        }
        if let Some(peg) = self.to {
            config.to = peg;
        }
        if let Some(peg) = self.aux {
            config.aux = peg;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        config.verify |= self.verify;
        config.summary |= self.summary;
        config.verbose |= self.verbose;
        config.json_logs |= self.json_logs;

        Ok(config)
    }
}
