use crate::utils::error::{HanoiError, Result};
use crate::utils::validation::validate_distinct;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A rod label. Only the label is modelled; which disks rest on a peg is
/// implicit in the move sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Peg(char);

impl Peg {
    pub const A: Peg = Peg('A');
    pub const B: Peg = Peg('B');
    pub const C: Peg = Peg('C');

    pub fn new(label: char) -> Result<Self> {
        if label.is_whitespace() || label.is_control() {
            return Err(HanoiError::InvalidPegLabel {
                label: label.escape_default().to_string(),
                reason: "must be a visible character".to_string(),
            });
        }
        Ok(Self(label))
    }

    pub fn label(self) -> char {
        self.0
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Peg {
    type Err = HanoiError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Peg::new(c),
            _ => Err(HanoiError::InvalidPegLabel {
                label: s.to_string(),
                reason: "expected exactly one character".to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Peg {
    type Error = HanoiError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Peg> for String {
    fn from(peg: Peg) -> Self {
        peg.0.to_string()
    }
}

/// Source, destination and auxiliary pegs of one transfer. The three labels
/// are always pairwise distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rods {
    from: Peg,
    to: Peg,
    aux: Peg,
}

impl Rods {
    pub fn new(from: Peg, to: Peg, aux: Peg) -> Result<Self> {
        validate_distinct(&[from.label(), to.label(), aux.label()])?;
        Ok(Self { from, to, aux })
    }

    pub fn from(&self) -> Peg {
        self.from
    }

    pub fn to(&self) -> Peg {
        self.to
    }

    pub fn aux(&self) -> Peg {
        self.aux
    }
}

impl Default for Rods {
    fn default() -> Self {
        Self {
            from: Peg::A,
            to: Peg::C,
            aux: Peg::B,
        }
    }
}

/// Number of disks in a tower, `0..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DiskCount(u32);

impl DiskCount {
    /// Largest tower whose move count `2^n - 1` still fits in a `u64`.
    pub const MAX: u32 = 63;

    pub fn new(disks: i64) -> Result<Self> {
        Self::with_limit(disks, Self::MAX)
    }

    /// Same as [`DiskCount::new`] but with a caller-chosen ceiling (never
    /// above [`DiskCount::MAX`]).
    pub fn with_limit(disks: i64, max: u32) -> Result<Self> {
        let max = max.min(Self::MAX);
        if disks < 0 {
            return Err(HanoiError::NegativeDiskCount { disks });
        }
        if disks > i64::from(max) {
            return Err(HanoiError::TooManyDisks { disks, max });
        }
        Ok(Self(disks as u32))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// `2^n - 1`
    pub fn move_count(self) -> u64 {
        (1u64 << self.0) - 1
    }
}

impl fmt::Display for DiskCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    pub disks: DiskCount,
    pub rods: Rods,
}

impl Puzzle {
    pub fn new(disks: i64, from: Peg, to: Peg, aux: Peg) -> Result<Self> {
        Ok(Self {
            disks: DiskCount::new(disks)?,
            rods: Rods::new(from, to, aux)?,
        })
    }
}

/// One relocation of the top disk of `from` onto `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub disk: u32,
    pub from: Peg,
    pub to: Peg,
}

impl Move {
    pub fn new(disk: u32, from: Peg, to: Peg) -> Self {
        Self { disk, from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move disk {} from rod {} to rod {}",
            self.disk, self.from, self.to
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Recursive,
    Iterative,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Recursive => write!(f, "recursive"),
            Strategy::Iterative => write!(f, "iterative"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}
