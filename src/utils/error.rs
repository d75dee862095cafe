use thiserror::Error;

#[derive(Error, Debug)]
pub enum HanoiError {
    #[error("Disk count must not be negative, got {disks}")]
    NegativeDiskCount { disks: i64 },

    #[error("Disk count {disks} exceeds the maximum of {max}")]
    TooManyDisks { disks: i64, max: u32 },

    #[error("Peg '{peg}' is used for more than one role")]
    DuplicatePeg { peg: char },

    #[error("Invalid peg label '{label}': {reason}")]
    InvalidPegLabel { label: String, reason: String },

    #[error("Illegal move of disk {disk} from rod {from} to rod {to}: {reason}")]
    IllegalMove {
        disk: u32,
        from: char,
        to: char,
        reason: String,
    },

    #[error("Tower of {disks} disks was not completed on rod {to}")]
    Unsolved { disks: u32, to: char },

    #[cfg(feature = "cli")]
    #[error("Invalid argument: {0}")]
    ArgumentError(#[from] clap::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Config,
    Output,
    Internal,
}

impl HanoiError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HanoiError::NegativeDiskCount { .. }
            | HanoiError::TooManyDisks { .. }
            | HanoiError::DuplicatePeg { .. }
            | HanoiError::InvalidPegLabel { .. } => ErrorCategory::Input,
            #[cfg(feature = "cli")]
            HanoiError::ArgumentError(_) => ErrorCategory::Input,
            HanoiError::ConfigError { .. } | HanoiError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            HanoiError::IoError(_)
            | HanoiError::CsvError(_)
            | HanoiError::SerializationError(_) => ErrorCategory::Output,
            HanoiError::IllegalMove { .. } | HanoiError::Unsolved { .. } => {
                ErrorCategory::Internal
            }
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Invalid puzzle parameters: {}", self),
            ErrorCategory::Config => format!("Configuration problem: {}", self),
            ErrorCategory::Output => format!("Could not write moves: {}", self),
            ErrorCategory::Internal => format!("Move verification failed: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HanoiError::NegativeDiskCount { .. } => "Pass a disk count of 0 or more",
            HanoiError::TooManyDisks { .. } => {
                "Lower --disks or raise limits.max_disks (at most 63)"
            }
            HanoiError::DuplicatePeg { .. } => "Use three different labels for --from, --to and --aux",
            HanoiError::InvalidPegLabel { .. } => "Peg labels must be a single visible character",
            #[cfg(feature = "cli")]
            HanoiError::ArgumentError(_) => "Run with --help to see the accepted flags and values",
            HanoiError::ConfigError { .. } | HanoiError::InvalidConfigValueError { .. } => {
                "Check the config file against the documented keys"
            }
            HanoiError::IoError(_) | HanoiError::CsvError(_) | HanoiError::SerializationError(_) => {
                "Make sure the output stream is writable (e.g. the pipe is not closed)"
            }
            HanoiError::IllegalMove { .. } | HanoiError::Unsolved { .. } => {
                "This is a bug in the move generator, please report it"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Config => 1,
            ErrorCategory::Output => 2,
            ErrorCategory::Internal => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, HanoiError>;
