use crate::core::{DiskCount, OutputFormat, Peg, Strategy};
use crate::utils::error::{HanoiError, Result};
use crate::utils::validation::{validate_one_of, validate_range, validate_single_char, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const FORMATS: [&str; 3] = ["text", "json", "csv"];
const STRATEGIES: [&str; 2] = ["recursive", "iterative"];

/// Optional config file. Every section and key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub puzzle: PuzzleSection,
    pub output: OutputSection,
    pub limits: LimitsSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleSection {
    pub disks: Option<i64>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub aux: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub format: Option<String>,
    pub strategy: Option<String>,
    pub verify: Option<bool>,
    pub summary: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsSection {
    pub max_disks: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HanoiError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HanoiError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HANOI_DISKS})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HanoiError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn peg(field: &str, value: &Option<String>) -> Result<Option<Peg>> {
        match value {
            Some(label) => {
                let c = validate_single_char(field, label)?;
                Peg::new(c).map(Some)
            }
            None => Ok(None),
        }
    }

    pub fn from_peg(&self) -> Result<Option<Peg>> {
        Self::peg("puzzle.from", &self.puzzle.from)
    }

    pub fn to_peg(&self) -> Result<Option<Peg>> {
        Self::peg("puzzle.to", &self.puzzle.to)
    }

    pub fn aux_peg(&self) -> Result<Option<Peg>> {
        Self::peg("puzzle.aux", &self.puzzle.aux)
    }

    pub fn format(&self) -> Result<Option<OutputFormat>> {
        match self.output.format.as_deref() {
            None => Ok(None),
            Some(value) => {
                validate_one_of("output.format", value, &FORMATS)?;
                Ok(Some(match value {
                    "json" => OutputFormat::Json,
                    "csv" => OutputFormat::Csv,
                    _ => OutputFormat::Text,
                }))
            }
        }
    }

    pub fn strategy(&self) -> Result<Option<Strategy>> {
        match self.output.strategy.as_deref() {
            None => Ok(None),
            Some(value) => {
                validate_one_of("output.strategy", value, &STRATEGIES)?;
                Ok(Some(match value {
                    "iterative" => Strategy::Iterative,
                    _ => Strategy::Recursive,
                }))
            }
        }
    }

    pub fn max_disks(&self) -> u32 {
        self.limits.max_disks.unwrap_or(DiskCount::MAX)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(max) = self.limits.max_disks {
            validate_range("limits.max_disks", max, 1, DiskCount::MAX)?;
        }
        self.from_peg()?;
        self.to_peg()?;
        self.aux_peg()?;
        self.format()?;
        self.strategy()?;
        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[puzzle]
disks = 5
from = "L"
to = "R"
aux = "M"

[output]
format = "json"
strategy = "iterative"
verify = true

[limits]
max_disks = 20
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.puzzle.disks, Some(5));
        assert_eq!(config.from_peg().unwrap().map(Peg::label), Some('L'));
        assert_eq!(config.format().unwrap(), Some(OutputFormat::Json));
        assert_eq!(config.strategy().unwrap(), Some(Strategy::Iterative));
        assert_eq!(config.output.verify, Some(true));
        assert_eq!(config.max_disks(), 20);
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_disks(), DiskCount::MAX);
        assert_eq!(config.format().unwrap(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("HANOI_TEST_DISKS", "6");

        let toml_content = r#"
[puzzle]
disks = ${HANOI_TEST_DISKS}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.puzzle.disks, Some(6));

        std::env::remove_var("HANOI_TEST_DISKS");
    }

    #[test]
    fn test_unset_env_var_left_verbatim() {
        let toml_content = r#"
[puzzle]
from = "${HANOI_TEST_UNSET_LABEL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.puzzle.from.as_deref(), Some("${HANOI_TEST_UNSET_LABEL}"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let bad_format = TomlConfig::from_toml_str("[output]\nformat = \"xml\"\n").unwrap();
        assert!(bad_format.validate().is_err());

        let bad_limit = TomlConfig::from_toml_str("[limits]\nmax_disks = 64\n").unwrap();
        assert!(bad_limit.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[puzzle]\ndisks = 3\n\n[logging]\nverbose = true\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.puzzle.disks, Some(3));
        assert_eq!(config.logging.verbose, Some(true));
    }
}
