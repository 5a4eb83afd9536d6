use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlateError {
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
    #[error("Converter '{tool}' not found (searched: {})", display_searched(.searched))]
    ToolUnavailable { tool: String, searched: Vec<String> },
    #[error("Conversion failed (exit status {}): {stderr}", display_status(.status))]
    ConversionFailed { status: Option<i32>, stderr: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

fn display_searched(searched: &[String]) -> String {
    searched.join(", ")
}

fn display_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "none, terminated by signal".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, PlateError>;

/// Fill specification for the wells of a plate
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum WellFill {
    /// One color (any SVG `fill` value) broadcast to every well
    Uniform(String),
    /// One color per well, indexed `[row][col]`
    PerWell(Vec<Vec<String>>),
}

impl Default for WellFill {
    fn default() -> Self {
        WellFill::Uniform(crate::constants::DEFAULT_WELL_FILL.to_string())
    }
}

impl From<&str> for WellFill {
    fn from(color: &str) -> Self {
        WellFill::Uniform(color.to_string())
    }
}

impl From<String> for WellFill {
    fn from(color: String) -> Self {
        WellFill::Uniform(color)
    }
}

impl From<Vec<Vec<String>>> for WellFill {
    fn from(matrix: Vec<Vec<String>>) -> Self {
        WellFill::PerWell(matrix)
    }
}

/// Where the converter executable was looked up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolLookup {
    /// Search the directories of `PATH` for a command name
    OnPath(String),
    /// A fixed installation path
    At(PathBuf),
}

impl ToolLookup {
    pub fn describe(&self) -> String {
        match self {
            ToolLookup::OnPath(name) => format!("PATH:{}", name),
            ToolLookup::At(path) => path.display().to_string(),
        }
    }
}
