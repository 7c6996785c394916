//! Command-line configuration
//!
//! ```text
//! algoviz [FILE] [--sample ID] [--speed PRESET] [--loop] [--trace] [--log PATH]
//! algoviz --list-samples
//! ```
//!
//! With neither `FILE` nor `--sample` the bubble-sort sample is shown.

use crate::playback::{PlaybackConfig, SpeedPreset};
use crate::samples::Sample;
use std::fmt;
use std::path::PathBuf;

/// Where the snippet comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSelection {
    File(PathBuf),
    Sample(Sample),
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: SourceSelection,
    pub speed: SpeedPreset,
    pub auto_play: bool,
    /// Print the trace and exit instead of starting the TUI
    pub print_trace: bool,
    pub list_samples: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: SourceSelection::Sample(Sample::BubbleSort),
            speed: SpeedPreset::Normal,
            auto_play: false,
            print_trace: false,
            list_samples: false,
            log_file: None,
        }
    }
}

/// Errors from reading the command line or the source file
#[derive(Debug)]
pub enum ConfigError {
    UnknownFlag(String),
    MissingValue { flag: String },
    UnknownSample(String),
    InvalidSpeed(String),
    /// Both a file and `--sample` were given
    ConflictingSources,
    Io { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownFlag(flag) => write!(f, "Unknown option '{}'", flag),
            ConfigError::MissingValue { flag } => write!(f, "Option '{}' requires a value", flag),
            ConfigError::UnknownSample(id) => {
                let ids: Vec<&str> = Sample::ALL.iter().map(|s| s.id()).collect();
                write!(f, "Unknown sample '{}' (expected one of: {})", id, ids.join(", "))
            }
            ConfigError::InvalidSpeed(text) => write!(
                f,
                "Invalid speed '{}' (expected one of: 0.5x, 1x, 2x, 4x, 10x)",
                text
            ),
            ConfigError::ConflictingSources => {
                write!(f, "Give either a source file or --sample, not both")
            }
            ConfigError::Io { path, source } => {
                write!(f, "Cannot read '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl Config {
    /// Parse arguments, excluding the program name
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Config::default();
        let mut file: Option<PathBuf> = None;
        let mut sample: Option<Sample> = None;
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--sample" | "-s" => {
                    let id = expect_value(&arg, args.next())?;
                    sample = Some(Sample::from_id(&id).ok_or(ConfigError::UnknownSample(id))?);
                }
                "--speed" => {
                    let text = expect_value(&arg, args.next())?;
                    config.speed =
                        SpeedPreset::parse(&text).ok_or(ConfigError::InvalidSpeed(text))?;
                }
                "--log" => {
                    config.log_file = Some(PathBuf::from(expect_value(&arg, args.next())?));
                }
                "--loop" => config.auto_play = true,
                "--trace" => config.print_trace = true,
                "--list-samples" => config.list_samples = true,
                flag if flag.starts_with('-') => {
                    return Err(ConfigError::UnknownFlag(flag.to_string()));
                }
                path => {
                    if file.is_some() {
                        return Err(ConfigError::ConflictingSources);
                    }
                    file = Some(PathBuf::from(path));
                }
            }
        }

        config.source = match (file, sample) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingSources),
            (Some(path), None) => SourceSelection::File(path),
            (None, Some(sample)) => SourceSelection::Sample(sample),
            (None, None) => SourceSelection::Sample(Sample::BubbleSort),
        };
        Ok(config)
    }

    pub fn playback(&self) -> PlaybackConfig {
        PlaybackConfig {
            speed: self.speed.interval(),
            auto_play: self.auto_play,
        }
    }

    /// Load the selected snippet
    pub fn load_source(&self) -> Result<String, ConfigError> {
        match &self.source {
            SourceSelection::Sample(sample) => Ok(sample.source().to_string()),
            SourceSelection::File(path) => {
                std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}

fn expect_value(flag: &str, value: Option<String>) -> Result<String, ConfigError> {
    value.ok_or_else(|| ConfigError::MissingValue {
        flag: flag.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.playback(), PlaybackConfig::default());
    }

    #[test]
    fn test_flags() {
        let config =
            Config::from_args(["--sample", "reverse-array", "--speed", "4x", "--loop"]).unwrap();
        assert_eq!(config.source, SourceSelection::Sample(Sample::ReverseArray));
        assert_eq!(config.speed, SpeedPreset::Quadruple);
        assert!(config.auto_play);
        assert!(!config.print_trace);
    }

    #[test]
    fn test_file_argument() {
        let config = Config::from_args(["snippet.java", "--trace"]).unwrap();
        assert_eq!(config.source, SourceSelection::File(PathBuf::from("snippet.java")));
        assert!(config.print_trace);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            Config::from_args(["--sample", "heap-sort"]),
            Err(ConfigError::UnknownSample(_))
        ));
        assert!(matches!(
            Config::from_args(["--speed"]),
            Err(ConfigError::MissingValue { .. })
        ));
        assert!(matches!(
            Config::from_args(["--speed", "3x"]),
            Err(ConfigError::InvalidSpeed(_))
        ));
        assert!(matches!(
            Config::from_args(["--verbose"]),
            Err(ConfigError::UnknownFlag(_))
        ));
        assert!(matches!(
            Config::from_args(["a.java", "--sample", "dijkstra"]),
            Err(ConfigError::ConflictingSources)
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let config = Config::from_args(["/definitely/not/here.java"]).unwrap();
        let err = config.load_source().unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.java"));
    }
}
