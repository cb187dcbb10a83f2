//! # prosemd-config
//!
//! **Tier 4 (Configuration)**
//!
//! CLI arguments and the `prosemd.toml` file schema.
//!
//! ## What belongs here
//! * Clap `Parser`, `Args`, `Subcommand` structs
//! * Configuration file struct definitions (Serde)
//! * Default values and enums
//!
//! ## What does NOT belong here
//! * Scoring logic
//! * Config discovery and merging (the CLI's job)
//! * I/O operations (except config file parsing)

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use prosemd_types::ScoreConfig;

/// File name looked up in the working directory and the user config dir.
pub const CONFIG_FILE_NAME: &str = "prosemd.toml";

/// Default number of decimals for rendered scores.
pub const DEFAULT_PRECISION: u32 = 4;

/// Largest accepted `precision`; an `f64` holds no more significant decimals.
pub const MAX_PRECISION: u32 = 15;

/// `prosemd`: readability and sentiment metrics for prose documents.
#[derive(Parser, Debug)]
#[command(name = "prosemd", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Path to a `prosemd.toml` (skips discovery).
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Positive word list, one word per line.
    #[arg(long, value_name = "PATH", global = true)]
    pub positive: Option<PathBuf>,

    /// Negative word list, one word per line.
    #[arg(long, value_name = "PATH", global = true)]
    pub negative: Option<PathBuf>,

    /// VADER-format valence table for polarity. Defaults to valences
    /// derived from the word lists.
    #[arg(long, value_name = "PATH", global = true)]
    pub valence: Option<PathBuf>,

    /// Minimum estimated syllables for a word to count as complex.
    #[arg(long, value_name = "N", global = true)]
    pub threshold: Option<usize>,

    /// Output format.
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Decimal places for scores in rendered output (0-15).
    #[arg(
        long,
        value_name = "N",
        global = true,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_PRECISION))
    )]
    pub precision: Option<u32>,

    /// Verbose logging to stderr (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable progress bars.
    #[arg(long, global = true)]
    pub no_progress: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Score one or more text files (stdin when none are given).
    Score(ScoreArgs),

    /// Score a JSON Lines file of `{"id": ..., "text": ...}` documents.
    Batch(BatchArgs),

    /// Write a `prosemd.toml` template to the target directory.
    Init(InitArgs),

    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ScoreArgs {
    /// Files to score. `-` reads stdin.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// JSON Lines input. `-` reads stdin.
    #[arg(value_name = "JSONL")]
    pub input: PathBuf,

    /// Worker threads (defaults to the number of CPUs).
    #[arg(long, short = 'j', value_name = "N")]
    pub jobs: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Target directory (defaults to ".").
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite an existing `prosemd.toml`.
    #[arg(long)]
    pub force: bool,

    /// Print the template to stdout instead of writing a file.
    #[arg(long)]
    pub print: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Powershell,
    Zsh,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Pretty-printed batch receipt.
    #[default]
    Json,
    /// One document outcome per line.
    Jsonl,
    /// Markdown table.
    Md,
}

// =============================================================================
// TOML configuration file
// =============================================================================

/// Root TOML configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    /// Word lists.
    pub lexicon: LexiconConfig,

    /// Polarity source.
    pub sentiment: SentimentConfig,

    /// Scoring knobs.
    pub score: ScoreSection,

    /// Rendering.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LexiconConfig {
    /// Positive word list. Relative paths resolve against the config file.
    pub positive: Option<PathBuf>,

    /// Negative word list. Relative paths resolve against the config file.
    pub negative: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SentimentConfig {
    /// VADER-format valence table.
    pub valence: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoreSection {
    pub complexity_threshold: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub precision: Option<u32>,
}

/// Errors from reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl TomlConfig {
    /// Load configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load configuration from a file path.
    pub fn from_file(path: &Path) -> Result<Self, ConfigFileError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigFileError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Rewrite relative paths so they are relative to `base` instead of the
    /// working directory.
    pub fn rebase_paths(&mut self, base: &Path) {
        for path in [
            &mut self.lexicon.positive,
            &mut self.lexicon.negative,
            &mut self.sentiment.valence,
        ]
        .into_iter()
        .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }

    /// Scoring settings from the `[score]` section, defaults elsewhere.
    pub fn score_config(&self) -> ScoreConfig {
        self.score
            .complexity_threshold
            .map(ScoreConfig::with_threshold)
            .unwrap_or_default()
    }
}

/// Commented template written by `prosemd init`.
pub const INIT_TEMPLATE: &str = r#"# prosemd configuration
#
# Paths are relative to this file.

[lexicon]
# One word per line. Lines starting with ';' are comments.
positive = "positive-words.txt"
negative = "negative-words.txt"

[sentiment]
# Optional VADER-format table (token<TAB>mean<TAB>...).
# Without it, polarity is derived from the word lists.
# valence = "vader_lexicon.txt"

[score]
# Words with at least this many estimated syllables are complex.
complexity_threshold = 2

[output]
# json | jsonl | md
format = "json"
precision = 4
"#;
