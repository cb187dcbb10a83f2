//! Config discovery and merging of CLI flags over `prosemd.toml`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use prosemd_config::{
    self as cli, CONFIG_FILE_NAME, DEFAULT_PRECISION, MAX_PRECISION, OutputFormat, TomlConfig,
};
use prosemd_core::{Lexicon, Polarity, ScoreConfig, Scorer, ValencePolarity};

/// Everything a scoring command needs, after precedence is applied.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Settings {
    pub positive: PathBuf,
    pub negative: PathBuf,
    pub valence: Option<PathBuf>,
    pub score: ScoreConfig,
    pub format: OutputFormat,
    pub precision: Option<u32>,
}

impl Settings {
    /// Decimals for rendered scores; Markdown always rounds.
    pub fn display_precision(&self) -> Option<u32> {
        match self.format {
            OutputFormat::Md => Some(self.precision.unwrap_or(DEFAULT_PRECISION)),
            OutputFormat::Json | OutputFormat::Jsonl => self.precision,
        }
    }
}

/// Candidate config files in lookup order, excluding `--config`.
pub(crate) fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("prosemd").join(CONFIG_FILE_NAME));
    }
    paths
}

/// Load the first config file found. An explicit path must exist.
pub(crate) fn discover(explicit: Option<&Path>) -> Result<Option<TomlConfig>> {
    if let Some(path) = explicit {
        return load(path).map(Some);
    }
    for path in candidate_paths() {
        if path.is_file() {
            return load(&path).map(Some);
        }
    }
    tracing::debug!("no config file found");
    Ok(None)
}

fn load(path: &Path) -> Result<TomlConfig> {
    let mut config = TomlConfig::from_file(path)?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    config.rebase_paths(base);
    tracing::info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// CLI flags win over file values, which win over defaults.
pub(crate) fn resolve(global: &cli::GlobalArgs, file: Option<&TomlConfig>) -> Result<Settings> {
    let positive = global
        .positive
        .clone()
        .or_else(|| file.and_then(|f| f.lexicon.positive.clone()))
        .context("no positive word list configured")?;
    let negative = global
        .negative
        .clone()
        .or_else(|| file.and_then(|f| f.lexicon.negative.clone()))
        .context("no negative word list configured")?;
    let valence = global
        .valence
        .clone()
        .or_else(|| file.and_then(|f| f.sentiment.valence.clone()));

    let score = global
        .threshold
        .map(ScoreConfig::with_threshold)
        .or_else(|| file.map(TomlConfig::score_config))
        .unwrap_or_default();
    score.validate()?;

    let precision = global
        .precision
        .or_else(|| file.and_then(|f| f.output.precision));
    if let Some(p) = precision.filter(|&p| p > MAX_PRECISION) {
        bail!("precision must be at most {MAX_PRECISION} decimal places, got {p}");
    }

    Ok(Settings {
        positive,
        negative,
        valence,
        score,
        format: global
            .format
            .or_else(|| file.and_then(|f| f.output.format))
            .unwrap_or_default(),
        precision,
    })
}

/// Load reference data and build the shared scorer.
pub(crate) fn build_scorer(settings: &Settings) -> Result<Scorer> {
    let lexicon = Lexicon::from_files(&settings.positive, &settings.negative)?;
    tracing::info!(
        positive = lexicon.positive_len(),
        negative = lexicon.negative_len(),
        "lexicon ready"
    );

    let polarity: Arc<dyn Polarity> = match &settings.valence {
        Some(path) => Arc::new(ValencePolarity::from_vader_file(path)?),
        None => Arc::new(ValencePolarity::from_lexicon(&lexicon)),
    };

    Ok(Scorer::new(Arc::new(lexicon), polarity, settings.score)?)
}
