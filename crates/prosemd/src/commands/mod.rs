pub(crate) mod batch;
pub(crate) mod completions;
pub(crate) mod init;
pub(crate) mod score;

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use prosemd_config as cli;
use prosemd_core::{BatchReceipt, DocumentFailure, DocumentOutcome, Scorer};

use crate::config::{self, Settings};
use crate::progress::Progress;
use crate::render;

pub(crate) fn dispatch(cli: cli::Cli) -> Result<ExitCode> {
    let global = &cli.global;
    match cli.command {
        cli::Commands::Completions(args) => completions::handle(args).map(|()| ExitCode::SUCCESS),
        cli::Commands::Init(args) => init::handle(args).map(|()| ExitCode::SUCCESS),
        cli::Commands::Score(args) => score::handle(args, global),
        cli::Commands::Batch(args) => batch::handle(args, global),
    }
}

/// Settings and scorer shared by the scoring commands.
pub(crate) fn prepare(global: &cli::GlobalArgs) -> Result<(Settings, Scorer)> {
    let file = config::discover(global.config.as_deref())?;
    let settings = config::resolve(global, file.as_ref())?;
    let scorer = config::build_scorer(&settings)?;
    Ok((settings, scorer))
}

/// A document ready to score, or one that already failed upstream.
pub(crate) type Entry = Result<(String, String), DocumentFailure>;

/// Score the ready entries in parallel and splice upstream failures back in,
/// keeping input order.
pub(crate) fn score_entries(
    scorer: &Scorer,
    entries: Vec<Entry>,
    show_progress: bool,
) -> Vec<DocumentOutcome> {
    let ready: Vec<(String, String)> = entries
        .iter()
        .filter_map(|entry| entry.as_ref().ok().cloned())
        .collect();

    let progress = Progress::new(ready.len(), show_progress);
    let mut scored = scorer
        .score_batch_with(&ready, |_| progress.inc())
        .into_iter();
    progress.finish_and_clear();

    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(_) => scored.next(),
            Err(failure) => {
                tracing::warn!(id = %failure.id, error = %failure.message, "document not scored");
                Some(DocumentOutcome::Failed(failure))
            }
        })
        .collect()
}

/// Render the receipt to stdout and map the summary to an exit code.
pub(crate) fn emit(settings: &Settings, documents: Vec<DocumentOutcome>) -> Result<ExitCode> {
    let receipt = BatchReceipt::new(crate::now_ms(), settings.score, documents);
    let out = render::render(&receipt, settings.format, settings.display_precision())?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(out.as_bytes())
        .context("failed to write output")?;
    stdout.flush().context("failed to write output")?;

    tracing::info!(
        scored = receipt.summary.scored,
        failed = receipt.summary.failed,
        "done"
    );
    if receipt.summary.failed > 0 {
        Ok(ExitCode::from(crate::EXIT_PARTIAL_FAILURE))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
