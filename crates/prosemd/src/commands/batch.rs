use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use prosemd_config as cli;
use prosemd_core::{DocumentFailure, FailureKind};
use serde::Deserialize;

use super::Entry;

/// One line of batch input.
#[derive(Debug, Deserialize)]
struct BatchLine {
    id: String,
    text: String,
}

pub(crate) fn handle(args: cli::BatchArgs, global: &cli::GlobalArgs) -> Result<ExitCode> {
    let (settings, scorer) = super::prepare(global)?;
    let content = read_input(&args.input)?;
    let entries = parse_lines(&content);
    tracing::info!(documents = entries.len(), "batch input parsed");

    let show_progress = !global.no_progress;
    let documents = match args.jobs {
        Some(jobs) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build()
                .context("failed to start worker pool")?;
            pool.install(|| super::score_entries(&scorer, entries, show_progress))
        }
        None => super::score_entries(&scorer, entries, show_progress),
    };
    super::emit(&settings, documents)
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .lock()
            .read_to_string(&mut content)
            .context("failed to read input from stdin")?;
        return Ok(content);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input {}", path.display()))
}

/// Parse JSON Lines. Blank lines are skipped; a malformed line becomes a
/// failed document named after its line number.
fn parse_lines(content: &str) -> Vec<Entry> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str::<BatchLine>(line)
                .map(|doc| (doc.id, doc.text))
                .map_err(|err| DocumentFailure {
                    id: format!("line-{}", idx + 1),
                    kind: FailureKind::InvalidInput,
                    message: format!("malformed batch line: {err}"),
                })
        })
        .collect()
}
