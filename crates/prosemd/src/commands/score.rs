use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use prosemd_config as cli;
use prosemd_core::{DocumentFailure, FailureKind};

use super::Entry;

/// Id given to a document read from standard input.
const STDIN_ID: &str = "stdin";

pub(crate) fn handle(args: cli::ScoreArgs, global: &cli::GlobalArgs) -> Result<ExitCode> {
    let (settings, scorer) = super::prepare(global)?;

    let entries: Vec<Entry> = if args.files.is_empty() {
        vec![read_stdin()]
    } else {
        args.files.iter().map(|path| read_document(path)).collect()
    };

    let documents = super::score_entries(&scorer, entries, !global.no_progress);
    super::emit(&settings, documents)
}

fn read_document(path: &Path) -> Entry {
    if path == Path::new("-") {
        return read_stdin();
    }
    let id = path.display().to_string();
    match std::fs::read(path) {
        Ok(bytes) => decode(id, bytes),
        Err(err) => Err(invalid(id, format!("failed to read input: {err}"))),
    }
}

fn read_stdin() -> Entry {
    let mut bytes = Vec::new();
    match std::io::stdin().lock().read_to_end(&mut bytes) {
        Ok(_) => decode(STDIN_ID.to_string(), bytes),
        Err(err) => Err(invalid(
            STDIN_ID.to_string(),
            format!("failed to read input: {err}"),
        )),
    }
}

fn decode(id: String, bytes: Vec<u8>) -> Entry {
    match String::from_utf8(bytes) {
        Ok(text) => Ok((id, text)),
        Err(err) => Err(invalid(id, format!("input is not valid UTF-8: {err}"))),
    }
}

fn invalid(id: String, message: String) -> DocumentFailure {
    DocumentFailure {
        id,
        kind: FailureKind::InvalidInput,
        message,
    }
}
