//! Shared test utilities for prosemd integration tests.
//!
//! Every test gets its own workspace directory holding word lists, and the
//! command runs with `HOME`/`XDG_CONFIG_HOME` pointed inside it so a user's
//! real `prosemd.toml` is never picked up.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const POSITIVE: &str = ";; opinion lexicon, positive\n\nlove\ngood\ngreat\n";
pub const NEGATIVE: &str = ";; opinion lexicon, negative\n\nhate\nbad\nawful\n";

pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let lists = dir.path().join("lists");
        fs::create_dir_all(&lists).unwrap();
        fs::write(lists.join("pos.txt"), POSITIVE).unwrap();
        fs::write(lists.join("neg.txt"), NEGATIVE).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn positive(&self) -> PathBuf {
        self.path().join("lists").join("pos.txt")
    }

    pub fn negative(&self) -> PathBuf {
        self.path().join("lists").join("neg.txt")
    }

    pub fn write(&self, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// `prosemd` with no lexicon flags.
    pub fn bare_cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_prosemd"));
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join("xdg"))
            .env("PROSEMD_NO_PROGRESS", "1")
            .env_remove("PROSEMD_LOG");
        cmd
    }

    /// `prosemd` with the fixture word lists passed as flags.
    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare_cmd();
        cmd.arg("--positive")
            .arg(self.positive())
            .arg("--negative")
            .arg(self.negative());
        cmd
    }
}

pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}
