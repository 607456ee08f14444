// Shared helpers for integration tests.
//
// Provides temporary-directory-backed fixtures so each integration test can
// set up an isolated document or standalone configuration without repeating
// filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use texseq::cli::Cli;

/// An isolated build fixture backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
pub struct Fixture {
    /// Temporary directory holding documents and configuration files.
    pub dir: tempfile::TempDir,
}

impl Fixture {
    /// Create an empty fixture directory.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Path of a file inside the fixture directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a source document whose magic comment block contains `embedded`
    /// (one configuration line per element) and return its path.
    pub fn write_document(&self, name: &str, embedded: &[&str]) -> PathBuf {
        let mut doc = String::from("\\documentclass{article}\n% +++\n");
        for line in embedded {
            doc.push_str("% ");
            doc.push_str(line);
            doc.push('\n');
        }
        doc.push_str("% +++\n\\begin{document}\n\\end{document}\n");
        let path = self.path(name);
        std::fs::write(&path, doc).expect("write document");
        path
    }

    /// Write a standalone configuration file and return its path.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.path("texseq.toml");
        std::fs::write(&path, content).expect("write config file");
        path
    }
}

/// Build a [`Cli`] value for a document-mode invocation.
pub fn document_cli(files: &[&Path], dry_run: bool) -> Cli {
    Cli {
        files: files.iter().map(PathBuf::from).collect(),
        config: None,
        dry_run,
        quiet: false,
        verbose: false,
        version: false,
    }
}

/// Build a [`Cli`] value for a standalone-configuration invocation.
pub fn standalone_cli(config: &Path, dry_run: bool) -> Cli {
    Cli {
        files: Vec::new(),
        config: Some(config.to_path_buf()),
        dry_run,
        quiet: false,
        verbose: false,
        version: false,
    }
}
