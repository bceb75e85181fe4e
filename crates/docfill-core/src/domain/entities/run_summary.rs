use std::path::PathBuf;

use serde::Serialize;

/// What happened to a single target file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// No placeholder matched; the file was not written.
    Unchanged,
    /// At least one placeholder matched and the file was written back.
    Rewritten,
    /// At least one placeholder matched but writing was skipped (dry run).
    WouldRewrite,
    /// The file could not be read.
    ReadFailed { reason: String },
    /// The file was read and substituted but could not be written.
    WriteFailed { reason: String },
}

impl FileOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::ReadFailed { .. } | Self::WriteFailed { .. })
    }

    /// Whether the file's content changed (or would have, in a dry run).
    pub fn is_change(&self) -> bool {
        matches!(self, Self::Rewritten | Self::WouldRewrite)
    }
}

/// Per-file record returned by the rewrite pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub replacements: usize,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn new(path: impl Into<PathBuf>, replacements: usize, outcome: FileOutcome) -> Self {
        Self {
            path: path.into(),
            replacements,
            outcome,
        }
    }
}

/// Aggregate result of one run.
///
/// Built by folding [`FileReport`]s in with [`RunSummary::record`]; totals
/// only grow. Replacements found in a file that then failed to write are kept
/// on its report but not added to `total_replacements`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub files_changed: usize,
    pub files_failed: usize,
    pub total_replacements: usize,
    pub dry_run: bool,
    pub files: Vec<FileReport>,
}

impl RunSummary {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    pub fn record(&mut self, report: FileReport) {
        self.files_scanned += 1;
        if report.outcome.is_change() {
            self.files_changed += 1;
        }
        if report.outcome.is_failure() {
            self.files_failed += 1;
        } else {
            self.total_replacements += report.replacements;
        }
        self.files.push(report);
    }

    pub fn has_failures(&self) -> bool {
        self.files_failed > 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|r| r.outcome.is_failure())
    }
}
