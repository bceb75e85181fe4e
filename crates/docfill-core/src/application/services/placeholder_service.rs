//! Placeholder Service - main application orchestrator.
//!
//! This service coordinates the whole fill workflow:
//! 1. Load the `KEY=VALUE` file into a `ConfigMap`
//! 2. Enumerate target files under the scan root
//! 3. Substitute each file and write back the ones that changed
//!
//! Missing inputs abort the run before any file is touched. Failures on
//! individual files are recorded in the summary and the run moves on.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        ConfigMap, FileOutcome, FileReport, RunSummary, TargetExtensions, apply_replacements,
    },
    error::{DocfillError, DocfillResult},
};

/// Knobs for a single rewrite pass.
#[derive(Debug, Clone, Default)]
pub struct RewriteOptions {
    /// Which files count as targets.
    pub extensions: TargetExtensions,
    /// Compute everything, write nothing.
    pub dry_run: bool,
}

impl RewriteOptions {
    pub fn new(extensions: TargetExtensions) -> Self {
        Self {
            extensions,
            dry_run: false,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Main placeholder-filling service.
pub struct PlaceholderService {
    filesystem: Box<dyn Filesystem>,
}

impl PlaceholderService {
    /// Create a new service over the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Load and parse a `KEY=VALUE` file.
    ///
    /// Fails with [`ApplicationError::ConfigNotFound`] if `path` does not exist.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load_config(&self, path: &Path) -> DocfillResult<ConfigMap> {
        if !self.filesystem.exists(path) {
            return Err(ApplicationError::ConfigNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let text = self.filesystem.read_to_string(path)?;
        let map = ConfigMap::parse(&text);

        info!(keys = map.len(), "Values loaded");
        Ok(map)
    }

    /// Target files under `root`, sorted by path.
    pub fn discover(&self, root: &Path, extensions: &TargetExtensions) -> DocfillResult<Vec<PathBuf>> {
        if !self.filesystem.is_dir(root) {
            return Err(ApplicationError::DirectoryNotFound {
                path: root.to_path_buf(),
            }
            .into());
        }

        let mut targets: Vec<PathBuf> = self
            .filesystem
            .list_files(root)?
            .into_iter()
            .filter(|p| extensions.matches(p))
            .collect();
        targets.sort();

        debug!(count = targets.len(), "Target files discovered");
        Ok(targets)
    }

    /// Substitute placeholders in every target file under `root`.
    ///
    /// Fails with [`ApplicationError::DirectoryNotFound`] if `root` does not
    /// exist; per-file read/write failures end up in the returned summary.
    #[instrument(
        skip_all,
        fields(root = %root.display(), keys = map.len(), dry_run = options.dry_run)
    )]
    pub fn rewrite(
        &self,
        root: &Path,
        map: &ConfigMap,
        options: &RewriteOptions,
    ) -> DocfillResult<RunSummary> {
        let targets = self.discover(root, &options.extensions)?;

        let summary = targets
            .iter()
            .map(|path| self.rewrite_file(path, map, options.dry_run))
            .fold(RunSummary::new(options.dry_run), |mut summary, report| {
                summary.record(report);
                summary
            });

        info!(
            scanned = summary.files_scanned,
            changed = summary.files_changed,
            failed = summary.files_failed,
            replacements = summary.total_replacements,
            "Rewrite completed"
        );
        Ok(summary)
    }

    /// Load `env_file` then rewrite `root` with it.
    pub fn run(
        &self,
        env_file: &Path,
        root: &Path,
        options: &RewriteOptions,
    ) -> DocfillResult<RunSummary> {
        let map = self.load_config(env_file)?;
        self.rewrite(root, &map, options)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn rewrite_file(&self, path: &Path, map: &ConfigMap, dry_run: bool) -> FileReport {
        let original = match self.filesystem.read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skipping unreadable file");
                return FileReport::new(
                    path,
                    0,
                    FileOutcome::ReadFailed {
                        reason: failure_reason(&e),
                    },
                );
            }
        };

        let substitution = apply_replacements(&original, map);
        if !substitution.changed() {
            debug!(path = %path.display(), "No placeholders");
            return FileReport::new(path, 0, FileOutcome::Unchanged);
        }

        if dry_run {
            debug!(path = %path.display(), replacements = substitution.replacements, "Would rewrite");
            return FileReport::new(path, substitution.replacements, FileOutcome::WouldRewrite);
        }

        match self.filesystem.write_file(path, &substitution.content) {
            Ok(()) => {
                debug!(path = %path.display(), replacements = substitution.replacements, "Rewritten");
                FileReport::new(path, substitution.replacements, FileOutcome::Rewritten)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to write file");
                FileReport::new(
                    path,
                    substitution.replacements,
                    FileOutcome::WriteFailed {
                        reason: failure_reason(&e),
                    },
                )
            }
        }
    }
}

fn failure_reason(err: &DocfillError) -> String {
    match err {
        DocfillError::Application(app) => app.reason(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use mockall::predicate::*;

    fn service(fs: MockFilesystem) -> PlaceholderService {
        PlaceholderService::new(Box::new(fs))
    }

    fn read_error(path: &str) -> DocfillError {
        ApplicationError::FileRead {
            path: path.into(),
            reason: "stream did not contain valid UTF-8".into(),
        }
        .into()
    }

    #[test]
    fn load_config_missing_file() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_read_to_string().never();

        let err = service(fs).load_config(Path::new(".env")).unwrap_err();
        assert!(matches!(
            err,
            DocfillError::Application(ApplicationError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn load_config_parses_file() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .with(eq(Path::new("vars.env")))
            .returning(|_| Ok("# c\nA=1\nB=\"two\"\n".into()));

        let map = service(fs).load_config(Path::new("vars.env")).unwrap();
        assert_eq!(map.get("A"), Some("1"));
        assert_eq!(map.get("B"), Some("two"));
    }

    #[test]
    fn rewrite_missing_root_touches_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(false);
        fs.expect_list_files().never();
        fs.expect_write_file().never();

        let err = service(fs)
            .rewrite(Path::new("nope"), &ConfigMap::new(), &RewriteOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            DocfillError::Application(ApplicationError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn rewrite_only_writes_changed_markdown() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_list_files().returning(|_| {
            Ok(vec![
                PathBuf::from("docs/b.md"),
                PathBuf::from("docs/a.MD"),
                PathBuf::from("docs/notes.txt"),
            ])
        });
        fs.expect_read_to_string()
            .with(eq(Path::new("docs/a.MD")))
            .returning(|_| Ok("PHP [PHP_VERSION]".into()));
        fs.expect_read_to_string()
            .with(eq(Path::new("docs/b.md")))
            .returning(|_| Ok("nothing here".into()));
        fs.expect_write_file()
            .with(eq(Path::new("docs/a.MD")), eq("PHP 8.2"))
            .times(1)
            .returning(|_, _| Ok(()));

        let map = ConfigMap::new().with("PHP_VERSION", "8.2");
        let summary = service(fs)
            .rewrite(Path::new("docs"), &map, &RewriteOptions::default())
            .unwrap();

        assert_eq!(summary.files_scanned, 2);
        assert_eq!(summary.files_changed, 1);
        assert_eq!(summary.total_replacements, 1);
        assert_eq!(summary.files[0].path, PathBuf::from("docs/a.MD"));
        assert_eq!(summary.files[1].outcome, FileOutcome::Unchanged);
    }

    #[test]
    fn read_failure_is_recorded_and_run_continues() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_list_files()
            .returning(|_| Ok(vec![PathBuf::from("a.md"), PathBuf::from("b.md")]));
        fs.expect_read_to_string()
            .with(eq(Path::new("a.md")))
            .returning(|_| Err(read_error("a.md")));
        fs.expect_read_to_string()
            .with(eq(Path::new("b.md")))
            .returning(|_| Ok("[A]".into()));
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));

        let map = ConfigMap::new().with("A", "x");
        let summary = service(fs)
            .rewrite(Path::new("."), &map, &RewriteOptions::default())
            .unwrap();

        assert_eq!(summary.files_scanned, 2);
        assert_eq!(summary.files_failed, 1);
        assert_eq!(summary.files_changed, 1);
        assert_eq!(summary.total_replacements, 1);
        assert_eq!(
            summary.files[0].outcome,
            FileOutcome::ReadFailed {
                reason: "stream did not contain valid UTF-8".into()
            }
        );
    }

    #[test]
    fn write_failure_is_recorded() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_list_files()
            .returning(|_| Ok(vec![PathBuf::from("ro.md")]));
        fs.expect_read_to_string().returning(|_| Ok("[A][A]".into()));
        fs.expect_write_file().returning(|p, _| {
            Err(ApplicationError::FileWrite {
                path: p.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into())
        });

        let map = ConfigMap::new().with("A", "x");
        let summary = service(fs)
            .rewrite(Path::new("."), &map, &RewriteOptions::default())
            .unwrap();

        assert_eq!(summary.files_failed, 1);
        assert_eq!(summary.files_changed, 0);
        assert_eq!(summary.total_replacements, 0);
        assert_eq!(summary.files[0].replacements, 2);
        assert!(matches!(
            summary.files[0].outcome,
            FileOutcome::WriteFailed { .. }
        ));
    }

    #[test]
    fn dry_run_never_writes() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_list_files()
            .returning(|_| Ok(vec![PathBuf::from("a.md")]));
        fs.expect_read_to_string().returning(|_| Ok("[A][B]".into()));
        fs.expect_write_file().never();

        let map: ConfigMap = [("A", "1"), ("B", "2")].into_iter().collect();
        let options = RewriteOptions::default().dry_run(true);
        let summary = service(fs)
            .rewrite(Path::new("."), &map, &options)
            .unwrap();

        assert!(summary.dry_run);
        assert_eq!(summary.files_changed, 1);
        assert_eq!(summary.total_replacements, 2);
        assert_eq!(summary.files[0].outcome, FileOutcome::WouldRewrite);
    }

    #[test]
    fn empty_tree_is_a_clean_zero_run() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_list_files().returning(|_| Ok(vec![]));

        let summary = service(fs)
            .rewrite(Path::new("."), &ConfigMap::new(), &RewriteOptions::default())
            .unwrap();
        assert_eq!(summary, RunSummary::new(false));
    }

    #[test]
    fn run_fails_before_scanning_when_values_missing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_is_dir().never();
        fs.expect_list_files().never();

        let result = service(fs).run(
            Path::new("missing.env"),
            Path::new("."),
            &RewriteOptions::default(),
        );
        assert!(result.is_err());
    }
}
