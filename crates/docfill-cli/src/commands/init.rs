//! `docfill init` — write a default settings file.

use std::path::{Path, PathBuf};

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_SETTINGS_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Create a default settings file in `.` or, with `--global`, in the user
/// config directory.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let target = if args.global {
        AppConfig::config_path()
    } else {
        PathBuf::from(LOCAL_SETTINGS_FILE)
    };

    write_defaults(&target, args.force)?;

    output.success(&format!("Settings created at {}", target.display()))?;
    Ok(())
}

fn write_defaults(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::SettingsExist {
            path: path.to_path_buf(),
        });
    }

    let text = toml::to_string_pretty(&AppConfig::default())
        .with_cli_context(|| "Failed to serialise default settings")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create settings directory '{}'", parent.display())
        })?;
    }

    std::fs::write(path, text)
        .with_cli_context(|| format!("Failed to write settings to '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_loadable_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/docfill.toml");

        write_defaults(&path, false).unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.paths.env_file, PathBuf::from(".env"));
        assert_eq!(cfg.scan.extensions, vec!["md"]);
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("docfill.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        let err = write_defaults(&path, false).unwrap_err();
        assert!(matches!(err, CliError::SettingsExist { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");
    }

    #[test]
    fn force_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("docfill.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        write_defaults(&path, true).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("[paths]"));
    }
}
