//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "docfill",
    bin_name = "docfill",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Fill [KEY] placeholders in Markdown from a KEY=VALUE file",
    long_about = "docfill reads a flat KEY=VALUE file and replaces every literal \
                  [KEY] token in the Markdown files under a directory, \
                  rewriting only the files that changed.",
    after_help = "EXAMPLES:\n\
        \x20 docfill apply                        # .env + current directory\n\
        \x20 docfill apply knowledge -e config.env\n\
        \x20 docfill apply docs --dry-run -v\n\
        \x20 docfill keys -e config.env\n\
        \x20 docfill completions bash > /usr/share/bash-completion/completions/docfill",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replace placeholders in every target file under a directory.
    #[command(
        visible_alias = "a",
        about = "Fill placeholders under a directory",
        after_help = "EXAMPLES:\n\
            \x20 docfill apply\n\
            \x20 docfill apply knowledge --env-file config.env\n\
            \x20 docfill apply docs --ext md --ext mdx --dry-run"
    )]
    Apply(ApplyArgs),

    /// Show the keys parsed from a values file.
    #[command(
        about = "List keys loaded from a values file",
        after_help = "EXAMPLES:\n\
            \x20 docfill keys\n\
            \x20 docfill keys -e config.env --show-values"
    )]
    Keys(KeysArgs),

    /// Write a default settings file.
    #[command(
        about = "Initialise settings",
        after_help = "EXAMPLES:\n\
            \x20 docfill init           # ./docfill.toml\n\
            \x20 docfill init --global  # user config directory"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 docfill completions bash > ~/.local/share/bash-completion/completions/docfill\n\
            \x20 docfill completions zsh  > ~/.zfunc/_docfill\n\
            \x20 docfill completions fish > ~/.config/fish/completions/docfill.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective settings.
    #[command(
        about = "Settings inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 docfill config get paths.env_file\n\
            \x20 docfill config list\n\
            \x20 docfill config path"
    )]
    Config(ConfigCommands),
}

// ── apply ─────────────────────────────────────────────────────────────────────

/// Arguments for `docfill apply`.
#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Directory to scan.  Defaults to `paths.root` from settings, then `.`.
    #[arg(value_name = "ROOT", help = "Directory to scan for target files")]
    pub root: Option<PathBuf>,

    /// The `KEY=VALUE` file.
    #[arg(
        short = 'e',
        long = "env-file",
        value_name = "FILE",
        help = "KEY=VALUE file with placeholder values (default: .env)"
    )]
    pub env_file: Option<PathBuf>,

    /// Target extensions; repeatable.  Replaces the configured list.
    #[arg(
        short = 'x',
        long = "ext",
        value_name = "EXT",
        help = "Target file extension, repeatable (default: md)"
    )]
    pub extensions: Vec<String>,

    /// Preview replacements without writing any files.
    #[arg(long = "dry-run", help = "Report what would change without writing")]
    pub dry_run: bool,

    /// Exit non-zero when any file failed to read or write.
    #[arg(long = "strict", help = "Fail the run if any file could not be processed")]
    pub strict: bool,

    /// Follow symbolic links while scanning.
    #[arg(long = "follow-links", help = "Follow symbolic links while scanning")]
    pub follow_links: bool,
}

// ── keys ──────────────────────────────────────────────────────────────────────

/// Arguments for `docfill keys`.
#[derive(Debug, Args)]
pub struct KeysArgs {
    /// The `KEY=VALUE` file.
    #[arg(
        short = 'e',
        long = "env-file",
        value_name = "FILE",
        help = "KEY=VALUE file to inspect (default: .env)"
    )]
    pub env_file: Option<PathBuf>,

    /// Print values next to keys.
    #[arg(long = "show-values", help = "Print values as well as keys")]
    pub show_values: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `docfill init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the per-user config location instead of the current directory.
    #[arg(long = "global", help = "Create settings in the user config directory")]
    pub global: bool,

    /// Overwrite an existing settings file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing settings")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `docfill completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `docfill config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a settings key.
    Get {
        /// Dotted key path, e.g. `paths.env_file`.
        key: String,
    },
    /// Print all settings values.
    List,
    /// Print the path to the user settings file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_apply_defaults() {
        let cli = Cli::parse_from(["docfill", "apply"]);
        let Commands::Apply(args) = cli.command else {
            panic!("expected Apply command");
        };
        assert!(args.root.is_none());
        assert!(args.env_file.is_none());
        assert!(args.extensions.is_empty());
        assert!(!args.dry_run);
    }

    #[test]
    fn parse_apply_full() {
        let cli = Cli::parse_from([
            "docfill",
            "apply",
            "knowledge",
            "-e",
            "config.env",
            "-x",
            "md",
            "--ext",
            "mdx",
            "--dry-run",
            "--strict",
        ]);
        let Commands::Apply(args) = cli.command else {
            panic!("expected Apply command");
        };
        assert_eq!(args.root, Some(PathBuf::from("knowledge")));
        assert_eq!(args.env_file, Some(PathBuf::from("config.env")));
        assert_eq!(args.extensions, vec!["md", "mdx"]);
        assert!(args.dry_run);
        assert!(args.strict);
    }

    #[test]
    fn apply_alias() {
        let cli = Cli::parse_from(["docfill", "a", "docs"]);
        assert!(matches!(cli.command, Commands::Apply(_)));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["docfill", "apply", "-vv", "--output-format", "json"]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["docfill", "--quiet", "--verbose", "apply"]);
        assert!(result.is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["docfill", "-v"]).is_err());
    }

    #[test]
    fn output_format_from_setting() {
        assert_eq!(OutputFormat::from_setting("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_setting("human"), OutputFormat::Human);
        assert_eq!(OutputFormat::from_setting("whatever"), OutputFormat::Auto);
    }
}
