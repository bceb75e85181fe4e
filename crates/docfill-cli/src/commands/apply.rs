//! `docfill apply` — fill placeholders under a directory.

use std::path::PathBuf;

use tracing::{debug, instrument};

use docfill_adapters::LocalFilesystem;
use docfill_core::{
    application::{PlaceholderService, RewriteOptions},
    domain::{FileOutcome, RunSummary, TargetExtensions},
};

use crate::{
    cli::{ApplyArgs, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Inputs for one run, after flags have been layered over settings.
#[derive(Debug)]
struct ResolvedApply {
    env_file: PathBuf,
    root: PathBuf,
    options: RewriteOptions,
    follow_links: bool,
}

#[instrument(skip_all)]
pub fn execute(
    args: ApplyArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let strict = args.strict;
    let resolved = resolve(args, &config)?;
    debug!(
        env_file = %resolved.env_file.display(),
        root = %resolved.root.display(),
        extensions = %resolved.options.extensions,
        dry_run = resolved.options.dry_run,
        "Resolved apply inputs"
    );

    let filesystem = LocalFilesystem::new().follow_links(resolved.follow_links);
    let service = PlaceholderService::new(Box::new(filesystem));
    let summary = service.run(&resolved.env_file, &resolved.root, &resolved.options)?;

    report(&summary, global.verbose > 0, &output)?;

    if strict && summary.has_failures() {
        return Err(CliError::PartialFailure {
            failed: summary.files_failed,
        });
    }
    Ok(())
}

/// Flags win over settings; an empty `--ext` list falls back to settings.
fn resolve(args: ApplyArgs, config: &AppConfig) -> CliResult<ResolvedApply> {
    let extensions = if args.extensions.is_empty() {
        TargetExtensions::parse(&config.scan.extensions)?
    } else {
        TargetExtensions::parse(&args.extensions)?
    };

    Ok(ResolvedApply {
        env_file: args.env_file.unwrap_or_else(|| config.paths.env_file.clone()),
        root: args.root.unwrap_or_else(|| config.paths.root.clone()),
        options: RewriteOptions::new(extensions).dry_run(args.dry_run),
        follow_links: args.follow_links || config.scan.follow_links,
    })
}

fn report(summary: &RunSummary, verbose: bool, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(summary)?;
        return Ok(());
    }

    if verbose {
        for file in &summary.files {
            let line = format!(
                "{}: {} ({} replacement(s))",
                file.path.display(),
                outcome_label(&file.outcome),
                file.replacements
            );
            if file.outcome.is_change() {
                output.success(&line)?;
            } else if !file.outcome.is_failure() {
                output.print(&line)?;
            }
        }
    }

    for file in summary.failures() {
        let reason = match &file.outcome {
            FileOutcome::ReadFailed { reason } | FileOutcome::WriteFailed { reason } => {
                reason.as_str()
            }
            _ => "",
        };
        output.error(&failure_line(file.path.display(), &file.outcome, reason))?;
    }

    if summary.dry_run {
        output.info("Dry run: no files were written")?;
    }
    output.print(&summary_line(summary))?;
    Ok(())
}

fn outcome_label(outcome: &FileOutcome) -> &'static str {
    match outcome {
        FileOutcome::Unchanged => "unchanged",
        FileOutcome::Rewritten => "rewritten",
        FileOutcome::WouldRewrite => "would rewrite",
        FileOutcome::ReadFailed { .. } => "read failed",
        FileOutcome::WriteFailed { .. } => "write failed",
    }
}

fn failure_line(path: impl std::fmt::Display, outcome: &FileOutcome, reason: &str) -> String {
    format!("{path}: {} ({reason})", outcome_label(outcome))
}

fn summary_line(summary: &RunSummary) -> String {
    format!(
        "Processed {} file(s): {} changed, {} failed, {} replacement(s)",
        summary.files_scanned,
        summary.files_changed,
        summary.files_failed,
        summary.total_replacements
    )
}
