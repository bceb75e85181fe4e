//! `docfill keys` — show what a values file parses to.

use docfill_adapters::LocalFilesystem;
use docfill_core::{application::PlaceholderService, domain::ConfigMap};

use crate::{
    cli::KeysArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: KeysArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let env_file = args.env_file.unwrap_or(config.paths.env_file);
    let service = PlaceholderService::new(Box::new(LocalFilesystem::new()));
    let map = service.load_config(&env_file)?;

    if output.is_json() {
        if args.show_values {
            let entries: Vec<_> = map.iter().collect();
            output.json(&entries)?;
        } else {
            let keys: Vec<&str> = map.keys().collect();
            output.json(&keys)?;
        }
        return Ok(());
    }

    if map.is_empty() {
        output.warning(&format!("No keys found in {}", env_file.display()))?;
        return Ok(());
    }

    output.header(&format!("{} key(s) in {}", map.len(), env_file.display()))?;
    for line in render_lines(&map, args.show_values) {
        output.print(&line)?;
    }
    Ok(())
}

fn render_lines(map: &ConfigMap, show_values: bool) -> Vec<String> {
    map.iter()
        .map(|entry| {
            if show_values {
                format!("[{}] = {}", entry.key, entry.value)
            } else {
                format!("[{}]", entry.key)
            }
        })
        .collect()
}
