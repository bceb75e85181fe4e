pub mod config_map;
pub mod placeholder;
pub mod run_summary;

pub use config_map::{ConfigEntry, ConfigMap};
pub use placeholder::{Placeholder, Substitution, apply_replacements};
pub use run_summary::{FileOutcome, FileReport, RunSummary};
