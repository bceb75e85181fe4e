//! docfill Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for docfill, a
//! tool that fills `[KEY]` placeholders across a tree of Markdown documents
//! from a flat `KEY=VALUE` file.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           docfill-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (PlaceholderService)           │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │             (Filesystem)                │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     docfill-adapters (Infrastructure)   │
//! │  (LocalFilesystem, MemoryFilesystem)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (ConfigMap, apply_replacements,        │
//! │   RunSummary, TargetExtensions)         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use docfill_core::application::{PlaceholderService, RewriteOptions};
//!
//! # fn demo(filesystem: Box<dyn docfill_core::application::Filesystem>) {
//! let service = PlaceholderService::new(filesystem);
//! let map = service.load_config(Path::new(".env")).unwrap();
//! let summary = service
//!     .rewrite(Path::new("docs"), &map, &RewriteOptions::default())
//!     .unwrap();
//! println!("{} replacement(s)", summary.total_replacements);
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        PlaceholderService, RewriteOptions, ports::Filesystem,
    };
    pub use crate::domain::{
        ConfigEntry, ConfigMap, FileOutcome, FileReport, RunSummary, TargetExtension,
        TargetExtensions, apply_replacements,
    };
    pub use crate::error::{DocfillError, DocfillResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
