// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod branch;
pub mod bulk;
pub mod clap_config;
pub mod command;
pub mod common_types;
pub mod files;
pub mod run_options;
pub mod selector;
pub mod ui_str;

// Re-export.
pub use branch::*;
pub use bulk::*;
pub use clap_config::*;
pub use command::*;
pub use common_types::*;
pub use files::*;
pub use run_options::*;
pub use selector::*;
