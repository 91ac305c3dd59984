// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod config;
pub mod fmt;
pub mod logging;
pub mod ui_templates;

// Re-export.
pub use config::*;
pub use logging::*;
pub use ui_templates::*;
