// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod add_command;
pub mod remove_command;

// Re-export.
pub use add_command::*;
pub use remove_command::*;
