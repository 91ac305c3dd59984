// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod checkout_command;
pub mod delete_command;

// Re-export.
pub use checkout_command::*;
pub use delete_command::*;
