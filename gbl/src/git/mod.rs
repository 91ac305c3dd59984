// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod error;
pub mod git_ops;
pub mod invoker;
pub mod normalize;
pub mod repo_check;

// Re-export.
pub use error::*;
pub use git_ops::*;
pub use invoker::*;
pub use normalize::*;
pub use repo_check::*;
