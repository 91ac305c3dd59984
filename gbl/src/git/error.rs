// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;

/// A `git` invocation reported failure (non-zero exit, or the process could not be
/// started). The message is the raw combined stdout + stderr of that invocation, kept
/// verbatim: it is what gets shown to the user, and nothing tries to parse it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(gbl::git::invocation_failed))]
pub struct GitError {
    pub message: String,
}

impl GitError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
