// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Text styles shared by every user facing message. Text that came from git is never
//! styled, see [`git_output`].

use std::fmt::Display;

use r3bl_tui::{InlineString, fg_lizard_green, fg_pink, fg_silver_metallic, fg_slate_gray,
               fg_soft_pink, inline_string};

pub const SUCCESS_MARK: &str = "✅";
pub const FAILURE_MARK: &str = "❌";

#[must_use]
pub fn colon() -> InlineString { dim(":") }

#[must_use]
pub fn period() -> InlineString { dim(".") }

/// Normal or default text style.
pub fn normal(arg_text: impl Display) -> InlineString {
    fg_silver_metallic(inline_string!("{arg_text}")).to_small_str()
}

/// Error text style.
pub fn error(arg_text: impl Display) -> InlineString {
    fg_pink(inline_string!("{arg_text}")).to_small_str()
}

/// A branch or file name the action worked on.
pub fn item(arg_text: impl Display) -> InlineString {
    fg_lizard_green(inline_string!("{arg_text}")).to_small_str()
}

/// A branch or file name the action failed on.
pub fn item_failed(arg_text: impl Display) -> InlineString {
    fg_soft_pink(inline_string!("{arg_text}")).to_small_str()
}

/// De-emphasize (dim) text.
pub fn dim(arg_text: impl Display) -> InlineString {
    fg_slate_gray(inline_string!("{arg_text}")).to_small_str()
}

/// git's combined output, shown as is minus the trailing newline.
#[must_use]
pub fn git_output(text: &str) -> &str { text.trim_end() }
