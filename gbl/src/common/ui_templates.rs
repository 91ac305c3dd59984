// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_tui::{CliTextLine, CliTextLines, cli_text_line, cli_text_lines, fg_frozen_blue,
               fg_lavender, fg_light_yellow_green, fg_sky_blue};

const FIRST_COLUMN_WIDTH: usize = 20;

/// Helper function to format two strings into columns.
/// The first column has a fixed width defined by `FIRST_COLUMN_WIDTH`.
fn fmt_two_col(col1: &str, col2: &str) -> String {
    format!("{col1:<FIRST_COLUMN_WIDTH$} {col2}")
}

/// The prompt line that goes under the key instructions.
#[must_use]
pub fn header_last_line(text: &str) -> CliTextLine {
    cli_text_line![fg_frozen_blue(text).bg_moonlight_blue()]
}

/// Instruction header for the multi select list, with `last_line` appended. It converts
/// into a multi line `r3bl_tui` choose header.
#[must_use]
pub fn multi_select_instruction_header(
    last_line: CliTextLine,
) -> CliTextLines {
    let text_up_and_down = fmt_two_col("Up or down:", "navigate");
    let text_space = fmt_two_col("Space:", "select or deselect item");
    let text_esc = fmt_two_col("Esc or Ctrl+C:", "exit program");
    let text_return_key = fmt_two_col("Return:", "confirm selection");

    let up_and_down = fg_light_yellow_green(text_up_and_down).bg_night_blue();
    let space = fg_light_yellow_green(text_space).bg_night_blue();
    let esc = fg_lavender(text_esc).bg_night_blue();
    let return_key = fg_sky_blue(text_return_key).bg_night_blue();

    cli_text_lines![
        cli_text_line![up_and_down],
        cli_text_line![space],
        cli_text_line![esc],
        cli_text_line![return_key],
        last_line,
    ]
}

/// Instruction header for the single select list, with `last_line` appended.
#[must_use]
pub fn single_select_instruction_header(
    last_line: CliTextLine,
) -> CliTextLines {
    let text_up_or_down = fmt_two_col("Up or down:", "navigate");
    let text_esc = fmt_two_col("Esc or Ctrl+C:", "exit program");
    let text_return_key = fmt_two_col("Return:", "confirm selection");

    let up_or_down = fg_light_yellow_green(text_up_or_down).bg_night_blue();
    let esc = fg_lavender(text_esc).bg_night_blue();
    let return_key = fg_sky_blue(text_return_key).bg_night_blue();

    cli_text_lines![
        cli_text_line![up_or_down],
        cli_text_line![esc],
        cli_text_line![return_key],
        last_line,
    ]
}
