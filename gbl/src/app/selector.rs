// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_tui::{CommonResult, DefaultIoDevices, InlineString, ItemsOwned, choose, height,
               readline_async::{HowToChoose, StyleSheet}};

use crate::common::{header_last_line, multi_select_instruction_header,
                    single_select_instruction_header};

/// The interactive list the user picks from. Flows are generic over this so they can be
/// driven without a terminal.
///
/// The returned futures are not required to be `Send`, the terminal backed
/// implementation holds the stdin / stdout devices across awaits.
pub trait Selector {
    /// `Ok(None)` means the user backed out (Esc or Ctrl+C) without choosing.
    fn select_one(
        &mut self,
        header: &str,
        items: &[String],
    ) -> impl Future<Output = CommonResult<Option<String>>>;

    /// Returns the chosen items in the order they appear in `items`. An empty list means
    /// nothing was chosen.
    fn select_many(
        &mut self,
        header: &str,
        items: &[String],
    ) -> impl Future<Output = CommonResult<Vec<String>>>;
}

/// Renders the list in the terminal using [`choose`].
#[derive(Debug, Clone, Copy)]
pub struct TuiSelector {
    pub max_height: u16,
}

impl TuiSelector {
    #[must_use]
    pub fn new(max_height: u16) -> Self { Self { max_height } }

    async fn run_choose(
        &self,
        header: &str,
        items: &[String],
        how: HowToChoose,
    ) -> CommonResult<Vec<String>> {
        let header_with_instructions = {
            let last_line = header_last_line(header);
            match how {
                HowToChoose::Single => single_select_instruction_header(last_line),
                HowToChoose::Multiple => multi_select_instruction_header(last_line),
            }
        };

        let items_owned: ItemsOwned = items
            .iter()
            .map(|item| InlineString::from(item.as_str()))
            .collect();

        let mut default_io_devices = DefaultIoDevices::default();
        let selected = choose(
            header_with_instructions,
            items_owned,
            Some(height(self.max_height)),
            None,
            how,
            StyleSheet::default(),
            default_io_devices.as_mut_tuple(),
        )
        .await?; // Propagate UI errors (e.g., I/O errors).

        Ok(selected.into_iter().map(|it| it.to_string()).collect())
    }
}

impl Selector for TuiSelector {
    async fn select_one(
        &mut self,
        header: &str,
        items: &[String],
    ) -> CommonResult<Option<String>> {
        let selected = self.run_choose(header, items, HowToChoose::Single).await?;
        Ok(selected.into_iter().next())
    }

    async fn select_many(
        &mut self,
        header: &str,
        items: &[String],
    ) -> CommonResult<Vec<String>> {
        self.run_choose(header, items, HowToChoose::Multiple).await
    }
}
