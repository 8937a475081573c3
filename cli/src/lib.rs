// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod arg;
mod cli;
mod cmd_apply;
mod cmd_destroy;
mod cmd_generate_completion;
mod cmd_show;
mod cmd_validate;
mod config;
mod state_formatter;
#[cfg(test)]
mod test_util;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::{Config, parse_config};
