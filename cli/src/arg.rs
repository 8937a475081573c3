// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use clap::{Arg, ArgMatches, ValueHint, arg, value_parser};
use downtimectl_core::DowntimeId;

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn file() -> Arg {
        arg!(file: <FILE> "Path to the downtime declaration")
            .value_parser(value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath)
    }

    pub fn get_file(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("file")
            .expect("file is required")
            .clone()
    }

    pub fn id() -> Arg {
        arg!(id: <ID> "The downtime id").value_parser(value_parser!(u64))
    }

    pub fn get_id(matches: &ArgMatches) -> DowntimeId {
        let id = matches.get_one::<u64>("id").expect("id is required");
        DowntimeId::new(*id)
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}
