// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use downtimectl_core::{DowntimeApi, DowntimeId, DowntimeResource};

use crate::arg::CommonArgs;
use crate::state_formatter::StateFormatter;
use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdShow {
    pub id: DowntimeId,
    pub output_format: OutputFormat,
}

impl CmdShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show a downtime")
            .arg(CommonArgs::id())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: CommonArgs::get_id(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run<A: DowntimeApi>(
        self,
        resource: &DowntimeResource<A>,
    ) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "reading downtime...");
        match resource.read(self.id, None).await? {
            Some(state) => {
                let formatter = StateFormatter::new().with_output_format(self.output_format);
                println!("{}", formatter.format(&state));
            }
            None => println!("{} downtime {} no longer exists", "Gone:".yellow(), self.id),
        }
        Ok(())
    }
}
