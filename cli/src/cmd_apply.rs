// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use clap::{ArgMatches, Command, arg, value_parser};
use downtimectl_core::{DowntimeApi, DowntimeId, DowntimeResource};

use crate::arg::CommonArgs;
use crate::state_formatter::StateFormatter;
use crate::util::{OutputFormat, load_declaration};

/// Creates a downtime, or updates it in place when an id is given.
#[derive(Debug, Clone)]
pub struct CmdApply {
    pub file: PathBuf,
    pub id: Option<DowntimeId>,
    pub output_format: OutputFormat,
}

impl CmdApply {
    pub const NAME: &str = "apply";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Schedule a downtime, or update an existing one")
            .arg(CommonArgs::file())
            .arg(
                arg!(--id <ID> "Update this downtime in place instead of creating one")
                    .value_parser(value_parser!(u64)),
            )
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            file: CommonArgs::get_file(matches),
            id: matches.get_one::<u64>("id").copied().map(DowntimeId::new),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run<A: DowntimeApi>(
        self,
        resource: &DowntimeResource<A>,
    ) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "applying declaration...");
        let config = load_declaration(&self.file).await?;
        let state = match self.id {
            Some(id) => resource.update(id, &config).await?,
            None => resource.create(&config).await?,
        };

        let formatter = StateFormatter::new().with_output_format(self.output_format);
        println!("{}", formatter.format(&state));
        Ok(())
    }
}
