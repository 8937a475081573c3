// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use downtimectl_core::{DowntimeApi, DowntimeId, DowntimeResource};

use crate::arg::CommonArgs;

#[derive(Debug, Clone, Copy)]
pub struct CmdDestroy {
    pub id: DowntimeId,
}

impl CmdDestroy {
    pub const NAME: &str = "destroy";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("cancel")
            .about("Cancel a downtime")
            .arg(CommonArgs::id())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: CommonArgs::get_id(matches),
        }
    }

    pub async fn run<A: DowntimeApi>(
        self,
        resource: &DowntimeResource<A>,
    ) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "canceling downtime...");
        resource.delete(self.id).await?;
        println!("{} downtime {}", "Canceled:".green(), self.id);
        Ok(())
    }
}
