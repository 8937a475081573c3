// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use clap::{ArgMatches, Command};
use colored::Colorize;

use crate::arg::CommonArgs;
use crate::util::load_declaration;

/// Checks a declaration without contacting the API.
#[derive(Debug, Clone)]
pub struct CmdValidate {
    pub file: PathBuf,
}

impl CmdValidate {
    pub const NAME: &str = "validate";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Check a downtime declaration without contacting Datadog")
            .arg(CommonArgs::file())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            file: CommonArgs::get_file(matches),
        }
    }

    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "validating declaration...");
        let config = load_declaration(&self.file).await?;
        match config.validate() {
            Ok(_) => {
                println!("{} {}", "Valid:".green(), self.file.display());
                Ok(())
            }
            Err(errors) => {
                for error in &errors {
                    println!("  {} {}", "-".red(), error);
                }
                Err(format!("{} validation error(s) in {}", errors.len(), self.file.display()).into())
            }
        }
    }
}
