// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use downtimectl_core::{DatadogClient, DowntimeResource};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cmd_apply::CmdApply;
use crate::cmd_destroy::CmdDestroy;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_show::CmdShow;
use crate::cmd_validate::CmdValidate;
use crate::config::parse_config;

/// Run the downtimectl command-line interface.
///
/// # Errors
///
/// Errors are reported on stdout; only a failure to start the program
/// itself is returned.
pub async fn run() -> Result<(), Box<dyn Error>> {
    let cli = match Cli::parse() {
        Ok(cli) => cli,
        Err(e) => {
            println!("{} {}", "Error:".red(), e);
            std::process::exit(2);
        }
    };

    init_tracing(cli.verbose);
    if let Err(e) = cli.run().await {
        println!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
    Ok(())
}

/// `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Log debug output
    pub verbose: bool,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    #[must_use]
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new("downtimectl")
            .about("Schedule Datadog downtimes from declarative files.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $DOWNTIMECTL_CONFIG, then \
$XDG_CONFIG_HOME/downtimectl/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/downtimectl/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .arg(arg!(-v --verbose "Log debug output").global(true))
            .subcommand(CmdValidate::command())
            .subcommand(CmdApply::command())
            .subcommand(CmdShow::command())
            .subcommand(CmdDestroy::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid.
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(&matches)
    }

    /// Parse the specified arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid.
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(&matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    ///
    /// # Errors
    ///
    /// Returns an error if no known subcommand was matched.
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdValidate::NAME, matches)) => Validate(CmdValidate::from(matches)),
            Some((CmdApply::NAME, matches)) => Apply(CmdApply::from(matches)),
            Some((CmdShow::NAME, matches)) => Show(CmdShow::from(matches)),
            Some((CmdDestroy::NAME, matches)) => Destroy(CmdDestroy::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
            None => return Err("No command given".into()),
        };

        let config = matches.get_one("config").cloned();
        let verbose = matches.get_flag("verbose");
        Ok(Cli {
            config,
            verbose,
            command,
        })
    }

    /// Run the command
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Check a declaration offline
    Validate(CmdValidate),

    /// Create or update a downtime
    Apply(CmdApply),

    /// Show a downtime
    Show(CmdShow),

    /// Cancel a downtime
    Destroy(CmdDestroy),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the command fails.
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Validate(a)           => a.run().await,
            Apply(a)              => a.run(&Self::resource(config).await?).await,
            Show(a)               => a.run(&Self::resource(config).await?).await,
            Destroy(a)            => a.run(&Self::resource(config).await?).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn resource(
        config: Option<PathBuf>,
    ) -> Result<DowntimeResource<DatadogClient>, Box<dyn Error>> {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        let client = DatadogClient::new(config.client)?;
        Ok(DowntimeResource::new(client))
    }
}
