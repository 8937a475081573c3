// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use colored::Colorize;
use downtimectl_core::{AttributeMap, DowntimeState};

use crate::util::OutputFormat;

/// Renders a tracked downtime as flattened attributes.
#[derive(Debug)]
pub struct StateFormatter {
    format: OutputFormat,
}

impl StateFormatter {
    pub const fn new() -> Self {
        Self {
            format: OutputFormat::Table,
        }
    }

    pub const fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format(&self, state: &DowntimeState) -> StateDisplay {
        StateDisplay {
            attrs: state.attributes(),
            format: self.format,
        }
    }
}

pub struct StateDisplay {
    attrs: AttributeMap,
    format: OutputFormat,
}

impl fmt::Display for StateDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            OutputFormat::Json => match serde_json::to_string_pretty(&self.attrs) {
                Ok(json) => write!(f, "{json}"),
                Err(e) => {
                    tracing::error!(err = %e, "failed to serialize downtime state");
                    Err(fmt::Error)
                }
            },
            OutputFormat::Table => {
                // Keys are ASCII, byte length is the display width.
                let width = self.attrs.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
                for (i, (key, value)) in self.attrs.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    let key = format!("{key:<width$}");
                    write!(f, "{}  {}", key.cyan(), value)?;
                }
                Ok(())
            }
        }
    }
}
