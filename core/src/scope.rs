// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

const HOST_PREFIX: &str = "host:";

/// What a downtime applies to.
///
/// Parsing is lossless: [`Display`](fmt::Display) gives back the declared string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    /// `*`, every monitored entity.
    Global,
    /// `host:<name>`.
    Host(String),
    /// Any other tag, such as `env:prod` or `WeekDaysRecurrence`.
    Tag(String),
}

impl Scope {
    /// Returns `true` for the `*` scope.
    #[must_use]
    pub const fn is_global(&self) -> bool {
        matches!(self, Self::Global)
    }
}

impl FromStr for Scope {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "*" {
            Self::Global
        } else if let Some(host) = s.strip_prefix(HOST_PREFIX) {
            Self::Host(host.to_string())
        } else {
            Self::Tag(s.to_string())
        })
    }
}

impl From<&str> for Scope {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(scope) => scope,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => f.write_str("*"),
            Self::Host(host) => write!(f, "{HOST_PREFIX}{host}"),
            Self::Tag(tag) => f.write_str(tag),
        }
    }
}
