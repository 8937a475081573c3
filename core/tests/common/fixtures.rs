// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Declaration fixtures, written the way an operator would.

use downtimectl_core::DowntimeConfig;

/// Parses a TOML declaration.
#[must_use]
pub fn declaration(source: &str) -> DowntimeConfig {
    toml::from_str(source).expect("fixture should be valid TOML")
}

pub const BASIC: &str = r#"
scope = ["*"]
start = 1735707600
end = 1735765200
message = "Example Datadog downtime message."

[[recurrence]]
type = "days"
period = 1
"#;

pub const UPDATED: &str = r#"
scope = ["Updated"]
start = 1735707600
end = 1735765200
message = "Example Datadog downtime message."

[[recurrence]]
type = "days"
period = 3
"#;

pub const MULTI_SCOPE: &str = r#"
scope = ["host:A", "host:B"]
start = 1735707600
end = 1735765200
message = "Example Datadog downtime message."

[[recurrence]]
type = "days"
period = 1
"#;

pub const NO_RECURRENCE: &str = r#"
scope = ["host:NoRecurrence"]
start = 1735707600
end = 1735765200
message = "Example Datadog downtime message."
"#;

pub const UNTIL_DATE: &str = r#"
scope = ["host:UntilDateRecurrence"]
start = 1735707600
end = 1735765200
message = "Example Datadog downtime message."

[[recurrence]]
type = "days"
period = 1
until_date = 1736226000
"#;

pub const UNTIL_OCCURRENCES: &str = r#"
scope = ["host:UntilOccurrencesRecurrence"]
start = 1735707600
end = 1735765200
message = "Example Datadog downtime message."

[[recurrence]]
type = "days"
period = 1
until_occurrences = 5
"#;

pub const WEEK_DAYS: &str = r#"
scope = ["WeekDaysRecurrence"]
start = 1735646400
end = 1735732799
message = "Example Datadog downtime message."

[[recurrence]]
period = 1
type = "weeks"
week_days = ["Sat", "Sun"]
"#;

pub const WHITESPACE: &str = r#"
scope = ["host:Whitespace"]
start = 1735707600
end = 1735765200
message = """
Example Datadog downtime message.
"""

[[recurrence]]
type = "days"
period = 1
"#;

pub const DATES: &str = r#"
scope = ["*"]
start_date = "2099-10-31T11:11:00+01:00"
end_date = "2099-10-31T21:00:00+01:00"
message = "Example Datadog downtime message."

[[recurrence]]
type = "days"
period = 1
"#;

pub const DATES_CONFLICT: &str = r#"
scope = ["*"]
start_date = "2099-10-31T11:11:00+01:00"
start = 1735707600
end_date = "2099-10-31T11:11:00+01:00"
end = 1735707600
message = "Example Datadog downtime message."

[[recurrence]]
type = "days"
period = 1
"#;
