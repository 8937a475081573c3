// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Helpers for running commands against a mock Datadog API.

use downtimectl_core::{ClientConfig, DatadogClient, DowntimeResource};
use serde_json::json;
use wiremock::MockServer;

pub fn resource_for(server: &MockServer) -> DowntimeResource<DatadogClient> {
    let config = ClientConfig {
        api_url: server.uri(),
        api_key: "test-api-key".to_string(),
        app_key: "test-app-key".to_string(),
        ..Default::default()
    };
    DowntimeResource::new(DatadogClient::new(config).expect("Failed to create client"))
}

pub fn record(id: u64) -> serde_json::Value {
    json!({
        "id": id,
        "scope": ["*"],
        "start": 1_735_707_600,
        "end": 1_735_765_200,
        "message": "Example Datadog downtime message.",
        "monitor_id": null,
        "active": false,
        "disabled": false,
        "canceled": null,
        "recurrence": {"type": "days", "period": 1}
    })
}

pub const DECLARATION: &str = r#"
scope = ["*"]
start = 1735707600
end = 1735765200
message = "Example Datadog downtime message."

[[recurrence]]
type = "days"
period = 1
"#;
