// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use downtimectl_core::{DowntimeResource, RecurrenceType, Weekday};

use crate::common::{
    MemoryApi, UNTIL_DATE, UNTIL_OCCURRENCES, WEEK_DAYS, assert_attr, assert_no_attr, declaration,
};

#[tokio::test]
async fn test_until_date() {
    let resource = DowntimeResource::new(MemoryApi::new());

    let state = resource.create(&declaration(UNTIL_DATE)).await.unwrap();

    assert_attr(&state, "scope.0", "host:UntilDateRecurrence");
    assert_attr(&state, "recurrence.0.until_date", "1736226000");
    assert_no_attr(&state, "recurrence.0.until_occurrences");
}

#[tokio::test]
async fn test_until_occurrences() {
    let resource = DowntimeResource::new(MemoryApi::new());

    let state = resource
        .create(&declaration(UNTIL_OCCURRENCES))
        .await
        .unwrap();

    assert_attr(&state, "recurrence.0.until_occurrences", "5");
    assert_no_attr(&state, "recurrence.0.until_date");
}

#[tokio::test]
async fn test_week_days_keep_order() {
    let resource = DowntimeResource::new(MemoryApi::new());

    let state = resource.create(&declaration(WEEK_DAYS)).await.unwrap();

    assert_attr(&state, "start", "1735646400");
    assert_attr(&state, "end", "1735732799");
    assert_attr(&state, "recurrence.0.type", "weeks");
    assert_attr(&state, "recurrence.0.week_days.#", "2");
    assert_attr(&state, "recurrence.0.week_days.0", "Sat");
    assert_attr(&state, "recurrence.0.week_days.1", "Sun");

    let rule = state.recurrence.unwrap();
    assert_eq!(rule.kind, RecurrenceType::Weeks);
    assert_eq!(rule.week_days, vec![Weekday::Sat, Weekday::Sun]);
}

#[tokio::test]
async fn test_both_end_conditions_are_forwarded() {
    let resource = DowntimeResource::new(MemoryApi::new());
    let config = declaration(
        r#"
scope = ["*"]
start = 1735707600
end = 1735765200

[[recurrence]]
type = "months"
period = 2
until_date = 1736226000
until_occurrences = 3
"#,
    );

    let state = resource.create(&config).await.unwrap();

    let sent = resource.api().record(state.id).unwrap().recurrence.unwrap();
    assert_eq!(sent.until_date, Some(1_736_226_000));
    assert_eq!(sent.until_occurrences, Some(3));
}

#[tokio::test]
async fn test_week_days_with_spaces_are_rejected() {
    let resource = DowntimeResource::new(MemoryApi::new());
    let config = declaration(
        r#"
scope = ["*"]

[[recurrence]]
type = "weeks"
period = 1
week_days = ["Mon", " Tue", "wed"]
"#,
    );

    let errors = resource.plan(&config).unwrap_err();

    let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(
        fields,
        vec!["recurrence.0.week_days.1", "recurrence.0.week_days.2"]
    );
}

#[tokio::test]
async fn test_non_positive_period_is_rejected() {
    let resource = DowntimeResource::new(MemoryApi::new());
    let config = declaration(
        r#"
scope = ["*"]

[[recurrence]]
type = "days"
period = 0
"#,
    );

    let errors = resource.plan(&config).unwrap_err();

    assert_eq!(errors.for_field("recurrence.0.period").count(), 1);
}

#[tokio::test]
async fn test_two_recurrence_blocks_are_rejected() {
    let resource = DowntimeResource::new(MemoryApi::new());
    let config = declaration(
        r#"
scope = ["*"]

[[recurrence]]
type = "days"
period = 1

[[recurrence]]
type = "weeks"
period = 1
"#,
    );

    let errors = resource.plan(&config).unwrap_err();

    assert_eq!(errors.for_field("recurrence").count(), 1);
}

#[tokio::test]
async fn test_empty_week_days_are_rejected() {
    let resource = DowntimeResource::new(MemoryApi::new());
    let config = declaration(
        r#"
scope = ["*"]

[[recurrence]]
type = "weeks"
period = 1
week_days = []
"#,
    );

    let errors = resource.plan(&config).unwrap_err();

    assert_eq!(errors.for_field("recurrence.0.week_days").count(), 1);
    assert!(resource.create(&config).await.is_err());
    assert!(resource.api().calls().is_empty());
}
