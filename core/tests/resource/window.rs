// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use downtimectl_core::{DowntimeResource, Error, Window};

use crate::common::{DATES, DATES_CONFLICT, MemoryApi, assert_attr, assert_no_attr, declaration};

#[tokio::test]
async fn test_dates_read_back_as_declared() {
    let resource = DowntimeResource::new(MemoryApi::new());

    let state = resource.create(&declaration(DATES)).await.unwrap();

    assert_attr(&state, "start_date", "2099-10-31T11:11:00+01:00");
    assert_attr(&state, "end_date", "2099-10-31T21:00:00+01:00");
    assert_no_attr(&state, "start");
    assert_no_attr(&state, "end");

    let record = resource.api().record(state.id).unwrap();
    assert_eq!(record.start, Some(4_097_124_660));
    assert_eq!(record.end, Some(4_097_160_000));
}

#[tokio::test]
async fn test_dates_moved_remotely_render_utc() {
    let resource = DowntimeResource::new(MemoryApi::new());
    let config = declaration(DATES);
    let state = resource.create(&config).await.unwrap();

    resource.api().set_end(state.id, 4_097_163_600);
    let declared = resource.plan(&config).unwrap().window;
    let state = resource
        .read(state.id, Some(&declared))
        .await
        .unwrap()
        .unwrap();

    assert_attr(&state, "start_date", "2099-10-31T11:11:00+01:00");
    assert_attr(&state, "end_date", "2099-10-31T21:00:00Z");
}

#[tokio::test]
async fn test_dates_conflict() {
    let resource = DowntimeResource::new(MemoryApi::new());

    let err = resource
        .create(&declaration(DATES_CONFLICT))
        .await
        .unwrap_err();

    let Error::Validation(errors) = err else {
        panic!("expected validation errors, got {err:?}");
    };
    let messages: Vec<_> = errors.iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        vec![
            "\"start_date\": conflicts with start",
            "\"end_date\": conflicts with end",
        ]
    );
    assert!(resource.api().calls().is_empty());
}

#[tokio::test]
async fn test_mixed_forms_are_rejected() {
    let resource = DowntimeResource::new(MemoryApi::new());
    let config = declaration(
        r#"
scope = ["*"]
start = 1735707600
end_date = "2099-10-31T21:00:00+01:00"
"#,
    );

    let errors = resource.plan(&config).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.for_field("end_date").count(), 1);
}

#[tokio::test]
async fn test_malformed_date_names_the_field() {
    let resource = DowntimeResource::new(MemoryApi::new());
    let config = declaration(
        r#"
scope = ["*"]
start_date = "2099-10-31 11:11"
"#,
    );

    let errors = resource.plan(&config).unwrap_err();

    assert_eq!(errors.for_field("start_date").count(), 1);
}

#[tokio::test]
async fn test_unscheduled_window() {
    let resource = DowntimeResource::new(MemoryApi::new());
    let config = declaration("scope = [\"*\"]\n");

    let draft = resource.plan(&config).unwrap();
    assert_eq!(draft.window, Window::Unscheduled);

    let state = resource.create(&config).await.unwrap();
    assert_no_attr(&state, "start");
    assert_no_attr(&state, "start_date");
}
