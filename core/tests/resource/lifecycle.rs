// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use downtimectl_core::{DowntimeId, DowntimeResource, Error};

use crate::common::{
    BASIC, Call, MULTI_SCOPE, MemoryApi, NO_RECURRENCE, UPDATED, WHITESPACE, assert_attr,
    assert_no_attr, declaration,
};

fn resource() -> DowntimeResource<MemoryApi> {
    DowntimeResource::new(MemoryApi::new())
}

#[tokio::test]
async fn test_create_basic() {
    let resource = resource();

    let state = resource.create(&declaration(BASIC)).await.unwrap();

    assert_attr(&state, "scope.#", "1");
    assert_attr(&state, "scope.0", "*");
    assert_attr(&state, "start", "1735707600");
    assert_attr(&state, "end", "1735765200");
    assert_attr(&state, "recurrence.#", "1");
    assert_attr(&state, "recurrence.0.type", "days");
    assert_attr(&state, "recurrence.0.period", "1");
    assert_attr(&state, "message", "Example Datadog downtime message.");
    assert_attr(&state, "disabled", "false");
    assert_no_attr(&state, "start_date");
    assert_eq!(resource.api().calls(), vec![Call::Create, Call::Get(state.id)]);
}

#[tokio::test]
async fn test_create_sends_one_epoch_pair() {
    let resource = resource();

    let state = resource.create(&declaration(BASIC)).await.unwrap();

    let record = resource.api().record(state.id).unwrap();
    assert_eq!(record.scope, vec!["*"]);
    assert_eq!(record.start, Some(1_735_707_600));
    assert_eq!(record.end, Some(1_735_765_200));
    let recurrence = record.recurrence.unwrap();
    assert_eq!(recurrence.kind, "days");
    assert_eq!(recurrence.period, 1);
}

#[tokio::test]
async fn test_create_multi_scope() {
    let resource = resource();

    let state = resource.create(&declaration(MULTI_SCOPE)).await.unwrap();

    assert_attr(&state, "scope.#", "2");
    assert_attr(&state, "scope.0", "host:A");
    assert_attr(&state, "scope.1", "host:B");
}

#[tokio::test]
async fn test_create_without_recurrence() {
    let resource = resource();

    let state = resource.create(&declaration(NO_RECURRENCE)).await.unwrap();

    assert_attr(&state, "scope.0", "host:NoRecurrence");
    assert_attr(&state, "recurrence.#", "0");
    assert_no_attr(&state, "recurrence.0.type");
    assert!(resource.api().record(state.id).unwrap().recurrence.is_none());
}

#[tokio::test]
async fn test_message_whitespace_is_trimmed() {
    let config = declaration(WHITESPACE);
    assert_eq!(
        config.message.as_deref(),
        Some("Example Datadog downtime message.\n")
    );
    let resource = resource();

    let state = resource.create(&config).await.unwrap();

    assert_attr(&state, "message", "Example Datadog downtime message.");
    let record = resource.api().record(state.id).unwrap();
    assert_eq!(
        record.message.as_deref(),
        Some("Example Datadog downtime message.")
    );
}

#[tokio::test]
async fn test_update_in_place() {
    let resource = resource();
    let created = resource.create(&declaration(BASIC)).await.unwrap();

    let updated = resource
        .update(created.id, &declaration(UPDATED))
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_attr(&updated, "scope.#", "1");
    assert_attr(&updated, "scope.0", "Updated");
    assert_attr(&updated, "recurrence.0.type", "days");
    assert_attr(&updated, "recurrence.0.period", "3");
    assert!(resource.api().calls().contains(&Call::Update(created.id)));
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let resource = resource();

    let err = resource
        .update(DowntimeId::new(42), &declaration(BASIC))
        .await
        .unwrap_err();

    match err {
        Error::Client(e) => assert!(e.is_not_found()),
        other => panic!("expected a client error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_then_gone() {
    let resource = resource();
    let state = resource.create(&declaration(BASIC)).await.unwrap();
    assert!(resource.exists(state.id).await.unwrap());

    resource.delete(state.id).await.unwrap();

    // The record is kept but canceled.
    assert!(resource.api().record(state.id).is_some());
    assert!(!resource.exists(state.id).await.unwrap());
    assert!(resource.read(state.id, None).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_missing_is_ok() {
    let resource = resource();

    resource.delete(DowntimeId::new(7)).await.unwrap();

    assert_eq!(resource.api().calls(), vec![Call::Delete(DowntimeId::new(7))]);
}

#[tokio::test]
async fn test_purged_reads_as_gone() {
    let resource = resource();
    let state = resource.create(&declaration(BASIC)).await.unwrap();

    resource.api().purge(state.id);

    assert!(!resource.exists(state.id).await.unwrap());
}

#[tokio::test]
async fn test_disabled_reads_as_gone() {
    let resource = resource();
    let state = resource.create(&declaration(BASIC)).await.unwrap();

    resource.api().disable(state.id);

    assert!(resource.read(state.id, None).await.unwrap().is_none());
}

#[tokio::test]
async fn test_invalid_declaration_never_calls_api() {
    let resource = resource();
    let config = declaration(
        r#"
scope = ["*"]
start = 1735707600
end = 1735765200

[[recurrence]]
type = "fortnights"
period = 1
"#,
    );

    let err = resource.create(&config).await.unwrap_err();

    let Error::Validation(errors) = err else {
        panic!("expected validation errors, got {err:?}");
    };
    assert_eq!(errors.for_field("recurrence.0.type").count(), 1);
    assert!(resource.api().calls().is_empty());
}

#[tokio::test]
async fn test_missing_scope_is_required() {
    let resource = resource();
    let config = declaration("message = \"no scope\"\n");

    let errors = resource.plan(&config).unwrap_err();

    assert_eq!(errors.for_field("scope").count(), 1);
}
