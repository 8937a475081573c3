// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Assertion helpers over flattened state.

use downtimectl_core::DowntimeState;

/// Asserts that the flattened state has `key` set to `expected`.
#[track_caller]
pub fn assert_attr(state: &DowntimeState, key: &str, expected: &str) {
    let attrs = state.attributes();
    assert_eq!(
        attrs.get(key),
        Some(expected),
        "attribute {key:?} mismatch, state: {attrs:?}"
    );
}

/// Asserts that the flattened state has no `key`.
#[track_caller]
pub fn assert_no_attr(state: &DowntimeState, key: &str) {
    let attrs = state.attributes();
    assert_eq!(attrs.get(key), None, "attribute {key:?} should not be set");
}
