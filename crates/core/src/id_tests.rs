// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::collections::HashSet;

#[test]
fn generated_id_is_lowercase_hex() {
    let id = generate_id().unwrap();
    assert_eq!(id.len(), ID_BYTES * 2);
    assert!(id
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
}

#[test]
fn generated_ids_differ() {
    let ids: HashSet<_> = (0..100).map(|_| generate_id().unwrap()).collect();
    assert_eq!(ids.len(), 100);
}

#[test]
fn unique_id_retries_on_collision() {
    let mut calls = 0;
    let id = generate_unique_id(|_| {
        calls += 1;
        Ok(calls < 3)
    })
    .unwrap();
    assert_eq!(calls, 3);
    assert_eq!(id.len(), ID_BYTES * 2);
}

#[test]
fn unique_id_propagates_lookup_errors() {
    let result = generate_unique_id(|_| Err(Error::StoreUnavailable("down".into())));
    assert!(matches!(result, Err(Error::StoreUnavailable(_))));
}
