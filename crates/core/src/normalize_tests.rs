// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use serde_json::json;
use yare::parameterized;

#[parameterized(
    lower_true = { json!("true"), json!(true) },
    upper_true = { json!("TRUE"), json!(true) },
    mixed_false = { json!("False"), json!(false) },
    native_true = { json!(true), json!(true) },
    native_false = { json!(false), json!(false) },
    other_string = { json!("yes"), json!("yes") },
    padded_string = { json!(" true"), json!(" true") },
    number = { json!(1), json!(1) },
    null = { json!(null), json!(null) },
)]
fn normalize_flag_table(input: Value, expected: Value) {
    assert_eq!(normalize_flag(&input), expected);
}

#[parameterized(
    string_true = { json!("true"), Some(true) },
    string_false = { json!("false"), Some(false) },
    native = { json!(false), Some(false) },
    not_a_flag = { json!("open"), None },
    one = { json!(1), None },
)]
fn as_flag_table(input: Value, expected: Option<bool>) {
    assert_eq!(as_flag(&input), expected);
}

#[parameterized(
    string = { json!("Dev One"), "Dev One" },
    empty = { json!(""), "" },
    integer = { json!(42), "42" },
    float = { json!(1.5), "1.5" },
    boolean = { json!(true), "true" },
    null = { json!(null), "" },
    array = { json!(["a", 1, null]), "a,1," },
)]
fn value_text_table(input: Value, expected: &str) {
    assert_eq!(value_text(&input), expected);
}

#[parameterized(
    text = { json!("Tester"), Some("Tester") },
    number = { json!(7), Some("7") },
    true_flag = { json!(true), Some("true") },
    empty = { json!(""), None },
    null = { json!(null), None },
    false_flag = { json!(false), None },
    zero = { json!(0), None },
    empty_array = { json!([]), None },
)]
fn truthy_text_table(input: Value, expected: Option<&str>) {
    assert_eq!(truthy_text(Some(&input)).as_deref(), expected);
}

#[test]
fn truthy_text_absent() {
    assert_eq!(truthy_text(None), None);
}
