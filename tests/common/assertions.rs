//! Logged assertion helpers.
//!
//! These wrap standard assertions with tracing logs so failures in CI show
//! the values involved.

#![allow(dead_code)]

use std::fmt::Debug;

/// Assert equality with detailed logging.
#[track_caller]
pub fn assert_eq_logged<T: PartialEq + Debug>(context: &str, actual: T, expected: T) {
    tracing::debug!(
        context = context,
        expected = ?expected,
        actual = ?actual,
        "asserting equality"
    );

    if actual != expected {
        tracing::error!(
            context = context,
            expected = ?expected,
            actual = ?actual,
            "assertion failed: values not equal"
        );
    }

    assert_eq!(
        actual, expected,
        "{context}: expected {expected:?}, got {actual:?}"
    );
}

/// Assert that a Result is Ok with logging, returning the value.
#[track_caller]
pub fn assert_ok_logged<T: Debug, E: Debug>(context: &str, result: Result<T, E>) -> T {
    tracing::debug!(context = context, "asserting Ok");

    match result {
        Ok(value) => value,
        Err(ref e) => {
            tracing::error!(context = context, error = ?e, "assertion failed: expected Ok, got Err");
            panic!("{context}: expected Ok, got Err({e:?})");
        }
    }
}

/// Assert that `haystack` contains `needle`.
#[track_caller]
pub fn assert_contains_logged(context: &str, haystack: &str, needle: &str) {
    tracing::debug!(context = context, needle = needle, "asserting contains");

    if !haystack.contains(needle) {
        tracing::error!(
            context = context,
            needle = needle,
            "assertion failed: substring not found"
        );
    }

    assert!(
        haystack.contains(needle),
        "{context}: expected to find {needle:?}"
    );
}

/// Count occurrences of `needle` in `haystack`.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
