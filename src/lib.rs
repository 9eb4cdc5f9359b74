/*!

This library provides assertion helpers for checking the status conditions of Kubernetes custom
resources in integration tests.

A controller reports its progress on a custom resource through the `status.conditions` field of
the object. After a test has performed some action and waited for the controller to consume it,
these helpers verify that the resource reached the expected observable state: synced, ready, not
ready, or stopped on a terminal error.

Conditions are read through the [`ConditionSource`] trait so that any resource client can back
the helpers; [`StatusSnapshot`] is a ready-made source over objects a test has already fetched.
Each assertion performs a single read (the terminal check performs two), compares the
condition's fields, and on mismatch returns an error whose display message names the expected
and actual values and the resource that was checked.

!*/

#![deny(
    clippy::expect_used,
    clippy::get_unwrap,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]

pub use assert::{
    assert_not_ready, assert_ready, assert_ready_status, assert_synced, assert_terminal,
    assert_type_status,
};
pub use condition::{Condition, ConditionStatus, ConditionType, TERMINAL_REASON};
pub use error::{AssertError, Error, Result};
pub use reference::CustomResourceReference;
pub use source::{ConditionSource, StatusSnapshot};

mod assert;
mod condition;
mod error;
mod reference;
mod source;
