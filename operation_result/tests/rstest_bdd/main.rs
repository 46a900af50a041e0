//! `rstest-bdd` scaffolding for `operation_result`.
//!
//! The modules register reusable fixtures, step implementations, and the
//! feature bindings so the behavioural suite runs under the stock
//! `cargo test` harness.

mod fixtures;
mod scenarios;
mod steps;
