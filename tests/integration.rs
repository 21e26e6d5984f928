//! Integration test suite for end-to-end scenarios.

mod common;

#[path = "integration/file_switch.rs"]
mod file_switch;
#[path = "integration/parallel_workers.rs"]
mod parallel_workers;
#[path = "integration/persistence.rs"]
mod persistence;
