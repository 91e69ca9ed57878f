//! Application services — use-case orchestration functions.

pub mod create_task;
