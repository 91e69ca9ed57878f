//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: script lookup, home
//! directory resolution, and descriptor writes.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod fs;

pub use fs::LocalFs;
