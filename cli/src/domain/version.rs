//! Build metadata captured at compile time by `build.rs`.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Version and VCS state of the running binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub revision: &'static str,
    pub last_commit: Option<DateTime<Utc>>,
    pub dirty: bool,
}

impl BuildInfo {
    /// Process-wide build info, populated on first access.
    #[must_use]
    pub fn get() -> &'static BuildInfo {
        static INFO: OnceLock<BuildInfo> = OnceLock::new();
        INFO.get_or_init(|| {
            BuildInfo::from_parts(
                env!("CARGO_PKG_VERSION"),
                env!("MACRON_GIT_REVISION"),
                env!("MACRON_GIT_COMMIT_TIME"),
                env!("MACRON_GIT_DIRTY"),
            )
        })
    }

    /// Assemble build info from raw `build.rs` values.
    ///
    /// Blank revisions become `unknown`; an unparseable commit time is
    /// dropped; anything other than `false` counts as a dirty tree.
    #[must_use]
    pub fn from_parts(
        version: &'static str,
        revision: &'static str,
        commit_time: &str,
        dirty: &str,
    ) -> Self {
        let revision = if revision.is_empty() { "unknown" } else { revision };
        let last_commit = DateTime::parse_from_rfc3339(commit_time)
            .ok()
            .map(|t| t.with_timezone(&Utc));
        Self {
            version,
            revision,
            last_commit,
            dirty: dirty != "false",
        }
    }

    /// First 12 characters of the revision, or the whole value if shorter.
    #[must_use]
    pub fn short_revision(&self) -> &str {
        self.revision.get(..12).unwrap_or(self.revision)
    }
}
