/// Capture VCS metadata for `macron version`.
///
/// Exports `MACRON_GIT_REVISION`, `MACRON_GIT_COMMIT_TIME` and
/// `MACRON_GIT_DIRTY`. Builds outside a git checkout (crates.io tarballs,
/// CI caches) get `unknown` / empty / `true`.
use std::process::Command;

fn main() {
    let revision = git(&["rev-parse", "HEAD"]).unwrap_or_else(|| "unknown".to_string());
    let commit_time = git(&["log", "-1", "--format=%cI"]).unwrap_or_default();
    let dirty = git(&["status", "--porcelain"]).is_none_or(|status| !status.is_empty());

    println!("cargo::rustc-env=MACRON_GIT_REVISION={revision}");
    println!("cargo::rustc-env=MACRON_GIT_COMMIT_TIME={commit_time}");
    println!("cargo::rustc-env=MACRON_GIT_DIRTY={dirty}");
    println!("cargo::rerun-if-changed=../.git/HEAD");
    println!("cargo::rerun-if-changed=../.git/index");
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
