use std::process::Command;

/// Short commit hash for the version string.
///
/// Priority: 1) `git rev-parse`, 2) `GIT_HASH` env var (packaged builds), 3) "unknown".
fn git_hash() -> String {
    let from_git = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|hash| !hash.is_empty());

    from_git
        .or_else(|| {
            std::env::var("GIT_HASH")
                .ok()
                .filter(|hash| hash != "unknown" && !hash.is_empty())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    println!("cargo:rustc-env=GIT_HASH={}", git_hash());

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/");
    println!("cargo:rerun-if-env-changed=GIT_HASH");
}
