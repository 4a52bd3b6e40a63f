use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    // Version from any reachable tag, falling back to the bare commit hash
    // when no tag exists, and to the crate version outside a git checkout.
    let git_version = Command::new("git")
        .args(["describe", "--tags", "--always"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .map(|out| String::from_utf8_lossy(&out.stdout).trim().to_string())
        .filter(|v| !v.is_empty());

    let version = git_version.unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:warning=Build version: {version}");
    println!("cargo:rustc-env=BUILD_VERSION={version}");
}
