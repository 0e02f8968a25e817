//! Embeds the commit, build date and cargo profile for `fate --version`.

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

fn git_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let commit = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (!commit.is_empty()).then_some(commit)
}

fn main() {
    // CI pins these through the environment.
    let commit = env::var("BUILD_COMMIT")
        .ok()
        .or_else(git_commit)
        .unwrap_or_else(|| "unknown".to_string());
    let date = env::var("BUILD_DATE")
        .unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string());
    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let generated = format!(
        "pub const BUILD_COMMIT: &str = {:?};\n\
         pub const BUILD_DATE: &str = {:?};\n\
         pub const BUILD_PROFILE: &str = {:?};\n",
        commit, date, profile
    );
    fs::write(Path::new(&out_dir).join("build_info.rs"), generated)
        .expect("failed to write build_info.rs");

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=BUILD_DATE");
}
