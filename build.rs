use std::process::Command;

fn git_commit() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".into())
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rustc-env=SKIPDICT_GIT_COMMIT={}", git_commit());

    let build_date = chrono::Utc::now().format("%Y-%m-%d");
    println!("cargo:rustc-env=SKIPDICT_BUILD_DATE={build_date}");
}
