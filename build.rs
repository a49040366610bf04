use std::env;
use std::process::Command;

/// Stdout of `program args`, trimmed; `None` when it cannot run or prints nothing.
fn capture(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn emit(key: &str, value: Option<String>) {
    let value = value.unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=INTAKE_CORE_BUILD_{key}={value}");
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    emit("HASH", capture("git", &["rev-parse", "--short", "HEAD"]));
    emit(
        "TIMESTAMP",
        Some(chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)),
    );
    emit("TARGET", env::var("TARGET").ok());
    emit("PROFILE", env::var("PROFILE").ok());
    emit("RUSTC", capture("rustc", &["--version"]));
}
