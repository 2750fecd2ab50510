use std::env;
use std::process::Command;

const UNKNOWN: &str = "unknown";
const SHORT_COMMIT_LEN: usize = 7;

/// Build stamp shown by `exrpeek --version`.
struct BuildStamp {
    commit: String,
    date: String,
}

impl BuildStamp {
    fn collect() -> Self {
        // GITHUB_SHA wins over the local checkout.
        let commit_full = env::var("GITHUB_SHA")
            .ok()
            .filter(|sha| !sha.is_empty())
            .or_else(|| git(&["rev-parse", "HEAD"]));

        let commit = match &commit_full {
            Some(full) => full.chars().take(SHORT_COMMIT_LEN).collect(),
            None => git(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| UNKNOWN.to_string()),
        };

        Self {
            commit,
            date: git(&["log", "-1", "--format=%cI"]).unwrap_or_else(|| UNKNOWN.to_string()),
        }
    }

    fn emit(&self) {
        println!("cargo:rustc-env=EXRPEEK_BUILD_COMMIT={}", self.commit);
        println!("cargo:rustc-env=EXRPEEK_BUILD_DATE={}", self.date);
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");
    BuildStamp::collect().emit();
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!value.is_empty()).then_some(value)
}
