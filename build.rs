use chrono::{DateTime, Local};
use std::{env, fs::File, io::Write, path::Path, process::Command};
include!("./src/contest/config.rs");

fn launch(cmd: &mut Command) -> String {
    cmd.output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}
fn exec(cmd: &str, args: &[&str]) -> String {
    launch(Command::new(cmd).args(args))
}
fn or_unknown(s: String) -> String {
    if s.is_empty() {
        String::from("unknown")
    } else {
        s
    }
}

fn set_short_version(out_dir: &Path, date: &DateTime<Local>, branch: &str, profile: &str) {
    write!(
        File::create(out_dir.join("version")).expect("Failed to create version file"),
        "(git@{} {} {}) {}",
        or_unknown(exec("git", &["log", "-1", "--pretty=format:%h"])),
        branch,
        date.format("%Y-%m-%d"),
        profile
    )
    .unwrap();
}
fn set_long_version(out_dir: &Path, date: &DateTime<Local>, branch: &str, profile: &str) {
    let mut f = std::io::BufWriter::new(
        File::create(out_dir.join("long_version")).expect("Failed to create long version"),
    );
    writeln!(&mut f, "{}", profile).unwrap();
    writeln!(
        &mut f,
        "commit: {} git@{}",
        branch,
        or_unknown(exec("git", &["log", "-1", "--pretty=format:%H"]))
    )
    .unwrap();
    writeln!(
        &mut f,
        "rustc: {} {}",
        or_unknown(exec(
            env::var("RUSTC").unwrap_or_else(|_| "rustc".into()).as_str(),
            &["--version"]
        )),
        env::var("TARGET").unwrap_or_default()
    )
    .unwrap();
    writeln!(&mut f, "date: {}", date.to_rfc3339()).unwrap();
    writeln!(
        &mut f,
        r#"api:
    host: {}://{}
    standings: from={} count={}
cache:
    file: {}
    format: {}"#,
        api::SCHEME,
        api::HOST,
        api::STANDINGS_FROM,
        api::STANDINGS_COUNT,
        cache::FILE_NAME,
        cache::FORMAT_VERSION
    )
    .unwrap();
}
fn get_branch() -> String {
    let branch = exec("git", &["symbolic-ref", "--short", "-q", "HEAD"]);
    if branch.is_empty() {
        or_unknown(exec("git", &["describe", "--tags", "--exact-match", "HEAD"]))
    } else {
        branch
    }
}

fn main() {
    let profile = env::var("PROFILE").unwrap();
    let buf = env::var("OUT_DIR").unwrap();
    let out_dir = Path::new(buf.as_str());
    let branch = get_branch();
    let time = Local::now();
    set_short_version(out_dir, &time, &branch, &profile);
    set_long_version(out_dir, &time, &branch, &profile);
}
