#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn tatu() -> Command {
    Command::cargo_bin("tatu").unwrap()
}

pub fn setup_dev(output_dir: &Path) -> Command {
    let mut cmd = tatu();
    cmd.arg("setup-dev").arg("--output").arg(output_dir);
    cmd
}

pub fn read_output_file(output_dir: &Path, name: &str) -> String {
    fs::read_to_string(output_dir.join(name)).unwrap()
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let out = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(out).unwrap()
}

/// With `--orchestrator sh`, `sh compose up -d` runs this script from the
/// orchestrator's working directory.
pub fn write_compose_script(dir: &Path, body: &str) {
    fs::write(dir.join("compose"), format!("{body}\n")).unwrap();
}
