#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// Journal name used by the CLI tests. Not a prefix of any command.
pub const JOURNAL: &str = "work";

/// Creates a `Command` for the `daybook` binary with a clean, non-interactive
/// environment rooted at `base`.
pub fn base_daybook_command(base: &Path) -> Command {
    let mut cmd = Command::cargo_bin("daybook").expect("daybook binary not built");
    configure_daybook_command(&mut cmd, base);
    cmd
}

/// Applies the standard non-interactive environment to an existing `Command`.
///
/// The editor is `true`, which exits immediately without touching the file.
pub fn configure_daybook_command(cmd: &mut Command, base: &Path) {
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
        cmd.env("PATH", path);
    }
    if let Ok(tmpdir) = std::env::var("TMPDIR") {
        cmd.env("TMPDIR", tmpdir);
    }
    cmd.env("HOME", base)
        .env("DAYBOOK_DIR", base)
        .env("DAYBOOK_EDITOR", "true");
}

/// Runs `daybook work <args>` against `base` and asserts success.
pub fn daybook_ok(base: &Path, args: &[&str]) -> String {
    let output = base_daybook_command(base)
        .arg(JOURNAL)
        .args(args)
        .output()
        .expect("failed to run daybook");
    assert!(
        output.status.success(),
        "daybook {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Writes an executable editor script that appends `text` to its argument.
#[cfg(unix)]
pub fn appending_editor(dir: &Path, text: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("append-editor");
    fs::write(&script, format!("#!/bin/sh\necho '{}' >> \"$1\"\n", text)).unwrap();
    let mut permissions = fs::metadata(&script).unwrap().permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(&script, permissions).unwrap();
    script
}

/// Writes a non-empty entry for `y/m/d` directly into the journal tree.
pub fn write_entry(base: &Path, y: i32, m: u32, d: u32, text: &str) {
    let day = base
        .join(JOURNAL)
        .join(y.to_string())
        .join(m.to_string())
        .join(d.to_string());
    fs::create_dir_all(&day).unwrap();
    fs::write(day.join("entry"), text).unwrap();
}
