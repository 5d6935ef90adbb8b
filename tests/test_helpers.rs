use assert_cmd::Command;
use std::path::Path;

/// Creates a `Command` for the `rapidlog` binary with a clean environment
/// pointed at the given journal directory. Additional environment variables
/// or arguments can be configured by the caller.
pub fn rapidlog_command(journal_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rapidlog").expect("rapidlog binary not built");
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
        cmd.env("PATH", path);
    }
    if let Ok(tmpdir) = std::env::var("TMPDIR") {
        cmd.env("TMPDIR", tmpdir);
    }
    cmd.env("RAPIDLOG_DIR", journal_dir);
    cmd
}
