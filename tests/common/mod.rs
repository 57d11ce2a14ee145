use assert_cmd::Command;

pub fn calverlex_cmd() -> Command {
    let mut cmd = Command::cargo_bin("calverlex").unwrap();
    for var in [
        "INPUT_CURRENT_VERSION",
        "INPUT_YEAR_FORMAT",
        "INPUT_REPOSITORY",
        "INPUT_GITHUB_TOKEN",
        "INPUT_DATE",
        "GITHUB_REPOSITORY",
        "GITHUB_ACTIONS",
        "GITHUB_OUTPUT",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Monday of ISO week 3, 2025 (prefix 25031)
pub const MONDAY: &str = "2025-01-13T10:00:00Z";
