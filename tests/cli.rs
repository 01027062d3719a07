use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

#[test]
fn version_flag_prints_name_and_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(format!("md-render {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn help_lists_expected_flags() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("<INPUT>"))
        .stdout(contains("--output"))
        .stdout(contains("--template"))
        .stdout(contains("--title"))
        .stdout(contains("--dry-run"))
        .stdout(contains("[default: template.html]"))
        .stdout(contains("[default: Document]"));
}

#[test]
fn missing_input_argument_prints_usage() {
    cmd()
        .assert()
        .failure()
        .stderr(contains("Usage:"))
        .stderr(contains("<INPUT>"));
}
