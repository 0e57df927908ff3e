use std::process::{Command, Stdio};

fn stockbook() -> Command {
    Command::new(env!("CARGO_BIN_EXE_stockbook"))
}

#[test]
fn unknown_flag_exits_zero() {
    let output = stockbook()
        .arg("--bogus")
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--bogus"));
}

#[test]
fn help_exits_zero() {
    let output = stockbook().arg("--help").output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("--products"));
}

#[test]
fn missing_config_file_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let output = stockbook()
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("loading config"));
}

#[test]
fn session_on_closed_stdin_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let output = stockbook()
        .arg("--products")
        .arg(dir.path().join("products.json"))
        .arg("--sales")
        .arg(dir.path().join("sales.json"))
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Thanks for using the system!"));
}
