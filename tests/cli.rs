use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use tempfile::NamedTempFile;

fn program(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("programs")
        .join(name)
}

fn ls8() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ls8"))
}

#[test]
fn run_mult_program() {
    let output = ls8().arg(program("mult.ls8")).output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        "hex val: 48\tdec val: 72\tbin val: 1001000\n",
        String::from_utf8(output.stdout).unwrap()
    );
}

#[test]
fn disassemble_print8_program() {
    let output = ls8()
        .arg("--disassemble")
        .arg(program("print8.ls8"))
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        "#0x00: (82 00 08)   LDI  R0,0x08\n#0x03: (47 00)      PRN  R0\n#0x05: (01)         HLT\n",
        String::from_utf8(output.stdout).unwrap()
    );
}

#[test]
fn unknown_opcode_is_reported_once() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "00000000\n10000010\n00000000\n00000101\n01000111\n00000000\n00000001").unwrap();

    for verbosity in [None, Some("-vv")] {
        let mut command = ls8();
        if let Some(flag) = verbosity {
            command.arg(flag);
        }
        let output = command.arg(file.path()).output().unwrap();
        let stderr = String::from_utf8(output.stderr).unwrap();

        assert!(output.status.success());
        assert_eq!(1, stderr.matches("unknown opcode").count());
        assert_eq!(
            "hex val: 5\tdec val: 5\tbin val: 101\n",
            String::from_utf8(output.stdout).unwrap()
        );
    }
}

#[test]
fn missing_program_fails() {
    let output = ls8().arg(program("missing.ls8")).output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("Failed to load program"));
}

#[test]
fn malformed_program_fails() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "10000010\n00000000\n0000000x").unwrap();
    let output = ls8().arg(file.path()).output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn fault_store_policy_stops_execution() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "store_policy: fault").unwrap();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "10000100\n00000000\n00000001\n00000001").unwrap();
    let output = ls8()
        .arg("--config")
        .arg(config.path())
        .arg(file.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("undefined store target"));
}
