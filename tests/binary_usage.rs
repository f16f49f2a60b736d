use std::process::Command;
use tempfile::tempdir;

#[test]
fn too_many_arguments_prints_usage_and_fails() {
    let td = tempdir().unwrap();
    std::fs::write(td.path().join("keep.txt"), "k").unwrap();

    let me = assert_cmd::cargo::cargo_bin!("renumber");
    let out = Command::new(me)
        .arg(td.path())
        .arg(td.path())
        .output()
        .expect("spawn binary");

    assert!(!out.status.success(), "expected failure status");
    assert!(out.stdout.is_empty(), "stdout should be empty");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage: renumber"), "unexpected stderr: {stderr}");
    assert!(td.path().join("keep.txt").exists(), "no work may be done on usage errors");
}

#[test]
fn missing_directory_fails() {
    let td = tempdir().unwrap();
    let me = assert_cmd::cargo::cargo_bin!("renumber");
    let out = Command::new(me)
        .arg(td.path().join("does-not-exist"))
        .output()
        .expect("spawn binary");

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("scan directory"), "unexpected stderr: {stderr}");
}

#[test]
fn file_argument_is_not_a_directory() {
    let td = tempdir().unwrap();
    let f = td.path().join("plain.txt");
    std::fs::write(&f, "p").unwrap();

    let me = assert_cmd::cargo::cargo_bin!("renumber");
    let out = Command::new(me).arg(&f).output().expect("spawn binary");

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not a directory"), "unexpected stderr: {stderr}");
    assert!(f.exists());
}
