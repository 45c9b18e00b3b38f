use assert_cmd::cargo; // Add methods on commands
use predicates::prelude::*; // Used for writing assertions
type STDRESULT = Result<(),Box<dyn std::error::Error>>;

#[test]
fn usage_without_arguments() -> STDRESULT {
    let mut cmd = cargo::cargo_bin_cmd!("compactorx");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn missing_output_file() -> STDRESULT {
    let mut cmd = cargo::cargo_bin_cmd!("compactorx");
    cmd.arg("prog.bx")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Missing output file."));
    Ok(())
}

#[test]
fn too_many_arguments() -> STDRESULT {
    let mut cmd = cargo::cargo_bin_cmd!("compactorx");
    cmd.arg("a.bx").arg("b.bx").arg("c.bx")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Too many arguments."));
    Ok(())
}

#[test]
fn missing_source_file() -> STDRESULT {
    let dir = tempfile::tempdir()?;
    let mut cmd = cargo::cargo_bin_cmd!("compactorx");
    cmd.arg(dir.path().join("no-such.bx")).arg(dir.path().join("out.bx"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Can't open the source program file."));
    Ok(())
}

#[test]
fn bad_line_length_value() -> STDRESULT {
    let mut cmd = cargo::cargo_bin_cmd!("compactorx");
    cmd.arg("-l").arg("zero").arg("a.bx").arg("b.bx")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Option '-l' has been given a bad value."));
    Ok(())
}

#[test]
fn compacts_and_echoes() -> STDRESULT {
    let dir = tempfile::tempdir()?;
    let src_path = dir.path().join("prog.bx");
    let out_path = dir.path().join("prog.min.bx");
    std::fs::write(&src_path,"set a bit { prose ^ } then ^ and print ]")?;
    let mut cmd = cargo::cargo_bin_cmd!("compactorx");
    cmd.arg(&src_path).arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("^]"))
        .stdout(predicate::str::contains("Done."));
    assert_eq!(std::fs::read_to_string(&out_path)?,"^]");
    Ok(())
}

#[test]
fn wraps_lines_at_requested_width() -> STDRESULT {
    let dir = tempfile::tempdir()?;
    let src_path = dir.path().join("prog.bx");
    let out_path = dir.path().join("prog.min.bx");
    std::fs::write(&src_path,"^".repeat(10))?;
    let mut cmd = cargo::cargo_bin_cmd!("compactorx");
    cmd.arg("-l").arg("4").arg(&src_path).arg(&out_path)
        .assert()
        .success();
    assert_eq!(std::fs::read_to_string(&out_path)?,"^^^^\n^^^^\n^^");
    Ok(())
}
