use crate::common::{run_tokendiff, workspace_dir, write_inputs};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn whitespace_is_ignored_when_requested(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let (left, right) = write_inputs(&workspace_dir, " a\nb  c", "a\nbc");

    run_tokendiff(&left, &right, &["--ignore-whitespace"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    run_tokendiff(&left, &right, &[])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("1,2c1,2\n"));

    Ok(())
}

#[rstest]
fn original_text_is_printed_for_normalized_matches(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let (left, right) = write_inputs(&workspace_dir, "  Keep\nold", "keep\nnew");

    run_tokendiff(&left, &right, &["-w", "-i"])
        .assert()
        .code(1)
        .stdout("2c2\n< old\n---\n> new\n");

    Ok(())
}
