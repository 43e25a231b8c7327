use crate::common::{run_tokendiff, workspace_dir, write_inputs};
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::{Sentence, Sentences};
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn identical_files_exit_successfully(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = Sentences(3..8).fake::<Vec<String>>().join("\n");
    let (left, right) = write_inputs(&workspace_dir, &content, &content);

    for compare in ["lines", "words", "chars"] {
        run_tokendiff(&left, &right, &["--compare", compare])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    Ok(())
}

#[rstest]
fn brief_mode_only_names_the_files(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let left_content = Sentence(3..6).fake::<String>();
    let right_content = format!("{left_content}\n{}", Sentence(3..6).fake::<String>());
    let (left, right) = write_inputs(&workspace_dir, &left_content, &right_content);

    run_tokendiff(&left, &right, &["--brief"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_match(r"^Files .+left\.txt and .+right\.txt differ\n$")?);

    Ok(())
}

#[rstest]
fn missing_input_is_an_invalid_argument(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let (left, _) = write_inputs(&workspace_dir, "a", "a");
    let missing = workspace_dir.path().join("missing.txt");

    run_tokendiff(&left, &missing, &[])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid argument"));

    Ok(())
}

#[rstest]
fn invalid_split_pattern_is_reported(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let (left, right) = write_inputs(&workspace_dir, "a", "b");

    run_tokendiff(&left, &right, &["--split-regex", "(unclosed"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid split pattern '(unclosed' for lines"));

    Ok(())
}

#[rstest]
fn standard_input_can_be_one_side(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let (left, _) = write_inputs(&workspace_dir, "a\nb", "");

    run_tokendiff(&left, std::path::Path::new("-"), &[])
        .write_stdin("a\nc")
        .assert()
        .code(1)
        .stdout("2c2\n< b\n---\n> c\n");

    Ok(())
}
