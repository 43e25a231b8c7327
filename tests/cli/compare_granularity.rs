use crate::common::{run_tokendiff, workspace_dir, write_inputs};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn lines_are_compared_by_default(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let (left, right) = write_inputs(
        &workspace_dir,
        "the quick red fox jumped\nover the hairy dog",
        "the quick brown fox jumped\nover the lazy dog",
    );

    run_tokendiff(&left, &right, &[]).assert().code(1).stdout(
        "1,2c1,2\n\
         < the quick red fox jumped\n\
         < over the hairy dog\n\
         ---\n\
         > the quick brown fox jumped\n\
         > over the lazy dog\n",
    );

    Ok(())
}

#[rstest]
#[case("words", "2c2\n< b\n---\n> c\n")]
#[case("chars", "3c3\n< b\n---\n> c\n")]
fn granularity_selects_tokens(
    workspace_dir: TempDir,
    #[case] compare: &str,
    #[case] expected: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let (left, right) = write_inputs(&workspace_dir, "a b", "a c");

    run_tokendiff(&left, &right, &["--compare", compare])
        .assert()
        .code(1)
        .stdout(predicate::str::diff(expected.to_string()));

    Ok(())
}

#[rstest]
fn custom_split_pattern_is_used(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let (left, right) = write_inputs(&workspace_dir, "a,b,c", "a,x,c");

    run_tokendiff(&left, &right, &["--compare", "words", "--split-regex", ","])
        .assert()
        .code(1)
        .stdout("2c2\n< b\n---\n> x\n");

    Ok(())
}

#[rstest]
fn inserted_lines_are_reported_after_their_anchor(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let (left, right) = write_inputs(&workspace_dir, "a\nb", "a\nx\nb");

    run_tokendiff(&left, &right, &[])
        .assert()
        .code(1)
        .stdout("1a2\n> x\n");

    Ok(())
}
