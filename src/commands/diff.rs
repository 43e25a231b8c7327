use crate::artifacts::diff::change::{Change, ChangeKind};
use crate::artifacts::diff::options::DiffOptions;
use crate::artifacts::diff::{Diff, diff};
use anyhow::Context;
use colored::Colorize;
use derive_new::new;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

const STDIN_PATH: &str = "-";

/// Compare two files and print the result in normal diff format
#[derive(Debug, Clone, new)]
pub struct DiffCommand {
    left: PathBuf,
    right: PathBuf,
    options: DiffOptions,
    brief: bool,
    color: bool,
}

impl DiffCommand {
    /// Run the comparison, returning whether the inputs differ
    pub fn run(&self, writer: &mut dyn Write) -> anyhow::Result<bool> {
        let left = read_input(&self.left)?;
        let right = read_input(&self.right)?;

        let diff = diff(&left, &right, &self.options)?;
        if diff.is_empty() {
            return Ok(false);
        }

        if self.brief {
            writeln!(
                writer,
                "Files {} and {} differ",
                self.left.display(),
                self.right.display()
            )?;
        } else {
            print_normal_diff(&diff, writer, self.color)?;
        }

        Ok(true)
    }
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == STDIN_PATH {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("cannot read standard input")?;
        return Ok(content);
    }

    if !path.is_file() {
        anyhow::bail!("invalid argument: {} is not a readable file", path.display());
    }

    std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}

/// 1-based `first[,last]` range of a span starting at 0-based `start`
fn format_range(start: usize, count: usize) -> String {
    match count {
        0 => start.to_string(),
        1 => (start + 1).to_string(),
        _ => format!("{},{}", start + 1, start + count),
    }
}

pub fn print_normal_diff(diff: &Diff, writer: &mut dyn Write, color: bool) -> anyhow::Result<()> {
    // right position minus left position inside unchanged stretches
    let mut shift = 0isize;

    for change in diff.changes() {
        let (left, right) = (change.left(), change.right());

        let (left_start, right_start) = match change.kind() {
            ChangeKind::Insert => ((right.at as isize - shift) as usize, right.at),
            ChangeKind::Delete => (left.at, (left.at as isize + shift) as usize),
            ChangeKind::Replace => (left.at, right.at),
        };

        let header = format!(
            "{}{}{}",
            format_range(left_start, left.count),
            operation(change.kind()),
            format_range(right_start, right.count)
        );
        print_line(writer, header, color.then_some(colored::Color::Cyan))?;
        print_change_tokens(&change, writer, color)?;

        shift += right.count as isize - left.count as isize;
    }

    Ok(())
}

fn operation(kind: ChangeKind) -> char {
    match kind {
        ChangeKind::Insert => 'a',
        ChangeKind::Delete => 'd',
        ChangeKind::Replace => 'c',
    }
}

fn print_change_tokens(change: &Change<'_>, writer: &mut dyn Write, color: bool) -> anyhow::Result<()> {
    for token in change.left().tokens() {
        print_line(writer, format!("< {token}"), color.then_some(colored::Color::Red))?;
    }

    if change.kind() == ChangeKind::Replace {
        writeln!(writer, "---")?;
    }

    for token in change.right().tokens() {
        print_line(writer, format!("> {token}"), color.then_some(colored::Color::Green))?;
    }

    Ok(())
}

fn print_line(
    writer: &mut dyn Write,
    line: String,
    color: Option<colored::Color>,
) -> anyhow::Result<()> {
    match color {
        Some(color) => writeln!(writer, "{}", line.color(color))?,
        None => writeln!(writer, "{line}")?,
    }
    Ok(())
}
