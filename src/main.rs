use clap::{Parser, ValueEnum};
use is_terminal::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tokendiff::commands::diff::DiffCommand;
use tokendiff::{CompareMode, DiffOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Parser)]
#[command(
    name = "tokendiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare two files line by line, word by word or character by character",
    long_about = "This command computes the minimal set of changes between two files \
    using Myers' O(ND) difference algorithm and prints them in normal diff format. \
    Use - as a file name to read one side from standard input.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The original file")]
    left: PathBuf,
    #[arg(index = 2, help = "The modified file")]
    right: PathBuf,
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = CompareMode::Lines,
        help = "The token granularity"
    )]
    compare: CompareMode,
    #[arg(short = 'w', long, help = "Ignore all whitespace inside tokens")]
    ignore_whitespace: bool,
    #[arg(short = 'i', long, help = "Ignore case differences")]
    ignore_case: bool,
    #[arg(
        long,
        value_name = "REGEX",
        help = "Override the split pattern of the selected granularity"
    )]
    split_regex: Option<String>,
    #[arg(short = 'q', long, help = "Only report whether the files differ")]
    brief: bool,
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, help = "When to color the output")]
    color: ColorChoice,
}

impl Cli {
    fn options(&self) -> DiffOptions {
        let options = DiffOptions::default()
            .with_compare(self.compare)
            .with_ignore_whitespace(self.ignore_whitespace)
            .with_ignore_case(self.ignore_case);

        match &self.split_regex {
            Some(pattern) => options.with_split_regex(pattern.as_str()),
            None => options,
        }
    }

    fn color(&self) -> bool {
        match self.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::stdout().is_terminal(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let color = cli.color();
    colored::control::set_override(color);

    let command = DiffCommand::new(
        cli.left.clone(),
        cli.right.clone(),
        cli.options(),
        cli.brief,
        color,
    );

    match command.run(&mut std::io::stdout().lock()) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::from(1),
        Err(e) => {
            eprintln!("tokendiff: {e:#}");
            ExitCode::from(2)
        }
    }
}
