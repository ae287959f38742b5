//! CLI entry point for lsi

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use termcolor::{ColorChoice, StandardStream};

use lsi::{ListingConfig, Presenter, StdinConfirmer, Theme};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lsi")]
#[command(about = "ls, improved: directory listings with human-authored descriptions")]
#[command(version)]
struct Args {
    /// Directory to list
    #[arg(default_value = ".", value_name = "DIR")]
    dir: PathBuf,

    /// Show hidden files and directories
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// Show only directories
    #[arg(short = 'd', long = "only-directories")]
    only_directories: bool,

    /// Show only files (directories win when combined with -d)
    #[arg(short = 'f', long = "only-files")]
    only_files: bool,

    /// Show only items whose name or description contains WORD
    #[arg(short = 's', long = "search", value_name = "WORD")]
    search: Option<String>,

    /// Show the number of visible children next to each directory
    #[arg(short = 'l', long = "show-file-num")]
    show_file_num: bool,

    /// Ask for confirmation before listing more than N items
    #[arg(short = 'n', long = "limit-file-num", value_name = "N", default_value = "50")]
    limit_file_num: usize,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let config = ListingConfig {
        dir: args.dir,
        show_hidden: args.all,
        only_directories: args.only_directories,
        only_files: args.only_files,
        search_word: args.search,
        show_child_count: args.show_file_num,
        item_limit: args.limit_file_num,
    };

    let use_color = should_use_color(args.color);
    let theme = if use_color {
        Theme::colored()
    } else {
        Theme::plain()
    };
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    let presenter = Presenter::new(config, theme);
    if let Err(err) = presenter.run(&mut StdinConfirmer, &mut stdout) {
        eprintln!("lsi: error: {}", err);
        process::exit(1);
    }
}
