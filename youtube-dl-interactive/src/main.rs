use anyhow::Result;
use clap::{ColorChoice, Parser};
use colored::Colorize;
use requestty::symbols;
use std::{
    io::{IsTerminal, stdout},
    process,
};
use ytdl_interactive::{Args, Error, Logger, engine};

fn run() -> Result<i32> {
    let args = Args::parse();

    match args.color {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Auto => {
            if !stdout().is_terminal() {
                colored::control::set_override(false);
            }
        }
        ColorChoice::Never => colored::control::set_override(false),
    }

    Logger::init(args.log_level())?;

    match args.execute() {
        Ok(outcome) => Ok(outcome.exit_code()),
        Err(Error::EngineNotFound { program }) => {
            println!("Sorry, this tool requires {program}.");
            println!("See {}.", homepage(&program));
            Ok(1)
        }
        Err(e) => Err(e.into()),
    }
}

fn homepage(program: &str) -> &'static str {
    if engine::is_yt_dlp(program) {
        "https://github.com/yt-dlp/yt-dlp"
    } else {
        "https://github.com/ytdl-org/youtube-dl"
    }
}

fn main() {
    let mut symbols = symbols::UNICODE;
    symbols.cross = 'x';
    symbols::set(symbols);

    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", "error".bold().red(), e);
            process::exit(1);
        }
    }
}
