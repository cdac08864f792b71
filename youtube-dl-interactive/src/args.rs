use crate::{
    download::{self, Options, Outcome},
    engine::Engine,
    error::Result,
    prompt::{ModernPrompter, Prompter, RawPrompter},
};
use clap::{ColorChoice, CommandFactory, Parser};
use log::LevelFilter;

/// Interactively pick a format and download it with youtube-dl.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Args {
    /// Video url handed to the download engine.
    #[arg(value_name = "URL")]
    pub input: Vec<String>,

    /// Download engine executable, either a name looked up on PATH or a path.
    /// yt-dlp is asked for the youtube-dl format table with
    /// `--compat-options list-formats`.
    #[arg(long, value_name = "PROGRAM", default_value = "youtube-dl")]
    pub engine: String,

    /// Print the available formats in json format and exit without downloading.
    #[arg(long)]
    pub parse: bool,

    /// Raw style input prompts for old and unsupported terminals.
    #[arg(long)]
    pub raw_prompts: bool,

    /// When to output colored text.
    #[arg(long, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Show executed commands and other debugging information.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }

    /// Checks for the engine, then runs one interactive session.
    pub fn execute(self) -> Result<Outcome> {
        let engine = Engine::locate(&self.engine)?;

        let url = match self.input.as_slice() {
            [url] => url,
            _ => {
                Self::command().print_help()?;
                return Ok(Outcome::Usage);
            }
        };

        let mut prompter: Box<dyn Prompter> = if self.raw_prompts {
            Box::new(RawPrompter::stdin())
        } else {
            Box::new(ModernPrompter)
        };

        download::run_with(
            &engine,
            prompter.as_mut(),
            url,
            &Options { parse: self.parse },
        )
    }
}
