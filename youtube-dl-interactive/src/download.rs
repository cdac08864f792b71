use crate::{
    engine::{self, Runner},
    error::{Error, Result},
    format::FormatRecord,
    prompt::Prompter,
    selector::FormatSelector,
};
use colored::Colorize;
use log::{debug, error, info};
use std::io::Write;

pub const SUBTITLE_FLAGS: [&str; 2] = ["--all-subs", "--embed-subs"];

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The engine was asked to download. Its exit code is reported only.
    Downloaded { code: Option<i32> },
    /// Format table printed as json.
    Listed,
    ListingFailed { code: Option<i32> },
    NothingToDownload,
    /// Wrong number of urls, help was shown.
    Usage,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Downloaded { .. } | Self::Listed | Self::NothingToDownload => 0,
            Self::ListingFailed { code } => match code {
                Some(0) | None => 1,
                Some(code) => *code,
            },
            Self::Usage => 1,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Print the parsed format table as json instead of downloading.
    pub parse: bool,
}

/// Engine arguments downloading `format` from `url`.
pub fn download_args(format: &FormatRecord, subtitles: bool, url: &str) -> Vec<String> {
    let mut args = vec!["-f".to_owned(), format.format().to_owned()];

    if subtitles {
        args.extend(SUBTITLE_FLAGS.iter().map(|x| (*x).to_owned()));
    }

    args.push(url.to_owned());
    args
}

/// Lists the formats of `url`, lets the user choose one and downloads it.
pub fn run_with<R, P>(runner: &R, prompter: &mut P, url: &str, options: &Options) -> Result<Outcome>
where
    R: Runner + ?Sized,
    P: Prompter + ?Sized,
{
    info!("Loading formats");

    let formats = match engine::fetch_formats(runner, url) {
        Ok(formats) => formats,
        Err(Error::Listing {
            program,
            code,
            stdout,
            stderr,
        }) => {
            error!("{} stopped with error:", program.bold());
            print!("{stdout}");
            eprint!("{stderr}");
            std::io::stdout().flush()?;
            return Ok(Outcome::ListingFailed { code });
        }
        Err(e) => return Err(e),
    };

    if options.parse {
        serde_json::to_writer_pretty(std::io::stdout(), &formats)?;
        println!();
        return Ok(Outcome::Listed);
    }

    let Some(format) = FormatSelector::new(&mut *prompter).select(formats)? else {
        info!("Nothing to download.");
        return Ok(Outcome::NothingToDownload);
    };

    let subtitles = prompter.confirm("Include subtitles?", false)?;

    info!(
        "{} OK, downloading format #{} ({})",
        "✔".green(),
        format.format().bold(),
        format.note()
    );

    let code = runner.stream(&download_args(&format, subtitles, url))?;
    debug!("{} exited with code {:?}", runner.name(), code);
    Ok(Outcome::Downloaded { code })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> FormatRecord {
        FormatRecord::new(vec![
            ("format".to_owned(), "bestvideo+140".to_owned()),
            ("note".to_owned(), "720p".to_owned()),
        ])
    }

    #[test]
    fn format_flag_is_verbatim() {
        assert_eq!(
            download_args(&record(), false, "https://youtu.be/abc"),
            ["-f", "bestvideo+140", "https://youtu.be/abc"]
        );
    }

    #[test]
    fn subtitle_flags_come_before_url() {
        assert_eq!(
            download_args(&record(), true, "https://youtu.be/a b"),
            ["-f", "bestvideo+140", "--all-subs", "--embed-subs", "https://youtu.be/a b"]
        );
    }

    #[test]
    fn exit_codes() {
        assert_eq!(Outcome::NothingToDownload.exit_code(), 0);
        assert_eq!(Outcome::Listed.exit_code(), 0);
        assert_eq!(Outcome::Downloaded { code: Some(3) }.exit_code(), 0);
        assert_eq!(Outcome::ListingFailed { code: Some(2) }.exit_code(), 2);
        assert_eq!(Outcome::ListingFailed { code: None }.exit_code(), 1);
        assert_eq!(Outcome::Usage.exit_code(), 1);
    }
}
