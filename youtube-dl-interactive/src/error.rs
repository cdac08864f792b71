use std::io;
use thiserror::Error;

/// The error type returned by listing, prompting and download operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not find {program}")]
    EngineNotFound { program: String },

    #[error("could not execute {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} stopped with error{}", exit_suffix(.code))]
    Listing {
        program: String,
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("prompt failed: {0}")]
    Prompt(#[from] requestty::ErrorKind),

    #[error("unexpected end of input while waiting for an answer")]
    NoAnswer,

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" (exit code {code})"),
        None => " (terminated by signal)".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_not_found_names_program() {
        let error = Error::EngineNotFound {
            program: "yt-dlp".to_owned(),
        };
        assert_eq!(error.to_string(), "could not find yt-dlp");
    }

    #[test]
    fn listing_message_mentions_exit() {
        let listing = |code| Error::Listing {
            program: "youtube-dl".to_owned(),
            code,
            stdout: String::new(),
            stderr: String::new(),
        };

        assert_eq!(
            listing(Some(1)).to_string(),
            "youtube-dl stopped with error (exit code 1)"
        );
        assert_eq!(
            listing(None).to_string(),
            "youtube-dl stopped with error (terminated by signal)"
        );
    }
}
