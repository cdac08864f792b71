//! Interactive front-end to youtube-dl and compatible download engines.
//!
//! The engine is asked for its format table (`-F`), the table is parsed into
//! [`FormatRecord`]s and the user narrows them down by resolution, extension
//! and finally by picking one format, which is then downloaded with `-f`.

mod args;
pub mod download;
pub mod engine;
mod error;
pub mod format;
mod logger;
pub mod prompt;
pub mod selector;
pub mod table;

pub use args::Args;
pub use download::{Options, Outcome, run_with};
pub use error::{Error, Result};
pub use format::FormatRecord;
pub use logger::Logger;
