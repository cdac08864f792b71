use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

static LOGGER: Logger = Logger;

pub struct Logger;

impl Logger {
    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = match log::max_level() {
            LevelFilter::Debug | LevelFilter::Trace => {
                let location = match (record.file(), record.line()) {
                    (Some(file), Some(line)) => format!("[{file}:{line}]").dimmed(),
                    _ => "[unk]".dimmed(),
                };

                format!(
                    "{} {} {} {}",
                    label(record.level()),
                    record.target().dimmed(),
                    location,
                    record.args()
                )
            }
            _ => match record.level() {
                Level::Info => record.args().to_string(),
                level => format!("{} {}", label(level), record.args()),
            },
        };

        match record.level() {
            Level::Error | Level::Warn => eprintln!("{line}"),
            _ => println!("{line}"),
        }
    }

    fn flush(&self) {}
}

fn label(level: Level) -> ColoredString {
    let name = format!("{}:", level.as_str().to_lowercase());

    match level {
        Level::Error => name.bold().red(),
        Level::Warn => name.bold().yellow(),
        Level::Info => name.bold().green(),
        Level::Debug => name.blue(),
        Level::Trace => name.dimmed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_name_the_level() {
        colored::control::set_override(false);
        assert_eq!(label(Level::Warn).to_string(), "warn:");
        assert_eq!(label(Level::Error).to_string(), "error:");
        assert_eq!(label(Level::Trace).to_string(), "trace:");
    }
}
