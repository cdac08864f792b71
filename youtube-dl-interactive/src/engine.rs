use crate::{
    error::{Error, Result},
    format::FormatRecord,
    table,
};
use colored::Colorize;
use log::debug;
use std::{
    env,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

/// Output of an engine run whose streams were captured.
#[derive(Debug, Clone, Default)]
pub struct Captured {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl Captured {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs the download engine.
pub trait Runner {
    /// Name shown to the user in messages.
    fn name(&self) -> &str;

    /// Runs the engine and collects its output.
    fn capture(&self, args: &[String]) -> Result<Captured>;

    /// Runs the engine with inherited standard streams, returning its exit code.
    fn stream(&self, args: &[String]) -> Result<Option<i32>>;
}

/// The engine executable found on the system.
pub struct Engine {
    name: String,
    path: PathBuf,
}

impl Engine {
    /// Looks up `program`, either as a path or on `PATH`.
    pub fn locate(program: &str) -> Result<Self> {
        let path = find_program(program).ok_or_else(|| Error::EngineNotFound {
            program: program.to_owned(),
        })?;
        debug!("Using {}", path.to_string_lossy());

        Ok(Self {
            name: program.to_owned(),
            path,
        })
    }

    fn command(&self, args: &[String]) -> Command {
        debug!(
            "Executing {} {}",
            self.name.bold(),
            args.iter()
                .map(|x| if x.contains(' ') {
                    format!("\"{x}\"")
                } else {
                    x.to_owned()
                })
                .collect::<Vec<_>>()
                .join(" ")
        );

        let mut command = Command::new(&self.path);
        command.args(args);
        command
    }

    fn spawn_error(&self, source: std::io::Error) -> Error {
        Error::Spawn {
            program: self.name.clone(),
            source,
        }
    }
}

impl Runner for Engine {
    fn name(&self) -> &str {
        &self.name
    }

    fn capture(&self, args: &[String]) -> Result<Captured> {
        let output = self
            .command(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.spawn_error(e))?;

        Ok(Captured {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn stream(&self, args: &[String]) -> Result<Option<i32>> {
        let status = self
            .command(args)
            .spawn()
            .map_err(|e| self.spawn_error(e))?
            .wait()?;
        Ok(status.code())
    }
}

/// Arguments listing the formats of `url`. yt-dlp is switched back to the
/// youtube-dl table layout, its own table has different headers.
pub fn listing_args(engine: &str, url: &str) -> Vec<String> {
    let mut args = Vec::new();

    if is_yt_dlp(engine) {
        args.extend(["--compat-options".to_owned(), "list-formats".to_owned()]);
    }

    args.extend(["-F".to_owned(), url.to_owned()]);
    args
}

pub fn is_yt_dlp(engine: &str) -> bool {
    Path::new(engine)
        .file_stem()
        .and_then(|x| x.to_str())
        .is_some_and(|x| x.to_lowercase().starts_with("yt-dlp"))
}

/// Runs `<engine> -F <url>` and parses the printed format table.
pub fn fetch_formats<R: Runner + ?Sized>(runner: &R, url: &str) -> Result<Vec<FormatRecord>> {
    let captured = runner.capture(&listing_args(runner.name(), url))?;

    if !captured.success() {
        return Err(Error::Listing {
            program: runner.name().to_owned(),
            code: captured.code,
            stdout: captured.stdout,
            stderr: captured.stderr,
        });
    }

    let formats = table::parse_formats(&captured.stdout);
    debug!("Parsed {} formats", formats.len());
    Ok(formats)
}

/// Resolves `program` to an executable path. Anything containing a path
/// separator is taken as a path, bare names are searched on `PATH`.
pub fn find_program(program: &str) -> Option<PathBuf> {
    let candidate = Path::new(program);

    if candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_owned());
    }

    let bin = if cfg!(target_os = "windows") && candidate.extension().is_none() {
        format!("{program}.exe")
    } else {
        program.to_owned()
    };

    env::split_paths(&env::var_os("PATH")?)
        .map(|dir| dir.join(&bin))
        .find(|x| is_executable(x))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .is_ok_and(|x| x.is_file() && x.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
