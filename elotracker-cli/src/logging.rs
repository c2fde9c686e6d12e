//! Logger setup: console output through `env_logger`, optionally mirrored
//! into a log file with ANSI colour codes stripped.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Target};
use log::LevelFilter;

/// Console writer that also copies every record into the log file.
struct Tee {
    console: io::Stdout,
    file: Option<strip_ansi_escapes::Writer<File>>,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(file) = &mut self.file {
            file.write_all(buf)?;
        }
        self.console.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(file) = &mut self.file {
            file.flush()?;
        }
        self.console.flush()
    }
}

pub(crate) fn level(verbose: bool, quiet: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Install the global logger. `RUST_LOG` overrides the level flags.
pub(crate) fn init(verbose: bool, quiet: bool, logfile: Option<&Path>) -> io::Result<()> {
    let file = logfile
        .map(File::create)
        .transpose()?
        .map(strip_ansi_escapes::Writer::new);

    let mut builder = Builder::new();
    builder
        .filter_level(level(verbose, quiet))
        .parse_default_env()
        .target(Target::Pipe(Box::new(Tee {
            console: io::stdout(),
            file,
        })));

    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "[{} {:5} {}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }

    builder
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_wins_over_quiet() {
        assert_eq!(level(true, true), LevelFilter::Debug);
        assert_eq!(level(false, true), LevelFilter::Warn);
        assert_eq!(level(false, false), LevelFilter::Info);
    }

    #[test]
    fn logfile_gets_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");
        {
            let mut tee = Tee {
                console: io::stdout(),
                file: Some(strip_ansi_escapes::Writer::new(File::create(&path).unwrap())),
            };
            tee.write_all(b"\x1b[32m\xe2\x9c\x94\x1b[0m done\n").unwrap();
            tee.flush().unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "\u{2714} done\n");
    }
}
