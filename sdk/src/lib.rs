use std::fs;
use std::io;
use std::path::Path;
use anyhow::Context;
use clap::Parser;
pub use log::{trace, debug, info, warn, error};
pub use anyhow::Result;
pub use anyhow;
pub use dotenvy;
pub use lazy_static::lazy_static;
pub use winnow;

mod report;

pub use report::{day_label, report, Answers, Mode};

/// Name of the puzzle input inside each day's directory.
pub const INPUT_FILE: &str = "input.txt";

/// Loads `.env` (if there is one) and installs the logger. Safe to call more than once.
pub fn init() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("ignoring unreadable .env: {e}");
        }
    }
    let _ = pretty_env_logger::try_init();
}

/// Reads the whole file and splits it on `\n`. A final newline terminates the
/// last line rather than starting an empty one.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let input = fs::read_to_string(path)
        .with_context(|| format!("unable to read {}", path.display()))?;
    let input = input.strip_suffix('\n').unwrap_or(&input);
    if input.is_empty() {
        return Ok(Vec::new());
    }
    let lines: Vec<String> = input.split('\n').map(str::to_owned).collect();
    debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

#[derive(Debug, Parser)]
#[command(about = "Solve one day's puzzle from its input.txt")]
struct Args {
    /// 0 prints both stars, 1 only the first, 2 only the second
    #[arg(default_value = "0", value_parser = parse_mode)]
    mode: Mode,
}

fn parse_mode(s: &str) -> std::result::Result<Mode, String> {
    s.parse::<Mode>().map_err(|e| e.to_string())
}

/// Runs one day end to end: reads `input.txt` from `day_dir`, parses it, solves
/// the stars selected on the command line and prints them to stdout.
pub fn run<T, A, B>(
    day_dir: impl AsRef<Path>,
    parse: impl FnOnce(Vec<String>) -> Result<T>,
    first: impl FnOnce(&T) -> Result<A>,
    second: impl FnOnce(&T) -> Result<B>,
) -> Result<()>
where
    A: std::fmt::Display,
    B: std::fmt::Display,
{
    init();
    let Args { mode } = Args::parse();
    let day_dir = day_dir.as_ref();
    let label = day_label(day_dir);
    debug!("Solving day {label} in {mode:?}");

    let lines = read_lines(day_dir.join(INPUT_FILE))?;
    let data = parse(lines)?;
    let answers = mode.solve(&data, first, second)?;
    info!("Day {label}: {answers}");

    let stdout = io::stdout();
    report(&mut stdout.lock(), &label, &answers)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use clap::Parser;
    use crate::{init, read_lines, Args, Mode};

    #[test]
    fn mode_argument() {
        let cases = [
            (vec!["day04_scratchcards"], Mode::Both),
            (vec!["day04_scratchcards", "0"], Mode::Both),
            (vec!["day04_scratchcards", "1"], Mode::First),
            (vec!["day04_scratchcards", "2"], Mode::Second),
        ];
        for (args, expected) in cases {
            assert_eq!(expected, Args::try_parse_from(args.iter().copied()).unwrap().mode, "{args:?}");
        }
    }

    #[test]
    fn invalid_mode_argument() {
        for arg in ["3", "x", "256"] {
            let err = Args::try_parse_from(["day04_scratchcards", arg]).unwrap_err();
            assert!(err.to_string().contains("invalid mode"), "{arg}: {err}");
        }
        assert!(Args::try_parse_from(["day04_scratchcards", "-1"]).is_err());
        assert!(Args::try_parse_from(["day04_scratchcards", "1", "2"]).is_err());
    }

    #[test]
    fn reads_lines_without_trimming() {
        init();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Game 1: 3 blue\n  padded  \n\nlast\n").unwrap();
        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, ["Game 1: 3 blue", "  padded  ", "", "last"]);
    }

    #[test]
    fn only_one_final_newline_is_dropped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "..*\n12.\n\n").unwrap();
        assert_eq!(read_lines(file.path()).unwrap(), ["..*", "12.", ""]);
    }

    #[test]
    fn missing_final_newline() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "a\nb").unwrap();
        assert_eq!(read_lines(file.path()).unwrap(), ["a", "b"]);
    }

    #[test]
    fn empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(read_lines(file.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        let err = read_lines(&path).unwrap_err();
        assert!(err.to_string().contains("input.txt"), "{err}");
        assert!(err.downcast_ref::<std::io::Error>().is_some());
    }
}
