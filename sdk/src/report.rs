use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use anyhow::anyhow;
use crate::Result;

/// Which stars to solve and print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Both,
    First,
    Second,
}

impl TryFrom<u8> for Mode {
    type Error = anyhow::Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Mode::Both),
            1 => Ok(Mode::First),
            2 => Ok(Mode::Second),
            other => Err(anyhow!("invalid mode {other}; expected 0 (both), 1 (first) or 2 (second)")),
        }
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: u8 = s.trim()
            .parse()
            .map_err(|_| anyhow!("invalid mode `{s}`; expected 0 (both), 1 (first) or 2 (second)"))?;
        Mode::try_from(value)
    }
}

impl Mode {
    /// Runs only the solvers this mode asks for.
    pub fn solve<T, A, B>(
        self,
        data: &T,
        first: impl FnOnce(&T) -> Result<A>,
        second: impl FnOnce(&T) -> Result<B>,
    ) -> Result<Answers<A, B>> {
        let answers = match self {
            Mode::Both => Answers::Both(first(data)?, second(data)?),
            Mode::First => Answers::First(first(data)?),
            Mode::Second => Answers::Second(second(data)?),
        };
        Ok(answers)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answers<A, B> {
    Both(A, B),
    First(A),
    Second(B),
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Answers<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answers::Both(a, b) => write!(f, "first star {a}, second star {b}"),
            Answers::First(a) => write!(f, "first star {a}"),
            Answers::Second(b) => write!(f, "second star {b}"),
        }
    }
}

/// Both stars get a `Day <label> ... star:` heading; a single star is printed bare.
pub fn report<A, B>(out: &mut impl Write, day: &str, answers: &Answers<A, B>) -> Result<()>
where
    A: fmt::Display,
    B: fmt::Display,
{
    match answers {
        Answers::Both(a, b) => {
            writeln!(out, "Day {day} first star:")?;
            writeln!(out, "{a}")?;
            writeln!(out, "Day {day} second star:")?;
            writeln!(out, "{b}")?;
        }
        Answers::First(a) => writeln!(out, "{a}")?,
        Answers::Second(b) => writeln!(out, "{b}")?,
    }
    Ok(())
}

/// `day04_scratchcards` -> `4`. Directories not named `dayNN_...` are used as-is.
pub fn day_label(day_dir: &Path) -> String {
    let name = day_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| day_dir.display().to_string());
    name.strip_prefix("day")
        .map(|rest| rest.split('_').next().unwrap_or(rest))
        .and_then(|number| number.parse::<u32>().ok())
        .map(|number| number.to_string())
        .unwrap_or(name)
}
