use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use sdk::*;
use sdk::anyhow::anyhow;
use sdk::winnow::ascii::{alpha1, dec_uint, space0, space1};
use sdk::winnow::combinator::{preceded, separated};
use sdk::winnow::{Parser, PResult};

type Games = BTreeMap<Game, Vec<Counts>>;

const MAX_COUNTS: Counts = Counts {
    green: 13,
    red: 12,
    blue: 14,
};

fn main() -> Result<()> {
    run(
        env!("CARGO_MANIFEST_DIR"),
        |lines| parse_games(&lines),
        |games| Ok(valid_game_sum(games)),
        |games| Ok(power_sum(games)),
    )
}

fn parse_games(lines: &[String]) -> Result<Games> {
    let mut games = Games::new();
    for line in lines {
        let (game, pulls) = Counts::parse_line(line)?;
        if games.insert(game, pulls).is_some() {
            warn!("{game:?} appears more than once; keeping the last one");
        }
    }
    Ok(games)
}

fn valid_game_sum(games: &Games) -> u32 {
    games.iter()
        .filter(|(_, counts)| counts.iter().all(|c| is_valid(*c)))
        .map(|(game, _)| game.0)
        .sum()
}

fn power_sum(games: &Games) -> u32 {
    games.iter()
        .map(|(game, counts)| {
            let bag = counts
                .iter()
                .copied()
                .fold(Counts::default(), |a, b| a.max(b));
            trace!("{game:?} needs at least {bag:?}");
            bag.power()
        })
        .sum()
}

fn is_valid(counts: Counts) -> bool {
    let valid = counts.red <= MAX_COUNTS.red
        && counts.green <= MAX_COUNTS.green
        && counts.blue <= MAX_COUNTS.blue;
    if !valid {
        debug!("{counts:?} has single color greater than max {MAX_COUNTS:?}");
    }
    valid
}

#[derive(Debug)]
struct ParseError(String);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq)]
struct Game(u32);

impl Game {
    // Game 1
    fn parse(input: &mut &str) -> PResult<Self> {
        preceded(("Game", space1), dec_uint::<_, u32, _>)
            .map(Game)
            .parse_next(input)
    }
}

#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq)]
enum Color {
    Red,
    Green,
    Blue,
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            other => Err(ParseError(format!("unknown color `{other}`"))),
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
struct Counts {
    green: u32,
    red: u32,
    blue: u32,
}

impl Counts {
    // Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
    fn parse_line(line: &str) -> Result<(Game, Vec<Self>)> {
        trace!("Parsing line {line}");
        let (game, pulls) = (Game::parse, ':', separated(1.., Counts::parse, ';'))
            .map(|(game, _, pulls)| (game, pulls))
            .parse(line)
            .map_err(|e| anyhow!("Unable to parse game from `{line}`: {e:?}"))?;
        trace!("Parsed line {line} to {game:?}, {pulls:?}");
        Ok((game, pulls))
    }

    // 3 blue, 4 red
    fn parse(input: &mut &str) -> PResult<Self> {
        // 3 red
        fn parse_pull(input: &mut &str) -> PResult<(Color, u32)> {
            (space0, dec_uint::<_, u32, _>, space1, alpha1.parse_to::<Color>(), space0)
                .map(|(_, number, _, color, _)| (color, number))
                .parse_next(input)
        }

        separated(1.., parse_pull, ',')
            .try_map(|pulls: Vec<(Color, u32)>| Counts::from_pulls(&pulls))
            .parse_next(input)
    }

    fn from_pulls(pulls: &[(Color, u32)]) -> std::result::Result<Self, ParseError> {
        let mut seen = BTreeSet::new();
        let mut counts = Counts::default();
        for &(color, number) in pulls {
            if !seen.insert(color) {
                return Err(ParseError(format!("{color:?} pulled twice in one grab")));
            }
            match color {
                Color::Red => counts.red = number,
                Color::Green => counts.green = number,
                Color::Blue => counts.blue = number,
            }
        }
        Ok(counts)
    }

    fn max(self, other: Self) -> Self {
        Counts {
            green: self.green.max(other.green),
            red: self.red.max(other.red),
            blue: self.blue.max(other.blue),
        }
    }

    fn power(self) -> u32 {
        self.red * self.blue * self.green
    }
}
