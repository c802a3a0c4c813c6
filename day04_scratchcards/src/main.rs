use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;
use std::str::FromStr;
use sdk::*;
use sdk::anyhow::anyhow;

type Cards = BTreeMap<usize, Card>;

fn main() -> Result<()> {
    run(
        env!("CARGO_MANIFEST_DIR"),
        |lines| parse_cards(&lines),
        |cards| points(cards),
        |cards| tally(cards),
    )
}

fn parse_cards(lines: &[String]) -> Result<Cards> {
    let mut cards = Cards::new();
    for line in lines {
        let (number, card) = Card::parse(line)?;
        if cards.insert(number, card).is_some() {
            warn!("Card {number} appears more than once; keeping the last one");
        }
    }
    debug!("Cards: {cards:?}");
    Ok(cards)
}

fn points(cards: &Cards) -> Result<usize> {
    let mut sum = 0;
    for (number, card) in cards {
        let points = card.points().ok_or(anyhow!("Card {number} has too many matches to score"))?;
        sum += points;
    }
    Ok(sum)
}

// Copies only flow to higher card numbers, so one ascending pass sees every copy a card
// will ever have before that card is processed.
fn tally(cards: &Cards) -> Result<usize> {
    // card #, count
    let mut collected: BTreeMap<usize, usize> = cards.keys().map(|&number| (number, 1)).collect();
    for (&number, card) in cards {
        let num_collected = collected.get(&number).copied().unwrap_or_default();
        let copies = card.copies_won(number);
        trace!("Card {number}: {num_collected} held, wins copies of {copies:?}");

        for card_num in copies {
            let count = collected.get_mut(&card_num)
                .ok_or(anyhow!("Card {number} wins a copy of card {card_num}, which doesn't exist"))?;
            *count += num_collected;
        }
    }
    Ok(collected.values().sum())
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Card {
    winning_numbers: Vec<usize>,
    picked_numbers: Vec<usize>,
}

impl Card {
    // Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
    fn parse(input: &str) -> Result<(usize, Self)> {
        trace!("Parsing {input}");
        let (header, body) = input.split_once(':')
            .ok_or(anyhow!("unable to split header and body of `{input}`"))?;
        let card_number = header.strip_prefix("Card")
            .ok_or(anyhow!("Header `{header}` does not start with 'Card'"))?;
        let card_number = usize::from_str(card_number.trim())?;

        let (winning_line, chosen_line) = body.split_once('|')
            .ok_or(anyhow!("Unable to split winning and picked numbers of `{input}`"))?;

        fn parse_numbers(number_line: &str) -> Result<Vec<usize>> {
            let mut numbers = Vec::new();
            for number in number_line.split_whitespace() {
                numbers.push(usize::from_str(number)?);
            }
            Ok(numbers)
        }

        let card = Card {
            winning_numbers: parse_numbers(winning_line)?,
            picked_numbers: parse_numbers(chosen_line)?,
        };
        Ok((card_number, card))
    }

    /// `None` once the score no longer fits in a `usize`.
    fn points(&self) -> Option<usize> {
        match self.count_matches() {
            0 => Some(0),
            more => 2_usize.checked_pow(u32::try_from(more - 1).ok()?)
        }
    }

    /// Distinct winning numbers that were also picked.
    fn count_matches(&self) -> usize {
        let winning: BTreeSet<_> = self.winning_numbers.iter().collect();
        let picked: BTreeSet<_> = self.picked_numbers.iter().collect();
        winning.intersection(&picked).count()
    }

    fn copies_won(&self, number: usize) -> RangeInclusive<usize> {
        number + 1..=number + self.count_matches()
    }
}
