use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use itertools::{iproduct, Itertools};
use sdk::*;
use sdk::anyhow::anyhow;

/// (column, row)
type Point = (usize, usize);

fn main() -> Result<()> {
    run(
        env!("CARGO_MANIFEST_DIR"),
        |lines| Ok(Grid::parse(&lines)),
        |grid| Schematic::from_grid(grid).part_number_sum(),
        |grid| Schematic::from_grid(grid).gear_ratio_sum(),
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    fn parse(lines: &[String]) -> Self {
        let rows = lines.iter().map(|line| line.chars().collect()).collect();
        let grid = Grid { rows };
        trace!("Loaded grid:\n{grid}");
        grid
    }

    fn cells(&self) -> impl Iterator<Item = (Point, char)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, chars)| {
            chars.iter().enumerate().map(move |(col, &c)| ((col, row), c))
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.rows
            .iter()
            .map(|row| row.iter().collect::<String>())
            .join("\n");
        f.write_str(&rendered)
    }
}

/// Sparse view of a grid: every non-`.` cell is either a symbol or a digit.
#[derive(Debug, Clone, Default)]
struct Schematic {
    symbols: BTreeMap<Point, char>,
    digits: BTreeMap<Point, u32>,
}

/// Maximal run of digits on one row, `start..=end` by column.
#[derive(Debug, Clone, Copy, PartialOrd, PartialEq, Ord, Eq)]
struct Span {
    row: usize,
    start: usize,
    end: usize,
}

impl Schematic {
    fn from_grid(grid: &Grid) -> Self {
        let mut schematic = Schematic::default();
        for (point, c) in grid.cells() {
            match c.to_digit(10) {
                Some(digit) => {
                    schematic.digits.insert(point, digit);
                }
                None if c == '.' => {}
                None => {
                    schematic.symbols.insert(point, c);
                }
            }
        }
        debug!("{} symbols, {} digits", schematic.symbols.len(), schematic.digits.len());
        schematic
    }

    fn part_number_sum(&self) -> Result<u64> {
        let touched: BTreeSet<Span> = self.symbols
            .keys()
            .flat_map(|&point| self.spans_around(point))
            .collect();
        let mut sum = 0;
        for span in &touched {
            sum += self.value(span)?;
        }
        Ok(sum)
    }

    fn gear_ratio_sum(&self) -> Result<u64> {
        let mut sum = 0;
        for (&point, _) in self.symbols.iter().filter(|(_, &c)| c == '*') {
            let spans: Vec<_> = self.spans_around(point).into_iter().collect();
            match spans.as_slice() {
                [a, b] => {
                    let ratio = self.value(a)?
                        .checked_mul(self.value(b)?)
                        .ok_or(anyhow!("Gear ratio at {point:?} overflows"))?;
                    trace!("Gear at {point:?} has ratio {ratio}");
                    sum += ratio;
                }
                other => trace!("{point:?} touches {} numbers; not a gear", other.len()),
            }
        }
        Ok(sum)
    }

    fn spans_around(&self, point: Point) -> BTreeSet<Span> {
        neighbors(point).filter_map(|p| self.span_at(p)).collect()
    }

    fn span_at(&self, (col, row): Point) -> Option<Span> {
        let is_digit = |c: usize| self.digits.contains_key(&(c, row));
        if !is_digit(col) {
            return None;
        }
        let start = (0..col).rev().take_while(|&c| is_digit(c)).last().unwrap_or(col);
        let end = (col + 1..).take_while(|&c| is_digit(c)).last().unwrap_or(col);
        Some(Span { row, start, end })
    }

    fn value(&self, span: &Span) -> Result<u64> {
        (span.start..=span.end)
            .filter_map(|col| self.digits.get(&(col, span.row)))
            .try_fold(0_u64, |number, &digit| number.checked_mul(10)?.checked_add(u64::from(digit)))
            .ok_or(anyhow!("Number at {span:?} doesn't fit in a u64"))
    }
}

fn neighbors((col, row): Point) -> impl Iterator<Item = Point> {
    iproduct!(-1_isize..=1, -1_isize..=1)
        .filter(|&offset| offset != (0, 0))
        .filter_map(move |(dc, dr)| Some((col.checked_add_signed(dc)?, row.checked_add_signed(dr)?)))
}
