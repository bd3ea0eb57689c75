//! Line-oriented problem input, as typed at the console.
//!
//! ```text
//! <number of wall segments>
//! <number of points>
//! <length> <price>     (one line per segment)
//! <x> <y>              (one line per point)
//! ```

use crate::constants::MIN_POINTS;
use crate::cover::{Segment, SegmentCatalog};
use crate::error::{Result, WallError};
use crate::geometry::{Point, orient};

use std::io::BufRead;
use std::str::FromStr;

/// Everything one solve needs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Problem {
    pub catalog: SegmentCatalog,
    pub points: Vec<Point>,
}

impl Problem {
    /// Checks the point-set preconditions of the hull builder:
    /// at least three points, not all on one line.
    pub fn validate(&self) -> Result<()> {
        validate_points(&self.points)
    }
}

pub fn validate_points(points: &[Point]) -> Result<()> {
    if points.len() < MIN_POINTS {
        return Err(WallError::DegeneratePoints(format!(
            "need at least {} points, got {}",
            MIN_POINTS,
            points.len()
        )));
    }

    let first = points[0];
    let spanning = points.iter().find(|&&p| p != first).copied();
    let non_collinear = spanning.is_some_and(|second| {
        points
            .iter()
            .any(|&p| orient(first, second, p) != 0)
    });

    if !non_collinear {
        return Err(WallError::DegeneratePoints(
            "all points are collinear".to_string(),
        ));
    }
    Ok(())
}

/// Reads a problem without prompting
pub fn read_problem<R: BufRead>(reader: R) -> Result<Problem> {
    read_problem_with(reader, |_| {})
}

/// Reads a problem, calling `on_prompt` before each section is read
pub fn read_problem_with<R, F>(reader: R, mut on_prompt: F) -> Result<Problem>
where
    R: BufRead,
    F: FnMut(&str),
{
    let mut lines = NumberedLines::new(reader);

    on_prompt("Please provide the number of walls: ");
    let n_walls: usize = lines.next_single("number of walls")?;

    on_prompt("Please provide the number of points: ");
    let n_points: usize = lines.next_single("number of points")?;

    on_prompt(&format!(
        "Please provide {} pairs (m,p) of integer separated by a space ",
        n_walls
    ));
    let mut catalog = SegmentCatalog::new();
    for _ in 0..n_walls {
        let (line, length, price) = lines.next_pair::<u32>("length and price")?;
        if length == 0 {
            return Err(WallError::InvalidSegment { line });
        }
        catalog.push(Segment::new(length, price));
    }

    on_prompt(&format!(
        "Please provide {} pairs (x,y) of integers separated by a space",
        n_points
    ));
    // the count is untrusted, grow as lines actually arrive
    let mut points = Vec::new();
    for _ in 0..n_points {
        let (_, x, y) = lines.next_pair::<i32>("x and y")?;
        points.push(Point::new(x, y));
    }

    Ok(Problem { catalog, points })
}

/// Non-blank lines with 1-based line numbers
struct NumberedLines<R> {
    reader: R,
    line_no: usize,
    buf: String,
}

impl<R: BufRead> NumberedLines<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            buf: String::new(),
        }
    }

    fn next_line(&mut self, expected: &'static str) -> Result<(usize, Vec<String>)> {
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Err(WallError::MissingValue {
                    line: self.line_no + 1,
                    expected,
                });
            }
            self.line_no += 1;

            let tokens: Vec<String> = self.buf.split_whitespace().map(str::to_string).collect();
            if !tokens.is_empty() {
                return Ok((self.line_no, tokens));
            }
        }
    }

    fn next_single<T: FromStr<Err = std::num::ParseIntError>>(
        &mut self,
        expected: &'static str,
    ) -> Result<T> {
        let (line, tokens) = self.next_line(expected)?;
        parse_token(&tokens[0], line)
    }

    fn next_pair<T: FromStr<Err = std::num::ParseIntError>>(
        &mut self,
        expected: &'static str,
    ) -> Result<(usize, T, T)> {
        let (line, tokens) = self.next_line(expected)?;
        let [a, b] = match tokens.as_slice() {
            [a, b, ..] => [a, b],
            _ => return Err(WallError::MissingValue { line, expected }),
        };
        Ok((line, parse_token(a, line)?, parse_token(b, line)?))
    }
}

fn parse_token<T: FromStr<Err = std::num::ParseIntError>>(token: &str, line: usize) -> Result<T> {
    token.parse().map_err(|source| WallError::Parse {
        line,
        value: token.to_string(),
        source,
    })
}
