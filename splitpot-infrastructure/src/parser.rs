use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{take_till, take_till1},
    character::complete::{char, space0, space1},
    number::complete::double,
    sequence::delimited,
};
use splitpot_domain::Contributor;
use thiserror::Error;

/// Rejection of one line of a contribution file, with its 1-based line
/// number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {detail}")]
pub struct ParseError {
    pub line: usize,
    pub detail: String,
}

/// Parses a contribution list, one contributor per line: `NAME AMOUNT`.
/// Names containing spaces are double-quoted (`"Mary Ann" 12.50`). Blank
/// lines and `#` comment lines are skipped.
///
/// Only the line grammar is checked here; name uniqueness and amount signs
/// are enforced by the application-layer validation that callers run next.
pub fn parse_contributions(input: &str) -> Result<Vec<Contributor>, ParseError> {
    let mut contributors = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match contribution_line(line) {
            Ok(("", contributor)) => contributors.push(contributor),
            Ok((rest, _)) => {
                return Err(ParseError {
                    line: idx + 1,
                    detail: format!("unexpected trailing input '{rest}'"),
                });
            }
            Err(_) => {
                return Err(ParseError {
                    line: idx + 1,
                    detail: format!("expected 'NAME AMOUNT', got '{line}'"),
                });
            }
        }
    }

    Ok(contributors)
}

fn contribution_line(input: &str) -> IResult<&str, Contributor> {
    let (input, name) = alt((quoted_name, bare_name)).parse(input)?;
    let (input, _) = space1(input)?;
    let (input, amount) = double(input)?;
    let (input, _) = space0(input)?;
    Ok((input, Contributor::new(name, amount)))
}

fn quoted_name(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_till(|c| c == '"'), char('"')).parse(input)
}

fn bare_name(input: &str) -> IResult<&str, &str> {
    take_till1(char::is_whitespace).parse(input)
}
