use motifsynth::label::Direction;
use nom::branch::alt;
use nom::character::complete::char;
use nom::character::complete::space0;
use nom::character::complete::space1;
use nom::combinator::eof;
use nom::combinator::value;
use nom::sequence::preceded;
use nom::sequence::terminated;
use nom::IResult;
use nom::Parser;

pub fn direction(input: &str) -> IResult<&str, Direction> {
    alt((
        value(Direction::Forward, preceded(space1, char('+'))),
        value(Direction::Reverse, preceded(space1, char('-'))),
        value(Direction::NoMotif, space0),
    ))
    .parse(input)
}

pub fn record(input: &str) -> IResult<&str, (u64, i64, Direction)> {
    terminated(
        (
            nom::character::complete::u64,
            preceded(space1, nom::character::complete::i64),
            direction,
        ),
        (space0, eof),
    )
    .parse(input)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_record() {
        assert_eq!(
            super::record("0 3 +"),
            Ok(("", (0, 3, Direction::Forward)))
        );
        assert_eq!(
            super::record("12 0 -"),
            Ok(("", (12, 0, Direction::Reverse)))
        );
        assert_eq!(
            super::record("2 -1 "),
            Ok(("", (2, -1, Direction::NoMotif)))
        );
        assert_eq!(
            super::record("2 -1"),
            Ok(("", (2, -1, Direction::NoMotif)))
        );
        assert!(super::record("2 -1 * ").is_err());
        assert!(super::record("2").is_err());
    }
}
