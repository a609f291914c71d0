use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, digit1},
    combinator::{eof, map, map_opt, value},
    error::context,
    multi::many0,
    sequence::{delimited, preceded},
};
use nom_language::error::VerboseError;

use super::{Jpath, Segment};

// ""               - allowed - the root path
// "a.b.c"          - allowed - object member chain
// "a[0].b"         - allowed - array index between members
// "[2]"            - allowed - index into a root-level array
// ".a"             - not allowed - leading '.'
// "a..b"           - not allowed - empty member name
// "a[x]"           - not allowed - non-numeric index
// "a[1"            - not allowed - unterminated index
//
// Member names may not contain '.', '[' or ']' in this syntax; such keys
// are displayable but not addressable from the command line.
pub(crate) fn parse_path(input: &str) -> IResult<&str, Jpath, VerboseError<&str>> {
    context(
        "expected a dot/bracket path or empty input",
        alt((
            // exactly empty input: the root
            value(Jpath::root(), eof),
            map(
                (parse_first_segment, many0(parse_rest_segment)),
                |(first, rest)| {
                    let mut segments = vec![first];
                    segments.extend(rest);
                    Jpath { segments }
                },
            ),
        )),
    )
    .parse(input)
}

fn parse_first_segment(input: &str) -> IResult<&str, Segment, VerboseError<&str>> {
    context("segment", alt((parse_index_segment, parse_field))).parse(input)
}

fn parse_rest_segment(input: &str) -> IResult<&str, Segment, VerboseError<&str>> {
    context(
        "segment",
        alt((parse_index_segment, preceded(char('.'), parse_field))),
    )
    .parse(input)
}

fn parse_field(input: &str) -> IResult<&str, Segment, VerboseError<&str>> {
    let is_field_char = |c: char| c != '.' && c != '[' && c != ']';
    context(
        "member name",
        map(take_while1(is_field_char), |key: &str| {
            Segment::Field(key.to_string())
        }),
    )
    .parse(input)
}

fn parse_index_segment(input: &str) -> IResult<&str, Segment, VerboseError<&str>> {
    context(
        "array index",
        map(
            delimited(
                char('['),
                map_opt(digit1, |digits: &str| digits.parse::<usize>().ok()),
                char(']'),
            ),
            Segment::Index,
        ),
    )
    .parse(input)
}
