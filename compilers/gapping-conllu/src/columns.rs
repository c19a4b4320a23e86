use nom::{
    branch::alt,
    character::complete::{char, digit1},
    combinator::{all_consuming, map, map_res, value},
    sequence::separated_pair,
    IResult,
};

pub const ID: usize = 0;
pub const FORM: usize = 1;
pub const LEMMA: usize = 2;
pub const HEAD: usize = 6;
pub const DEPREL: usize = 7;
pub const COLUMN_COUNT: usize = 10;

/// Contents of the ID column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenIdColumn {
    /// A syntactic word.
    Word(u32),
    /// Multiword token spanning several words ("1-2"); carries no dependency.
    Range(u32, u32),
    /// Empty node of the enhanced graph ("1.1").
    Empty(u32, u32),
}

fn number(input: &str) -> IResult<&str, u32> {
    map_res(digit1, |digits: &str| digits.parse::<u32>())(input)
}

fn token_id(input: &str) -> IResult<&str, TokenIdColumn> {
    alt((
        map(separated_pair(number, char('-'), number), |(a, b)| TokenIdColumn::Range(a, b)),
        map(separated_pair(number, char('.'), number), |(a, b)| TokenIdColumn::Empty(a, b)),
        map(number, TokenIdColumn::Word),
    ))(input)
}

/// `None` when the field is not a valid id.
pub fn parse_id(field: &str) -> Option<TokenIdColumn> {
    all_consuming(token_id)(field).ok().map(|(_, id)| id)
}

/// `Some(None)` for an unspecified head (`_`), `None` when the field is malformed.
pub fn parse_head(field: &str) -> Option<Option<u32>> {
    all_consuming(alt((value(None, char('_')), map(number, Some))))(field)
        .ok()
        .map(|(_, head)| head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_column() {
        assert_eq!(parse_id("7"), Some(TokenIdColumn::Word(7)));
        assert_eq!(parse_id("3-4"), Some(TokenIdColumn::Range(3, 4)));
        assert_eq!(parse_id("5.1"), Some(TokenIdColumn::Empty(5, 1)));
        assert_eq!(parse_id("x"), None);
        assert_eq!(parse_id("3-"), None);
        assert_eq!(parse_id(""), None);
    }

    #[test]
    fn test_head_column() {
        assert_eq!(parse_head("0"), Some(Some(0)));
        assert_eq!(parse_head("12"), Some(Some(12)));
        assert_eq!(parse_head("_"), Some(None));
        assert_eq!(parse_head("-1"), None);
    }
}
