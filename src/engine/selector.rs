use std::str::FromStr;

use super::snake::End;
use crate::error::MoveError;

/// A signed pick over the active hand: `0` skips, `-k` plays the k-th tile at the left end and
/// `k` plays it at the right end. Positions count from 1.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Selector(pub(crate) i32);

/// A move that has been checked against the hand it refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Move {
    Skip,
    Place { index: usize, end: End },
}

impl FromStr for Selector {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        // i32's parser also accepts a leading '+', which is fine here
        token
            .parse::<i32>()
            .map(Selector)
            .map_err(|_| MoveError::Malformed(token.to_string()))
    }
}

impl Selector {
    pub(crate) fn skip() -> Self {
        Selector(0)
    }

    /// Encode a placement of the tile at `index` (0-based).
    pub(crate) fn place(index: usize, end: End) -> Self {
        let k = index as i32 + 1;
        match end {
            End::Left => Selector(-k),
            End::Right => Selector(k),
        }
    }

    /// Check the selector against a hand of `hand_size` tiles.
    pub(crate) fn resolve(self, hand_size: usize) -> Result<Move, MoveError> {
        let k = self.0;
        if k == 0 {
            return Ok(Move::Skip);
        }
        let position = k.unsigned_abs() as usize;
        if position > hand_size {
            return Err(MoveError::OutOfRange {
                selector: k,
                hand_size,
            });
        }
        let end = if k < 0 { End::Left } else { End::Right };
        Ok(Move::Place {
            index: position - 1,
            end,
        })
    }
}

#[cfg(test)]
mod test {
    use rstest::*;

    use super::*;

    #[rstest]
    #[case::zero("0", Selector(0))]
    #[case::negative("-3", Selector(-3))]
    #[case::positive("4", Selector(4))]
    #[case::explicit_plus("+2", Selector(2))]
    #[case::surrounding_whitespace("  -1 \n", Selector(-1))]
    fn parse(#[case] input: &str, #[case] expected: Selector) {
        assert_eq!(input.parse::<Selector>(), Ok(expected));
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank("   ")]
    #[case::letters("left")]
    #[case::trailing_garbage("3a")]
    #[case::fraction("1.5")]
    #[case::lone_sign("-")]
    fn parse_malformed(#[case] input: &str) {
        let err = input.parse::<Selector>().unwrap_err();
        assert!(err.is_malformed(), "{:?}", err);
    }

    #[rstest]
    #[case::skip(Selector(0), 5, Ok(Move::Skip))]
    #[case::first_left(Selector(-1), 5, Ok(Move::Place { index: 0, end: End::Left }))]
    #[case::last_right(Selector(5), 5, Ok(Move::Place { index: 4, end: End::Right }))]
    #[case::last_left(Selector(-5), 5, Ok(Move::Place { index: 4, end: End::Left }))]
    #[case::too_high(Selector(7), 5, Err(MoveError::OutOfRange { selector: 7, hand_size: 5 }))]
    #[case::too_low(Selector(-6), 5, Err(MoveError::OutOfRange { selector: -6, hand_size: 5 }))]
    #[case::skip_with_empty_hand(Selector(0), 0, Ok(Move::Skip))]
    #[case::empty_hand(Selector(1), 0, Err(MoveError::OutOfRange { selector: 1, hand_size: 0 }))]
    fn resolve(
        #[case] selector: Selector,
        #[case] hand_size: usize,
        #[case] expected: Result<Move, MoveError>,
    ) {
        assert_eq!(selector.resolve(hand_size), expected);
    }

    #[test]
    fn out_of_range_counts_as_malformed() {
        assert!(Selector(7).resolve(5).unwrap_err().is_malformed());
    }
}
