//! A cyclic shift of one line, and its text notation.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::{Axis, torus};

/// A candidate move: shift `line` on `axis` by `delta` cells.
///
/// The delta is signed and wraps on execution, so `-2` and `+7` relocate
/// pieces identically; they are still distinct moves with distinct
/// notations and inverses.
///
/// # Notation
///
/// A move prints as `{line+1}{R|C}{|delta|}` with a trailing apostrophe
/// for negative deltas: `"3R4"` shifts row 3 right by 4 and `"7C2'"` shifts
/// column 7 up by 2. Only deltas with magnitude 1–9 have a notation; a
/// zero-delta move prints as the empty string and is never stored.
///
/// ```
/// use torlock_core::{Axis, Move};
///
/// let mv = Move::new(Axis::Column, 6, -2);
/// assert_eq!(mv.to_string(), "7C2'");
/// assert_eq!("7C2'".parse::<Move>().unwrap(), mv);
/// assert!("3X4".parse::<Move>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    axis: Axis,
    line: u8,
    delta: i8,
}

impl Move {
    /// Creates a move.
    ///
    /// # Panics
    ///
    /// Panics if `line` is 9 or greater.
    #[must_use]
    pub const fn new(axis: Axis, line: u8, delta: i8) -> Self {
        assert!(line < torus::SIZE);
        Self { axis, line, delta }
    }

    /// The axis the move operates on.
    #[must_use]
    pub const fn axis(self) -> Axis {
        self.axis
    }

    /// The grabbed line's index, in `0..9`.
    #[must_use]
    pub const fn line(self) -> u8 {
        self.line
    }

    /// The signed shift amount.
    #[must_use]
    pub const fn delta(self) -> i8 {
        self.delta
    }

    /// Whether executing this move would change anything.
    #[must_use]
    pub const fn is_effective(self) -> bool {
        self.delta != 0
    }

    /// The move that exactly reverses this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self {
            axis: self.axis,
            line: self.line,
            delta: -self.delta,
        }
    }

    /// Whether this move and `other` cancel each other: same axis, same
    /// line, and deltas summing to zero on the torus.
    ///
    /// ```
    /// use torlock_core::{Axis, Move};
    ///
    /// let mv = Move::new(Axis::Row, 2, 4);
    /// assert!(mv.cancels(mv.inverse()));
    /// // +4 and +5 wrap to a full turn, which is also a cancellation.
    /// assert!(mv.cancels(Move::new(Axis::Row, 2, 5)));
    /// assert!(!mv.cancels(Move::new(Axis::Row, 3, -4)));
    /// ```
    #[must_use]
    pub fn cancels(self, other: Self) -> bool {
        self.axis == other.axis
            && self.line == other.line
            && torus::wrap(i16::from(self.delta) + i16::from(other.delta)) == 0
    }

    /// The human-readable name of the grabbed line, e.g. `"Row 3"`.
    #[must_use]
    pub fn line_name(self) -> String {
        self.axis.line_label(self.line)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.delta == 0 {
            return Ok(());
        }
        write!(
            f,
            "{}{}{}",
            self.line + 1,
            self.axis.letter(),
            self.delta.unsigned_abs()
        )?;
        if self.delta < 0 {
            f.write_str("'")?;
        }
        Ok(())
    }
}

/// A string that does not follow the move notation grammar
/// `^[1-9][RC][1-9]'?$`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid move notation {text:?}")]
pub struct NotationError {
    /// The rejected input.
    pub text: String,
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || NotationError { text: s.to_owned() };

        let (body, negative) = match s.as_bytes() {
            [body @ .., b'\''] => (body, true),
            body => (body, false),
        };
        let &[line, axis, magnitude] = body else {
            return Err(err());
        };
        if !line.is_ascii_digit() || line == b'0' || !magnitude.is_ascii_digit() || magnitude == b'0'
        {
            return Err(err());
        }
        let axis = match axis {
            b'R' => Axis::Row,
            b'C' => Axis::Column,
            _ => return Err(err()),
        };

        let line = line - b'1';
        #[expect(clippy::cast_possible_wrap)]
        let mut delta = (magnitude - b'0') as i8;
        if negative {
            delta = -delta;
        }
        Ok(Self::new(axis, line, delta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_row_move() {
        let mv: Move = "3R4".parse().unwrap();
        assert_eq!(mv, Move::new(Axis::Row, 2, 4));
    }

    #[test]
    fn parses_negative_column_move() {
        let mv: Move = "7C2'".parse().unwrap();
        assert_eq!(mv, Move::new(Axis::Column, 6, -2));
    }

    #[test]
    fn rejects_bad_notation() {
        for text in ["", "0R1", "10R1", "3X4", "3R0", "3R44", "3r4", "3R4''"] {
            assert!(text.parse::<Move>().is_err(), "accepted {text:?}");
        }
    }

    #[test]
    fn notation_round_trips() {
        for axis in Axis::ALL {
            for line in 0..9 {
                for delta in (-9..=9).filter(|&d| d != 0) {
                    let mv = Move::new(axis, line, delta);
                    let parsed: Move = mv.to_string().parse().unwrap();
                    assert_eq!(parsed, mv);
                }
            }
        }
    }

    #[test]
    fn zero_delta_has_no_notation() {
        assert_eq!(Move::new(Axis::Row, 0, 0).to_string(), "");
        assert!(!Move::new(Axis::Row, 0, 0).is_effective());
    }

    #[test]
    fn inverse_negates_delta() {
        let mv = Move::new(Axis::Column, 4, 3);
        assert_eq!(mv.inverse(), Move::new(Axis::Column, 4, -3));
        assert_eq!(mv.inverse().inverse(), mv);
    }

    #[test]
    fn cancellation_wraps_mod_nine() {
        let mv = Move::new(Axis::Row, 1, 8);
        assert!(mv.cancels(Move::new(Axis::Row, 1, 1)));
        assert!(mv.cancels(Move::new(Axis::Row, 1, -8)));
        assert!(!mv.cancels(Move::new(Axis::Column, 1, 1)));
        assert!(!mv.cancels(Move::new(Axis::Row, 1, 2)));
    }

    #[test]
    fn line_names_are_one_based() {
        assert_eq!(Move::new(Axis::Row, 2, 1).line_name(), "Row 3");
        assert_eq!(Move::new(Axis::Column, 8, 1).line_name(), "Column 9");
    }
}
