//! Grid dimensions and wrapping arithmetic.
//!
//! The board is a fixed 9×9 grid divided into nine 3×3 color blocks. Every
//! coordinate computation wraps modulo [`SIZE`], so a shift of any signed
//! magnitude lands back in the `0..9` range.

/// Number of rows and columns on the board.
pub const SIZE: u8 = 9;

/// Side length of one color block.
pub const BLOCK: u8 = 3;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = (SIZE as usize) * (SIZE as usize);

/// Wraps a signed coordinate onto the torus.
///
/// The result is always in `0..9`, for any input, including large negative
/// values.
///
/// # Examples
///
/// ```
/// use torlock_core::torus::wrap;
///
/// assert_eq!(wrap(8 + 5), 4);
/// assert_eq!(wrap(0 - 1), 8);
/// assert_eq!(wrap(-100), 8);
/// assert_eq!(wrap(4), 4);
/// ```
#[must_use]
#[inline]
#[expect(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn wrap(coord: i16) -> u8 {
    coord.rem_euclid(i16::from(SIZE)) as u8
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn wrap_stays_in_range() {
        for c in -30..30 {
            assert!(wrap(c) < SIZE);
        }
    }

    #[test]
    fn wrap_is_identity_on_canonical_coords() {
        for c in 0..9 {
            assert_eq!(wrap(c), u8::try_from(c).unwrap());
        }
    }

    proptest! {
        #[test]
        fn wrap_matches_double_mod(c in i16::MIN..i16::MAX) {
            let expected = u8::try_from((i32::from(c) % 9 + 9) % 9).unwrap();
            prop_assert_eq!(wrap(c), expected);
        }

        #[test]
        fn wrap_is_periodic(c in -1000_i16..1000) {
            prop_assert_eq!(wrap(c), wrap(c + 9));
        }
    }
}
