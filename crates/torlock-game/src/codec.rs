//! Compact base-36 codecs for puzzle configurations.
//!
//! Three encodings, all over the lowercase base-36 alphabet `0-9a-z` and
//! all short enough for URL query parameters:
//!
//! - **Flag subsets**: a subset of the 81 cell indices, packed into one
//!   big bitfield integer and written in base 36. One such string exists
//!   per piece flag (fixed, rotating, and the four glue directions).
//! - **Line groups**: each group of line indices is a 9-bit mask written
//!   as exactly two zero-padded characters; groups are sorted and
//!   concatenated with no separator.
//! - **Whole pieces**: every piece carrying at least one flag becomes a
//!   fixed-width 3-character record: two characters of cell index plus
//!   one character holding a 5-bit flag nibble.
//!
//! Decoding is atomic: any malformed digit, wrong length, or out-of-range
//! value fails the whole decode and nothing is applied.

use torlock_core::{Bandages, LineSet, Piece, PieceMode, Position};

/// The flag nibble bit marking a fixed piece; the low four bits are the
/// glue flags in [`Bandages`] order.
const FIXED_BIT: u8 = 1 << 4;

/// Reasons a configuration string fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DecodeError {
    /// A character outside `0-9a-z`.
    #[display("not a base-36 digit: {_0:?}")]
    InvalidDigit(#[error(not(source))] char),
    /// Input whose length is not a multiple of the record width.
    #[display("input length {len} is not a multiple of {record}")]
    BadLength {
        /// Actual input length in characters.
        len: usize,
        /// Required record width.
        record: usize,
    },
    /// A subset bitfield with bits beyond the 81 valid cells.
    #[display("subset bitfield exceeds 81 bits")]
    Overflow,
    /// A cell index outside `0..81`.
    #[display("invalid cell index: {_0}")]
    IndexOutOfRange(#[error(not(source))] u16),
    /// A flag nibble outside `0..32`.
    #[display("invalid piece flags: {_0}")]
    InvalidFlags(#[error(not(source))] u8),
    /// A line-group mask with bits beyond the 9 valid lines.
    #[display("invalid line-group mask: {_0}")]
    InvalidGroupMask(#[error(not(source))] u16),
    /// The same cell mentioned by two piece records.
    #[display("duplicate piece record for cell {_0}")]
    DuplicatePiece(#[error(not(source))] u8),
}

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn digit_value(c: char) -> Result<u8, DecodeError> {
    match c {
        '0'..='9' => Ok(c as u8 - b'0'),
        'a'..='z' => Ok(c as u8 - b'a' + 10),
        _ => Err(DecodeError::InvalidDigit(c)),
    }
}

/// Encodes a subset of the 81 cell indices as one base-36 bitfield.
///
/// Bit `i` of the bitfield is set when cell `i` is a member. The empty
/// subset encodes as the empty string.
///
/// # Examples
///
/// ```
/// use torlock_game::codec::{decode_subset, encode_subset};
///
/// assert_eq!(encode_subset([]), "");
/// assert_eq!(encode_subset([0]), "1");
/// assert_eq!(encode_subset([0, 1, 2]), "7");
/// assert_eq!(decode_subset(&encode_subset([5, 17, 80])).unwrap(), vec![5, 17, 80]);
/// ```
///
/// # Panics
///
/// Panics if an index is 81 or greater.
#[must_use]
pub fn encode_subset<I: IntoIterator<Item = u8>>(indices: I) -> String {
    let mut bitfield = 0_u128;
    for index in indices {
        assert!(index < 81, "cell index out of range: {index}");
        bitfield |= 1 << index;
    }
    if bitfield == 0 {
        return String::new();
    }

    let mut digits = Vec::new();
    while bitfield != 0 {
        #[expect(clippy::cast_possible_truncation)]
        digits.push(DIGITS[(bitfield % 36) as usize] as char);
        bitfield /= 36;
    }
    digits.iter().rev().collect()
}

/// Decodes a flag-subset string back into sorted cell indices.
///
/// The empty string decodes to the empty subset.
///
/// # Errors
///
/// Returns an error for non-base-36 characters or a bitfield with bits
/// beyond the 81 valid cells.
pub fn decode_subset(s: &str) -> Result<Vec<u8>, DecodeError> {
    let mut bitfield = 0_u128;
    for c in s.chars() {
        let digit = digit_value(c)?;
        bitfield = bitfield
            .checked_mul(36)
            .and_then(|b| b.checked_add(u128::from(digit)))
            .ok_or(DecodeError::Overflow)?;
    }
    if bitfield >> 81 != 0 {
        return Err(DecodeError::Overflow);
    }

    Ok((0..81).filter(|&i| bitfield & (1 << i) != 0).collect())
}

/// Encodes line groups as fixed-width 2-character masks.
///
/// Each group's 9-bit mask is written as two zero-padded base-36
/// characters; groups are sorted by mask for a canonical form.
///
/// # Examples
///
/// ```
/// use torlock_core::LineSet;
/// use torlock_game::codec::encode_groups;
///
/// let groups = [LineSet::from_iter([0, 1]), LineSet::from_iter([8])];
/// // {0,1} has mask 3, {8} has mask 256 = 7*36 + 4.
/// assert_eq!(encode_groups(&groups), "0374");
/// ```
#[must_use]
pub fn encode_groups(groups: &[LineSet]) -> String {
    let mut masks: Vec<u16> = groups.iter().map(|group| group.bits()).collect();
    masks.sort_unstable();

    let mut out = String::with_capacity(masks.len() * 2);
    for mask in masks {
        out.push(DIGITS[usize::from(mask / 36)] as char);
        out.push(DIGITS[usize::from(mask % 36)] as char);
    }
    out
}

/// Decodes a grouping string back into line sets.
///
/// # Errors
///
/// Returns an error for odd-length input, non-base-36 characters, or a
/// mask with bits beyond the 9 valid lines.
pub fn decode_groups(s: &str) -> Result<Vec<LineSet>, DecodeError> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() % 2 != 0 {
        return Err(DecodeError::BadLength {
            len: chars.len(),
            record: 2,
        });
    }

    chars
        .chunks_exact(2)
        .map(|pair| {
            let mask = u16::from(digit_value(pair[0])?) * 36 + u16::from(digit_value(pair[1])?);
            LineSet::from_bits(mask).ok_or(DecodeError::InvalidGroupMask(mask))
        })
        .collect()
}

/// Encodes the flagged pieces of a board as fixed-width 3-character
/// records.
///
/// Only pieces that are fixed or glued appear; each record is the piece's
/// zero-padded 2-character origin cell index followed by one character
/// holding `fixed<<4 | up<<3 | right<<2 | down<<1 | left`. Records are
/// sorted by cell index.
///
/// # Examples
///
/// ```
/// use torlock_core::{Piece, Position, Side};
/// use torlock_game::codec::encode_pieces;
///
/// // A piece at (6, 5) glued to the right: cell 51 is "1f", flags 4.
/// let mut piece = Piece::new(Position::new(6, 5));
/// piece.toggle_bandage(Side::Right);
/// assert_eq!(encode_pieces([&piece]), "1f4");
/// ```
#[must_use]
pub fn encode_pieces<'a, I: IntoIterator<Item = &'a Piece>>(pieces: I) -> String {
    let mut records: Vec<(u8, u8)> = pieces
        .into_iter()
        .filter(|piece| piece.mode().is_fixed() || piece.is_bandaged())
        .map(|piece| {
            let flags = u8::from(piece.mode().is_fixed()) << 4 | piece.bandages().bits();
            (piece.origin_index(), flags)
        })
        .collect();
    records.sort_unstable();

    let mut out = String::with_capacity(records.len() * 3);
    for (index, flags) in records {
        out.push(DIGITS[usize::from(index / 36)] as char);
        out.push(DIGITS[usize::from(index % 36)] as char);
        out.push(DIGITS[usize::from(flags)] as char);
    }
    out
}

/// Decodes a whole-piece configuration string into a full 81-piece board
/// layout, every piece at its origin.
///
/// Cells not mentioned by any record come back as plain free pieces with
/// their position-derived color.
///
/// # Errors
///
/// Returns an error for input whose length is not a multiple of 3,
/// non-base-36 characters, cell indices outside `0..81`, flag values
/// outside `0..32`, or two records naming the same cell.
pub fn decode_pieces(s: &str) -> Result<Vec<Piece>, DecodeError> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() % 3 != 0 {
        return Err(DecodeError::BadLength {
            len: chars.len(),
            record: 3,
        });
    }

    let mut cells: [Option<Piece>; 81] = [const { None }; 81];
    for record in chars.chunks_exact(3) {
        let index = u16::from(digit_value(record[0])?) * 36 + u16::from(digit_value(record[1])?);
        if index >= 81 {
            return Err(DecodeError::IndexOutOfRange(index));
        }
        let flags = digit_value(record[2])?;
        if flags >= 32 {
            return Err(DecodeError::InvalidFlags(flags));
        }

        #[expect(clippy::cast_possible_truncation)]
        let index = index as u8;
        let mut piece = Piece::new(Position::from_index(index));
        if flags & FIXED_BIT != 0 {
            piece.set_mode(PieceMode::Fixed);
        }
        piece.set_bandages(Bandages::from_bits_truncate(flags & !FIXED_BIT));

        if cells[usize::from(index)].replace(piece).is_some() {
            return Err(DecodeError::DuplicatePiece(index));
        }
    }

    Ok(cells
        .into_iter()
        .enumerate()
        .map(|(index, cell)| {
            #[expect(clippy::cast_possible_truncation)]
            let index = index as u8;
            cell.unwrap_or_else(|| Piece::new(Position::from_index(index)))
        })
        .collect())
}
