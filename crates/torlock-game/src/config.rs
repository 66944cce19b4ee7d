//! Shareable puzzle configurations and named challenges.

use serde::{Deserialize, Serialize};

/// A puzzle configuration as a record of codec strings.
///
/// Each field is independently decodable; an absent or empty field means
/// "no pieces carry this flag" or "no groups on this axis". The record is
/// what gets embedded in URLs and stored alongside progress. It captures
/// flags and groupings, never positions or history.
///
/// Equality is field-by-field over the canonical codec strings, which is
/// what challenge matching relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Flag-subset string of fixed pieces.
    #[serde(default)]
    pub fixed: String,
    /// Flag-subset string of rotating pieces.
    #[serde(default)]
    pub rotating: String,
    /// Flag-subset string of pieces glued upward.
    #[serde(default)]
    pub up: String,
    /// Flag-subset string of pieces glued to the right.
    #[serde(default)]
    pub right: String,
    /// Flag-subset string of pieces glued downward.
    #[serde(default)]
    pub down: String,
    /// Flag-subset string of pieces glued to the left.
    #[serde(default)]
    pub left: String,
    /// Grouping string for rows.
    #[serde(default)]
    pub rows: String,
    /// Grouping string for columns.
    #[serde(default)]
    pub cols: String,
}

impl GameConfig {
    /// Whether no field carries anything, as on a plain unedited board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let Self {
            fixed,
            rotating,
            up,
            right,
            down,
            left,
            rows,
            cols,
        } = self;
        [fixed, rotating, up, right, down, left, rows, cols]
            .iter()
            .all(|field| field.is_empty())
    }
}

/// A named puzzle from a catalog.
///
/// The catalog itself is supplied by the embedding application; the
/// engine only loads a challenge's configuration and recognizes when its
/// current configuration matches one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    /// Display name.
    pub name: String,
    /// Relative difficulty, higher is harder.
    pub difficulty: u8,
    /// The puzzle configuration.
    pub config: GameConfig,
}
