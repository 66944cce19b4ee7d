//! User-defined groups of lines that move together.

use torlock_core::LineSet;

/// The line groups of one axis.
///
/// Groups are disjoint: a line belongs to at most one group. Merging two
/// already-grouped lines fuses their groups. Groups contribute to move
/// resolution through [`close`](Self::close), which pulls every grouped
/// companion of a line into the working set.
///
/// # Examples
///
/// ```
/// use torlock_core::LineSet;
/// use torlock_game::LineGrouping;
///
/// let mut grouping = LineGrouping::new();
/// grouping.merge(2, 5);
/// grouping.merge(5, 7);
///
/// let mut lines = LineSet::single(2);
/// grouping.close(&mut lines);
/// assert_eq!(lines, LineSet::from_iter([2, 5, 7]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineGrouping {
    groups: Vec<LineSet>,
}

impl LineGrouping {
    /// Creates an empty grouping.
    #[must_use]
    pub const fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// The current groups.
    #[must_use]
    pub fn groups(&self) -> &[LineSet] {
        &self.groups
    }

    /// Whether no lines are grouped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The index of the group containing `line`, if any.
    #[must_use]
    pub fn group_index(&self, line: u8) -> Option<usize> {
        self.groups.iter().position(|group| group.contains(line))
    }

    /// Joins `a` and `b` into one group, fusing their existing groups if
    /// both are already grouped. Idempotent when they already share one.
    pub fn merge(&mut self, a: u8, b: u8) {
        match (self.group_index(a), self.group_index(b)) {
            (None, None) => self.groups.push(LineSet::from_iter([a, b])),
            (Some(ia), None) => self.groups[ia].insert(b),
            (None, Some(ib)) => self.groups[ib].insert(a),
            (Some(ia), Some(ib)) if ia != ib => {
                let absorbed = self.groups.remove(ib);
                let ia = if ia > ib { ia - 1 } else { ia };
                self.groups[ia].extend_with(absorbed);
            }
            (Some(_), Some(_)) => {}
        }
    }

    /// Adds to `lines` every line that shares a group with a line already
    /// in `lines`. Pure with respect to the grouping itself.
    pub fn close(&self, lines: &mut LineSet) {
        for group in &self.groups {
            if group.intersects(*lines) {
                lines.extend_with(*group);
            }
        }
    }

    /// Deletes the group containing `line`, if any.
    pub fn remove_group(&mut self, line: u8) {
        self.groups.retain(|group| !group.contains(line));
    }

    /// Replaces all groups wholesale, as when loading a configuration.
    pub fn set_groups(&mut self, groups: Vec<LineSet>) {
        self.groups = groups;
    }

    /// Removes every group.
    pub fn reset(&mut self) {
        self.groups.clear();
    }
}
