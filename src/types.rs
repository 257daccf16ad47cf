// SPDX-License-Identifier: MIT
// Value types shared by the DP cores and the metric layer:
// trimmed views, edit scripts, matching blocks and common runs.

use std::fmt;

// ---------------------------------------------------------------------------
// Trimmed
// ---------------------------------------------------------------------------

/// Two sequences with their jointly equal prefix and suffix removed.
///
/// `prefix` and `suffix` are shared by both sides because trimming only ever
/// strips ends on which the two inputs agree, so
/// `source.len() == full_source.len() - prefix - suffix` (same for target).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trimmed<'a, T> {
    pub source: &'a [T],
    pub target: &'a [T],
    pub prefix: usize,
    pub suffix: usize,
}

impl<'a, T> Trimmed<'a, T> {
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    #[inline]
    pub fn target_len(&self) -> usize {
        self.target.len()
    }

    /// True when at least one side has nothing left to align.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty() || self.target.is_empty()
    }

    /// Number of elements removed from each input.
    #[inline]
    pub fn trimmed(&self) -> usize {
        self.prefix + self.suffix
    }
}

// ---------------------------------------------------------------------------
// Editop / Editops
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditTag {
    Insert,
    Delete,
    Replace,
}

impl fmt::Display for EditTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            EditTag::Insert => "insert",
            EditTag::Delete => "delete",
            EditTag::Replace => "replace",
        };
        f.write_str(tag)
    }
}

/// A single edit. `Delete` removes `source[src_pos]`, `Insert` places
/// `target[dest_pos]` before `source[src_pos]`, `Replace` swaps one for the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Editop {
    pub tag: EditTag,
    pub src_pos: usize,
    pub dest_pos: usize,
}

impl Editop {
    pub fn new(tag: EditTag, src_pos: usize, dest_pos: usize) -> Self {
        Editop { tag, src_pos, dest_pos }
    }
}

impl fmt::Display for Editop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Editop(tag='{}', src_pos={}, dest_pos={})",
            self.tag, self.src_pos, self.dest_pos
        )
    }
}

/// An edit script transforming a source of `src_len` elements into a target
/// of `dest_len` elements. Operations are ordered by position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Editops {
    pub ops: Vec<Editop>,
    pub src_len: usize,
    pub dest_len: usize,
}

impl Editops {
    pub fn new(ops: Vec<Editop>, src_len: usize, dest_len: usize) -> Self {
        Editops { ops, src_len, dest_len }
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Editop> {
        self.ops.iter()
    }

    /// Count of operations carrying `tag`.
    pub fn count(&self, tag: EditTag) -> usize {
        self.ops.iter().filter(|op| op.tag == tag).count()
    }

    /// The script turning the target back into the source.
    pub fn inverse(&self) -> Editops {
        let ops = self
            .ops
            .iter()
            .map(|op| {
                let tag = match op.tag {
                    EditTag::Insert => EditTag::Delete,
                    EditTag::Delete => EditTag::Insert,
                    EditTag::Replace => EditTag::Replace,
                };
                Editop::new(tag, op.dest_pos, op.src_pos)
            })
            .collect();
        Editops::new(ops, self.dest_len, self.src_len)
    }

    /// Equal runs left untouched by the script, closed by the
    /// `(src_len, dest_len, 0)` sentinel block.
    pub fn as_matching_blocks(&self) -> Vec<MatchingBlock> {
        let mut blocks = Vec::new();
        let mut src_pos = 0usize;
        let mut dest_pos = 0usize;

        for op in &self.ops {
            if op.src_pos > src_pos && op.dest_pos > dest_pos {
                let size = (op.src_pos - src_pos).min(op.dest_pos - dest_pos);
                blocks.push(MatchingBlock::new(src_pos, dest_pos, size));
            }
            match op.tag {
                EditTag::Replace => {
                    src_pos = op.src_pos + 1;
                    dest_pos = op.dest_pos + 1;
                }
                EditTag::Delete => {
                    src_pos = op.src_pos + 1;
                    dest_pos = op.dest_pos;
                }
                EditTag::Insert => {
                    src_pos = op.src_pos;
                    dest_pos = op.dest_pos + 1;
                }
            }
        }
        if src_pos < self.src_len && dest_pos < self.dest_len {
            let size = (self.src_len - src_pos).min(self.dest_len - dest_pos);
            blocks.push(MatchingBlock::new(src_pos, dest_pos, size));
        }
        blocks.push(MatchingBlock::new(self.src_len, self.dest_len, 0));
        blocks
    }
}

impl<'a> IntoIterator for &'a Editops {
    type Item = &'a Editop;
    type IntoIter = std::slice::Iter<'a, Editop>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

// ---------------------------------------------------------------------------
// MatchingBlock
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MatchingBlock {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

impl MatchingBlock {
    pub fn new(a: usize, b: usize, size: usize) -> Self {
        MatchingBlock { a, b, size }
    }
}

impl fmt::Display for MatchingBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MatchingBlock(a={}, b={}, size={})", self.a, self.b, self.size)
    }
}

// ---------------------------------------------------------------------------
// CommonRun
// ---------------------------------------------------------------------------

/// The longest contiguous run shared by two sequences.
///
/// `src_end` and `dest_end` are exclusive end offsets into the original,
/// untrimmed inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommonRun<T> {
    pub elements: Vec<T>,
    pub src_end: usize,
    pub dest_end: usize,
}

impl<T> CommonRun<T> {
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn src_start(&self) -> usize {
        self.src_end - self.elements.len()
    }

    pub fn dest_start(&self) -> usize {
        self.dest_end - self.elements.len()
    }

    pub fn as_matching_block(&self) -> MatchingBlock {
        MatchingBlock::new(self.src_start(), self.dest_start(), self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_lengths() {
        let a = [1, 2, 3];
        let b = [4];
        let t = Trimmed { source: &a[..], target: &b[..], prefix: 2, suffix: 1 };
        assert_eq!(t.source_len(), 3);
        assert_eq!(t.target_len(), 1);
        assert_eq!(t.trimmed(), 3);
        assert!(!t.is_empty());
    }

    #[test]
    fn inverse_swaps_inserts_and_deletes() {
        let ops = Editops::new(
            vec![
                Editop::new(EditTag::Delete, 0, 0),
                Editop::new(EditTag::Insert, 3, 2),
                Editop::new(EditTag::Replace, 4, 4),
            ],
            5,
            5,
        );
        let inv = ops.inverse();
        assert_eq!(inv.ops[0], Editop::new(EditTag::Insert, 0, 0));
        assert_eq!(inv.ops[1], Editop::new(EditTag::Delete, 2, 3));
        assert_eq!(inv.ops[2], Editop::new(EditTag::Replace, 4, 4));
        assert_eq!(inv.inverse(), ops);
    }

    #[test]
    fn matching_blocks_between_edits() {
        // "abcd" -> "axcd": one replace at 1
        let ops = Editops::new(vec![Editop::new(EditTag::Replace, 1, 1)], 4, 4);
        assert_eq!(
            ops.as_matching_blocks(),
            vec![
                MatchingBlock::new(0, 0, 1),
                MatchingBlock::new(2, 2, 2),
                MatchingBlock::new(4, 4, 0),
            ]
        );
    }

    #[test]
    fn common_run_offsets() {
        let run = CommonRun { elements: vec!['c', 'd'], src_end: 4, dest_end: 3 };
        assert_eq!(run.src_start(), 2);
        assert_eq!(run.dest_start(), 1);
        assert_eq!(run.as_matching_block(), MatchingBlock::new(2, 1, 2));
        assert_eq!(EditTag::Delete.to_string(), "delete");
    }
}
