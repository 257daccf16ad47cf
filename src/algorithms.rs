// SPDX-License-Identifier: MIT
// Pure Rust DP cores for every sequence metric.
// Every core strips the common prefix/suffix first and then runs its
// recurrence over rolling rows. Only true Damerau-Levenshtein and the
// reconstruction variants hold a full table.

use std::hash::Hash;

use log::{debug, trace};
use rustc_hash::FxHashMap;

use crate::error::{MetricError, Result};
use crate::types::{CommonRun, EditTag, Editop, Editops, Trimmed};

#[inline]
fn value_eq<T: PartialEq>(a: &T, b: &T) -> bool {
    a == b
}

// ---------------------------------------------------------------------------
// Helper: common prefix/suffix lengths
// ---------------------------------------------------------------------------

#[inline]
pub fn common_prefix_by<T, F>(s1: &[T], s2: &[T], eq: F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    s1.iter().zip(s2.iter()).take_while(|&(a, b)| eq(a, b)).count()
}

#[inline]
pub fn common_suffix_by<T, F>(s1: &[T], s2: &[T], eq: F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    s1.iter()
        .rev()
        .zip(s2.iter().rev())
        .take_while(|&(a, b)| eq(a, b))
        .count()
}

pub fn trim_ends<'a, T: PartialEq>(s1: &'a [T], s2: &'a [T]) -> Trimmed<'a, T> {
    trim_ends_by(s1, s2, value_eq)
}

/// Strips the jointly equal prefix, then the jointly equal suffix of what is
/// left. Identical inputs are consumed by the prefix scan alone.
pub fn trim_ends_by<'a, T, F>(s1: &'a [T], s2: &'a [T], eq: F) -> Trimmed<'a, T>
where
    F: Fn(&T, &T) -> bool,
{
    let prefix = common_prefix_by(s1, s2, &eq);
    let s1 = &s1[prefix..];
    let s2 = &s2[prefix..];
    let suffix = common_suffix_by(s1, s2, &eq);
    Trimmed {
        source: &s1[..s1.len() - suffix],
        target: &s2[..s2.len() - suffix],
        prefix,
        suffix,
    }
}

// ===========================================================================
// LEVENSHTEIN
// ===========================================================================

/// Insertion, deletion and substitution costs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LevenshteinWeights {
    pub insert: usize,
    pub delete: usize,
    pub replace: usize,
}

impl Default for LevenshteinWeights {
    fn default() -> Self {
        LevenshteinWeights { insert: 1, delete: 1, replace: 1 }
    }
}

impl LevenshteinWeights {
    pub fn new(insert: usize, delete: usize, replace: usize) -> Self {
        LevenshteinWeights { insert, delete, replace }
    }

    #[inline]
    pub fn is_uniform(&self) -> bool {
        self.insert == 1 && self.delete == 1 && self.replace == 1
    }

    /// Largest possible weighted distance between sequences of these lengths.
    pub fn maximum(&self, len1: usize, len2: usize) -> usize {
        let mut max_v = len1 * self.delete + len2 * self.insert;
        if len1 >= len2 {
            max_v = max_v.min(len2 * self.replace + (len1 - len2) * self.delete);
        } else {
            max_v = max_v.min(len1 * self.replace + (len2 - len1) * self.insert);
        }
        max_v
    }
}

pub fn levenshtein<T: PartialEq>(s1: &[T], s2: &[T]) -> usize {
    levenshtein_by(s1, s2, value_eq)
}

pub fn levenshtein_by<T, F>(s1: &[T], s2: &[T], eq: F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    let t = trim_ends_by(s1, s2, &eq);
    // rows are sized to the shorter side
    if t.source.len() < t.target.len() {
        levenshtein_rows(t.target, t.source, |a: &T, b: &T| eq(b, a))
    } else {
        levenshtein_rows(t.source, t.target, &eq)
    }
}

/// Wagner-Fischer over two rows of `s2.len() + 1` cells.
fn levenshtein_rows<T, F>(s1: &[T], s2: &[T], eq: F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    if s1.is_empty() {
        return s2.len();
    }
    if s2.is_empty() {
        return s1.len();
    }
    let n = s2.len();
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr: Vec<usize> = vec![0; n + 1];
    for (i, a) in s1.iter().enumerate() {
        curr[0] = i + 1;
        for (j, b) in s2.iter().enumerate() {
            let cost = if eq(a, b) { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

pub fn levenshtein_weighted_by<T, F>(
    s1: &[T],
    s2: &[T],
    weights: LevenshteinWeights,
    eq: F,
) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    if weights.is_uniform() {
        return levenshtein_by(s1, s2, eq);
    }
    let t = trim_ends_by(s1, s2, &eq);
    levenshtein_weighted_rows(t.source, t.target, weights, &eq)
}

fn levenshtein_weighted_rows<T, F>(
    s1: &[T],
    s2: &[T],
    weights: LevenshteinWeights,
    eq: F,
) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    let LevenshteinWeights { insert, delete, replace } = weights;
    if s1.is_empty() {
        return s2.len() * insert;
    }
    if s2.is_empty() {
        return s1.len() * delete;
    }
    let n = s2.len();
    let mut prev: Vec<usize> = (0..=n).map(|j| j * insert).collect();
    let mut curr: Vec<usize> = vec![0; n + 1];
    for (i, a) in s1.iter().enumerate() {
        curr[0] = (i + 1) * delete;
        for (j, b) in s2.iter().enumerate() {
            let cost = if eq(a, b) { 0 } else { replace };
            curr[j + 1] = (curr[j] + insert)
                .min(prev[j + 1] + delete)
                .min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

pub fn levenshtein_editops<T: PartialEq>(s1: &[T], s2: &[T]) -> Editops {
    levenshtein_editops_by(s1, s2, value_eq)
}

/// Full-table Levenshtein with a backtrace. The script has exactly
/// `levenshtein(s1, s2)` operations; positions refer to the untrimmed inputs.
pub fn levenshtein_editops_by<T, F>(s1: &[T], s2: &[T], eq: F) -> Editops
where
    F: Fn(&T, &T) -> bool,
{
    let t = trim_ends_by(s1, s2, &eq);
    let pfx = t.prefix;
    let (a, b) = (t.source, t.target);
    let m = a.len();
    let n = b.len();

    if m == 0 {
        let ops = (0..n).map(|j| Editop::new(EditTag::Insert, pfx, pfx + j)).collect();
        return Editops::new(ops, s1.len(), s2.len());
    }
    if n == 0 {
        let ops = (0..m).map(|i| Editop::new(EditTag::Delete, pfx + i, pfx)).collect();
        return Editops::new(ops, s1.len(), s2.len());
    }

    trace!("levenshtein editops: {}x{} table", m + 1, n + 1);
    let stride = n + 1;
    let mut grid = vec![0usize; (m + 1) * stride];
    for (j, cell) in grid.iter_mut().take(stride).enumerate() {
        *cell = j;
    }
    for i in 1..=m {
        grid[i * stride] = i;
        for j in 1..=n {
            let cost = if eq(&a[i - 1], &b[j - 1]) { 0 } else { 1 };
            grid[i * stride + j] = (grid[(i - 1) * stride + j] + 1)
                .min(grid[i * stride + j - 1] + 1)
                .min(grid[(i - 1) * stride + j - 1] + cost);
        }
    }

    let mut ops = Vec::with_capacity(grid[m * stride + n]);
    let (mut i, mut j) = (m, n);
    while i > 0 || j > 0 {
        let here = grid[i * stride + j];
        if i > 0 && j > 0 {
            let diag = grid[(i - 1) * stride + j - 1];
            if here == diag && eq(&a[i - 1], &b[j - 1]) {
                i -= 1;
                j -= 1;
                continue;
            }
            if here == diag + 1 {
                ops.push(Editop::new(EditTag::Replace, pfx + i - 1, pfx + j - 1));
                i -= 1;
                j -= 1;
                continue;
            }
        }
        if i > 0 && here == grid[(i - 1) * stride + j] + 1 {
            ops.push(Editop::new(EditTag::Delete, pfx + i - 1, pfx + j));
            i -= 1;
        } else {
            ops.push(Editop::new(EditTag::Insert, pfx + i, pfx + j - 1));
            j -= 1;
        }
    }
    ops.reverse();
    Editops::new(ops, s1.len(), s2.len())
}

// ===========================================================================
// DAMERAU-LEVENSHTEIN (true, with transpositions)
// ===========================================================================

/// Last source row at which each element was seen.
trait LastOccurrence<'a, T> {
    fn last_row(&self, item: &T) -> usize;
    fn record(&mut self, item: &'a T, row: usize);
}

struct HashedOccurrences<'a, T>(FxHashMap<&'a T, usize>);

impl<'a, T: Hash + Eq> LastOccurrence<'a, T> for HashedOccurrences<'a, T> {
    #[inline]
    fn last_row(&self, item: &T) -> usize {
        self.0.get(item).copied().unwrap_or(0)
    }

    #[inline]
    fn record(&mut self, item: &'a T, row: usize) {
        self.0.insert(item, row);
    }
}

/// One representative per equivalence class, found by linear scan.
struct ScannedOccurrences<'a, T, F> {
    seen: Vec<(&'a T, usize)>,
    eq: F,
}

impl<'a, T, F> LastOccurrence<'a, T> for ScannedOccurrences<'a, T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn last_row(&self, item: &T) -> usize {
        self.seen
            .iter()
            .find(|slot| (self.eq)(slot.0, item))
            .map_or(0, |slot| slot.1)
    }

    fn record(&mut self, item: &'a T, row: usize) {
        let eq = &self.eq;
        match self.seen.iter_mut().find(|slot| eq(slot.0, item)) {
            Some(slot) => slot.1 = row,
            None => self.seen.push((item, row)),
        }
    }
}

pub fn damerau_levenshtein<T: Hash + Eq>(s1: &[T], s2: &[T]) -> usize {
    let t = trim_ends(s1, s2);
    let table: HashedOccurrences<'_, T> = HashedOccurrences(FxHashMap::default());
    damerau_levenshtein_table(t.source, t.target, value_eq, table)
}

/// True Damerau-Levenshtein under an arbitrary equivalence. Without a hash
/// the last-occurrence lookup scans the distinct classes seen so far.
pub fn damerau_levenshtein_by<T, F>(s1: &[T], s2: &[T], eq: F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    let t = trim_ends_by(s1, s2, &eq);
    let table: ScannedOccurrences<'_, T, &F> = ScannedOccurrences { seen: Vec::new(), eq: &eq };
    damerau_levenshtein_table(t.source, t.target, &eq, table)
}

fn damerau_levenshtein_table<'a, T, F, L>(s1: &'a [T], s2: &'a [T], eq: F, mut last: L) -> usize
where
    F: Fn(&T, &T) -> bool,
    L: LastOccurrence<'a, T>,
{
    let m = s1.len();
    let n = s2.len();
    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }
    trace!("damerau-levenshtein: {}x{} table", m + 2, n + 2);

    let max_dist = m + n;
    // flat (m+2) x (n+2) table, dp[i][j] = flat[i * stride + j]
    let stride = n + 2;
    let mut flat = vec![0usize; (m + 2) * stride];

    // sentinel borders
    flat[0] = max_dist;
    for i in 0..=m {
        flat[(i + 1) * stride] = max_dist;
        flat[(i + 1) * stride + 1] = i;
    }
    for j in 0..=n {
        flat[j + 1] = max_dist;
        flat[stride + j + 1] = j;
    }

    for i in 1..=m {
        let mut db = 0usize;
        for j in 1..=n {
            let i1 = last.last_row(&s2[j - 1]);
            let j1 = db;
            let cost = if eq(&s1[i - 1], &s2[j - 1]) {
                db = j;
                0
            } else {
                1
            };

            let sub = flat[i * stride + j] + cost;
            let del = flat[(i + 1) * stride + j] + 1;
            let ins = flat[i * stride + j + 1] + 1;
            let mut best = sub.min(del).min(ins);

            if i1 > 0 && j1 > 0 {
                // delete the gap, transpose, insert the gap
                let trans = flat[i1 * stride + j1] + (i - i1 - 1) + 1 + (j - j1 - 1);
                best = best.min(trans);
            }
            flat[(i + 1) * stride + j + 1] = best;
        }
        last.record(&s1[i - 1], i);
    }
    flat[(m + 1) * stride + n + 1]
}

// ===========================================================================
// OPTIMAL STRING ALIGNMENT (restricted edit distance)
// ===========================================================================

pub fn osa_distance<T: PartialEq>(s1: &[T], s2: &[T]) -> usize {
    osa_distance_by(s1, s2, value_eq)
}

pub fn osa_distance_by<T, F>(s1: &[T], s2: &[T], eq: F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    let t = trim_ends_by(s1, s2, &eq);
    if t.source.len() < t.target.len() {
        osa_rows(t.target, t.source, |a: &T, b: &T| eq(b, a))
    } else {
        osa_rows(t.source, t.target, &eq)
    }
}

/// Three rotating rows: the transposition term only looks two rows back.
fn osa_rows<T, F>(s1: &[T], s2: &[T], eq: F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    let m = s1.len();
    let n = s2.len();
    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev2 = vec![0usize; n + 1];
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if eq(&s1[i - 1], &s2[j - 1]) { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
            if i > 1 && j > 1 && eq(&s1[i - 1], &s2[j - 2]) && eq(&s1[i - 2], &s2[j - 1]) {
                curr[j] = curr[j].min(prev2[j - 2] + 1);
            }
        }
        std::mem::swap(&mut prev2, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

// ===========================================================================
// LONGEST COMMON SUBSEQUENCE
// ===========================================================================

pub fn lcs_length<T: PartialEq>(s1: &[T], s2: &[T]) -> usize {
    lcs_length_by(s1, s2, value_eq)
}

pub fn lcs_length_by<T, F>(s1: &[T], s2: &[T], eq: F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    let t = trim_ends_by(s1, s2, &eq);
    let core = if t.source.len() < t.target.len() {
        lcs_rows(t.target, t.source, |a: &T, b: &T| eq(b, a))
    } else {
        lcs_rows(t.source, t.target, &eq)
    };
    t.trimmed() + core
}

fn lcs_rows<T, F>(s1: &[T], s2: &[T], eq: F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    if s1.is_empty() || s2.is_empty() {
        return 0;
    }
    let n = s2.len();
    let mut prev = vec![0usize; n + 1];
    let mut curr = vec![0usize; n + 1];
    for a in s1 {
        for (j, b) in s2.iter().enumerate() {
            curr[j + 1] = if eq(a, b) {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

/// Full LCS table over `s1 x s2`, `grid[i * (n + 1) + j]` is the LCS length of
/// `s1[..i]` and `s2[..j]`.
fn lcs_grid<T, F>(s1: &[T], s2: &[T], eq: F) -> Vec<usize>
where
    F: Fn(&T, &T) -> bool,
{
    let m = s1.len();
    let n = s2.len();
    trace!("lcs: {}x{} table", m + 1, n + 1);
    let stride = n + 1;
    let mut grid = vec![0usize; (m + 1) * stride];
    for i in 1..=m {
        for j in 1..=n {
            grid[i * stride + j] = if eq(&s1[i - 1], &s2[j - 1]) {
                grid[(i - 1) * stride + j - 1] + 1
            } else {
                grid[(i - 1) * stride + j].max(grid[i * stride + j - 1])
            };
        }
    }
    grid
}

pub fn lcs_reconstruct<T: PartialEq + Clone>(s1: &[T], s2: &[T]) -> Vec<T> {
    lcs_reconstruct_by(s1, s2, value_eq)
}

/// One longest common subsequence. Elements are taken from `s1`.
pub fn lcs_reconstruct_by<T, F>(s1: &[T], s2: &[T], eq: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let t = trim_ends_by(s1, s2, &eq);
    let (a, b) = (t.source, t.target);
    let stride = b.len() + 1;
    let grid = lcs_grid(a, b, &eq);

    let mut middle = Vec::with_capacity(grid[a.len() * stride + b.len()]);
    let (mut i, mut j) = (a.len(), b.len());
    while i > 0 && j > 0 {
        if eq(&a[i - 1], &b[j - 1]) {
            middle.push(a[i - 1].clone());
            i -= 1;
            j -= 1;
        } else if grid[(i - 1) * stride + j] >= grid[i * stride + j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    middle.reverse();

    let mut lcs = Vec::with_capacity(t.trimmed() + middle.len());
    lcs.extend_from_slice(&s1[..t.prefix]);
    lcs.extend(middle);
    lcs.extend_from_slice(&s1[s1.len() - t.suffix..]);
    lcs
}

pub fn lcs_editops<T: PartialEq>(s1: &[T], s2: &[T]) -> Editops {
    lcs_editops_by(s1, s2, value_eq)
}

/// Insert/delete-only script keeping one longest common subsequence.
pub fn lcs_editops_by<T, F>(s1: &[T], s2: &[T], eq: F) -> Editops
where
    F: Fn(&T, &T) -> bool,
{
    let t = trim_ends_by(s1, s2, &eq);
    let pfx = t.prefix;
    let (a, b) = (t.source, t.target);
    let stride = b.len() + 1;
    let grid = lcs_grid(a, b, &eq);

    let mut ops = Vec::new();
    let (mut i, mut j) = (a.len(), b.len());
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && eq(&a[i - 1], &b[j - 1]) {
            i -= 1;
            j -= 1;
        } else if i > 0 && (j == 0 || grid[(i - 1) * stride + j] >= grid[i * stride + j - 1]) {
            ops.push(Editop::new(EditTag::Delete, pfx + i - 1, pfx + j));
            i -= 1;
        } else {
            ops.push(Editop::new(EditTag::Insert, pfx + i, pfx + j - 1));
            j -= 1;
        }
    }
    ops.reverse();
    Editops::new(ops, s1.len(), s2.len())
}

pub fn indel_distance<T: PartialEq>(s1: &[T], s2: &[T]) -> usize {
    indel_distance_by(s1, s2, value_eq)
}

/// Insertions plus deletions needed, `|s1| + |s2| - 2 * lcs`.
pub fn indel_distance_by<T, F>(s1: &[T], s2: &[T], eq: F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    s1.len() + s2.len() - 2 * lcs_length_by(s1, s2, eq)
}

// ===========================================================================
// LONGEST COMMON SUBSTRING
// ===========================================================================
// No end trimming here: a shared run may straddle the trimmed prefix or
// suffix, so stripping them would change the answer.

pub fn longest_common_substring_length<T: PartialEq>(s1: &[T], s2: &[T]) -> usize {
    longest_common_substring_length_by(s1, s2, value_eq)
}

pub fn longest_common_substring_length_by<T, F>(s1: &[T], s2: &[T], eq: F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    if s1.len() < s2.len() {
        substring_rows(s2, s1, |a: &T, b: &T| eq(b, a))
    } else {
        substring_rows(s1, s2, &eq)
    }
}

fn substring_rows<T, F>(s1: &[T], s2: &[T], eq: F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    if s1.is_empty() || s2.is_empty() {
        return 0;
    }
    let n = s2.len();
    let mut prev = vec![0usize; n + 1];
    let mut curr = vec![0usize; n + 1];
    let mut best = 0usize;
    for a in s1 {
        for (j, b) in s2.iter().enumerate() {
            curr[j + 1] = if eq(a, b) { prev[j] + 1 } else { 0 };
            best = best.max(curr[j + 1]);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    best
}

pub fn longest_common_substring<T: PartialEq + Clone>(s1: &[T], s2: &[T]) -> Option<CommonRun<T>> {
    longest_common_substring_by(s1, s2, value_eq)
}

/// The first longest run in row-major order over `s1`, or `None` when the
/// inputs share no element.
pub fn longest_common_substring_by<T, F>(s1: &[T], s2: &[T], eq: F) -> Option<CommonRun<T>>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let m = s1.len();
    let n = s2.len();
    if m == 0 || n == 0 {
        return None;
    }
    trace!("longest common substring: {}x{} table", m + 1, n + 1);

    let stride = n + 1;
    let mut grid = vec![0usize; (m + 1) * stride];
    let (mut best, mut best_i, mut best_j) = (0usize, 0usize, 0usize);
    for i in 1..=m {
        for j in 1..=n {
            if eq(&s1[i - 1], &s2[j - 1]) {
                let run = grid[(i - 1) * stride + j - 1] + 1;
                grid[i * stride + j] = run;
                if run > best {
                    best = run;
                    best_i = i;
                    best_j = j;
                }
            }
        }
    }
    if best == 0 {
        return None;
    }

    let (mut i, mut j) = (best_i, best_j);
    while grid[i * stride + j] != 0 {
        i -= 1;
        j -= 1;
    }
    Some(CommonRun {
        elements: s1[i..best_i].to_vec(),
        src_end: best_i,
        dest_end: best_j,
    })
}

// ===========================================================================
// HAMMING
// ===========================================================================

pub fn hamming<T: PartialEq>(s1: &[T], s2: &[T]) -> Result<usize> {
    hamming_by(s1, s2, value_eq)
}

pub fn hamming_by<T, F>(s1: &[T], s2: &[T], eq: F) -> Result<usize>
where
    F: Fn(&T, &T) -> bool,
{
    if s1.len() != s2.len() {
        debug!("hamming: rejecting lengths {} and {}", s1.len(), s2.len());
        return Err(MetricError::LengthMismatch { left: s1.len(), right: s2.len() });
    }
    Ok(mismatches(s1, s2, eq))
}

/// Hamming distance where the surplus of the longer input counts as mismatches.
pub fn hamming_padded_by<T, F>(s1: &[T], s2: &[T], eq: F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    mismatches(s1, s2, eq) + s1.len().abs_diff(s2.len())
}

#[inline]
fn mismatches<T, F>(s1: &[T], s2: &[T], eq: F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    s1.iter().zip(s2.iter()).filter(|&(a, b)| !eq(a, b)).count()
}
