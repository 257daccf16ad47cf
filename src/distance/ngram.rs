// SPDX-License-Identifier: MIT
// Set-based coefficients: Jaccard, overlap and Sorensen-Dice over multisets
// of elements or of n-grams.

use std::hash::Hash;

use rustc_hash::FxHashMap;

fn counts<K: Hash + Eq>(items: impl IntoIterator<Item = K>) -> FxHashMap<K, usize> {
    let mut counts = FxHashMap::default();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

fn ngrams<T: Hash + Eq>(seq: &[T], n: usize) -> FxHashMap<&[T], usize> {
    if n == 0 || seq.len() < n {
        return FxHashMap::default();
    }
    counts(seq.windows(n))
}

/// Sizes of two multisets and of their intersection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Overlap {
    pub left: usize,
    pub right: usize,
    pub intersection: usize,
}

impl Overlap {
    fn between<K: Hash + Eq>(c1: &FxHashMap<K, usize>, c2: &FxHashMap<K, usize>) -> Self {
        let intersection = c1
            .iter()
            .filter_map(|(k, v1)| c2.get(k).map(|v2| (*v1).min(*v2)))
            .sum();
        Overlap {
            left: c1.values().sum(),
            right: c2.values().sum(),
            intersection,
        }
    }

    pub fn of<T: Hash + Eq>(s1: &[T], s2: &[T]) -> Self {
        Overlap::between(&counts(s1), &counts(s2))
    }

    pub fn of_ngrams<T: Hash + Eq>(s1: &[T], s2: &[T], n: usize) -> Self {
        Overlap::between(&ngrams(s1, n), &ngrams(s2, n))
    }

    pub fn union(&self) -> usize {
        self.left + self.right - self.intersection
    }

    pub fn jaccard(&self) -> f64 {
        let union = self.union();
        if union == 0 {
            1.0
        } else {
            self.intersection as f64 / union as f64
        }
    }

    pub fn sorensen_dice(&self) -> f64 {
        let total = self.left + self.right;
        if total == 0 {
            1.0
        } else {
            2.0 * self.intersection as f64 / total as f64
        }
    }

    pub fn overlap_coefficient(&self) -> f64 {
        if self.left == 0 && self.right == 0 {
            return 1.0;
        }
        let smaller = self.left.min(self.right);
        if smaller == 0 {
            0.0
        } else {
            self.intersection as f64 / smaller as f64
        }
    }
}

pub fn jaccard<T: Hash + Eq>(s1: &[T], s2: &[T]) -> f64 {
    Overlap::of(s1, s2).jaccard()
}

pub fn sorensen_dice<T: Hash + Eq>(s1: &[T], s2: &[T]) -> f64 {
    Overlap::of(s1, s2).sorensen_dice()
}

pub fn overlap<T: Hash + Eq>(s1: &[T], s2: &[T]) -> f64 {
    Overlap::of(s1, s2).overlap_coefficient()
}

pub fn jaccard_ngram<T: Hash + Eq>(s1: &[T], s2: &[T], n: usize) -> f64 {
    if s1.is_empty() && s2.is_empty() {
        return 1.0;
    }
    if n == 0 || s1.len() < n || s2.len() < n {
        return 0.0;
    }
    Overlap::of_ngrams(s1, s2, n).jaccard()
}

pub fn sorensen_dice_ngram<T: Hash + Eq>(s1: &[T], s2: &[T], n: usize) -> f64 {
    if s1.is_empty() && s2.is_empty() {
        return 1.0;
    }
    if n == 0 || s1.len() < n || s2.len() < n {
        return 0.0;
    }
    Overlap::of_ngrams(s1, s2, n).sorensen_dice()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(s: &str) -> &[u8] {
        s.as_bytes()
    }

    #[test]
    fn multiset_overlap() {
        let o = Overlap::of(b("aabc"), b("abdd"));
        assert_eq!(o, Overlap { left: 4, right: 4, intersection: 2 });
        assert_eq!(o.union(), 6);
        assert_eq!(o.jaccard(), 2.0 / 6.0);
        assert_eq!(o.sorensen_dice(), 0.5);
        assert_eq!(o.overlap_coefficient(), 0.5);
    }

    #[test]
    fn element_coefficients() {
        assert_eq!(jaccard(b("abc"), b("abc")), 1.0);
        assert_eq!(sorensen_dice(b("abc"), b("xyz")), 0.0);
        assert_eq!(overlap(b("ab"), b("abcd")), 1.0);
        assert_eq!(overlap(b(""), b("abcd")), 0.0);
        assert_eq!(jaccard(b(""), b("")), 1.0);
    }

    #[test]
    fn bigram_coefficients() {
        // night: ni ig gh ht, nacht: na ac ch ht
        assert_eq!(sorensen_dice_ngram(b("night"), b("nacht"), 2), 0.25);
        assert_eq!(jaccard_ngram(b("night"), b("nacht"), 2), 1.0 / 7.0);
        assert_eq!(jaccard_ngram(b("a"), b("ab"), 2), 0.0);
        assert_eq!(jaccard_ngram(b("ab"), b("ab"), 0), 0.0);
        assert_eq!(sorensen_dice_ngram(b(""), b(""), 3), 1.0);
    }
}
