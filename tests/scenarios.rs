// SPDX-License-Identifier: MIT
use seqmetrics::algorithms::*;
use seqmetrics::distance::ngram;
use seqmetrics::{
    DamerauLevenshtein, DistanceMetric, Hamming, Levenshtein, MatchingBlock, MetricError,
    OptimalStringAlignment, ScoreCutoff,
};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn seed_values() {
    assert_eq!(levenshtein(&chars("kitten"), &chars("sitting")), 3);
    assert_eq!(damerau_levenshtein(&chars("ca"), &chars("ac")), 1);
    assert_eq!(levenshtein(&chars("ca"), &chars("ac")), 2);
    assert_eq!(lcs_length(&chars("ABCBDAB"), &chars("BDCABA")), 4);
    assert_eq!(longest_common_substring_length(&chars("abcdef"), &chars("zcdefg")), 4);
    assert_eq!(hamming(&chars("karolin"), &chars("kathrin")), Ok(3));
    assert_eq!(
        hamming(&chars("abc"), &chars("ab")),
        Err(MetricError::LengthMismatch { left: 3, right: 2 })
    );
}

#[test]
fn osa_is_not_a_metric() {
    let ca = chars("ca");
    let ac = chars("ac");
    let abc = chars("abc");
    let direct = osa_distance(&ca, &abc);
    let via = osa_distance(&ca, &ac) + osa_distance(&ac, &abc);
    assert_eq!((direct, via), (3, 2));
    assert!(direct > via);
    // the unrestricted distance keeps the triangle inequality
    assert_eq!(damerau_levenshtein(&ca, &abc), 2);
}

#[test]
fn works_over_non_text_elements() {
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    enum Token {
        Word(&'static str),
        Number(i64),
    }
    use Token::*;

    let a = vec![Word("move"), Number(3), Word("left"), Number(4)];
    let b = vec![Word("move"), Word("left"), Number(3), Number(4)];
    assert_eq!(levenshtein(&a, &b), 2);
    assert_eq!(damerau_levenshtein(&a, &b), 1);
    assert_eq!(osa_distance(&a, &b), 1);
    assert_eq!(lcs_reconstruct(&a, &b).len(), 3);

    let run = longest_common_substring(&a, &b).unwrap();
    assert_eq!(run.elements, vec![Word("move")]);
    assert_eq!(run.as_matching_block(), MatchingBlock::new(0, 0, 1));
}

#[test]
fn equality_capability_is_used_everywhere() {
    // numbers equal modulo 10
    let eq = |a: &u32, b: &u32| a % 10 == b % 10;
    let a = [11u32, 22, 33, 44];
    let b = [1u32, 33, 22, 4];
    assert_eq!(levenshtein_by(&a, &b, eq), 2);
    assert_eq!(damerau_levenshtein_by(&a, &b, eq), 1);
    assert_eq!(osa_distance_by(&a, &b, eq), 1);
    assert_eq!(lcs_length_by(&a, &b, eq), 3);
    assert_eq!(hamming_by(&a, &b, eq), Ok(2));
    assert_eq!(lcs_reconstruct_by(&a, &b, eq), vec![11, 22, 44]);
    let run = longest_common_substring_by(&a, &b, eq).unwrap();
    assert_eq!(run.elements, vec![11]);
}

#[test]
fn metric_objects_share_one_interface() {
    fn coefficient<M: DistanceMetric>(m: M) -> f64 {
        m.simple_matching_coefficient(b"abcd", b"abdc").unwrap()
    }
    assert_eq!(coefficient(Levenshtein::new()), 0.5);
    assert_eq!(coefficient(DamerauLevenshtein), 0.75);
    assert_eq!(coefficient(OptimalStringAlignment), 0.75);
    assert_eq!(coefficient(Hamming::strict()), 0.5);
}

#[test]
fn cutoffs_cap_reported_scores() {
    let dist = levenshtein(b"kitten", b"sitting");
    assert_eq!(ScoreCutoff::distance(2).apply_distance(dist), 3);
    assert_eq!(ScoreCutoff::distance(5).apply_distance(dist), 3);
    let sim = Levenshtein::new().normalized_similarity(b"kitten", b"sitting").unwrap();
    assert_eq!(ScoreCutoff::similarity(0.9).unwrap().apply_similarity(sim), 0.0);
    assert!(matches!(
        ScoreCutoff::similarity(2.0),
        Err(MetricError::InvalidScoreCutoff(_))
    ));
}

#[test]
fn matching_blocks_from_edit_scripts() {
    let ops = levenshtein_editops(b"qabxcd", b"abycdf");
    assert_eq!(ops.len(), levenshtein(b"qabxcd", b"abycdf"));
    let blocks = ops.as_matching_blocks();
    let matched: usize = blocks.iter().map(|b| b.size).sum();
    assert_eq!(matched, 4);
    assert_eq!(blocks.last(), Some(&MatchingBlock::new(6, 6, 0)));
}

#[test]
fn set_coefficients() {
    assert_eq!(ngram::jaccard(b"abc", b"bcd"), 0.5);
    assert_eq!(ngram::sorensen_dice(b"abc", b"bcd"), 2.0 * 2.0 / 6.0);
    assert_eq!(ngram::overlap(b"abc", b"bc"), 1.0);
}
