// SPDX-License-Identifier: MIT
// PyO3 wrappers for the metric engine (feature `python`).
// Each function extracts both inputs, dispatches on their element width and
// applies the optional score cutoff.

use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyList, PyString};

use crate::algorithms as alg;
use crate::algorithms::LevenshteinWeights;
use crate::distance::{
    DamerauLevenshtein, DistanceMetric, Hamming, Indel, LengthMetric, Levenshtein,
    LongestCommonSubsequence, LongestCommonSubstring, OptimalStringAlignment, ScoreCutoff,
};
use crate::error::{self, MetricError};

impl From<MetricError> for PyErr {
    fn from(err: MetricError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Input extraction
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
enum Seq<'a> {
    Ascii(&'a [u8]),
    Wide(Vec<u64>),
}

impl Seq<'_> {
    fn to_u64(&self) -> Vec<u64> {
        match self {
            Seq::Ascii(v) => v.iter().map(|&c| c as u64).collect(),
            Seq::Wide(v) => v.clone(),
        }
    }
}

/// `str` and `bytes` compare by code point; any other iterable compares
/// single-character strings by code point, integers by value and everything
/// else by its Python hash.
fn extract_single<'a>(obj: &'a Bound<'_, PyAny>) -> PyResult<Seq<'a>> {
    if obj.is_none() {
        return Err(PyTypeError::new_err("expected str, bytes, or sequence"));
    }
    if let Ok(s) = obj.downcast::<PyString>() {
        let st = s.to_str()?;
        if st.is_ascii() {
            return Ok(Seq::Ascii(st.as_bytes()));
        }
        return Ok(Seq::Wide(st.chars().map(|c| c as u64).collect()));
    }
    if let Ok(b) = obj.downcast::<PyBytes>() {
        return Ok(Seq::Ascii(b.as_bytes()));
    }

    let mut items: Vec<u64> = Vec::new();
    for item in obj.try_iter()? {
        let item = item?;
        if let Ok(s) = item.downcast::<PyString>() {
            let mut chars = s.to_str()?.chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                items.push(ch as u64);
                continue;
            }
        }
        if let Ok(i) = item.extract::<u64>() {
            items.push(i);
            continue;
        }
        items.push(item.hash()? as u64);
    }
    Ok(Seq::Wide(items))
}

macro_rules! dispatch_metric {
    ($func:path, $s1:expr, $s2:expr $(, $args:expr)*) => {
        match ($s1, $s2) {
            (Seq::Ascii(a), Seq::Ascii(b)) => $func(*a, *b $(, $args)*),
            (a, b) => $func(&a.to_u64()[..], &b.to_u64()[..] $(, $args)*),
        }
    };
}

fn metric_distance<T: PartialEq, M: DistanceMetric>(a: &[T], b: &[T], metric: &M) -> error::Result<usize> {
    metric.distance(a, b)
}

fn metric_coefficient<T: PartialEq, M: DistanceMetric>(a: &[T], b: &[T], metric: &M) -> error::Result<f64> {
    metric.simple_matching_coefficient(a, b)
}

fn length_coefficient<T: PartialEq, M: LengthMetric>(a: &[T], b: &[T], metric: &M) -> f64 {
    metric.simple_matching_coefficient(a, b)
}

fn lcs_positions<T: PartialEq>(a: &[T], b: &[T]) -> Vec<usize> {
    let idx1: Vec<usize> = (0..a.len()).collect();
    let idx2: Vec<usize> = (0..b.len()).collect();
    alg::lcs_reconstruct_by(&idx1, &idx2, |&i, &j| a[i] == b[j])
}

fn substring_span<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Option<(usize, usize, usize)> {
    alg::longest_common_substring(a, b).map(|run| (run.src_start(), run.src_end, run.dest_end))
}

/// Picks `positions` out of `obj`; a `str` source yields a `str`, anything
/// else a list.
fn elements_of(
    py: Python<'_>,
    obj: &Bound<'_, PyAny>,
    positions: impl IntoIterator<Item = usize>,
) -> PyResult<PyObject> {
    let items = positions
        .into_iter()
        .map(|i| obj.get_item(i))
        .collect::<PyResult<Vec<_>>>()?;
    if obj.is_instance_of::<PyString>() {
        let joined = items
            .iter()
            .map(|item| item.extract::<String>())
            .collect::<PyResult<String>>()?;
        return Ok(joined.into_pyobject(py)?.into_any().unbind());
    }
    Ok(PyList::new(py, items)?.into_any().unbind())
}

fn cap_distance(dist: usize, score_cutoff: Option<usize>) -> usize {
    score_cutoff.map_or(dist, |c| ScoreCutoff::distance(c).apply_distance(dist))
}

// ---------------------------------------------------------------------------
// Distances
// ---------------------------------------------------------------------------

#[pyfunction]
#[pyo3(signature = (s1, s2, *, weights=None, score_cutoff=None))]
pub fn levenshtein_distance(
    s1: &Bound<'_, PyAny>,
    s2: &Bound<'_, PyAny>,
    weights: Option<(usize, usize, usize)>,
    score_cutoff: Option<usize>,
) -> PyResult<usize> {
    let a = extract_single(s1)?;
    let b = extract_single(s2)?;
    let (insert, delete, replace) = weights.unwrap_or((1, 1, 1));
    let metric = Levenshtein::with_weights(LevenshteinWeights::new(insert, delete, replace));
    let dist = dispatch_metric!(metric_distance, &a, &b, &metric)?;
    Ok(cap_distance(dist, score_cutoff))
}

#[pyfunction]
#[pyo3(signature = (s1, s2, *, score_cutoff=None))]
pub fn damerau_levenshtein_distance(
    s1: &Bound<'_, PyAny>,
    s2: &Bound<'_, PyAny>,
    score_cutoff: Option<usize>,
) -> PyResult<usize> {
    let a = extract_single(s1)?;
    let b = extract_single(s2)?;
    let dist = dispatch_metric!(alg::damerau_levenshtein, &a, &b);
    Ok(cap_distance(dist, score_cutoff))
}

#[pyfunction]
#[pyo3(signature = (s1, s2, *, score_cutoff=None))]
pub fn osa_distance(
    s1: &Bound<'_, PyAny>,
    s2: &Bound<'_, PyAny>,
    score_cutoff: Option<usize>,
) -> PyResult<usize> {
    let a = extract_single(s1)?;
    let b = extract_single(s2)?;
    let dist = dispatch_metric!(alg::osa_distance, &a, &b);
    Ok(cap_distance(dist, score_cutoff))
}

#[pyfunction]
#[pyo3(signature = (s1, s2, *, score_cutoff=None))]
pub fn indel_distance(
    s1: &Bound<'_, PyAny>,
    s2: &Bound<'_, PyAny>,
    score_cutoff: Option<usize>,
) -> PyResult<usize> {
    let a = extract_single(s1)?;
    let b = extract_single(s2)?;
    let dist = dispatch_metric!(alg::indel_distance, &a, &b);
    Ok(cap_distance(dist, score_cutoff))
}

#[pyfunction]
#[pyo3(signature = (s1, s2, *, pad=false, score_cutoff=None))]
pub fn hamming_distance(
    s1: &Bound<'_, PyAny>,
    s2: &Bound<'_, PyAny>,
    pad: bool,
    score_cutoff: Option<usize>,
) -> PyResult<usize> {
    let a = extract_single(s1)?;
    let b = extract_single(s2)?;
    let dist = dispatch_metric!(metric_distance, &a, &b, &Hamming { pad })?;
    Ok(cap_distance(dist, score_cutoff))
}

// ---------------------------------------------------------------------------
// Common subsequences / substrings
// ---------------------------------------------------------------------------

#[pyfunction]
pub fn lcs_length(s1: &Bound<'_, PyAny>, s2: &Bound<'_, PyAny>) -> PyResult<usize> {
    let a = extract_single(s1)?;
    let b = extract_single(s2)?;
    Ok(dispatch_metric!(alg::lcs_length, &a, &b))
}

#[pyfunction]
pub fn lcs_sequence(py: Python<'_>, s1: &Bound<'_, PyAny>, s2: &Bound<'_, PyAny>) -> PyResult<PyObject> {
    let a = extract_single(s1)?;
    let b = extract_single(s2)?;
    let positions = dispatch_metric!(lcs_positions, &a, &b);
    elements_of(py, s1, positions)
}

#[pyfunction]
pub fn longest_common_substring_length(s1: &Bound<'_, PyAny>, s2: &Bound<'_, PyAny>) -> PyResult<usize> {
    let a = extract_single(s1)?;
    let b = extract_single(s2)?;
    Ok(dispatch_metric!(alg::longest_common_substring_length, &a, &b))
}

/// `(run, src_end, dest_end)` or `None` when nothing is shared.
#[pyfunction]
pub fn longest_common_substring(
    py: Python<'_>,
    s1: &Bound<'_, PyAny>,
    s2: &Bound<'_, PyAny>,
) -> PyResult<Option<(PyObject, usize, usize)>> {
    let a = extract_single(s1)?;
    let b = extract_single(s2)?;
    match dispatch_metric!(substring_span, &a, &b) {
        Some((start, src_end, dest_end)) => {
            let run = elements_of(py, s1, start..src_end)?;
            Ok(Some((run, src_end, dest_end)))
        }
        None => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// Coefficients
// ---------------------------------------------------------------------------

#[pyfunction]
#[pyo3(signature = (s1, s2, *, metric="levenshtein", score_cutoff=None))]
pub fn simple_matching_coefficient(
    s1: &Bound<'_, PyAny>,
    s2: &Bound<'_, PyAny>,
    metric: &str,
    score_cutoff: Option<f64>,
) -> PyResult<f64> {
    let a = extract_single(s1)?;
    let b = extract_single(s2)?;
    let sim = match metric {
        "levenshtein" => dispatch_metric!(metric_coefficient, &a, &b, &Levenshtein::new())?,
        "damerau_levenshtein" => dispatch_metric!(metric_coefficient, &a, &b, &DamerauLevenshtein)?,
        "osa" => dispatch_metric!(metric_coefficient, &a, &b, &OptimalStringAlignment)?,
        "indel" => dispatch_metric!(metric_coefficient, &a, &b, &Indel)?,
        "hamming" => dispatch_metric!(metric_coefficient, &a, &b, &Hamming::strict())?,
        "lcs_seq" => dispatch_metric!(length_coefficient, &a, &b, &LongestCommonSubsequence),
        "lcs_str" => dispatch_metric!(length_coefficient, &a, &b, &LongestCommonSubstring),
        other => {
            return Err(PyValueError::new_err(format!("unknown metric '{other}'")));
        }
    };
    match score_cutoff {
        Some(c) => Ok(ScoreCutoff::similarity(c)?.apply_similarity(sim)),
        None => Ok(sim),
    }
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(levenshtein_distance, m)?)?;
    m.add_function(wrap_pyfunction!(damerau_levenshtein_distance, m)?)?;
    m.add_function(wrap_pyfunction!(osa_distance, m)?)?;
    m.add_function(wrap_pyfunction!(indel_distance, m)?)?;
    m.add_function(wrap_pyfunction!(hamming_distance, m)?)?;
    m.add_function(wrap_pyfunction!(lcs_length, m)?)?;
    m.add_function(wrap_pyfunction!(lcs_sequence, m)?)?;
    m.add_function(wrap_pyfunction!(longest_common_substring_length, m)?)?;
    m.add_function(wrap_pyfunction!(longest_common_substring, m)?)?;
    m.add_function(wrap_pyfunction!(simple_matching_coefficient, m)?)?;
    Ok(())
}
