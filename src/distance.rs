//! Edit distance and similarity ratio
//!
//! Classic dynamic-programming Levenshtein distance over normalized forms,
//! and the length-normalized similarity ratio derived from it. Inputs are
//! normalized internally; callers never need to pre-normalize.
//!
//! The full (m+1)×(n+1) matrix is allocated per comparison and dropped
//! immediately after. Inputs here are short field values (titles, artist
//! names), never full document bodies, so O(m·n) time and space is fine.

use crate::normalize::normalize;

/// Levenshtein edit distance between `a` and `b`, compared in normalized form.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = normalize(a).chars().collect();
    let b: Vec<char> = normalize(b).chars().collect();
    let m = a.len();
    let n = b.len();

    let mut matrix = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        matrix[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[m][n]
}

/// Similarity ratio in [0, 1] derived from edit distance.
///
/// `1 - distance / max(len)`, where lengths are of the normalized forms.
/// Two empty strings are identical (ratio 1).
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let len_a = normalize(a).chars().count();
    let len_b = normalize(b).chars().count();
    let max_len = len_a.max(len_b);
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / max_len as f64
}
