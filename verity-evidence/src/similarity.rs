//! Vector similarity and candidate ranking.

use std::cmp::Ordering;

/// Cosine similarity via dot product; vectors are normalized upstream.
pub fn cosine(a: &[f32], b: &[f32]) -> f64 {
    a.iter().zip(b).map(|(x, y)| f64::from(x * y)).sum()
}

/// Pair sentences with their similarity to the claim and keep the top k.
///
/// Descending by similarity; the sort is stable so page order breaks
/// ties.
pub fn rank_by_similarity(
    claim_vec: &[f32],
    sentences: Vec<String>,
    sentence_vecs: &[Vec<f32>],
    top_k: usize,
) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = sentences
        .into_iter()
        .zip(sentence_vecs)
        .map(|(sentence, vec)| {
            let sim = cosine(claim_vec, vec);
            (sentence, sim)
        })
        .collect();

    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked.truncate(top_k);
    ranked
}
