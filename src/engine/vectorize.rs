// TF-IDF term vectorization.
//
// Each unit (a sentence, or the ranker's synthetic token blob) becomes a
// sparse vector over a vocabulary built from the union of tokens across all
// units. Words frequent in one unit but rare across units score highest —
// that contrast is what lets clustering separate sentences by subject.
//
// The IDF is the smoothed variant ln((1 + N) / (1 + df)) + 1: no division by
// zero, and a term present in every unit still keeps a non-zero weight.

use std::collections::HashMap;

use crate::nlp::tokenize;

/// A sparse TF-IDF vector: vocabulary index -> non-negative weight.
///
/// A unit with no tokens yields an empty map — a valid all-zero vector,
/// not an error.
#[derive(Debug, Clone, Default)]
pub struct TermVector {
    pub weights: HashMap<usize, f64>,
}

impl TermVector {
    /// Weight for a vocabulary index (0.0 when absent).
    pub fn get(&self, index: usize) -> f64 {
        self.weights.get(&index).copied().unwrap_or(0.0)
    }

    /// Expand to a dense row over the full vocabulary.
    pub fn to_dense(&self, vocab_len: usize) -> Vec<f64> {
        let mut row = vec![0.0; vocab_len];
        for (&i, &w) in &self.weights {
            row[i] = w;
        }
        row
    }
}

/// The result of vectorizing a unit sequence: one sparse vector per unit
/// plus the vocabulary they index into.
#[derive(Debug, Clone)]
pub struct Vectorized {
    /// Vocabulary terms in first-occurrence order across the unit sequence.
    pub vocabulary: Vec<String>,
    /// One vector per input unit, same order as the input.
    pub vectors: Vec<TermVector>,
}

/// Vectorize a sequence of text units with TF-IDF weighting.
///
/// Fully deterministic for a fixed input: the vocabulary is ordered by first
/// occurrence and weights involve no randomness. TF is the raw term count
/// divided by the unit's total token count; the weight is TF × smoothed IDF.
pub fn vectorize(units: &[String]) -> Vectorized {
    let tokenized: Vec<Vec<String>> = units.iter().map(|u| tokenize::tokens(u)).collect();
    vectorize_tokenized(&tokenized)
}

/// Vectorize units that are already token lists.
///
/// The hashtag ranker uses this form: it builds a weighted token multiset
/// itself and must not have its duplicated title tokens re-tokenized.
pub fn vectorize_tokenized(units: &[Vec<String>]) -> Vectorized {
    // Vocabulary in first-occurrence order, plus document frequencies.
    let mut vocabulary: Vec<String> = Vec::new();
    let mut term_index: HashMap<String, usize> = HashMap::new();
    let mut doc_freq: Vec<usize> = Vec::new();

    for unit in units {
        let mut seen_here: Vec<bool> = vec![false; vocabulary.len()];
        for token in unit {
            let index = match term_index.get(token) {
                Some(&i) => i,
                None => {
                    let i = vocabulary.len();
                    vocabulary.push(token.clone());
                    term_index.insert(token.clone(), i);
                    doc_freq.push(0);
                    seen_here.push(false);
                    i
                }
            };
            if !seen_here[index] {
                seen_here[index] = true;
                doc_freq[index] += 1;
            }
        }
    }

    let n = units.len() as f64;
    let idf: Vec<f64> = doc_freq
        .iter()
        .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
        .collect();

    let vectors: Vec<TermVector> = units
        .iter()
        .map(|unit| {
            if unit.is_empty() {
                return TermVector::default();
            }
            let total = unit.len() as f64;
            let mut counts: HashMap<usize, f64> = HashMap::new();
            for token in unit {
                *counts.entry(term_index[token]).or_insert(0.0) += 1.0;
            }
            let weights = counts
                .into_iter()
                .map(|(i, count)| (i, (count / total) * idf[i]))
                .collect();
            TermVector { weights }
        })
        .collect();

    Vectorized {
        vocabulary,
        vectors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn vocabulary_is_first_occurrence_order() {
        let v = vectorize(&units(&["flood city", "city rescue flood"]));
        assert_eq!(v.vocabulary, vec!["flood", "city", "rescue"]);
    }

    #[test]
    fn vectorizing_twice_is_identical() {
        let input = units(&["heavy flood hit", "rescue teams responded", "flood warning"]);
        let a = vectorize(&input);
        let b = vectorize(&input);
        assert_eq!(a.vocabulary, b.vocabulary);
        for (va, vb) in a.vectors.iter().zip(&b.vectors) {
            assert_eq!(va.weights, vb.weights);
        }
    }

    #[test]
    fn distinctive_terms_outweigh_ubiquitous_ones() {
        // "city" appears in both units, "rescue" in one — with equal TF the
        // rarer term must carry more weight.
        let v = vectorize(&units(&["city flood", "city rescue"]));
        let city = v.vocabulary.iter().position(|t| t == "city").unwrap();
        let rescue = v.vocabulary.iter().position(|t| t == "rescue").unwrap();
        assert!(v.vectors[1].get(rescue) > v.vectors[1].get(city));
    }

    #[test]
    fn tf_is_count_over_unit_total() {
        let v = vectorize(&units(&["flood flood city"]));
        let flood = v.vocabulary.iter().position(|t| t == "flood").unwrap();
        let city = v.vocabulary.iter().position(|t| t == "city").unwrap();
        // Single unit: IDF is the same constant for every term, so the
        // ratio of weights equals the ratio of term frequencies.
        let ratio = v.vectors[0].get(flood) / v.vectors[0].get(city);
        assert!((ratio - 2.0).abs() < 1e-9);
    }

    #[test]
    fn empty_unit_yields_all_zero_vector() {
        let v = vectorize(&units(&["flood city", "   ", "rescue"]));
        assert!(v.vectors[1].weights.is_empty());
        assert_eq!(v.vectors.len(), 3);
    }

    #[test]
    fn every_term_keeps_nonzero_weight() {
        // Smoothed IDF: a term in every unit still has weight > 0.
        let v = vectorize(&units(&["flood here", "flood there"]));
        let flood = v.vocabulary.iter().position(|t| t == "flood").unwrap();
        assert!(v.vectors[0].get(flood) > 0.0);
        assert!(v.vectors[1].get(flood) > 0.0);
    }
}
