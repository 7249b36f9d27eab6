//! TF-IDF Vectorizer
//!
//! Term-frequency / inverse-document-frequency weighting over a fitted
//! vocabulary, using the usual off-the-shelf defaults:
//! - tokens are lowercase runs of two or more word characters
//! - idf(t) = ln((1 + n) / (1 + df(t))) + 1
//! - each vector is L2-normalized
//!
//! Terms that were not seen while fitting are dropped at transform time.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet, HashMap};

static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

/// Tokenize text into lowercase terms of at least two word characters.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Sparse vector keyed by vocabulary index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: BTreeMap<usize, f32>,
}

impl SparseVector {
    pub fn get(&self, index: usize) -> f32 {
        self.entries.get(&index).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.values().all(|v| *v == 0.0)
    }

    pub fn norm(&self) -> f32 {
        self.entries.values().map(|v| v * v).sum::<f32>().sqrt()
    }

    pub fn dot(&self, other: &SparseVector) -> f32 {
        // Walk the shorter vector
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .entries
            .iter()
            .map(|(idx, v)| v * large.get(*idx))
            .sum()
    }

    fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for v in self.entries.values_mut() {
                *v /= norm;
            }
        }
        self
    }
}

/// Cosine similarity of two sparse vectors; 0.0 if either is zero.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f32 {
    let denominator = a.norm() * b.norm();
    if denominator == 0.0 {
        return 0.0;
    }
    a.dot(b) / denominator
}

#[derive(Debug, Clone, Default)]
pub struct TfIdfVectorizer {
    /// Term -> vocabulary index (indices follow sorted term order)
    vocabulary: HashMap<String, usize>,
    /// Vocabulary index -> idf weight
    idf: Vec<f32>,
}

impl TfIdfVectorizer {
    /// Learn vocabulary and idf weights from a set of documents.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d.as_ref())).collect();

        let terms: BTreeSet<&str> = tokenized
            .iter()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
            .collect();

        let vocabulary: HashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.to_string(), idx))
            .collect();

        let mut doc_freq = vec![0usize; vocabulary.len()];
        for tokens in &tokenized {
            let unique: BTreeSet<usize> = tokens.iter().map(|t| vocabulary[t.as_str()]).collect();
            for idx in unique {
                doc_freq[idx] += 1;
            }
        }

        let n = documents.len() as f32;
        let idf = doc_freq
            .into_iter()
            .map(|df| ((1.0 + n) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        log::debug!(
            "[VECTORIZER] Fitted {} documents, vocabulary size {}",
            documents.len(),
            vocabulary.len()
        );

        Self { vocabulary, idf }
    }

    /// Vectorize a document against the fitted vocabulary.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, f32> = BTreeMap::new();
        for token in tokenize(text) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let entries = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf * self.idf[idx]))
            .collect();

        SparseVector { entries }.normalized()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Idf weight of a term, if it is in the vocabulary.
    pub fn idf(&self, term: &str) -> Option<f32> {
        self.vocabulary
            .get(&term.to_lowercase())
            .map(|&idx| self.idf[idx])
    }
}
