//! Career Recommender
//!
//! Ranks catalog careers against the user's skills and interests by cosine
//! similarity of their TF-IDF vectors.
//!
//! Ranking rules:
//! - the vectorizer is fitted once, on the catalog's own texts
//! - scores sort descending; ties keep catalog order
//! - empty input, or input sharing no term with the catalog, matches nothing

use crate::catalog::Catalog;
use crate::input::UserProfile;
use crate::level::{detect_level, LevelThresholds};
use crate::types::{CareerProfile, Level};
use crate::vectorizer::{cosine_similarity, SparseVector, TfIdfVectorizer};
use serde::{Deserialize, Serialize};

/// Number of careers shown to the user.
pub const DEFAULT_TOP_K: usize = 3;

#[derive(Debug, Clone)]
pub struct RecommenderConfig {
    /// Maximum number of matches returned
    pub top_k: usize,
    /// Skill-overlap ratios that pick the default level
    pub thresholds: LevelThresholds,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            thresholds: LevelThresholds::default(),
        }
    }
}

/// A ranked career.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerMatch {
    /// Position of the career in the catalog
    pub index: usize,
    pub career: String,
    pub score: f32,
}

pub struct Recommender {
    catalog: Catalog,
    config: RecommenderConfig,
    vectorizer: TfIdfVectorizer,
    career_vectors: Vec<SparseVector>,
}

impl Recommender {
    pub fn new(catalog: Catalog, config: RecommenderConfig) -> Self {
        log::info!("[RECOMMENDER] Initializing with config: {:?}", config);

        let texts: Vec<String> = catalog
            .profiles()
            .iter()
            .map(CareerProfile::corpus_text)
            .collect();
        let vectorizer = TfIdfVectorizer::fit(&texts);
        let career_vectors = texts.iter().map(|t| vectorizer.transform(t)).collect();

        Self {
            catalog,
            config,
            vectorizer,
            career_vectors,
        }
    }

    pub fn with_defaults(catalog: Catalog) -> Self {
        Self::new(catalog, RecommenderConfig::default())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Top `top_k` careers for the user's input.
    pub fn recommend(&self, user: &UserProfile) -> Vec<CareerMatch> {
        if user.is_empty() {
            log::debug!("[RECOMMENDER] Empty input, no matches");
            return Vec::new();
        }

        let query = self.vectorizer.transform(&user.query_text());
        if query.is_zero() {
            log::debug!("[RECOMMENDER] Input shares no terms with the catalog");
            return Vec::new();
        }

        let mut ranked: Vec<(usize, f32)> = self
            .career_vectors
            .iter()
            .map(|v| cosine_similarity(&query, v))
            .enumerate()
            .collect();

        // Stable sort keeps catalog order for equal scores
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let matches: Vec<CareerMatch> = ranked
            .into_iter()
            .take(self.config.top_k)
            .filter_map(|(index, score)| {
                self.catalog.get(index).map(|p| CareerMatch {
                    index,
                    career: p.career.clone(),
                    score,
                })
            })
            .collect();

        log::info!(
            "[RECOMMENDER] {} matches for '{}'",
            matches.len(),
            user.query_text()
        );
        matches
    }

    /// Default level for a career given the user's skills.
    pub fn default_level(&self, user: &UserProfile, profile: &CareerProfile) -> Level {
        detect_level(&user.skills, profile, &self.config.thresholds)
    }
}
