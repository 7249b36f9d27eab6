// Core logic for the career roadmap generator: catalog loading, TF-IDF
// ranking, level detection and the in-memory session.

pub mod types;
pub mod catalog;
pub mod input;

pub mod vectorizer;
pub mod recommender;
pub mod level;

pub mod session;
pub mod tracker;

pub use catalog::{load_catalog, parse_catalog, Catalog, CatalogError};
pub use input::{parse_list, UserProfile};
pub use level::{detect_level, skill_match_ratio, LevelThresholds};
pub use recommender::{CareerMatch, Recommender, RecommenderConfig, DEFAULT_TOP_K};
pub use session::{Session, SessionError};
pub use tracker::LearningTracker;
pub use types::{CareerProfile, Level};

pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        assert_eq!(get_version(), "0.1.0");
    }
}
