//! Default proficiency level from skill overlap.

use crate::types::{CareerProfile, Level};
use std::collections::HashSet;

/// Ratio boundaries between levels. A ratio below `intermediate` is
/// Beginner, below `advanced` is Intermediate, anything else Advanced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelThresholds {
    pub intermediate: f32,
    pub advanced: f32,
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            intermediate: 0.3,
            advanced: 0.7,
        }
    }
}

impl LevelThresholds {
    pub fn classify(&self, ratio: f32) -> Level {
        if ratio < self.intermediate {
            Level::Beginner
        } else if ratio < self.advanced {
            Level::Intermediate
        } else {
            Level::Advanced
        }
    }
}

/// Share of a career's required skills the user already has.
///
/// `user_skills` are expected already lowercased (see [`crate::input::parse_list`]).
/// The denominator is the number of listed required skills, at least 1.
pub fn skill_match_ratio(user_skills: &[String], profile: &CareerProfile) -> f32 {
    let user: HashSet<&str> = user_skills.iter().map(String::as_str).collect();
    let required: HashSet<String> = profile
        .required_skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();

    let shared = required.iter().filter(|s| user.contains(s.as_str())).count();
    shared as f32 / profile.required_skills.len().max(1) as f32
}

pub fn detect_level(
    user_skills: &[String],
    profile: &CareerProfile,
    thresholds: &LevelThresholds,
) -> Level {
    thresholds.classify(skill_match_ratio(user_skills, profile))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn career(skills: &[&str]) -> CareerProfile {
        CareerProfile {
            career: "Test".to_string(),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_classify_boundaries() {
        let t = LevelThresholds::default();
        assert_eq!(t.classify(0.0), Level::Beginner);
        assert_eq!(t.classify(0.29), Level::Beginner);
        assert_eq!(t.classify(0.3), Level::Intermediate);
        assert_eq!(t.classify(0.69), Level::Intermediate);
        assert_eq!(t.classify(0.7), Level::Advanced);
        assert_eq!(t.classify(1.0), Level::Advanced);
    }

    #[test]
    fn test_ratio_is_case_insensitive_on_career_side() {
        let p = career(&["Python", "SQL", "Excel", "Tableau"]);
        let ratio = skill_match_ratio(&skills(&["python", "sql"]), &p);
        assert!((ratio - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_ratio_with_no_required_skills() {
        let p = career(&[]);
        assert_eq!(skill_match_ratio(&skills(&["python"]), &p), 0.0);
    }

    #[test]
    fn test_duplicate_user_skills_count_once() {
        let p = career(&["Python", "SQL"]);
        let ratio = skill_match_ratio(&skills(&["python", "python"]), &p);
        assert!((ratio - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_detect_level() {
        let p = career(&["Python", "SQL", "pandas"]);
        let t = LevelThresholds::default();
        assert_eq!(detect_level(&skills(&[]), &p, &t), Level::Beginner);
        assert_eq!(detect_level(&skills(&["sql"]), &p, &t), Level::Intermediate);
        assert_eq!(
            detect_level(&skills(&["python", "sql", "pandas"]), &p, &t),
            Level::Advanced
        );
    }
}
