use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Number of required skills shown as a career's "key skills".
pub const KEY_SKILL_COUNT: usize = 5;

/// Number of interest tags shown as a career's "focus areas".
pub const FOCUS_AREA_COUNT: usize = 3;

/// Proficiency level a roadmap is authored for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn label(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }

    /// Position in [`Level::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Level::Beginner => 0,
            Level::Intermediate => 1,
            Level::Advanced => 2,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Level::Beginner => Level::Intermediate,
            Level::Intermediate => Level::Advanced,
            Level::Advanced => Level::Beginner,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Level::Beginner => Level::Advanced,
            Level::Intermediate => Level::Beginner,
            Level::Advanced => Level::Intermediate,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Unknown level '{0}' (expected Beginner, Intermediate or Advanced)")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Level::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseLevelError(wanted.to_string()))
    }
}

/// One entry of the career catalog. Static reference data: nothing in the
/// application creates or mutates a profile after the catalog is loaded.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct CareerProfile {
    pub career: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub interest_tags: Vec<String>,
    /// Level name ("Beginner"/"Intermediate"/"Advanced") -> ordered steps
    #[serde(default)]
    pub roadmap: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub resources: Vec<String>,
}

impl CareerProfile {
    /// Roadmap steps authored for `level`. Empty when the catalog omits it.
    pub fn steps(&self, level: Level) -> &[String] {
        self.roadmap
            .get(level.label())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn key_skills(&self) -> &[String] {
        let end = self.required_skills.len().min(KEY_SKILL_COUNT);
        &self.required_skills[..end]
    }

    pub fn focus_areas(&self) -> &[String] {
        let end = self.interest_tags.len().min(FOCUS_AREA_COUNT);
        &self.interest_tags[..end]
    }

    /// Text the vectorizer sees for this career: skills, then interests.
    pub fn corpus_text(&self) -> String {
        self.required_skills
            .iter()
            .chain(self.interest_tags.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> CareerProfile {
        let mut roadmap = BTreeMap::new();
        roadmap.insert(
            "Beginner".to_string(),
            vec!["Learn Python".to_string(), "Learn SQL".to_string()],
        );
        CareerProfile {
            career: "Data Analyst".to_string(),
            required_skills: vec!["Python", "SQL", "Excel", "Tableau", "Statistics", "pandas"]
                .into_iter()
                .map(String::from)
                .collect(),
            interest_tags: vec!["analytics", "business", "data", "reporting"]
                .into_iter()
                .map(String::from)
                .collect(),
            roadmap,
            resources: vec![],
        }
    }

    #[test]
    fn test_level_parse_is_case_insensitive() {
        assert_eq!("beginner".parse::<Level>().unwrap(), Level::Beginner);
        assert_eq!(" ADVANCED ".parse::<Level>().unwrap(), Level::Advanced);
        assert!("expert".parse::<Level>().is_err());
    }

    #[test]
    fn test_level_cycles() {
        assert_eq!(Level::Beginner.next(), Level::Intermediate);
        assert_eq!(Level::Advanced.next(), Level::Beginner);
        assert_eq!(Level::Beginner.prev(), Level::Advanced);
        for level in Level::ALL {
            assert_eq!(Level::ALL[level.index()], level);
        }
    }

    #[test]
    fn test_steps_for_missing_level_is_empty() {
        let p = profile();
        assert_eq!(p.steps(Level::Beginner).len(), 2);
        assert!(p.steps(Level::Advanced).is_empty());
    }

    #[test]
    fn test_summaries_are_truncated() {
        let p = profile();
        assert_eq!(p.key_skills().len(), 5);
        assert_eq!(p.focus_areas(), &["analytics", "business", "data"]);
    }

    #[test]
    fn test_corpus_text_orders_skills_before_interests() {
        let p = profile();
        let text = p.corpus_text();
        assert!(text.starts_with("Python SQL Excel"));
        assert!(text.ends_with("data reporting"));
    }

    #[test]
    fn test_level_serializes_by_name() {
        let json = serde_json::to_string(&Level::Intermediate).unwrap();
        assert_eq!(json, "\"Intermediate\"");
    }
}
