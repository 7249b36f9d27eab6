//! Parsing of the comma-separated skill and interest fields.

use serde::{Deserialize, Serialize};

/// Split a comma-separated field into trimmed, lowercased, non-empty entries.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// What the user typed, after parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
}

impl UserProfile {
    pub fn parse(skills: &str, interests: &str) -> Self {
        Self {
            skills: parse_list(skills),
            interests: parse_list(interests),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.interests.is_empty()
    }

    /// Query document: skills, then interests, space separated.
    pub fn query_text(&self) -> String {
        self.skills
            .iter()
            .chain(self.interests.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
