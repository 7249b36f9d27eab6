//! Per-session state for one user interaction flow:
//! input -> matches -> chosen career and level -> saved plan.

use crate::input::UserProfile;
use crate::recommender::{CareerMatch, Recommender};
use crate::tracker::LearningTracker;
use crate::types::{CareerProfile, Level};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("No career matches yet; enter skills or interests first")]
    NoRecommendations,

    #[error("Career '{0}' is not among the current matches")]
    UnknownCareer(String),

    #[error("No roadmap has been saved yet")]
    NoPlan,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub user: UserProfile,
    pub recommendations: Vec<CareerMatch>,
    selected_career: Option<String>,
    selected_level: Option<Level>,
    default_level: Option<Level>,
    plan: Option<LearningTracker>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse raw input and replace the current matches. The first match
    /// becomes the selected career.
    pub fn generate(
        &mut self,
        recommender: &Recommender,
        skills_raw: &str,
        interests_raw: &str,
    ) -> &[CareerMatch] {
        self.user = UserProfile::parse(skills_raw, interests_raw);
        self.recommendations = recommender.recommend(&self.user);
        self.selected_career = None;
        self.selected_level = None;
        self.default_level = None;

        if let Some(first) = self.recommendations.first().map(|m| m.career.clone()) {
            if let Err(e) = self.select_career(recommender, &first) {
                log::warn!("[SESSION] Could not select top match {}: {}", first, e);
            }
        }

        log::info!(
            "[SESSION] Generated {} recommendations",
            self.recommendations.len()
        );
        &self.recommendations
    }

    pub fn has_recommendations(&self) -> bool {
        !self.recommendations.is_empty()
    }

    /// Choose one of the current matches. The level resets to the one
    /// detected from the user's skills.
    pub fn select_career(
        &mut self,
        recommender: &Recommender,
        name: &str,
    ) -> Result<Level, SessionError> {
        if self.recommendations.is_empty() {
            return Err(SessionError::NoRecommendations);
        }
        let found = self
            .recommendations
            .iter()
            .find(|m| m.career == name)
            .and_then(|m| recommender.catalog().get(m.index))
            .ok_or_else(|| SessionError::UnknownCareer(name.to_string()))?;

        let level = recommender.default_level(&self.user, found);
        self.selected_career = Some(found.career.clone());
        self.default_level = Some(level);
        self.selected_level = Some(level);
        log::debug!("[SESSION] Selected {} (default level {})", found.career, level);
        Ok(level)
    }

    pub fn select_level(&mut self, level: Level) {
        self.selected_level = Some(level);
    }

    pub fn selected_career(&self) -> Option<&str> {
        self.selected_career.as_deref()
    }

    pub fn selected_level(&self) -> Option<Level> {
        self.selected_level
    }

    /// Level detected for the selected career, before any manual override.
    pub fn default_level(&self) -> Option<Level> {
        self.default_level
    }

    pub fn selected_profile<'r>(&self, recommender: &'r Recommender) -> Option<&'r CareerProfile> {
        self.selected_career
            .as_deref()
            .and_then(|name| recommender.catalog().find(name))
    }

    /// Save the selected career's roadmap at the selected level.
    pub fn save_plan(&mut self, recommender: &Recommender) -> Result<&LearningTracker, SessionError> {
        let profile = self
            .selected_profile(recommender)
            .ok_or(SessionError::NoRecommendations)?;
        let level = self.selected_level.unwrap_or(Level::Beginner);

        let tracker = LearningTracker::new(
            profile.career.clone(),
            level,
            profile.steps(level).to_vec(),
        );
        log::info!(
            "[SESSION] Saved {} ({}) with {} tasks",
            tracker.career,
            tracker.level,
            tracker.tasks.len()
        );
        Ok(self.plan.insert(tracker))
    }

    pub fn plan(&self) -> Option<&LearningTracker> {
        self.plan.as_ref()
    }

    pub fn plan_mut(&mut self) -> Result<&mut LearningTracker, SessionError> {
        self.plan.as_mut().ok_or(SessionError::NoPlan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::parse_catalog;

    fn recommender() -> Recommender {
        let catalog = parse_catalog(
            r#"[
            {"career": "Data Analyst",
             "required_skills": ["SQL", "Excel", "pandas"],
             "interest_tags": ["analytics"],
             "roadmap": {"Beginner": ["Learn Excel"], "Intermediate": ["Learn pandas", "Build reports"], "Advanced": ["Lead analytics"]}},
            {"career": "Web Developer",
             "required_skills": ["HTML", "CSS", "JavaScript"],
             "interest_tags": ["web"],
             "roadmap": {"Beginner": ["Build a page"]}}
        ]"#,
        )
        .unwrap();
        Recommender::with_defaults(catalog)
    }

    #[test]
    fn test_generate_selects_first_match() {
        let rec = recommender();
        let mut session = Session::new();
        session.generate(&rec, "SQL, pandas", "analytics");

        assert!(session.has_recommendations());
        assert_eq!(session.selected_career(), Some("Data Analyst"));
        // 2 of 3 skills
        assert_eq!(session.default_level(), Some(Level::Intermediate));
        assert_eq!(session.selected_level(), Some(Level::Intermediate));
    }

    #[test]
    fn test_generate_with_empty_input_clears_selection() {
        let rec = recommender();
        let mut session = Session::new();
        session.generate(&rec, "sql", "");
        session.generate(&rec, "", "");

        assert!(!session.has_recommendations());
        assert_eq!(session.selected_career(), None);
        assert_eq!(
            session.save_plan(&rec).unwrap_err(),
            SessionError::NoRecommendations
        );
    }

    #[test]
    fn test_select_unknown_career() {
        let rec = recommender();
        let mut session = Session::new();
        session.generate(&rec, "sql", "");
        assert_eq!(
            session.select_career(&rec, "Astronaut").unwrap_err(),
            SessionError::UnknownCareer("Astronaut".to_string())
        );
    }

    #[test]
    fn test_level_override_and_save_plan() {
        let rec = recommender();
        let mut session = Session::new();
        session.generate(&rec, "sql, pandas", "analytics");
        session.select_level(Level::Advanced);

        let plan = session.save_plan(&rec).unwrap();
        assert_eq!(plan.career, "Data Analyst");
        assert_eq!(plan.level, Level::Advanced);
        assert_eq!(plan.tasks, vec!["Lead analytics".to_string()]);

        session.plan_mut().unwrap().toggle(0);
        assert!(session.plan().unwrap().is_complete());
    }

    #[test]
    fn test_reselecting_career_resets_level() {
        let rec = recommender();
        let mut session = Session::new();
        session.generate(&rec, "sql, pandas", "analytics web");
        session.select_level(Level::Advanced);

        let level = session.select_career(&rec, "Web Developer").unwrap();
        assert_eq!(level, Level::Beginner);
        assert_eq!(session.selected_level(), Some(Level::Beginner));
    }

    #[test]
    fn test_plan_mut_without_plan() {
        let mut session = Session::new();
        assert_eq!(session.plan_mut().unwrap_err(), SessionError::NoPlan);
    }
}
