use crate::types::CareerProfile;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Career '{name}' appears more than once in the catalog")]
    DuplicateCareer { name: String },
}

/// Read-only list of career profiles, in file order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    profiles: Vec<CareerProfile>,
}

impl Catalog {
    pub fn new(profiles: Vec<CareerProfile>) -> Result<Self, CatalogError> {
        let profiles: Vec<CareerProfile> = profiles.into_iter().map(trimmed).collect();

        let mut seen = HashSet::new();
        for profile in &profiles {
            if !seen.insert(profile.career.as_str()) {
                return Err(CatalogError::DuplicateCareer {
                    name: profile.career.clone(),
                });
            }
        }

        Ok(Self { profiles })
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn profiles(&self) -> &[CareerProfile] {
        &self.profiles
    }

    pub fn get(&self, index: usize) -> Option<&CareerProfile> {
        self.profiles.get(index)
    }

    /// Look a career up by name; exact match first, then case-insensitive.
    pub fn find(&self, name: &str) -> Option<&CareerProfile> {
        let name = name.trim();
        self.profiles
            .iter()
            .find(|p| p.career == name)
            .or_else(|| {
                self.profiles
                    .iter()
                    .find(|p| p.career.eq_ignore_ascii_case(name))
            })
    }
}

pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let profiles: Vec<CareerProfile> = serde_json::from_reader(reader)?;
    let catalog = Catalog::new(profiles)?;
    log::info!(
        "[CATALOG] Loaded {} careers from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogError> {
    let profiles: Vec<CareerProfile> = serde_json::from_str(json)?;
    Catalog::new(profiles)
}

fn trim_all(values: Vec<String>) -> Vec<String> {
    values.into_iter().map(|v| v.trim().to_string()).collect()
}

fn trimmed(profile: CareerProfile) -> CareerProfile {
    CareerProfile {
        career: profile.career.trim().to_string(),
        required_skills: trim_all(profile.required_skills),
        interest_tags: trim_all(profile.interest_tags),
        roadmap: profile
            .roadmap
            .into_iter()
            .map(|(level, steps)| (level.trim().to_string(), trim_all(steps)))
            .collect(),
        resources: trim_all(profile.resources),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Level;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"[
        {
            "career": " Data Scientist ",
            "required_skills": ["Python ", "Machine Learning"],
            "interest_tags": ["AI"],
            "roadmap": {
                "Beginner": [" Learn Python basics"],
                "Intermediate": ["Build ML models"],
                "Advanced": ["Deploy models"]
            },
            "resources": ["https://www.kaggle.com/learn"]
        },
        {
            "career": "Web Developer",
            "required_skills": ["HTML", "CSS", "JavaScript"],
            "interest_tags": ["web"],
            "roadmap": {"Beginner": ["Build a static page"]},
            "resources": []
        }
    ]"#;

    #[test]
    fn test_parse_catalog_trims_labels() {
        let catalog = parse_catalog(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);

        let ds = catalog.get(0).unwrap();
        assert_eq!(ds.career, "Data Scientist");
        assert_eq!(ds.required_skills[0], "Python");
        assert_eq!(ds.steps(Level::Beginner)[0], "Learn Python basics");
    }

    #[test]
    fn test_find_falls_back_to_case_insensitive() {
        let catalog = parse_catalog(SAMPLE).unwrap();
        assert_eq!(
            catalog.find("web developer").map(|p| p.career.as_str()),
            Some("Web Developer")
        );
        assert!(catalog.find("Astronaut").is_none());
    }

    #[test]
    fn test_duplicate_career_rejected() {
        let json = r#"[{"career": "A"}, {"career": "A "}]"#;
        match parse_catalog(json) {
            Err(CatalogError::DuplicateCareer { name }) => assert_eq!(name, "A"),
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            parse_catalog("{ not json"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.find("Data Scientist").is_some());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        assert!(matches!(
            load_catalog("/nonexistent/careers.json"),
            Err(CatalogError::Io(_))
        ));
    }
}
