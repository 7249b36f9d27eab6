//! Non-interactive commands: `match`, `roadmap` and `careers`.
//!
//! Each command writes plain text to the given writer so the binary can
//! print to stdout and tests can capture the output.

use anyhow::{Context, Result};
use roadmap_core::{load_catalog, Catalog, Level, Recommender, RecommenderConfig, UserProfile};
use std::io::Write;

pub fn open_catalog(path: &str) -> Result<Catalog> {
    load_catalog(path).with_context(|| format!("Failed to load catalog from {}", path))
}

/// Print the top `top` matches, as text or as a JSON list of matches.
pub fn run_match<W: Write>(
    out: &mut W,
    catalog_path: &str,
    skills: &str,
    interests: &str,
    top: usize,
    json: bool,
) -> Result<()> {
    let config = RecommenderConfig {
        top_k: top,
        ..RecommenderConfig::default()
    };
    let recommender = Recommender::new(open_catalog(catalog_path)?, config);
    let user = UserProfile::parse(skills, interests);

    let matches = recommender.recommend(&user);
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&matches)?)?;
        return Ok(());
    }

    if matches.is_empty() {
        writeln!(out, "No matching careers found. Try different skills or interests.")?;
        return Ok(());
    }

    writeln!(out, "Top {} career matches:", matches.len())?;

    for (rank, m) in matches.iter().enumerate() {
        let Some(profile) = recommender.catalog().get(m.index) else {
            continue;
        };
        let level = recommender.default_level(&user, profile);

        writeln!(out, "\n  {}. {} (score {:.3})", rank + 1, m.career, m.score)?;
        writeln!(out, "     Key skills:  {}", profile.key_skills().join(", "))?;
        writeln!(out, "     Focus areas: {}", profile.focus_areas().join(", "))?;
        writeln!(out, "     Level:       {}", level)?;
    }

    Ok(())
}

/// Print one career's roadmap. Without an explicit level it is detected
/// from `skills`, which gives Beginner when no skills are given.
pub fn run_roadmap<W: Write>(
    out: &mut W,
    catalog_path: &str,
    career: &str,
    level: Option<Level>,
    skills: &str,
) -> Result<()> {
    let recommender = Recommender::with_defaults(open_catalog(catalog_path)?);

    let profile = recommender
        .catalog()
        .find(career)
        .ok_or_else(|| anyhow::anyhow!("Career {} not found", career))?;

    let level = level.unwrap_or_else(|| {
        let user = UserProfile::parse(skills, "");
        recommender.default_level(&user, profile)
    });

    writeln!(out, "Personalized Roadmap for {} ({})", profile.career, level)?;

    let steps = profile.steps(level);
    if steps.is_empty() {
        writeln!(out, "\n  No steps listed for this level.")?;
    }
    for (i, step) in steps.iter().enumerate() {
        writeln!(out, "\n  Step {}: {}", i + 1, step)?;
    }

    writeln!(out, "\nRecommended Resources:")?;
    for resource in &profile.resources {
        writeln!(out, "  - {}", resource)?;
    }

    Ok(())
}

pub fn run_careers<W: Write>(out: &mut W, catalog_path: &str) -> Result<()> {
    let catalog = open_catalog(catalog_path)?;

    writeln!(out, "{} careers in catalog:", catalog.len())?;

    for profile in catalog.profiles() {
        writeln!(out, "\n  {}", profile.career)?;
        writeln!(out, "  Skills:    {}", profile.required_skills.join(", "))?;
        writeln!(out, "  Interests: {}", profile.interest_tags.join(", "))?;
    }

    Ok(())
}
