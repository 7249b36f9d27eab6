// End-to-end flow over the shipped catalog: load, rank, pick a level, save a plan.
use roadmap_core::*;
use std::path::PathBuf;

fn shipped_catalog() -> Catalog {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("data")
        .join("careers.json");
    load_catalog(&path).expect("shipped catalog should load")
}

#[test]
fn test_shipped_catalog_is_complete() {
    let catalog = shipped_catalog();
    assert!(catalog.len() >= 3);

    for profile in catalog.profiles() {
        assert!(!profile.required_skills.is_empty(), "{}", profile.career);
        for level in Level::ALL {
            assert!(
                !profile.steps(level).is_empty(),
                "{} has no {} steps",
                profile.career,
                level
            );
        }
    }
}

#[test]
fn test_default_input_ranks_data_scientist_first() {
    let recommender = Recommender::with_defaults(shipped_catalog());
    let user = UserProfile::parse("Python, SQL, pandas", "AI, analytics, data science");

    let matches = recommender.recommend(&user);
    assert_eq!(matches.len(), DEFAULT_TOP_K);
    assert_eq!(matches[0].career, "Data Scientist");
    assert_eq!(matches[1].career, "Data Analyst");

    let profile = recommender.catalog().get(matches[0].index).unwrap();
    // 3 of 7 required skills
    assert_eq!(recommender.default_level(&user, profile), Level::Intermediate);
}

#[test]
fn test_ranking_is_stable_across_recommenders() {
    let user = UserProfile::parse("docker, kubernetes", "cloud");
    let a = Recommender::with_defaults(shipped_catalog()).recommend(&user);
    let b = Recommender::with_defaults(shipped_catalog()).recommend(&user);

    assert_eq!(a, b);
    assert_eq!(a[0].career, "DevOps Engineer");
    assert_eq!(a[1].career, "Cloud Architect");
}

#[test]
fn test_session_flow_saves_selected_roadmap() {
    let _ = env_logger::builder().is_test(true).try_init();

    let recommender = Recommender::with_defaults(shipped_catalog());
    let mut session = Session::new();
    session.generate(&recommender, "HTML, CSS, JavaScript", "web");

    assert_eq!(session.selected_career(), Some("Web Developer"));
    // 3 of 6 required skills
    assert_eq!(session.default_level(), Some(Level::Intermediate));

    let expected = recommender
        .catalog()
        .find("Web Developer")
        .unwrap()
        .steps(Level::Intermediate)
        .to_vec();

    let plan = session.save_plan(&recommender).unwrap();
    assert_eq!(plan.tasks, expected);
    assert_eq!(plan.progress(), 0.0);
}
