/// Screen module exports

pub mod input;
pub mod matches;
pub mod roadmap;
pub mod tracker;

pub use input::{InputField, InputScreen, InputState, DEFAULT_INTERESTS, DEFAULT_SKILLS};
pub use matches::{MatchCard, MatchesScreen, MatchesState};
pub use roadmap::{RoadmapScreen, RoadmapState};
pub use tracker::TrackerScreen;
