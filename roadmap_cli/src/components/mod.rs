/// Component module exports
pub mod checklist;
pub mod step_card;
pub mod text_field;
pub mod theme;

pub use checklist::{Checklist, ChecklistState};
pub use step_card::{StepCard, CARD_HEIGHT};
pub use text_field::{TextField, TextFieldState};
