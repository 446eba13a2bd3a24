// Assessment Bridge
// Validates an intake, builds the prompt, and relays it to the text generator.
// All upstream calls go through llm_client; nothing here talks HTTP to the model.

pub mod bridge;
pub mod handlers;
pub mod intake;
pub mod prompts;

pub use bridge::generate_assessment;
pub use intake::{IncompleteIntake, IntakeField, IntakeRecord, IntakeSubmission};
