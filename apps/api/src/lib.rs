//! Clinical intake assessment service.
//!
//! Serves the intake form, relays submissions to a hosted text-generation model,
//! and exports the returned narrative as a PDF report.

pub mod assessment;
pub mod client;
pub mod config;
pub mod errors;
pub mod llm_client;
pub mod report;
pub mod routes;
pub mod state;
