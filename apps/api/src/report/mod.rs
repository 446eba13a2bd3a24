// Report rendering
// Turns assessment text into Field/Details rows and a paginated PDF.
// PDF drawing is CPU-bound and must run inside tokio::task::spawn_blocking.

pub mod error;
pub mod font_metrics;
pub mod handlers;
pub mod pdf;
pub mod rows;

pub use error::ExportError;
pub use pdf::{a4_page_layout, layout_report, render_pdf, PageLayout};
pub use rows::{parse_rows, Report, ReportRow};
