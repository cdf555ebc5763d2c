//! # surveysheet
//!
//! Personalized survey sheet generation: fill an HTML template with student
//! metadata and the question bank, then render the result to PDF.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use surveysheet::{generate_pdf, personalize_sheet, Result, SheetMeta};
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let meta = SheetMeta {
//!     sheet_id: 7,
//!     student_name: Some("Asha".to_string()),
//!     student_grade: Some(5),
//!     student_school: Some("Lotus".to_string()),
//!     student_tfi_id: Some("T-9".to_string()),
//!     template_name: "v1".to_string(),
//! };
//!
//! let templates_dir = Path::new("templates");
//! let html = personalize_sheet(&meta, templates_dir)?;
//! generate_pdf(templates_dir, &meta.template_name, &html, "survey.pdf", &[])?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`sheet`] - Sheet and student metadata
//! - [`image`] - Optional input-image container for scanned sheets
//! - [`questions`] - The fixed question bank and tag asset naming
//! - [`personalize`] - Template loading and placeholder substitution
//! - [`render`] - HTML to PDF rendering

pub mod error;
pub mod image;
pub mod personalize;
pub mod questions;
pub mod render;
pub mod sheet;

pub use error::{Result, SheetError};
pub use image::InputImage;
pub use personalize::{load_template, personalize_sheet, questions_table};
pub use questions::{tag_asset_path, QUESTIONS};
pub use render::generate_pdf;
pub use sheet::SheetMeta;

/// Default directory holding `<name>.html` / `<name>_style.css` template
/// pairs, relative to the working directory.
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";
