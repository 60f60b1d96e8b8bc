//! kardex-export
//!
//! Document export: a committed record in, a fixed-layout paginated DOCX
//! byte stream out, mirroring the printed hospital form. Deterministic
//! given a record; the caller (the navigator) guarantees it only hands
//! over complete, committed records.

pub mod docx;
pub mod error;
pub mod render;

pub use error::ExportError;

use kardex_core::models::evaluation::NursingEvaluation;
use kardex_core::models::surgical_report::SurgicalReport;

/// Render a committed nursing evaluation to document bytes.
pub fn evaluation_document(evaluation: &NursingEvaluation) -> Result<Vec<u8>, ExportError> {
    let rendered = match evaluation {
        NursingEvaluation::SurgicalShort(e) => render::render_short_stay(e)?,
        NursingEvaluation::Cma(e) => render::render_cma(e)?,
    };
    let bytes = docx::generate_docx(&rendered)?;
    tracing::info!(id = evaluation.id(), size = bytes.len(), "evaluation document rendered");
    Ok(bytes)
}

/// Render a committed surgical report to document bytes.
pub fn report_document(report: &SurgicalReport) -> Result<Vec<u8>, ExportError> {
    let rendered = render::render_report(report)?;
    let bytes = docx::generate_docx(&rendered)?;
    tracing::info!(id = %report.id, size = bytes.len(), "report document rendered");
    Ok(bytes)
}
