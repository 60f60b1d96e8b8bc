use uuid::Uuid;

/// Generate a prefixed opaque record identifier (e.g. `eval-…`, `report-…`).
///
/// Identifiers are assigned once, at commit time for records and at append
/// time for table rows, and are never reassigned afterwards.
pub fn generate(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

pub const EVALUATION: &str = "eval";
pub const SURGICAL_REPORT: &str = "report";
pub const VITAL_CONSTANT: &str = "vc";
pub const MEDICATION_ROW: &str = "med";
