use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

/// Validation failure raised at submit time. Submission is blocked and the
/// in-progress draft is left untouched so the nurse can correct and retry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FormError {
    /// The nurse-name field is blank or whitespace-only. This is the only
    /// rule the form enforces programmatically; everything else on the
    /// paper form is the nurse's professional judgement.
    #[error("missing_nurse_name")]
    MissingNurseName,
}

/// What kind of directory record failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LookupKind {
    Patient,
    Nurse,
    Surgery,
}

/// A selection-workflow step referenced a directory id that no longer
/// resolves. The step aborts and the workflow returns to the prior
/// selection; a partially-prefilled record is never produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error, TS)]
#[ts(export)]
pub enum SelectionError {
    #[error("{kind:?} lookup miss: {id}")]
    LookupMiss { kind: LookupKind, id: String },
}
