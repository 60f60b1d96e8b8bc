use thiserror::Error;

use kardex_forms::{FormError, SelectionError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] FormError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("export error: {0}")]
    Export(#[from] kardex_export::ExportError),

    /// A second export was requested while one is outstanding.
    #[error("an export is already in progress")]
    ExportBusy,

    #[error("no record with id {0}")]
    UnknownRecord(String),

    #[error("no form is currently open")]
    NoActiveForm,

    /// The single-form-visible-at-a-time invariant: a new workflow cannot
    /// start while a form session is open.
    #[error("a form is already open")]
    FormAlreadyOpen,
}
