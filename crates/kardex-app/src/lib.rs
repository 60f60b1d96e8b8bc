//! kardex-app
//!
//! The application navigator: top-level view switch, modal orchestration,
//! and the wiring between selection workflows, form sessions, record
//! stores and document export. The rendering layer sits on top of this
//! crate and only ever reflects navigator state and calls back into it.

pub mod error;
pub mod navigator;

pub use error::AppError;
pub use navigator::{ActiveForm, AppView, Navigator};
