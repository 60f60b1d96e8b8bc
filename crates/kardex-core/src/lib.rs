//! kardex-core
//!
//! Pure domain types for the perioperative nursing documentation system:
//! evaluation variants, the surgical report, vital constants, directory
//! records, and vital-sign classification. No I/O — this is the shared
//! vocabulary of the Kardex system.

pub mod ids;
pub mod models;
pub mod vitals;
