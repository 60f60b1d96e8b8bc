//! Vital-sign classification.
//!
//! Each monitored constant has a closed normal band and a wider danger
//! band. The thresholds are hand-tuned per constant, mirroring the unit's
//! printed reference card; they are intentionally literal rather than
//! derived from a common formula.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VitalSignKind {
    /// Systolic blood pressure, mmHg.
    TasSistolica,
    /// Diastolic blood pressure, mmHg.
    TadDiastolica,
    /// Heart rate, lpm.
    Fc,
    /// Oxygen saturation, %.
    SatO2,
    /// Pain score, 0-10.
    Eva,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VitalStatus {
    Normal,
    Warning,
    Danger,
}

/// Inclusive normal range for a constant.
pub fn normal_range(kind: VitalSignKind) -> (f64, f64) {
    match kind {
        VitalSignKind::TasSistolica => (90.0, 140.0),
        VitalSignKind::TadDiastolica => (60.0, 90.0),
        VitalSignKind::Fc => (60.0, 100.0),
        VitalSignKind::SatO2 => (95.0, 100.0),
        VitalSignKind::Eva => (0.0, 10.0),
    }
}

/// Classify a reading into normal / warning / danger.
///
/// Total over all numeric input: values far outside any physiological range
/// are classified, never rejected — entry validation is not this layer's
/// concern.
pub fn classify(value: f64, kind: VitalSignKind) -> VitalStatus {
    let (min, max) = normal_range(kind);
    if value >= min && value <= max {
        return VitalStatus::Normal;
    }

    let danger = match kind {
        VitalSignKind::TasSistolica => value < 80.0 || value > 160.0,
        VitalSignKind::TadDiastolica => value < 50.0 || value > 100.0,
        VitalSignKind::Fc => value < 50.0 || value > 120.0,
        VitalSignKind::SatO2 => value < 90.0,
        VitalSignKind::Eva => value > 7.0,
    };

    if danger {
        VitalStatus::Danger
    } else {
        VitalStatus::Warning
    }
}
