//! kardex-catalog
//!
//! Read-only directory of patients, nurses, scheduled surgeries and ward
//! vital readings. All data is hardcoded and fictional; this crate stands
//! in for the hospital information system in a production deployment and
//! is the only implementation of [`Directory`] the application ships.

use std::sync::LazyLock;

use kardex_core::models::directory::{Directory, Nurse, Patient, Surgery};
use kardex_core::models::surgical_report::{VitalConstant, VitalOrigin};

mod data;

/// The unit's static directory.
#[derive(Debug, Default)]
pub struct Catalog;

impl Catalog {
    pub fn new() -> Self {
        Catalog
    }
}

static PATIENTS: LazyLock<Vec<Patient>> = LazyLock::new(data::patients);
static NURSES: LazyLock<Vec<Nurse>> = LazyLock::new(data::nurses);
static SURGERIES: LazyLock<Vec<Surgery>> = LazyLock::new(data::surgeries);
static WARD_VITALS: LazyLock<Vec<VitalConstant>> = LazyLock::new(|| {
    vec![
        VitalConstant {
            id: "vc-001".to_string(),
            hora: "07:00".to_string(),
            tas_sistolica: 130,
            tad_diastolica: 82,
            fc: 76,
            sat_o2: 97,
            eva: 2,
            origen: VitalOrigin::Planta,
        },
        VitalConstant {
            id: "vc-002".to_string(),
            hora: "08:00".to_string(),
            tas_sistolica: 135,
            tad_diastolica: 85,
            fc: 78,
            sat_o2: 98,
            eva: 1,
            origen: VitalOrigin::Planta,
        },
    ]
});

impl Directory for Catalog {
    fn patient(&self, id: &str) -> Option<&Patient> {
        PATIENTS.iter().find(|p| p.id == id)
    }

    fn nurse(&self, id: &str) -> Option<&Nurse> {
        NURSES.iter().find(|n| n.id == id)
    }

    fn surgery(&self, id: &str) -> Option<&Surgery> {
        SURGERIES.iter().find(|s| s.id == id)
    }

    fn surgeries_for_patient(&self, patient_id: &str) -> Vec<&Surgery> {
        SURGERIES.iter().filter(|s| s.patient_id == patient_id).collect()
    }

    fn patients(&self) -> &[Patient] {
        &PATIENTS
    }

    fn nurses(&self) -> &[Nurse] {
        &NURSES
    }

    fn ward_vitals(&self) -> Vec<VitalConstant> {
        WARD_VITALS.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_surgery_references_a_known_patient() {
        let catalog = Catalog::new();
        for surgery in SURGERIES.iter() {
            assert!(
                catalog.patient(&surgery.patient_id).is_some(),
                "surgery {} references unknown patient {}",
                surgery.id,
                surgery.patient_id,
            );
        }
    }

    #[test]
    fn ward_vitals_are_planta_origin() {
        for row in Catalog::new().ward_vitals() {
            assert_eq!(row.origen, VitalOrigin::Planta);
        }
    }

    #[test]
    fn lookups_resolve_and_miss() {
        let catalog = Catalog::new();
        assert!(catalog.patient("patient-001").is_some());
        assert!(catalog.patient("patient-999").is_none());
        assert!(catalog.nurse("nurse-1").is_some());
        assert!(!catalog.surgeries_for_patient("patient-001").is_empty());
        assert!(catalog.surgeries_for_patient("no-such-patient").is_empty());
    }
}
