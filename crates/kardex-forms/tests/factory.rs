use kardex_core::models::directory::Directory;
use kardex_core::models::evaluation::{ChecklistAnswer, EvaluationKind, NursingEvaluation};
use kardex_core::models::surgical_report::VitalOrigin;
use kardex_forms::factory;

use kardex_catalog::Catalog;

#[test]
fn empty_cma_matches_the_blank_paper_form() {
    let evaluation = factory::empty_cma();

    assert!(evaluation.id.is_empty());
    assert!(evaluation.date.is_none());
    assert_eq!(evaluation.evaluation_name, factory::CMA_NAME);

    assert!(evaluation.respiration.no_alteration);
    assert!(evaluation.elimination.no_alteration);
    assert!(evaluation.elimination.urinary_pattern.continent);
    assert!(evaluation.elimination.intestinal_pattern.continent);
    assert!(evaluation.mobilization.autonomous);
    assert!(evaluation.rest_and_sleep.normal_pattern);
    assert!(evaluation.communication.no_alteration);
    assert!(evaluation.communication.emotional_state.calm);
    assert!(evaluation.communication.oriented);
    assert_eq!(evaluation.learning.knowledge_level, 3);

    let checklist = &evaluation.presurgical_checklist;
    assert_eq!(checklist.identification_bracelet, ChecklistAnswer::Yes);
    assert_eq!(checklist.prosthesis_removed, ChecklistAnswer::NotApplicable);
    assert_eq!(checklist.premedication, ChecklistAnswer::NotApplicable);
    assert!(checklist.premedication_details.is_empty());
}

#[test]
fn empty_short_stay_defaults() {
    let evaluation = factory::empty_short_stay();

    assert_eq!(evaluation.evaluation_name, factory::SHORT_STAY_NAME);
    assert!(evaluation.respiration.no_alteration);
    assert!(evaluation.feeding.no_alteration);
    assert!(evaluation.feeding.autonomous);
    assert!(evaluation.elimination.urinary_pattern.autonomous);
    assert!(evaluation.elimination.urinary_pattern.physiological);
    assert!(evaluation.elimination.intestinal_pattern.autonomous);
    assert!(evaluation.safety.no_infection_risk);
    assert!(!evaluation.safety.infection_risk);
    assert!(evaluation.psychosocial.calm);
    assert!(evaluation.nurse.is_empty());
}

#[test]
fn empty_evaluation_dispatches_on_kind() {
    assert!(matches!(
        factory::empty_evaluation(EvaluationKind::Cma),
        NursingEvaluation::Cma(_)
    ));
    assert!(matches!(
        factory::empty_evaluation(EvaluationKind::SurgicalShort),
        NursingEvaluation::SurgicalShort(_)
    ));
}

#[test]
fn short_stay_prefill_copies_the_directory_snapshot() {
    let catalog = Catalog::new();
    let patient = catalog.patient("patient-001").unwrap();
    let nurse = catalog.nurse("nurse-1").unwrap();

    let evaluation = factory::prefill_short_stay(patient, nurse);

    assert_eq!(evaluation.patient_name, "García López, María");
    assert_eq!(evaluation.patient_nis, "307535");
    assert_eq!(evaluation.tas_sistolica, "135");
    assert_eq!(evaluation.sat_o2, "98");
    assert_eq!(evaluation.nurse, "Miren Sánchez");
    assert_eq!(evaluation.nurse_collegiate_number, "12345");
    assert_eq!(evaluation.signed_by, "Miren Sánchez");
    assert!(!evaluation.evaluation_date.is_empty());

    // Known allergies set the flag and seed the detail text.
    assert!(evaluation.has_allergies);
    assert_eq!(evaluation.allergies_details, "Penicilina, Contraste yodado");
}

#[test]
fn none_known_allergy_sentinel_clears_the_flag() {
    let catalog = Catalog::new();
    let patient = catalog.patient("patient-juan").unwrap();
    assert_eq!(patient.alergias, "No conocidas");
    let nurse = catalog.nurse("nurse-2").unwrap();

    let evaluation = factory::prefill_short_stay(patient, nurse);
    assert!(!evaluation.has_allergies);
    assert!(evaluation.allergies_details.is_empty());
}

#[test]
fn surgical_report_prefill_maps_every_snapshot_block() {
    let catalog = Catalog::new();
    let patient = catalog.patient("patient-001").unwrap();
    let surgery = catalog.surgery("surgery-001").unwrap();

    let report = factory::prefill_surgical_report(patient, surgery, catalog.ward_vitals());

    assert!(report.id.is_empty());
    assert_eq!(report.patient_id, "patient-001");
    assert_eq!(report.surgery_id, "surgery-001");

    assert_eq!(report.alergias, "Penicilina, Contraste yodado");
    assert_eq!(report.ta_s, 135);
    assert_eq!(report.enfermera_planta, "Ana Martínez Ruiz");

    assert_eq!(report.intervencion, "Colecistectomía laparoscópica");
    assert_eq!(report.cirujano, "Dr. Ramón Pérez Castillo");
    assert_eq!(report.enfermera_urpa_final, surgery.enfermera_urpa);

    // All twelve checklist booleans start unchecked.
    assert!(!report.retirada_dispositivos);
    assert!(!report.retirada_dentadura);
    assert!(!report.rasurado_zona);
    assert!(!report.pruebas_ecg);
    assert!(!report.pruebas_rx);
    assert!(!report.pruebas_as);
    assert!(!report.pruebas_inf_externo);
    assert!(!report.verificacion_cirujano);
    assert!(!report.verificacion_anestesista);
    assert!(!report.marcaje);
    assert!(!report.pruebas_cruzadas);
    assert!(!report.transfusion);

    // Vital constants are seeded from the ward.
    assert_eq!(report.constantes_vitales.len(), 2);
    assert!(report
        .constantes_vitales
        .iter()
        .all(|c| c.origen == VitalOrigin::Planta));
    assert!(report.medicacion_administrada.is_empty());
    assert!(report.enfermera.is_empty());
}
