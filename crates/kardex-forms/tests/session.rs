use kardex_core::models::directory::Directory;
use kardex_core::models::surgical_report::VitalOrigin;
use kardex_forms::error::FormError;
use kardex_forms::factory;
use kardex_forms::session::FormSession;
use kardex_forms::update::{
    CmaUpdate, MedicationField, ReportUpdate, ShortStayUpdate, VitalConstantField,
};

use kardex_catalog::Catalog;

fn report_session() -> FormSession<kardex_core::models::surgical_report::SurgicalReport> {
    let catalog = Catalog::new();
    let patient = catalog.patient("patient-001").unwrap();
    let surgery = catalog.surgery("surgery-001").unwrap();
    let report = factory::prefill_surgical_report(patient, surgery, catalog.ward_vitals());
    FormSession::start_new(report)
}

#[test]
fn submit_requires_a_nurse_name() {
    let session = FormSession::start_new(factory::empty_cma());
    assert_eq!(session.submit(), Err(FormError::MissingNurseName));
}

#[test]
fn whitespace_only_nurse_name_is_rejected_and_draft_preserved() {
    let mut session = FormSession::start_new(factory::empty_cma());
    session.apply(CmaUpdate::Nurse("   ".to_string()));
    session.apply(CmaUpdate::HabitualMedication("Omeprazol 20mg".to_string()));

    assert_eq!(session.submit(), Err(FormError::MissingNurseName));

    // Failure leaves the in-progress draft untouched for correction.
    assert_eq!(session.draft().habitual_medication, "Omeprazol 20mg");
    session.apply(CmaUpdate::Nurse("María García López".to_string()));
    let record = session.submit().expect("valid after correction");
    assert_eq!(record.nurse, "María García López");
    assert_eq!(record.habitual_medication, "Omeprazol 20mg");
}

#[test]
fn submit_assigns_identity_to_new_records_once() {
    let mut session = FormSession::start_new(factory::empty_cma());
    session.apply(CmaUpdate::Nurse("Miren Sánchez".to_string()));

    let record = session.submit().unwrap();
    assert!(record.id.starts_with("eval-"));
    assert!(record.date.is_some());
}

#[test]
fn editing_preserves_id_and_creation_date() {
    let mut session = FormSession::start_new(factory::empty_cma());
    session.apply(CmaUpdate::Nurse("Miren Sánchez".to_string()));
    let committed = session.submit().unwrap();

    let mut edit = FormSession::start_edit(committed.clone());
    edit.apply(CmaUpdate::HabitualMedication("Enalapril 10mg".to_string()));
    let updated = edit.submit().unwrap();

    assert_eq!(updated.id, committed.id);
    assert_eq!(updated.date, committed.date);
    assert_eq!(updated.habitual_medication, "Enalapril 10mg");
}

#[test]
fn page_navigation_preserves_edits_and_gates_submit() {
    let mut session = FormSession::start_new(factory::empty_short_stay());
    assert_eq!(session.page(), 1);
    assert!(!session.can_submit());

    session.apply(ShortStayUpdate::PersonalHistory("Asma bronquial.".to_string()));
    session.next_page();
    assert_eq!(session.page(), 2);
    assert!(session.can_submit());

    session.apply(ShortStayUpdate::AdditionalComments("Sin incidencias.".to_string()));
    session.prev_page();
    assert_eq!(session.page(), 1);

    // Edits made on both pages survive navigation.
    assert_eq!(session.draft().personal_history, "Asma bronquial.");
    assert_eq!(session.draft().additional_comments, "Sin incidencias.");

    // Navigation is clamped at both ends.
    session.prev_page();
    assert_eq!(session.page(), 1);
    session.next_page();
    session.next_page();
    assert_eq!(session.page(), 2);
}

#[test]
fn cma_is_single_page() {
    let mut session = FormSession::start_new(factory::empty_cma());
    assert!(session.can_submit());
    session.next_page();
    assert_eq!(session.page(), 1);
}

#[test]
fn added_vital_constants_are_quirofano_rows() {
    let mut session = report_session();
    let seeded = session.draft().constantes_vitales.len();

    session.apply(ReportUpdate::AddVitalConstant);
    let rows = &session.draft().constantes_vitales;
    assert_eq!(rows.len(), seeded + 1);

    let added = rows.last().unwrap();
    assert!(added.id.starts_with("vc-"));
    assert_eq!(added.origen, VitalOrigin::Quirofano);
    assert_eq!(added.eva, 0);
}

#[test]
fn ward_vital_rows_cannot_be_removed_or_edited() {
    let mut session = report_session();
    let before = session.draft().constantes_vitales.clone();
    let ward_id = before
        .iter()
        .find(|c| c.origen == VitalOrigin::Planta)
        .unwrap()
        .id
        .clone();

    session.apply(ReportUpdate::RemoveVitalConstant { id: ward_id.clone() });
    assert_eq!(session.draft().constantes_vitales, before);

    session.apply(ReportUpdate::EditVitalConstant {
        id: ward_id,
        field: VitalConstantField::Fc(999),
    });
    assert_eq!(session.draft().constantes_vitales, before);
}

#[test]
fn quirofano_vital_rows_are_fully_managed() {
    let mut session = report_session();
    session.apply(ReportUpdate::AddVitalConstant);
    let id = session.draft().constantes_vitales.last().unwrap().id.clone();

    session.apply(ReportUpdate::EditVitalConstant {
        id: id.clone(),
        field: VitalConstantField::TasSistolica(145),
    });
    let row = session
        .draft()
        .constantes_vitales
        .iter()
        .find(|c| c.id == id)
        .unwrap();
    assert_eq!(row.tas_sistolica, 145);

    let len = session.draft().constantes_vitales.len();
    session.apply(ReportUpdate::RemoveVitalConstant { id });
    assert_eq!(session.draft().constantes_vitales.len(), len - 1);
}

#[test]
fn medication_rows_append_edit_and_remove() {
    let mut session = report_session();
    session.apply(ReportUpdate::AddMedicationRow);
    let id = session.draft().medicacion_administrada[0].id.clone();
    assert!(id.starts_with("med-"));

    session.apply(ReportUpdate::EditMedicationRow {
        id: id.clone(),
        field: MedicationField::Medicacion("Paracetamol".to_string()),
    });
    session.apply(ReportUpdate::EditMedicationRow {
        id: id.clone(),
        field: MedicationField::Dosis("1g IV".to_string()),
    });
    let row = &session.draft().medicacion_administrada[0];
    assert_eq!(row.medicacion, "Paracetamol");
    assert_eq!(row.dosis, "1g IV");

    session.apply(ReportUpdate::RemoveMedicationRow { id });
    assert!(session.draft().medicacion_administrada.is_empty());
}

#[test]
fn report_submit_keeps_prefill_creation_instant() {
    let mut session = report_session();
    let created = session.draft().fecha_creacion;
    session.apply(ReportUpdate::Enfermera("Cristina Fernández Ruiz".to_string()));

    let report = session.submit().unwrap();
    assert!(report.id.starts_with("report-"));
    assert_eq!(report.fecha_creacion, created);
}
