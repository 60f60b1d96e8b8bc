use std::sync::Arc;

use kardex_app::{ActiveForm, AppError, AppView, Navigator};
use kardex_core::models::evaluation::EvaluationKind;
use kardex_forms::selection::ReportStep;
use kardex_forms::update::{CmaUpdate, ReportUpdate, ShortStayUpdate};
use kardex_store::MemoryStore;

use kardex_catalog::Catalog;

fn navigator() -> (Navigator, Arc<MemoryStore>) {
    let persistence = Arc::new(MemoryStore::new());
    (Navigator::new(Arc::new(Catalog::new()), persistence.clone()), persistence)
}

fn apply_cma(navigator: &mut Navigator, update: CmaUpdate) {
    match navigator.active_form_mut() {
        Some(ActiveForm::Cma(session)) => session.apply(update),
        _ => panic!("expected an open CMA form"),
    }
}

#[test]
fn starts_on_the_menu_with_empty_stores() {
    let (mut navigator, _) = navigator();
    assert_eq!(navigator.view(), AppView::Menu);
    assert!(navigator.evaluations().is_empty());
    assert!(navigator.reports().is_empty());

    navigator.open_evaluations();
    assert_eq!(navigator.view(), AppView::Evaluations);
    navigator.back_to_menu();
    assert_eq!(navigator.view(), AppView::Menu);
}

#[test]
fn cma_evaluation_full_lifecycle() {
    let (mut navigator, persistence) = navigator();
    navigator.open_evaluations();

    navigator.begin_new_evaluation().unwrap();
    navigator.choose_evaluation_type(EvaluationKind::Cma).unwrap();
    assert!(navigator.evaluation_workflow().is_none());
    assert!(matches!(navigator.active_form(), Some(ActiveForm::Cma(_))));

    // Unsaved edits never reach the store.
    assert!(navigator.evaluations().is_empty());

    apply_cma(&mut navigator, CmaUpdate::Nurse("Miren Sánchez".to_string()));
    navigator.save_active_form().unwrap();
    assert!(navigator.active_form().is_none());
    assert_eq!(navigator.evaluations().len(), 1);

    let id = navigator.evaluations()[0].id().to_string();
    assert!(id.starts_with("eval-"));
    assert!(persistence
        .contents(kardex_store::CollectionKey::Evaluations)
        .unwrap()
        .contains(&id));

    // Edit in place: same id, same position, updated content.
    navigator.edit_evaluation(&id).unwrap();
    apply_cma(&mut navigator, CmaUpdate::HabitualMedication("Enalapril 10mg".to_string()));
    navigator.save_active_form().unwrap();
    assert_eq!(navigator.evaluations().len(), 1);
    assert_eq!(navigator.evaluations()[0].id(), id);

    navigator.delete_evaluation(&id);
    assert!(navigator.evaluations().is_empty());
}

#[test]
fn validation_failure_keeps_the_form_open_and_store_untouched() {
    let (mut navigator, _) = navigator();
    navigator.begin_new_evaluation().unwrap();
    navigator.choose_evaluation_type(EvaluationKind::Cma).unwrap();

    let err = navigator.save_active_form().unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(navigator.active_form().is_some());
    assert!(navigator.evaluations().is_empty());

    apply_cma(&mut navigator, CmaUpdate::Nurse("Ana Pérez García".to_string()));
    navigator.save_active_form().unwrap();
    assert_eq!(navigator.evaluations().len(), 1);
}

#[test]
fn short_stay_prefill_flows_through_the_selection_modals() {
    let (mut navigator, _) = navigator();
    navigator.begin_new_evaluation().unwrap();
    navigator.choose_evaluation_type(EvaluationKind::SurgicalShort).unwrap();
    assert!(navigator.active_form().is_none());

    navigator.choose_evaluation_patient("patient-juan").unwrap();
    navigator.choose_evaluation_nurse("nurse-1").unwrap();

    let Some(ActiveForm::ShortStay(session)) = navigator.active_form() else {
        panic!("expected an open short-stay form");
    };
    assert_eq!(session.draft().patient_name, "Pérez García, Juan");
    // "No conocidas" is the none-known sentinel.
    assert!(!session.draft().has_allergies);

    match navigator.active_form_mut() {
        Some(ActiveForm::ShortStay(session)) => {
            session.next_page();
            session.apply(ShortStayUpdate::AdditionalComments("Sin incidencias.".to_string()));
        }
        _ => unreachable!(),
    }
    navigator.save_active_form().unwrap();
    assert_eq!(navigator.evaluations().len(), 1);
}

#[test]
fn only_one_form_at_a_time() {
    let (mut navigator, _) = navigator();
    navigator.begin_new_evaluation().unwrap();
    navigator.choose_evaluation_type(EvaluationKind::Cma).unwrap();

    assert!(matches!(navigator.begin_new_evaluation(), Err(AppError::FormAlreadyOpen)));
    assert!(matches!(navigator.begin_new_report(), Err(AppError::FormAlreadyOpen)));

    navigator.cancel_active_form();
    navigator.begin_new_report().unwrap();
}

#[test]
fn report_lifecycle_with_selection_and_rows() {
    let (mut navigator, _) = navigator();
    navigator.open_surgical_reports();

    navigator.begin_new_report().unwrap();
    navigator.choose_report_patient("patient-001").unwrap();
    assert!(matches!(
        navigator.report_workflow().unwrap().step(),
        ReportStep::ChooseSurgery { .. }
    ));
    navigator.choose_report_surgery("surgery-001").unwrap();
    assert!(navigator.report_workflow().is_none());

    match navigator.active_form_mut() {
        Some(ActiveForm::Report(session)) => {
            session.apply(ReportUpdate::AddVitalConstant);
            session.apply(ReportUpdate::Enfermera("Cristina Fernández Ruiz".to_string()));
            session.next_page();
        }
        _ => panic!("expected an open report form"),
    }
    navigator.save_active_form().unwrap();

    assert_eq!(navigator.reports().len(), 1);
    let report = &navigator.reports()[0];
    assert!(report.id.starts_with("report-"));
    assert_eq!(report.constantes_vitales.len(), 3);
}

#[test]
fn selection_cancel_and_back_leave_no_trace() {
    let (mut navigator, _) = navigator();

    navigator.begin_new_report().unwrap();
    navigator.choose_report_patient("patient-002").unwrap();
    navigator.report_selection_back();
    assert_eq!(navigator.report_workflow().unwrap().step(), &ReportStep::ChoosePatient);
    // Back from the first step closes the workflow.
    navigator.report_selection_back();
    assert!(navigator.report_workflow().is_none());

    navigator.begin_new_evaluation().unwrap();
    navigator.cancel_evaluation_selection();
    assert!(navigator.evaluation_workflow().is_none());
    assert!(navigator.active_form().is_none());
    assert!(navigator.evaluations().is_empty());
}

#[test]
fn lookup_miss_keeps_the_workflow_alive() {
    let (mut navigator, _) = navigator();
    navigator.begin_new_evaluation().unwrap();
    navigator.choose_evaluation_type(EvaluationKind::SurgicalShort).unwrap();

    let err = navigator.choose_evaluation_patient("patient-999").unwrap_err();
    assert!(matches!(err, AppError::Selection(_)));
    assert!(navigator.evaluation_workflow().is_some());
    assert!(navigator.active_form().is_none());
}

#[test]
fn export_is_guarded_against_concurrent_requests() {
    let (mut navigator, _) = navigator();
    navigator.begin_new_evaluation().unwrap();
    navigator.choose_evaluation_type(EvaluationKind::Cma).unwrap();
    apply_cma(&mut navigator, CmaUpdate::Nurse("Miren Sánchez".to_string()));
    navigator.save_active_form().unwrap();
    let id = navigator.evaluations()[0].id().to_string();

    let bytes = navigator.export_evaluation(&id).unwrap();
    assert!(!bytes.is_empty());
    assert!(navigator.export_in_flight());

    assert!(matches!(navigator.export_evaluation(&id), Err(AppError::ExportBusy)));

    // The record stays committed regardless of the export outcome.
    assert_eq!(navigator.evaluations().len(), 1);

    navigator.finish_export();
    assert!(navigator.export_evaluation(&id).is_ok());
}

#[test]
fn exporting_an_unknown_record_is_refused() {
    let (mut navigator, _) = navigator();
    assert!(matches!(
        navigator.export_report("report-404"),
        Err(AppError::UnknownRecord(_))
    ));
    assert!(!navigator.export_in_flight());
}

#[test]
fn stores_reload_from_persistence_on_startup() {
    let persistence = Arc::new(MemoryStore::new());
    {
        let mut navigator = Navigator::new(Arc::new(Catalog::new()), persistence.clone());
        navigator.begin_new_evaluation().unwrap();
        navigator.choose_evaluation_type(EvaluationKind::Cma).unwrap();
        apply_cma(&mut navigator, CmaUpdate::Nurse("Miren Sánchez".to_string()));
        navigator.save_active_form().unwrap();
    }

    let navigator = Navigator::new(Arc::new(Catalog::new()), persistence);
    assert_eq!(navigator.evaluations().len(), 1);
    assert_eq!(navigator.evaluations()[0].nurse(), "Miren Sánchez");
}
