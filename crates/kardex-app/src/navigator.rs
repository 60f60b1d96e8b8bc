//! The application navigator.
//!
//! Owns the view/mode switch, at most one selection workflow and at most
//! one form session at a time, both record stores, and the export guard.
//! Everything here runs on the single event-processing path; no operation
//! outlives the call that triggered it except an externally-owned export,
//! which is tracked only by the in-flight flag.

use std::sync::Arc;

use kardex_core::models::directory::Directory;
use kardex_core::models::evaluation::{
    CmaEvaluation, EvaluationKind, NursingEvaluation, ShortStayEvaluation,
};
use kardex_core::models::surgical_report::SurgicalReport;
use kardex_forms::selection::{EvaluationWorkflow, ReportWorkflow};
use kardex_forms::session::FormSession;
use kardex_store::{CollectionKey, FileStore, MemoryStore, Persistence, RecordStore};

use kardex_catalog::Catalog;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Menu,
    Evaluations,
    SurgicalReports,
}

/// The single open form session, if any.
pub enum ActiveForm {
    ShortStay(FormSession<ShortStayEvaluation>),
    Cma(FormSession<CmaEvaluation>),
    Report(FormSession<SurgicalReport>),
}

pub struct Navigator {
    view: AppView,
    directory: Arc<dyn Directory>,
    evaluations: RecordStore<NursingEvaluation>,
    reports: RecordStore<SurgicalReport>,
    evaluation_workflow: Option<EvaluationWorkflow>,
    report_workflow: Option<ReportWorkflow>,
    active_form: Option<ActiveForm>,
    export_in_flight: bool,
}

impl Navigator {
    /// Seed both stores from persistence and land on the main menu.
    pub fn new(directory: Arc<dyn Directory>, persistence: Arc<dyn Persistence>) -> Self {
        let evaluations = RecordStore::open(CollectionKey::Evaluations, persistence.clone());
        let reports = RecordStore::open(CollectionKey::SurgicalReports, persistence);
        tracing::info!(
            evaluations = evaluations.len(),
            reports = reports.len(),
            "navigator started",
        );
        Self {
            view: AppView::Menu,
            directory,
            evaluations,
            reports,
            evaluation_workflow: None,
            report_workflow: None,
            active_form: None,
            export_in_flight: false,
        }
    }

    /// Standard wiring: the unit catalog plus file persistence in the
    /// per-user config dir (memory-only when the platform has none).
    pub fn standalone() -> Self {
        let persistence: Arc<dyn Persistence> = match FileStore::default_location() {
            Some(dir) => Arc::new(FileStore::new(dir)),
            None => Arc::new(MemoryStore::new()),
        };
        Self::new(Arc::new(Catalog::new()), persistence)
    }

    pub fn view(&self) -> AppView {
        self.view
    }

    pub fn open_evaluations(&mut self) {
        self.view = AppView::Evaluations;
    }

    pub fn open_surgical_reports(&mut self) {
        self.view = AppView::SurgicalReports;
    }

    pub fn back_to_menu(&mut self) {
        self.view = AppView::Menu;
    }

    pub fn directory(&self) -> &dyn Directory {
        self.directory.as_ref()
    }

    pub fn evaluations(&self) -> &[NursingEvaluation] {
        self.evaluations.list()
    }

    pub fn reports(&self) -> &[SurgicalReport] {
        self.reports.list()
    }

    pub fn active_form(&self) -> Option<&ActiveForm> {
        self.active_form.as_ref()
    }

    /// The rendering layer applies field updates through this handle.
    pub fn active_form_mut(&mut self) -> Option<&mut ActiveForm> {
        self.active_form.as_mut()
    }

    // -----------------------------------------------------------------------
    // New-evaluation workflow
    // -----------------------------------------------------------------------

    /// "Nueva Evaluación": opens the type-choice modal.
    pub fn begin_new_evaluation(&mut self) -> Result<(), AppError> {
        self.ensure_no_open_form()?;
        self.evaluation_workflow = Some(EvaluationWorkflow::new());
        Ok(())
    }

    pub fn evaluation_workflow(&self) -> Option<&EvaluationWorkflow> {
        self.evaluation_workflow.as_ref()
    }

    pub fn choose_evaluation_type(&mut self, kind: EvaluationKind) -> Result<(), AppError> {
        let Some(workflow) = self.evaluation_workflow.as_mut() else {
            return Ok(());
        };
        if let Some(record) = workflow.choose_type(kind) {
            self.evaluation_workflow = None;
            self.open_form_for(record, false);
        }
        Ok(())
    }

    pub fn choose_evaluation_patient(&mut self, patient_id: &str) -> Result<(), AppError> {
        if let Some(workflow) = self.evaluation_workflow.as_mut() {
            workflow.choose_patient(self.directory.as_ref(), patient_id)?;
        }
        Ok(())
    }

    pub fn choose_evaluation_nurse(&mut self, nurse_id: &str) -> Result<(), AppError> {
        let Some(workflow) = self.evaluation_workflow.as_mut() else {
            return Ok(());
        };
        let record = workflow.choose_nurse(self.directory.as_ref(), nurse_id)?;
        self.evaluation_workflow = None;
        self.open_form_for(record, false);
        Ok(())
    }

    pub fn evaluation_selection_back(&mut self) {
        if let Some(workflow) = self.evaluation_workflow.as_mut()
            && !workflow.back()
        {
            self.evaluation_workflow = None;
        }
    }

    /// Cancel discards the entire in-progress selection; nothing is created.
    pub fn cancel_evaluation_selection(&mut self) {
        self.evaluation_workflow = None;
    }

    // -----------------------------------------------------------------------
    // New-report workflow
    // -----------------------------------------------------------------------

    pub fn begin_new_report(&mut self) -> Result<(), AppError> {
        self.ensure_no_open_form()?;
        self.report_workflow = Some(ReportWorkflow::new());
        Ok(())
    }

    pub fn report_workflow(&self) -> Option<&ReportWorkflow> {
        self.report_workflow.as_ref()
    }

    pub fn choose_report_patient(&mut self, patient_id: &str) -> Result<(), AppError> {
        if let Some(workflow) = self.report_workflow.as_mut() {
            workflow.choose_patient(self.directory.as_ref(), patient_id)?;
        }
        Ok(())
    }

    pub fn choose_report_surgery(&mut self, surgery_id: &str) -> Result<(), AppError> {
        let Some(workflow) = self.report_workflow.as_mut() else {
            return Ok(());
        };
        let report = workflow.choose_surgery(self.directory.as_ref(), surgery_id)?;
        self.report_workflow = None;
        self.active_form = Some(ActiveForm::Report(FormSession::start_new(report)));
        Ok(())
    }

    pub fn report_selection_back(&mut self) {
        if let Some(workflow) = self.report_workflow.as_mut()
            && !workflow.back()
        {
            self.report_workflow = None;
        }
    }

    pub fn cancel_report_selection(&mut self) {
        self.report_workflow = None;
    }

    // -----------------------------------------------------------------------
    // Edit / delete / save
    // -----------------------------------------------------------------------

    pub fn edit_evaluation(&mut self, id: &str) -> Result<(), AppError> {
        self.ensure_no_open_form()?;
        let record = self
            .evaluations
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::UnknownRecord(id.to_string()))?;
        self.open_form_for(record, true);
        Ok(())
    }

    pub fn edit_report(&mut self, id: &str) -> Result<(), AppError> {
        self.ensure_no_open_form()?;
        let report = self
            .reports
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::UnknownRecord(id.to_string()))?;
        self.active_form = Some(ActiveForm::Report(FormSession::start_edit(report)));
        Ok(())
    }

    /// Deletion is confirmed by the user at the UI boundary before this is
    /// called; unknown ids are a silent no-op.
    pub fn delete_evaluation(&mut self, id: &str) {
        self.evaluations.remove(id);
    }

    pub fn delete_report(&mut self, id: &str) {
        self.reports.remove(id);
    }

    /// Submit the open form and commit the result to the matching store.
    /// A validation failure leaves the session open, draft intact.
    pub fn save_active_form(&mut self) -> Result<(), AppError> {
        let form = self.active_form.as_ref().ok_or(AppError::NoActiveForm)?;
        match form {
            ActiveForm::ShortStay(session) => {
                let record = session.submit()?;
                self.evaluations.upsert(NursingEvaluation::SurgicalShort(record));
            }
            ActiveForm::Cma(session) => {
                let record = session.submit()?;
                self.evaluations.upsert(NursingEvaluation::Cma(record));
            }
            ActiveForm::Report(session) => {
                let report = session.submit()?;
                self.reports.upsert(report);
            }
        }
        self.active_form = None;
        Ok(())
    }

    /// Discard the open form without touching the stores.
    pub fn cancel_active_form(&mut self) {
        self.active_form = None;
    }

    // -----------------------------------------------------------------------
    // Export
    // -----------------------------------------------------------------------

    /// Render a committed evaluation to document bytes. Refused while
    /// another export is outstanding; the record stays committed whatever
    /// the export outcome.
    pub fn export_evaluation(&mut self, id: &str) -> Result<Vec<u8>, AppError> {
        self.ensure_export_idle()?;
        let record = self
            .evaluations
            .get(id)
            .ok_or_else(|| AppError::UnknownRecord(id.to_string()))?;
        let bytes = kardex_export::evaluation_document(record)?;
        self.export_in_flight = true;
        Ok(bytes)
    }

    pub fn export_report(&mut self, id: &str) -> Result<Vec<u8>, AppError> {
        self.ensure_export_idle()?;
        let report = self
            .reports
            .get(id)
            .ok_or_else(|| AppError::UnknownRecord(id.to_string()))?;
        let bytes = kardex_export::report_document(report)?;
        self.export_in_flight = true;
        Ok(bytes)
    }

    pub fn export_in_flight(&self) -> bool {
        self.export_in_flight
    }

    /// Called when the externally-owned download/print completes, in
    /// success or failure; the core never awaits it.
    pub fn finish_export(&mut self) {
        self.export_in_flight = false;
    }

    // -----------------------------------------------------------------------

    fn open_form_for(&mut self, record: NursingEvaluation, editing: bool) {
        self.active_form = Some(match record {
            NursingEvaluation::SurgicalShort(e) => ActiveForm::ShortStay(if editing {
                FormSession::start_edit(e)
            } else {
                FormSession::start_new(e)
            }),
            NursingEvaluation::Cma(e) => ActiveForm::Cma(if editing {
                FormSession::start_edit(e)
            } else {
                FormSession::start_new(e)
            }),
        });
    }

    fn ensure_no_open_form(&self) -> Result<(), AppError> {
        if self.active_form.is_some() {
            return Err(AppError::FormAlreadyOpen);
        }
        Ok(())
    }

    fn ensure_export_idle(&self) -> Result<(), AppError> {
        if self.export_in_flight {
            return Err(AppError::ExportBusy);
        }
        Ok(())
    }
}
