//! Selection workflows.
//!
//! Two short linear state machines gather the directory inputs a prefilled
//! record needs before the form session takes over. Back discards only the
//! current step's partial selection; dropping the workflow (cancel) discards
//! everything and nothing is created.

use kardex_core::models::directory::{Directory, Surgery};
use kardex_core::models::evaluation::{EvaluationKind, NursingEvaluation};
use kardex_core::models::surgical_report::SurgicalReport;

use crate::error::{LookupKind, SelectionError};
use crate::factory;

// ---------------------------------------------------------------------------
// Evaluation-type-driven workflow
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationStep {
    ChooseType,
    ChoosePatient {
        kind: EvaluationKind,
    },
    ChooseNurse {
        kind: EvaluationKind,
        patient_id: String,
    },
}

/// Gathers the inputs for a new nursing evaluation: the type, and — when
/// the type prefills from the directory — a patient and a nurse.
#[derive(Debug, Clone)]
pub struct EvaluationWorkflow {
    step: EvaluationStep,
}

impl EvaluationWorkflow {
    pub fn new() -> Self {
        Self { step: EvaluationStep::ChooseType }
    }

    pub fn step(&self) -> &EvaluationStep {
        &self.step
    }

    /// Pick the evaluation type. CMA needs no directory input and hands an
    /// empty record off immediately; the short-stay variant advances to
    /// patient selection and returns `None`.
    pub fn choose_type(&mut self, kind: EvaluationKind) -> Option<NursingEvaluation> {
        match kind {
            EvaluationKind::Cma => Some(factory::empty_evaluation(kind)),
            EvaluationKind::SurgicalShort => {
                self.step = EvaluationStep::ChoosePatient { kind };
                None
            }
        }
    }

    pub fn choose_patient(
        &mut self,
        directory: &dyn Directory,
        patient_id: &str,
    ) -> Result<(), SelectionError> {
        let EvaluationStep::ChoosePatient { kind } = &self.step else {
            return Ok(());
        };
        let kind = *kind;
        if directory.patient(patient_id).is_none() {
            return Err(SelectionError::LookupMiss {
                kind: LookupKind::Patient,
                id: patient_id.to_string(),
            });
        }
        self.step = EvaluationStep::ChooseNurse {
            kind,
            patient_id: patient_id.to_string(),
        };
        Ok(())
    }

    /// Pick the nurse and prefill. A nurse miss stays on this step; a
    /// patient that vanished since selection sends the workflow back to
    /// patient choice. A partially-prefilled record is never produced.
    pub fn choose_nurse(
        &mut self,
        directory: &dyn Directory,
        nurse_id: &str,
    ) -> Result<NursingEvaluation, SelectionError> {
        let EvaluationStep::ChooseNurse { kind, patient_id } = self.step.clone() else {
            return Err(SelectionError::LookupMiss {
                kind: LookupKind::Nurse,
                id: nurse_id.to_string(),
            });
        };

        let Some(patient) = directory.patient(&patient_id) else {
            self.step = EvaluationStep::ChoosePatient { kind };
            return Err(SelectionError::LookupMiss {
                kind: LookupKind::Patient,
                id: patient_id,
            });
        };
        let Some(nurse) = directory.nurse(nurse_id) else {
            return Err(SelectionError::LookupMiss {
                kind: LookupKind::Nurse,
                id: nurse_id.to_string(),
            });
        };

        Ok(NursingEvaluation::SurgicalShort(factory::prefill_short_stay(patient, nurse)))
    }

    /// Step back, forgetting only the current step's selection. Returns
    /// false from the first step (the caller closes the workflow instead).
    pub fn back(&mut self) -> bool {
        match &self.step {
            EvaluationStep::ChooseType => false,
            EvaluationStep::ChoosePatient { .. } => {
                self.step = EvaluationStep::ChooseType;
                true
            }
            EvaluationStep::ChooseNurse { kind, .. } => {
                self.step = EvaluationStep::ChoosePatient { kind: *kind };
                true
            }
        }
    }
}

impl Default for EvaluationWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Surgical-report workflow
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportStep {
    ChoosePatient,
    /// Terminal display state when the patient has no scheduled surgeries:
    /// the surgery list may be empty and only back is available.
    ChooseSurgery { patient_id: String },
}

#[derive(Debug, Clone)]
pub struct ReportWorkflow {
    step: ReportStep,
}

impl ReportWorkflow {
    pub fn new() -> Self {
        Self { step: ReportStep::ChoosePatient }
    }

    pub fn step(&self) -> &ReportStep {
        &self.step
    }

    pub fn choose_patient(
        &mut self,
        directory: &dyn Directory,
        patient_id: &str,
    ) -> Result<(), SelectionError> {
        if directory.patient(patient_id).is_none() {
            return Err(SelectionError::LookupMiss {
                kind: LookupKind::Patient,
                id: patient_id.to_string(),
            });
        }
        self.step = ReportStep::ChooseSurgery { patient_id: patient_id.to_string() };
        Ok(())
    }

    /// The surgeries offered at the current step. Empty until a patient is
    /// chosen, and possibly empty afterwards too.
    pub fn surgeries<'d>(&self, directory: &'d dyn Directory) -> Vec<&'d Surgery> {
        match &self.step {
            ReportStep::ChoosePatient => Vec::new(),
            ReportStep::ChooseSurgery { patient_id } => {
                directory.surgeries_for_patient(patient_id)
            }
        }
    }

    /// Pick a surgery from the offered list and prefill the report. A
    /// surgery that does not resolve — or that belongs to a different
    /// patient — aborts the step; a vanished patient returns the workflow
    /// to patient choice.
    pub fn choose_surgery(
        &mut self,
        directory: &dyn Directory,
        surgery_id: &str,
    ) -> Result<SurgicalReport, SelectionError> {
        let ReportStep::ChooseSurgery { patient_id } = self.step.clone() else {
            return Err(SelectionError::LookupMiss {
                kind: LookupKind::Surgery,
                id: surgery_id.to_string(),
            });
        };

        let Some(patient) = directory.patient(&patient_id) else {
            self.step = ReportStep::ChoosePatient;
            return Err(SelectionError::LookupMiss {
                kind: LookupKind::Patient,
                id: patient_id,
            });
        };
        let surgery = directory
            .surgery(surgery_id)
            .filter(|s| s.patient_id == patient.id)
            .ok_or_else(|| SelectionError::LookupMiss {
                kind: LookupKind::Surgery,
                id: surgery_id.to_string(),
            })?;

        Ok(factory::prefill_surgical_report(patient, surgery, directory.ward_vitals()))
    }

    pub fn back(&mut self) -> bool {
        match &self.step {
            ReportStep::ChoosePatient => false,
            ReportStep::ChooseSurgery { .. } => {
                self.step = ReportStep::ChoosePatient;
                true
            }
        }
    }
}

impl Default for ReportWorkflow {
    fn default() -> Self {
        Self::new()
    }
}
