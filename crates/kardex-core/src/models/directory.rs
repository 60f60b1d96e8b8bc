use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::surgical_report::VitalConstant;

/// A patient known to the ward, with everything the evaluation and report
/// prefill paths need: demographics, clinical history, the last vitals as
/// written on the paper sheet, and the numeric admission vitals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    pub id: String,
    pub nombre: String,
    pub direccion: String,
    pub nis: String,
    pub telefono: String,
    pub fecha_nacimiento: String,
    pub alergias: String,
    pub antecedentes_personales: String,
    pub medicacion_habitual: String,
    /// Problemas y procesos clínicos activos.
    pub ppcc: String,

    // Last ward-sheet vitals (recorded as entered).
    pub temperatura: String,
    pub via_anular: String,
    pub tas_sistolica: String,
    pub tad_diastolica: String,
    pub fc: String,
    pub fr: String,
    pub sat_o2: String,
    pub aire_amb: String,

    // Admission vitals for the hospitalization snapshot.
    pub ta_s: i32,
    pub ta_d: i32,
    pub fc_reposo: i32,
    pub enfermera_planta: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Nurse {
    pub id: String,
    pub nombre: String,
    pub numero_colegiado: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Surgery {
    pub id: String,
    pub patient_id: String,
    pub intervencion: String,
    pub lateralidad: String,
    pub cirujano: String,
    pub anestesista: String,
    pub tipo_anestesia: String,
    pub fecha_entrada_quirofano: String,
    pub fecha_salida_quirofano: String,
    pub enfermera_quirofano: String,
    pub medicacion_quirofano: String,
    pub anestesista_urpa: String,
    pub enfermera_urpa: String,
    pub medicacion_pre_urpa: String,
    pub fecha_entrada_urpa: String,
    pub fecha_salida_urpa: String,
}

/// Read-only lookup service for patients, nurses, surgeries and the ward's
/// current vital readings. The selection workflows and record factory only
/// ever consume this trait; the concrete directory lives elsewhere.
pub trait Directory: Send + Sync {
    fn patient(&self, id: &str) -> Option<&Patient>;

    fn nurse(&self, id: &str) -> Option<&Nurse>;

    fn surgery(&self, id: &str) -> Option<&Surgery>;

    /// Surgeries scheduled for one patient, in directory order. May be empty.
    fn surgeries_for_patient(&self, patient_id: &str) -> Vec<&Surgery>;

    fn patients(&self) -> &[Patient];

    fn nurses(&self) -> &[Nurse];

    /// The ward's currently known readings, used to seed a new report's
    /// vital-constants table. Always `planta` origin.
    fn ward_vitals(&self) -> Vec<VitalConstant>;
}
