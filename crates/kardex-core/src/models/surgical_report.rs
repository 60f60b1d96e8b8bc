use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Provenance of a vital-constant reading.
///
/// Ward (`planta`) readings are copied in at prefill time and are immutable
/// seed data; only operating-room (`quirofano`) readings are user-managed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum VitalOrigin {
    Planta,
    Quirofano,
}

/// One row of the vital-constants table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalConstant {
    pub id: String,
    /// Wall-clock HH:MM.
    pub hora: String,
    pub tas_sistolica: i32,
    pub tad_diastolica: i32,
    pub fc: i32,
    pub sat_o2: i32,
    /// Pain score on the EVA scale, 0-10.
    pub eva: i32,
    pub origen: VitalOrigin,
}

/// One row of the administered-medication table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MedicationRow {
    pub id: String,
    pub hora: String,
    pub medicacion: String,
    pub dosis: String,
}

/// Informe Quirúrgico de Enfermería — the full perioperative nursing chart.
///
/// Snapshot blocks (patient, hospitalization, pre-URPA, operating room) are
/// copied from the directory when the report is prefilled and have no update
/// path afterwards; the remaining fields are edited through the form session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SurgicalReport {
    /// Empty until the record is committed.
    pub id: String,
    pub patient_id: String,
    pub surgery_id: String,
    pub fecha_creacion: Timestamp,

    // Patient snapshot.
    pub paciente_nombre: String,
    pub paciente_direccion: String,
    pub paciente_nis: String,
    pub paciente_telefono: String,
    pub paciente_fecha_nacimiento: String,

    // Hospitalization snapshot.
    pub alergias: String,
    pub medicacion_habitual: String,
    pub ppcc: String,
    pub ta_s: i32,
    pub ta_d: i32,
    pub fc: i32,
    pub enfermera_planta: String,

    // Pre-URPA snapshot.
    pub intervencion: String,
    pub lateralidad: String,
    pub enfermera_urpa: String,
    pub medicacion_pre_urpa: String,

    // Pre-operative checklist, page 1.
    pub retirada_dispositivos: bool,
    pub retirada_dentadura: bool,
    pub rasurado_zona: bool,
    pub pruebas_ecg: bool,
    pub pruebas_rx: bool,
    pub pruebas_as: bool,
    pub pruebas_inf_externo: bool,
    pub verificacion_cirujano: bool,
    pub verificacion_anestesista: bool,
    pub marcaje: bool,
    pub pruebas_cruzadas: bool,
    pub transfusion: bool,

    // Operating-room snapshot; only the medication line is editable.
    pub cirujano: String,
    pub anestesista: String,
    pub tipo_anestesia: String,
    pub fecha_entrada_quirofano: String,
    pub fecha_salida_quirofano: String,
    pub enfermera_quirofano: String,
    pub medicacion_quirofano: String,

    pub observaciones_pagina1: String,

    pub constantes_vitales: Vec<VitalConstant>,

    // URPA block, page 2. Entry/exit are editable.
    pub anestesista_urpa: String,
    pub enfermera_urpa_final: String,
    pub fecha_entrada_urpa: String,
    pub fecha_salida_urpa: String,

    pub ordenes_medicas: String,
    pub medicacion_administrada: Vec<MedicationRow>,

    pub vias_venosas: String,
    pub vendaje: String,
    pub sonda_vesical: String,
    pub oxigenoterapia: String,
    pub drenajes: String,
    pub otros: String,
    pub apositos: String,

    // Signature.
    pub enfermera: String,
    pub fecha_hora_informe: Timestamp,
}
