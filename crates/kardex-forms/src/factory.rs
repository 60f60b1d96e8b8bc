//! Record factory: default instances and directory-driven prefill.
//!
//! Defaults encode the printed form's implicit state — "no alteration"
//! sections start clean, elimination patterns start continent/autonomous/
//! physiological — so an untouched form matches a blank paper sheet.
//! Identifiers are never assigned here; that happens at commit time.

use jiff::{Timestamp, Zoned};

use kardex_core::models::directory::{Nurse, Patient, Surgery};
use kardex_core::models::evaluation::{
    CmaEvaluation, EvaluationKind, NursingEvaluation, ShortStayEvaluation,
};
use kardex_core::models::surgical_report::{SurgicalReport, VitalConstant};

pub const SHORT_STAY_NAME: &str = "Evaluación al Paciente Quirúrgico de Corta Estancia";
pub const CMA_NAME: &str = "Evaluación de Enfermería Cirugía Mayor Ambulatoria";

/// Allergy texts the directory uses to mean "none known".
fn has_known_allergies(text: &str) -> bool {
    let normalized = text.trim().to_lowercase();
    !(normalized.is_empty()
        || normalized == "no conocidas"
        || normalized == "sin alergias conocidas")
}

pub fn empty_short_stay() -> ShortStayEvaluation {
    ShortStayEvaluation {
        evaluation_name: SHORT_STAY_NAME.to_string(),
        ..ShortStayEvaluation::default()
    }
}

pub fn empty_cma() -> CmaEvaluation {
    CmaEvaluation {
        evaluation_name: CMA_NAME.to_string(),
        ..CmaEvaluation::default()
    }
}

pub fn empty_evaluation(kind: EvaluationKind) -> NursingEvaluation {
    match kind {
        EvaluationKind::SurgicalShort => NursingEvaluation::SurgicalShort(empty_short_stay()),
        EvaluationKind::Cma => NursingEvaluation::Cma(empty_cma()),
    }
}

/// Build a short-stay evaluation prefilled from the directory.
///
/// Copies the demographic and last-registered-vitals snapshot, derives the
/// allergy flag from the directory's allergy text, and seeds the signature
/// block from the evaluating nurse. Date/time display fields are stamped
/// with the current instant.
pub fn prefill_short_stay(patient: &Patient, nurse: &Nurse) -> ShortStayEvaluation {
    let now = Zoned::now();
    let date = now.strftime("%d/%m/%Y").to_string();
    let time = now.strftime("%H:%M").to_string();

    let has_allergies = has_known_allergies(&patient.alergias);
    ShortStayEvaluation {
        nurse: nurse.nombre.clone(),
        patient_name: patient.nombre.clone(),
        patient_address: patient.direccion.clone(),
        patient_nis: patient.nis.clone(),
        patient_phone: patient.telefono.clone(),
        patient_date_of_birth: patient.fecha_nacimiento.clone(),
        nurse_collegiate_number: nurse.numero_colegiado.clone(),
        evaluation_date: date.clone(),
        evaluation_time: time.clone(),
        temperature: patient.temperatura.clone(),
        via_anular: patient.via_anular.clone(),
        tas_sistolica: patient.tas_sistolica.clone(),
        tad_diastolica: patient.tad_diastolica.clone(),
        fc: patient.fc.clone(),
        fr: patient.fr.clone(),
        sat_o2: patient.sat_o2.clone(),
        aire_amb: patient.aire_amb.clone(),
        has_allergies,
        allergies_details: if has_allergies {
            patient.alergias.clone()
        } else {
            String::new()
        },
        personal_history: patient.antecedentes_personales.clone(),
        habitual_medication: patient.medicacion_habitual.clone(),
        signed_by: nurse.nombre.clone(),
        report_date: date,
        report_time: time,
        ..empty_short_stay()
    }
}

/// Build a surgical report prefilled from the directory.
///
/// Every snapshot block is copied deterministically; the 12 checklist
/// booleans start false; the vital-constants table is seeded with the
/// ward's current readings (`planta` origin). Creation and report
/// timestamps are stamped now; the identifier is assigned at commit.
pub fn prefill_surgical_report(
    patient: &Patient,
    surgery: &Surgery,
    ward_vitals: Vec<VitalConstant>,
) -> SurgicalReport {
    let now = Timestamp::now();
    SurgicalReport {
        id: String::new(),
        patient_id: patient.id.clone(),
        surgery_id: surgery.id.clone(),
        fecha_creacion: now,

        paciente_nombre: patient.nombre.clone(),
        paciente_direccion: patient.direccion.clone(),
        paciente_nis: patient.nis.clone(),
        paciente_telefono: patient.telefono.clone(),
        paciente_fecha_nacimiento: patient.fecha_nacimiento.clone(),

        alergias: patient.alergias.clone(),
        medicacion_habitual: patient.medicacion_habitual.clone(),
        ppcc: patient.ppcc.clone(),
        ta_s: patient.ta_s,
        ta_d: patient.ta_d,
        fc: patient.fc_reposo,
        enfermera_planta: patient.enfermera_planta.clone(),

        intervencion: surgery.intervencion.clone(),
        lateralidad: surgery.lateralidad.clone(),
        enfermera_urpa: surgery.enfermera_urpa.clone(),
        medicacion_pre_urpa: surgery.medicacion_pre_urpa.clone(),

        retirada_dispositivos: false,
        retirada_dentadura: false,
        rasurado_zona: false,
        pruebas_ecg: false,
        pruebas_rx: false,
        pruebas_as: false,
        pruebas_inf_externo: false,
        verificacion_cirujano: false,
        verificacion_anestesista: false,
        marcaje: false,
        pruebas_cruzadas: false,
        transfusion: false,

        cirujano: surgery.cirujano.clone(),
        anestesista: surgery.anestesista.clone(),
        tipo_anestesia: surgery.tipo_anestesia.clone(),
        fecha_entrada_quirofano: surgery.fecha_entrada_quirofano.clone(),
        fecha_salida_quirofano: surgery.fecha_salida_quirofano.clone(),
        enfermera_quirofano: surgery.enfermera_quirofano.clone(),
        medicacion_quirofano: surgery.medicacion_quirofano.clone(),

        observaciones_pagina1: String::new(),

        constantes_vitales: ward_vitals,

        anestesista_urpa: surgery.anestesista_urpa.clone(),
        enfermera_urpa_final: surgery.enfermera_urpa.clone(),
        fecha_entrada_urpa: surgery.fecha_entrada_urpa.clone(),
        fecha_salida_urpa: surgery.fecha_salida_urpa.clone(),

        ordenes_medicas: String::new(),
        medicacion_administrada: Vec::new(),

        vias_venosas: String::new(),
        vendaje: String::new(),
        sonda_vesical: String::new(),
        oxigenoterapia: String::new(),
        drenajes: String::new(),
        otros: String::new(),
        apositos: String::new(),

        enfermera: String::new(),
        fecha_hora_informe: now,
    }
}
