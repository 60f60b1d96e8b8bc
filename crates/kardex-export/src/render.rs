//! Fixed-layout rendering.
//!
//! Each record kind has one template mirroring the printed hospital form.
//! The record's serde representation becomes the template context, so the
//! layout is deterministic given a committed record. The rendered output
//! uses the small line-based vocabulary the document assembler consumes:
//! `#`/`##` headings, `- ` rows, `---` page breaks, plain label lines.

use std::collections::HashMap;

use tera::{Context, Tera, Value};

use kardex_core::models::evaluation::{CmaEvaluation, ShortStayEvaluation};
use kardex_core::models::surgical_report::SurgicalReport;

use crate::error::ExportError;

/// `[X]` / `[ ]` checkbox glyph for a boolean.
fn mark(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let checked = value.as_bool().unwrap_or(false);
    Ok(Value::String(if checked { "[X]" } else { "[ ]" }.to_string()))
}

/// Printed form of a checklist answer (`yes`/`no`/`np`).
fn answer(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = match value.as_str() {
        Some("yes") => "Sí",
        Some("no") => "No",
        Some("np") => "N/P",
        _ => "—",
    };
    Ok(Value::String(text.to_string()))
}

fn render<T: serde::Serialize>(
    template_name: &str,
    template_content: &str,
    record: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.register_filter("mark", mark);
    tera.register_filter("answer", answer);
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(record)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    Ok(tera.render(template_name, &context)?)
}

pub fn render_short_stay(evaluation: &ShortStayEvaluation) -> Result<String, ExportError> {
    render("short_stay", SHORT_STAY_TEMPLATE, evaluation)
}

pub fn render_cma(evaluation: &CmaEvaluation) -> Result<String, ExportError> {
    render("cma", CMA_TEMPLATE, evaluation)
}

pub fn render_report(report: &SurgicalReport) -> Result<String, ExportError> {
    render("surgical_report", REPORT_TEMPLATE, report)
}

const SHORT_STAY_TEMPLATE: &str = r#"# EVALUACIÓN DE ENFERMERÍA AL PACIENTE QUIRÚRGICO DE CORTA ESTANCIA

## DATOS DEL PACIENTE
Paciente: {{ patient_name }}    NIS: {{ patient_nis }}
Dirección: {{ patient_address }}
Teléfono: {{ patient_phone }}    Fecha de nacimiento: {{ patient_date_of_birth }}
Fecha: {{ evaluation_date }}    Hora: {{ evaluation_time }}
Enfermera: {{ nurse }} (Col. {{ nurse_collegiate_number }})

## CONSTANTES VITALES
Temperatura: {{ temperature }} ºC    Vía: {{ via_anular }}
TAS/TAD: {{ tas_sistolica }}/{{ tad_diastolica }} mmHg    FC: {{ fc }} lpm
FR: {{ fr }} rpm    Sat O2: {{ sat_o2 }} %    {{ aire_amb }}

## ALERGIAS
{{ has_allergies | mark }} Alergias conocidas{% if has_allergies %}: {{ allergies_details }}{% endif %}

## ANTECEDENTES PERSONALES
{{ personal_history }}

## MEDICACIÓN HABITUAL
{{ habitual_medication }}

## NECESIDAD DE RESPIRACIÓN
{{ respiration.no_alteration | mark }} Sin alteración
- {{ respiration.difficulty_breathing | mark }} Dificultad Respirar
- {{ respiration.tachypnea | mark }} Taquipnea
- {{ respiration.dyspnea | mark }} Dispnea
- {{ respiration.bradypnea | mark }} Bradipnea
Observaciones: {{ respiration.observations }}

## NECESIDAD DE ALIMENTACIÓN
{{ feeding.no_alteration | mark }} Sin alteración
- {{ feeding.difficulty_chewing | mark }} Dif. Masticar    {{ feeding.difficulty_drinking | mark }} Dif. Beber    {{ feeding.difficulty_swallowing | mark }} Dif. Tragar
- {{ feeding.refuses_to_eat | mark }} Se niega a comer    {{ feeding.dental_prosthesis | mark }} Prótesis dental    {{ feeding.nasogastric_tube | mark }} SNG
- {{ feeding.parenteral_nutrition | mark }} Nutrición parenteral    {{ feeding.ostomy | mark }} Ostomía    {{ feeding.aspiration_risk | mark }} Riesgo aspiración
- {{ feeding.vomiting | mark }} Vómitos    {{ feeding.nausea | mark }} Náuseas
Peso actual: {{ feeding.current_weight }}    Talla: {{ feeding.height }}    IMC: {{ feeding.bmi }}
Peso habitual: {{ feeding.usual_weight }}    Pérdida de peso: {{ feeding.weight_loss_percentage }} %
Ingesta: {% if feeding.intake == "normal" %}Normal{% elif feeding.intake == "half" %}La mitad{% else %}Casi nada{% endif %}    MUST: {{ feeding.must_score }}
{{ feeding.autonomous | mark }} Autónomo    {{ feeding.needs_help | mark }} Necesita ayuda
Dieta: {{ feeding.diet }}    Líquidos diarios: {{ feeding.daily_liquid_intake }}
Observaciones: {{ feeding.observations }}

## NECESIDAD DE ELIMINACIÓN
Patrón urinario: {{ elimination.urinary_pattern.autonomous | mark }} Autónomo    {{ elimination.urinary_pattern.needs_help | mark }} Necesita ayuda    {{ elimination.urinary_pattern.physiological | mark }} Fisiológico    {{ elimination.urinary_pattern.urinary_catheter | mark }} Sonda vesical
Patrón intestinal: {{ elimination.intestinal_pattern.autonomous | mark }} Autónomo    {{ elimination.intestinal_pattern.needs_help | mark }} Necesita ayuda    {{ elimination.intestinal_pattern.physiological | mark }} Fisiológico    {{ elimination.intestinal_pattern.ostomy | mark }} Ostomía

## NECESIDAD DE MOVILIZACIÓN
{{ mobilization.autonomous | mark }} Autónomo    {{ mobilization.dependent | mark }} Dependiente    {{ mobilization.bedridden | mark }} Encamado
Necesita: {{ mobilization.needs_partial_help | mark }} Ayuda parcial    {{ mobilization.needs_total_help | mark }} Ayuda total
Observaciones: {{ mobilization.observations }}

---

## NECESIDAD DE REPOSO Y SUEÑO
{{ rest_and_sleep.normal_pattern | mark }} Normal    {{ rest_and_sleep.difficulty | mark }} Dificultad    {{ rest_and_sleep.needs_help_medication | mark }} Necesita ayuda/medicación
Observaciones: {{ rest_and_sleep.observations }}

## NECESIDAD DE SEGURIDAD
{{ safety.infection_risk | mark }} Riesgo de infección    {{ safety.no_infection_risk | mark }} Sin riesgo de infección
- {{ safety.drainage | mark }} Drenaje    {{ safety.urinary_catheter | mark }} Sonda vesical    {{ safety.central_line | mark }} Vía central
Riesgo de caídas (Downton): {{ safety.fall_risk_score }}    {{ safety.protection_protocol | mark }} Protocolo de protección
Observaciones: {{ safety.observations }}

## NECESIDAD DE COMUNICACIÓN
{{ communication.no_alteration | mark }} Sin alteración
- {{ communication.vision_alteration | mark }} Alteración visión    {{ communication.hearing_alteration | mark }} Alteración auditiva    {{ communication.speech_difficulty | mark }} Dificultad habla
- {{ communication.language_barrier | mark }} Barrera idiomática{% if communication.language_barrier %}: {{ communication.language }}{% endif %}
Observaciones: {{ communication.observations }}

## NECESIDAD DE CREENCIAS Y VALORES
{{ beliefs_and_values.has_religious_cultural_beliefs | mark }} Creencias religiosas/culturales    {{ beliefs_and_values.advance_directives | mark }} Voluntades anticipadas
Observaciones: {{ beliefs_and_values.observations }}

## NECESIDAD DE CONFORT
Dolor: {{ comfort.has_pain | mark }}{% if comfort.has_pain %}    Localización: {{ comfort.pain_location }}
Tipo: {{ comfort.pain_type_acute | mark }} Agudo    {{ comfort.pain_type_chronic | mark }} Crónico    {{ comfort.pain_with_movement | mark }} Con el movimiento
Intensidad: {{ comfort.pain_intensity }}    Escala: {{ comfort.pain_scale }}{% endif %}

## NECESIDAD DE APRENDIZAJE
Vive su estado de salud con: {% if learning.health_status == "tranquility" %}Tranquilidad{% elif learning.health_status == "worry" %}Preocupación{% elif learning.health_status == "anguish" %}Angustia{% else %}Miedo{% endif %}
Grado de conocimiento de su problema: {{ learning.knowledge_level }}/5
Observaciones: {{ learning.observations }}

## VALORACIÓN PSICOSOCIAL
{{ psychosocial.calm | mark }} Tranquilo    {{ psychosocial.worried | mark }} Preocupado    {{ psychosocial.anxious | mark }} Ansioso
{{ psychosocial.sad | mark }} Triste    {{ psychosocial.apathetic | mark }} Apático    {{ psychosocial.irritable | mark }} Irritable

## COMENTARIOS ADICIONALES
{{ additional_comments }}

## FIRMA
Firmado: {{ signed_by }}    Fecha: {{ report_date }}    Hora: {{ report_time }}
"#;

const CMA_TEMPLATE: &str = r#"# EVALUACIÓN DE ENFERMERÍA CIRUGÍA MAYOR AMBULATORIA

Paciente: {{ patient_name }}    Enfermera: {{ nurse }}

## MEDICACIÓN HABITUAL
{{ habitual_medication }}

## 1. NECESIDAD DE RESPIRACIÓN
{{ respiration.no_alteration | mark }} Sin alteración observada
- {{ respiration.dyspnea | mark }} Dispnea    {{ respiration.tachypnea | mark }} Taquipnea    {{ respiration.bradypnea | mark }} Bradipnea
- {{ respiration.retractions | mark }} Tiraje    {{ respiration.difficulty_breathing | mark }} Dificultad Respirar
Observaciones: {{ respiration.observations }}

## 2. NECESIDAD DE ALIMENTACIÓN
Ayunas: {% if feeding.fasting %}Sí{% else %}No{% endif %}    Hora última ingesta: {{ feeding.last_intake_time }}
Observaciones: {{ feeding.observations }}

## 3. NECESIDAD DE ELIMINACIÓN
{{ elimination.no_alteration | mark }} Sin alteración observada
Patrón urinario: {{ elimination.urinary_pattern.continent | mark }} Continente    {{ elimination.urinary_pattern.incontinent | mark }} Incontinente    {{ elimination.urinary_pattern.urinary_catheter | mark }} Sonda vesical    Otros: {{ elimination.urinary_pattern.other }}
Patrón intestinal: {{ elimination.intestinal_pattern.continent | mark }} Continente    {{ elimination.intestinal_pattern.incontinent | mark }} Incontinente    {{ elimination.intestinal_pattern.ostomies | mark }} Ostomías    Otros: {{ elimination.intestinal_pattern.other }}
Observaciones: {{ elimination.observations }}

## 4. NECESIDAD DE MOVILIZACIÓN
{{ mobilization.autonomous | mark }} Autónomo    {{ mobilization.dependent | mark }} Dependiente    {{ mobilization.bedridden | mark }} Encamado
Necesita: {{ mobilization.needs_partial_help | mark }} Ayuda parcial    {{ mobilization.needs_total_help | mark }} Ayuda total
Observaciones: {{ mobilization.observations }}

## 5. NECESIDAD DE REPOSO Y SUEÑO
{{ rest_and_sleep.normal_pattern | mark }} Normal    {{ rest_and_sleep.difficulty | mark }} Dificultad    {{ rest_and_sleep.needs_help_medication | mark }} Necesita ayuda/medicación
Observaciones: {{ rest_and_sleep.observations }}

## 6. NECESIDAD DE SEGURIDAD
Riesgo de caídas (Escala Downton): {{ safety.fall_risk_score }}
Nivel de riesgo: {% if safety.risk_level == "no_risk" %}Sin riesgo{% else %}Con riesgo{% endif %}
- {{ safety.vision_alteration | mark }} Alteración de la visión    {{ safety.hearing_alteration | mark }} Alteración auditiva
- {{ safety.memory_alteration | mark }} Alteración de la memoria    {{ safety.speech_difficulty | mark }} Dificultad en el habla
Observaciones: {{ safety.observations }}

## 7. NECESIDAD DE COMUNICACIÓN
{{ communication.no_alteration | mark }} Sin alteración observada
Estado de ánimo: {{ communication.emotional_state.calm | mark }} Tranquilo    {{ communication.emotional_state.worried | mark }} Preocupado    {{ communication.emotional_state.anxious | mark }} Ansioso    {{ communication.emotional_state.sad | mark }} Triste    {{ communication.emotional_state.apathetic | mark }} Apático    {{ communication.emotional_state.irritable | mark }} Irritable
Nivel de conciencia: {% if communication.consciousness_level == "alert" %}Alerta{% elif communication.consciousness_level == "conscious" %}Consciente{% elif communication.consciousness_level == "stuporous" %}Estuporoso/a{% else %}Coma{% endif %}
Orientado: {% if communication.oriented %}Sí{% else %}No{% endif %}
Barrera idiomática: {% if communication.language_barrier %}Sí — {{ communication.language }}{% else %}No{% endif %}
Observaciones: {{ communication.observations }}

## 8. NECESIDAD CONFORT
Dolor: {{ comfort.has_pain | mark }}{% if comfort.has_pain %}    Localización: {{ comfort.pain_location }}
Tipo: {{ comfort.pain_type_acute | mark }} Agudo    {{ comfort.pain_type_chronic | mark }} Crónico    {{ comfort.pain_with_movement | mark }} Con el movimiento
Intensidad: {{ comfort.pain_intensity }}    Escala: {{ comfort.pain_scale }}{% endif %}

## 9. NECESIDAD DE APRENDIZAJE
Obstáculos para aprender: {% if learning.has_obstacles %}Sí — {{ learning.obstacles_description }}{% else %}No{% endif %}
Grado de conocimiento de su problema: {{ learning.knowledge_level }}/5
Observaciones: {{ learning.observations }}

## 10. CHECKLIST PREQUIRÚRGICO
- {{ presurgical_checklist.identification_bracelet | answer }} Pulsera identificativa colocada
- {{ presurgical_checklist.patient_identification_verified | answer }} Identificación del paciente verificada
- {{ presurgical_checklist.scheduled_surgery | answer }} Cirugía programada
- {{ presurgical_checklist.anesthesia_consent | answer }} Consentimiento de anestesia
- {{ presurgical_checklist.surgery_consent | answer }} Consentimiento de cirugía
- {{ presurgical_checklist.preoperative_completed | answer }} Preoperatorio completado
- {{ presurgical_checklist.surgical_area_prepared | answer }} Zona quirúrgica preparada
- {{ presurgical_checklist.metallic_objects_removed | answer }} Objetos metálicos retirados
- {{ presurgical_checklist.prosthesis_removed | answer }} Prótesis retiradas
- {{ presurgical_checklist.intestinal_preparation | answer }} Preparación intestinal {{ presurgical_checklist.intestinal_preparation_details }}
- {{ presurgical_checklist.peripheral_line_inserted | answer }} Vía periférica insertada
- {{ presurgical_checklist.premedication | answer }} Premedicación {{ presurgical_checklist.premedication_details }}
"#;

const REPORT_TEMPLATE: &str = r#"# INFORME QUIRÚRGICO DE ENFERMERÍA

Paciente: {{ paciente_nombre }}    NIS: {{ paciente_nis }}
Dirección: {{ paciente_direccion }}
Teléfono: {{ paciente_telefono }}    Fecha de nacimiento: {{ paciente_fecha_nacimiento }}

## HOSPITALIZACIÓN
Alergias: {{ alergias }}
Medicación habitual: {{ medicacion_habitual }}
PPCC: {{ ppcc }}
TA: {{ ta_s }}/{{ ta_d }} mmHg    FC: {{ fc }} lpm
Enfermera de planta: {{ enfermera_planta }}

## PRE-URPA
Intervención: {{ intervencion }}    Lateralidad: {{ lateralidad }}
Enfermera URPA: {{ enfermera_urpa }}
Medicación pre-URPA: {{ medicacion_pre_urpa }}

## PREPARACIÓN PREOPERATORIA
- {{ retirada_dispositivos | mark }} Retirada de dispositivos    {{ retirada_dentadura | mark }} Retirada de dentadura    {{ rasurado_zona | mark }} Rasurado de la zona
- Pruebas: {{ pruebas_ecg | mark }} ECG    {{ pruebas_rx | mark }} RX    {{ pruebas_as | mark }} AS    {{ pruebas_inf_externo | mark }} Inf. externo
- Verificación: {{ verificacion_cirujano | mark }} Cirujano    {{ verificacion_anestesista | mark }} Anestesista
- {{ marcaje | mark }} Marcaje    {{ pruebas_cruzadas | mark }} Pruebas cruzadas    {{ transfusion | mark }} Transfusión

## QUIRÓFANO
Cirujano: {{ cirujano }}    Anestesista: {{ anestesista }}
Tipo de anestesia: {{ tipo_anestesia }}
Entrada: {{ fecha_entrada_quirofano }}    Salida: {{ fecha_salida_quirofano }}
Enfermera de quirófano: {{ enfermera_quirofano }}
Medicación de quirófano: {{ medicacion_quirofano }}

## OBSERVACIONES
{{ observaciones_pagina1 }}

---

## CONSTANTES VITALES
{% for c in constantes_vitales -%}
- {{ c.hora }}    TAS/TAD {{ c.tas_sistolica }}/{{ c.tad_diastolica }} mmHg    FC {{ c.fc }} lpm    Sat O2 {{ c.sat_o2 }} %    EVA {{ c.eva }}    ({% if c.origen == "planta" %}Planta{% else %}Quirófano{% endif %})
{% endfor %}

## URPA
Anestesista: {{ anestesista_urpa }}    Enfermera: {{ enfermera_urpa_final }}
Entrada: {{ fecha_entrada_urpa }}    Salida: {{ fecha_salida_urpa }}

## ÓRDENES MÉDICAS
{{ ordenes_medicas }}

## MEDICACIÓN ADMINISTRADA
{% for m in medicacion_administrada -%}
- {{ m.hora }}    {{ m.medicacion }}    {{ m.dosis }}
{% endfor %}

## CUIDADOS
Vías venosas: {{ vias_venosas }}
Vendaje: {{ vendaje }}
Sonda vesical: {{ sonda_vesical }}
Oxigenoterapia: {{ oxigenoterapia }}
Drenajes: {{ drenajes }}
Apósitos: {{ apositos }}
Otros: {{ otros }}

## FIRMA
Enfermera: {{ enfermera }}
Fecha y hora del informe: {{ fecha_hora_informe }}
"#;
