//! Hardcoded directory contents. Entirely fictional.

use kardex_core::models::directory::{Nurse, Patient, Surgery};

fn patient(
    id: &str,
    nombre: &str,
    direccion: &str,
    nis: &str,
    telefono: &str,
    fecha_nacimiento: &str,
    alergias: &str,
    antecedentes_personales: &str,
    medicacion_habitual: &str,
    ppcc: &str,
    ward_sheet: [&str; 8],
    admission: (i32, i32, i32),
    enfermera_planta: &str,
) -> Patient {
    let [temperatura, via_anular, tas_sistolica, tad_diastolica, fc, fr, sat_o2, aire_amb] =
        ward_sheet;
    let (ta_s, ta_d, fc_reposo) = admission;
    Patient {
        id: id.to_string(),
        nombre: nombre.to_string(),
        direccion: direccion.to_string(),
        nis: nis.to_string(),
        telefono: telefono.to_string(),
        fecha_nacimiento: fecha_nacimiento.to_string(),
        alergias: alergias.to_string(),
        antecedentes_personales: antecedentes_personales.to_string(),
        medicacion_habitual: medicacion_habitual.to_string(),
        ppcc: ppcc.to_string(),
        temperatura: temperatura.to_string(),
        via_anular: via_anular.to_string(),
        tas_sistolica: tas_sistolica.to_string(),
        tad_diastolica: tad_diastolica.to_string(),
        fc: fc.to_string(),
        fr: fr.to_string(),
        sat_o2: sat_o2.to_string(),
        aire_amb: aire_amb.to_string(),
        ta_s,
        ta_d,
        fc_reposo,
        enfermera_planta: enfermera_planta.to_string(),
    }
}

pub fn patients() -> Vec<Patient> {
    vec![
        patient(
            "patient-juan",
            "Pérez García, Juan",
            "Calle Portales 12, 2º A, Vitoria-Gasteiz",
            "100001",
            "945111222",
            "12/05/1970",
            "No conocidas",
            "Sin antecedentes relevantes.",
            "No toma medicación habitual",
            "Sin antecedentes relevantes",
            ["36.5", "Oral", "120", "75", "70", "15", "98", "Aire ambiente"],
            (120, 75, 70),
            "Miren Sánchez",
        ),
        patient(
            "patient-001",
            "García López, María",
            "Calle Mayor 45, 3º B, Vitoria-Gasteiz",
            "307535",
            "943991234",
            "15/08/1965",
            "Penicilina, Contraste yodado",
            "Hipertensión arterial controlada con medicación. Diabetes Mellitus tipo 2. \
             Colecistectomía en 2018.",
            "Enalapril 10mg (1-0-0), Metformina 850mg (1-0-1), Atorvastatina 20mg (0-0-1)",
            "HTA, Dislipemia, DM tipo 2",
            ["36.5", "Oral", "135", "85", "78", "16", "98", "Aire ambiente"],
            (135, 85, 78),
            "Ana Martínez Ruiz",
        ),
        patient(
            "patient-002",
            "Martínez Rodríguez, Juan Carlos",
            "Avenida de los Fueros 23, 1º A, Vitoria-Gasteiz",
            "412789",
            "945123456",
            "22/03/1978",
            "No conocidas",
            "Fumador activo (10 cigarrillos/día). Apendicectomía en la infancia. Sin otras \
             patologías relevantes.",
            "Metformina 850mg (1-0-1), Bisoprolol 5mg (1-0-0), AAS 100mg (0-0-1)",
            "DM tipo 2, Cardiopatía isquémica",
            ["36.7", "Oral", "128", "82", "72", "14", "97", "Aire ambiente"],
            (128, 78, 68),
            "Carmen González Pérez",
        ),
        patient(
            "patient-003",
            "Fernández Sánchez, Carmen",
            "Plaza del Machete 8, 4º D, Vitoria-Gasteiz",
            "523456",
            "943887766",
            "10/11/1982",
            "Látex, AINEs",
            "Asma bronquial. Migraña crónica. Cesárea en 2015.",
            "Salbutamol inhalador (a demanda), Montelukast 10mg (0-0-1), Topiramato 50mg (1-0-1)",
            "Asma bronquial",
            ["36.3", "Oral", "118", "75", "68", "15", "99", "Aire ambiente"],
            (118, 72, 72),
            "Laura Jiménez Torres",
        ),
        // Admitted for pre-anesthesia workup; no procedure scheduled yet.
        patient(
            "patient-005",
            "Fernández Muñoz, Isabel",
            "Calle del Prado 67, 1º A, Vitoria-Gasteiz",
            "460123",
            "943456789",
            "08/07/1972",
            "Látex",
            "Hipotiroidismo en tratamiento sustitutivo.",
            "Levotiroxina 75mcg (1-0-0), Paracetamol 1g si dolor",
            "Hipotiroidismo",
            ["36.4", "Oral", "118", "72", "72", "14", "98", "Aire ambiente"],
            (118, 72, 72),
            "Laura Jiménez Torres",
        ),
        patient(
            "patient-004",
            "Gómez Álvarez, Pedro",
            "Calle San Prudencio 67, Bajo, Vitoria-Gasteiz",
            "634521",
            "945998877",
            "05/06/1955",
            "Contraste yodado",
            "Cardiopatía isquémica. Stent coronario en 2020. Dislipemia. Hernia inguinal \
             bilateral operada.",
            "AAS 100mg (1-0-0), Clopidogrel 75mg (1-0-0), Atorvastatina 40mg (0-0-1), \
             Bisoprolol 5mg (1-0-0), Ramipril 5mg (1-0-0)",
            "Cardiopatía isquémica, Dislipemia",
            ["36.8", "Oral", "142", "88", "65", "16", "96", "Aire ambiente"],
            (142, 88, 65),
            "Marta Rodríguez Silva",
        ),
    ]
}

pub fn nurses() -> Vec<Nurse> {
    let entries = [
        ("nurse-1", "Miren Sánchez", "12345"),
        ("nurse-2", "Ana Pérez García", "23456"),
        ("nurse-3", "Luis Fernández", "34567"),
    ];
    entries
        .into_iter()
        .map(|(id, nombre, numero_colegiado)| Nurse {
            id: id.to_string(),
            nombre: nombre.to_string(),
            numero_colegiado: numero_colegiado.to_string(),
        })
        .collect()
}

struct SurgeryEntry {
    id: &'static str,
    patient_id: &'static str,
    intervencion: &'static str,
    lateralidad: &'static str,
    cirujano: &'static str,
    anestesista: &'static str,
    tipo_anestesia: &'static str,
    quirofano: (&'static str, &'static str, &'static str, &'static str),
    urpa: (&'static str, &'static str, &'static str, &'static str, &'static str),
}

pub fn surgeries() -> Vec<Surgery> {
    let entries = [
        SurgeryEntry {
            id: "surgery-juan",
            patient_id: "patient-juan",
            intervencion: "Herniorrafia umbilical",
            lateralidad: "No aplica",
            cirujano: "Dr. Antonio López Ruiz",
            anestesista: "Dra. María González Torres",
            tipo_anestesia: "General balanceada",
            quirofano: (
                "2026-02-22T08:00",
                "2026-02-22T09:30",
                "Beatriz Sánchez López",
                "Propofol 150mg, Fentanilo 100mcg, Paracetamol 1g IV",
            ),
            urpa: (
                "Dra. María González Torres",
                "Miren Sánchez",
                "Metoclopramida 10mg IV",
                "2026-02-22T09:30",
                "2026-02-22T11:30",
            ),
        },
        SurgeryEntry {
            id: "surgery-001",
            patient_id: "patient-001",
            intervencion: "Colecistectomía laparoscópica",
            lateralidad: "No aplica",
            cirujano: "Dr. Ramón Pérez Castillo",
            anestesista: "Dra. Elena Moreno Díaz",
            tipo_anestesia: "General balanceada",
            quirofano: (
                "2026-02-22T08:30",
                "2026-02-22T10:15",
                "Beatriz Sánchez López",
                "Propofol 200mg, Fentanilo 100mcg, Rocuronio 50mg, Paracetamol 1g IV",
            ),
            urpa: (
                "Dra. Elena Moreno Díaz",
                "Cristina Fernández Ruiz",
                "Metoclopramida 10mg IV",
                "2026-02-22T10:15",
                "2026-02-22T12:30",
            ),
        },
        SurgeryEntry {
            id: "surgery-002",
            patient_id: "patient-002",
            intervencion: "Hernioplastia inguinal derecha",
            lateralidad: "Derecha",
            cirujano: "Dr. Carlos Jiménez Martín",
            anestesista: "Dr. Miguel Ángel Torres Vega",
            tipo_anestesia: "Raquídea",
            quirofano: (
                "2026-02-22T09:00",
                "2026-02-22T10:30",
                "Sara Martínez Gómez",
                "Bupivacaína hiperbara 15mg intratecal, Metamizol 2g IV",
            ),
            urpa: (
                "Dr. Miguel Ángel Torres Vega",
                "Patricia López Muñoz",
                "Ondansetrón 4mg IV",
                "2026-02-22T10:30",
                "2026-02-22T13:00",
            ),
        },
        SurgeryEntry {
            id: "surgery-003",
            patient_id: "patient-003",
            intervencion: "Tiroidectomía total",
            lateralidad: "Bilateral",
            cirujano: "Dra. Lucía Romero Santos",
            anestesista: "Dr. Javier Ruiz Hernández",
            tipo_anestesia: "General balanceada",
            quirofano: (
                "2026-02-22T10:45",
                "2026-02-22T13:00",
                "María José García Díaz",
                "Propofol 180mg, Remifentanilo perfusión, Rocuronio 40mg, Dexametasona 8mg IV",
            ),
            urpa: (
                "Dr. Javier Ruiz Hernández",
                "Isabel Sánchez Moreno",
                "Tramadol 100mg IV, Dexketoprofeno 50mg IV",
                "2026-02-22T13:00",
                "2026-02-22T15:30",
            ),
        },
        SurgeryEntry {
            id: "surgery-004",
            patient_id: "patient-004",
            intervencion: "Artroscopia de rodilla izquierda - Meniscectomía",
            lateralidad: "Izquierda",
            cirujano: "Dr. Alberto Navarro Prieto",
            anestesista: "Dra. Carmen Silva Ortega",
            tipo_anestesia: "Raquídea + sedación",
            quirofano: (
                "2026-02-22T11:30",
                "2026-02-22T12:45",
                "Elena Morales Pérez",
                "Bupivacaína hiperbara 12mg intratecal, Midazolam 2mg IV, Paracetamol 1g IV",
            ),
            urpa: (
                "Dra. Carmen Silva Ortega",
                "Raquel Díaz Fernández",
                "Ketorolaco 30mg IM",
                "2026-02-22T12:45",
                "2026-02-22T14:30",
            ),
        },
    ];

    entries
        .into_iter()
        .map(|e| {
            let (entrada_q, salida_q, enfermera_q, medicacion_q) = e.quirofano;
            let (anestesista_urpa, enfermera_urpa, medicacion_pre_urpa, entrada_u, salida_u) =
                e.urpa;
            Surgery {
                id: e.id.to_string(),
                patient_id: e.patient_id.to_string(),
                intervencion: e.intervencion.to_string(),
                lateralidad: e.lateralidad.to_string(),
                cirujano: e.cirujano.to_string(),
                anestesista: e.anestesista.to_string(),
                tipo_anestesia: e.tipo_anestesia.to_string(),
                fecha_entrada_quirofano: entrada_q.to_string(),
                fecha_salida_quirofano: salida_q.to_string(),
                enfermera_quirofano: enfermera_q.to_string(),
                medicacion_quirofano: medicacion_q.to_string(),
                anestesista_urpa: anestesista_urpa.to_string(),
                enfermera_urpa: enfermera_urpa.to_string(),
                medicacion_pre_urpa: medicacion_pre_urpa.to_string(),
                fecha_entrada_urpa: entrada_u.to_string(),
                fecha_salida_urpa: salida_u.to_string(),
            }
        })
        .collect()
}
