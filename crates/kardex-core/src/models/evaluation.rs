use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The two nursing evaluation variants supported by the unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EvaluationKind {
    SurgicalShort,
    Cma,
}

/// A committed or in-progress nursing evaluation.
///
/// The two variants share the base identity fields but almost nothing
/// structurally beyond them, so they are modeled as a tagged sum rather
/// than a common struct with optional halves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "evaluation_type")]
#[ts(export)]
pub enum NursingEvaluation {
    #[serde(rename = "surgical_short")]
    SurgicalShort(ShortStayEvaluation),
    #[serde(rename = "cma")]
    Cma(CmaEvaluation),
}

impl NursingEvaluation {
    pub fn kind(&self) -> EvaluationKind {
        match self {
            NursingEvaluation::SurgicalShort(_) => EvaluationKind::SurgicalShort,
            NursingEvaluation::Cma(_) => EvaluationKind::Cma,
        }
    }

    /// Empty until the record is committed.
    pub fn id(&self) -> &str {
        match self {
            NursingEvaluation::SurgicalShort(e) => &e.id,
            NursingEvaluation::Cma(e) => &e.id,
        }
    }

    /// Creation instant; `None` while the record is an uncommitted draft.
    pub fn date(&self) -> Option<Timestamp> {
        match self {
            NursingEvaluation::SurgicalShort(e) => e.date,
            NursingEvaluation::Cma(e) => e.date,
        }
    }

    pub fn evaluation_name(&self) -> &str {
        match self {
            NursingEvaluation::SurgicalShort(e) => &e.evaluation_name,
            NursingEvaluation::Cma(e) => &e.evaluation_name,
        }
    }

    pub fn nurse(&self) -> &str {
        match self {
            NursingEvaluation::SurgicalShort(e) => &e.nurse,
            NursingEvaluation::Cma(e) => &e.nurse,
        }
    }

    pub fn patient_name(&self) -> &str {
        match self {
            NursingEvaluation::SurgicalShort(e) => &e.patient_name,
            NursingEvaluation::Cma(e) => &e.patient_name,
        }
    }
}

// ---------------------------------------------------------------------------
// Sections shared by both variants
// ---------------------------------------------------------------------------

/// Six mood flags used both for the CMA communication section and the
/// short-stay psychosocial assessment. `calm` is informational and does not
/// count as an alteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MoodState {
    pub calm: bool,
    pub worried: bool,
    pub anxious: bool,
    pub sad: bool,
    pub apathetic: bool,
    pub irritable: bool,
}

impl Default for MoodState {
    fn default() -> Self {
        Self {
            calm: true,
            worried: false,
            anxious: false,
            sad: false,
            apathetic: false,
            irritable: false,
        }
    }
}

impl MoodState {
    /// Any mood flag other than `calm`.
    pub fn has_alteration(&self) -> bool {
        self.worried || self.anxious || self.sad || self.apathetic || self.irritable
    }
}

/// Mobility assessment. `autonomous` is mutually exclusive with the three
/// dependency flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MobilizationSection {
    pub autonomous: bool,
    pub dependent: bool,
    pub bedridden: bool,
    pub needs_partial_help: bool,
    pub needs_total_help: bool,
    pub observations: String,
}

impl Default for MobilizationSection {
    fn default() -> Self {
        Self {
            autonomous: true,
            dependent: false,
            bedridden: false,
            needs_partial_help: false,
            needs_total_help: false,
            observations: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RestAndSleepSection {
    pub normal_pattern: bool,
    pub difficulty: bool,
    pub needs_help_medication: bool,
    pub observations: String,
}

impl Default for RestAndSleepSection {
    fn default() -> Self {
        Self {
            normal_pattern: true,
            difficulty: false,
            needs_help_medication: false,
            observations: String::new(),
        }
    }
}

/// Pain assessment. Intensity and scale stay free text; the unit records
/// whichever paper scale the nurse used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComfortSection {
    pub has_pain: bool,
    pub pain_location: String,
    pub pain_type_acute: bool,
    pub pain_type_chronic: bool,
    pub pain_with_movement: bool,
    pub pain_intensity: String,
    pub pain_scale: String,
}

// ---------------------------------------------------------------------------
// Short-stay surgical evaluation
// ---------------------------------------------------------------------------

/// Evaluación de Enfermería al Paciente Quirúrgico de Corta Estancia.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShortStayEvaluation {
    pub id: String,
    pub date: Option<Timestamp>,
    pub evaluation_name: String,
    pub nurse: String,
    pub patient_name: String,

    // Demographic snapshot, copied from the directory at prefill time.
    pub patient_address: String,
    pub patient_nis: String,
    pub patient_phone: String,
    pub patient_date_of_birth: String,
    pub nurse_collegiate_number: String,

    pub evaluation_date: String,
    pub evaluation_time: String,

    // Last registered ward vitals, as written on the paper sheet.
    pub temperature: String,
    pub via_anular: String,
    pub tas_sistolica: String,
    pub tad_diastolica: String,
    pub fc: String,
    pub fr: String,
    pub sat_o2: String,
    pub aire_amb: String,

    pub has_allergies: bool,
    pub allergies_details: String,
    pub personal_history: String,
    pub habitual_medication: String,

    pub signed_by: String,
    pub report_date: String,
    pub report_time: String,

    pub respiration: ShortRespirationSection,
    pub feeding: ShortFeedingSection,
    pub elimination: ShortEliminationSection,
    pub mobilization: MobilizationSection,
    pub rest_and_sleep: RestAndSleepSection,
    pub safety: ShortSafetySection,
    pub communication: ShortCommunicationSection,
    pub beliefs_and_values: BeliefsAndValuesSection,
    pub comfort: ComfortSection,
    pub learning: ShortLearningSection,
    pub psychosocial: MoodState,
    pub additional_comments: String,
}

/// Respiration for the short-stay form. Unlike the CMA variant, the
/// aggregate here is a checkbox the nurse ticks directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShortRespirationSection {
    pub no_alteration: bool,
    pub difficulty_breathing: bool,
    pub tachypnea: bool,
    pub dyspnea: bool,
    pub bradypnea: bool,
    pub observations: String,
}

impl Default for ShortRespirationSection {
    fn default() -> Self {
        Self {
            no_alteration: true,
            difficulty_breathing: false,
            tachypnea: false,
            dyspnea: false,
            bradypnea: false,
            observations: String::new(),
        }
    }
}

impl ShortRespirationSection {
    pub fn has_alteration(&self) -> bool {
        self.difficulty_breathing || self.tachypnea || self.dyspnea || self.bradypnea
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum IntakeLevel {
    Normal,
    Half,
    AlmostNothing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShortFeedingSection {
    pub no_alteration: bool,
    pub difficulty_chewing: bool,
    pub difficulty_drinking: bool,
    pub difficulty_swallowing: bool,
    pub refuses_to_eat: bool,
    pub dental_prosthesis: bool,
    pub nasogastric_tube: bool,
    pub parenteral_nutrition: bool,
    pub ostomy: bool,
    pub aspiration_risk: bool,
    pub vomiting: bool,
    pub nausea: bool,

    // Nutrition screening. Scores come from external paper scales and are
    // recorded as entered.
    pub current_weight: String,
    pub height: String,
    pub bmi: String,
    pub usual_weight: String,
    pub weight_loss_percentage: String,
    pub intake: IntakeLevel,
    pub must_score: String,

    pub autonomous: bool,
    pub needs_help: bool,
    pub diet: String,
    pub daily_liquid_intake: String,
    pub observations: String,
}

impl Default for ShortFeedingSection {
    fn default() -> Self {
        Self {
            no_alteration: true,
            difficulty_chewing: false,
            difficulty_drinking: false,
            difficulty_swallowing: false,
            refuses_to_eat: false,
            dental_prosthesis: false,
            nasogastric_tube: false,
            parenteral_nutrition: false,
            ostomy: false,
            aspiration_risk: false,
            vomiting: false,
            nausea: false,
            current_weight: String::new(),
            height: String::new(),
            bmi: String::new(),
            usual_weight: String::new(),
            weight_loss_percentage: String::new(),
            intake: IntakeLevel::Normal,
            must_score: String::new(),
            autonomous: true,
            needs_help: false,
            diet: String::new(),
            daily_liquid_intake: String::new(),
            observations: String::new(),
        }
    }
}

impl ShortFeedingSection {
    pub fn has_alteration(&self) -> bool {
        self.difficulty_chewing
            || self.difficulty_drinking
            || self.difficulty_swallowing
            || self.refuses_to_eat
            || self.dental_prosthesis
            || self.nasogastric_tube
            || self.parenteral_nutrition
            || self.ostomy
            || self.aspiration_risk
            || self.vomiting
            || self.nausea
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShortEliminationSection {
    pub urinary_pattern: ShortUrinaryPattern,
    pub intestinal_pattern: ShortIntestinalPattern,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShortUrinaryPattern {
    pub autonomous: bool,
    pub needs_help: bool,
    pub physiological: bool,
    pub urinary_catheter: bool,
}

impl Default for ShortUrinaryPattern {
    fn default() -> Self {
        Self {
            autonomous: true,
            needs_help: false,
            physiological: true,
            urinary_catheter: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShortIntestinalPattern {
    pub autonomous: bool,
    pub needs_help: bool,
    pub physiological: bool,
    pub ostomy: bool,
}

impl Default for ShortIntestinalPattern {
    fn default() -> Self {
        Self {
            autonomous: true,
            needs_help: false,
            physiological: true,
            ostomy: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShortSafetySection {
    pub infection_risk: bool,
    pub no_infection_risk: bool,
    pub drainage: bool,
    pub urinary_catheter: bool,
    pub central_line: bool,
    pub fall_risk_score: String,
    pub protection_protocol: bool,
    pub observations: String,
}

impl Default for ShortSafetySection {
    fn default() -> Self {
        Self {
            infection_risk: false,
            no_infection_risk: true,
            drainage: false,
            urinary_catheter: false,
            central_line: false,
            fall_risk_score: String::new(),
            protection_protocol: false,
            observations: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShortCommunicationSection {
    pub no_alteration: bool,
    pub vision_alteration: bool,
    pub hearing_alteration: bool,
    pub speech_difficulty: bool,
    pub language_barrier: bool,
    pub language: String,
    pub observations: String,
}

impl Default for ShortCommunicationSection {
    fn default() -> Self {
        Self {
            no_alteration: true,
            vision_alteration: false,
            hearing_alteration: false,
            speech_difficulty: false,
            language_barrier: false,
            language: String::new(),
            observations: String::new(),
        }
    }
}

impl ShortCommunicationSection {
    pub fn has_alteration(&self) -> bool {
        self.vision_alteration
            || self.hearing_alteration
            || self.speech_difficulty
            || self.language_barrier
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BeliefsAndValuesSection {
    pub has_religious_cultural_beliefs: bool,
    pub advance_directives: bool,
    pub observations: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HealthStatus {
    Tranquility,
    Worry,
    Anguish,
    Fear,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShortLearningSection {
    pub health_status: HealthStatus,
    /// 1 = none, 5 = extensive.
    pub knowledge_level: u8,
    pub observations: String,
}

impl Default for ShortLearningSection {
    fn default() -> Self {
        Self {
            health_status: HealthStatus::Tranquility,
            knowledge_level: 3,
            observations: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// CMA evaluation
// ---------------------------------------------------------------------------

/// Evaluación de Enfermería Cirugía Mayor Ambulatoria.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CmaEvaluation {
    pub id: String,
    pub date: Option<Timestamp>,
    pub evaluation_name: String,
    pub nurse: String,
    pub patient_name: String,

    pub habitual_medication: String,

    pub respiration: CmaRespirationSection,
    pub feeding: CmaFeedingSection,
    pub elimination: CmaEliminationSection,
    pub mobilization: MobilizationSection,
    pub rest_and_sleep: RestAndSleepSection,
    pub safety: CmaSafetySection,
    pub communication: CmaCommunicationSection,
    pub comfort: ComfortSection,
    pub learning: CmaLearningSection,
    pub presurgical_checklist: PresurgicalChecklist,
}

/// Respiration for the CMA form. The aggregate is never edited directly; it
/// is recomputed from the five constituent flags on every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CmaRespirationSection {
    pub no_alteration: bool,
    pub dyspnea: bool,
    pub tachypnea: bool,
    pub bradypnea: bool,
    /// Tiraje.
    pub retractions: bool,
    pub difficulty_breathing: bool,
    pub observations: String,
}

impl Default for CmaRespirationSection {
    fn default() -> Self {
        Self {
            no_alteration: true,
            dyspnea: false,
            tachypnea: false,
            bradypnea: false,
            retractions: false,
            difficulty_breathing: false,
            observations: String::new(),
        }
    }
}

impl CmaRespirationSection {
    pub fn has_alteration(&self) -> bool {
        self.dyspnea
            || self.tachypnea
            || self.bradypnea
            || self.retractions
            || self.difficulty_breathing
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CmaFeedingSection {
    pub fasting: bool,
    pub last_intake_time: String,
    pub observations: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CmaEliminationSection {
    pub no_alteration: bool,
    pub urinary_pattern: CmaUrinaryPattern,
    pub intestinal_pattern: CmaIntestinalPattern,
    pub observations: String,
}

impl Default for CmaEliminationSection {
    fn default() -> Self {
        Self {
            no_alteration: true,
            urinary_pattern: CmaUrinaryPattern::default(),
            intestinal_pattern: CmaIntestinalPattern::default(),
            observations: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CmaUrinaryPattern {
    pub continent: bool,
    pub incontinent: bool,
    pub urinary_catheter: bool,
    pub other: String,
}

impl Default for CmaUrinaryPattern {
    fn default() -> Self {
        Self {
            continent: true,
            incontinent: false,
            urinary_catheter: false,
            other: String::new(),
        }
    }
}

impl CmaUrinaryPattern {
    pub fn has_alteration(&self) -> bool {
        !self.continent || self.incontinent || self.urinary_catheter
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CmaIntestinalPattern {
    pub continent: bool,
    pub incontinent: bool,
    pub ostomies: bool,
    pub other: String,
}

impl Default for CmaIntestinalPattern {
    fn default() -> Self {
        Self {
            continent: true,
            incontinent: false,
            ostomies: false,
            other: String::new(),
        }
    }
}

impl CmaIntestinalPattern {
    pub fn has_alteration(&self) -> bool {
        !self.continent || self.incontinent || self.ostomies
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    NoRisk,
    WithRisk,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CmaSafetySection {
    /// Downton scale result, recorded as entered.
    pub fall_risk_score: String,
    pub risk_level: RiskLevel,
    pub vision_alteration: bool,
    pub hearing_alteration: bool,
    pub memory_alteration: bool,
    pub speech_difficulty: bool,
    pub observations: String,
}

impl Default for CmaSafetySection {
    fn default() -> Self {
        Self {
            fall_risk_score: String::new(),
            risk_level: RiskLevel::NoRisk,
            vision_alteration: false,
            hearing_alteration: false,
            memory_alteration: false,
            speech_difficulty: false,
            observations: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConsciousnessLevel {
    Alert,
    Conscious,
    Stuporous,
    Coma,
}

impl ConsciousnessLevel {
    /// Alert and conscious count as unaltered for the communication
    /// aggregate; stupor and coma always force an alteration.
    pub fn is_unaltered(self) -> bool {
        matches!(self, ConsciousnessLevel::Alert | ConsciousnessLevel::Conscious)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CmaCommunicationSection {
    pub no_alteration: bool,
    pub emotional_state: MoodState,
    pub consciousness_level: ConsciousnessLevel,
    pub oriented: bool,
    pub language_barrier: bool,
    pub language: String,
    pub observations: String,
}

impl Default for CmaCommunicationSection {
    fn default() -> Self {
        Self {
            no_alteration: true,
            emotional_state: MoodState::default(),
            consciousness_level: ConsciousnessLevel::Alert,
            oriented: true,
            language_barrier: false,
            language: String::new(),
            observations: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CmaLearningSection {
    pub has_obstacles: bool,
    pub obstacles_description: String,
    /// 1 = none, 5 = extensive.
    pub knowledge_level: u8,
    pub observations: String,
}

impl Default for CmaLearningSection {
    fn default() -> Self {
        Self {
            has_obstacles: false,
            obstacles_description: String::new(),
            knowledge_level: 3,
            observations: String::new(),
        }
    }
}

/// Answer to a pre-surgical checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ChecklistAnswer {
    #[serde(rename = "yes")]
    Yes,
    #[serde(rename = "no")]
    No,
    #[serde(rename = "np")]
    NotApplicable,
}

/// The 13-item checklist the CMA unit walks through before transfer to the
/// operating room. Defaults mirror the printed form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PresurgicalChecklist {
    pub identification_bracelet: ChecklistAnswer,
    pub patient_identification_verified: ChecklistAnswer,
    pub scheduled_surgery: ChecklistAnswer,
    pub anesthesia_consent: ChecklistAnswer,
    pub surgery_consent: ChecklistAnswer,
    pub preoperative_completed: ChecklistAnswer,
    pub surgical_area_prepared: ChecklistAnswer,
    pub metallic_objects_removed: ChecklistAnswer,
    pub prosthesis_removed: ChecklistAnswer,
    pub intestinal_preparation: ChecklistAnswer,
    pub intestinal_preparation_details: String,
    pub peripheral_line_inserted: ChecklistAnswer,
    pub premedication: ChecklistAnswer,
    pub premedication_details: String,
}

impl Default for PresurgicalChecklist {
    fn default() -> Self {
        Self {
            identification_bracelet: ChecklistAnswer::Yes,
            patient_identification_verified: ChecklistAnswer::Yes,
            scheduled_surgery: ChecklistAnswer::Yes,
            anesthesia_consent: ChecklistAnswer::Yes,
            surgery_consent: ChecklistAnswer::Yes,
            preoperative_completed: ChecklistAnswer::Yes,
            surgical_area_prepared: ChecklistAnswer::Yes,
            metallic_objects_removed: ChecklistAnswer::Yes,
            prosthesis_removed: ChecklistAnswer::NotApplicable,
            intestinal_preparation: ChecklistAnswer::NotApplicable,
            intestinal_preparation_details: String::new(),
            peripheral_line_inserted: ChecklistAnswer::Yes,
            premedication: ChecklistAnswer::NotApplicable,
            premedication_details: String::new(),
        }
    }
}
