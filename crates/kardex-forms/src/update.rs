//! Typed field-update messages.
//!
//! Every editable field of every record kind has exactly one update
//! variant; read-only snapshot fields have none, so an illegal edit is
//! unrepresentable rather than rejected at runtime. Applying an update
//! mutates only the targeted field, then runs mutual-exclusion
//! normalization and aggregate reconciliation for the touched section.

use jiff::{Timestamp, Zoned};

use kardex_core::ids;
use kardex_core::models::evaluation::{
    ChecklistAnswer, CmaEvaluation, ConsciousnessLevel, HealthStatus, IntakeLevel, RiskLevel,
    ShortStayEvaluation,
};
use kardex_core::models::surgical_report::{
    MedicationRow, SurgicalReport, VitalConstant, VitalOrigin,
};

use crate::reconcile;
use crate::session::FormRecord;

fn current_hhmm() -> String {
    Zoned::now().strftime("%H:%M").to_string()
}

// ---------------------------------------------------------------------------
// Shared section updates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum MoodUpdate {
    Calm(bool),
    Worried(bool),
    Anxious(bool),
    Sad(bool),
    Apathetic(bool),
    Irritable(bool),
}

impl MoodUpdate {
    fn apply(self, mood: &mut kardex_core::models::evaluation::MoodState) {
        match self {
            MoodUpdate::Calm(v) => mood.calm = v,
            MoodUpdate::Worried(v) => mood.worried = v,
            MoodUpdate::Anxious(v) => mood.anxious = v,
            MoodUpdate::Sad(v) => mood.sad = v,
            MoodUpdate::Apathetic(v) => mood.apathetic = v,
            MoodUpdate::Irritable(v) => mood.irritable = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MobilizationUpdate {
    Autonomous(bool),
    Dependent(bool),
    Bedridden(bool),
    NeedsPartialHelp(bool),
    NeedsTotalHelp(bool),
    Observations(String),
}

impl MobilizationUpdate {
    fn apply(self, section: &mut kardex_core::models::evaluation::MobilizationSection) {
        match self {
            MobilizationUpdate::Autonomous(v) => {
                section.autonomous = v;
                if v {
                    section.dependent = false;
                    section.needs_partial_help = false;
                    section.needs_total_help = false;
                }
            }
            MobilizationUpdate::Dependent(v) => {
                section.dependent = v;
                if v {
                    section.autonomous = false;
                }
            }
            MobilizationUpdate::Bedridden(v) => section.bedridden = v,
            MobilizationUpdate::NeedsPartialHelp(v) => {
                section.needs_partial_help = v;
                if v {
                    section.autonomous = false;
                }
            }
            MobilizationUpdate::NeedsTotalHelp(v) => {
                section.needs_total_help = v;
                if v {
                    section.autonomous = false;
                }
            }
            MobilizationUpdate::Observations(s) => section.observations = s,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RestAndSleepUpdate {
    NormalPattern(bool),
    Difficulty(bool),
    NeedsHelpMedication(bool),
    Observations(String),
}

impl RestAndSleepUpdate {
    fn apply(self, section: &mut kardex_core::models::evaluation::RestAndSleepSection) {
        match self {
            RestAndSleepUpdate::NormalPattern(v) => section.normal_pattern = v,
            RestAndSleepUpdate::Difficulty(v) => section.difficulty = v,
            RestAndSleepUpdate::NeedsHelpMedication(v) => section.needs_help_medication = v,
            RestAndSleepUpdate::Observations(s) => section.observations = s,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ComfortUpdate {
    HasPain(bool),
    PainLocation(String),
    PainTypeAcute(bool),
    PainTypeChronic(bool),
    PainWithMovement(bool),
    PainIntensity(String),
    PainScale(String),
}

impl ComfortUpdate {
    fn apply(self, section: &mut kardex_core::models::evaluation::ComfortSection) {
        match self {
            ComfortUpdate::HasPain(v) => section.has_pain = v,
            ComfortUpdate::PainLocation(s) => section.pain_location = s,
            ComfortUpdate::PainTypeAcute(v) => section.pain_type_acute = v,
            ComfortUpdate::PainTypeChronic(v) => section.pain_type_chronic = v,
            ComfortUpdate::PainWithMovement(v) => section.pain_with_movement = v,
            ComfortUpdate::PainIntensity(s) => section.pain_intensity = s,
            ComfortUpdate::PainScale(s) => section.pain_scale = s,
        }
    }
}

// ---------------------------------------------------------------------------
// Short-stay evaluation updates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum ShortRespirationUpdate {
    /// The aggregate itself is a checkbox on this form; ticking it clears
    /// every constituent flag.
    NoAlteration(bool),
    DifficultyBreathing(bool),
    Tachypnea(bool),
    Dyspnea(bool),
    Bradypnea(bool),
    Observations(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShortFeedingUpdate {
    DifficultyChewing(bool),
    DifficultyDrinking(bool),
    DifficultySwallowing(bool),
    RefusesToEat(bool),
    DentalProsthesis(bool),
    NasogastricTube(bool),
    ParenteralNutrition(bool),
    Ostomy(bool),
    AspirationRisk(bool),
    Vomiting(bool),
    Nausea(bool),
    CurrentWeight(String),
    Height(String),
    Bmi(String),
    UsualWeight(String),
    WeightLossPercentage(String),
    Intake(IntakeLevel),
    MustScore(String),
    Autonomous(bool),
    NeedsHelp(bool),
    Diet(String),
    DailyLiquidIntake(String),
    Observations(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShortUrinaryUpdate {
    Autonomous(bool),
    NeedsHelp(bool),
    Physiological(bool),
    UrinaryCatheter(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShortIntestinalUpdate {
    Autonomous(bool),
    NeedsHelp(bool),
    Physiological(bool),
    Ostomy(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShortEliminationUpdate {
    Urinary(ShortUrinaryUpdate),
    Intestinal(ShortIntestinalUpdate),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShortSafetyUpdate {
    /// Radio pair: `true` selects infection risk, `false` selects no risk.
    InfectionRisk(bool),
    Drainage(bool),
    UrinaryCatheter(bool),
    CentralLine(bool),
    FallRiskScore(String),
    ProtectionProtocol(bool),
    Observations(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShortCommunicationUpdate {
    VisionAlteration(bool),
    HearingAlteration(bool),
    SpeechDifficulty(bool),
    LanguageBarrier(bool),
    Language(String),
    Observations(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum BeliefsAndValuesUpdate {
    HasReligiousCulturalBeliefs(bool),
    AdvanceDirectives(bool),
    Observations(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShortLearningUpdate {
    HealthStatus(HealthStatus),
    KnowledgeLevel(u8),
    Observations(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShortStayUpdate {
    Nurse(String),
    HasAllergies(bool),
    AllergiesDetails(String),
    PersonalHistory(String),
    HabitualMedication(String),
    SignedBy(String),
    AdditionalComments(String),
    Respiration(ShortRespirationUpdate),
    Feeding(ShortFeedingUpdate),
    Elimination(ShortEliminationUpdate),
    Mobilization(MobilizationUpdate),
    RestAndSleep(RestAndSleepUpdate),
    Safety(ShortSafetyUpdate),
    Communication(ShortCommunicationUpdate),
    BeliefsAndValues(BeliefsAndValuesUpdate),
    Comfort(ComfortUpdate),
    Learning(ShortLearningUpdate),
    Psychosocial(MoodUpdate),
}

fn apply_short_stay(record: &mut ShortStayEvaluation, update: ShortStayUpdate) {
    match update {
        ShortStayUpdate::Nurse(s) => record.nurse = s,
        ShortStayUpdate::HasAllergies(v) => record.has_allergies = v,
        ShortStayUpdate::AllergiesDetails(s) => record.allergies_details = s,
        ShortStayUpdate::PersonalHistory(s) => record.personal_history = s,
        ShortStayUpdate::HabitualMedication(s) => record.habitual_medication = s,
        ShortStayUpdate::SignedBy(s) => record.signed_by = s,
        ShortStayUpdate::AdditionalComments(s) => record.additional_comments = s,
        ShortStayUpdate::Respiration(u) => {
            let section = &mut record.respiration;
            match u {
                ShortRespirationUpdate::NoAlteration(v) => {
                    section.no_alteration = v;
                    if v {
                        section.difficulty_breathing = false;
                        section.tachypnea = false;
                        section.dyspnea = false;
                        section.bradypnea = false;
                    }
                }
                ShortRespirationUpdate::DifficultyBreathing(v) => {
                    section.difficulty_breathing = v;
                    reconcile::short_respiration(section);
                }
                ShortRespirationUpdate::Tachypnea(v) => {
                    section.tachypnea = v;
                    reconcile::short_respiration(section);
                }
                ShortRespirationUpdate::Dyspnea(v) => {
                    section.dyspnea = v;
                    reconcile::short_respiration(section);
                }
                ShortRespirationUpdate::Bradypnea(v) => {
                    section.bradypnea = v;
                    reconcile::short_respiration(section);
                }
                ShortRespirationUpdate::Observations(s) => section.observations = s,
            }
        }
        ShortStayUpdate::Feeding(u) => {
            let section = &mut record.feeding;
            match u {
                ShortFeedingUpdate::DifficultyChewing(v) => section.difficulty_chewing = v,
                ShortFeedingUpdate::DifficultyDrinking(v) => section.difficulty_drinking = v,
                ShortFeedingUpdate::DifficultySwallowing(v) => section.difficulty_swallowing = v,
                ShortFeedingUpdate::RefusesToEat(v) => section.refuses_to_eat = v,
                ShortFeedingUpdate::DentalProsthesis(v) => section.dental_prosthesis = v,
                ShortFeedingUpdate::NasogastricTube(v) => section.nasogastric_tube = v,
                ShortFeedingUpdate::ParenteralNutrition(v) => section.parenteral_nutrition = v,
                ShortFeedingUpdate::Ostomy(v) => section.ostomy = v,
                ShortFeedingUpdate::AspirationRisk(v) => section.aspiration_risk = v,
                ShortFeedingUpdate::Vomiting(v) => section.vomiting = v,
                ShortFeedingUpdate::Nausea(v) => section.nausea = v,
                ShortFeedingUpdate::CurrentWeight(s) => section.current_weight = s,
                ShortFeedingUpdate::Height(s) => section.height = s,
                ShortFeedingUpdate::Bmi(s) => section.bmi = s,
                ShortFeedingUpdate::UsualWeight(s) => section.usual_weight = s,
                ShortFeedingUpdate::WeightLossPercentage(s) => {
                    section.weight_loss_percentage = s;
                }
                ShortFeedingUpdate::Intake(level) => section.intake = level,
                ShortFeedingUpdate::MustScore(s) => section.must_score = s,
                ShortFeedingUpdate::Autonomous(v) => {
                    section.autonomous = v;
                    if v {
                        section.needs_help = false;
                    }
                }
                ShortFeedingUpdate::NeedsHelp(v) => {
                    section.needs_help = v;
                    if v {
                        section.autonomous = false;
                    }
                }
                ShortFeedingUpdate::Diet(s) => section.diet = s,
                ShortFeedingUpdate::DailyLiquidIntake(s) => section.daily_liquid_intake = s,
                ShortFeedingUpdate::Observations(s) => section.observations = s,
            }
            reconcile::short_feeding(section);
        }
        ShortStayUpdate::Elimination(u) => match u {
            ShortEliminationUpdate::Urinary(u) => {
                let pattern = &mut record.elimination.urinary_pattern;
                match u {
                    ShortUrinaryUpdate::Autonomous(v) => {
                        pattern.autonomous = v;
                        if v {
                            pattern.needs_help = false;
                        }
                    }
                    ShortUrinaryUpdate::NeedsHelp(v) => {
                        pattern.needs_help = v;
                        if v {
                            pattern.autonomous = false;
                        }
                    }
                    ShortUrinaryUpdate::Physiological(v) => pattern.physiological = v,
                    ShortUrinaryUpdate::UrinaryCatheter(v) => pattern.urinary_catheter = v,
                }
            }
            ShortEliminationUpdate::Intestinal(u) => {
                let pattern = &mut record.elimination.intestinal_pattern;
                match u {
                    ShortIntestinalUpdate::Autonomous(v) => {
                        pattern.autonomous = v;
                        if v {
                            pattern.needs_help = false;
                        }
                    }
                    ShortIntestinalUpdate::NeedsHelp(v) => {
                        pattern.needs_help = v;
                        if v {
                            pattern.autonomous = false;
                        }
                    }
                    ShortIntestinalUpdate::Physiological(v) => pattern.physiological = v,
                    ShortIntestinalUpdate::Ostomy(v) => pattern.ostomy = v,
                }
            }
        },
        ShortStayUpdate::Mobilization(u) => u.apply(&mut record.mobilization),
        ShortStayUpdate::RestAndSleep(u) => u.apply(&mut record.rest_and_sleep),
        ShortStayUpdate::Safety(u) => {
            let section = &mut record.safety;
            match u {
                ShortSafetyUpdate::InfectionRisk(v) => {
                    section.infection_risk = v;
                    section.no_infection_risk = !v;
                }
                ShortSafetyUpdate::Drainage(v) => section.drainage = v,
                ShortSafetyUpdate::UrinaryCatheter(v) => section.urinary_catheter = v,
                ShortSafetyUpdate::CentralLine(v) => section.central_line = v,
                ShortSafetyUpdate::FallRiskScore(s) => section.fall_risk_score = s,
                ShortSafetyUpdate::ProtectionProtocol(v) => section.protection_protocol = v,
                ShortSafetyUpdate::Observations(s) => section.observations = s,
            }
        }
        ShortStayUpdate::Communication(u) => {
            let section = &mut record.communication;
            match u {
                ShortCommunicationUpdate::VisionAlteration(v) => section.vision_alteration = v,
                ShortCommunicationUpdate::HearingAlteration(v) => section.hearing_alteration = v,
                ShortCommunicationUpdate::SpeechDifficulty(v) => section.speech_difficulty = v,
                ShortCommunicationUpdate::LanguageBarrier(v) => section.language_barrier = v,
                ShortCommunicationUpdate::Language(s) => section.language = s,
                ShortCommunicationUpdate::Observations(s) => section.observations = s,
            }
            reconcile::short_communication(section);
        }
        ShortStayUpdate::BeliefsAndValues(u) => {
            let section = &mut record.beliefs_and_values;
            match u {
                BeliefsAndValuesUpdate::HasReligiousCulturalBeliefs(v) => {
                    section.has_religious_cultural_beliefs = v;
                }
                BeliefsAndValuesUpdate::AdvanceDirectives(v) => section.advance_directives = v,
                BeliefsAndValuesUpdate::Observations(s) => section.observations = s,
            }
        }
        ShortStayUpdate::Comfort(u) => u.apply(&mut record.comfort),
        ShortStayUpdate::Learning(u) => {
            let section = &mut record.learning;
            match u {
                ShortLearningUpdate::HealthStatus(v) => section.health_status = v,
                ShortLearningUpdate::KnowledgeLevel(v) => section.knowledge_level = v,
                ShortLearningUpdate::Observations(s) => section.observations = s,
            }
        }
        ShortStayUpdate::Psychosocial(u) => u.apply(&mut record.psychosocial),
    }
}

// ---------------------------------------------------------------------------
// CMA evaluation updates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum CmaRespirationUpdate {
    Dyspnea(bool),
    Tachypnea(bool),
    Bradypnea(bool),
    Retractions(bool),
    DifficultyBreathing(bool),
    Observations(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CmaFeedingUpdate {
    Fasting(bool),
    LastIntakeTime(String),
    Observations(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CmaUrinaryUpdate {
    Continent(bool),
    Incontinent(bool),
    UrinaryCatheter(bool),
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CmaIntestinalUpdate {
    Continent(bool),
    Incontinent(bool),
    Ostomies(bool),
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CmaEliminationUpdate {
    Urinary(CmaUrinaryUpdate),
    Intestinal(CmaIntestinalUpdate),
    Observations(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CmaSafetyUpdate {
    FallRiskScore(String),
    RiskLevel(RiskLevel),
    VisionAlteration(bool),
    HearingAlteration(bool),
    MemoryAlteration(bool),
    SpeechDifficulty(bool),
    Observations(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CmaCommunicationUpdate {
    Mood(MoodUpdate),
    ConsciousnessLevel(ConsciousnessLevel),
    Oriented(bool),
    LanguageBarrier(bool),
    Language(String),
    Observations(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CmaLearningUpdate {
    HasObstacles(bool),
    ObstaclesDescription(String),
    KnowledgeLevel(u8),
    Observations(String),
}

/// The thirteen answerable checklist items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecklistItem {
    IdentificationBracelet,
    PatientIdentificationVerified,
    ScheduledSurgery,
    AnesthesiaConsent,
    SurgeryConsent,
    PreoperativeCompleted,
    SurgicalAreaPrepared,
    MetallicObjectsRemoved,
    ProsthesisRemoved,
    IntestinalPreparation,
    PeripheralLineInserted,
    Premedication,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChecklistUpdate {
    Answer(ChecklistItem, ChecklistAnswer),
    IntestinalPreparationDetails(String),
    PremedicationDetails(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CmaUpdate {
    Nurse(String),
    HabitualMedication(String),
    Respiration(CmaRespirationUpdate),
    Feeding(CmaFeedingUpdate),
    Elimination(CmaEliminationUpdate),
    Mobilization(MobilizationUpdate),
    RestAndSleep(RestAndSleepUpdate),
    Safety(CmaSafetyUpdate),
    Communication(CmaCommunicationUpdate),
    Comfort(ComfortUpdate),
    Learning(CmaLearningUpdate),
    Checklist(ChecklistUpdate),
}

fn apply_cma(record: &mut CmaEvaluation, update: CmaUpdate) {
    match update {
        CmaUpdate::Nurse(s) => record.nurse = s,
        CmaUpdate::HabitualMedication(s) => record.habitual_medication = s,
        CmaUpdate::Respiration(u) => {
            let section = &mut record.respiration;
            match u {
                CmaRespirationUpdate::Dyspnea(v) => section.dyspnea = v,
                CmaRespirationUpdate::Tachypnea(v) => section.tachypnea = v,
                CmaRespirationUpdate::Bradypnea(v) => section.bradypnea = v,
                CmaRespirationUpdate::Retractions(v) => section.retractions = v,
                CmaRespirationUpdate::DifficultyBreathing(v) => section.difficulty_breathing = v,
                CmaRespirationUpdate::Observations(s) => section.observations = s,
            }
            reconcile::cma_respiration(section);
        }
        CmaUpdate::Feeding(u) => {
            let section = &mut record.feeding;
            match u {
                CmaFeedingUpdate::Fasting(v) => section.fasting = v,
                CmaFeedingUpdate::LastIntakeTime(s) => section.last_intake_time = s,
                CmaFeedingUpdate::Observations(s) => section.observations = s,
            }
        }
        CmaUpdate::Elimination(u) => {
            let section = &mut record.elimination;
            match u {
                CmaEliminationUpdate::Urinary(u) => {
                    let pattern = &mut section.urinary_pattern;
                    match u {
                        CmaUrinaryUpdate::Continent(v) => {
                            pattern.continent = v;
                            if v {
                                pattern.incontinent = false;
                            }
                        }
                        CmaUrinaryUpdate::Incontinent(v) => {
                            pattern.incontinent = v;
                            if v {
                                pattern.continent = false;
                            }
                        }
                        CmaUrinaryUpdate::UrinaryCatheter(v) => pattern.urinary_catheter = v,
                        CmaUrinaryUpdate::Other(s) => pattern.other = s,
                    }
                }
                CmaEliminationUpdate::Intestinal(u) => {
                    let pattern = &mut section.intestinal_pattern;
                    match u {
                        CmaIntestinalUpdate::Continent(v) => {
                            pattern.continent = v;
                            if v {
                                pattern.incontinent = false;
                            }
                        }
                        CmaIntestinalUpdate::Incontinent(v) => {
                            pattern.incontinent = v;
                            if v {
                                pattern.continent = false;
                            }
                        }
                        CmaIntestinalUpdate::Ostomies(v) => pattern.ostomies = v,
                        CmaIntestinalUpdate::Other(s) => pattern.other = s,
                    }
                }
                CmaEliminationUpdate::Observations(s) => section.observations = s,
            }
            reconcile::cma_elimination(section);
        }
        CmaUpdate::Mobilization(u) => u.apply(&mut record.mobilization),
        CmaUpdate::RestAndSleep(u) => u.apply(&mut record.rest_and_sleep),
        CmaUpdate::Safety(u) => {
            let section = &mut record.safety;
            match u {
                CmaSafetyUpdate::FallRiskScore(s) => section.fall_risk_score = s,
                CmaSafetyUpdate::RiskLevel(v) => section.risk_level = v,
                CmaSafetyUpdate::VisionAlteration(v) => section.vision_alteration = v,
                CmaSafetyUpdate::HearingAlteration(v) => section.hearing_alteration = v,
                CmaSafetyUpdate::MemoryAlteration(v) => section.memory_alteration = v,
                CmaSafetyUpdate::SpeechDifficulty(v) => section.speech_difficulty = v,
                CmaSafetyUpdate::Observations(s) => section.observations = s,
            }
        }
        CmaUpdate::Communication(u) => {
            let section = &mut record.communication;
            match u {
                CmaCommunicationUpdate::Mood(u) => u.apply(&mut section.emotional_state),
                CmaCommunicationUpdate::ConsciousnessLevel(v) => section.consciousness_level = v,
                CmaCommunicationUpdate::Oriented(v) => section.oriented = v,
                CmaCommunicationUpdate::LanguageBarrier(v) => section.language_barrier = v,
                CmaCommunicationUpdate::Language(s) => section.language = s,
                CmaCommunicationUpdate::Observations(s) => section.observations = s,
            }
            reconcile::cma_communication(section);
        }
        CmaUpdate::Comfort(u) => u.apply(&mut record.comfort),
        CmaUpdate::Learning(u) => {
            let section = &mut record.learning;
            match u {
                CmaLearningUpdate::HasObstacles(v) => section.has_obstacles = v,
                CmaLearningUpdate::ObstaclesDescription(s) => section.obstacles_description = s,
                CmaLearningUpdate::KnowledgeLevel(v) => section.knowledge_level = v,
                CmaLearningUpdate::Observations(s) => section.observations = s,
            }
        }
        CmaUpdate::Checklist(u) => {
            let checklist = &mut record.presurgical_checklist;
            match u {
                ChecklistUpdate::Answer(item, answer) => {
                    let slot = match item {
                        ChecklistItem::IdentificationBracelet => {
                            &mut checklist.identification_bracelet
                        }
                        ChecklistItem::PatientIdentificationVerified => {
                            &mut checklist.patient_identification_verified
                        }
                        ChecklistItem::ScheduledSurgery => &mut checklist.scheduled_surgery,
                        ChecklistItem::AnesthesiaConsent => &mut checklist.anesthesia_consent,
                        ChecklistItem::SurgeryConsent => &mut checklist.surgery_consent,
                        ChecklistItem::PreoperativeCompleted => {
                            &mut checklist.preoperative_completed
                        }
                        ChecklistItem::SurgicalAreaPrepared => {
                            &mut checklist.surgical_area_prepared
                        }
                        ChecklistItem::MetallicObjectsRemoved => {
                            &mut checklist.metallic_objects_removed
                        }
                        ChecklistItem::ProsthesisRemoved => &mut checklist.prosthesis_removed,
                        ChecklistItem::IntestinalPreparation => {
                            &mut checklist.intestinal_preparation
                        }
                        ChecklistItem::PeripheralLineInserted => {
                            &mut checklist.peripheral_line_inserted
                        }
                        ChecklistItem::Premedication => &mut checklist.premedication,
                    };
                    *slot = answer;
                }
                ChecklistUpdate::IntestinalPreparationDetails(s) => {
                    checklist.intestinal_preparation_details = s;
                }
                ChecklistUpdate::PremedicationDetails(s) => {
                    checklist.premedication_details = s;
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Surgical report updates
// ---------------------------------------------------------------------------

/// The twelve editable pre-operative checklist booleans on page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportChecklistItem {
    RetiradaDispositivos,
    RetiradaDentadura,
    RasuradoZona,
    PruebasEcg,
    PruebasRx,
    PruebasAs,
    PruebasInfExterno,
    VerificacionCirujano,
    VerificacionAnestesista,
    Marcaje,
    PruebasCruzadas,
    Transfusion,
}

#[derive(Debug, Clone, PartialEq)]
pub enum VitalConstantField {
    Hora(String),
    TasSistolica(i32),
    TadDiastolica(i32),
    Fc(i32),
    SatO2(i32),
    Eva(i32),
}

#[derive(Debug, Clone, PartialEq)]
pub enum MedicationField {
    Hora(String),
    Medicacion(String),
    Dosis(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportUpdate {
    Checklist(ReportChecklistItem, bool),
    MedicacionQuirofano(String),
    ObservacionesPagina1(String),
    FechaEntradaUrpa(String),
    FechaSalidaUrpa(String),
    OrdenesMedicas(String),
    ViasVenosas(String),
    Vendaje(String),
    SondaVesical(String),
    Oxigenoterapia(String),
    Drenajes(String),
    Otros(String),
    Apositos(String),
    Enfermera(String),
    /// Append a fresh operating-room reading stamped with the current
    /// wall-clock time and nominal seed values.
    AddVitalConstant,
    /// Silent no-op for `planta` rows, which are immutable seed data.
    RemoveVitalConstant { id: String },
    EditVitalConstant { id: String, field: VitalConstantField },
    AddMedicationRow,
    RemoveMedicationRow { id: String },
    EditMedicationRow { id: String, field: MedicationField },
}

fn apply_report(report: &mut SurgicalReport, update: ReportUpdate) {
    match update {
        ReportUpdate::Checklist(item, v) => {
            let slot = match item {
                ReportChecklistItem::RetiradaDispositivos => &mut report.retirada_dispositivos,
                ReportChecklistItem::RetiradaDentadura => &mut report.retirada_dentadura,
                ReportChecklistItem::RasuradoZona => &mut report.rasurado_zona,
                ReportChecklistItem::PruebasEcg => &mut report.pruebas_ecg,
                ReportChecklistItem::PruebasRx => &mut report.pruebas_rx,
                ReportChecklistItem::PruebasAs => &mut report.pruebas_as,
                ReportChecklistItem::PruebasInfExterno => &mut report.pruebas_inf_externo,
                ReportChecklistItem::VerificacionCirujano => &mut report.verificacion_cirujano,
                ReportChecklistItem::VerificacionAnestesista => {
                    &mut report.verificacion_anestesista
                }
                ReportChecklistItem::Marcaje => &mut report.marcaje,
                ReportChecklistItem::PruebasCruzadas => &mut report.pruebas_cruzadas,
                ReportChecklistItem::Transfusion => &mut report.transfusion,
            };
            *slot = v;
        }
        ReportUpdate::MedicacionQuirofano(s) => report.medicacion_quirofano = s,
        ReportUpdate::ObservacionesPagina1(s) => report.observaciones_pagina1 = s,
        ReportUpdate::FechaEntradaUrpa(s) => report.fecha_entrada_urpa = s,
        ReportUpdate::FechaSalidaUrpa(s) => report.fecha_salida_urpa = s,
        ReportUpdate::OrdenesMedicas(s) => report.ordenes_medicas = s,
        ReportUpdate::ViasVenosas(s) => report.vias_venosas = s,
        ReportUpdate::Vendaje(s) => report.vendaje = s,
        ReportUpdate::SondaVesical(s) => report.sonda_vesical = s,
        ReportUpdate::Oxigenoterapia(s) => report.oxigenoterapia = s,
        ReportUpdate::Drenajes(s) => report.drenajes = s,
        ReportUpdate::Otros(s) => report.otros = s,
        ReportUpdate::Apositos(s) => report.apositos = s,
        ReportUpdate::Enfermera(s) => report.enfermera = s,
        ReportUpdate::AddVitalConstant => {
            report.constantes_vitales.push(VitalConstant {
                id: ids::generate(ids::VITAL_CONSTANT),
                hora: current_hhmm(),
                tas_sistolica: 120,
                tad_diastolica: 80,
                fc: 75,
                sat_o2: 98,
                eva: 0,
                origen: VitalOrigin::Quirofano,
            });
        }
        ReportUpdate::RemoveVitalConstant { id } => {
            report
                .constantes_vitales
                .retain(|c| c.id != id || c.origen == VitalOrigin::Planta);
        }
        ReportUpdate::EditVitalConstant { id, field } => {
            if let Some(row) = report
                .constantes_vitales
                .iter_mut()
                .find(|c| c.id == id && c.origen == VitalOrigin::Quirofano)
            {
                match field {
                    VitalConstantField::Hora(s) => row.hora = s,
                    VitalConstantField::TasSistolica(v) => row.tas_sistolica = v,
                    VitalConstantField::TadDiastolica(v) => row.tad_diastolica = v,
                    VitalConstantField::Fc(v) => row.fc = v,
                    VitalConstantField::SatO2(v) => row.sat_o2 = v,
                    VitalConstantField::Eva(v) => row.eva = v,
                }
            }
        }
        ReportUpdate::AddMedicationRow => {
            report.medicacion_administrada.push(MedicationRow {
                id: ids::generate(ids::MEDICATION_ROW),
                hora: current_hhmm(),
                medicacion: String::new(),
                dosis: String::new(),
            });
        }
        ReportUpdate::RemoveMedicationRow { id } => {
            report.medicacion_administrada.retain(|m| m.id != id);
        }
        ReportUpdate::EditMedicationRow { id, field } => {
            if let Some(row) = report.medicacion_administrada.iter_mut().find(|m| m.id == id) {
                match field {
                    MedicationField::Hora(s) => row.hora = s,
                    MedicationField::Medicacion(s) => row.medicacion = s,
                    MedicationField::Dosis(s) => row.dosis = s,
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// FormRecord wiring
// ---------------------------------------------------------------------------

impl FormRecord for ShortStayEvaluation {
    type Update = ShortStayUpdate;
    const PAGE_COUNT: u8 = 2;
    const ID_PREFIX: &'static str = ids::EVALUATION;

    fn apply_update(&mut self, update: Self::Update) {
        apply_short_stay(self, update);
    }

    fn nurse_name(&self) -> &str {
        &self.nurse
    }

    fn is_committed(&self) -> bool {
        !self.id.is_empty()
    }

    fn commit_identity(&mut self, id: String, at: Timestamp) {
        self.id = id;
        self.date = Some(at);
    }
}

impl FormRecord for CmaEvaluation {
    type Update = CmaUpdate;
    const PAGE_COUNT: u8 = 1;
    const ID_PREFIX: &'static str = ids::EVALUATION;

    fn apply_update(&mut self, update: Self::Update) {
        apply_cma(self, update);
    }

    fn nurse_name(&self) -> &str {
        &self.nurse
    }

    fn is_committed(&self) -> bool {
        !self.id.is_empty()
    }

    fn commit_identity(&mut self, id: String, at: Timestamp) {
        self.id = id;
        self.date = Some(at);
    }
}

impl FormRecord for SurgicalReport {
    type Update = ReportUpdate;
    const PAGE_COUNT: u8 = 2;
    const ID_PREFIX: &'static str = ids::SURGICAL_REPORT;

    fn apply_update(&mut self, update: Self::Update) {
        apply_report(self, update);
    }

    fn nurse_name(&self) -> &str {
        &self.enfermera
    }

    fn is_committed(&self) -> bool {
        !self.id.is_empty()
    }

    // The creation instant is stamped at prefill for reports; committing
    // only assigns the identifier.
    fn commit_identity(&mut self, id: String, _at: Timestamp) {
        self.id = id;
    }
}
