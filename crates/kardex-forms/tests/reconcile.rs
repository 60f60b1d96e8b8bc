use kardex_core::models::evaluation::{CmaRespirationSection, ConsciousnessLevel};
use kardex_forms::factory;
use kardex_forms::reconcile;
use kardex_forms::session::FormSession;
use kardex_forms::update::{
    CmaCommunicationUpdate, CmaIntestinalUpdate, CmaRespirationUpdate, CmaUpdate,
    CmaUrinaryUpdate, CmaEliminationUpdate, MobilizationUpdate, MoodUpdate,
    ShortFeedingUpdate, ShortRespirationUpdate, ShortStayUpdate,
};

#[test]
fn cma_respiration_aggregate_matches_nor_for_every_assignment() {
    for bits in 0u8..32 {
        let mut session = FormSession::start_new(factory::empty_cma());
        let flags = [
            bits & 1 != 0,
            bits & 2 != 0,
            bits & 4 != 0,
            bits & 8 != 0,
            bits & 16 != 0,
        ];
        session.apply(CmaUpdate::Respiration(CmaRespirationUpdate::Dyspnea(flags[0])));
        session.apply(CmaUpdate::Respiration(CmaRespirationUpdate::Tachypnea(flags[1])));
        session.apply(CmaUpdate::Respiration(CmaRespirationUpdate::Bradypnea(flags[2])));
        session.apply(CmaUpdate::Respiration(CmaRespirationUpdate::Retractions(flags[3])));
        session.apply(CmaUpdate::Respiration(CmaRespirationUpdate::DifficultyBreathing(
            flags[4],
        )));

        let expected = !flags.iter().any(|&f| f);
        assert_eq!(
            session.draft().respiration.no_alteration,
            expected,
            "bits {bits:05b}",
        );
    }
}

#[test]
fn reconciliation_is_idempotent() {
    let mut section = CmaRespirationSection {
        dyspnea: true,
        no_alteration: true, // deliberately inconsistent
        ..CmaRespirationSection::default()
    };
    reconcile::cma_respiration(&mut section);
    let once = section.clone();
    reconcile::cma_respiration(&mut section);
    assert_eq!(section, once);
}

#[test]
fn cma_dyspnea_clears_the_aggregate() {
    let mut session = FormSession::start_new(factory::empty_cma());
    assert!(session.draft().respiration.no_alteration);

    session.apply(CmaUpdate::Respiration(CmaRespirationUpdate::Dyspnea(true)));
    assert!(!session.draft().respiration.no_alteration);

    session.apply(CmaUpdate::Respiration(CmaRespirationUpdate::Dyspnea(false)));
    assert!(session.draft().respiration.no_alteration);
}

#[test]
fn cma_elimination_aggregate_requires_both_patterns_clean() {
    let mut session = FormSession::start_new(factory::empty_cma());
    assert!(session.draft().elimination.no_alteration);

    session.apply(CmaUpdate::Elimination(CmaEliminationUpdate::Urinary(
        CmaUrinaryUpdate::UrinaryCatheter(true),
    )));
    assert!(!session.draft().elimination.no_alteration);

    // Clearing the urinary alteration alone is not enough while the
    // intestinal pattern is altered.
    session.apply(CmaUpdate::Elimination(CmaEliminationUpdate::Intestinal(
        CmaIntestinalUpdate::Incontinent(true),
    )));
    session.apply(CmaUpdate::Elimination(CmaEliminationUpdate::Urinary(
        CmaUrinaryUpdate::UrinaryCatheter(false),
    )));
    assert!(!session.draft().elimination.no_alteration);

    session.apply(CmaUpdate::Elimination(CmaEliminationUpdate::Intestinal(
        CmaIntestinalUpdate::Continent(true),
    )));
    assert!(session.draft().elimination.no_alteration);
}

#[test]
fn cma_continence_pair_is_mutually_exclusive() {
    let mut session = FormSession::start_new(factory::empty_cma());

    session.apply(CmaUpdate::Elimination(CmaEliminationUpdate::Urinary(
        CmaUrinaryUpdate::Incontinent(true),
    )));
    let pattern = &session.draft().elimination.urinary_pattern;
    assert!(pattern.incontinent);
    assert!(!pattern.continent);

    session.apply(CmaUpdate::Elimination(CmaEliminationUpdate::Urinary(
        CmaUrinaryUpdate::Continent(true),
    )));
    let pattern = &session.draft().elimination.urinary_pattern;
    assert!(pattern.continent);
    assert!(!pattern.incontinent);
}

#[test]
fn cma_communication_aggregate_tracks_every_contributor() {
    let mut session = FormSession::start_new(factory::empty_cma());
    assert!(session.draft().communication.no_alteration);

    session.apply(CmaUpdate::Communication(CmaCommunicationUpdate::Mood(
        MoodUpdate::Anxious(true),
    )));
    assert!(!session.draft().communication.no_alteration);
    session.apply(CmaUpdate::Communication(CmaCommunicationUpdate::Mood(
        MoodUpdate::Anxious(false),
    )));
    assert!(session.draft().communication.no_alteration);

    session.apply(CmaUpdate::Communication(CmaCommunicationUpdate::ConsciousnessLevel(
        ConsciousnessLevel::Stuporous,
    )));
    assert!(!session.draft().communication.no_alteration);
    session.apply(CmaUpdate::Communication(CmaCommunicationUpdate::ConsciousnessLevel(
        ConsciousnessLevel::Conscious,
    )));
    assert!(session.draft().communication.no_alteration);

    session.apply(CmaUpdate::Communication(CmaCommunicationUpdate::Oriented(false)));
    assert!(!session.draft().communication.no_alteration);
    session.apply(CmaUpdate::Communication(CmaCommunicationUpdate::Oriented(true)));

    session.apply(CmaUpdate::Communication(CmaCommunicationUpdate::LanguageBarrier(true)));
    assert!(!session.draft().communication.no_alteration);
    session.apply(CmaUpdate::Communication(CmaCommunicationUpdate::LanguageBarrier(false)));
    assert!(session.draft().communication.no_alteration);
}

#[test]
fn calm_is_not_an_emotional_alteration() {
    let mut session = FormSession::start_new(factory::empty_cma());
    session.apply(CmaUpdate::Communication(CmaCommunicationUpdate::Mood(
        MoodUpdate::Calm(false),
    )));
    assert!(session.draft().communication.no_alteration);
}

#[test]
fn short_respiration_checkbox_clears_constituents() {
    let mut session = FormSession::start_new(factory::empty_short_stay());

    session.apply(ShortStayUpdate::Respiration(ShortRespirationUpdate::Dyspnea(true)));
    session.apply(ShortStayUpdate::Respiration(ShortRespirationUpdate::Tachypnea(true)));
    assert!(!session.draft().respiration.no_alteration);

    session.apply(ShortStayUpdate::Respiration(ShortRespirationUpdate::NoAlteration(true)));
    let section = &session.draft().respiration;
    assert!(section.no_alteration);
    assert!(!section.dyspnea);
    assert!(!section.tachypnea);
    assert!(!section.difficulty_breathing);
    assert!(!section.bradypnea);
}

#[test]
fn short_respiration_aggregate_is_not_restored_automatically() {
    let mut session = FormSession::start_new(factory::empty_short_stay());
    session.apply(ShortStayUpdate::Respiration(ShortRespirationUpdate::NoAlteration(false)));
    session.apply(ShortStayUpdate::Respiration(ShortRespirationUpdate::Dyspnea(true)));
    session.apply(ShortStayUpdate::Respiration(ShortRespirationUpdate::Dyspnea(false)));
    // The nurse has to tick the checkbox again herself.
    assert!(!session.draft().respiration.no_alteration);
}

#[test]
fn short_feeding_aggregate_is_recomputed() {
    let mut session = FormSession::start_new(factory::empty_short_stay());
    session.apply(ShortStayUpdate::Feeding(ShortFeedingUpdate::Nausea(true)));
    assert!(!session.draft().feeding.no_alteration);
    session.apply(ShortStayUpdate::Feeding(ShortFeedingUpdate::Nausea(false)));
    assert!(session.draft().feeding.no_alteration);
}

#[test]
fn feeding_autonomy_pair_is_mutually_exclusive() {
    let mut session = FormSession::start_new(factory::empty_short_stay());
    session.apply(ShortStayUpdate::Feeding(ShortFeedingUpdate::NeedsHelp(true)));
    assert!(!session.draft().feeding.autonomous);
    session.apply(ShortStayUpdate::Feeding(ShortFeedingUpdate::Autonomous(true)));
    assert!(!session.draft().feeding.needs_help);
}

#[test]
fn mobilization_autonomy_is_mutually_exclusive_both_ways() {
    let mut session = FormSession::start_new(factory::empty_cma());

    session.apply(CmaUpdate::Mobilization(MobilizationUpdate::NeedsTotalHelp(true)));
    assert!(session.draft().mobilization.needs_total_help);
    assert!(!session.draft().mobilization.autonomous);

    session.apply(CmaUpdate::Mobilization(MobilizationUpdate::Autonomous(true)));
    let section = &session.draft().mobilization;
    assert!(section.autonomous);
    assert!(!section.needs_total_help);
    assert!(!section.needs_partial_help);
    assert!(!section.dependent);
}

#[test]
fn infection_risk_is_a_radio_pair() {
    let mut session = FormSession::start_new(factory::empty_short_stay());
    assert!(session.draft().safety.no_infection_risk);

    session.apply(ShortStayUpdate::Safety(
        kardex_forms::update::ShortSafetyUpdate::InfectionRisk(true),
    ));
    assert!(session.draft().safety.infection_risk);
    assert!(!session.draft().safety.no_infection_risk);

    session.apply(ShortStayUpdate::Safety(
        kardex_forms::update::ShortSafetyUpdate::InfectionRisk(false),
    ));
    assert!(!session.draft().safety.infection_risk);
    assert!(session.draft().safety.no_infection_risk);
}
