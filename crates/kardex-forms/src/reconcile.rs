//! Derived-flag reconciliation.
//!
//! Each governed need section carries one aggregate boolean ("no alteration
//! observed") that must stay consistent with its constituent flags. The
//! functions here recompute the aggregate from the current constituents and
//! are invoked synchronously after every field update that touches a
//! governed section. All of them are idempotent: re-applying to an already
//! consistent section changes nothing.
//!
//! Three rules cover every governed section:
//! - many-to-one: the aggregate is the NOR of the constituent flags and is
//!   never edited directly;
//! - one-clears-many: the aggregate is itself a checkbox; any constituent
//!   being set forces it off, but nothing forces it back on — the nurse
//!   re-asserts it explicitly (see `update`);
//! - compound: the aggregate is true iff every contributing sub-group
//!   independently reports no alteration.

use kardex_core::models::evaluation::{
    CmaCommunicationSection, CmaEliminationSection, CmaRespirationSection,
    ShortCommunicationSection, ShortFeedingSection, ShortRespirationSection,
};

/// CMA respiration: aggregate = NOR of the five constituent flags.
pub fn cma_respiration(section: &mut CmaRespirationSection) {
    section.no_alteration = !section.has_alteration();
}

/// CMA elimination: the aggregate holds iff both the urinary and the
/// intestinal pattern report no alteration.
pub fn cma_elimination(section: &mut CmaEliminationSection) {
    section.no_alteration =
        !section.urinary_pattern.has_alteration() && !section.intestinal_pattern.has_alteration();
}

/// CMA communication: the aggregate holds iff there is no emotional
/// alteration, consciousness is alert or conscious, the patient is oriented
/// and there is no language barrier.
pub fn cma_communication(section: &mut CmaCommunicationSection) {
    section.no_alteration = !section.emotional_state.has_alteration()
        && section.consciousness_level.is_unaltered()
        && section.oriented
        && !section.language_barrier;
}

/// Short-stay respiration: the aggregate is a checkbox of its own, so
/// reconciliation only enforces the one-directional guarantee — any
/// constituent being set forces the aggregate off.
pub fn short_respiration(section: &mut ShortRespirationSection) {
    if section.has_alteration() {
        section.no_alteration = false;
    }
}

/// Short-stay feeding: aggregate = NOR of the eleven symptom flags. The
/// nutrition screening and autonomy fields do not participate.
pub fn short_feeding(section: &mut ShortFeedingSection) {
    section.no_alteration = !section.has_alteration();
}

/// Short-stay communication: aggregate = NOR of the four alteration flags.
pub fn short_communication(section: &mut ShortCommunicationSection) {
    section.no_alteration = !section.has_alteration();
}
