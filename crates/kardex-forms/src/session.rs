//! The form session controller.
//!
//! A session owns exactly one in-progress record — freshly built by the
//! factory or cloned out of the store for editing — and is the only path
//! through which a record is mutated. The navigator guarantees at most one
//! session exists at a time.

use jiff::Timestamp;

use kardex_core::ids;

use crate::error::FormError;

/// A record kind the form session can drive.
pub trait FormRecord: Clone {
    type Update;

    /// Number of navigable form pages for this record kind.
    const PAGE_COUNT: u8;

    /// Prefix for identifiers assigned at commit time.
    const ID_PREFIX: &'static str;

    fn apply_update(&mut self, update: Self::Update);

    fn nurse_name(&self) -> &str;

    /// Whether this record has already been committed (carries an id).
    fn is_committed(&self) -> bool;

    /// Assign identity to a newly committed record. Never called twice.
    fn commit_identity(&mut self, id: String, at: Timestamp);
}

#[derive(Debug, Clone)]
pub struct FormSession<R: FormRecord> {
    draft: R,
    page: u8,
}

impl<R: FormRecord> FormSession<R> {
    /// Begin a session on a fresh (empty or prefilled) record.
    pub fn start_new(draft: R) -> Self {
        Self { draft, page: 1 }
    }

    /// Begin a session editing a committed record. The caller passes a
    /// clone; the stored original is untouched until the session submits.
    pub fn start_edit(record: R) -> Self {
        Self { draft: record, page: 1 }
    }

    pub fn draft(&self) -> &R {
        &self.draft
    }

    pub fn page(&self) -> u8 {
        self.page
    }

    /// Apply one field update. Unrelated fields are untouched; aggregate
    /// reconciliation for the affected section happens synchronously.
    pub fn apply(&mut self, update: R::Update) {
        self.draft.apply_update(update);
    }

    /// Page navigation never validates or commits; edits on every page
    /// survive going back and forth.
    pub fn next_page(&mut self) {
        if self.page < R::PAGE_COUNT {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Submit is only offered on the final page.
    pub fn can_submit(&self) -> bool {
        self.page == R::PAGE_COUNT
    }

    /// Validate and finalize the draft.
    ///
    /// On failure the draft is left exactly as it was so the nurse can
    /// correct and resubmit. On success, new records get an identifier and
    /// creation instant; edited records keep both.
    pub fn submit(&self) -> Result<R, FormError> {
        if self.draft.nurse_name().trim().is_empty() {
            return Err(FormError::MissingNurseName);
        }

        let mut record = self.draft.clone();
        if !record.is_committed() {
            record.commit_identity(ids::generate(R::ID_PREFIX), Timestamp::now());
        }
        Ok(record)
    }

    /// Discard the in-progress draft. No store side effects.
    pub fn cancel(self) {}
}
