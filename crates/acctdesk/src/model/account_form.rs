//! Account form state.

use std::collections::HashMap;

use acctdesk_core::{Account, AccountId, AccountLabel};

/// Editing state for the account form.
///
/// Labels are edited as one `;`-separated line. The store only keeps the
/// parsed labels, so the raw text is held here while the user is typing;
/// otherwise a trailing `;` would vanish on every keystroke.
#[derive(Debug, Clone, Default)]
pub struct AccountFormState {
    label_drafts: HashMap<AccountId, String>,
    /// Error shown above the form.
    pub error: Option<String>,
}

impl AccountFormState {
    /// Creates form state with an optional startup error.
    #[must_use]
    pub fn new(error: Option<String>) -> Self {
        Self {
            label_drafts: HashMap::new(),
            error,
        }
    }

    /// Text to show in the label editor for `account`.
    #[must_use]
    pub fn label_text(&self, account: &Account) -> String {
        self.label_drafts
            .get(&account.id)
            .cloned()
            .unwrap_or_else(|| AccountLabel::format_list(&account.labels))
    }

    /// Records the raw label editor text for `id`.
    pub fn set_label_draft(&mut self, id: AccountId, text: String) {
        self.label_drafts.insert(id, text);
    }

    /// Drops the raw label text so the canonical form is shown again.
    pub fn clear_label_draft(&mut self, id: &AccountId) {
        self.label_drafts.remove(id);
    }

    /// Forgets all editing state for a removed account.
    pub fn forget(&mut self, id: &AccountId) {
        self.clear_label_draft(id);
    }
}
