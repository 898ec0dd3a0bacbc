//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use acctdesk_core::{AccountId, AccountType};

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    /// Append a blank account.
    AddAccount,
    /// Remove an account.
    RemoveAccount(AccountId),
    /// Edit a field of an account.
    Account(AccountId, AccountMessage),
    /// Hide the error banner.
    DismissError,
}

/// Field edits for a single account row.
#[derive(Debug, Clone)]
pub enum AccountMessage {
    /// Label editor text changed.
    LabelsChanged(String),
    /// Enter pressed in the label editor.
    LabelsSubmitted,
    /// Account type picked.
    TypeSelected(AccountType),
    /// Login changed.
    LoginChanged(String),
    /// Password changed.
    PasswordChanged(String),
}
