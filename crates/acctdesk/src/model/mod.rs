//! UI state that lives outside the account store.

mod account_form;

pub use account_form::AccountFormState;
