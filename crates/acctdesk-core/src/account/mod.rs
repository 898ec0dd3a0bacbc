//! Account management module.
//!
//! Provides the account record types and the coercion rules applied when
//! records are read back from storage.

mod model;
mod sanitize;

pub use model::{Account, AccountId, AccountLabel, AccountType};
pub use sanitize::{parse_accounts, sanitize_account};
