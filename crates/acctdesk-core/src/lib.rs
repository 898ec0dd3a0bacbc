//! # acctdesk-core
//!
//! Core logic for the `AcctDesk` account editor.
//!
//! This crate provides:
//! - Account model (LDAP and local credentials with free-text labels)
//! - Load-path sanitization of persisted records
//! - Key/value storage backends (in-memory and file-backed)
//! - A reactive account store that persists after every change
//! - Store configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod account;
pub mod config;
mod error;
pub mod storage;
pub mod store;

pub use account::{Account, AccountId, AccountLabel, AccountType, parse_accounts};
pub use config::StoreConfig;
pub use error::{Error, Result};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::AccountStore;
