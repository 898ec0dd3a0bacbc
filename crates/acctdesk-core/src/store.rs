//! Reactive account store.
//!
//! Holds the in-memory account list, publishes every change to subscribers
//! and writes the full list back to storage after each mutation.

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::account::{Account, AccountId, AccountLabel, AccountType, parse_accounts};
use crate::config::{DEFAULT_STORAGE_KEY, StoreConfig};
use crate::storage::{FileStorage, Storage};
use crate::Result;

/// The account list shared by the UI.
pub struct AccountStore {
    accounts: Vec<Account>,
    /// `None` when running detached; nothing is persisted then.
    storage: Option<Box<dyn Storage>>,
    key: String,
    changes: watch::Sender<Vec<Account>>,
}

impl AccountStore {
    /// Open the store described by `config`.
    ///
    /// A config without a data directory yields a detached store.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be read.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        match &config.data_dir {
            Some(dir) => Self::load(FileStorage::new(dir), config.storage_key.clone()),
            None => {
                info!("No data directory configured, accounts will not be saved");
                Ok(Self::detached())
            }
        }
    }

    /// Load the account list stored under `key`.
    ///
    /// Malformed stored data is not an error: it is sanitized, and an
    /// unparseable list is treated as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to read.
    pub fn load(storage: impl Storage + 'static, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let accounts = storage
            .get_item(&key)?
            .map(|raw| parse_accounts(&raw))
            .unwrap_or_default();
        info!("Loaded {} accounts", accounts.len());

        Ok(Self::from_parts(accounts, Some(Box::new(storage)), key))
    }

    /// Create an empty store that never persists.
    #[must_use]
    pub fn detached() -> Self {
        Self::from_parts(Vec::new(), None, DEFAULT_STORAGE_KEY.to_string())
    }

    fn from_parts(accounts: Vec<Account>, storage: Option<Box<dyn Storage>>, key: String) -> Self {
        let (changes, _) = watch::channel(accounts.clone());
        Self {
            accounts,
            storage,
            key,
            changes,
        }
    }

    /// Whether this store writes to storage.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.storage.is_some()
    }

    /// All accounts, in insertion order.
    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Look up an account by id.
    #[must_use]
    pub fn get(&self, id: &AccountId) -> Option<&Account> {
        self.accounts.iter().find(|account| &account.id == id)
    }

    /// Number of accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store holds no accounts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Watch the account list. The receiver sees the full list after every
    /// mutation.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Account>> {
        self.changes.subscribe()
    }

    /// Append a blank local account and return its id.
    pub fn add_account(&mut self) -> AccountId {
        let mut account = Account::blank();
        while self.get(&account.id).is_some() {
            account.id = AccountId::generate();
        }
        let id = account.id.clone();
        self.accounts.push(account);
        debug!("Added account {id}");
        self.commit();
        id
    }

    /// Remove the account with `id`. Unknown ids are ignored.
    ///
    /// Returns whether an account was removed.
    pub fn remove_account(&mut self, id: &AccountId) -> bool {
        let before = self.accounts.len();
        self.accounts.retain(|account| &account.id != id);
        if self.accounts.len() == before {
            debug!("Remove ignored, no account {id}");
            return false;
        }
        debug!("Removed account {id}");
        self.commit();
        true
    }

    /// Edit an account in place.
    ///
    /// The id cannot be changed through `edit`, and the password invariant is
    /// restored afterwards. Nothing is published or persisted unless the
    /// account actually changed.
    ///
    /// Returns whether the account changed.
    pub fn update(&mut self, id: &AccountId, edit: impl FnOnce(&mut Account)) -> bool {
        let Some(account) = self.accounts.iter_mut().find(|account| &account.id == id) else {
            debug!("Update ignored, no account {id}");
            return false;
        };

        let before = account.clone();
        edit(&mut *account);
        account.id.clone_from(&before.id);
        account.normalize();
        if *account == before {
            return false;
        }
        self.commit();
        true
    }

    /// Replace an account's labels from `;`-separated editor input.
    pub fn set_labels_from_input(&mut self, id: &AccountId, input: &str) -> bool {
        let labels = AccountLabel::parse_list(input);
        self.update(id, |account| account.labels = labels)
    }

    /// Change an account's type.
    pub fn set_type(&mut self, id: &AccountId, kind: AccountType) -> bool {
        self.update(id, |account| account.set_type(kind))
    }

    /// Change an account's login.
    pub fn set_login(&mut self, id: &AccountId, login: impl Into<String>) -> bool {
        self.update(id, |account| account.login = login.into())
    }

    /// Change an account's password. Ignored for LDAP accounts.
    pub fn set_password(&mut self, id: &AccountId, password: impl Into<String>) -> bool {
        self.update(id, |account| {
            account.set_password(password);
        })
    }

    /// Write the full account list to storage.
    ///
    /// Called automatically after every mutation; a detached store does
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the storage write fails.
    pub fn persist(&self) -> Result<()> {
        let Some(storage) = &self.storage else {
            return Ok(());
        };
        let json = serde_json::to_string(&self.accounts)?;
        storage.set_item(&self.key, &json)?;
        debug!("Persisted {} accounts", self.accounts.len());
        Ok(())
    }

    /// Publish the current list and persist it.
    fn commit(&self) {
        self.changes.send_replace(self.accounts.clone());
        if let Err(e) = self.persist() {
            warn!("Failed to save accounts: {e}");
        }
    }
}
