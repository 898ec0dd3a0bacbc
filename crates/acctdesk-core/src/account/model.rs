//! Account model types.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Separator between labels in the single-line label editor.
const LABEL_SEPARATOR: char = ';';

/// Unique identifier for an account.
///
/// Persisted identifiers are opaque strings. Freshly generated ones are
/// UUID v4 strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Wrap an existing identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Credential type of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Directory account; the password is not stored locally.
    Ldap,
    /// Local account with a stored password.
    #[default]
    Local,
}

impl AccountType {
    /// Every account type, in display order.
    pub const ALL: [Self; 2] = [Self::Ldap, Self::Local];

    /// Tag used in the persisted format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ldap => "ldap",
            Self::Local => "local",
        }
    }

    /// Parse a persisted tag. Matching is exact.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }

    /// Get display name for the account type.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Ldap => "LDAP",
            Self::Local => "Local",
        }
    }

    /// Whether accounts of this type keep a password.
    #[must_use]
    pub const fn stores_password(self) -> bool {
        matches!(self, Self::Local)
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A free-text tag attached to an account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountLabel {
    /// Label text.
    pub text: String,
}

impl AccountLabel {
    /// Create a label.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Parse the `;`-separated label editor input.
    ///
    /// Entries are trimmed and empty entries are dropped.
    #[must_use]
    pub fn parse_list(input: &str) -> Vec<Self> {
        input
            .split(LABEL_SEPARATOR)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(Self::new)
            .collect()
    }

    /// Format labels for the label editor.
    #[must_use]
    pub fn format_list(labels: &[Self]) -> String {
        labels
            .iter()
            .map(|label| label.text.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A stored credential record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// Free-text tags.
    pub labels: Vec<AccountLabel>,
    /// Credential type.
    #[serde(rename = "type")]
    pub kind: AccountType,
    /// Login name.
    pub login: String,
    /// Password; `None` exactly when `kind` is [`AccountType::Ldap`].
    pub password: Option<String>,
}

impl Account {
    /// Create a blank local account with a fresh identifier.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            id: AccountId::generate(),
            labels: Vec::new(),
            kind: AccountType::Local,
            login: String::new(),
            password: Some(String::new()),
        }
    }

    /// Change the account type.
    ///
    /// Switching to LDAP discards the password; switching to local starts
    /// from an empty one.
    pub fn set_type(&mut self, kind: AccountType) {
        if self.kind == kind {
            return;
        }
        self.kind = kind;
        self.password = kind.stores_password().then(String::new);
    }

    /// Set the password. Returns `false` (and changes nothing) for LDAP
    /// accounts.
    pub fn set_password(&mut self, password: impl Into<String>) -> bool {
        if !self.kind.stores_password() {
            return false;
        }
        self.password = Some(password.into());
        true
    }

    /// Re-establish the password invariant after a direct field edit.
    pub fn normalize(&mut self) {
        match self.kind {
            AccountType::Ldap => self.password = None,
            AccountType::Local => {
                if self.password.is_none() {
                    self.password = Some(String::new());
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::redundant_clone)]
mod tests {
    use super::*;

    mod account_id_tests {
        use super::*;

        #[test]
        fn generate_is_unique() {
            let a = AccountId::generate();
            let b = AccountId::generate();
            assert_ne!(a, b);
            assert!(!a.as_str().is_empty());
        }

        #[test]
        fn display() {
            let id = AccountId::new("acc-1");
            assert_eq!(format!("{id}"), "acc-1");
        }

        #[test]
        fn serializes_as_plain_string() {
            let id = AccountId::new("acc-1");
            assert_eq!(serde_json::to_string(&id).unwrap(), "\"acc-1\"");
        }
    }

    mod account_type_tests {
        use super::*;

        #[test]
        fn default_is_local() {
            assert_eq!(AccountType::default(), AccountType::Local);
        }

        #[test]
        fn tags() {
            assert_eq!(AccountType::from_tag("ldap"), Some(AccountType::Ldap));
            assert_eq!(AccountType::from_tag("local"), Some(AccountType::Local));
            assert_eq!(AccountType::from_tag("LDAP"), None);
            assert_eq!(AccountType::from_tag(""), None);
            for kind in AccountType::ALL {
                assert_eq!(AccountType::from_tag(kind.as_str()), Some(kind));
            }
        }

        #[test]
        fn display_names() {
            assert_eq!(AccountType::Ldap.to_string(), "LDAP");
            assert_eq!(AccountType::Local.to_string(), "Local");
        }

        #[test]
        fn serde_uses_lowercase_tags() {
            assert_eq!(
                serde_json::to_string(&AccountType::Ldap).unwrap(),
                "\"ldap\""
            );
            let kind: AccountType = serde_json::from_str("\"local\"").unwrap();
            assert_eq!(kind, AccountType::Local);
        }
    }

    mod label_tests {
        use super::*;

        #[test]
        fn parse_list_trims_and_drops_empty() {
            let labels = AccountLabel::parse_list(" admin ;; ops;  ");
            assert_eq!(
                labels,
                vec![AccountLabel::new("admin"), AccountLabel::new("ops")]
            );
        }

        #[test]
        fn parse_list_empty_input() {
            assert!(AccountLabel::parse_list("").is_empty());
            assert!(AccountLabel::parse_list(" ; ").is_empty());
        }

        #[test]
        fn stored_label_with_separator_splits_when_reparsed() {
            let labels = vec![AccountLabel::new("a;b")];
            let reparsed = AccountLabel::parse_list(&AccountLabel::format_list(&labels));
            assert_eq!(
                reparsed,
                vec![AccountLabel::new("a"), AccountLabel::new("b")]
            );
        }

        #[test]
        fn format_list_joins() {
            let labels = vec![AccountLabel::new("a"), AccountLabel::new("b c")];
            assert_eq!(AccountLabel::format_list(&labels), "a; b c");
            assert_eq!(AccountLabel::format_list(&[]), "");
        }
    }

    mod account_tests {
        use super::*;

        #[test]
        fn blank_is_local_with_empty_password() {
            let account = Account::blank();
            assert_eq!(account.kind, AccountType::Local);
            assert!(account.labels.is_empty());
            assert!(account.login.is_empty());
            assert_eq!(account.password.as_deref(), Some(""));
        }

        #[test]
        fn switching_to_ldap_clears_password() {
            let mut account = Account::blank();
            account.set_password("secret");
            account.set_type(AccountType::Ldap);
            assert_eq!(account.password, None);

            account.set_type(AccountType::Local);
            assert_eq!(account.password.as_deref(), Some(""));
        }

        #[test]
        fn same_type_keeps_password() {
            let mut account = Account::blank();
            account.set_password("secret");
            account.set_type(AccountType::Local);
            assert_eq!(account.password.as_deref(), Some("secret"));
        }

        #[test]
        fn ldap_ignores_password() {
            let mut account = Account::blank();
            account.set_type(AccountType::Ldap);
            assert!(!account.set_password("secret"));
            assert_eq!(account.password, None);
        }

        #[test]
        fn normalize_restores_invariant() {
            let mut account = Account::blank();
            account.kind = AccountType::Ldap;
            account.normalize();
            assert_eq!(account.password, None);

            account.kind = AccountType::Local;
            account.normalize();
            assert_eq!(account.password.as_deref(), Some(""));
        }

        #[test]
        fn serialized_shape() {
            let mut account = Account::blank();
            account.id = AccountId::new("acc-1");
            account.labels = vec![AccountLabel::new("ops")];
            account.login = "jdoe".to_string();
            account.set_type(AccountType::Ldap);

            let value = serde_json::to_value(&account).unwrap();
            assert_eq!(
                value,
                serde_json::json!({
                    "id": "acc-1",
                    "labels": [{ "text": "ops" }],
                    "type": "ldap",
                    "login": "jdoe",
                    "password": null,
                })
            );
        }
    }
}
