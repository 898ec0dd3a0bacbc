//! Coercion of persisted account records.
//!
//! Stored data may have been written by an older build or edited by hand, so
//! every field is checked individually. Records that are not JSON objects are
//! dropped; anything else is coerced into a valid [`Account`].

use std::collections::HashSet;

use serde_json::Value;
use tracing::{debug, warn};

use super::model::{Account, AccountId, AccountLabel, AccountType};

/// Parse a persisted account list.
///
/// Never fails: input that is not a JSON array yields an empty list, and
/// malformed elements are skipped.
#[must_use]
pub fn parse_accounts(raw: &str) -> Vec<Account> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    let parsed: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("Stored account list is not valid JSON, starting empty: {e}");
            return Vec::new();
        }
    };

    let Some(items) = parsed.as_array() else {
        warn!("Stored account list is not a JSON array, starting empty");
        return Vec::new();
    };

    let mut seen = HashSet::with_capacity(items.len());
    let mut accounts = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Some(mut account) = sanitize_account(item) else {
            debug!("Dropping malformed account record at index {index}");
            continue;
        };
        if !seen.insert(account.id.clone()) {
            debug!(
                "Duplicate account id {} at index {index}, assigning a new one",
                account.id
            );
            account.id = AccountId::generate();
            seen.insert(account.id.clone());
        }
        accounts.push(account);
    }

    accounts
}

/// Coerce a single stored record into an [`Account`].
///
/// Returns `None` only when the record is not a JSON object.
#[must_use]
pub fn sanitize_account(raw: &Value) -> Option<Account> {
    let data = raw.as_object()?;

    let kind = data
        .get("type")
        .and_then(Value::as_str)
        .and_then(AccountType::from_tag)
        .unwrap_or_default();

    let labels = data
        .get("labels")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("text")?.as_str().map(AccountLabel::new))
                .collect()
        })
        .unwrap_or_default();

    let login = data
        .get("login")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    // LDAP passwords are never kept, whatever was stored
    let password = kind.stores_password().then(|| {
        data.get("password")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    });

    let id = data
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map_or_else(AccountId::generate, AccountId::new);

    Some(Account {
        id,
        labels,
        kind,
        login,
        password,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::redundant_clone)]
mod tests {
    use serde_json::json;

    use super::*;

    mod parse_tests {
        use super::*;

        #[test]
        fn malformed_json_yields_empty() {
            assert!(parse_accounts("{not json").is_empty());
            assert!(parse_accounts("[{\"id\": ").is_empty());
        }

        #[test]
        fn blank_input_yields_empty() {
            assert!(parse_accounts("").is_empty());
            assert!(parse_accounts("   ").is_empty());
        }

        #[test]
        fn non_array_yields_empty() {
            assert!(parse_accounts("{\"id\": \"a\"}").is_empty());
            assert!(parse_accounts("42").is_empty());
            assert!(parse_accounts("null").is_empty());
        }

        #[test]
        fn non_object_elements_are_dropped() {
            let raw = json!([
                1,
                "text",
                null,
                [],
                { "id": "keep", "type": "local", "login": "a", "password": "b", "labels": [] },
            ])
            .to_string();
            let accounts = parse_accounts(&raw);
            assert_eq!(accounts.len(), 1);
            assert_eq!(accounts[0].id.as_str(), "keep");
        }

        #[test]
        fn duplicate_ids_are_reassigned() {
            let raw = json!([
                { "id": "same", "login": "first" },
                { "id": "same", "login": "second" },
            ])
            .to_string();
            let accounts = parse_accounts(&raw);
            assert_eq!(accounts.len(), 2);
            assert_eq!(accounts[0].id.as_str(), "same");
            assert_eq!(accounts[0].login, "first");
            assert_ne!(accounts[1].id, accounts[0].id);
            assert_eq!(accounts[1].login, "second");
        }

        #[test]
        fn preserves_order() {
            let raw = json!([{ "id": "b" }, { "id": "a" }, { "id": "c" }]).to_string();
            let ids: Vec<_> = parse_accounts(&raw)
                .into_iter()
                .map(|account| account.id.to_string())
                .collect();
            assert_eq!(ids, ["b", "a", "c"]);
        }
    }

    mod sanitize_tests {
        use super::*;

        #[test]
        fn well_formed_record_is_kept() {
            let account = sanitize_account(&json!({
                "id": "acc-1",
                "labels": [{ "text": "ops" }, { "text": "prod" }],
                "type": "local",
                "login": "jdoe",
                "password": "hunter2",
            }))
            .unwrap();
            assert_eq!(account.id.as_str(), "acc-1");
            assert_eq!(
                account.labels,
                vec![AccountLabel::new("ops"), AccountLabel::new("prod")]
            );
            assert_eq!(account.kind, AccountType::Local);
            assert_eq!(account.login, "jdoe");
            assert_eq!(account.password.as_deref(), Some("hunter2"));
        }

        #[test]
        fn unknown_type_becomes_local() {
            for kind in [json!("admin"), json!("LDAP"), json!(1), json!(null)] {
                let account = sanitize_account(&json!({ "id": "x", "type": kind })).unwrap();
                assert_eq!(account.kind, AccountType::Local);
                assert_eq!(account.password.as_deref(), Some(""));
            }
        }

        #[test]
        fn ldap_password_is_dropped() {
            let account = sanitize_account(&json!({
                "id": "x",
                "type": "ldap",
                "password": "should-not-survive",
            }))
            .unwrap();
            assert_eq!(account.kind, AccountType::Ldap);
            assert_eq!(account.password, None);
        }

        #[test]
        fn bad_labels_are_filtered() {
            let account = sanitize_account(&json!({
                "id": "x",
                "labels": [{ "text": "ok" }, { "text": 5 }, "bare", null, { "other": "x" }],
            }))
            .unwrap();
            assert_eq!(account.labels, vec![AccountLabel::new("ok")]);

            let account = sanitize_account(&json!({ "id": "x", "labels": "ok" })).unwrap();
            assert!(account.labels.is_empty());
        }

        #[test]
        fn non_string_fields_are_coerced() {
            let account = sanitize_account(&json!({
                "id": "x",
                "login": 42,
                "password": false,
            }))
            .unwrap();
            assert_eq!(account.login, "");
            assert_eq!(account.password.as_deref(), Some(""));
        }

        #[test]
        fn missing_or_empty_id_gets_fresh_one() {
            let missing = sanitize_account(&json!({})).unwrap();
            assert!(!missing.id.as_str().is_empty());

            let empty = sanitize_account(&json!({ "id": "" })).unwrap();
            assert!(!empty.id.as_str().is_empty());

            let numeric = sanitize_account(&json!({ "id": 7 })).unwrap();
            assert_ne!(numeric.id.as_str(), "7");
        }

        #[test]
        fn non_object_is_rejected() {
            assert!(sanitize_account(&json!("acc")).is_none());
            assert!(sanitize_account(&json!([])).is_none());
            assert!(sanitize_account(&json!(null)).is_none());
        }
    }
}
