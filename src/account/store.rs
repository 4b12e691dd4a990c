//! Account storage and session management

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::types::{Account, SCHEMA_VERSION};
use crate::error::GatehouseError;
use crate::storage::{Storage, ACCOUNTS_KEY, SESSION_KEY};

/// Account store: the flat list of registered accounts plus the single
/// active-session reference. Two states, LoggedOut and LoggedIn; `login`
/// is the only way in and `logout` the only way out.
pub struct AccountStore {
    // Insertion order, never reordered. Usernames are unique.
    accounts: Vec<Account>,
    // Username of the active account, resolved against `accounts`. Kept as a
    // reference rather than a copy so game-data writes always land on the
    // one canonical record.
    session: Option<String>,
    storage: Arc<Storage>,
}

impl AccountStore {
    /// Load the store from persistence. Absent keys mean an empty list and
    /// no session. Runs the one-time schema migration pass and persists the
    /// list once iff any account was touched.
    pub fn open(storage: Arc<Storage>) -> Result<Self, GatehouseError> {
        let accounts: Vec<Account> = storage.get(ACCOUNTS_KEY)?.unwrap_or_default();
        let session: Option<String> = storage.get(SESSION_KEY)?;

        let mut store = AccountStore {
            accounts,
            session,
            storage,
        };

        // A persisted session must still name a registered account.
        if let Some(name) = store.session.take() {
            if store.accounts.iter().any(|a| a.username == name) {
                store.session = Some(name);
            } else {
                warn!("Session references unknown account '{}', clearing it", name);
                store.storage.remove(SESSION_KEY)?;
            }
        }

        store.migrate()?;

        info!(
            "Account store loaded: {} account(s), session {}",
            store.accounts.len(),
            if store.session.is_some() { "active" } else { "none" }
        );
        Ok(store)
    }

    /// Stamp stale records with the current schema version. `serde(default)`
    /// already filled in a missing `game_data`, so the upgrade is just the
    /// version stamp. No-op when every record is current.
    fn migrate(&mut self) -> Result<(), GatehouseError> {
        let mut touched = 0usize;
        for account in &mut self.accounts {
            if account.needs_migration() {
                account.version = SCHEMA_VERSION.to_string();
                touched += 1;
            }
        }
        if touched > 0 {
            info!("Migrated {} account(s) to schema {}", touched, SCHEMA_VERSION);
            self.storage.put(ACCOUNTS_KEY, &self.accounts)?;
        }
        Ok(())
    }

    pub fn has_active_session(&self) -> bool {
        self.session.is_some()
    }

    /// Register a new account. Does not establish a session.
    pub fn register(&mut self, username: &str, password: &str) -> Result<(), GatehouseError> {
        if self.accounts.iter().any(|a| a.username == username) {
            return Err(GatehouseError::DuplicateUsername);
        }
        self.accounts.push(Account::new(username, password));
        self.storage.put(ACCOUNTS_KEY, &self.accounts)?;
        info!("Registered account '{}'", username);
        Ok(())
    }

    /// Log in with exact-match credentials. A failed attempt leaves any
    /// existing session untouched.
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), GatehouseError> {
        let matched = self
            .accounts
            .iter()
            .any(|a| a.username == username && a.password == password);
        if !matched {
            return Err(GatehouseError::InvalidCredentials);
        }
        self.session = Some(username.to_string());
        self.storage.put(SESSION_KEY, &username)?;
        info!("Session opened for '{}'", username);
        Ok(())
    }

    /// Clear the session. Idempotent: logging out with no session is fine.
    /// The in-memory state is cleared before the persisted key so the
    /// LoggedIn -> LoggedOut transition is unconditional.
    pub fn logout(&mut self) -> Result<(), GatehouseError> {
        self.session = None;
        self.storage.remove(SESSION_KEY)?;
        debug!("Session cleared");
        Ok(())
    }

    /// The active account, resolved in memory. No storage read.
    pub fn current_account(&self) -> Option<&Account> {
        let name = self.session.as_ref()?;
        self.accounts.iter().find(|a| &a.username == name)
    }

    /// Append one entry to the active account's game-data log. No-op when
    /// logged out.
    pub fn append_game_data(&mut self, entry: Value) -> Result<(), GatehouseError> {
        let Some(name) = self.session.clone() else {
            debug!("append_game_data ignored: no active session");
            return Ok(());
        };
        if let Some(account) = self.accounts.iter_mut().find(|a| a.username == name) {
            account.game_data.push(entry);
            self.storage.put(ACCOUNTS_KEY, &self.accounts)?;
        }
        Ok(())
    }

    /// Registered usernames, in insertion order.
    pub fn account_names(&self) -> Vec<String> {
        self.accounts.iter().map(|a| a.username.clone()).collect()
    }

    #[cfg(test)]
    fn accounts(&self) -> &[Account] {
        &self.accounts
    }
}
