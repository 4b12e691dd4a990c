//! Account record definitions

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Current version of the stored account structure. Accounts stamped with an
/// older (or missing) version get upgraded once at load time.
pub const SCHEMA_VERSION: &str = "1.0";

/// A stored account: credentials plus the per-account game-data log.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Account {
    pub username: String,

    // Plaintext by design: there is no server and no threat model here.
    pub password: String,

    /// Append-only log of opaque game entries. Older records may lack this
    /// field entirely; the default covers them until migration stamps them.
    #[serde(default)]
    pub game_data: Vec<Value>,

    #[serde(default)]
    pub version: String,
}

impl Account {
    pub fn new(username: &str, password: &str) -> Self {
        Account {
            username: username.to_string(),
            password: password.to_string(),
            game_data: Vec::new(),
            version: SCHEMA_VERSION.to_string(),
        }
    }

    /// True if this record predates the current schema and needs the
    /// one-time upgrade pass.
    pub fn needs_migration(&self) -> bool {
        self.version != SCHEMA_VERSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_is_current() {
        let account = Account::new("ann", "pw1");
        assert_eq!(account.username, "ann");
        assert!(account.game_data.is_empty());
        assert_eq!(account.version, SCHEMA_VERSION);
        assert!(!account.needs_migration());
    }

    #[test]
    fn test_missing_fields_deserialize_as_stale() {
        // A record written before game_data/version existed
        let account: Account =
            serde_json::from_str(r#"{"username":"bob","password":"pw"}"#).unwrap();
        assert!(account.game_data.is_empty());
        assert_eq!(account.version, "");
        assert!(account.needs_migration());
    }

    #[test]
    fn test_stale_version_keeps_data() {
        let account: Account = serde_json::from_str(
            r#"{"username":"bob","password":"pw","game_data":[{"score":5}],"version":"0.9"}"#,
        )
        .unwrap();
        assert_eq!(account.game_data.len(), 1);
        assert!(account.needs_migration());
    }
}
