use serde::{Deserialize, Serialize};
use sled::Db;
use std::path::Path;

use crate::error::GatehouseError;

/// Stable keys for the two persisted records.
pub const ACCOUNTS_KEY: &str = "accounts";
pub const SESSION_KEY: &str = "session";

/// Embedded key-value store. Values are whole-record overwrites, serialized
/// as JSON so older records with missing fields still deserialize via
/// `#[serde(default)]`.
pub struct Storage {
    db: Db,
}

impl Storage {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, GatehouseError> {
        let db = sled::open(path)?;
        Ok(Storage { db })
    }

    // Generic Helper: Put
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<(), GatehouseError> {
        let serialized = serde_json::to_vec(value)?;
        self.db.insert(key.as_bytes(), serialized)?;
        self.db.flush()?;
        Ok(())
    }

    // Generic Helper: Get
    pub fn get<T: for<'a> Deserialize<'a>>(&self, key: &str) -> Result<Option<T>, GatehouseError> {
        match self.db.get(key.as_bytes())? {
            Some(data) => {
                let deserialized = serde_json::from_slice(&data)?;
                Ok(Some(deserialized))
            }
            None => Ok(None),
        }
    }

    pub fn remove(&self, key: &str) -> Result<(), GatehouseError> {
        self.db.remove(key.as_bytes())?;
        self.db.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_remove() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(dir.path()).unwrap();

        storage.put("greeting", &"hello".to_string()).unwrap();
        let value: Option<String> = storage.get("greeting").unwrap();
        assert_eq!(value, Some("hello".to_string()));

        storage.remove("greeting").unwrap();
        let value: Option<String> = storage.get("greeting").unwrap();
        assert_eq!(value, None);

        // Removing a missing key is fine
        storage.remove("greeting").unwrap();
    }

    #[test]
    fn test_get_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(dir.path()).unwrap();
        let value: Option<Vec<u64>> = storage.get("nothing").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let storage = Storage::open(dir.path()).unwrap();
            storage.put("numbers", &vec![1u64, 2, 3]).unwrap();
        }
        let storage = Storage::open(dir.path()).unwrap();
        let value: Option<Vec<u64>> = storage.get("numbers").unwrap();
        assert_eq!(value, Some(vec![1, 2, 3]));
    }
}
