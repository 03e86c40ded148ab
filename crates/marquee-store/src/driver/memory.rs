// marquee/marquee-store
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::Driver;
use crate::StoreError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    JSON(#[from] serde_json::Error),
}

impl StoreError for Error {}

/// Keeps all values in memory. Nothing survives the process.
#[derive(Default)]
pub struct InMemoryDriver {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver that already contains the given raw values.
    pub fn with_values<K: Into<String>, V: Into<String>>(
        values: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Self {
            values: RwLock::new(
                values
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    pub fn raw_value(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
impl Driver for InMemoryDriver {
    type Error = Error;

    async fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.values.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), Self::Error> {
        self.values.write().insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), Self::Error> {
        self.values.write().remove(key);
        Ok(())
    }
}
