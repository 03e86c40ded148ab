// marquee/marquee-store
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::driver::Driver;

pub struct Store<D: Driver> {
    driver: Arc<D>,
}

impl<D: Driver> Clone for Store<D> {
    fn clone(&self) -> Self {
        Store {
            driver: self.driver.clone(),
        }
    }
}

impl<D: Driver> Store<D> {
    pub fn new(driver: D) -> Self {
        Self {
            driver: Arc::new(driver),
        }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }
}

impl<D: Driver> Store<D> {
    pub async fn get<V: DeserializeOwned>(&self, key: &str) -> Result<Option<V>, D::Error> {
        let Some(raw_value) = self.driver.get(key).await? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw_value)?))
    }

    pub async fn set<V: Serialize + ?Sized + Sync>(
        &self,
        key: &str,
        value: &V,
    ) -> Result<(), D::Error> {
        let raw_value = serde_json::to_string(value)?;
        self.driver.set(key, raw_value).await
    }

    pub async fn delete(&self, key: &str) -> Result<(), D::Error> {
        self.driver.delete(key).await
    }

    pub async fn contains_key(&self, key: &str) -> Result<bool, D::Error> {
        Ok(self.driver.get(key).await?.is_some())
    }
}
